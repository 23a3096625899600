//! Input boundary: JSON text → sidebar records.
//!
//! The export nests the useful data at `sidebar.containers[1]`, whose `items`
//! holds every tab/folder/container record and whose `spaces` holds the
//! top-level spaces. Anything else about the shape is fatal for the run.

mod parse;

pub use parse::{Entry, Payload, RawSpace, Record};

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConvertError;

/// Parses export text into a JSON document.
pub fn parse_export(text: &str) -> Result<Value, ConvertError> {
    Ok(serde_json::from_str(text)?)
}

/// Records and spaces pulled out of a sidebar export, markers already removed.
#[derive(Debug, Clone, Default)]
pub struct SidebarPayload {
    pub items: Vec<Record>,
    pub spaces: Vec<RawSpace>,
    /// Non-record slots dropped from `items`.
    pub item_markers: usize,
    /// Non-record slots dropped from `spaces`.
    pub space_markers: usize,
}

impl SidebarPayload {
    pub fn from_document(doc: &Value) -> Result<Self, ConvertError> {
        let sidebar = doc
            .get("sidebar")
            .filter(|s| s.is_object())
            .ok_or_else(|| ConvertError::shape("sidebar"))?;
        let containers = sidebar
            .get("containers")
            .and_then(Value::as_array)
            .ok_or_else(|| ConvertError::shape("sidebar.containers"))?;
        let block = containers
            .get(1)
            .filter(|c| c.is_object())
            .ok_or_else(|| ConvertError::shape("sidebar.containers[1]"))?;
        let items = block
            .get("items")
            .filter(|v| v.is_array())
            .ok_or_else(|| ConvertError::shape("sidebar.containers[1].items"))?;
        let spaces = block
            .get("spaces")
            .filter(|v| v.is_array())
            .ok_or_else(|| ConvertError::shape("sidebar.containers[1].spaces"))?;

        let (items, item_markers) = split_entries::<Record>(items)
            .map_err(|_| ConvertError::shape("sidebar.containers[1].items"))?;
        let (spaces, space_markers) = split_entries::<RawSpace>(spaces)
            .map_err(|_| ConvertError::shape("sidebar.containers[1].spaces"))?;

        Ok(Self {
            items,
            spaces,
            item_markers,
            space_markers,
        })
    }
}

/// Splits an array into records, counting the marker slots.
fn split_entries<T>(array: &Value) -> Result<(Vec<T>, usize), serde_json::Error>
where
    T: for<'de> Deserialize<'de>,
{
    let entries = Vec::<Entry<T>>::deserialize(array)?;
    let mut records = Vec::with_capacity(entries.len());
    let mut markers = 0;
    for entry in entries {
        match entry {
            Entry::Record(r) => records.push(r),
            Entry::Marker(_) => markers += 1,
        }
    }
    Ok((records, markers))
}
