//! Serde structures for the Arc `StorableSidebar.json` export.
//!
//! Only the fields the converter reads are modelled. Array slots that are not
//! records (the export interleaves string type tags with objects) land in
//! [`Entry::Marker`] and are filtered by the caller.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One slot of `items` or `spaces`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Entry<T> {
    Record(T),
    Marker(Value),
}

/// Payload kind, decided once when the record is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Payload {
    Tab {
        saved_url: Option<String>,
        saved_title: Option<String>,
    },
    List,
    #[default]
    Unknown,
}

/// An entry from `items`: tab, folder (list), container, or anything else.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: Option<String>,
    #[serde(default, rename = "childrenIds", deserialize_with = "string_ids")]
    pub children_ids: Vec<String>,
    #[serde(default, rename = "data", deserialize_with = "payload_from_data")]
    pub payload: Payload,
}

/// An entry from `spaces`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpace {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: Option<String>,
    #[serde(default, rename = "containerIDs", deserialize_with = "null_as_empty")]
    pub container_ids: Vec<Value>,
    #[serde(default, rename = "newContainerIDs", deserialize_with = "null_as_empty")]
    pub new_container_ids: Vec<Value>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(values)) => values,
        _ => Vec::new(),
    })
}

/// Keeps only the string entries of `childrenIds`.
fn string_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(null_as_empty(deserializer)?
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

fn payload_from_data<'de, D>(deserializer: D) -> Result<Payload, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map(classify_payload).unwrap_or_default())
}

/// `data.tab` (an object) wins over `data.list`; anything else is unknown.
pub(crate) fn classify_payload(data: &Value) -> Payload {
    if let Some(tab) = data.get("tab").filter(|t| t.is_object()) {
        let text = |key: &str| tab.get(key).and_then(Value::as_str).map(String::from);
        return Payload::Tab {
            saved_url: text("savedURL"),
            saved_title: text("savedTitle"),
        };
    }
    match data.get("list") {
        Some(Value::Null) | None => Payload::Unknown,
        Some(_) => Payload::List,
    }
}
