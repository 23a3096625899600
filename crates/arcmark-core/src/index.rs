//! Id → record lookup, built once per conversion.

use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::export::Record;

/// Immutable index over the `items` records. First occurrence of an id wins.
#[derive(Debug, Default)]
pub struct RecordIndex {
    records: HashMap<String, Record>,
}

impl RecordIndex {
    pub fn build<I>(records: I, sink: &mut dyn DiagnosticSink) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut map = HashMap::new();
        for record in records {
            match map.entry(record.id.clone()) {
                MapEntry::Occupied(_) => sink.report(Diagnostic::DuplicateId { id: record.id }),
                MapEntry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }
        Self { records: map }
    }

    /// Absence is a normal outcome: the referencing edge is dropped.
    pub fn lookup(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
