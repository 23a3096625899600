//! Diagnostic sink for recoverable conditions.
//!
//! The core never logs directly; it reports skipped or odd input through a
//! caller-supplied [`DiagnosticSink`]. The CLI plugs in [`TracingSink`];
//! tests collect into a `Vec<Diagnostic>`.

use std::fmt;

/// A recoverable condition encountered while building the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A later record reused an id already in the index; the first one is kept.
    DuplicateId { id: String },
    /// A reference did not resolve in the index and was dropped.
    UnresolvedId { id: String, referenced_by: String },
    /// A record carried neither a tab nor a list payload.
    UnknownRecord { id: String },
    /// A list nested inside a folder; only direct tabs are expanded.
    NestedListSkipped { id: String, parent: String },
    /// Non-record entries (type tags, malformed objects) filtered at ingestion.
    MarkersSkipped { section: &'static str, count: usize },
    /// A `newContainerIDs` entry that carried no usable identifier.
    UnusableContainerEntry { space: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateId { id } => write!(f, "duplicate record id {id}; keeping first"),
            Diagnostic::UnresolvedId { id, referenced_by } => {
                write!(f, "id {id} referenced by {referenced_by} does not resolve")
            }
            Diagnostic::UnknownRecord { id } => write!(f, "record {id} is neither tab nor list"),
            Diagnostic::NestedListSkipped { id, parent } => {
                write!(f, "nested list {id} inside folder {parent} not expanded")
            }
            Diagnostic::MarkersSkipped { section, count } => {
                write!(f, "skipped {count} non-record entries in {section}")
            }
            Diagnostic::UnusableContainerEntry { space } => {
                write!(f, "space {space} has a newContainerIDs entry without an id")
            }
        }
    }
}

/// Receiver for recoverable conditions.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Forwards each diagnostic to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!("{}", diagnostic);
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
