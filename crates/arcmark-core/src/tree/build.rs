//! Space → folder tree resolution.

use std::collections::HashSet;

use serde_json::Value;

use super::url::clean_url;
use super::Node;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::export::{Payload, RawSpace, Record};
use crate::index::RecordIndex;

pub const DEFAULT_SPACE_TITLE: &str = "Default Space";
pub const UNTITLED_FOLDER: &str = "Untitled Folder";

/// Builds one top-level folder per space, in input order.
pub fn build_tree(
    spaces: &[RawSpace],
    index: &RecordIndex,
    sink: &mut dyn DiagnosticSink,
) -> Vec<Node> {
    spaces
        .iter()
        .map(|space| build_space(space, index, sink))
        .collect()
}

/// Resolves a space's containers into a single folder.
///
/// `containerIDs` is walked first (string entries only), then
/// `newContainerIDs` (bare ids or single-key wrapper objects). A container
/// reached through both lists is expanded once.
pub fn build_space(space: &RawSpace, index: &RecordIndex, sink: &mut dyn DiagnosticSink) -> Node {
    let mut builder = SpaceBuilder {
        index,
        sink,
        space_id: &space.id,
        expanded: HashSet::new(),
        items: Vec::new(),
    };

    for entry in &space.container_ids {
        if let Value::String(id) = entry {
            builder.expand_container(id);
        }
    }
    for entry in &space.new_container_ids {
        match wrapped_container_id(entry) {
            Some(id) => builder.expand_container(id),
            None => builder.sink.report(Diagnostic::UnusableContainerEntry {
                space: space.id.clone(),
            }),
        }
    }

    Node::Folder {
        title: non_empty(space.title.as_deref()).unwrap_or(DEFAULT_SPACE_TITLE).to_string(),
        items: builder.items,
        source_id: space.id.clone(),
    }
}

/// A bare id string, or the sole string value of a one-key object.
fn wrapped_container_id(entry: &Value) -> Option<&str> {
    match entry {
        Value::String(id) => Some(id),
        Value::Object(map) if map.len() == 1 => map.values().next().and_then(Value::as_str),
        _ => None,
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

struct SpaceBuilder<'a> {
    index: &'a RecordIndex,
    sink: &'a mut dyn DiagnosticSink,
    space_id: &'a str,
    expanded: HashSet<String>,
    items: Vec<Node>,
}

impl<'a> SpaceBuilder<'a> {
    fn expand_container(&mut self, id: &str) {
        if !self.expanded.insert(id.to_string()) {
            return;
        }
        let index: &'a RecordIndex = self.index;
        let Some(container) = index.lookup(id) else {
            self.sink.report(Diagnostic::UnresolvedId {
                id: id.to_string(),
                referenced_by: self.space_id.to_string(),
            });
            return;
        };
        for child_id in &container.children_ids {
            if let Some(node) = self.resolve_child(child_id, &container.id) {
                self.items.push(node);
            }
        }
    }

    /// A direct container child: tab → bookmark, list → one-level folder.
    fn resolve_child(&mut self, id: &str, parent: &str) -> Option<Node> {
        let record = self.resolve(id, parent)?;
        match &record.payload {
            Payload::Tab {
                saved_url,
                saved_title,
            } => Some(bookmark(record, saved_url.as_deref(), saved_title.as_deref())),
            Payload::List => Some(self.folder(record)),
            Payload::Unknown => {
                self.sink.report(Diagnostic::UnknownRecord {
                    id: record.id.clone(),
                });
                None
            }
        }
    }

    /// Only direct tab children of a list become bookmarks.
    fn folder(&mut self, list: &'a Record) -> Node {
        let mut items = Vec::new();
        for child_id in &list.children_ids {
            let Some(child) = self.resolve(child_id, &list.id) else {
                continue;
            };
            match &child.payload {
                Payload::Tab {
                    saved_url,
                    saved_title,
                } => items.push(bookmark(child, saved_url.as_deref(), saved_title.as_deref())),
                Payload::List => self.sink.report(Diagnostic::NestedListSkipped {
                    id: child.id.clone(),
                    parent: list.id.clone(),
                }),
                Payload::Unknown => self.sink.report(Diagnostic::UnknownRecord {
                    id: child.id.clone(),
                }),
            }
        }
        Node::Folder {
            title: non_empty(list.title.as_deref()).unwrap_or(UNTITLED_FOLDER).to_string(),
            items,
            source_id: list.id.clone(),
        }
    }

    fn resolve(&mut self, id: &str, parent: &str) -> Option<&'a Record> {
        let index: &'a RecordIndex = self.index;
        let found = index.lookup(id);
        if found.is_none() {
            self.sink.report(Diagnostic::UnresolvedId {
                id: id.to_string(),
                referenced_by: parent.to_string(),
            });
        }
        found
    }
}

fn bookmark(record: &Record, saved_url: Option<&str>, saved_title: Option<&str>) -> Node {
    let url = clean_url(saved_url.unwrap_or_default());
    let title = match non_empty(saved_title) {
        Some(t) => t.to_string(),
        None => url.clone(),
    };
    Node::Bookmark {
        title,
        url,
        source_id: record.id.clone(),
    }
}
