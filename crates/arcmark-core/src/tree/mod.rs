//! Normalized bookmark tree and the builder that produces it from the index.
//!
//! One top-level [`Node::Folder`] per space. Folders keep the order of the
//! source `childrenIds` / container lists; anything that does not resolve is
//! left out rather than failing the run.

mod build;
mod url;

pub use build::{build_space, build_tree, DEFAULT_SPACE_TITLE, UNTITLED_FOLDER};
pub use url::clean_url;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Bookmark {
        title: String,
        url: String,
        #[serde(rename = "sourceId")]
        source_id: String,
    },
    Folder {
        title: String,
        items: Vec<Node>,
        #[serde(rename = "sourceId")]
        source_id: String,
    },
}

impl Node {
    pub fn title(&self) -> &str {
        match self {
            Node::Bookmark { title, .. } | Node::Folder { title, .. } => title,
        }
    }

    /// Bookmarks in this subtree (including self).
    pub fn bookmark_count(&self) -> usize {
        match self {
            Node::Bookmark { .. } => 1,
            Node::Folder { items, .. } => items.iter().map(Node::bookmark_count).sum(),
        }
    }

    /// Folders in this subtree (including self).
    pub fn folder_count(&self) -> usize {
        match self {
            Node::Bookmark { .. } => 0,
            Node::Folder { items, .. } => 1 + items.iter().map(Node::folder_count).sum::<usize>(),
        }
    }
}
