//! The pure conversion seam: parsed export in, bookmark document out.
//!
//! Reading and writing files is left to the caller.

use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::ConvertError;
use crate::export::{parse_export, SidebarPayload};
use crate::index::RecordIndex;
use crate::netscape::{render_with, RenderOptions};
use crate::tree::{build_tree, Node};

/// Output of one conversion run.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Netscape bookmark document.
    pub html: String,
    /// One folder per space, as rendered.
    pub tree: Vec<Node>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub spaces: usize,
    /// Folders below the space level.
    pub folders: usize,
    pub bookmarks: usize,
}

impl Conversion {
    pub fn stats(&self) -> ConversionStats {
        ConversionStats {
            spaces: self.tree.len(),
            folders: self
                .tree
                .iter()
                .map(|space| space.folder_count().saturating_sub(1))
                .sum(),
            bookmarks: self.tree.iter().map(Node::bookmark_count).sum(),
        }
    }
}

/// Converts a parsed sidebar export.
pub fn convert(
    doc: &Value,
    opts: &RenderOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Conversion, ConvertError> {
    let payload = SidebarPayload::from_document(doc)?;
    if payload.item_markers > 0 {
        sink.report(Diagnostic::MarkersSkipped {
            section: "items",
            count: payload.item_markers,
        });
    }
    if payload.space_markers > 0 {
        sink.report(Diagnostic::MarkersSkipped {
            section: "spaces",
            count: payload.space_markers,
        });
    }

    let index = RecordIndex::build(payload.items, sink);
    let tree = build_tree(&payload.spaces, &index, sink);
    let html = render_with(&tree, opts);
    Ok(Conversion { html, tree })
}

/// [`parse_export`] followed by [`convert`].
pub fn convert_str(
    text: &str,
    opts: &RenderOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Conversion, ConvertError> {
    let doc = parse_export(text)?;
    convert(&doc, opts, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;
    use serde_json::json;

    #[test]
    fn end_to_end_single_tab() {
        let doc = json!({
            "sidebar": { "containers": [
                { "global": {} },
                {
                    "spaces": ["s1", { "id": "s1", "title": "Work", "containerIDs": ["pinned", "c1"] }],
                    "items": [
                        "c1", { "id": "c1", "childrenIds": ["t1"] },
                        "t1", { "id": "t1", "data": { "tab": { "savedURL": "https://x.com", "savedTitle": "X" } } }
                    ]
                }
            ]}
        });
        let out = convert(&doc, &RenderOptions::default(), &mut NullSink).unwrap();
        let work = out.html.find("<H3>Work</H3>").expect("space heading");
        let anchor = out.html.find("<A HREF=\"https://x.com\">X</A>").expect("anchor");
        assert!(work < anchor);
        assert_eq!(
            out.stats(),
            ConversionStats {
                spaces: 1,
                folders: 0,
                bookmarks: 1
            }
        );
    }

    #[test]
    fn markers_reported() {
        let doc = json!({
            "sidebar": { "containers": [{}, { "items": ["x", "y"], "spaces": ["s"] }] }
        });
        let mut sink: Vec<Diagnostic> = Vec::new();
        let out = convert(&doc, &RenderOptions::default(), &mut sink).unwrap();
        assert!(out.tree.is_empty());
        assert_eq!(
            sink,
            vec![
                Diagnostic::MarkersSkipped { section: "items", count: 2 },
                Diagnostic::MarkersSkipped { section: "spaces", count: 1 },
            ]
        );
    }

    #[test]
    fn convert_str_fatal_errors() {
        let opts = RenderOptions::default();
        assert!(matches!(
            convert_str("{", &opts, &mut NullSink),
            Err(ConvertError::InvalidJson(_))
        ));
        assert!(matches!(
            convert_str("{\"sidebar\": {}}", &opts, &mut NullSink),
            Err(ConvertError::InvalidShape(_))
        ));
    }
}
