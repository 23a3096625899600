//! Netscape Bookmark File serialization.
//!
//! Four spaces of indentation per depth level; top-level folders sit at
//! depth 1. Titles and URLs are written verbatim unless
//! [`RenderOptions::escape_html`] is set.

use std::borrow::Cow;

use crate::tree::Node;

const INDENT: &str = "    ";

/// Rendering knobs. The defaults reproduce the classic export byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text of the `<TITLE>` and `<H1>` header lines.
    pub document_title: String,
    /// Entity-escape `&`, `<`, `>` and `"` in titles and URLs.
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            document_title: "Bookmarks".to_string(),
            escape_html: false,
        }
    }
}

/// Renders top-level folders with default options.
pub fn render(folders: &[Node]) -> String {
    render_with(folders, &RenderOptions::default())
}

pub fn render_with(folders: &[Node], opts: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n");
    out.push_str("<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n");
    out.push_str(&format!("<TITLE>{}</TITLE>\n", text(&opts.document_title, opts)));
    out.push_str(&format!("<H1>{}</H1>\n", text(&opts.document_title, opts)));
    out.push_str("<DL><p>\n");
    for node in folders {
        render_node(&mut out, node, 1, opts);
    }
    out.push_str("</DL><p>\n");
    out
}

fn render_node(out: &mut String, node: &Node, depth: usize, opts: &RenderOptions) {
    let pad = INDENT.repeat(depth);
    match node {
        Node::Folder { title, items, .. } => {
            out.push_str(&format!("{pad}<DT><H3>{}</H3>\n", text(title, opts)));
            out.push_str(&format!("{pad}<DL><p>\n"));
            for item in items {
                render_node(out, item, depth + 1, opts);
            }
            out.push_str(&format!("{pad}</DL><p>\n"));
        }
        Node::Bookmark { title, url, .. } => {
            out.push_str(&format!(
                "{pad}<DT><A HREF=\"{}\">{}</A>\n",
                text(url, opts),
                text(title, opts)
            ));
        }
    }
}

fn text<'a>(raw: &'a str, opts: &RenderOptions) -> Cow<'a, str> {
    if opts.escape_html {
        escape(raw)
    } else {
        Cow::Borrowed(raw)
    }
}

fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bm(title: &str, url: &str) -> Node {
        Node::Bookmark {
            title: title.into(),
            url: url.into(),
            source_id: "t".into(),
        }
    }

    fn folder(title: &str, items: Vec<Node>) -> Node {
        Node::Folder {
            title: title.into(),
            items,
            source_id: "f".into(),
        }
    }

    #[test]
    fn empty_document_is_header_and_footer() {
        assert_eq!(
            render(&[]),
            "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
             <META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
             <TITLE>Bookmarks</TITLE>\n\
             <H1>Bookmarks</H1>\n\
             <DL><p>\n\
             </DL><p>\n"
        );
    }

    #[test]
    fn nested_indentation() {
        let tree = vec![folder(
            "Work",
            vec![bm("X", "https://x.com"), folder("Docs", vec![bm("D", "https://d.com")])],
        )];
        let html = render(&tree);
        let body: Vec<&str> = html.lines().skip(5).collect();
        assert_eq!(
            body,
            vec![
                "    <DT><H3>Work</H3>",
                "    <DL><p>",
                "        <DT><A HREF=\"https://x.com\">X</A>",
                "        <DT><H3>Docs</H3>",
                "        <DL><p>",
                "            <DT><A HREF=\"https://d.com\">D</A>",
                "        </DL><p>",
                "    </DL><p>",
                "</DL><p>",
            ]
        );
    }

    #[test]
    fn verbatim_by_default() {
        let html = render(&[folder("A & B", vec![bm("<b>", "https://x.com/?a=1&b=2")])]);
        assert!(html.contains("<DT><H3>A & B</H3>"));
        assert!(html.contains("<DT><A HREF=\"https://x.com/?a=1&b=2\"><b></A>"));
    }

    #[test]
    fn escape_when_requested() {
        let opts = RenderOptions {
            escape_html: true,
            ..RenderOptions::default()
        };
        let html = render_with(&[folder("A & B", vec![bm("\"q\"", "https://x.com/?a=1&b=2")])], &opts);
        assert!(html.contains("<DT><H3>A &amp; B</H3>"));
        assert!(html.contains("<DT><A HREF=\"https://x.com/?a=1&amp;b=2\">&quot;q&quot;</A>"));
    }

    #[test]
    fn custom_document_title() {
        let opts = RenderOptions {
            document_title: "Arc".into(),
            ..RenderOptions::default()
        };
        let html = render_with(&[], &opts);
        assert!(html.contains("<TITLE>Arc</TITLE>\n<H1>Arc</H1>\n"));
    }
}
