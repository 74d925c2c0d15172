//! Placeholder detection
//!
//! Two marker forms are recognised, both as DOM nodes:
//!
//! - an element whose `id` is `<prefix>_<file_name>`
//!   (`<div id="ijwt_header.html"></div>`)
//! - a comment whose text is exactly `<prefix>_<file_name>`
//!   (`<!--ijwt_header.html-->`), with `file_name` limited to
//!   `[A-Za-z0-9._-]`
//!
//! In both cases the node itself is the insertion point and is replaced as a
//! whole when the include is collapsed.

use crate::dom::{self, Document};
use markup5ever_rcdom::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Element,
    Comment,
}

/// A located reference to an external file
#[derive(Debug, Clone)]
pub struct Placeholder {
    pub file_name: String,
    pub kind: MarkerKind,
    /// The node to replace
    pub node: Handle,
}

#[derive(Debug, Clone)]
pub struct Scanner {
    marker: String,
}

impl Scanner {
    pub fn new(prefix: &str) -> Self {
        Self {
            marker: format!("{}_", prefix),
        }
    }

    /// Every well-formed placeholder in `document`, in document order
    pub fn scan(&self, document: &Document) -> Vec<Placeholder> {
        document
            .nodes()
            .iter()
            .filter_map(|node| self.placeholder(node))
            .collect()
    }

    fn placeholder(&self, node: &Handle) -> Option<Placeholder> {
        if let Some(id) = dom::attribute(node, "id") {
            let file_name = self.file_name_from_id(&id)?;
            return Some(Placeholder {
                file_name: file_name.to_string(),
                kind: MarkerKind::Element,
                node: node.clone(),
            });
        }

        let text = dom::comment_text(node)?;
        let file_name = self.file_name_from_comment(text)?;
        Some(Placeholder {
            file_name: file_name.to_string(),
            kind: MarkerKind::Comment,
            node: node.clone(),
        })
    }

    /// File name carried by an element id: everything after the marker up to
    /// the first line break
    pub fn file_name_from_id<'a>(&self, id: &'a str) -> Option<&'a str> {
        let rest = id.strip_prefix(&self.marker)?;
        let end = rest.find(is_line_terminator).unwrap_or(rest.len());
        let file_name = &rest[..end];
        (!file_name.is_empty()).then_some(file_name)
    }

    /// File name carried by a comment marker
    pub fn file_name_from_comment<'a>(&self, text: &'a str) -> Option<&'a str> {
        let file_name = text.strip_prefix(&self.marker)?;
        let valid = !file_name.is_empty()
            && file_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        valid.then_some(file_name)
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(scanner: &Scanner, html: &str) -> Vec<String> {
        scanner
            .scan(&Document::parse(html))
            .into_iter()
            .map(|p| p.file_name)
            .collect()
    }

    #[test]
    fn test_detects_element_markers_in_order() {
        let scanner = Scanner::new("ijwt");
        assert_eq!(
            names(
                &scanner,
                r#"<div id="ijwt_header.html"></div><div id="ijwt_footer.html"></div>"#
            ),
            vec!["header.html", "footer.html"]
        );
    }

    #[test]
    fn test_no_markers_is_empty() {
        let scanner = Scanner::new("ijwt");
        assert!(names(&scanner, "<p>plain</p>").is_empty());
        assert!(names(&scanner, "").is_empty());
    }

    #[test]
    fn test_prefix_must_lead_the_id() {
        let scanner = Scanner::new("ijwt");
        assert!(names(&scanner, r#"<div id="x_ijwt_header.html"></div>"#).is_empty());
        assert!(names(&scanner, r#"<div id="IJWT_header.html"></div>"#).is_empty());
    }

    #[test]
    fn test_malformed_markers_are_dropped() {
        let scanner = Scanner::new("ijwt");
        assert!(names(&scanner, r#"<div id="ijwt_"></div>"#).is_empty());
        assert!(names(&scanner, "<!--ijwt_-->").is_empty());
        assert!(names(&scanner, "<!--ijwt_bad name.html-->").is_empty());
        assert!(names(&scanner, "<!-- ijwt_header.html -->").is_empty());
    }

    #[test]
    fn test_comment_markers() {
        let scanner = Scanner::new("ijwt");
        let found = scanner.scan(&Document::parse(
            r#"<!--ijwt_nav-bar_v2.html--><div id="ijwt_body.html"></div><!--plain comment-->"#,
        ));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].file_name, "nav-bar_v2.html");
        assert_eq!(found[0].kind, MarkerKind::Comment);
        assert_eq!(found[1].file_name, "body.html");
        assert_eq!(found[1].kind, MarkerKind::Element);
    }

    #[test]
    fn test_nested_markers_are_both_reported() {
        let scanner = Scanner::new("ijwt");
        assert_eq!(
            names(
                &scanner,
                r#"<div id="ijwt_outer.html"><span id="ijwt_inner.html"></span></div>"#
            ),
            vec!["outer.html", "inner.html"]
        );
    }

    #[test]
    fn test_id_file_name_stops_at_line_break() {
        let scanner = Scanner::new("ijwt");
        assert_eq!(scanner.file_name_from_id("ijwt_a.html\nrest"), Some("a.html"));
        assert_eq!(scanner.file_name_from_id("ijwt_dir/a b.html"), Some("dir/a b.html"));
        assert_eq!(scanner.file_name_from_id("ijwt_\nx"), None);
    }

    #[test]
    fn test_custom_prefix() {
        let scanner = Scanner::new("inc");
        assert_eq!(
            names(&scanner, r#"<div id="inc_a.html"></div><div id="ijwt_b.html"></div>"#),
            vec!["a.html"]
        );
    }
}
