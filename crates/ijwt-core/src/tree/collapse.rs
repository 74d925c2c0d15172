use super::TreeNode;
use crate::dom::{self, Document};
use crate::scan::Scanner;

/// Fold `node` into a single document.
///
/// Each child is collapsed first, then the children of its `<body>` are moved
/// into the parent in place of the placeholder at the child's slot. Nodes are
/// moved, never re-serialized, so replacing one placeholder does not disturb
/// the handles of the others.
pub fn collapse(node: TreeNode, scanner: &Scanner) -> Document {
    let (document, children) = node.into_parts();
    if children.is_empty() {
        return document;
    }

    let placeholders = scanner.scan(&document);
    for child in children {
        let slot = child.slot();
        let collapsed = collapse(child, scanner);

        let Some(placeholder) = placeholders.get(slot) else {
            tracing::warn!(slot, "no placeholder at slot, dropping included document");
            continue;
        };

        if !dom::replace_with(&placeholder.node, collapsed.take_body_children()) {
            // A placeholder nested inside one that was already replaced
            tracing::debug!(file_name = %placeholder.file_name, "placeholder detached, skipped");
        }
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> Scanner {
        Scanner::new("ijwt")
    }

    #[test]
    fn test_leaf_is_returned_as_is() {
        let html = "<p>Hello world</p>";
        let document = collapse(TreeNode::root(Document::parse(html)), &scanner());
        assert_eq!(document.body_html().unwrap(), html);
    }

    #[test]
    fn test_replaces_by_slot() {
        let mut root = TreeNode::root(Document::parse(
            r#"<p>top</p><div id="ijwt_a.html"></div><div id="ijwt_b.html"></div><div id="ijwt_c.html"></div>"#,
        ));
        root.add(TreeNode::new(Document::parse("<i>A</i>"), 0));
        root.add(TreeNode::new(Document::parse("<i>C</i>"), 2));

        let document = collapse(root, &scanner());
        assert_eq!(
            document.body_html().unwrap(),
            r#"<p>top</p><i>A</i><div id="ijwt_b.html"></div><i>C</i>"#
        );
    }

    #[test]
    fn test_comment_marker_is_replaced() {
        let mut root = TreeNode::root(Document::parse("<p>a</p><!--ijwt_nav.html--><p>b</p>"));
        root.add(TreeNode::new(Document::parse("<nav>N</nav>"), 0));

        let document = collapse(root, &scanner());
        assert_eq!(document.body_html().unwrap(), "<p>a</p><nav>N</nav><p>b</p>");
    }

    #[test]
    fn test_nested_levels_collapse_bottom_up() {
        let mut bread = TreeNode::new(Document::parse(r#"<div id="ijwt_footer.html"></div>"#), 0);
        bread.add(TreeNode::new(Document::parse("Feet!"), 0));
        let mut header = TreeNode::new(Document::parse(r#"<div id="ijwt_bread.html"></div>"#), 0);
        header.add(bread);
        let mut root = TreeNode::root(Document::parse(r#"<div id="ijwt_header.html"></div>"#));
        root.add(header);

        let document = collapse(root, &scanner());
        assert_eq!(document.body_html().unwrap(), "Feet!");
    }

    #[test]
    fn test_out_of_range_slot_is_dropped() {
        let mut root = TreeNode::root(Document::parse(r#"<div id="ijwt_a.html"></div>"#));
        root.add(TreeNode::new(Document::parse("stray"), 5));

        let document = collapse(root, &scanner());
        assert_eq!(document.body_html().unwrap(), r#"<div id="ijwt_a.html"></div>"#);
    }
}
