//! Include tree: one node per resolved document level
//!
//! [`TreeBuilder`] descends through the placeholders, fetching each
//! referenced file; [`collapse`] folds the finished tree back into a single
//! document, deepest levels first.

pub mod build;
pub mod collapse;

pub use build::TreeBuilder;
pub use collapse::collapse;

use crate::dom::Document;

#[derive(Debug)]
pub struct TreeNode {
    document: Document,
    /// Placeholder occurrence in the parent document this node fills
    slot: usize,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(document: Document, slot: usize) -> Self {
        Self {
            document,
            slot,
            children: Vec::new(),
        }
    }

    /// A root node (slot 0) for `document`
    pub fn root(document: Document) -> Self {
        Self::new(document, 0)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn add(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, this one included
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::len).sum::<usize>()
    }

    /// Levels below this node; a leaf has depth 0
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn into_parts(self) -> (Document, Vec<TreeNode>) {
        (self.document, self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf() {
        let node = TreeNode::root(Document::parse("<p>x</p>"));
        assert!(node.is_leaf());
        assert_eq!(node.slot(), 0);
        assert_eq!(node.len(), 1);
        assert_eq!(node.depth(), 0);
    }

    #[test]
    fn test_shape_helpers() {
        let mut grandchild_parent = TreeNode::new(Document::parse("b"), 1);
        grandchild_parent.add(TreeNode::new(Document::parse("c"), 0));

        let mut root = TreeNode::root(Document::parse("a"));
        root.add(TreeNode::new(Document::parse("d"), 0));
        root.add(grandchild_parent);

        assert!(!root.is_leaf());
        assert_eq!(root.len(), 4);
        assert_eq!(root.depth(), 2);
        assert_eq!(
            root.children().iter().map(TreeNode::slot).collect::<Vec<_>>(),
            vec![0, 1]
        );

        let (document, children) = root.into_parts();
        assert_eq!(document.body_html().unwrap(), "a");
        assert_eq!(children.len(), 2);
    }
}
