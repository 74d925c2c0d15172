//! Document facility: HTML parsing, querying, mutation and serialization
//!
//! Built on html5ever's reference DOM ([`RcDom`]). Nodes are shared
//! [`Handle`]s, so a node found by a query stays valid while other parts of
//! the tree are replaced, and moving nodes between documents never goes
//! through a serialize/parse round trip.

use crate::error::Result;
use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use std::fmt;
use std::rc::Rc;

/// A parsed HTML document
pub struct Document {
    dom: RcDom,
}

impl Document {
    /// Parse `html` the way a browser parses a full page.
    ///
    /// Parsing never fails; malformed markup is repaired by the HTML5
    /// tree-construction rules, and `<html>`, `<head>` and `<body>` always
    /// exist afterwards.
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self { dom }
    }

    /// The document node itself
    pub fn root(&self) -> &Handle {
        &self.dom.document
    }

    pub fn body(&self) -> Option<Handle> {
        let html = find_child_element(&self.dom.document, "html")?;
        find_child_element(&html, "body")
    }

    /// Whole document, doctype included
    pub fn to_html(&self) -> Result<String> {
        serialize_node(&self.dom.document, TraversalScope::ChildrenOnly(None))
    }

    /// Inner HTML of `<body>`, empty if there is no body
    pub fn body_html(&self) -> Result<String> {
        match self.body() {
            Some(body) => inner_html(&body),
            None => Ok(String::new()),
        }
    }

    /// Detach and return every child of `<body>`
    pub fn take_body_children(&self) -> Vec<Handle> {
        let Some(body) = self.body() else {
            return Vec::new();
        };
        let children = std::mem::take(&mut *body.children.borrow_mut());
        for child in &children {
            child.parent.set(None);
        }
        children
    }

    /// Every node below the document node, in document (pre-order) order
    pub fn nodes(&self) -> Vec<Handle> {
        let mut found = Vec::new();
        collect(&self.dom.document, &mut found);
        found
    }

    /// Nodes matching `predicate`, in document order
    pub fn select<P>(&self, predicate: P) -> Vec<Handle>
    where
        P: Fn(&Handle) -> bool,
    {
        self.nodes().into_iter().filter(|node| predicate(node)).collect()
    }

    pub fn element_by_id(&self, id: &str) -> Option<Handle> {
        self.select(|node| attribute(node, "id").as_deref() == Some(id))
            .into_iter()
            .next()
    }

    pub fn elements_with_class(&self, class: &str) -> Vec<Handle> {
        self.select(|node| has_class(node, class))
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("children", &self.dom.document.children.borrow().len())
            .finish_non_exhaustive()
    }
}

fn collect(node: &Handle, found: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        found.push(child.clone());
        collect(child, found);
    }
}

fn find_child_element(node: &Handle, name: &str) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .find(|child| tag_name(child) == Some(name))
        .cloned()
}

/// Local name of an element node
pub fn tag_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Value of attribute `name` on an element node
pub fn attribute(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

pub fn has_class(node: &Handle, class: &str) -> bool {
    attribute(node, "class")
        .map(|value| value.split_ascii_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Text of a comment node
pub fn comment_text(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Comment { contents } => Some(&**contents),
        _ => None,
    }
}

pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    node.parent.set(weak);
    parent
}

/// Elements whose text content is serialized without escaping
const RAW_TEXT_ELEMENTS: [&str; 8] = [
    "script", "style", "xmp", "iframe", "noembed", "noframes", "noscript", "plaintext",
];

/// Markup of `node`'s children.
///
/// Text inside raw-text elements (`<script>`, `<style>`, ...) comes back
/// verbatim, so the result can be fed to [`set_inner_html`] unchanged.
pub fn inner_html(node: &Handle) -> Result<String> {
    if tag_name(node).is_some_and(|name| RAW_TEXT_ELEMENTS.contains(&name)) {
        return Ok(raw_text(node));
    }
    serialize_node(node, TraversalScope::ChildrenOnly(None))
}

fn raw_text(node: &Handle) -> String {
    node.children
        .borrow()
        .iter()
        .filter_map(|child| match &child.data {
            NodeData::Text { contents } => Some(contents.borrow().to_string()),
            _ => None,
        })
        .collect()
}

pub fn outer_html(node: &Handle) -> Result<String> {
    match node.data {
        NodeData::Document => inner_html(node),
        _ => serialize_node(node, TraversalScope::IncludeNode),
    }
}

/// Replace the children of element `node` with `html` parsed in its context.
///
/// Parsing in context keeps raw-text elements raw: setting the inner HTML
/// of a `<script>` produces a single text node, not markup. Non-element
/// nodes are left untouched and `false` is returned.
pub fn set_inner_html(node: &Handle, html: &str) -> bool {
    let NodeData::Element { name, .. } = &node.data else {
        return false;
    };

    let fragment = parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        name.clone(),
        Vec::new(),
    )
    .one(html);

    // Fragment parsing wraps the result in a single <html> element
    let wrapper = fragment.document.children.borrow().first().cloned();
    let new_children = match wrapper {
        Some(wrapper) => std::mem::take(&mut *wrapper.children.borrow_mut()),
        None => Vec::new(),
    };

    for old in node.children.borrow_mut().drain(..) {
        old.parent.set(None);
    }
    for child in &new_children {
        child.parent.set(Some(Rc::downgrade(node)));
    }
    *node.children.borrow_mut() = new_children;
    true
}

/// Put `replacement` where `target` is, detaching `target`.
///
/// The replacement nodes must already be detached from any parent. Returns
/// `false` (and changes nothing) when `target` is not attached.
pub fn replace_with(target: &Handle, replacement: Vec<Handle>) -> bool {
    let Some(container) = parent(target) else {
        return false;
    };

    let mut siblings = container.children.borrow_mut();
    let Some(index) = siblings.iter().position(|c| Rc::ptr_eq(c, target)) else {
        return false;
    };

    for node in &replacement {
        node.parent.set(Some(Rc::downgrade(&container)));
    }
    siblings.splice(index..=index, replacement).for_each(drop);
    target.parent.set(None);
    true
}

/// Remove `node` from its parent. Detached nodes are left as they are.
pub fn detach(node: &Handle) -> bool {
    replace_with(node, Vec::new())
}

fn serialize_node(node: &Handle, traversal_scope: TraversalScope) -> Result<String> {
    let mut bytes = Vec::new();
    let serializable: SerializableHandle = node.clone().into();
    serialize(
        &mut bytes,
        &serializable,
        SerializeOpts {
            traversal_scope,
            ..Default::default()
        },
    )?;
    Ok(String::from_utf8(bytes)?)
}
