//! HTML fragment construction
//!
//! A small node-tree builder so the loaders never concatenate markup at the
//! call site. Text and attribute values are written into the output
//! VERBATIM: the upstream page interpolates fetched values without escaping
//! and this builder reproduces that output byte for byte. Callers own any
//! escaping they need.

use std::fmt::Write;

/// One node in a fragment: either an element or a run of text
enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element with attributes and children
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute (value written verbatim)
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Shorthand for the `class` attribute
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a text child (written verbatim)
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.children.push(Node::Text(value.into()));
        self
    }

    /// Append an element child
    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, value);
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(text),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// A sequence of nodes forming one rendered unit
///
/// Fragments can mix top-level text and elements, which is what the greeting
/// sentence needs (`Hi, I'm <a ...>...</a>!`).
#[derive(Default)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Append top-level text (written verbatim)
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.nodes.push(Node::Text(value.into()));
        self
    }

    /// Append a top-level element
    pub fn element(mut self, element: Element) -> Self {
        self.nodes.push(Node::Element(element));
        self
    }

    /// Render the fragment to its HTML string
    pub fn render(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Element(element) => element.write_html(&mut out),
                Node::Text(text) => out.push_str(text),
            }
        }
        out
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Fragment::new().element(element)
    }
}
