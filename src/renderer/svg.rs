//! SVG element tree and serialization
//!
//! The renderer builds a tree of [`Element`]s and serializes it once, so
//! nesting is always balanced and tests can inspect structure directly.

use std::fmt::Display;

use super::SvgConfig;

/// A child of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An SVG element with ordered attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: vec![],
            children: vec![],
        }
    }

    /// Add an attribute
    pub fn attr(mut self, key: &'static str, value: impl Display) -> Self {
        self.attrs.push((key, value.to_string()));
        self
    }

    /// Append a child element
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a text node
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Look up an attribute value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the space-separated `class` attribute contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.get("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Direct element children
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements in document order, excluding `self`
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![];
        for child in self.elements() {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    /// Descendants matching a predicate
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.descendants().into_iter().filter(|e| pred(e)).collect()
    }

    /// Concatenated text of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    /// Serialize this element as the root of a document
    pub fn to_svg(&self, config: &SvgConfig) -> String {
        let mut out = String::new();
        if config.standalone {
            out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            out.push_str(newline(config));
        }
        self.write(&mut out, config, 0);
        out
    }

    fn write(&self, out: &mut String, config: &SvgConfig, depth: usize) {
        let indent = if config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        };

        out.push_str(&indent);
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attrs {
            out.push_str(&format!(r#" {}="{}""#, key, escape_xml(value)));
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');

        let has_text = self.children.iter().any(|c| matches!(c, Node::Text(_)));
        if has_text {
            // Mixed content stays on one line so whitespace is not added to text
            let compact = SvgConfig {
                pretty_print: false,
                ..config.clone()
            };
            for node in &self.children {
                match node {
                    Node::Text(t) => out.push_str(&escape_xml(t)),
                    Node::Element(e) => e.write(out, &compact, 0),
                }
            }
        } else {
            for child in self.elements() {
                out.push_str(newline(config));
                child.write(out, config, depth + 1);
            }
            out.push_str(newline(config));
            out.push_str(&indent);
        }

        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

fn newline(config: &SvgConfig) -> &'static str {
    if config.pretty_print {
        "\n"
    } else {
        ""
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
