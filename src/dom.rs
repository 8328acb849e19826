//! Thin document-tree adapter over [`kuchikiki`].
//!
//! Templates are plain HTML files. Filling them means parsing into a mutable
//! tree, locating nodes with CSS selectors, replacing their contents, and
//! serializing the tree back to a string. This module exposes exactly that
//! surface and nothing else:
//!
//! | Operation | API |
//! |-----------|-----|
//! | parse | [`Document::parse`] |
//! | query by selector | [`Document::query`], [`Document::find`], [`Element::query`] |
//! | read inner content | [`Element::inner_html`], [`Element::text`] |
//! | replace inner content | [`Element::set_inner_html`], [`Element::set_text`] |
//! | serialize | [`Document::serialize`] |
//!
//! Trees are reference counted and not `Send`; every document lives and dies
//! inside the task that parsed it.

use kuchikiki::NodeRef;
use kuchikiki::traits::TendrilSink;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("template has no element matching `{selector}`")]
    NotFound { selector: String },
    #[error("HTML serialization failed: {0}")]
    Serialize(#[from] std::io::Error),
    #[error("serialized HTML is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A parsed HTML document.
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse a complete HTML document. Parsing never fails; malformed markup
    /// is repaired the way a browser would.
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchikiki::parse_html().one(html),
        }
    }

    /// First element matching `selector`, or [`DomError::NotFound`].
    pub fn query(&self, selector: &str) -> Result<Element, DomError> {
        select_first(&self.root, selector)
    }

    /// First element matching `selector`, if any.
    pub fn find(&self, selector: &str) -> Option<Element> {
        self.query(selector).ok()
    }

    /// Every element matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        select_all(&self.root, selector)
    }

    /// First element child of `<body>`.
    pub fn first_body_element(&self) -> Result<Element, DomError> {
        let body = self.query("body")?;
        body.node
            .children()
            .find(|child| child.as_element().is_some())
            .map(|node| Element { node })
            .ok_or_else(|| DomError::NotFound {
                selector: "body > *".to_string(),
            })
    }

    /// Serialize the whole document, doctype included.
    pub fn serialize(&self) -> Result<String, DomError> {
        serialize_node(&self.root)
    }
}

/// An element node inside a [`Document`].
///
/// Cloning is cheap and yields another handle to the same node.
#[derive(Clone)]
pub struct Element {
    node: NodeRef,
}

impl Element {
    /// First descendant matching `selector`.
    pub fn query(&self, selector: &str) -> Result<Element, DomError> {
        select_first(&self.node, selector)
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        select_all(&self.node, selector)
    }

    /// Serialized children of this element.
    pub fn inner_html(&self) -> Result<String, DomError> {
        let mut html = String::new();
        for child in self.node.children() {
            html.push_str(&serialize_node(&child)?);
        }
        Ok(html)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        self.node.text_contents()
    }

    /// Replace all children with the nodes parsed from `html`.
    pub fn set_inner_html(&self, html: &str) {
        self.clear();
        self.append_html(html);
    }

    /// Parse `html` and append the resulting nodes after the existing children.
    pub fn append_html(&self, html: &str) {
        for node in parse_fragment(html) {
            self.node.append(node);
        }
    }

    /// Replace all children with a single text node.
    pub fn set_text(&self, text: &str) {
        self.clear();
        self.node.append(NodeRef::new_text(text));
    }

    /// Move `child` (from this or any other document) to the end of this
    /// element's children.
    pub fn append(&self, child: &Element) {
        self.node.append(child.node.clone());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.node
            .as_element()
            .and_then(|data| data.attributes.borrow().get(name).map(str::to_string))
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        if let Some(data) = self.node.as_element() {
            data.attributes.borrow_mut().insert(name, value.to_string());
        }
    }

    /// Add `class` to the element's class list unless already present.
    pub fn add_class(&self, class: &str) {
        let current = self.attribute("class").unwrap_or_default();
        if current.split_whitespace().any(|c| c == class) {
            return;
        }
        let updated = if current.trim().is_empty() {
            class.to_string()
        } else {
            format!("{} {}", current.trim(), class)
        };
        self.set_attribute("class", &updated);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class").is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    fn clear(&self) {
        let children: Vec<NodeRef> = self.node.children().collect();
        for child in children {
            child.detach();
        }
    }
}

fn select_first(node: &NodeRef, selector: &str) -> Result<Element, DomError> {
    node.select_first(selector)
        .map(|found| Element {
            node: found.as_node().clone(),
        })
        .map_err(|()| DomError::NotFound {
            selector: selector.to_string(),
        })
}

fn select_all(node: &NodeRef, selector: &str) -> Vec<Element> {
    match node.select(selector) {
        Ok(matches) => matches
            .map(|found| Element {
                node: found.as_node().clone(),
            })
            .collect(),
        Err(()) => Vec::new(),
    }
}

fn serialize_node(node: &NodeRef) -> Result<String, DomError> {
    let mut buf = Vec::new();
    node.serialize(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Parse an HTML fragment in `<body>` context.
///
/// The explicit `<body>` start tag keeps head-only elements (`<style>`,
/// `<meta>`, `<script>`) at the position they were written instead of being
/// hoisted into an implied `<head>`.
fn parse_fragment(html: &str) -> Vec<NodeRef> {
    let doc = kuchikiki::parse_html().one(format!("<!DOCTYPE html><body>{html}"));
    match doc.select_first("body") {
        Ok(body) => body.as_node().children().collect(),
        Err(()) => Vec::new(),
    }
}
