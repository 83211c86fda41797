//! Element tree types.
//!
//! [`Element`] is an ordered XML element: tag name, optional text, attribute
//! pairs, and child elements. [`Document`] wraps the single `AUTOSAR` root
//! element with its three fixed namespace/schema attributes.

use crate::{ARXML_SCHEMA_LOCATION, ARXML_XMLNS, ARXML_XMLNS_XSI};

/// A single XML element in a fixture tree.
///
/// Attribute and child order is preserved exactly as inserted. Elements form
/// a strict tree; there are no cross-references and nothing is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    text: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sets the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Appends an attribute. Order is preserved; duplicates are not checked
    /// because the generator only ever sets fixed, distinct names.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// A complete fixture document: the `AUTOSAR` root plus its generated body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Creates a document whose root is an `AUTOSAR` element carrying the
    /// three fixed namespace/schema attributes.
    pub fn arxml() -> Self {
        let mut root = Element::new("AUTOSAR");
        root.set_attribute("xmlns", ARXML_XMLNS);
        root.set_attribute("xmlns:xsi", ARXML_XMLNS_XSI);
        root.set_attribute("xsi:schemaLocation", ARXML_SCHEMA_LOCATION);
        Self { root }
    }

    /// Returns the root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Returns the root element mutably, for attaching the generated body.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}
