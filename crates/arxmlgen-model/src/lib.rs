//! Data model for generated ARXML fixture documents.
//!
//! This crate contains the element-tree vocabulary shared by the generator
//! pipeline: a plain [`Element`] tree, the [`Document`] wrapper that pins the
//! `AUTOSAR` root and its schema attributes, and the [`render`] module that
//! serializes a document to text in one of three whitespace styles.
//!
//! The model is deliberately dumb: trees are built once, rendered once, and
//! discarded. Nothing here touches the filesystem.

mod element;
pub mod render;

#[doc(inline)]
pub use element::{Document, Element};
#[doc(inline)]
pub use render::{IndentStyle, RenderError};

/// Default namespace carried by every generated `AUTOSAR` root element.
pub const ARXML_XMLNS: &str = "http://autosar.org/schema/r4.0";

/// XML Schema instance namespace declaration on the root element.
pub const ARXML_XMLNS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Schema location pointing at the AUTOSAR r4.0 schema.
pub const ARXML_SCHEMA_LOCATION: &str =
    "http://autosar.org/schema/r4.0 AUTOSAR_4-0-3.xsd";

/// The XML declaration line every rendered document starts with.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
