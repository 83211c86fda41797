//! Document rendering: element tree to XML text.
//!
//! Rendering is built on `quick-xml`'s event writer. The same event stream
//! is serialized either compactly or pretty-printed, then post-processed
//! into one of three whitespace styles:
//!
//! - [`IndentStyle::None`]: declaration line, then the whole body on one
//!   line with every newline stripped.
//! - [`IndentStyle::Normal`]: 4-space indentation, one element per line.
//! - [`IndentStyle::Mixed`]: like `Normal`, but every second body line has
//!   its leading 4-space indent groups converted to single tabs. This is a
//!   deliberate stress case for indentation-tolerant downstream parsers;
//!   the result must still be well-formed XML.
//!
//! Every style prepends exactly one `<?xml version="1.0" encoding="UTF-8"?>`
//! line; the event stream itself never emits a declaration, so no document
//! can end up with two.

use std::fmt;
use std::str::FromStr;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::{Document, Element, XML_DECLARATION};

/// Whitespace style for a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    /// Single-line body, no newlines after the declaration.
    None,
    /// Alternating tab/space indentation across lines.
    Mixed,
    /// Standard 4-space pretty-printing.
    #[default]
    Normal,
}

impl IndentStyle {
    /// Returns the canonical lowercase name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            IndentStyle::None => "none",
            IndentStyle::Mixed => "mixed",
            IndentStyle::Normal => "normal",
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndentStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(IndentStyle::None),
            "mixed" => Ok(IndentStyle::Mixed),
            "normal" => Ok(IndentStyle::Normal),
            other => Err(format!(
                "unknown indent style {other:?} (expected none, mixed, or normal)"
            )),
        }
    }
}

/// Error raised when serializing an element tree fails.
///
/// Writing into an in-memory buffer cannot fail in practice, but the writer
/// API is fallible, so the failure path is kept rather than panicking.
#[derive(Debug)]
pub struct RenderError(String);

impl RenderError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to render document: {}", self.0)
    }
}

impl std::error::Error for RenderError {}

/// Renders a document to a complete XML text in the requested style.
pub fn render(
    doc: &Document,
    style: IndentStyle,
) -> Result<String, RenderError> {
    let body = match style {
        IndentStyle::None => raw_body(doc)?.replace('\n', ""),
        IndentStyle::Normal => pretty_body(doc)?,
        IndentStyle::Mixed => tabify_alternate_lines(&pretty_body(doc)?),
    };

    let mut out = String::from(XML_DECLARATION);
    out.push('\n');
    out.push_str(&body);
    if style != IndentStyle::None {
        out.push('\n');
    }
    Ok(out)
}

/// Serializes the tree compactly, without any inter-element whitespace.
fn raw_body(doc: &Document) -> Result<String, RenderError> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, doc.root())?;
    into_string(writer)
}

/// Serializes the tree with 4-space indentation, one element per line.
fn pretty_body(doc: &Document) -> Result<String, RenderError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    write_element(&mut writer, doc.root())?;
    into_string(writer)
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String, RenderError> {
    String::from_utf8(writer.into_inner())
        .map_err(|e| RenderError::new(e.to_string()))
}

/// Writes one element and its subtree as start/text/children/end events.
fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
) -> Result<(), RenderError> {
    let mut start = BytesStart::new(element.name());
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.text().is_none() && element.children().is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| RenderError::new(e.to_string()));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| RenderError::new(e.to_string()))?;
    if let Some(text) = element.text() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| RenderError::new(e.to_string()))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(|e| RenderError::new(e.to_string()))
}

/// Converts the leading 4-space indent groups of every second line to tabs.
///
/// Lines are numbered from 1 starting at the first body line (the line
/// right after the XML declaration); even-numbered lines get tabs, odd
/// lines keep their spaces.
fn tabify_alternate_lines(body: &str) -> String {
    let lines: Vec<&str> = body.split('\n').collect();
    let mut out = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if (i + 1) % 2 == 0 {
            out.push(tabify_leading_indent(line));
        } else {
            out.push((*line).to_string());
        }
    }
    out.join("\n")
}

/// Replaces each complete 4-space group in a line's leading indent with one
/// tab. A trailing partial group (1-3 spaces) is left as spaces.
fn tabify_leading_indent(line: &str) -> String {
    let indent = line.len() - line.trim_start_matches(' ').len();
    let tabs = indent / 4;
    let mut out = "\t".repeat(tabs);
    out.push_str(&line[tabs * 4..]);
    out
}
