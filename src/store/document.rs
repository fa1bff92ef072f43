//! In-memory property document
//!
//! A document is an XML tree whose root holds `property` elements, each with
//! a `name` and a `value` child. Lookups and updates scan in document order
//! and stop at the first property whose trimmed name matches exactly.

use std::fs;
use std::path::Path;

use xmltree::{Element, EmitterConfig, ParserConfig, XMLNode};

use super::errors::{StoreError, StoreResult};
use super::options::{LoadOptions, SaveOptions};
use super::writer::write_file;

/// Root element used when a document has to be created from nothing
pub const DEFAULT_ROOT: &str = "configuration";

const PROPERTY: &str = "property";
const NAME: &str = "name";
const VALUE: &str = "value";

/// A name/value pair as read from a `property` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    /// Name text, trimmed
    pub name: String,
    /// Value text, verbatim
    pub value: String,
}

/// What an upsert did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// An existing property had its value replaced
    Updated,
    /// No property matched; a new one was appended to the root
    Appended,
}

/// A loaded property document.
#[derive(Debug, Clone)]
pub struct PropertyDocument {
    root: Element,
}

impl Default for PropertyDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyDocument {
    /// Creates an empty `<configuration/>` document.
    pub fn new() -> Self {
        Self {
            root: Element::new(DEFAULT_ROOT),
        }
    }

    /// Loads the document stored at `path`.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if `path` is not an existing regular file;
    ///   checked before anything is read
    /// - `StoreError::Parse` if the contents are not well-formed XML
    /// - `StoreError::Io` if the file cannot be read
    pub fn load(path: &Path, options: &LoadOptions) -> StoreResult<Self> {
        if !path.is_file() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|e| StoreError::io(path, e))?;
        let document = Self::parse_from(&bytes, &path.display().to_string(), options)?;

        tracing::debug!(
            event = "DOCUMENT_LOADED",
            path = %path.display(),
            properties = document.len()
        );

        Ok(document)
    }

    /// Parses a document from raw bytes.
    pub fn parse(bytes: &[u8], options: &LoadOptions) -> StoreResult<Self> {
        Self::parse_from(bytes, "<in-memory>", options)
    }

    fn parse_from(bytes: &[u8], origin: &str, options: &LoadOptions) -> StoreResult<Self> {
        // A blank file is an empty document, not a parse failure
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::new());
        }

        // Whitespace is always read as text so leaf values keep it verbatim;
        // layout-only whitespace is dropped afterwards when not wanted.
        let config = ParserConfig {
            whitespace_to_characters: true,
            ignore_comments: !options.keep_comments,
            ..ParserConfig::default()
        };

        let nodes = Element::parse_all_with_config(bytes, config)
            .map_err(|e| StoreError::parse(origin, e.to_string()))?;

        let mut root = single_root(nodes).map_err(|reason| StoreError::parse(origin, reason))?;
        if !options.keep_whitespace {
            strip_layout_whitespace(&mut root);
        }

        Ok(Self { root })
    }

    /// Name of the top-level element.
    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    /// Returns the value of the first property named `name`.
    ///
    /// Stored names are trimmed before comparison; the value is returned as
    /// stored. A property without a `value` child reads as empty.
    pub fn get(&self, name: &str) -> Option<String> {
        self.properties()
            .find(|property| name_matches(property, name))
            .map(|property| child(property, VALUE).map(text_of).unwrap_or_default())
    }

    /// Replaces the value of the first property named `name`.
    ///
    /// Returns `false` and leaves the document untouched when nothing matches.
    /// Later duplicates are never touched.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match self.property_mut(name) {
            Some(property) => {
                write_value(property, value);
                true
            }
            None => false,
        }
    }

    /// Replaces the value of the first property named `name`, or appends a
    /// new property at the end of the root if none matches.
    pub fn upsert(&mut self, name: &str, value: &str) -> UpsertOutcome {
        if self.set(name, value) {
            return UpsertOutcome::Updated;
        }

        let mut property = Element::new(PROPERTY);
        property
            .children
            .push(XMLNode::Element(text_element(NAME, name)));
        property
            .children
            .push(XMLNode::Element(text_element(VALUE, value)));
        self.root.children.push(XMLNode::Element(property));

        UpsertOutcome::Appended
    }

    /// All named properties in document order.
    pub fn entries(&self) -> Vec<PropertyEntry> {
        self.properties()
            .filter_map(|property| {
                let name = child(property, NAME)?;
                Some(PropertyEntry {
                    name: text_of(name).trim().to_string(),
                    value: child(property, VALUE).map(text_of).unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Number of named properties.
    pub fn len(&self) -> usize {
        self.properties()
            .filter(|property| child(property, NAME).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the whole document.
    pub fn to_bytes(&self, options: &SaveOptions) -> StoreResult<Vec<u8>> {
        let config = EmitterConfig::new()
            .perform_indent(options.indent)
            .write_document_declaration(options.write_declaration);

        let mut buffer = Vec::new();
        self.root
            .write_with_config(&mut buffer, config)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        Ok(buffer)
    }

    /// Writes the document to `path`, overwriting it.
    ///
    /// The document is rendered before the file is opened, so a serializer
    /// failure leaves the target untouched.
    pub fn save(&self, path: &Path, options: &SaveOptions) -> StoreResult<()> {
        let bytes = self.to_bytes(options)?;
        write_file(path, &bytes, options.atomic)?;

        tracing::debug!(
            event = "DOCUMENT_SAVED",
            path = %path.display(),
            bytes = bytes.len(),
            atomic = options.atomic
        );

        Ok(())
    }

    fn properties(&self) -> impl Iterator<Item = &Element> {
        self.root.children.iter().filter_map(|node| match node {
            XMLNode::Element(element) if element.name == PROPERTY => Some(element),
            _ => None,
        })
    }

    fn property_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.root
            .children
            .iter_mut()
            .filter_map(|node| match node {
                XMLNode::Element(element) if element.name == PROPERTY => Some(element),
                _ => None,
            })
            .find(|property| name_matches(property, name))
    }
}

/// Exactly one top-level element; anything else outside it but comments,
/// processing instructions and whitespace is junk.
fn single_root(nodes: Vec<XMLNode>) -> Result<Element, String> {
    let mut root = None;
    for node in nodes {
        match node {
            XMLNode::Element(element) => {
                if root.is_some() {
                    return Err(format!("junk after document element: <{}>", element.name));
                }
                root = Some(element);
            }
            XMLNode::Text(text) | XMLNode::CData(text) if !text.trim().is_empty() => {
                return Err("text outside the document element".to_string());
            }
            _ => {}
        }
    }
    root.ok_or_else(|| "no document element".to_string())
}

/// Removes whitespace-only text from elements that contain child elements.
/// Leaf elements keep their text untouched.
fn strip_layout_whitespace(element: &mut Element) {
    let has_children = element
        .children
        .iter()
        .any(|node| matches!(node, XMLNode::Element(_)));
    if has_children {
        element
            .children
            .retain(|node| !matches!(node, XMLNode::Text(text) if text.trim().is_empty()));
    }
    for node in element.children.iter_mut() {
        if let XMLNode::Element(child) = node {
            strip_layout_whitespace(child);
        }
    }
}

fn child<'a>(element: &'a Element, tag: &str) -> Option<&'a Element> {
    element.children.iter().find_map(|node| match node {
        XMLNode::Element(child) if child.name == tag => Some(child),
        _ => None,
    })
}

fn child_mut<'a>(element: &'a mut Element, tag: &str) -> Option<&'a mut Element> {
    element.children.iter_mut().find_map(|node| match node {
        XMLNode::Element(child) if child.name == tag => Some(child),
        _ => None,
    })
}

/// Concatenated text and CDATA content of an element's direct children.
fn text_of(element: &Element) -> String {
    element
        .children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Text(text) | XMLNode::CData(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn name_matches(property: &Element, name: &str) -> bool {
    child(property, NAME).map_or(false, |element| text_of(element).trim() == name)
}

fn replace_text(element: &mut Element, text: &str) {
    element
        .children
        .retain(|node| !matches!(node, XMLNode::Text(_) | XMLNode::CData(_)));
    if !text.is_empty() {
        element.children.insert(0, XMLNode::Text(text.to_string()));
    }
}

fn text_element(tag: &str, text: &str) -> Element {
    let mut element = Element::new(tag);
    replace_text(&mut element, text);
    element
}

fn write_value(property: &mut Element, value: &str) {
    match child_mut(property, VALUE) {
        Some(element) => replace_text(element, value),
        None => property
            .children
            .push(XMLNode::Element(text_element(VALUE, value))),
    }
}
