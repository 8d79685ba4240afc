//! XML document model for Android resource files
//!
//! Resource files are parsed into a small owned tree ([`Element`]) that keeps
//! only what the metrics need: qualified tag names, attributes in document
//! order, and element children. Text, comments and processing instructions
//! are dropped.

mod structure;
mod tree;

pub use structure::{attribute_count, element_count, max_depth, string_refs};
pub use tree::{parse_document, read_document, MAX_DEPTH};

use thiserror::Error;

/// Errors produced while loading a resource document
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("file is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("file is not valid UTF-16: {0}")]
    Utf16(#[from] std::string::FromUtf16Error),

    #[error("malformed XML at byte {position}: {message}")]
    Malformed { position: usize, message: String },

    #[error("unexpected end of document inside <{0}>")]
    Unclosed(String),

    #[error("document has no root element")]
    NoRoot,

    #[error("unexpected element <{0}> after the root element")]
    MultipleRoots(String),

    #[error("elements nested deeper than {0} levels")]
    TooDeep(usize),
}

/// An element node of a parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified tag name, prefix included (e.g. `android.support.v7.widget.Toolbar`)
    pub name: String,

    /// Attributes as `(qualified name, unescaped value)`, in document order.
    /// Namespace declarations (`xmlns:*`) are kept as ordinary attributes.
    pub attributes: Vec<(String, String)>,

    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Value of the first attribute with the given qualified name
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Pre-order iterator over this element and all of its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Iterator returned by [`Element::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}
