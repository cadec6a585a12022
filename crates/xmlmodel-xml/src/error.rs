//! Error types for XML parsing, encoding, and decoding.

use std::io;

use xmlmodel_schema::{SchemaError, ValidationError};

/// Errors raised while parsing XML text into an element tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input holds nothing but whitespace.
    #[error("empty document")]
    Empty,

    /// The input holds no element.
    #[error("no root element found")]
    NoRootElement,

    /// The input ended while an element was still open.
    #[error("unexpected end of document: `<{open}>` is not closed")]
    UnexpectedEof {
        /// The innermost open element.
        open: String,
    },

    /// An end tag does not close the innermost open element.
    #[error("mismatched end tag: expected `</{expected}>`, found `</{found}>`")]
    MismatchedEndTag {
        /// The innermost open element.
        expected: String,
        /// The end tag encountered.
        found: String,
    },

    /// An end tag appears while no element is open.
    #[error("unexpected end tag `</{found}>`")]
    UnexpectedEndTag {
        /// The end tag encountered.
        found: String,
    },

    /// Text or an element appears outside the root element.
    #[error("content outside the root element")]
    TrailingContent,

    /// A malformed entity or character reference.
    #[error("invalid escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// A reference to an entity that is not predefined.
    #[error("unknown entity `&{0};`")]
    UnknownEntity(String),

    /// An error from the underlying quick-xml reader.
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// Names or text that are not valid UTF-8.
    #[error("invalid encoding: {0}")]
    Encoding(String),
}

/// Errors that can occur while serializing or deserializing records.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The XML text is malformed.
    #[error("XML parse error: {0}")]
    Parse(#[from] ParseError),

    /// The record schema cannot be mapped to XML.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The decoded data does not satisfy the record schema.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl XmlError {
    /// Whether the XML text was malformed.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Whether the schema could not be mapped.
    #[must_use]
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// Whether validation failed.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The schema error, if this is one.
    #[must_use]
    pub fn as_schema_error(&self) -> Option<&SchemaError> {
        match self {
            Self::Schema(e) => Some(e),
            _ => None,
        }
    }

    /// The validation error, if this is one.
    #[must_use]
    pub fn as_validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
