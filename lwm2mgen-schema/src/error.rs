//! Error types for object definition parsing and validation.

use thiserror::Error;

/// Error type for DDF XML parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required element.
    #[error("missing required element '{element}' in '{context}'")]
    MissingElement {
        /// Parent context.
        context: String,
        /// Element name.
        element: String,
    },

    /// Invalid element content.
    #[error("invalid value '{value}' in element '{element}'")]
    InvalidElement {
        /// Element name.
        element: String,
        /// Invalid value.
        value: String,
    },

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Invalid document structure.
    #[error("invalid object definition structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for object definition validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two resources share the same resource ID.
    #[error("duplicate resource ID {rid}")]
    DuplicateResource {
        /// The duplicated resource ID.
        rid: u16,
    },

    /// A resource declares no operations at all.
    #[error("resource {rid} ('{name}') declares no operations")]
    NoOperations {
        /// Resource ID.
        rid: u16,
        /// Resource name.
        name: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a missing element error.
    pub fn missing_element(context: impl Into<String>, element: impl Into<String>) -> Self {
        Self::MissingElement {
            context: context.into(),
            element: element.into(),
        }
    }

    /// Creates an invalid element error.
    pub fn invalid_element(element: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidElement {
            element: element.into(),
            value: value.into(),
        }
    }

    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}
