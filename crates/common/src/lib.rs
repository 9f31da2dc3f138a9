//! Common types and utilities for apidoc
//!
//! This crate contains the source documentation model produced by the
//! documentation parser, the shared type-schema descriptor, and the error
//! type used across the openapi, output, and CLI components.

mod document;
mod schema;

pub use document::{
    Contact, Document, Endpoint, Example, Header, License, Param, RequestVariant,
    ResponseVariant, Server, Tag,
};
pub use schema::Schema;

use thiserror::Error;

/// Errors that can occur while rendering documentation
#[derive(Error, Debug)]
pub enum ApidocError {
    /// Two endpoints declare the same method on the same path
    #[error("duplicate value at {field} for path {path}")]
    DuplicateOperation { field: String, path: String },

    /// An option value is missing or invalid
    #[error("invalid value for {field}: {message}")]
    Field { field: String, message: String },

    /// The output type is recognised but has no marshaler
    #[error("unsupported output type: {0}")]
    UnsupportedFormat(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ApidocError {
    /// Build a [`ApidocError::Field`] error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for apidoc operations
pub type Result<T> = std::result::Result<T, ApidocError>;
