//! Error types for loading trees and parsing input.
//!
//! Engine operations never fail; these errors only come from turning external
//! data into a forest or a key.

use thiserror::Error;

/// Errors raised while loading or validating a tree document.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A node has an empty id
    #[error("node with label '{label}' has an empty id")]
    EmptyId { label: String },

    /// Two nodes in the same forest share an id
    #[error("duplicate node id '{id}'")]
    DuplicateId { id: String },

    /// The document is not valid JSON or does not match the schema
    #[error("invalid tree document: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the document failed
    #[error("failed to read tree document: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while parsing a key name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// Nothing to parse
    #[error("empty key name")]
    Empty,

    /// Not a known key name or single character
    #[error("unknown key '{0}'")]
    Unknown(String),
}
