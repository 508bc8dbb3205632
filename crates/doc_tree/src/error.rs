//! Error types for document tree operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocTreeError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocTreeError>;
