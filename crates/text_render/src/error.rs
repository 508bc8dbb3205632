//! Error types for rendering operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Unresolved block reference: {0}")]
    UnresolvedBlockReference(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
