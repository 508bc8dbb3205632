//! Text Render - linear string views of the document tree
//!
//! Converts a document subtree to plain text (sentence segmentation input)
//! or markdown (human/LLM display), resolving embedded takeaway and theme
//! blocks through an injected lookup.

mod error;
mod markdown;
mod plain;
mod resolver;

pub use error::*;
pub use markdown::*;
pub use plain::*;
pub use resolver::*;
