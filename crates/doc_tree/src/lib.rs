//! Document Tree - rich-text tree model for notes and reports
//!
//! This crate provides the recursive document tree that backs a note's
//! rich-text content: the node model with lossless JSON round-tripping,
//! pre-order traversal, and structural composition helpers.

mod editor;
mod error;
mod node;
mod walker;

pub use editor::*;
pub use error::*;
pub use node::*;
pub use walker::*;
