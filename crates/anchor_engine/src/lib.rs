//! Anchor Engine - locating text spans and anchoring entities to them
//!
//! Given a quote and an entity ID, this crate finds where the quote lives
//! among the document's text leaves (possibly spanning and partially
//! covering several of them) and wraps the matched text in annotation
//! nodes, splitting leaves as needed. Misses are values, not errors: stale
//! quotes are an expected outcome after document edits.

mod highlight;
mod locator;
mod mutator;

pub use highlight::*;
pub use locator::*;
pub use mutator::*;
