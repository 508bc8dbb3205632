//! Block reference resolution boundary
//!
//! Takeaway and theme blocks embed an ID pointing at a collection owned by
//! the surrounding system. Rendering receives a resolver as an injected
//! dependency rather than reaching for an ambient store.

use std::collections::HashMap;

/// The resolved contents of a referenced block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedBlock {
    /// Titles of the entities associated with the block, in display order
    pub titles: Vec<String>,
}

impl ResolvedBlock {
    /// Create a resolved block from a list of titles
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles }
    }
}

/// Lookup interface for embedded block references
pub trait BlockResolver {
    /// Resolve a block ID to its contents, or None if it does not exist
    fn resolve_block(&self, block_ref_id: &str) -> Option<ResolvedBlock>;
}

/// In-memory block store, for callers that preload their blocks and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryBlockResolver {
    blocks: HashMap<String, ResolvedBlock>,
}

impl MemoryBlockResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block's titles under an ID
    pub fn insert(&mut self, block_ref_id: impl Into<String>, titles: Vec<String>) {
        self.blocks
            .insert(block_ref_id.into(), ResolvedBlock::new(titles));
    }
}

impl BlockResolver for MemoryBlockResolver {
    fn resolve_block(&self, block_ref_id: &str) -> Option<ResolvedBlock> {
        self.blocks.get(block_ref_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_resolver_lookup() {
        let mut resolver = MemoryBlockResolver::new();
        resolver.insert("b1", vec!["First".to_string(), "Second".to_string()]);

        let block = resolver.resolve_block("b1").unwrap();
        assert_eq!(block.titles, vec!["First", "Second"]);
        assert!(resolver.resolve_block("missing").is_none());
    }
}
