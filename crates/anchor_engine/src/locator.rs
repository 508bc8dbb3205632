//! Span location - finding a substring across text leaves
//!
//! A target string may sit inside one leaf, span several adjacent leaves,
//! or cover only part of the first and last leaf it touches. The locator
//! reconstructs it greedily in a single pre-order pass; callers supply text
//! that originated from the document's own rendered plain text, so a miss
//! is an expected outcome, not an error.

use doc_tree::{DocumentNode, NodePath, TreeWalker};
use serde::{Deserialize, Serialize};

/// A contiguous run of characters within one text leaf
///
/// Offsets are Unicode scalar (char) indices into the leaf's text, with
/// `start` inclusive and `end` exclusive. A match for a target is an
/// ordered list of spans whose concatenated text equals the target exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Child-index path from the search root to the text leaf
    pub path: NodePath,
    /// First matched char offset within the leaf
    pub start: usize,
    /// One past the last matched char offset
    pub end: usize,
}

/// Locate a target string among the text leaves of a subtree
///
/// Walks leaves in pre-order, consuming the target greedily: each leaf must
/// continue the match with some suffix-aligned run, at the smallest offset
/// where one exists. A leaf that cannot continue a partial match discards
/// the accumulated spans and is re-evaluated once as a fresh match start;
/// leaves before it are never revisited. Matching is exact, case- and
/// whitespace-sensitive. An empty target is a defined no-match.
pub fn locate(root: &DocumentNode, target: &str) -> Option<Vec<Span>> {
    if target.is_empty() {
        return None;
    }

    let target_chars: Vec<char> = target.chars().collect();
    let mut remaining: &[char] = &target_chars;
    let mut spans: Vec<Span> = Vec::new();

    for visited in TreeWalker::new(root).text_nodes() {
        let leaf: Vec<char> = visited.node.text_content().chars().collect();

        let mut aligned = align(&leaf, remaining);
        if aligned.is_none() && !spans.is_empty() {
            // Restart without rewind: drop the partial match and give this
            // leaf one chance as a fresh start.
            spans.clear();
            remaining = &target_chars;
            aligned = align(&leaf, remaining);
        }

        if let Some((start, length)) = aligned {
            spans.push(Span {
                path: visited.path,
                start,
                end: start + length,
            });
            remaining = &remaining[length..];
            if remaining.is_empty() {
                return Some(spans);
            }
        }
    }

    None
}

/// Find the smallest leaf offset whose suffix-aligned run matches a prefix
/// of the remaining target; returns (offset, matched length)
fn align(leaf: &[char], remaining: &[char]) -> Option<(usize, usize)> {
    for i in 0..leaf.len() {
        let length = (leaf.len() - i).min(remaining.len());
        if leaf[i..i + length] == remaining[..length] {
            return Some((i, length));
        }
    }
    None
}
