//! Highlight and takeaway anchoring call sites
//!
//! Thin consumers over the locator and mutator: anchor a highlight's quoted
//! text in a note, detach a deleted highlight, and compose report sections.
//! A quote that no longer exists in the document (stale after an edit) is a
//! loggable miss, never a hard error.

use crate::{annotate, remove_annotation};
use doc_tree::{DocumentNode, TreeEditor};

/// Anchor a highlight's quote in the document tree
///
/// Returns whether the quote was found and wrapped. Callers persist the
/// mutated tree only on success.
pub fn anchor_highlight(tree: &mut DocumentNode, quote: &str, highlight_id: &str) -> bool {
    let anchored = annotate(tree, quote, highlight_id);
    if !anchored {
        tracing::debug!(
            "Highlight text not found in document: {} ({} chars)",
            highlight_id,
            quote.chars().count()
        );
    }
    anchored
}

/// Detach a highlight from the document tree
///
/// Strips the ID from every mark carrying it and unwraps marks left empty.
/// Returns whether the document changed.
pub fn unanchor_highlight(tree: &mut DocumentNode, highlight_id: &str) -> bool {
    let removed = remove_annotation(tree, highlight_id);
    if !removed {
        tracing::debug!("No annotation found for highlight: {}", highlight_id);
    }
    removed
}

/// Append a source document's content to a report and close the section
/// with an embedded block reference
pub fn compose_section(
    report: &mut DocumentNode,
    source: &DocumentNode,
    block_ref_id: &str,
    block_kind: &str,
) {
    TreeEditor::append(report, source);
    TreeEditor::insert_block_reference(report, block_ref_id, block_kind);
}
