//! Annotation mutation - wrapping matched text in mark nodes
//!
//! Splits affected text leaves at span boundaries and wraps the matched
//! slice in a "mark" node carrying entity IDs, in place. Failure to find
//! the target is reported as a boolean; the tree is never left partially
//! annotated.

use crate::{locate, Span};
use doc_tree::{DocumentNode, NodeType, TreeWalker};

/// Wrap every occurrence span of `target_text` in a mark carrying `entity_id`
///
/// Returns false without touching the tree when the target is empty or not
/// found. Split leaves are copies of the original, so uninterpreted
/// attributes (formatting flags and the like) survive the split. The
/// mutator never deduplicates IDs; merging across existing marks is the
/// caller's policy.
pub fn annotate(root: &mut DocumentNode, target_text: &str, entity_id: &str) -> bool {
    if target_text.is_empty() {
        return false;
    }
    let spans = match locate(root, target_text) {
        Some(spans) => spans,
        None => return false,
    };
    // The subtree root itself cannot be replaced within a parent
    if spans.iter().any(|span| span.path.is_empty()) {
        return false;
    }

    // Splice last to first so pending child indices stay valid
    for span in spans.iter().rev() {
        splice_span(root, span, entity_id);
    }
    true
}

fn splice_span(root: &mut DocumentNode, span: &Span, entity_id: &str) {
    let (leaf_index, parent_path) = match span.path.split_last() {
        Some((last, init)) => (*last, init),
        None => return,
    };
    let parent = match root.node_at_path_mut(parent_path) {
        Some(parent) => parent,
        None => return,
    };

    let children = parent.children_mut();
    let original = children[leaf_index].clone();
    let chars: Vec<char> = original.text_content().chars().collect();
    let slice = |from: usize, to: usize| -> String { chars[from..to].iter().collect() };

    let mut replacement: Vec<DocumentNode> = Vec::with_capacity(3);

    if span.start > 0 {
        let mut before = original.clone();
        before.text = Some(slice(0, span.start));
        replacement.push(before);
    }

    let mut inner = original.clone();
    inner.text = Some(slice(span.start, span.end));
    let mut mark = DocumentNode::mark(vec![entity_id.to_string()]);
    mark.push_child(inner);
    replacement.push(mark);

    if span.end < chars.len() {
        let mut after = original.clone();
        after.text = Some(slice(span.end, chars.len()));
        replacement.push(after);
    }

    children.splice(leaf_index..leaf_index + 1, replacement);
}

/// Strip an entity ID from every mark carrying it
///
/// Marks left with no IDs are unwrapped: their children are spliced into
/// the parent in place of the mark. Returns whether anything changed.
pub fn remove_annotation(root: &mut DocumentNode, entity_id: &str) -> bool {
    let mut changed = false;
    remove_in(root, entity_id, &mut changed);
    changed
}

fn remove_in(node: &mut DocumentNode, entity_id: &str, changed: &mut bool) {
    let children = match node.children.as_mut() {
        Some(children) => children,
        None => return,
    };

    for child in children.iter_mut() {
        remove_in(child, entity_id, changed);
    }

    let mut index = children.len();
    while index > 0 {
        index -= 1;
        if children[index].node_type() != NodeType::Mark {
            continue;
        }
        if let Some(ids) = children[index].entity_ids.as_mut() {
            let before_len = ids.len();
            ids.retain(|id| id != entity_id);
            if ids.len() != before_len {
                *changed = true;
            }
            if ids.is_empty() {
                let unwrapped = children[index].children.take().unwrap_or_default();
                children.splice(index..index + 1, unwrapped);
            }
        }
    }
}

/// Collect every entity ID carried by marks in a subtree
///
/// Pre-order, de-duplicated, first occurrence wins. Callers use this to
/// merge IDs before generating new annotations over already-marked text.
pub fn collect_entity_ids(root: &DocumentNode) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for visited in TreeWalker::new(root).find_all(|node| node.node_type() == NodeType::Mark) {
        for id in visited.node.entity_ids.iter().flatten() {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
    }
    ids
}
