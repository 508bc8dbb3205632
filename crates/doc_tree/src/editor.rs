//! Structural composition helpers for whole subtrees
//!
//! Every insertion works on deep copies so two documents never alias the
//! same nodes; the source tree is left untouched.

use crate::DocumentNode;

/// Compose and restructure document subtrees
pub struct TreeEditor;

impl TreeEditor {
    /// Append deep copies of `source`'s children to `target`'s children
    pub fn append(target: &mut DocumentNode, source: &DocumentNode) {
        target.children_mut().extend(source.children().iter().cloned());
    }

    /// Insert deep copies of `source`'s children at the front of `target`
    pub fn prepend(target: &mut DocumentNode, source: &DocumentNode) {
        let copies: Vec<DocumentNode> = source.children().iter().cloned().collect();
        target.children_mut().splice(0..0, copies);
    }

    /// Append a new leaf block-reference node of the given kind
    pub fn insert_block_reference(
        target: &mut DocumentNode,
        block_ref_id: impl Into<String>,
        block_kind: impl Into<String>,
    ) {
        target.push_child(DocumentNode::block_reference(block_kind, block_ref_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeType;

    fn paragraph_with_text(text: &str) -> DocumentNode {
        let mut para = DocumentNode::container("paragraph");
        para.push_child(DocumentNode::text(text));
        para
    }

    fn root_with_paragraphs(texts: &[&str]) -> DocumentNode {
        let mut root = DocumentNode::container("root");
        for text in texts {
            root.push_child(paragraph_with_text(text));
        }
        root
    }

    #[test]
    fn test_append_preserves_order() {
        let mut target = root_with_paragraphs(&["a"]);
        let source = root_with_paragraphs(&["b", "c"]);

        TreeEditor::append(&mut target, &source);

        let texts: Vec<&str> = target
            .children()
            .iter()
            .map(|p| p.children()[0].text_content())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_prepend_puts_source_first() {
        let mut target = root_with_paragraphs(&["a"]);
        let source = root_with_paragraphs(&["b", "c"]);

        TreeEditor::prepend(&mut target, &source);

        let texts: Vec<&str> = target
            .children()
            .iter()
            .map(|p| p.children()[0].text_content())
            .collect();
        assert_eq!(texts, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_append_does_not_alias_source() {
        let mut target = root_with_paragraphs(&["a"]);
        let mut source = root_with_paragraphs(&["b"]);

        TreeEditor::append(&mut target, &source);

        // Mutating the source afterward must not change the target
        source.children_mut()[0].children_mut()[0].text = Some("changed".to_string());
        assert_eq!(target.children()[1].children()[0].text_content(), "b");
        assert_eq!(source.children()[0].children()[0].text_content(), "changed");
    }

    #[test]
    fn test_insert_block_reference() {
        let mut target = root_with_paragraphs(&["a"]);
        TreeEditor::insert_block_reference(&mut target, "block-7", "takeaway-block");

        let inserted = target.children().last().unwrap();
        assert_eq!(inserted.node_type(), NodeType::TakeawayBlock);
        assert_eq!(inserted.block_ref_id.as_deref(), Some("block-7"));
        assert!(inserted.children().is_empty());
    }
}
