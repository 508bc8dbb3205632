//! Plain-text extraction from a document subtree
//!
//! The output feeds sentence segmentation, so block-level kinds separate
//! their content with blank lines while inline kinds pass straight through.

use doc_tree::{DocumentNode, NodeType};

/// Render a subtree to plain text
///
/// Pure function of the tree content: the same tree always yields the same
/// string. Block references render as nothing here; only markdown resolves
/// them.
pub fn to_plain_text(node: &DocumentNode) -> String {
    let mut out = String::new();
    render_into(node, &mut out);
    out
}

fn render_into(node: &DocumentNode, out: &mut String) {
    if node.node_type() == NodeType::Text {
        out.push_str(node.text_content());
        return;
    }

    for child in node.children() {
        render_into(child, out);
    }

    if is_block(node.node_type()) {
        out.push_str("\n\n");
    }
}

fn is_block(node_type: NodeType) -> bool {
    matches!(
        node_type,
        NodeType::Paragraph
            | NodeType::Heading
            | NodeType::Quote
            | NodeType::ListItem
            | NodeType::List
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str) -> DocumentNode {
        let mut para = DocumentNode::container("paragraph");
        para.push_child(DocumentNode::text(text));
        para
    }

    #[test]
    fn test_two_paragraphs() {
        let mut root = DocumentNode::container("root");
        root.push_child(paragraph("Hello"));
        root.push_child(paragraph("World"));

        assert_eq!(to_plain_text(&root), "Hello\n\nWorld\n\n");
    }

    #[test]
    fn test_inline_kinds_pass_through() {
        let mut link = DocumentNode::container("link");
        link.url = Some("https://example.com".to_string());
        link.push_child(DocumentNode::text("here"));

        let mut para = DocumentNode::container("paragraph");
        para.push_child(DocumentNode::text("Click "));
        para.push_child(link);
        para.push_child(DocumentNode::text(" now"));

        assert_eq!(to_plain_text(&para), "Click here now\n\n");
    }

    #[test]
    fn test_mark_is_transparent() {
        let mut mark = DocumentNode::mark(vec!["h1".to_string()]);
        mark.push_child(DocumentNode::text("sample"));

        let mut para = DocumentNode::container("paragraph");
        para.push_child(DocumentNode::text("a "));
        para.push_child(mark);
        para.push_child(DocumentNode::text(" text"));

        assert_eq!(to_plain_text(&para), "a sample text\n\n");
    }

    #[test]
    fn test_is_idempotent_for_fixed_tree() {
        let mut root = DocumentNode::container("root");
        root.push_child(paragraph("Stable"));

        assert_eq!(to_plain_text(&root), to_plain_text(&root));
    }

    #[test]
    fn test_block_reference_renders_as_nothing() {
        let mut root = DocumentNode::container("root");
        root.push_child(paragraph("Before"));
        root.push_child(DocumentNode::block_reference("takeaway-block", "b1"));

        assert_eq!(to_plain_text(&root), "Before\n\n");
    }
}
