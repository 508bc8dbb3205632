//! Markdown rendering of a document subtree
//!
//! Produces the human- and LLM-facing view of a note: headings, quotes,
//! lists, and links in markdown, with embedded takeaway/theme blocks
//! expanded through the injected resolver.

use crate::{BlockResolver, RenderError, Result};
use doc_tree::{DocumentNode, NodeType};

/// Render a subtree to markdown
///
/// Heading tags must match `h<digits>`; anything else means the persisted
/// content is corrupt and surfaces as an error rather than a silent
/// default. Block references that the resolver does not know are errors
/// for the same reason.
pub fn to_markdown(node: &DocumentNode, resolver: &dyn BlockResolver) -> Result<String> {
    match node.node_type() {
        NodeType::Text => Ok(node.text_content().to_string()),
        NodeType::TakeawayBlock => block_list("Takeaways:", node, resolver),
        NodeType::ThemeBlock => block_list("Themes:", node, resolver),
        NodeType::Heading => {
            let content = children_markdown(node, resolver)?;
            let level = heading_level(node)?;
            Ok(format!("{} {}\n\n", "#".repeat(level), content))
        }
        NodeType::Paragraph => {
            let content = children_markdown(node, resolver)?;
            Ok(format!("{}\n\n", content))
        }
        NodeType::Quote => {
            let content = children_markdown(node, resolver)?;
            Ok(format!("> {}\n\n", content))
        }
        NodeType::Link | NodeType::Autolink => {
            let content = children_markdown(node, resolver)?;
            let url = node.url.as_deref().ok_or_else(|| {
                RenderError::MalformedDocument(format!("{} node without a url", node.kind))
            })?;
            Ok(format!("[{}]({})", content, url))
        }
        NodeType::ListItem => {
            let content = children_markdown(node, resolver)?;
            Ok(format!("- {}\n", content))
        }
        NodeType::List => {
            let content = children_markdown(node, resolver)?;
            Ok(format!("{}\n", content))
        }
        _ => children_markdown(node, resolver),
    }
}

fn children_markdown(node: &DocumentNode, resolver: &dyn BlockResolver) -> Result<String> {
    let mut out = String::new();
    for child in node.children() {
        out.push_str(&to_markdown(child, resolver)?);
    }
    Ok(out)
}

/// Parse the heading level from a node's `tag` attribute
fn heading_level(node: &DocumentNode) -> Result<usize> {
    let tag = node.tag.as_deref().ok_or_else(|| {
        RenderError::MalformedDocument("heading node without a tag".to_string())
    })?;

    if let Ok(re) = regex_lite::Regex::new(r"^h([0-9]+)$") {
        if let Some(captures) = re.captures(tag) {
            if let Some(level) = captures.get(1).and_then(|m| m.as_str().parse().ok()) {
                return Ok(level);
            }
        }
    }

    Err(RenderError::MalformedDocument(format!(
        "heading node with invalid tag: {}",
        tag
    )))
}

/// Render an embedded block as a titled bullet list
fn block_list(title: &str, node: &DocumentNode, resolver: &dyn BlockResolver) -> Result<String> {
    let block_ref_id = node.block_ref_id.as_deref().ok_or_else(|| {
        RenderError::MalformedDocument(format!("{} node without a block id", node.kind))
    })?;

    let block = resolver
        .resolve_block(block_ref_id)
        .ok_or_else(|| RenderError::UnresolvedBlockReference(block_ref_id.to_string()))?;

    let mut out = String::from(title);
    out.push('\n');
    for entity_title in &block.titles {
        out.push_str("- ");
        out.push_str(entity_title);
        out.push('\n');
    }
    out.push('\n');
    Ok(out)
}
