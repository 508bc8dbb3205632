//! Document node - one node of the recursive rich-text tree
//!
//! The serialized JSON shape of a note's content is the external contract:
//! deserializing and re-serializing a tree must reproduce it exactly,
//! including attributes this crate does not interpret. Unrecognized
//! attributes are captured in a flattened map and written back verbatim.

use crate::{DocTreeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Enumeration of the node kinds the engine interprets
///
/// Kinds are persisted as free-form string tags; anything outside the known
/// set dispatches to `Other` and passes through rendering and traversal
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Root,
    Paragraph,
    Heading,
    Quote,
    List,
    ListItem,
    Link,
    Autolink,
    Text,
    Mark,
    TakeawayBlock,
    ThemeBlock,
    Other,
}

impl NodeType {
    /// Map a serialized kind tag to a node type
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "root" => NodeType::Root,
            "paragraph" => NodeType::Paragraph,
            "heading" => NodeType::Heading,
            "quote" => NodeType::Quote,
            "list" => NodeType::List,
            "listitem" => NodeType::ListItem,
            "link" => NodeType::Link,
            "autolink" => NodeType::Autolink,
            "text" => NodeType::Text,
            "mark" => NodeType::Mark,
            "takeaway-block" => NodeType::TakeawayBlock,
            "theme-block" => NodeType::ThemeBlock,
            _ => NodeType::Other,
        }
    }

    /// Check if this kind carries an ordered child sequence
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeType::Root
                | NodeType::Paragraph
                | NodeType::Heading
                | NodeType::Quote
                | NodeType::List
                | NodeType::ListItem
                | NodeType::Link
                | NodeType::Autolink
                | NodeType::Mark
        )
    }
}

/// A path from a subtree root to a descendant, as child indices
///
/// Node identity is positional: a node is addressed by where it sits in its
/// ancestors' child sequences, not by a global ID.
pub type NodePath = Vec<usize>;

/// One node of the document tree
///
/// Container kinds carry an ordered child sequence; `"text"` leaves carry a
/// literal string. Kind-specific attributes (`tag`, `url`, `ids`,
/// `blockId`) are optional and omitted from the serialized form when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    /// The kind tag (serialized as "type")
    #[serde(rename = "type")]
    pub kind: String,

    /// Ordered children (container kinds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DocumentNode>>,

    /// Literal text content ("text" leaves)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Heading level tag, e.g. "h2"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Link target ("link" / "autolink")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Entity IDs carried by a "mark" node (serialized as "ids")
    #[serde(rename = "ids", default, skip_serializing_if = "Option::is_none")]
    pub entity_ids: Option<Vec<String>>,

    /// Referenced block ID ("takeaway-block" / "theme-block")
    #[serde(rename = "blockId", default, skip_serializing_if = "Option::is_none")]
    pub block_ref_id: Option<String>,

    /// Attributes the engine does not interpret, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentNode {
    /// Create an empty container node of the given kind
    pub fn container(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            children: Some(Vec::new()),
            text: None,
            tag: None,
            url: None,
            entity_ids: None,
            block_ref_id: None,
            extra: Map::new(),
        }
    }

    /// Create a text leaf node
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            children: None,
            text: Some(content.into()),
            tag: None,
            url: None,
            entity_ids: None,
            block_ref_id: None,
            extra: Map::new(),
        }
    }

    /// Create an annotation ("mark") node carrying entity IDs
    pub fn mark(entity_ids: Vec<String>) -> Self {
        Self {
            kind: "mark".to_string(),
            children: Some(Vec::new()),
            text: None,
            tag: None,
            url: None,
            entity_ids: Some(entity_ids),
            block_ref_id: None,
            extra: Map::new(),
        }
    }

    /// Create a leaf block-reference node of the given kind
    pub fn block_reference(kind: impl Into<String>, block_ref_id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            children: None,
            text: None,
            tag: None,
            url: None,
            entity_ids: None,
            block_ref_id: Some(block_ref_id.into()),
            extra: Map::new(),
        }
    }

    /// Get the type of this node
    pub fn node_type(&self) -> NodeType {
        NodeType::from_kind(&self.kind)
    }

    /// Get the ordered children, or an empty slice for leaves
    pub fn children(&self) -> &[DocumentNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Get a mutable reference to the child sequence
    ///
    /// Materializes an empty sequence on a node that had none; only call
    /// this on container kinds.
    pub fn children_mut(&mut self) -> &mut Vec<DocumentNode> {
        self.children.get_or_insert_with(Vec::new)
    }

    /// Append a child node
    pub fn push_child(&mut self, child: DocumentNode) {
        self.children_mut().push(child);
    }

    /// Get the text content of this node, empty for non-text kinds
    pub fn text_content(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Resolve a path of child indices to a node in this subtree
    pub fn node_at_path(&self, path: &[usize]) -> Option<&DocumentNode> {
        let mut current = self;
        for &index in path {
            current = current.children().get(index)?;
        }
        Some(current)
    }

    /// Resolve a path of child indices to a mutable node in this subtree
    pub fn node_at_path_mut(&mut self, path: &[usize]) -> Option<&mut DocumentNode> {
        let mut current = self;
        for &index in path {
            current = current.children.as_mut()?.get_mut(index)?;
        }
        Some(current)
    }

    /// Deserialize a tree from its persisted JSON string
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Deserialize a tree from a JSON value
    pub fn from_json_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize this tree back to its persisted JSON string
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize this tree to a JSON value
    pub fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Check the structural invariants of this subtree
    ///
    /// Text leaves must carry text and no children, container kinds must
    /// carry a (possibly empty) child sequence, and mark nodes must carry a
    /// non-empty entity ID list and at least one child. A violation means
    /// the persisted content upstream is corrupt.
    pub fn validate(&self) -> Result<()> {
        match self.node_type() {
            NodeType::Text => {
                if self.text.is_none() {
                    return Err(DocTreeError::MalformedDocument(
                        "text node without text content".to_string(),
                    ));
                }
                if self.children.as_ref().map_or(false, |c| !c.is_empty()) {
                    return Err(DocTreeError::MalformedDocument(
                        "text node with children".to_string(),
                    ));
                }
            }
            NodeType::Mark => {
                if self.entity_ids.as_ref().map_or(true, |ids| ids.is_empty()) {
                    return Err(DocTreeError::MalformedDocument(
                        "mark node without entity ids".to_string(),
                    ));
                }
                if self.children().is_empty() {
                    return Err(DocTreeError::MalformedDocument(
                        "mark node without children".to_string(),
                    ));
                }
            }
            kind if kind.is_container() => {
                if self.children.is_none() {
                    return Err(DocTreeError::MalformedDocument(format!(
                        "{} node without a child sequence",
                        self.kind
                    )));
                }
            }
            _ => {}
        }

        for child in self.children() {
            child.validate()?;
        }
        Ok(())
    }
}
