//! Tree traversal - pre-order iteration and predicate filtering
//!
//! Traversal order is always pre-order, left to right, and deterministic
//! for a given tree. Span location depends on that stable leaf ordering.

use crate::{DocumentNode, NodePath, NodeType};

/// A node yielded during traversal, with its traversal-time position
///
/// The path and depth are established while walking and are not stored on
/// the tree itself. The parent is reachable by dropping the last path
/// segment; the path never implies ownership.
#[derive(Debug, Clone)]
pub struct VisitedNode<'a> {
    /// The visited node
    pub node: &'a DocumentNode,
    /// Child-index path from the traversal root to this node
    pub path: NodePath,
    /// Distance from the traversal root (root itself is depth 0)
    pub depth: usize,
}

impl<'a> VisitedNode<'a> {
    /// Path to this node's parent, or None for the traversal root
    pub fn parent_path(&self) -> Option<&[usize]> {
        if self.path.is_empty() {
            None
        } else {
            Some(&self.path[..self.path.len() - 1])
        }
    }

    /// Index of this node in its parent's child sequence
    pub fn child_index(&self) -> Option<usize> {
        self.path.last().copied()
    }
}

/// Traversal utilities over a document subtree
pub struct TreeWalker<'a> {
    root: &'a DocumentNode,
}

impl<'a> TreeWalker<'a> {
    /// Create a walker rooted at the given subtree
    pub fn new(root: &'a DocumentNode) -> Self {
        Self { root }
    }

    /// Yield the root and every descendant in pre-order
    ///
    /// Restartable: each call walks the tree again from the root.
    pub fn flatten(&self) -> Flatten<'a> {
        Flatten {
            stack: vec![VisitedNode {
                node: self.root,
                path: Vec::new(),
                depth: 0,
            }],
        }
    }

    /// Yield the nodes matching a predicate, in pre-order
    pub fn find_all<P>(&self, predicate: P) -> impl Iterator<Item = VisitedNode<'a>>
    where
        P: Fn(&DocumentNode) -> bool + 'a,
    {
        self.flatten().filter(move |visited| predicate(visited.node))
    }

    /// Yield every text leaf, in pre-order
    pub fn text_nodes(&self) -> impl Iterator<Item = VisitedNode<'a>> {
        self.find_all(|node| node.node_type() == NodeType::Text)
    }
}

/// Pre-order iterator over a subtree
pub struct Flatten<'a> {
    stack: Vec<VisitedNode<'a>>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = VisitedNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visited = self.stack.pop()?;

        // Children pushed in reverse so the leftmost is popped first
        for (index, child) in visited.node.children().iter().enumerate().rev() {
            let mut path = visited.path.clone();
            path.push(index);
            self.stack.push(VisitedNode {
                node: child,
                path,
                depth: visited.depth + 1,
            });
        }

        Some(visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DocumentNode {
        let mut root = DocumentNode::container("root");

        let mut first = DocumentNode::container("paragraph");
        first.push_child(DocumentNode::text("one"));
        first.push_child(DocumentNode::text("two"));

        let mut second = DocumentNode::container("paragraph");
        second.push_child(DocumentNode::text("three"));

        root.push_child(first);
        root.push_child(second);
        root
    }

    #[test]
    fn test_flatten_is_pre_order() {
        let tree = sample_tree();
        let kinds: Vec<String> = TreeWalker::new(&tree)
            .flatten()
            .map(|v| {
                if v.node.node_type() == NodeType::Text {
                    v.node.text_content().to_string()
                } else {
                    v.node.kind.clone()
                }
            })
            .collect();

        assert_eq!(
            kinds,
            vec!["root", "paragraph", "one", "two", "paragraph", "three"]
        );
    }

    #[test]
    fn test_flatten_paths_and_depths() {
        let tree = sample_tree();
        let visited: Vec<_> = TreeWalker::new(&tree).flatten().collect();

        assert_eq!(visited[0].path, Vec::<usize>::new());
        assert_eq!(visited[0].depth, 0);
        assert!(visited[0].parent_path().is_none());

        assert_eq!(visited[3].path, vec![0, 1]);
        assert_eq!(visited[3].depth, 2);
        assert_eq!(visited[3].parent_path(), Some(&[0][..]));
        assert_eq!(visited[3].child_index(), Some(1));
    }

    #[test]
    fn test_flatten_is_restartable() {
        let tree = sample_tree();
        let walker = TreeWalker::new(&tree);
        assert_eq!(walker.flatten().count(), 6);
        assert_eq!(walker.flatten().count(), 6);
    }

    #[test]
    fn test_text_nodes_in_document_order() {
        let tree = sample_tree();
        let texts: Vec<&str> = TreeWalker::new(&tree)
            .text_nodes()
            .map(|v| v.node.text_content())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_find_all_with_predicate() {
        let tree = sample_tree();
        let count = TreeWalker::new(&tree)
            .find_all(|node| node.kind == "paragraph")
            .count();
        assert_eq!(count, 2);
    }
}
