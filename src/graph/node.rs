//! Node implementation

use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A node in the graph.
///
/// Carries nothing beyond identity and a display label. The label is a
/// presentation concern; equality and hashing use the id only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Display label, defaults to the id token
    pub label: String,
}

impl Node {
    /// Create a node whose label is its id token
    pub fn new(id: impl Into<NodeId>) -> Self {
        let id = id.into();
        let label = id.as_str().to_string();
        Node { id, label }
    }

    /// Create a node with an explicit display label
    pub fn with_label(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_defaults_to_id() {
        let node = Node::new("A");
        assert_eq!(node.id, NodeId::new("A"));
        assert_eq!(node.label, "A");
    }

    #[test]
    fn test_explicit_label() {
        let node = Node::with_label("HQ", "Headquarters");
        assert_eq!(node.id.as_str(), "HQ");
        assert_eq!(node.label, "Headquarters");
    }

    #[test]
    fn test_equality_by_identity_only() {
        let a = Node::new("A");
        let b = Node::with_label("A", "something else");
        let c = Node::new("C");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
