//! Core type definitions for the graph engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node.
///
/// An opaque, already-normalized string token: the presentation layer
/// upper-cases raw input before constructing one, and the core performs
/// no normalization of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

/// Unique identifier for an edge, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new("A");
        assert_eq!(id.as_str(), "A");
        assert_eq!(format!("{}", id), "A");

        let id2: NodeId = "HUB".into();
        assert_eq!(id2.as_str(), "HUB");
    }

    #[test]
    fn test_node_id_is_opaque() {
        // No implicit normalization: distinct case means distinct identity
        assert_ne!(NodeId::new("a"), NodeId::new("A"));
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(99);
        assert_eq!(id.as_u64(), 99);
        assert_eq!(format!("{}", id), "EdgeId(99)");
    }

    #[test]
    fn test_id_ordering() {
        assert!(NodeId::new("A") < NodeId::new("B"));
        assert!(EdgeId::new(1) < EdgeId::new(2));
    }
}
