//! Edge implementation

use super::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// A directed, weighted edge.
///
/// Multiple edges between the same ordered pair of nodes are permitted
/// and stay distinct entities; identity is the `EdgeId` alone. Weight is
/// immutable once created; changing a connection means removing and
/// re-adding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Non-negative weight
    pub weight: f64,
}

impl Edge {
    /// Create a new directed edge. Weight validation happens in the
    /// store, before an id is ever assigned.
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, weight: f64) -> Self {
        Edge { id, source, target, weight }
    }

    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, node: &NodeId) -> bool {
        self.source == *node
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: &NodeId) -> bool {
        self.target == *node
    }

    /// Whether source and target are the same node
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
