//! In-memory graph storage
//!
//! Owns every node and edge for one editing session. Mutations are
//! all-or-nothing: a rejected operation leaves the store untouched.
//! Iteration over nodes and edges follows insertion order, which is what
//! makes every downstream algorithm result deterministic.

use super::edge::Edge;
use super::node::Node;
use super::types::{EdgeId, NodeId};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by graph mutations.
///
/// All of these are recoverable construction errors: the caller rejects
/// the input and the prior state is unchanged. Negative algorithm
/// outcomes (no path, cycle, disconnection) are never expressed here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node {0} already exists")]
    NodeAlreadyExists(NodeId),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("negative edge weight {0}")]
    NegativeWeight(f64),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph store.
///
/// - `nodes`: insertion-ordered map, NodeId -> Node
/// - `edges`: insertion-ordered map, EdgeId -> Edge
/// - `outgoing` / `incoming`: adjacency lists of edge ids per node
#[derive(Debug)]
pub struct GraphStore {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeId, Edge>,
    outgoing: FxHashMap<NodeId, Vec<EdgeId>>,
    incoming: FxHashMap<NodeId, Vec<EdgeId>>,
    next_edge_id: u64,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            outgoing: FxHashMap::default(),
            incoming: FxHashMap::default(),
            next_edge_id: 1,
        }
    }

    /// Add a node whose display label is its id token.
    ///
    /// A duplicate id is rejected, never silently ignored or overwritten.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> GraphResult<()> {
        let id = id.into();
        self.insert_node(Node::new(id))
    }

    /// Add a node with an explicit display label
    pub fn add_node_with_label(
        &mut self,
        id: impl Into<NodeId>,
        label: impl Into<String>,
    ) -> GraphResult<()> {
        self.insert_node(Node::with_label(id.into(), label))
    }

    fn insert_node(&mut self, node: Node) -> GraphResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::NodeAlreadyExists(node.id));
        }
        debug!(node = %node.id, "add node");
        self.outgoing.insert(node.id.clone(), Vec::new());
        self.incoming.insert(node.id.clone(), Vec::new());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Add a directed edge between two existing nodes.
    ///
    /// The weight is validated first (as the interactive front end does),
    /// then both endpoints; `!(weight >= 0.0)` also rejects NaN. Parallel
    /// edges and self-loops are permitted.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: f64,
    ) -> GraphResult<EdgeId> {
        let from = from.into();
        let to = to.into();

        if !(weight >= 0.0) {
            return Err(GraphError::NegativeWeight(weight));
        }
        if !self.nodes.contains_key(&from) {
            return Err(GraphError::NodeNotFound(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::NodeNotFound(to));
        }

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        debug!(edge = %id, %from, %to, weight, "add edge");

        if let Some(list) = self.outgoing.get_mut(&from) {
            list.push(id);
        }
        if let Some(list) = self.incoming.get_mut(&to) {
            list.push(id);
        }
        self.edges.insert(id, Edge::new(id, from, to, weight));
        Ok(id)
    }

    /// Remove a node and every edge referencing it.
    ///
    /// The cascade preserves the referential invariant: no edge may
    /// outlive either of its endpoints.
    pub fn remove_node(&mut self, id: &NodeId) -> GraphResult<()> {
        if !self.nodes.contains_key(id) {
            return Err(GraphError::NodeNotFound(id.clone()));
        }

        let mut doomed: Vec<EdgeId> = Vec::new();
        doomed.extend(self.outgoing.get(id).into_iter().flatten().copied());
        doomed.extend(self.incoming.get(id).into_iter().flatten().copied());
        doomed.sort();
        doomed.dedup(); // self-loops show up in both lists

        for edge_id in doomed {
            // shift_remove keeps insertion order for the surviving edges
            if let Some(edge) = self.edges.shift_remove(&edge_id) {
                if let Some(list) = self.outgoing.get_mut(&edge.source) {
                    list.retain(|e| *e != edge_id);
                }
                if let Some(list) = self.incoming.get_mut(&edge.target) {
                    list.retain(|e| *e != edge_id);
                }
            }
        }

        self.outgoing.remove(id);
        self.incoming.remove(id);
        self.nodes.shift_remove(id);
        debug!(node = %id, "removed node and incident edges");
        Ok(())
    }

    /// Every edge whose source is `id`, in insertion order.
    /// Unknown ids yield an empty list.
    pub fn outgoing_edges(&self, id: &NodeId) -> Vec<&Edge> {
        self.edge_refs(self.outgoing.get(id))
    }

    /// Every edge whose target is `id`, in insertion order
    pub fn incoming_edges(&self, id: &NodeId) -> Vec<&Edge> {
        self.edge_refs(self.incoming.get(id))
    }

    fn edge_refs(&self, ids: Option<&Vec<EdgeId>>) -> Vec<&Edge> {
        ids.into_iter()
            .flatten()
            .filter_map(|id| self.edges.get(id))
            .collect()
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes, in insertion order
    pub fn all_nodes(&self) -> Vec<&Node> {
        self.nodes.values().collect()
    }

    /// All edges, in insertion order
    pub fn all_edges(&self) -> Vec<&Edge> {
        self.edges.values().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all nodes and edges atomically and restart edge-id
    /// assignment. No partially cleared state is ever observable.
    pub fn clear(&mut self) {
        info!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "clearing graph"
        );
        self.nodes.clear();
        self.edges.clear();
        self.outgoing.clear();
        self.incoming.clear();
        self.next_edge_id = 1;
    }
}
