//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense-indexed snapshot of the graph topology for
//! algorithm execution. The snapshot owns its data: mutating the store a
//! view was built from never affects the view or any result derived from it.

use std::collections::HashMap;

/// Node identifier token (already normalized by the caller)
pub type NodeToken = String;

/// A single directed edge inside a [`GraphView`], in dense index form.
///
/// Parallel edges between the same pair of nodes appear as separate
/// entries and are never deduplicated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewEdge {
    /// Stable edge identity, carried through from the store
    pub id: u64,
    /// Dense index of the source node
    pub source: usize,
    /// Dense index of the target node
    pub target: usize,
    /// Non-negative weight
    pub weight: f64,
}

/// A dense, integer-indexed view of the graph topology.
///
/// Nodes are mapped to indices `0..node_count` in store insertion order;
/// that order is what makes every algorithm in this crate deterministic.
/// The edge table keeps insertion order too, and the CSR adjacency arrays
/// index into it.
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index back to node token
    pub index_to_node: Vec<NodeToken>,
    /// Mapping from node token to dense index
    pub node_to_index: HashMap<NodeToken, usize>,
    /// All edges, in insertion order
    pub edges: Vec<ViewEdge>,

    /// Outgoing CSR: offsets into `out_edges`, size `node_count + 1`
    pub out_offsets: Vec<usize>,
    /// Indices into `edges`, grouped by source node
    pub out_edges: Vec<usize>,

    /// Incoming CSR: offsets into `in_edges`, size `node_count + 1`
    pub in_offsets: Vec<usize>,
    /// Indices into `edges`, grouped by target node
    pub in_edges: Vec<usize>,
}

impl GraphView {
    /// Build a view from a node list and an edge list.
    ///
    /// Edge endpoints must name nodes present in `nodes`; a dangling
    /// reference is a caller bug and panics.
    pub fn from_edge_list(
        nodes: Vec<NodeToken>,
        edge_list: impl IntoIterator<Item = (u64, NodeToken, NodeToken, f64)>,
    ) -> Self {
        let node_count = nodes.len();
        let mut node_to_index = HashMap::with_capacity(node_count);
        for (idx, token) in nodes.iter().enumerate() {
            node_to_index.insert(token.clone(), idx);
        }

        let mut edges = Vec::new();
        for (id, source, target, weight) in edge_list {
            let source = *node_to_index
                .get(&source)
                .unwrap_or_else(|| panic!("edge {id} references unknown source node {source}"));
            let target = *node_to_index
                .get(&target)
                .unwrap_or_else(|| panic!("edge {id} references unknown target node {target}"));
            edges.push(ViewEdge { id, source, target, weight });
        }

        // Bucket edge-table indices per endpoint, then flatten to CSR.
        let mut temp_out: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut temp_in: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for (edge_idx, edge) in edges.iter().enumerate() {
            temp_out[edge.source].push(edge_idx);
            temp_in[edge.target].push(edge_idx);
        }

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_edges = Vec::with_capacity(edges.len());
        out_offsets.push(0);
        for bucket in temp_out {
            out_edges.extend(bucket);
            out_offsets.push(out_edges.len());
        }

        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_edges = Vec::with_capacity(edges.len());
        in_offsets.push(0);
        for bucket in temp_in {
            in_edges.extend(bucket);
            in_offsets.push(in_edges.len());
        }

        GraphView {
            node_count,
            index_to_node: nodes,
            node_to_index,
            edges,
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
        }
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Outgoing edges of a node, in edge insertion order
    pub fn outgoing(&self, idx: usize) -> impl Iterator<Item = &ViewEdge> {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        self.out_edges[start..end].iter().map(|&e| &self.edges[e])
    }

    /// Incoming edges of a node, in edge insertion order
    pub fn incoming(&self, idx: usize) -> impl Iterator<Item = &ViewEdge> {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        self.in_edges[start..end].iter().map(|&e| &self.edges[e])
    }

    /// Token for a dense index
    pub fn token(&self, idx: usize) -> &str {
        &self.index_to_node[idx]
    }
}

#[cfg(test)]
pub(crate) fn test_view(nodes: &[&str], edges: &[(&str, &str, f64)]) -> GraphView {
    GraphView::from_edge_list(
        nodes.iter().map(|n| n.to_string()).collect(),
        edges
            .iter()
            .enumerate()
            .map(|(i, (s, t, w))| (i as u64 + 1, s.to_string(), t.to_string(), *w)),
    )
}
