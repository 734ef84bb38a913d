//! Minimum spanning tree (Kruskal)

use super::common::{GraphView, NodeToken};
use super::dset::DisjointSet;
use std::cmp::Ordering;

/// An edge selected into the spanning forest
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstEdge {
    pub id: u64,
    pub source: NodeToken,
    pub target: NodeToken,
    pub weight: f64,
}

/// Result of Kruskal's algorithm.
///
/// On a disconnected graph this is a minimum spanning *forest*, one tree
/// per connected component; that is an ordinary result, not an error.
/// `nodes` lists the endpoints of selected edges in first-touched order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MSTResult {
    pub total_weight: f64,
    pub edges: Vec<MstEdge>,
    pub nodes: Vec<NodeToken>,
}

/// Kruskal's algorithm over a [`GraphView`].
///
/// Direction is ignored: an edge makes its endpoints connectable either
/// way. The sort is stable, so equal-weight edges are considered in
/// insertion order and the selected edge set is deterministic. All edges
/// are processed; same-set edges (including self-loops) are skipped.
pub fn kruskal_mst(view: &GraphView) -> MSTResult {
    let mut order: Vec<usize> = (0..view.edges.len()).collect();
    order.sort_by(|&a, &b| {
        view.edges[a]
            .weight
            .partial_cmp(&view.edges[b].weight)
            .unwrap_or(Ordering::Equal)
    });

    let mut dset = DisjointSet::new(view.node_count);
    let mut edges = Vec::new();
    let mut total_weight = 0.0;
    let mut touched = vec![false; view.node_count];
    let mut nodes = Vec::new();

    for edge_idx in order {
        let edge = &view.edges[edge_idx];
        if dset.union(edge.source, edge.target) {
            edges.push(MstEdge {
                id: edge.id,
                source: view.token(edge.source).to_string(),
                target: view.token(edge.target).to_string(),
                weight: edge.weight,
            });
            total_weight += edge.weight;
            for endpoint in [edge.source, edge.target] {
                if !touched[endpoint] {
                    touched[endpoint] = true;
                    nodes.push(view.token(endpoint).to_string());
                }
            }
        }
    }

    MSTResult { total_weight, edges, nodes }
}
