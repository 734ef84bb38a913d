//! Graph algorithms adapter layer
//!
//! Algorithms live in the `waypoint-algorithms` crate and operate on a
//! dense [`GraphView`] snapshot; this module builds that snapshot from a
//! [`GraphStore`] and exposes the three query entry points. Engines only
//! ever read: the snapshot owns copies of the topology, so a result can
//! never be changed retroactively by later mutations.

use crate::graph::{GraphError, GraphResult, GraphStore, NodeId};
use tracing::info;
use waypoint_algorithms::GraphView;

// Re-export algorithms and result types
pub use waypoint_algorithms::{
    dijkstra, kruskal_mst, topological_sort, CycleDetected, DisjointSet, IndexedMinHeap,
    MSTResult, MstEdge, NodeToken, PathResult,
};

/// Build a dense snapshot of the store for algorithm execution.
///
/// Nodes and edges are enumerated in store insertion order, which fixes
/// the tie-break behavior of every algorithm downstream.
pub fn build_view(store: &GraphStore) -> GraphView {
    let nodes = store
        .all_nodes()
        .iter()
        .map(|n| n.id.as_str().to_string())
        .collect();
    let edges = store.all_edges().into_iter().map(|e| {
        (
            e.id.as_u64(),
            e.source.as_str().to_string(),
            e.target.as_str().to_string(),
            e.weight,
        )
    });
    // Store edges always reference live nodes, so this cannot panic
    GraphView::from_edge_list(nodes, edges.collect::<Vec<_>>())
}

/// Minimum-total-weight directed path from `source` to `target`.
///
/// Both endpoints must exist (`GraphError::NodeNotFound` otherwise). An
/// unreachable target is `Ok(None)`: a legitimate negative result the
/// caller branches on, not an error.
pub fn shortest_path(
    store: &GraphStore,
    source: &NodeId,
    target: &NodeId,
) -> GraphResult<Option<PathResult>> {
    if !store.contains_node(source) {
        return Err(GraphError::NodeNotFound(source.clone()));
    }
    if !store.contains_node(target) {
        return Err(GraphError::NodeNotFound(target.clone()));
    }

    let result = dijkstra(&build_view(store), source.as_str(), target.as_str());
    match &result {
        Some(path) => info!(%source, %target, cost = path.cost, hops = path.edges.len(), "shortest path found"),
        None => info!(%source, %target, "no path"),
    }
    Ok(result)
}

/// Minimum spanning forest of the store, treating edges as undirected
/// for connectivity. Disconnection yields one tree per component.
pub fn minimum_spanning_forest(store: &GraphStore) -> MSTResult {
    let result = kruskal_mst(&build_view(store));
    info!(
        edges = result.edges.len(),
        total_weight = result.total_weight,
        "minimum spanning forest computed"
    );
    result
}

/// Total order of all nodes consistent with every directed edge, or
/// `CycleDetected` when none exists.
pub fn topological_order(store: &GraphStore) -> Result<Vec<NodeToken>, CycleDetected> {
    let result = topological_sort(&build_view(store));
    match &result {
        Ok(order) => info!(nodes = order.len(), "topological order computed"),
        Err(_) => info!("cycle detected, no topological order"),
    }
    result
}
