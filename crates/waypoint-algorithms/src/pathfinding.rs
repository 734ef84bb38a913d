//! Single-source shortest path (Dijkstra)

use super::common::{GraphView, NodeToken};
use super::heap::IndexedMinHeap;

/// A shortest path between two nodes.
///
/// `edges` holds one edge id per hop, aligned with consecutive pairs in
/// `path`. Where parallel edges connect a pair, the reported edge is the
/// lowest-weight one, first-encountered on ties.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: NodeToken,
    pub target: NodeToken,
    pub path: Vec<NodeToken>,
    pub edges: Vec<u64>,
    pub cost: f64,
}

/// Dijkstra's algorithm over a [`GraphView`].
///
/// Every node starts in the queue at infinite distance; relaxation lowers
/// queue priorities in place. Returns `None` when `target` is unreachable
/// from `source`, a legitimate negative result rather than an error. Callers
/// must have validated that both tokens name existing nodes.
///
/// `source == target` yields the trivial single-node, zero-cost path.
pub fn dijkstra(view: &GraphView, source: &str, target: &str) -> Option<PathResult> {
    let source_idx = *view.node_to_index.get(source)?;
    let target_idx = *view.node_to_index.get(target)?;

    let mut dist = vec![f64::INFINITY; view.node_count];
    let mut prev: Vec<Option<usize>> = vec![None; view.node_count];
    let mut queue = IndexedMinHeap::with_capacity(view.node_count);

    for idx in 0..view.node_count {
        queue.enqueue(idx, f64::INFINITY);
    }
    dist[source_idx] = 0.0;
    queue.update_priority(source_idx, 0.0);

    while let Some((u, cost)) = queue.dequeue_min() {
        if cost.is_infinite() {
            // Everything left is unreachable; relaxing from here is a no-op
            break;
        }
        for edge in view.outgoing(u) {
            let alt = dist[u] + edge.weight;
            if alt < dist[edge.target] {
                dist[edge.target] = alt;
                prev[edge.target] = Some(u);
                queue.update_priority(edge.target, alt);
            }
        }
    }

    if target_idx != source_idx && prev[target_idx].is_none() {
        return None;
    }

    // Walk the predecessor chain back to the source
    let mut indices = vec![target_idx];
    let mut cur = target_idx;
    while cur != source_idx {
        cur = prev[cur].expect("predecessor chain broken before reaching source");
        indices.push(cur);
    }
    indices.reverse();

    // Pick a reporting edge for each hop: lowest weight wins, first
    // encountered on ties. Parallel edges make this selection meaningful.
    let mut edges = Vec::with_capacity(indices.len().saturating_sub(1));
    for pair in indices.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let mut best: Option<(f64, u64)> = None;
        for edge in view.outgoing(from) {
            if edge.target == to && best.map_or(true, |(w, _)| edge.weight < w) {
                best = Some((edge.weight, edge.id));
            }
        }
        let (_, id) = best.expect("path hop without a connecting edge");
        edges.push(id);
    }

    Some(PathResult {
        source: source.to_string(),
        target: target.to_string(),
        path: indices.iter().map(|&i| view.token(i).to_string()).collect(),
        edges,
        cost: dist[target_idx],
    })
}
