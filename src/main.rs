//! Interactive driver for the waypoint graph engine.
//!
//! A line-oriented front end: it normalizes raw identifiers (trim +
//! upper-case), validates numeric input, and hands typed commands to the
//! core. All algorithmic work happens in the library.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use waypoint::algo;
use waypoint::graph::{GraphStore, NodeId};

const HELP: &str = "\
commands:
  node <ID>              add a node
  edge <FROM> <TO> <W>   add a directed edge with weight W >= 0
  remove <ID>            remove a node and its edges
  path <FROM> <TO>       shortest path (Dijkstra)
  mst                    minimum spanning forest (Kruskal)
  sort                   topological order (Kahn)
  dump                   print the graph as JSON
  clear                  remove all nodes and edges
  help                   show this help
  quit                   exit";

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut store = GraphStore::new();
    let stdin = io::stdin();
    let mut out = io::stdout();

    println!("waypoint {} (type 'help' for commands)", waypoint::VERSION);
    loop {
        print!("> ");
        out.flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{HELP}"),
            ["node", raw] => {
                let id = normalize(raw);
                match store.add_node(id) {
                    Ok(()) => println!("ok"),
                    Err(e) => println!("error: {e}"),
                }
            }
            ["edge", from, to, weight] => {
                let Ok(weight) = weight.parse::<f64>() else {
                    println!("error: weight must be a number");
                    continue;
                };
                if weight < 0.0 {
                    println!("error: negative weights are not allowed");
                    continue;
                }
                match store.add_edge(normalize(from), normalize(to), weight) {
                    Ok(id) => println!("ok ({id})"),
                    Err(e) => println!("error: {e}"),
                }
            }
            ["remove", raw] => match store.remove_node(&normalize(raw)) {
                Ok(()) => println!("ok"),
                Err(e) => println!("error: {e}"),
            },
            ["path", from, to] => {
                match algo::shortest_path(&store, &normalize(from), &normalize(to)) {
                    Ok(Some(path)) => {
                        println!("path: {} (weight {})", path.path.join(" -> "), path.cost)
                    }
                    Ok(None) => println!("no path found"),
                    Err(e) => println!("error: {e}"),
                }
            }
            ["mst"] => {
                let forest = algo::minimum_spanning_forest(&store);
                if forest.edges.is_empty() {
                    println!("no edges selected");
                } else {
                    for edge in &forest.edges {
                        println!("  {} - {} ({})", edge.source, edge.target, edge.weight);
                    }
                    println!("total weight {}", forest.total_weight);
                }
            }
            ["sort"] | ["topo"] => match algo::topological_order(&store) {
                Ok(order) => println!("order: {}", order.join(", ")),
                Err(e) => println!("error: {e}"),
            },
            ["dump"] => {
                let dump = serde_json::json!({
                    "nodes": store.all_nodes(),
                    "edges": store.all_edges(),
                });
                println!("{}", serde_json::to_string_pretty(&dump)?);
            }
            ["clear"] => {
                store.clear();
                println!("ok");
            }
            _ => println!("unrecognized command, type 'help'"),
        }
    }

    Ok(())
}

/// Boundary normalization: identifiers are case-insensitive at the edge,
/// opaque tokens inside the core.
fn normalize(raw: impl AsRef<str>) -> NodeId {
    NodeId::new(raw.as_ref().trim().to_uppercase())
}
