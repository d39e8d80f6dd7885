//! Single-pair shortest paths over walkable edges.

mod accumulating;
mod dijkstra;

#[cfg(test)]
mod shortest_path_tests;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{EdgeId, Graph, NodeId};

pub use accumulating::AccumulatingPath;
pub use dijkstra::Dijkstra;

use super::progress::Progress;
use super::settings::AlgorithmSettings;

/// Configuration for a path search between two named nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortestPathConfig {
    /// Identifier of the start node.
    #[serde(alias = "fromNode")]
    pub from_node: String,
    /// Identifier of the destination node.
    #[serde(alias = "toNode")]
    pub to_node: String,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: AlgorithmSettings,
}

impl ShortestPathConfig {
    /// Creates a config for the pair.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from_node: from.into(),
            to_node: to.into(),
            settings: AlgorithmSettings::default(),
        }
    }

    /// Resolves both endpoints, logging the missing one.
    fn endpoints(&self, graph: &Graph) -> Option<(NodeId, NodeId)> {
        let from = graph.node_id(&self.from_node);
        let to = graph.node_id(&self.to_node);
        if from.is_none() || to.is_none() {
            tracing::debug!(
                graph = %graph.name(),
                from = %self.from_node,
                to = %self.to_node,
                "Path endpoint not in graph"
            );
        }
        Some((from?, to?))
    }
}

/// Settled distances and discovery edges of a best-first search.
struct Settled {
    /// Settled nodes in settlement order, with their distance.
    order: Vec<(NodeId, f64)>,
    /// Edge through which each node slot was settled.
    parent: Vec<Option<EdgeId>>,
}

/// Best-first search from `from`, keyed by accumulated edge data, that
/// stops once `to` is settled. Edge data is never modified.
fn settle(
    graph: &Graph,
    from: NodeId,
    to: NodeId,
    progress: &mut Progress<'_>,
) -> Result<Settled> {
    if graph.edges().any(|(_, e)| e.data() < 0.0) {
        tracing::warn!(graph = %graph.name(), "Negative edge weights, paths may not be shortest");
    }

    let bound = graph.node_bound();
    let mut best: Vec<Option<f64>> = vec![None; bound];
    let mut parent = vec![None; bound];
    let mut done = vec![false; bound];
    let mut order = Vec::new();
    let mut heap = BinaryHeap::new();
    let mut seq = 0usize;

    best[from.index()] = Some(0.0);
    heap.push(Reverse((Distance(0.0), seq, from)));

    while let Some(Reverse((Distance(dv), _, v))) = heap.pop() {
        if done[v.index()] {
            continue;
        }
        done[v.index()] = true;
        order.push((v, dv));
        progress.set_fraction(order.len(), graph.node_count())?;
        if v == to {
            break;
        }
        for &edge in graph[v].edges() {
            let w = graph[edge].opposite(v);
            if done[w.index()] {
                continue;
            }
            let alt = dv + graph[edge].data();
            if best[w.index()].map_or(true, |dw| alt < dw) {
                best[w.index()] = Some(alt);
                parent[w.index()] = Some(edge);
                seq += 1;
                heap.push(Reverse((Distance(alt), seq, w)));
            }
        }
    }
    Ok(Settled { order, parent })
}

/// Totally ordered distance for the search heap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Distance(f64);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}
