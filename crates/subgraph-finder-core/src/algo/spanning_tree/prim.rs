//! Prim's spanning tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::{EdgeId, Graph, NodeId};

use super::super::cull::cull;
use super::super::progress::Progress;
use super::super::settings::AlgorithmSettings;
use super::super::Algorithm;
use super::SpanningTreeConfig;

/// Frontier entry: reach `node` through `edge`.
struct Reach<'c> {
    weight: f64,
    seq: usize,
    edge: EdgeId,
    node: NodeId,
    config: &'c SpanningTreeConfig,
}

impl Ord for Reach<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest: the preferred weight, then the oldest.
        self.config
            .prefer(other.weight, self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Reach<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Reach<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Reach<'_> {}

/// Prim's algorithm with lazy decrease-key.
///
/// Grows from the configured start node (or the first node by identifier)
/// and restarts from the next untouched node when a component is
/// exhausted, so disconnected input yields a spanning forest. Edges outside
/// the threshold are never queued.
#[derive(Debug, Clone, Default)]
pub struct Prim {
    config: SpanningTreeConfig,
}

impl Prim {
    /// Creates the algorithm.
    #[must_use]
    pub fn new(config: SpanningTreeConfig) -> Self {
        Self { config }
    }

    fn start(&self, graph: &Graph, ordered: &[NodeId]) -> Option<NodeId> {
        if let Some(name) = &self.config.start_node {
            match graph.node_id(name) {
                Some(id) => return Some(id),
                None => tracing::warn!(start = %name, "Start node not in graph, using first node"),
            }
        }
        ordered.first().copied()
    }
}

impl Algorithm for Prim {
    fn name(&self) -> &str {
        "Prim"
    }

    fn settings(&self) -> &AlgorithmSettings {
        &self.config.settings
    }

    fn process(&self, graph: &Graph, progress: &mut Progress<'_>) -> Result<Vec<Graph>> {
        progress.begin();
        let ordered = graph.sorted_node_ids();
        let Some(start) = self.start(graph, &ordered) else {
            progress.finish()?;
            return Ok(Vec::new());
        };

        let mut tree = Graph::new(graph.name());
        for (_, node) in graph.nodes() {
            tree.import_node(node)?;
        }

        let incidence = graph.incidence();
        let mut in_tree = vec![false; graph.node_bound()];
        let mut reached = 0;
        let mut total = 0.0;
        let mut seq = 0;
        let mut heap = BinaryHeap::new();

        for root in std::iter::once(start).chain(ordered.iter().copied()) {
            if in_tree[root.index()] {
                continue;
            }
            in_tree[root.index()] = true;
            reached += 1;
            let mut current = root;

            loop {
                for &edge in &incidence[current.index()] {
                    let e = graph[edge];
                    let next = e.opposite(current);
                    if in_tree[next.index()] || !self.config.admits(e.data()) {
                        continue;
                    }
                    heap.push(Reach {
                        weight: e.data(),
                        seq,
                        edge,
                        node: next,
                        config: &self.config,
                    });
                    seq += 1;
                }

                let Some(best) = std::iter::from_fn(|| heap.pop())
                    .find(|r| !in_tree[r.node.index()])
                else {
                    break;
                };
                in_tree[best.node.index()] = true;
                reached += 1;
                tree.import_edge(graph, best.edge)?;
                total += best.weight;
                current = best.node;
                progress.set_fraction(reached, graph.node_count())?;
            }
        }

        tree.set_name(self.config.tree_name(graph.name(), self.name(), total));
        tracing::debug!(tree = %tree.name(), edges = tree.edge_count(), "Prim finished");
        progress.finish()?;
        Ok(cull(vec![tree], &self.config.settings))
    }
}
