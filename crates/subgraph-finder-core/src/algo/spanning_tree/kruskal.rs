//! Kruskal's spanning tree.

use crate::error::Result;
use crate::graph::{EdgeId, Graph};

use super::super::cull::cull;
use super::super::progress::Progress;
use super::super::settings::AlgorithmSettings;
use super::super::Algorithm;
use super::disjoint_set::DisjointSet;
use super::SpanningTreeConfig;

/// Kruskal's algorithm: admitted edges sorted by preference, accepted when
/// they join two different components.
///
/// Produces a single result holding every node of the input; on a
/// disconnected graph it is a spanning forest.
#[derive(Debug, Clone, Default)]
pub struct Kruskal {
    config: SpanningTreeConfig,
}

impl Kruskal {
    /// Creates the algorithm.
    #[must_use]
    pub fn new(config: SpanningTreeConfig) -> Self {
        Self { config }
    }
}

impl Algorithm for Kruskal {
    fn name(&self) -> &str {
        "Kruskal"
    }

    fn settings(&self) -> &AlgorithmSettings {
        &self.config.settings
    }

    fn process(&self, graph: &Graph, progress: &mut Progress<'_>) -> Result<Vec<Graph>> {
        progress.begin();
        if graph.is_empty() {
            progress.finish()?;
            return Ok(Vec::new());
        }

        let mut edges: Vec<EdgeId> = graph
            .edges()
            .filter(|(_, e)| self.config.admits(e.data()))
            .map(|(id, _)| id)
            .collect();
        edges.sort_by(|&a, &b| self.config.prefer(graph[a].data(), graph[b].data()));

        let mut tree = Graph::new(graph.name());
        for (_, node) in graph.nodes() {
            tree.import_node(node)?;
        }

        let mut sets = DisjointSet::new(graph.node_bound());
        let mut total = 0.0;
        for (i, &edge) in edges.iter().enumerate() {
            if sets.set_count() == graph.node_bound() - graph.node_count() + 1 {
                break;
            }
            let e = graph[edge];
            if sets.union(e.source().index(), e.target().index()) {
                tree.import_edge(graph, edge)?;
                total += e.data();
            }
            progress.set_fraction(i + 1, edges.len())?;
        }

        tree.set_name(self.config.tree_name(graph.name(), self.name(), total));
        tracing::debug!(tree = %tree.name(), edges = tree.edge_count(), "Kruskal finished");
        progress.finish()?;
        Ok(cull(vec![tree], &self.config.settings))
    }
}
