//! Dijkstra shortest path between two named nodes.

use crate::error::Result;
use crate::graph::Graph;

use super::super::cull::cull;
use super::super::progress::Progress;
use super::super::settings::AlgorithmSettings;
use super::super::Algorithm;
use super::{settle, ShortestPathConfig};

/// Returns the single shortest path from `from_node` to `to_node` as a
/// graph named `"Shortest Path from <a> to <b> W(T) = <w>"`.
///
/// An unknown endpoint or an unreachable target yields no result; equal
/// endpoints yield the lone node.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    config: ShortestPathConfig,
}

impl Dijkstra {
    /// Creates the search.
    #[must_use]
    pub fn new(config: ShortestPathConfig) -> Self {
        Self { config }
    }
}

impl Algorithm for Dijkstra {
    fn name(&self) -> &str {
        "Dijkstra"
    }

    fn settings(&self) -> &AlgorithmSettings {
        &self.config.settings
    }

    fn process(&self, graph: &Graph, progress: &mut Progress<'_>) -> Result<Vec<Graph>> {
        progress.begin();
        let Some((from, to)) = self.config.endpoints(graph) else {
            progress.finish()?;
            return Ok(Vec::new());
        };

        let settled = settle(graph, from, to, progress)?;
        let Some(&(_, distance)) = settled.order.iter().find(|(n, _)| *n == to) else {
            tracing::debug!(from = %self.config.from_node, to = %self.config.to_node, "Target unreachable");
            progress.finish()?;
            return Ok(Vec::new());
        };

        let mut hops = Vec::new();
        let mut cursor = to;
        while let Some(edge) = settled.parent[cursor.index()] {
            hops.push(edge);
            cursor = graph[edge].opposite(cursor);
        }
        hops.reverse();

        let name = format!(
            "Shortest Path from {} to {} W(T) = {:?}",
            self.config.from_node, self.config.to_node, distance
        );
        let mut path = Graph::new(name);
        path.import_node(&graph[from])?;
        let mut at = from;
        for edge in hops {
            at = graph[edge].opposite(at);
            path.import_node(&graph[at])?;
            path.import_edge(graph, edge)?;
        }

        progress.finish()?;
        Ok(cull(vec![path], &self.config.settings))
    }
}
