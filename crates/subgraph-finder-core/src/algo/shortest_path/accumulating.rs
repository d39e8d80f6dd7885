//! Weight-accumulating exploration towards a target.

use crate::error::Result;
use crate::graph::Graph;

use super::super::cull::cull;
use super::super::progress::Progress;
use super::super::settings::AlgorithmSettings;
use super::super::Algorithm;
use super::{settle, ShortestPathConfig};

/// Explores outward from `from_node`, always taking the frontier edge with
/// the smallest accumulated weight, until `to_node` is reached.
///
/// The result is the whole explored tree (every node reached before the
/// target, with the edge it was reached through), named
/// `"Accumulated Path from <a> to <b> W(T) = <w>"`. No result when the
/// target is unknown or unreachable.
#[derive(Debug, Clone, Default)]
pub struct AccumulatingPath {
    config: ShortestPathConfig,
}

impl AccumulatingPath {
    /// Creates the search.
    #[must_use]
    pub fn new(config: ShortestPathConfig) -> Self {
        Self { config }
    }
}

impl Algorithm for AccumulatingPath {
    fn name(&self) -> &str {
        "AccumulatingPath"
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
            progress.finish()?;
            return Ok(Vec::new());
        };

        let name = format!(
            "Accumulated Path from {} to {} W(T) = {:?}",
            self.config.from_node, self.config.to_node, distance
        );
        let mut explored = Graph::new(name);
        for &(node, _) in &settled.order {
            explored.import_node(&graph[node])?;
            if let Some(edge) = settled.parent[node.index()] {
                explored.import_edge(graph, edge)?;
            }
        }

        progress.finish()?;
        Ok(cull(vec![explored], &self.config.settings))
    }
}
