//! Weakly connected components.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::Graph;

use super::cull::cull;
use super::progress::Progress;
use super::settings::AlgorithmSettings;
use super::Algorithm;

/// Configuration for component search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    /// Shared settings.
    #[serde(flatten)]
    pub settings: AlgorithmSettings,
}

/// Returns one induced subgraph per weakly connected component, named
/// `"<graph> Component <i>"`.
#[derive(Debug, Clone, Default)]
pub struct ConnectedComponents {
    config: ComponentsConfig,
}

impl ConnectedComponents {
    /// Creates the search.
    #[must_use]
    pub fn new(config: ComponentsConfig) -> Self {
        Self { config }
    }
}

impl Algorithm for ConnectedComponents {
    fn name(&self) -> &str {
        "ConnectedComponents"
    }

    fn settings(&self) -> &AlgorithmSettings {
        &self.config.settings
    }

    fn process(&self, graph: &Graph, progress: &mut Progress<'_>) -> Result<Vec<Graph>> {
        progress.begin();
        let components = graph.weak_components();
        let mut results = Vec::with_capacity(components.len());
        let mut covered = 0;
        for (i, nodes) in components.iter().enumerate() {
            results.push(graph.subgraph(nodes, format!("{} Component {}", graph.name(), i + 1))?);
            covered += nodes.len();
            progress.set_fraction(covered, graph.node_count())?;
        }
        progress.finish()?;
        Ok(cull(results, &self.config.settings))
    }
}
