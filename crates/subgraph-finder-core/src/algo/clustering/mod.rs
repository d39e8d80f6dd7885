//! Community detection: modularity bookkeeping plus the FastGreedy,
//! Girvan–Newman and Walktrap partitioners.

mod betweenness;
mod communities;
mod fast_greedy;
mod girvan_newman;
mod walktrap;

#[cfg(test)]
mod communities_tests;
#[cfg(test)]
mod partition_tests;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{Graph, NodeId};

use super::settings::AlgorithmSettings;

pub use betweenness::edge_betweenness;
pub use communities::Communities;
pub use fast_greedy::FastGreedy;
pub use girvan_newman::GirvanNewman;
pub use walktrap::Walktrap;

/// Configuration shared by the community detectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Use edge data instead of edge counts.
    pub weighted: bool,
    /// Random-walk length (Walktrap only).
    pub steps: usize,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: AlgorithmSettings,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            weighted: false,
            steps: 4,
            settings: AlgorithmSettings::default(),
        }
    }
}

impl ClusteringConfig {
    /// Sets weighted mode (builder pattern).
    #[must_use]
    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Sets the walk length (builder pattern).
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }
}

/// Turns a partition into named induced subgraphs, skipping empty groups.
fn community_graphs(
    graph: &Graph,
    algorithm: &str,
    groups: &[Vec<NodeId>],
    config: &ClusteringConfig,
) -> Result<Vec<Graph>> {
    let suffix = if config.weighted {
        format!(" on attribute {}", config.settings.weight_attribute)
    } else {
        String::new()
    };
    groups
        .iter()
        .filter(|g| !g.is_empty())
        .enumerate()
        .map(|(i, group)| {
            let name = format!("{} {} Community {}{}", graph.name(), algorithm, i + 1, suffix);
            graph.subgraph(group, name)
        })
        .collect()
}

/// Total order over finite and non-finite scores.
#[derive(Debug, Clone, Copy)]
struct Score(f64);

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
