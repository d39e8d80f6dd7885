//! Tagged configuration union over every algorithm.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::bron_kerbosch::{BronKerbosch, CliqueConfig};
use super::bundle::Bundle;
use super::clustering::{ClusteringConfig, FastGreedy, GirvanNewman, Walktrap};
use super::components::{ComponentsConfig, ConnectedComponents};
use super::settings::AlgorithmSettings;
use super::shortest_path::{AccumulatingPath, Dijkstra, ShortestPathConfig};
use super::spanning_tree::{Kruskal, Prim, SpanningTreeConfig};
use super::traversal::{ConditionedSearch, SearchConfig};
use super::Algorithm;

/// Serializable description of an algorithm run.
///
/// # Example
///
/// ```rust
/// use subgraph_finder_core::algo::AlgorithmConfig;
///
/// let config: AlgorithmConfig = toml::from_str(r#"
///     algorithm = "walktrap"
///     weighted = true
///     steps = 3
///     min_node_count = 2
/// "#).unwrap();
///
/// config.validate().unwrap();
/// assert_eq!(config.build().name(), "Walktrap");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum AlgorithmConfig {
    /// Conditioned breadth-first search.
    BreadthFirst(SearchConfig),
    /// Conditioned depth-first search.
    DepthFirst(SearchConfig),
    /// Weakly connected components.
    ConnectedComponents(ComponentsConfig),
    /// Maximum cliques or bicliques.
    BronKerbosch(CliqueConfig),
    /// CNM greedy modularity.
    FastGreedy(ClusteringConfig),
    /// Girvan–Newman edge removal.
    GirvanNewman(ClusteringConfig),
    /// Walktrap random-walk clustering.
    Walktrap(ClusteringConfig),
    /// Kruskal spanning tree.
    Kruskal(SpanningTreeConfig),
    /// Prim spanning tree.
    Prim(SpanningTreeConfig),
    /// Dijkstra shortest path.
    Dijkstra(ShortestPathConfig),
    /// Weight-accumulating exploration.
    AccumulatingPath(ShortestPathConfig),
    /// Several algorithms, culled together.
    Bundle(BundleConfig),
}

/// Members of a bundle plus the settings used for the combined cull.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Member algorithms, run in order.
    pub members: Vec<AlgorithmConfig>,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: AlgorithmSettings,
}

impl AlgorithmConfig {
    /// Returns the shared settings of this configuration.
    #[must_use]
    pub fn settings(&self) -> &AlgorithmSettings {
        match self {
            Self::BreadthFirst(c) | Self::DepthFirst(c) => &c.settings,
            Self::ConnectedComponents(c) => &c.settings,
            Self::BronKerbosch(c) => &c.settings,
            Self::FastGreedy(c) | Self::GirvanNewman(c) | Self::Walktrap(c) => &c.settings,
            Self::Kruskal(c) | Self::Prim(c) => &c.settings,
            Self::Dijkstra(c) | Self::AccumulatingPath(c) => &c.settings,
            Self::Bundle(c) => &c.settings,
        }
    }

    /// Checks values that cannot be expressed in the types.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Walktrap(c) if c.steps == 0 => {
                Err(Error::Config("walktrap steps must be at least 1".to_string()))
            }
            Self::Kruskal(c) | Self::Prim(c) if c.threshold.is_some_and(f64::is_nan) => {
                Err(Error::Config("spanning tree threshold must be a number".to_string()))
            }
            Self::Dijkstra(c) | Self::AccumulatingPath(c)
                if c.from_node.is_empty() || c.to_node.is_empty() =>
            {
                Err(Error::Config(
                    "path search needs both from_node and to_node".to_string(),
                ))
            }
            Self::Bundle(c) => c.members.iter().try_for_each(AlgorithmConfig::validate),
            _ => Ok(()),
        }
    }

    /// Instantiates the configured algorithm.
    #[must_use]
    pub fn build(&self) -> Box<dyn Algorithm> {
        match self.clone() {
            Self::BreadthFirst(c) => Box::new(ConditionedSearch::breadth_first(c)),
            Self::DepthFirst(c) => Box::new(ConditionedSearch::depth_first(c)),
            Self::ConnectedComponents(c) => Box::new(ConnectedComponents::new(c)),
            Self::BronKerbosch(c) => Box::new(BronKerbosch::new(c)),
            Self::FastGreedy(c) => Box::new(FastGreedy::new(c)),
            Self::GirvanNewman(c) => Box::new(GirvanNewman::new(c)),
            Self::Walktrap(c) => Box::new(Walktrap::new(c)),
            Self::Kruskal(c) => Box::new(Kruskal::new(c)),
            Self::Prim(c) => Box::new(Prim::new(c)),
            Self::Dijkstra(c) => Box::new(Dijkstra::new(c)),
            Self::AccumulatingPath(c) => Box::new(AccumulatingPath::new(c)),
            Self::Bundle(c) => Box::new(Bundle::new(
                c.members.iter().map(AlgorithmConfig::build).collect(),
                c.settings,
            )),
        }
    }
}
