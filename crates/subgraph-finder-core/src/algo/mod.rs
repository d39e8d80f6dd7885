//! Algorithm framework and the subgraph-finding algorithms.
//!
//! Every algorithm implements [`Algorithm`]: it reads a [`Graph`], reports
//! progress, and returns a list of result subgraphs that went through
//! [`cull`].
//!
//! # Example
//!
//! ```rust
//! use subgraph_finder_core::algo::{Algorithm, BronKerbosch, CliqueConfig};
//! use subgraph_finder_core::graph::{EdgeSpec, GraphDescription};
//!
//! let graph = GraphDescription::new("g")
//!     .with_nodes(["A", "B", "C", "D"])
//!     .with_edge(EdgeSpec::undirected("A", "B", 1.0))
//!     .with_edge(EdgeSpec::undirected("B", "C", 1.0))
//!     .with_edge(EdgeSpec::undirected("C", "A", 1.0))
//!     .with_edge(EdgeSpec::undirected("C", "D", 1.0))
//!     .build()
//!     .unwrap();
//!
//! let cliques = BronKerbosch::new(CliqueConfig::default()).run(&graph).unwrap();
//! assert_eq!(cliques.len(), 1);
//! assert_eq!(cliques[0].name(), "g Maximum Clique 1");
//! ```

mod bron_kerbosch;
mod bundle;
pub mod clustering;
mod components;
mod config;
mod cull;
mod frontier;
mod progress;
mod settings;
pub mod shortest_path;
pub mod spanning_tree;
mod traversal;

#[cfg(test)]
mod bron_kerbosch_tests;

use crate::error::Result;
use crate::graph::Graph;

pub use bron_kerbosch::{BronKerbosch, CliqueConfig};
pub use bundle::Bundle;
pub use clustering::{ClusteringConfig, Communities, FastGreedy, GirvanNewman, Walktrap};
pub use components::{ComponentsConfig, ConnectedComponents};
pub use config::{AlgorithmConfig, BundleConfig};
pub use cull::cull;
pub use frontier::EdgeOrder;
pub use progress::{Progress, ProgressEvent, PROGRESS_PROPERTY};
pub use settings::{AlgorithmSettings, SortOrder};
pub use shortest_path::{AccumulatingPath, Dijkstra, ShortestPathConfig};
pub use spanning_tree::{DisjointSet, Kruskal, Prim, SpanningTreeConfig};
pub use traversal::{ConditionedSearch, SearchConfig, TraversalOrder};

/// A subgraph-finding algorithm.
pub trait Algorithm {
    /// Short name, also used inside result names.
    fn name(&self) -> &str;

    /// Shared settings (minimum size, ordering, weight attribute).
    fn settings(&self) -> &AlgorithmSettings;

    /// Runs the algorithm and returns culled results.
    ///
    /// Never fails on degenerate input (empty graph, missing endpoint,
    /// unreachable target): those produce an empty list.
    ///
    /// # Errors
    ///
    /// Propagates structural errors from building result graphs and
    /// invalid progress values.
    fn process(&self, graph: &Graph, progress: &mut Progress<'_>) -> Result<Vec<Graph>>;

    /// Runs the algorithm without progress reporting.
    fn run(&self, graph: &Graph) -> Result<Vec<Graph>> {
        self.process(graph, &mut Progress::silent())
    }
}
