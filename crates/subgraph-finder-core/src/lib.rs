//! # subgraph-finder-core
//!
//! Graph analysis engine: finds meaningful subgraphs in weighted,
//! directed or undirected graphs.
//!
//! - [`graph`]: arena graph model, set algebra, structural conditions and
//!   condition-guarded graphs.
//! - [`algo`]: conditioned BFS/DFS search, maximum cliques and bicliques,
//!   connected components, community detection (FastGreedy,
//!   Girvan–Newman, Walktrap), spanning trees (Kruskal, Prim) and shortest
//!   paths, all behind the [`algo::Algorithm`] trait.
//! - [`config`]: layered application configuration.
//!
//! Logging goes through `tracing`; nothing is printed unless the host
//! installs a subscriber.

pub mod algo;
pub mod config;
pub mod error;
pub mod graph;

#[cfg(test)]
mod config_tests;

pub use algo::{Algorithm, AlgorithmConfig, AlgorithmSettings, Progress, SortOrder};
pub use config::{ConfigError, FinderConfig};
pub use error::{Error, Result};
pub use graph::{Condition, ConditionedGraph, Graph, GraphDescription};
