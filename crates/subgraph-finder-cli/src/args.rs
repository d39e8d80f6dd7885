//! Command-line arguments and their translation into an algorithm config.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use subgraph_finder_core::algo::{
    AlgorithmConfig, AlgorithmSettings, CliqueConfig, ClusteringConfig, ComponentsConfig,
    EdgeOrder, SearchConfig, ShortestPathConfig, SortOrder, SpanningTreeConfig,
};
use subgraph_finder_core::graph::Condition;

use crate::formats::InputFormat;

/// Subgraph Finder - conditioned search, cliques, communities and paths
#[derive(Parser, Debug)]
#[command(name = "subgraph-finder")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Graph file to analyse (repeatable)
    #[arg(short, long = "input", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Input file format
    #[arg(short, long, value_enum, default_value_t = InputFormat::Simple)]
    pub format: InputFormat,

    /// Read edges as undirected (simple and SIF formats)
    #[arg(short, long)]
    pub undirected: bool,

    /// TOML configuration file
    #[arg(short, long, env = "SUBGRAPH_FINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Algorithm to run; overrides the [algorithm] table of the config file
    #[arg(short, long, value_enum)]
    pub algorithm: Option<AlgorithmKind>,

    /// Structural condition for BFS/DFS (repeatable): clique, directed_clique, bipartite
    #[arg(long = "condition")]
    pub conditions: Vec<Condition>,

    /// Do not add edges back to earlier members during BFS/DFS
    #[arg(long)]
    pub no_edge_preservation: bool,

    /// Frontier order for BFS/DFS: heaviest_first or lightest_first
    #[arg(long)]
    pub edge_order: Option<EdgeOrder>,

    /// Search complete bipartite subgraphs (Bron-Kerbosch)
    #[arg(long)]
    pub bipartite: bool,

    /// Use edge weights (community detection)
    #[arg(long)]
    pub weighted: bool,

    /// Random-walk length (Walktrap)
    #[arg(long, default_value_t = 4)]
    pub steps: usize,

    /// Build a maximum spanning tree
    #[arg(long)]
    pub max: bool,

    /// Edge weight bound for spanning trees
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Start node for Prim
    #[arg(long)]
    pub start_node: Option<String>,

    /// Path source node
    #[arg(long = "from")]
    pub from_node: Option<String>,

    /// Path destination node
    #[arg(long = "to")]
    pub to_node: Option<String>,

    /// Discard results with fewer nodes
    #[arg(long, default_value_t = 1)]
    pub min_nodes: usize,

    /// Result order: none, ascending, descending, average_weight
    #[arg(long, default_value_t = SortOrder::None)]
    pub sort: SortOrder,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,
}

/// Algorithms selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmKind {
    /// Conditioned breadth-first search
    Bfs,
    /// Conditioned depth-first search
    Dfs,
    /// Weakly connected components
    Components,
    /// Maximum cliques (or bicliques with --bipartite)
    BronKerbosch,
    /// Greedy modularity communities
    FastGreedy,
    /// Edge-betweenness communities
    GirvanNewman,
    /// Random-walk communities
    Walktrap,
    /// Kruskal spanning tree
    Kruskal,
    /// Prim spanning tree
    Prim,
    /// Dijkstra shortest path
    Dijkstra,
    /// Weight-accumulating exploration
    AccumulatingPath,
}

/// Result rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable graph listing
    Text,
    /// JSON array of graph descriptions
    Json,
}

impl Args {
    fn settings(&self) -> AlgorithmSettings {
        AlgorithmSettings::default()
            .with_min_node_count(self.min_nodes)
            .with_sort_order(self.sort)
    }

    /// Builds the algorithm configuration selected by `--algorithm`.
    ///
    /// Returns `Ok(None)` when no algorithm was named on the command line.
    pub fn algorithm_config(&self) -> Result<Option<AlgorithmConfig>> {
        let Some(kind) = self.algorithm else {
            return Ok(None);
        };
        let settings = self.settings();
        let config = match kind {
            AlgorithmKind::Bfs | AlgorithmKind::Dfs => {
                let mut search = SearchConfig::new(self.conditions.clone())
                    .with_edge_preservation(!self.no_edge_preservation)
                    .with_settings(settings);
                search.edge_order = self.edge_order;
                if kind == AlgorithmKind::Bfs {
                    AlgorithmConfig::BreadthFirst(search)
                } else {
                    AlgorithmConfig::DepthFirst(search)
                }
            }
            AlgorithmKind::Components => {
                AlgorithmConfig::ConnectedComponents(ComponentsConfig { settings })
            }
            AlgorithmKind::BronKerbosch => AlgorithmConfig::BronKerbosch(CliqueConfig {
                bipartite: self.bipartite,
                settings,
            }),
            AlgorithmKind::FastGreedy | AlgorithmKind::GirvanNewman | AlgorithmKind::Walktrap => {
                let clustering = ClusteringConfig {
                    weighted: self.weighted,
                    steps: self.steps,
                    settings,
                };
                match kind {
                    AlgorithmKind::FastGreedy => AlgorithmConfig::FastGreedy(clustering),
                    AlgorithmKind::GirvanNewman => AlgorithmConfig::GirvanNewman(clustering),
                    _ => AlgorithmConfig::Walktrap(clustering),
                }
            }
            AlgorithmKind::Kruskal | AlgorithmKind::Prim => {
                let tree = SpanningTreeConfig {
                    max: self.max,
                    threshold: self.threshold,
                    start_node: self.start_node.clone(),
                    settings,
                };
                if kind == AlgorithmKind::Kruskal {
                    AlgorithmConfig::Kruskal(tree)
                } else {
                    AlgorithmConfig::Prim(tree)
                }
            }
            AlgorithmKind::Dijkstra | AlgorithmKind::AccumulatingPath => {
                let (Some(from), Some(to)) = (&self.from_node, &self.to_node) else {
                    bail!("{kind:?} needs both --from and --to");
                };
                let path = ShortestPathConfig {
                    settings,
                    ..ShortestPathConfig::new(from.as_str(), to.as_str())
                };
                if kind == AlgorithmKind::Dijkstra {
                    AlgorithmConfig::Dijkstra(path)
                } else {
                    AlgorithmConfig::AccumulatingPath(path)
                }
            }
        };
        Ok(Some(config))
    }
}
