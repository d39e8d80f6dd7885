//! Graph file readers.
//!
//! Three formats are understood:
//! - `simple`: one edge per line, `source<TAB>target<TAB>weight`
//! - `sif`: Simple Interaction Format, `source relation target...`, where a
//!   numeric relation becomes the edge weight
//! - `json`: a serialized [`GraphDescription`]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use subgraph_finder_core::graph::{EdgeSpec, Graph, GraphDescription};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Tab-separated `source target weight` lines
    Simple,
    /// Simple Interaction Format
    Sif,
    /// JSON graph description
    Json,
}

/// Graph name for a file: its file name up to the first `.`.
pub fn graph_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name,
    }
}

/// Reads and builds the graph stored at `path`.
pub fn read_graph(path: &Path, format: InputFormat, undirected: bool) -> Result<Graph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file {}", path.display()))?;
    let description = match format {
        InputFormat::Simple => parse_simple(&text, graph_name(path), undirected),
        InputFormat::Sif => parse_sif(&text, graph_name(path), undirected),
        InputFormat::Json => serde_json::from_str(&text)
            .with_context(|| format!("Invalid graph description in {}", path.display()))?,
    };
    let graph = description
        .build()
        .with_context(|| format!("Failed to build graph from {}", path.display()))?;
    tracing::info!(
        graph = %graph.name(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Graph loaded"
    );
    Ok(graph)
}

fn edge(source: &str, target: &str, weight: f64, undirected: bool) -> EdgeSpec {
    if undirected {
        EdgeSpec::undirected(source, target, weight)
    } else {
        EdgeSpec::directed(source, target, weight)
    }
}

/// Parses tab-separated edge lines.
///
/// Lines with fewer than three fields or a weight that is not a number are
/// skipped.
pub fn parse_simple(text: &str, name: impl Into<String>, undirected: bool) -> GraphDescription {
    let mut description = GraphDescription::new(name);
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let [source, target, weight, ..] = fields.as_slice() else {
            tracing::warn!(line = number + 1, "Skipping line without three fields");
            continue;
        };
        let Ok(weight) = weight.parse::<f64>() else {
            tracing::debug!(line = number + 1, weight = %weight, "Skipping line with a non-numeric weight");
            continue;
        };
        description.ensure_node(source);
        description.ensure_node(target);
        description.edges.push(edge(source, target, weight, undirected));
    }
    description
}

/// Parses SIF lines: `source relation target [target...]`.
///
/// A numeric relation is used as the edge weight, anything else weighs 0.
pub fn parse_sif(text: &str, name: impl Into<String>, undirected: bool) -> GraphDescription {
    let mut description = GraphDescription::new(name);
    for (number, line) in text.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let [source, relation, targets @ ..] = tokens.as_slice() else {
            tracing::warn!(line = number + 1, "Skipping SIF line without a relation");
            continue;
        };
        if targets.is_empty() {
            tracing::warn!(line = number + 1, "Skipping SIF line without targets");
            continue;
        }
        let weight = relation.parse::<f64>().unwrap_or(0.0);
        description.ensure_node(source);
        for target in targets {
            description.ensure_node(target);
            description.edges.push(edge(source, target, weight, undirected));
        }
    }
    description
}
