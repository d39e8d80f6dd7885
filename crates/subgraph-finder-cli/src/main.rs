//! Subgraph Finder command-line driver.
//!
//! Loads one or more graph files, runs the selected algorithm on each and
//! prints the resulting subgraphs.
//!
//! # Usage
//!
//! ```bash
//! subgraph-finder -i network.txt -a bron-kerbosch
//! subgraph-finder -i network.sif -f sif -u -a fast-greedy --weighted -o json
//! subgraph-finder -i roads.txt -u -a dijkstra --from A --to D
//! subgraph-finder -i network.txt -c finder.toml --progress
//! ```

mod args;
mod formats;


use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use subgraph_finder_core::algo::{Algorithm, AlgorithmConfig, Progress, ProgressEvent};
use subgraph_finder_core::graph::{Graph, GraphDescription};
use subgraph_finder_core::FinderConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::{Args, OutputFormat};

const PROGRESS_TICKS: u64 = 1000;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = FinderConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    // Diagnostics go to stderr so stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let algorithm_config = select_algorithm(&args, &config)?;
    let algorithm = algorithm_config.build();
    tracing::info!(algorithm = algorithm.name(), inputs = args.inputs.len(), "Starting");

    let mut results = Vec::new();
    for path in &args.inputs {
        let graph = formats::read_graph(path, args.format, args.undirected)?;
        let found = run(algorithm.as_ref(), &graph, args.progress)
            .with_context(|| format!("{} failed on {}", algorithm.name(), graph.name()))?;
        tracing::info!(graph = %graph.name(), results = found.len(), "Finished");
        results.extend(found);
    }

    print_results(&results, args.output)
}

/// Command-line flags win over the `[algorithm]` table of the config file.
fn select_algorithm(args: &Args, config: &FinderConfig) -> Result<AlgorithmConfig> {
    let selected = match args.algorithm_config()? {
        Some(from_flags) => from_flags,
        None => match &config.algorithm {
            Some(from_file) => from_file.clone(),
            None => bail!("No algorithm selected: pass --algorithm or set [algorithm] in the config file"),
        },
    };
    selected.validate().context("Invalid algorithm settings")?;
    Ok(selected)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)] // progress is in [0, 1]
fn run(algorithm: &dyn Algorithm, graph: &Graph, show_progress: bool) -> Result<Vec<Graph>> {
    if !show_progress {
        return Ok(algorithm.run(graph)?);
    }

    let bar = ProgressBar::new(PROGRESS_TICKS);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {percent:>3}%")?
            .progress_chars("=> "),
    );
    bar.set_message(graph.name().to_string());

    let results = {
        let mut progress = Progress::from_callback(|event: ProgressEvent| {
            bar.set_position((event.new * PROGRESS_TICKS as f64).round() as u64);
        });
        algorithm.process(graph, &mut progress)
    };
    bar.finish_and_clear();
    Ok(results?)
}

fn print_results(results: &[Graph], output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            if results.is_empty() {
                println!("No subgraphs found.");
            }
            for graph in results {
                println!("{graph}\n");
            }
        }
        OutputFormat::Json => {
            let descriptions: Vec<GraphDescription> =
                results.iter().map(GraphDescription::from).collect();
            let text = serde_json::to_string_pretty(&descriptions).context("Failed to encode results")?;
            println!("{text}");
        }
    }
    Ok(())
}
