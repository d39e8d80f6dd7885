//! Tests for the community detectors and edge betweenness.

use super::{edge_betweenness, ClusteringConfig, FastGreedy, GirvanNewman, Walktrap};
use crate::algo::{Algorithm, Progress};
use crate::graph::{EdgeSpec, Graph, GraphDescription};

const TOLERANCE: f64 = 1e-9;

/// Two triangles A-B-C and D-E-F joined by the edge C-D.
fn bridged_triangles() -> Graph {
    GraphDescription::new("bridge")
        .with_nodes(["A", "B", "C", "D", "E", "F"])
        .with_edge(EdgeSpec::undirected("A", "B", 1.0))
        .with_edge(EdgeSpec::undirected("B", "C", 1.0))
        .with_edge(EdgeSpec::undirected("C", "A", 1.0))
        .with_edge(EdgeSpec::undirected("D", "E", 1.0))
        .with_edge(EdgeSpec::undirected("E", "F", 1.0))
        .with_edge(EdgeSpec::undirected("F", "D", 1.0))
        .with_edge(EdgeSpec::undirected("C", "D", 1.0))
        .build()
        .unwrap()
}

fn identifiers(graph: &Graph) -> Vec<&str> {
    let mut ids: Vec<&str> = graph.nodes().map(|(_, n)| n.identifier()).collect();
    ids.sort_unstable();
    ids
}

fn assert_two_triangles(results: &[Graph], algorithm: &str) {
    assert_eq!(results.len(), 2, "{algorithm} should split at the bridge");
    assert_eq!(results[0].name(), format!("bridge {algorithm} Community 1"));
    assert_eq!(results[1].name(), format!("bridge {algorithm} Community 2"));
    assert_eq!(identifiers(&results[0]), vec!["A", "B", "C"]);
    assert_eq!(identifiers(&results[1]), vec!["D", "E", "F"]);
    assert!(results.iter().all(|g| g.edge_count() == 3));
}

#[test]
fn test_fast_greedy_splits_at_bridge() {
    let results = FastGreedy::default().run(&bridged_triangles()).unwrap();
    assert_two_triangles(&results, "FastGreedy");
}

#[test]
fn test_girvan_newman_splits_at_bridge() {
    let results = GirvanNewman::default().run(&bridged_triangles()).unwrap();
    assert_two_triangles(&results, "Edge Betweenness");
}

#[test]
fn test_walktrap_splits_at_bridge() {
    let results = Walktrap::default().run(&bridged_triangles()).unwrap();
    assert_two_triangles(&results, "Walktrap");
}

#[test]
fn test_partitions_reach_best_modularity() {
    let graph = bridged_triangles();
    let mut progress = Progress::silent();

    let fast = FastGreedy::default().partition(&graph, &mut progress).unwrap();
    assert!((fast.modularity() - 5.0 / 14.0).abs() < TOLERANCE);

    let divisive = GirvanNewman::default()
        .partition(&graph, &mut Progress::silent())
        .unwrap()
        .unwrap();
    assert!((divisive.modularity() - 5.0 / 14.0).abs() < TOLERANCE);

    let walk = Walktrap::default()
        .partition(&graph, &mut Progress::silent())
        .unwrap();
    assert!((walk.modularity() - 5.0 / 14.0).abs() < TOLERANCE);
}

#[test]
fn test_weighted_results_name_the_attribute() {
    let config = ClusteringConfig::default().with_weighted(true);
    let results = FastGreedy::new(config).run(&bridged_triangles()).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].name(),
        "bridge FastGreedy Community 1 on attribute weight"
    );
}

#[test]
fn test_walktrap_with_short_walks() {
    let config = ClusteringConfig::default().with_steps(2);
    let results = Walktrap::new(config).run(&bridged_triangles()).unwrap();
    assert_two_triangles(&results, "Walktrap");
}

#[test]
fn test_detectors_report_progress_to_completion() {
    let graph = bridged_triangles();
    let detectors: Vec<Box<dyn Algorithm>> = vec![
        Box::new(FastGreedy::default()),
        Box::new(GirvanNewman::default()),
        Box::new(Walktrap::default()),
    ];
    for detector in detectors {
        let mut last = 0.0;
        let mut increasing = true;
        let mut progress = Progress::from_callback(|event| {
            increasing &= event.new > last;
            last = event.new;
        });
        detector.process(&graph, &mut progress).unwrap();
        drop(progress);
        assert!(increasing, "{} progress went backwards", detector.name());
        assert!((last - 1.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_empty_graph_has_no_communities() {
    let empty = Graph::new("empty");
    assert!(FastGreedy::default().run(&empty).unwrap().is_empty());
    assert!(GirvanNewman::default().run(&empty).unwrap().is_empty());
    assert!(Walktrap::default().run(&empty).unwrap().is_empty());
}

#[test]
fn test_girvan_newman_needs_edges() {
    let dots = GraphDescription::new("dots")
        .with_nodes(["A", "B", "C"])
        .build()
        .unwrap();
    assert!(GirvanNewman::default().run(&dots).unwrap().is_empty());
    assert_eq!(FastGreedy::default().run(&dots).unwrap().len(), 3);
}

#[test]
fn test_bridge_has_highest_betweenness() {
    let graph = bridged_triangles();
    let scores = edge_betweenness(&graph, false);
    let score = |s: &str, t: &str| scores[&graph.find_edge_by_identifiers(s, t).unwrap()];

    assert!((score("C", "D") - 9.0).abs() < TOLERANCE);
    assert!((score("A", "B") - 1.0).abs() < TOLERANCE);
    assert!((score("C", "A") - 4.0).abs() < TOLERANCE);
}

#[test]
fn test_weighted_betweenness_avoids_heavy_edges() {
    // A square where A-B-C is cheap and A-D-C is expensive.
    let graph = GraphDescription::new("square")
        .with_nodes(["A", "B", "C", "D"])
        .with_edge(EdgeSpec::undirected("A", "B", 1.0))
        .with_edge(EdgeSpec::undirected("B", "C", 1.0))
        .with_edge(EdgeSpec::undirected("C", "D", 5.0))
        .with_edge(EdgeSpec::undirected("D", "A", 5.0))
        .build()
        .unwrap();
    let edge = |s: &str, t: &str| graph.find_edge_by_identifiers(s, t).unwrap();

    let plain = edge_betweenness(&graph, false);
    assert!((plain[&edge("A", "B")] - plain[&edge("C", "D")]).abs() < TOLERANCE);

    let weighted = edge_betweenness(&graph, true);
    assert!(weighted[&edge("A", "B")] > weighted[&edge("C", "D")]);
}
