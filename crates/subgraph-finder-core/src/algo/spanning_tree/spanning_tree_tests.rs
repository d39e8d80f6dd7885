//! Tests for Kruskal, Prim and the disjoint-set forest.

use super::{DisjointSet, Kruskal, Prim, SpanningTreeConfig};
use crate::algo::Algorithm;
use crate::graph::{EdgeSpec, Graph, GraphDescription};

/// A-B 1, B-C 2, A-C 3, C-D 4.
fn weighted() -> Graph {
    GraphDescription::new("g")
        .with_nodes(["A", "B", "C", "D"])
        .with_edge(EdgeSpec::undirected("A", "B", 1.0))
        .with_edge(EdgeSpec::undirected("B", "C", 2.0))
        .with_edge(EdgeSpec::undirected("A", "C", 3.0))
        .with_edge(EdgeSpec::undirected("C", "D", 4.0))
        .build()
        .unwrap()
}

/// Two separate weighted pairs plus an isolated node.
fn islands() -> Graph {
    GraphDescription::new("islands")
        .with_nodes(["A", "B", "C", "D", "E"])
        .with_edge(EdgeSpec::undirected("A", "B", 2.0))
        .with_edge(EdgeSpec::undirected("C", "D", 3.0))
        .build()
        .unwrap()
}

fn both(config: &SpanningTreeConfig) -> Vec<Box<dyn Algorithm>> {
    vec![
        Box::new(Kruskal::new(config.clone())),
        Box::new(Prim::new(config.clone())),
    ]
}

fn single(results: Vec<Graph>) -> Graph {
    assert_eq!(results.len(), 1);
    results.into_iter().next().unwrap()
}

#[test]
fn test_minimum_spanning_tree() {
    let graph = weighted();
    for algorithm in both(&SpanningTreeConfig::default()) {
        let tree = single(algorithm.run(&graph).unwrap());
        assert_eq!(
            tree.name(),
            format!(
                "g {} Minimum Spanning Tree for attribute weight W(T) = 7.0",
                algorithm.name()
            )
        );
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert!((tree.total_weight() - 7.0).abs() < f64::EPSILON);
        assert!(tree.find_edge_by_identifiers("A", "C").is_none());
    }
}

#[test]
fn test_maximum_spanning_tree() {
    let graph = weighted();
    for algorithm in both(&SpanningTreeConfig::default().maximum()) {
        let tree = single(algorithm.run(&graph).unwrap());
        assert!(tree.name().contains("Maximum Spanning Tree"));
        assert!(tree.name().ends_with("W(T) = 9.0"));
        assert_eq!(tree.edge_count(), 3);
        assert!(tree.find_edge_by_identifiers("A", "B").is_none());
    }
}

#[test]
fn test_threshold_limits_admitted_edges() {
    let graph = weighted();

    for algorithm in both(&SpanningTreeConfig::default().with_threshold(2.5)) {
        let forest = single(algorithm.run(&graph).unwrap());
        assert_eq!(forest.node_count(), 4);
        assert_eq!(forest.edge_count(), 2);
        assert!((forest.total_weight() - 3.0).abs() < f64::EPSILON);
    }

    for algorithm in both(&SpanningTreeConfig::default().maximum().with_threshold(3.0)) {
        let forest = single(algorithm.run(&graph).unwrap());
        assert_eq!(forest.edge_count(), 2);
        assert!((forest.total_weight() - 7.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_disconnected_graph_gives_forest() {
    let graph = islands();
    for algorithm in both(&SpanningTreeConfig::default()) {
        let forest = single(algorithm.run(&graph).unwrap());
        assert_eq!(forest.node_count(), 5);
        assert_eq!(forest.edge_count(), 2);
        assert!(forest.name().ends_with("W(T) = 5.0"));
    }
}

#[test]
fn test_prim_start_node() {
    let graph = weighted();

    let from_d = Prim::new(SpanningTreeConfig::default().with_start_node("D"));
    let tree = single(from_d.run(&graph).unwrap());
    assert!((tree.total_weight() - 7.0).abs() < f64::EPSILON);

    let unknown = Prim::new(SpanningTreeConfig::default().with_start_node("Nowhere"));
    let tree = single(unknown.run(&graph).unwrap());
    assert_eq!(tree.edge_count(), 3);
}

#[test]
fn test_directed_edges_join_components() {
    let graph = GraphDescription::new("d")
        .with_nodes(["A", "B", "C"])
        .with_edge(EdgeSpec::directed("B", "A", 1.0))
        .with_edge(EdgeSpec::directed("C", "B", 1.0))
        .build()
        .unwrap();
    for algorithm in both(&SpanningTreeConfig::default()) {
        let tree = single(algorithm.run(&graph).unwrap());
        assert_eq!(tree.edge_count(), 2, "{}", algorithm.name());
    }
}

#[test]
fn test_min_node_count_applies_to_tree() {
    let graph = weighted();
    let mut config = SpanningTreeConfig::default();
    config.settings.min_node_count = 5;
    for algorithm in both(&config) {
        assert!(algorithm.run(&graph).unwrap().is_empty());
    }
}

#[test]
fn test_empty_graph_has_no_tree() {
    let empty = Graph::new("empty");
    for algorithm in both(&SpanningTreeConfig::default()) {
        assert!(algorithm.run(&empty).unwrap().is_empty());
    }
}

#[test]
fn test_disjoint_set() {
    let mut sets = DisjointSet::new(5);
    assert_eq!(sets.set_count(), 5);
    assert!(sets.union(0, 1));
    assert!(sets.union(3, 4));
    assert!(!sets.union(1, 0));
    assert!(sets.union(1, 4));
    assert_eq!(sets.find(0), sets.find(3));
    assert_ne!(sets.find(2), sets.find(0));
    assert_eq!(sets.set_count(), 2);
}
