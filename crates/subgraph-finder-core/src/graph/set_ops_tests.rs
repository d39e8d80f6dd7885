//! Tests for graph set algebra.

use super::description::{EdgeSpec, GraphDescription};
use super::store::Graph;

fn left() -> Graph {
    GraphDescription::new("L")
        .with_nodes(["A", "B", "C"])
        .with_edge(EdgeSpec::undirected("A", "B", 1.0))
        .with_edge(EdgeSpec::undirected("B", "C", 1.0))
        .build()
        .unwrap()
}

fn right() -> Graph {
    GraphDescription::new("R")
        .with_nodes(["B", "C", "D"])
        .with_edge(EdgeSpec::undirected("C", "B", 1.0))
        .with_edge(EdgeSpec::undirected("C", "D", 1.0))
        .build()
        .unwrap()
}

#[test]
fn test_union() {
    let union = left().union(&right()).unwrap();
    assert_eq!(union.name(), "L union R");
    assert_eq!(union.node_count(), 4);
    // B-C appears in both inputs but only once in the union.
    assert_eq!(union.edge_count(), 3);
}

#[test]
fn test_intersection() {
    let meet = left().intersection(&right()).unwrap();
    assert_eq!(meet.name(), "L intersection R");
    assert_eq!(meet.node_count(), 2);
    assert_eq!(meet.edge_count(), 1);
    assert!(meet.find_edge_by_identifiers("B", "C").is_some());
}

#[test]
fn test_difference_filters_dangling_edges() {
    let diff = left().difference(&right()).unwrap();
    assert_eq!(diff.name(), "L difference R");
    assert_eq!(diff.node_count(), 1);
    assert!(diff.contains_node("A"));
    // A-B is not in R, but B is gone, so the edge cannot survive.
    assert_eq!(diff.edge_count(), 0);
}

#[test]
fn test_intersection_with_self_is_identity() {
    let graph = left();
    let meet = graph.intersection(&graph).unwrap();
    assert!(meet.same_structure(&graph));
}
