//! Tests for Dijkstra and the accumulating path search.

use super::{AccumulatingPath, Dijkstra, ShortestPathConfig};
use crate::algo::{Algorithm, Progress};
use crate::graph::{EdgeSpec, Graph, GraphDescription};

/// A-B 1, B-C 2, A-C 5, C-D 1, a dead end A-F 0.5 and an isolated E.
fn roads() -> Graph {
    GraphDescription::new("roads")
        .with_nodes(["A", "B", "C", "D", "E", "F"])
        .with_edge(EdgeSpec::undirected("A", "B", 1.0))
        .with_edge(EdgeSpec::undirected("B", "C", 2.0))
        .with_edge(EdgeSpec::undirected("A", "C", 5.0))
        .with_edge(EdgeSpec::undirected("C", "D", 1.0))
        .with_edge(EdgeSpec::undirected("A", "F", 0.5))
        .build()
        .unwrap()
}

fn dijkstra(from: &str, to: &str) -> Dijkstra {
    Dijkstra::new(ShortestPathConfig::new(from, to))
}

fn identifiers(graph: &Graph) -> Vec<&str> {
    let mut ids: Vec<&str> = graph.nodes().map(|(_, n)| n.identifier()).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn test_shortest_path_takes_cheaper_detour() {
    let results = dijkstra("A", "D").run(&roads()).unwrap();

    assert_eq!(results.len(), 1);
    let path = &results[0];
    assert_eq!(path.name(), "Shortest Path from A to D W(T) = 4.0");
    assert_eq!(identifiers(path), vec!["A", "B", "C", "D"]);
    assert_eq!(path.edge_count(), 3);
    assert!(path.find_edge_by_identifiers("A", "C").is_none());
    assert!((path.total_weight() - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_path_to_itself_is_one_node() {
    let results = dijkstra("B", "B").run(&roads()).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name(), "Shortest Path from B to B W(T) = 0.0");
    assert_eq!(results[0].node_count(), 1);
    assert_eq!(results[0].edge_count(), 0);
}

#[test]
fn test_unreachable_or_unknown_endpoints_give_nothing() {
    let graph = roads();
    assert!(dijkstra("A", "E").run(&graph).unwrap().is_empty());
    assert!(dijkstra("A", "Z").run(&graph).unwrap().is_empty());
    assert!(dijkstra("Z", "A").run(&graph).unwrap().is_empty());
    assert!(dijkstra("a", "D").run(&graph).unwrap().is_empty());
}

#[test]
fn test_directed_edges_are_one_way() {
    let graph = GraphDescription::new("oneway")
        .with_nodes(["X", "Y"])
        .with_edge(EdgeSpec::directed("X", "Y", 2.0))
        .build()
        .unwrap();

    assert_eq!(dijkstra("X", "Y").run(&graph).unwrap().len(), 1);
    assert!(dijkstra("Y", "X").run(&graph).unwrap().is_empty());
}

#[test]
fn test_accumulating_path_returns_explored_tree() {
    let graph = roads();
    let search = AccumulatingPath::new(ShortestPathConfig::new("A", "D"));
    let results = search.run(&graph).unwrap();

    assert_eq!(results.len(), 1);
    let explored = &results[0];
    assert_eq!(explored.name(), "Accumulated Path from A to D W(T) = 4.0");
    assert_eq!(identifiers(explored), vec!["A", "B", "C", "D", "F"]);
    assert_eq!(explored.edge_count(), 4);
    assert!(explored.find_edge_by_identifiers("A", "F").is_some());

    // The input graph keeps its edge data.
    assert!((graph.total_weight() - 9.5).abs() < f64::EPSILON);
}

#[test]
fn test_accumulating_path_stops_at_target() {
    let results = AccumulatingPath::new(ShortestPathConfig::new("A", "B"))
        .run(&roads())
        .unwrap();

    assert_eq!(identifiers(&results[0]), vec!["A", "B", "F"]);
    assert!(AccumulatingPath::new(ShortestPathConfig::new("A", "E"))
        .run(&roads())
        .unwrap()
        .is_empty());
}

#[test]
fn test_path_search_progress_finishes() {
    let mut last = 0.0;
    let mut progress = Progress::from_callback(|event| last = event.new);
    dijkstra("A", "D").process(&roads(), &mut progress).unwrap();
    drop(progress);
    assert!((last - 1.0).abs() < f64::EPSILON);
}
