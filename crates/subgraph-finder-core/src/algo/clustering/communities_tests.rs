//! Tests for partition bookkeeping and modularity.

use super::communities::Communities;
use crate::graph::{EdgeSpec, Graph, GraphDescription};

const TOLERANCE: f64 = 1e-12;

/// Two triangles A-B-C and D-E-F joined by the edge C-D.
fn bridged_triangles(bridge_weight: f64) -> Graph {
    GraphDescription::new("bridge")
        .with_nodes(["A", "B", "C", "D", "E", "F"])
        .with_edge(EdgeSpec::undirected("A", "B", 1.0))
        .with_edge(EdgeSpec::undirected("B", "C", 1.0))
        .with_edge(EdgeSpec::undirected("C", "A", 1.0))
        .with_edge(EdgeSpec::undirected("D", "E", 1.0))
        .with_edge(EdgeSpec::undirected("E", "F", 1.0))
        .with_edge(EdgeSpec::undirected("F", "D", 1.0))
        .with_edge(EdgeSpec::undirected("C", "D", bridge_weight))
        .build()
        .unwrap()
}

fn ids(graph: &Graph, names: &[&str]) -> Vec<crate::graph::NodeId> {
    names.iter().map(|n| graph.node_id(n).unwrap()).collect()
}

#[test]
fn test_singletons_follow_identifier_order() {
    let graph = bridged_triangles(1.0);
    let communities = Communities::singletons(&graph, false);

    assert_eq!(communities.len(), 6);
    assert!((communities.m2() - 14.0).abs() < TOLERANCE);
    for (key, name) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
        let id = graph.node_id(name).unwrap();
        assert_eq!(communities.key_of(id), Some(key));
        assert_eq!(communities.group(key), Some(&[id][..]));
    }
}

#[test]
fn test_singleton_modularity() {
    let graph = bridged_triangles(1.0);
    let communities = Communities::singletons(&graph, false);

    // Four nodes of degree 2 and two of degree 3, no internal edges.
    let expected = -(4.0 * 4.0 + 2.0 * 9.0) / 196.0;
    assert!((communities.modularity() - expected).abs() < TOLERANCE);
    assert!((communities.a(2) - 3.0 / 14.0).abs() < TOLERANCE);
    assert!((communities.e(2, 3) - 1.0 / 14.0).abs() < TOLERANCE);
    assert!(communities.e(2, 2).abs() < TOLERANCE);
}

#[test]
fn test_triangle_split_modularity() {
    let graph = bridged_triangles(1.0);
    let communities = Communities::from_groups(
        &graph,
        false,
        vec![ids(&graph, &["A", "B", "C"]), ids(&graph, &["D", "E", "F"])],
    );

    assert!((communities.modularity() - 5.0 / 14.0).abs() < TOLERANCE);
    assert!((communities.a(0) - 0.5).abs() < TOLERANCE);
    assert!((communities.e(0, 0) - 6.0 / 14.0).abs() < TOLERANCE);
    assert!((communities.e(0, 1) - 1.0 / 14.0).abs() < TOLERANCE);
    assert!(communities.connected(0, 1));
    assert!(!communities.connected(0, 0));
}

#[test]
fn test_merges_match_direct_partition() {
    let graph = bridged_triangles(1.0);
    let mut merged = Communities::singletons(&graph, false);
    merged.merge(0, 1);
    merged.merge(0, 2);
    merged.merge(3, 4);
    merged.merge(3, 5);

    let direct = Communities::from_groups(
        &graph,
        false,
        vec![ids(&graph, &["A", "B", "C"]), ids(&graph, &["D", "E", "F"])],
    );

    assert_eq!(merged.len(), 2);
    assert!((merged.modularity() - direct.modularity()).abs() < TOLERANCE);
    assert!((merged.e(0, 0) - direct.e(0, 0)).abs() < TOLERANCE);
    assert!((merged.a(3) - direct.a(1)).abs() < TOLERANCE);
    assert_eq!(merged.key_of(graph.node_id("F").unwrap()), Some(3));
    assert_eq!(merged.to_string(), "[[A, B, C], [D, E, F]]");
}

#[test]
fn test_merge_ignores_unknown_or_equal_keys() {
    let graph = bridged_triangles(1.0);
    let mut communities = Communities::singletons(&graph, false);
    communities.merge(0, 0);
    communities.merge(0, 42);
    communities.merge(1, 0);
    communities.merge(1, 0);

    assert_eq!(communities.len(), 5);
    assert!(communities.group(0).is_none());
    assert_eq!(communities.group(1).map(<[_]>::len), Some(2));
}

#[test]
fn test_single_community_has_zero_modularity() {
    let graph = bridged_triangles(1.0);
    let everything = Communities::from_groups(&graph, false, vec![graph.node_ids()]);
    assert!(everything.modularity().abs() < TOLERANCE);
}

#[test]
fn test_weighted_partition_uses_edge_data() {
    let graph = bridged_triangles(4.0);
    let communities = Communities::from_groups(
        &graph,
        true,
        vec![ids(&graph, &["A", "B", "C"]), ids(&graph, &["D", "E", "F"])],
    );

    assert!(communities.is_weighted());
    assert!((communities.m2() - 20.0).abs() < TOLERANCE);
    assert!((communities.a(0) - 10.0 / 20.0).abs() < TOLERANCE);
    assert!((communities.e(0, 1) - 4.0 / 20.0).abs() < TOLERANCE);
    let expected = 2.0 * (6.0 / 20.0 - 0.25);
    assert!((communities.modularity() - expected).abs() < TOLERANCE);
}

#[test]
fn test_graph_without_edges() {
    let graph = GraphDescription::new("dots")
        .with_nodes(["A", "B"])
        .build()
        .unwrap();
    let communities = Communities::singletons(&graph, false);

    assert_eq!(communities.len(), 2);
    assert!(communities.modularity().abs() < TOLERANCE);
    assert_eq!(communities.a(0), f64::NEG_INFINITY);
    assert_eq!(communities.e(0, 1), f64::NEG_INFINITY);
}

#[test]
fn test_unlisted_nodes_stay_outside() {
    let graph = bridged_triangles(1.0);
    let communities =
        Communities::from_groups(&graph, false, vec![ids(&graph, &["A", "B", "C"])]);

    assert_eq!(communities.len(), 1);
    assert_eq!(communities.key_of(graph.node_id("D").unwrap()), None);
    assert!((communities.e(0, 0) - 6.0 / 14.0).abs() < TOLERANCE);
}
