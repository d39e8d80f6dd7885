//! Tests for maximum clique and biclique search.

use super::{Algorithm, BronKerbosch, CliqueConfig};
use crate::graph::{EdgeSpec, Graph, GraphDescription};

fn cliques() -> BronKerbosch {
    BronKerbosch::new(CliqueConfig::default())
}

fn bicliques() -> BronKerbosch {
    BronKerbosch::new(CliqueConfig {
        bipartite: true,
        ..CliqueConfig::default()
    })
}

fn undirected(name: &str, nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut description = GraphDescription::new(name).with_nodes(nodes.iter().copied());
    for (s, t) in edges {
        description = description.with_edge(EdgeSpec::undirected(*s, *t, 1.0));
    }
    description.build().unwrap()
}

fn identifiers(graph: &Graph) -> Vec<&str> {
    let mut ids: Vec<&str> = graph.nodes().map(|(_, n)| n.identifier()).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn test_maximum_clique_ignores_smaller_maximal_ones() {
    let graph = undirected(
        "g",
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")],
    );
    let results = cliques().run(&graph).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name(), "g Maximum Clique 1");
    assert_eq!(identifiers(&results[0]), vec!["A", "B", "C"]);
    assert_eq!(results[0].edge_count(), 3);
    assert!(results[0].is_clique());
}

#[test]
fn test_equal_sized_cliques_are_numbered() {
    let graph = undirected(
        "two",
        &["A", "B", "C", "D", "E", "F"],
        &[
            ("A", "B"),
            ("B", "C"),
            ("C", "A"),
            ("D", "E"),
            ("E", "F"),
            ("F", "D"),
            ("C", "D"),
        ],
    );
    let results = cliques().run(&graph).unwrap();

    let names: Vec<&str> = results.iter().map(Graph::name).collect();
    assert_eq!(names, vec!["two Maximum Clique 1", "two Maximum Clique 2"]);
    assert_eq!(identifiers(&results[0]), vec!["A", "B", "C"]);
    assert_eq!(identifiers(&results[1]), vec!["D", "E", "F"]);
}

#[test]
fn test_one_way_edges_do_not_form_cliques() {
    let graph = GraphDescription::new("cycle")
        .with_nodes(["A", "B", "C"])
        .with_edge(EdgeSpec::directed("A", "B", 1.0))
        .with_edge(EdgeSpec::directed("B", "C", 1.0))
        .with_edge(EdgeSpec::directed("C", "A", 1.0))
        .build()
        .unwrap();
    let results = cliques().run(&graph).unwrap();

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|g| g.node_count() == 1));
}

#[test]
fn test_mutual_directed_edges_form_a_clique() {
    let graph = GraphDescription::new("mutual")
        .with_nodes(["A", "B", "C"])
        .with_edge(EdgeSpec::directed("A", "B", 1.0))
        .with_edge(EdgeSpec::directed("B", "A", 1.0))
        .with_edge(EdgeSpec::directed("B", "C", 1.0))
        .build()
        .unwrap();
    let results = cliques().run(&graph).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(identifiers(&results[0]), vec!["A", "B"]);
    assert_eq!(results[0].edge_count(), 2);
}

#[test]
fn test_complete_bipartite_graph_is_one_biclique() {
    let graph = undirected(
        "bi",
        &["A", "B", "C", "D"],
        &[("A", "C"), ("A", "D"), ("B", "C"), ("B", "D")],
    );
    let results = bicliques().run(&graph).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name(), "bi Maximum Biclique 1");
    assert_eq!(results[0].node_count(), 4);
    assert_eq!(results[0].edge_count(), 4);
    assert!(results[0].is_bipartite());
    assert!(results[0].edges().all(|(_, e)| (e.data() - 1.0).abs() < f64::EPSILON));
}

#[test]
fn test_star_is_a_biclique() {
    let graph = undirected(
        "star",
        &["X", "A", "B", "C"],
        &[("X", "A"), ("X", "B"), ("X", "C")],
    );
    let results = bicliques().run(&graph).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].node_count(), 4);
    assert_eq!(results[0].edge_count(), 3);
}

#[test]
fn test_same_side_pairs_are_not_bicliques() {
    let graph = undirected("g", &["A", "C", "Z"], &[("A", "C")]);
    let results = bicliques().run(&graph).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(identifiers(&results[0]), vec!["A", "C"]);
}

#[test]
fn test_non_bipartite_graph_has_no_bicliques() {
    let graph = undirected("tri", &["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
    assert!(bicliques().run(&graph).unwrap().is_empty());
}

#[test]
fn test_tiny_graphs_have_no_cliques() {
    assert!(cliques().run(&Graph::new("empty")).unwrap().is_empty());
    assert!(cliques()
        .run(&undirected("one", &["A"], &[]))
        .unwrap()
        .is_empty());
    assert!(bicliques()
        .run(&undirected("one", &["A"], &[]))
        .unwrap()
        .is_empty());
}
