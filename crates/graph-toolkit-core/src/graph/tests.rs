use super::*;
use crate::types::{Error, GraphError, Neighbor, WeightedEdge};

fn square() -> WeightedGraph<&'static str, i64> {
    WeightedGraph::from_edges([
        ("A", "B", 4),
        ("B", "C", 3),
        ("B", "D", 2),
        ("D", "A", 1),
        ("A", "C", 2),
        ("B", "D", 2),
    ])
}

#[test]
fn new_graph_is_empty() {
    let g: WeightedGraph<String, i64> = WeightedGraph::new();
    assert!(g.is_empty());
    assert_eq!(g.len(), 0);
    assert!(g.edges().is_empty());
}

#[test]
fn add_vertex_is_idempotent() {
    let mut g: WeightedGraph<&str, i64> = WeightedGraph::new();
    assert!(g.add_vertex("A"));
    assert!(!g.add_vertex("A"));
    assert!(g.add_vertex("B"));
    assert_eq!(g.vertices(), &["A", "B"]);
    assert!(g.neighbors(&"A").unwrap().is_empty());
}

#[test]
fn add_edge_is_symmetric() {
    let mut g: WeightedGraph<&str, i64> = WeightedGraph::new();
    g.add_edge("A", "B", 7);
    assert_eq!(g.edge_weight(&"A", &"B"), Some(7));
    assert_eq!(g.edge_weight(&"B", &"A"), Some(7));
    assert_eq!(g.vertices(), &["A", "B"]);
}

#[test]
fn re_adding_an_edge_overwrites_both_directions() {
    let mut g: WeightedGraph<&str, i64> = WeightedGraph::new();
    assert_eq!(g.add_edge("A", "B", 4), None);
    assert_eq!(g.add_edge("B", "A", 9), Some(4));
    assert_eq!(g.edge_weight(&"A", &"B"), Some(9));
    assert_eq!(g.edge_weight(&"B", &"A"), Some(9));
    assert_eq!(g.neighbors(&"A").unwrap().len(), 1);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn duplicate_input_edge_is_not_duplicated() {
    let g = square();
    assert_eq!(g.len(), 4);
    assert_eq!(g.edge_count(), 5);
    assert_eq!(
        g.neighbors(&"B").unwrap(),
        &[Neighbor::new("A", 4), Neighbor::new("C", 3), Neighbor::new("D", 2)]
    );
}

#[test]
fn edges_are_normalised_and_listed_once() {
    let g = square();
    let edges = g.edges();
    assert_eq!(
        edges,
        vec![
            WeightedEdge::new("A", "B", 4),
            WeightedEdge::new("A", "D", 1),
            WeightedEdge::new("A", "C", 2),
            WeightedEdge::new("B", "C", 3),
            WeightedEdge::new("B", "D", 2),
        ]
    );
    assert!(edges.iter().all(|e| e.from <= e.to));
}

#[test]
fn remove_vertex_strips_all_references() {
    let mut g = square();
    g.remove_vertex(&"B").unwrap();
    assert_eq!(g.vertices(), &["A", "C", "D"]);
    assert!(!g.contains_vertex(&"B"));
    for v in g.vertices() {
        assert!(g.neighbors(v).unwrap().iter().all(|n| n.vertex != "B"));
    }
    // Positions are rebuilt after the shift
    assert_eq!(g.index_of(&"D"), Some(2));
    assert_eq!(g.label(2), Some(&"D"));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn remove_missing_vertex_fails() {
    let mut g = square();
    let err = g.remove_vertex(&"Z").unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::VertexNotFound { .. })
    ));
    assert_eq!(g.len(), 4);
}

#[test]
fn remove_edge_reports_whether_anything_changed() {
    let mut g = square();
    assert!(g.remove_edge(&"A", &"B").unwrap());
    assert!(!g.has_edge(&"A", &"B"));
    assert!(!g.has_edge(&"B", &"A"));
    assert!(!g.remove_edge(&"A", &"B").unwrap());
    assert!(g.remove_edge(&"A", &"Z").is_err());
}

#[test]
fn neighbors_of_missing_vertex_is_not_found() {
    let g = square();
    assert!(g.neighbors(&"Q").unwrap_err().is_not_found());
}

#[test]
fn clear_empties_everything() {
    let mut g = square();
    g.clear();
    assert!(g.is_empty());
    assert!(g.edges().is_empty());
    assert_eq!(g.index_of(&"A"), None);
}

#[test]
fn indexed_adjacency_mirrors_labels() {
    let g = square();
    let adj = g.indexed_adjacency();
    assert_eq!(adj.len(), 4);
    // A was inserted first and is adjacent to B, D, C
    assert_eq!(adj[0], vec![(1, 4), (3, 1), (2, 2)]);
}

#[test]
fn self_loop_is_a_single_entry() {
    let mut g: WeightedGraph<&str, i64> = WeightedGraph::new();
    g.add_edge("A", "A", 3);
    assert_eq!(g.neighbors(&"A").unwrap().len(), 1);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edges(), vec![WeightedEdge::new("A", "A", 3)]);
}

#[test]
fn negative_weight_detection() {
    let mut g: WeightedGraph<&str, i64> = WeightedGraph::new();
    g.add_edge("A", "B", 2);
    assert!(!g.has_negative_weight());
    g.add_edge("B", "C", -1);
    assert!(g.has_negative_weight());
}
