use super::*;
use graph_toolkit_core::{PathOutcome, WeightedGraph};

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

fn solvers() -> Vec<Box<dyn ShortestPath<&'static str, i64>>> {
    vec![
        Box::new(Dijkstra),
        Box::new(BellmanFord),
        Box::new(FloydWarshall),
        Box::new(AStar::uninformed()),
    ]
}

#[test]
fn multi_hop_beats_direct_edge() {
    // A-B is 4 directly but A-D-B is 1 + 2
    let g = square();
    for solver in solvers() {
        let outcome = solver.shortest_path(&g, &"A", &"B");
        assert_eq!(outcome, PathOutcome::found(vec!["A", "D", "B"], 3), "{}", solver.name());
    }
}

#[test]
fn reconstructed_weight_matches_reported() {
    let g = square();
    for solver in solvers() {
        for &s in g.vertices() {
            for &t in g.vertices() {
                let outcome = solver.shortest_path(&g, &s, &t);
                let path = outcome.path().expect("square is connected");
                assert_eq!(path.source(), Some(&s));
                assert_eq!(path.target(), Some(&t));
                assert_eq!(path_weight(&g, &path.vertices), Some(path.weight), "{}", solver.name());
            }
        }
    }
}

#[test]
fn same_source_and_target() {
    let g = square();
    for solver in solvers() {
        assert_eq!(
            solver.shortest_path(&g, &"C", &"C"),
            PathOutcome::found(vec!["C"], 0),
            "{}",
            solver.name()
        );
    }
}

#[test]
fn disconnected_target_is_no_path() {
    let g = WeightedGraph::from_edges([("A", "B", 4), ("B", "C", 3), ("D", "E", 5)]);
    for solver in solvers() {
        assert!(solver.shortest_path(&g, &"A", &"D").is_no_path(), "{}", solver.name());
        assert_eq!(solver.shortest_path(&g, &"A", &"C").weight(), Some(7));
    }
}

#[test]
fn empty_graph_is_no_path_everywhere() {
    let g: WeightedGraph<&str, i64> = WeightedGraph::new();
    for solver in solvers() {
        assert!(solver.shortest_path(&g, &"A", &"B").is_no_path(), "{}", solver.name());
    }
    assert!(FloydWarshall::all_pairs(&g).is_empty());
}

#[test]
fn missing_endpoint_is_no_path() {
    let g = square();
    for solver in solvers() {
        assert!(solver.shortest_path(&g, &"A", &"Z").is_no_path());
        assert!(solver.shortest_path(&g, &"Z", &"A").is_no_path());
    }
}

#[test]
fn bellman_ford_reports_reachable_negative_cycle() {
    let g = WeightedGraph::from_edges([("A", "B", 4), ("B", "C", -2), ("C", "D", 1)]);
    let outcome = BellmanFord.shortest_path(&g, &"A", &"D");
    assert!(outcome.is_negative_cycle());
    assert_eq!(outcome.weight(), None);
}

#[test]
fn bellman_ford_ignores_unreachable_negative_edge() {
    let g = WeightedGraph::from_edges([("A", "B", 4), ("B", "C", 3), ("X", "Y", -5)]);
    assert_eq!(
        BellmanFord.shortest_path(&g, &"A", &"C"),
        PathOutcome::found(vec!["A", "B", "C"], 7)
    );
    assert!(BellmanFord.shortest_path(&g, &"X", &"Y").is_negative_cycle());
}

#[test]
fn bellman_ford_negative_self_loop() {
    let g = WeightedGraph::from_edges([("A", "B", 1), ("B", "B", -1)]);
    assert!(BellmanFord.shortest_path(&g, &"A", &"B").is_negative_cycle());
}

#[test]
fn floyd_warshall_flags_negative_cycle() {
    let g = WeightedGraph::from_edges([("A", "B", 2), ("B", "C", -1)]);
    let all = FloydWarshall::all_pairs(&g);
    assert!(all.has_negative_cycle());
    assert!(all.path(&"A", &"C").is_negative_cycle());
}

#[test]
fn floyd_warshall_matrix_queries() {
    let g = square();
    let all = FloydWarshall::all_pairs(&g);
    assert_eq!(all.len(), 4);
    assert!(!all.has_negative_cycle());
    assert_eq!(all.distance(&"C", &"D"), Some(3));
    assert_eq!(all.distance(&"C", &"Z"), None);
    assert_eq!(all.path(&"C", &"D"), PathOutcome::found(vec!["C", "A", "D"], 3));
}

#[test]
fn dijkstra_and_a_star_refuse_negative_weights() {
    let g = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", -1)]);
    assert!(Dijkstra.shortest_path(&g, &"A", &"C").is_no_path());
    assert!(AStar::uninformed().shortest_path(&g, &"A", &"C").is_no_path());
}

#[test]
fn admissible_heuristic_keeps_optimality() {
    // Grid points on a line; straight-line distance never overestimates
    let positions = |v: &&str| match *v {
        "P0" => 0i64,
        "P1" => 1,
        "P2" => 2,
        _ => 3,
    };
    let g = WeightedGraph::from_edges([
        ("P0", "P1", 1),
        ("P1", "P2", 1),
        ("P2", "P3", 1),
        ("P0", "P3", 5),
    ]);
    let astar = AStar::new(move |a: &&str, b: &&str| (positions(a) - positions(b)).abs());
    assert_eq!(
        astar.shortest_path(&g, &"P0", &"P3"),
        PathOutcome::found(vec!["P0", "P1", "P2", "P3"], 3)
    );
}

#[test]
fn float_weights() {
    let g = WeightedGraph::from_edges([("A", "B", 1.5), ("B", "C", 1.5), ("A", "C", 3.5)]);
    let solvers: Vec<Box<dyn ShortestPath<&str, f64>>> = vec![
        Box::new(Dijkstra),
        Box::new(BellmanFord),
        Box::new(FloydWarshall),
        Box::new(AStar::uninformed()),
    ];
    for solver in solvers {
        assert_eq!(solver.shortest_path(&g, &"A", &"C").weight(), Some(3.0), "{}", solver.name());
    }
}

#[test]
fn path_weight_rejects_non_adjacent_steps() {
    let g = square();
    assert_eq!(path_weight(&g, &["A", "D", "B"]), Some(3));
    assert_eq!(path_weight(&g, &["C", "D"]), None);
    assert_eq!(path_weight(&g, &["C"]), Some(0));
}

#[test]
fn float_weight_is_summed_in_travel_order() {
    // 0.1 + 0.2 + 0.3 rounds differently depending on grouping
    let g = WeightedGraph::from_edges([("C", "D", 0.3), ("B", "C", 0.2), ("A", "B", 0.1), ("A", "D", 1.0)]);
    let solvers: Vec<Box<dyn ShortestPath<&str, f64>>> = vec![
        Box::new(Dijkstra),
        Box::new(BellmanFord),
        Box::new(FloydWarshall),
        Box::new(AStar::uninformed()),
    ];
    let expected = path_weight(&g, &["A", "B", "C", "D"]);
    for solver in solvers {
        let outcome = solver.shortest_path(&g, &"A", &"D");
        assert_eq!(outcome.vertices(), Some(&["A", "B", "C", "D"][..]), "{}", solver.name());
        assert_eq!(outcome.weight(), expected, "{}", solver.name());
    }
}

#[test]
fn floyd_warshall_ignores_cycle_in_other_component() {
    let g = WeightedGraph::from_edges([("A", "B", 4), ("X", "Y", -5)]);
    let all = FloydWarshall::all_pairs(&g);
    assert!(all.has_negative_cycle());
    assert_eq!(all.path(&"A", &"B"), PathOutcome::found(vec!["A", "B"], 4));
    assert_eq!(all.path(&"A", &"B"), BellmanFord.shortest_path(&g, &"A", &"B"));
    assert!(all.path(&"X", &"Y").is_negative_cycle());
    assert!(all.path(&"A", &"X").is_no_path());
}

#[test]
fn saturated_negative_edge_is_still_a_cycle() {
    let g = WeightedGraph::from_edges([("A", "B", i64::MIN)]);
    assert!(BellmanFord.shortest_path(&g, &"A", &"B").is_negative_cycle());
    assert!(BellmanFord.shortest_path(&g, &"A", &"A").is_negative_cycle());
    assert!(FloydWarshall.shortest_path(&g, &"A", &"B").is_negative_cycle());
}
