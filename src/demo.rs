//! Fixed demonstration scenarios
//!
//! Each scenario is a small edge list plus one shortest-path query. Running a
//! scenario pushes the graph through every algorithm and collects the results
//! into a serializable [`ScenarioReport`].

use std::fmt;

use graph_toolkit_core::{PathOutcome, SpanningTree, WeightedEdge, WeightedGraph};
use serde::Serialize;
use tracing::{debug, info};

use crate::components::{connected_components, Strategy};
use crate::mst::{kruskal, prim};
use crate::shortest_path::{AStar, BellmanFord, Dijkstra, FloydWarshall, ShortestPath};

/// Graph type used by the demonstration
pub type DemoGraph = WeightedGraph<String, i64>;

/// A named edge list with one shortest-path query
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Display name
    pub name: &'static str,
    /// Edges inserted in order; later duplicates overwrite earlier weights
    pub edges: Vec<(&'static str, &'static str, i64)>,
    /// Source and target of the shortest-path query
    pub query: (&'static str, &'static str),
}

impl Scenario {
    /// Build the scenario's graph
    pub fn graph(&self) -> DemoGraph {
        WeightedGraph::from_edges(
            self.edges
                .iter()
                .map(|&(a, b, w)| (a.to_string(), b.to_string(), w)),
        )
    }
}

/// The four built-in scenarios
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "connected square",
            edges: vec![
                ("A", "B", 4),
                ("B", "C", 3),
                ("B", "D", 2),
                ("D", "A", 1),
                ("A", "C", 2),
                ("B", "D", 2),
            ],
            query: ("A", "B"),
        },
        Scenario {
            name: "three components",
            edges: vec![("A", "B", 4), ("C", "D", 4), ("E", "F", 1), ("F", "G", 1)],
            query: ("A", "B"),
        },
        Scenario {
            name: "two components",
            edges: vec![("A", "B", 4), ("B", "C", 3), ("D", "E", 5)],
            query: ("A", "D"),
        },
        Scenario {
            name: "empty graph",
            edges: Vec::new(),
            query: ("A", "B"),
        },
    ]
}

/// Everything computed for one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// Vertices in insertion order
    pub vertices: Vec<String>,
    /// Distinct edges in insertion order
    pub edges: Vec<WeightedEdge<String, i64>>,
    /// Components found by breadth-first search
    pub bfs: Vec<Vec<String>>,
    /// Components found by depth-first search
    pub dfs: Vec<Vec<String>>,
    /// Components found by union-find
    pub union_find: Vec<Vec<String>>,
    /// Kruskal's minimum spanning forest
    pub kruskal: SpanningTree<String, i64>,
    /// Prim's minimum spanning tree of the start vertex's component
    pub prim: SpanningTree<String, i64>,
    /// Query source
    pub source: String,
    /// Query target
    pub target: String,
    /// Dijkstra's answer
    pub dijkstra: PathOutcome<String, i64>,
    /// Bellman-Ford's answer
    pub bellman_ford: PathOutcome<String, i64>,
    /// Floyd-Warshall's answer
    pub floyd_warshall: PathOutcome<String, i64>,
    /// A* answer (zero heuristic)
    pub a_star: PathOutcome<String, i64>,
}

/// Run every algorithm over `scenario`
///
/// `prim_start` overrides Prim's start vertex; by default it starts from the
/// first inserted vertex.
pub fn run(scenario: &Scenario, prim_start: Option<&str>) -> ScenarioReport {
    info!(scenario = scenario.name, "running scenario");
    let graph = scenario.graph();
    debug!(vertices = graph.len(), edges = graph.edge_count(), "scenario graph built");

    let source = scenario.query.0.to_string();
    let target = scenario.query.1.to_string();
    let start = prim_start.map(str::to_string);

    ScenarioReport {
        name: scenario.name.to_string(),
        vertices: graph.vertices().to_vec(),
        edges: graph.edges(),
        bfs: connected_components(&graph, Strategy::BreadthFirst),
        dfs: connected_components(&graph, Strategy::DepthFirst),
        union_find: connected_components(&graph, Strategy::UnionFind),
        kruskal: kruskal(&graph),
        prim: prim(&graph, start.as_ref()),
        dijkstra: Dijkstra.shortest_path(&graph, &source, &target),
        bellman_ford: BellmanFord.shortest_path(&graph, &source, &target),
        floyd_warshall: FloydWarshall.shortest_path(&graph, &source, &target),
        a_star: AStar::uninformed().shortest_path(&graph, &source, &target),
        source,
        target,
    }
}

fn write_tree(f: &mut fmt::Formatter<'_>, label: &str, tree: &SpanningTree<String, i64>) -> fmt::Result {
    write!(f, "  {label:<15} total {}:", tree.total_weight)?;
    for edge in &tree.edges {
        write!(f, " {}-{}({})", edge.from, edge.to, edge.weight)?;
    }
    writeln!(f)
}

fn write_outcome(f: &mut fmt::Formatter<'_>, label: &str, outcome: &PathOutcome<String, i64>) -> fmt::Result {
    match outcome {
        PathOutcome::Found(path) => {
            writeln!(f, "  {label:<15} {} (weight {})", path.vertices.join(" -> "), path.weight)
        }
        PathOutcome::NoPath => writeln!(f, "  {label:<15} no path"),
        PathOutcome::NegativeCycle => writeln!(f, "  {label:<15} negative cycle"),
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.name)?;
        writeln!(f, "  vertices        {}", self.vertices.join(", "))?;
        writeln!(f, "  edges           {}", self.edges.len())?;
        for (label, components) in [("bfs", &self.bfs), ("dfs", &self.dfs), ("union-find", &self.union_find)] {
            let groups: Vec<String> = components.iter().map(|c| format!("{{{}}}", c.join(", "))).collect();
            writeln!(f, "  {label:<15} {}", groups.join(" "))?;
        }
        write_tree(f, "kruskal", &self.kruskal)?;
        write_tree(f, "prim", &self.prim)?;
        writeln!(f, "  query           {} -> {}", self.source, self.target)?;
        write_outcome(f, "dijkstra", &self.dijkstra)?;
        write_outcome(f, "bellman-ford", &self.bellman_ford)?;
        write_outcome(f, "floyd-warshall", &self.floyd_warshall)?;
        write_outcome(f, "a-star", &self.a_star)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_report() {
        let report = run(&scenarios()[0], None);
        assert_eq!(report.vertices, ["A", "B", "C", "D"]);
        assert_eq!(report.edges.len(), 5);
        assert_eq!(report.kruskal.total_weight, 5);
        assert_eq!(report.prim.total_weight, 5);
        assert_eq!(report.dijkstra.weight(), Some(3));
        assert_eq!(report.dijkstra, report.a_star);
    }

    #[test]
    fn prim_start_override() {
        let report = run(&scenarios()[1], Some("E"));
        assert_eq!(report.prim.total_weight, 2);
        assert!(report.prim.contains_edge(&"E".to_string(), &"F".to_string()));
    }

    #[test]
    fn report_prints_every_section() {
        let text = run(&scenarios()[2], None).to_string();
        assert!(text.contains("== two components =="));
        assert!(text.contains("{A, B, C} {D, E}"));
        assert!(text.contains("no path"));
    }

    #[test]
    fn report_serializes_outcome_status() {
        let json = serde_json::to_value(run(&scenarios()[3], None)).unwrap();
        assert_eq!(json["dijkstra"]["status"], "no_path");
        assert_eq!(json["kruskal"]["edges"].as_array().map(Vec::len), Some(0));
    }
}
