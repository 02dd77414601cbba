use smallvec::SmallVec;

use crate::graph::{ReferencePath, WaypointGraph};
use crate::solver::GraphSolver;
use crate::{BIAS_WEIGHT, N_SMALLVEC_SIZE, UNREACHABLE};

/// A* with a dual heuristic: straight-line distance to the goal plus a
/// weighted bias toward the nearest node of a reference path. The bias term
/// deliberately breaks admissibility, trading strict optimality for routes
/// that predictably hug a known-good path. With no reference path supplied
/// this reduces to plain A*.
///
/// Never expands the edge back to a node's recorded predecessor, so returned
/// routes contain no immediate reversal.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the goal-distance term. Values above 1.0 give weighted A*,
    /// evaluating nodes close to the goal sooner at the cost of optimality.
    pub heuristic_factor: f64,
    /// Weight of the reference-path proximity term.
    pub bias_weight: f64,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            bias_weight: BIAS_WEIGHT,
        }
    }

    pub fn with_bias_weight(bias_weight: f64) -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            bias_weight,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GraphSolver for AstarSolver {
    fn successors<'a>(
        &self,
        graph: &'a WaypointGraph,
        parent: Option<&'a str>,
        node: &'a str,
    ) -> SmallVec<[(&'a str, f64); N_SMALLVEC_SIZE]> {
        graph
            .neighbourhood(node)
            .into_iter()
            .filter(|&(id, _)| parent != Some(id))
            .collect()
    }

    fn heuristic(
        &self,
        graph: &WaypointGraph,
        node: &str,
        goal: &str,
        reference: Option<&ReferencePath>,
    ) -> f64 {
        let goal_term = graph.heuristic_distance(node, goal) * self.heuristic_factor;
        let bias_term = match reference {
            Some(reference) if !reference.is_empty() => {
                reference
                    .nodes()
                    .iter()
                    .map(|r| graph.heuristic_distance(node, r))
                    .fold(UNREACHABLE, f64::min)
                    * self.bias_weight
            }
            _ => 0.0,
        };
        goal_term + bias_term
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Point;
    use itertools::Itertools;

    /// Three colinear nodes one unit apart, chained a -> b -> c.
    fn unit_chain() -> WaypointGraph {
        let mut graph = WaypointGraph::new();
        graph.add_node("a", Point::new(0.0, 0.0));
        graph.add_node("b", Point::new(1.0, 0.0));
        graph.add_node("c", Point::new(2.0, 0.0));
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("b", "c", 1.0);
        graph.generate_components();
        graph
    }

    /// Two disjoint routes from s to g: the lower one is slightly cheaper,
    /// the upper one runs along the reference path. Weights stay at or above
    /// the straight-line hop lengths.
    fn two_route_graph() -> (WaypointGraph, ReferencePath) {
        let mut graph = WaypointGraph::new();
        graph.add_node("s", Point::new(0.0, 0.0));
        graph.add_node("g", Point::new(4.0, 0.0));
        for (i, id) in ["u1", "u2", "u3"].iter().enumerate() {
            graph.add_node(*id, Point::new(i as f64 + 1.0, 1.0));
        }
        for (i, id) in ["l1", "l2", "l3"].iter().enumerate() {
            graph.add_node(*id, Point::new(i as f64 + 1.0, -1.0));
        }
        graph.add_edge("s", "u1", 1.55);
        graph.add_edge("u1", "u2", 1.0);
        graph.add_edge("u2", "u3", 1.0);
        graph.add_edge("u3", "g", 1.55);
        graph.add_edge("s", "l1", 1.45);
        graph.add_edge("l1", "l2", 1.0);
        graph.add_edge("l2", "l3", 1.0);
        graph.add_edge("l3", "g", 1.45);
        graph.generate_components();
        let reference = ReferencePath::new(["u1", "u2", "u3"]);
        (graph, reference)
    }

    fn distance_to_reference(graph: &WaypointGraph, path: &[String], r: &ReferencePath) -> f64 {
        path.iter()
            .map(|node| {
                r.nodes()
                    .iter()
                    .map(|m| graph.heuristic_distance(node, m))
                    .fold(UNREACHABLE, f64::min)
            })
            .sum()
    }

    #[test]
    fn worked_example_unit_chain() {
        let graph = unit_chain();
        let solver = AstarSolver::new();
        let path = solver.get_path(&graph, "a", "c", None).unwrap();
        assert_eq!(path, vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_start_and_goal() {
        let graph = unit_chain();
        let solver = AstarSolver::new();
        let path = solver.get_path(&graph, "b", "b", None).unwrap();
        assert_eq!(path, vec!["b"]);
    }

    #[test]
    fn unreachable_goal_is_none() {
        let mut graph = unit_chain();
        graph.add_node("island", Point::new(9.0, 9.0));
        graph.generate_components();
        let solver = AstarSolver::new();
        assert!(solver.get_path(&graph, "a", "island", None).is_none());
        // Directed dead end: reachable by weak connectivity, so the precheck
        // passes and the frontier has to exhaust instead.
        assert!(solver.get_path(&graph, "c", "a", None).is_none());
    }

    #[test]
    fn missing_coordinates_do_not_panic() {
        let mut graph = unit_chain();
        graph.add_edge("c", "ghost", 1.0);
        let solver = AstarSolver::new();
        // "ghost" has no coordinate entry: heuristics treat it as infinitely
        // far but the search still terminates.
        let path = solver.get_path(&graph, "a", "c", None).unwrap();
        assert_eq!(path, vec!["a", "b", "c"]);
        assert!(solver.get_path(&graph, "a", "ghost", None).is_none());
    }

    #[test]
    fn no_immediate_reversal() {
        let (graph, _) = two_route_graph();
        let solver = AstarSolver::new();
        let path = solver.get_path(&graph, "s", "g", None).unwrap();
        for (a, _b, c) in path.iter().tuple_windows() {
            assert_ne!(a, c, "path reverses a step: {:?}", path);
        }
    }

    #[test]
    fn no_reference_path_takes_the_cheaper_route() {
        let (graph, _) = two_route_graph();
        let solver = AstarSolver::new();
        let path = solver.get_path(&graph, "s", "g", None).unwrap();
        assert_eq!(path, vec!["s", "l1", "l2", "l3", "g"]);
    }

    #[test]
    fn reference_path_pulls_the_route_upward() {
        let (graph, reference) = two_route_graph();
        let solver = AstarSolver::new();
        let path = solver.get_path(&graph, "s", "g", Some(&reference)).unwrap();
        assert_eq!(path, vec!["s", "u1", "u2", "u3", "g"]);
    }

    #[test]
    fn bias_weight_never_increases_reference_distance() {
        let (graph, reference) = two_route_graph();
        let unbiased = AstarSolver::with_bias_weight(0.0)
            .get_path(&graph, "s", "g", Some(&reference))
            .unwrap();
        let biased = AstarSolver::new()
            .get_path(&graph, "s", "g", Some(&reference))
            .unwrap();
        let unbiased_distance = distance_to_reference(&graph, &unbiased, &reference);
        let biased_distance = distance_to_reference(&graph, &biased, &reference);
        assert!(biased_distance <= unbiased_distance);
    }

    #[test]
    fn empty_reference_path_reduces_to_plain_astar() {
        let (graph, _) = two_route_graph();
        let solver = AstarSolver::new();
        let empty = ReferencePath::default();
        let with_empty = solver.get_path(&graph, "s", "g", Some(&empty)).unwrap();
        let without = solver.get_path(&graph, "s", "g", None).unwrap();
        assert_eq!(with_empty, without);
    }
}
