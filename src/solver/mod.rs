use itertools::Itertools;
use smallvec::SmallVec;

use crate::astar::astar_search;
use crate::graph::{ReferencePath, WaypointGraph};
use crate::{N_SMALLVEC_SIZE, UNREACHABLE};

pub mod astar;
pub mod dijkstra;

/// A best-first solver over a [WaypointGraph]. Implementors supply the
/// heuristic and the successor policy; route computation is shared.
pub trait GraphSolver {
    /// Estimated remaining cost from `node` to `goal`. `reference` biases
    /// solvers that support it and is ignored by the rest.
    fn heuristic(
        &self,
        graph: &WaypointGraph,
        node: &str,
        goal: &str,
        reference: Option<&ReferencePath>,
    ) -> f64;

    /// Outgoing edges considered when expanding `node`. `parent` is the
    /// node's current predecessor on the best known path, letting solvers
    /// prune the edge that immediately reverses the last step.
    fn successors<'a>(
        &self,
        graph: &'a WaypointGraph,
        parent: Option<&'a str>,
        node: &'a str,
    ) -> SmallVec<[(&'a str, f64); N_SMALLVEC_SIZE]>;

    /// Computes a route from `start` to `goal` inclusive, or [None] when the
    /// goal cannot be reached. An unreachable goal is an expected outcome,
    /// not an error; the caller decides how to react.
    fn get_path(
        &self,
        graph: &WaypointGraph,
        start: &str,
        goal: &str,
        reference: Option<&ReferencePath>,
    ) -> Option<Vec<String>> {
        // Fast negative check before flooding the graph.
        if graph.unreachable(start, goal) {
            return None;
        }
        astar_search(
            &start,
            |parent, node| self.successors(graph, parent.copied(), node),
            |node| self.heuristic(graph, node, goal, reference),
            |node| *node == goal,
        )
        .map(|(path, _cost)| path.into_iter().map(str::to_owned).collect())
    }

    /// Total edge-weight cost of a route under `graph`. A step with no
    /// matching edge contributes [UNREACHABLE], which makes broken routes
    /// stand out in assertions and logs.
    fn get_path_cost(&self, graph: &WaypointGraph, path: &[String]) -> f64 {
        path.iter()
            .tuple_windows()
            .map(|(from, to)| {
                graph
                    .neighbours(from)
                    .iter()
                    .find(|(id, _)| id == to)
                    .map(|(_, weight)| *weight)
                    .unwrap_or(UNREACHABLE)
            })
            .sum()
    }
}
