use smallvec::SmallVec;

use crate::graph::{ReferencePath, WaypointGraph};
use crate::solver::GraphSolver;
use crate::N_SMALLVEC_SIZE;

/// Uniform-cost search: zero heuristic, no successor pruning, no reference
/// bias. Always returns a minimum-cost route, which makes it the exact
/// baseline for checking other solvers on small graphs.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GraphSolver for DijkstraSolver {
    fn successors<'a>(
        &self,
        graph: &'a WaypointGraph,
        _parent: Option<&'a str>,
        node: &'a str,
    ) -> SmallVec<[(&'a str, f64); N_SMALLVEC_SIZE]> {
        graph.neighbourhood(node)
    }

    fn heuristic(
        &self,
        _graph: &WaypointGraph,
        _node: &str,
        _goal: &str,
        _reference: Option<&ReferencePath>,
    ) -> f64 {
        0.0
    }
}
