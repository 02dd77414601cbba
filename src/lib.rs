//! # mission_pathfinding
//!
//! Routing over small, hand-authored waypoint graphs of the kind used to
//! overlay a maze-like map image. Implements a best-first search with a dual
//! heuristic: straight-line distance to the goal plus a weighted bias term
//! pulling the route toward an optional reference path. A mission planner
//! chains searches across an ordered list of checkpoints and stitches the
//! segments into one continuous route, tracking collectible checkpoints along
//! the way.
//!
//! Graphs here are tens of nodes; everything is synchronous and allocates its
//! search state per call. Pre-computes weak-connectivity
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.

mod astar;
pub mod graph;
pub mod planner;
pub mod solver;

pub use graph::{Point, ReferencePath, WaypointGraph};
pub use planner::{Mission, MissionPlan, MissionPlanner};
pub use solver::astar::AstarSolver;
pub use solver::dijkstra::DijkstraSolver;
pub use solver::GraphSolver;

/// Default weight of the reference-path bias term in the dual heuristic.
pub const BIAS_WEIGHT: f64 = 2.5;

/// Sentinel distance standing in for infinity. Heuristics return this for
/// nodes without a coordinate entry, deprioritizing them instead of failing.
pub const UNREACHABLE: f64 = 1.0e12;

pub(crate) const N_SMALLVEC_SIZE: usize = 8;
