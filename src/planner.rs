//! Multi-segment mission planning: route every checkpoint in order, stitch
//! the segments into one continuous route and note which collectible
//! checkpoints were reached along the way.

use log::{info, warn};

use crate::graph::{ReferencePath, WaypointGraph};
use crate::solver::GraphSolver;

/// Static mission description: where the agent starts, which checkpoints to
/// visit in order, and which of those carry a collectible.
#[derive(Clone, Debug)]
pub struct Mission {
    start: String,
    checkpoints: Vec<String>,
    collectibles: Vec<String>,
}

impl Mission {
    pub fn new<I, S>(start: impl Into<String>, checkpoints: I) -> Mission
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Mission {
            start: start.into(),
            checkpoints: checkpoints.into_iter().map(Into::into).collect(),
            collectibles: Vec::new(),
        }
    }

    /// Marks a subset of nodes as collectible. Collection is recorded while
    /// planning but never constrains the search.
    pub fn with_collectibles<I, S>(mut self, collectibles: I) -> Mission
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collectibles = collectibles.into_iter().map(Into::into).collect();
        self
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn checkpoints(&self) -> &[String] {
        &self.checkpoints
    }

    fn is_collectible(&self, node: &str) -> bool {
        self.collectibles.iter().any(|c| c == node)
    }
}

/// The stitched route plus the collectibles picked up along the way, in
/// collection order.
#[derive(Clone, Debug, Default)]
pub struct MissionPlan {
    route: Vec<String>,
    collected: Vec<String>,
}

impl MissionPlan {
    /// The full node sequence, junction nodes included exactly once.
    pub fn route(&self) -> &[String] {
        &self.route
    }

    pub fn collected(&self) -> &[String] {
        &self.collected
    }
}

/// Plans missions by chaining solver invocations, one per checkpoint. Each
/// segment starts where the previous one ended; segments run strictly in
/// order and every search owns its own state.
#[derive(Clone, Debug)]
pub struct MissionPlanner<S> {
    solver: S,
}

impl<S: GraphSolver> MissionPlanner<S> {
    pub fn new(solver: S) -> MissionPlanner<S> {
        MissionPlanner { solver }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Routes every checkpoint in order and stitches the segments into one
    /// continuous route. An unreachable checkpoint degrades to a direct
    /// two-node jump so downstream consumers still get a drawable route; the
    /// jump is logged at warn level.
    pub fn plan(
        &self,
        graph: &WaypointGraph,
        mission: &Mission,
        reference: Option<&ReferencePath>,
    ) -> MissionPlan {
        let mut plan = MissionPlan::default();
        let mut current = mission.start().to_owned();
        for target in mission.checkpoints() {
            info!("planning segment {} -> {}", current, target);
            let segment = match self.solver.get_path(graph, &current, target, reference) {
                Some(segment) => segment,
                None => {
                    warn!(
                        "no route from {} to {}, falling back to a direct jump",
                        current, target
                    );
                    vec![current.clone(), target.clone()]
                }
            };
            if mission.is_collectible(target) && !plan.collected.iter().any(|c| c == target) {
                plan.collected.push(target.clone());
                info!("collected {} ({} so far)", target, plan.collected.len());
            }
            if plan.route.is_empty() {
                plan.route.extend(segment);
            } else {
                // The segment starts on the junction node the previous
                // segment already ended on.
                plan.route.extend(segment.into_iter().skip(1));
            }
            current = target.clone();
        }
        plan
    }
}
