//! A* core over an arbitrary successor function. The frontier is a binary
//! heap with lazy deletion: a node may be pushed several times as its best
//! known cost improves, and stale entries are discarded when popped. The
//! parents table records predecessor links and best known costs and doubles
//! as the frontier membership structure. Successor generation receives the
//! node's current predecessor so solvers can prune the edge that would
//! immediately reverse the last step taken.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct FrontierEntry {
    estimated_cost: f64,
    cost: f64,
    index: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.cost == other.cost
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on estimated cost so the max-heap behaves as a min-heap,
        // with ties broken toward the entry with the larger known cost.
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.total_cmp(&other.cost),
            ordering => ordering,
        }
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, goal_index: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path = Vec::new();
    let mut index = goal_index;
    while let Some((node, value)) = parents.get_index(index) {
        path.push(node.clone());
        index = parent(value);
    }
    path.reverse();
    path
}

/// Runs the search from `start` until `success` holds for a popped node,
/// returning the reconstructed path and its cost, or [None] once the frontier
/// empties. All search state is local to the call.
pub(crate) fn astar_search<N, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, f64)>
where
    N: Eq + Hash + Clone,
    FN: FnMut(Option<&N>, &N) -> IN,
    IN: IntoIterator<Item = (N, f64)>,
    FH: FnMut(&N) -> f64,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        estimated_cost: 0.0,
        cost: 0.0,
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, f64)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, 0.0));
    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {
        let successors = {
            let (node, &(parent_index, known_cost)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            // The node may sit in the frontier under several priorities if a
            // better way to reach it was found after it was pushed. Only the
            // entry matching the best known cost is honoured.
            if cost > known_cost {
                continue;
            }
            let parent_node = parents.get_index(parent_index).map(|(n, _)| n);
            successors(parent_node, node)
        };
        for (successor, edge_cost) in successors {
            let tentative_cost = cost + edge_cost;
            let h;
            let successor_index;
            match parents.entry(successor) {
                Vacant(entry) => {
                    h = heuristic(entry.key());
                    successor_index = entry.index();
                    entry.insert((index, tentative_cost));
                }
                Occupied(mut entry) => {
                    if entry.get().1 > tentative_cost {
                        h = heuristic(entry.key());
                        successor_index = entry.index();
                        entry.insert((index, tentative_cost));
                    } else {
                        continue;
                    }
                }
            }
            frontier.push(FrontierEntry {
                estimated_cost: tentative_cost + h,
                cost: tentative_cost,
                index: successor_index,
            });
        }
    }
    debug!("frontier exhausted without reaching the goal");
    None
}
