//! Cross-checks the A* solver against the Dijkstra baseline on many seeded
//! random graphs: same reachability verdict, same route cost (the goal
//! heuristic stays admissible because edge weights never drop below the
//! straight-line hop length), valid edges throughout and no immediate
//! reversals.

use itertools::Itertools;
use mission_pathfinding::{
    AstarSolver, DijkstraSolver, GraphSolver, Point, WaypointGraph, UNREACHABLE,
};
use rand::prelude::*;

fn random_graph(n: usize, rng: &mut StdRng) -> WaypointGraph {
    let mut graph = WaypointGraph::new();
    let ids: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
    for id in &ids {
        let position = Point::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        graph.add_node(id.clone(), position);
    }
    for from in &ids {
        for _ in 0..rng.gen_range(0..=3) {
            let to = &ids[rng.gen_range(0..n)];
            if to == from || graph.neighbours(from).iter().any(|(id, _)| id == to) {
                continue;
            }
            // At or above the straight-line distance, so the goal heuristic
            // never overestimates.
            let weight = graph.heuristic_distance(from, to) * rng.gen_range(1.0..1.5) + 0.01;
            graph.add_edge(from, to, weight);
        }
    }
    graph.generate_components();
    graph
}

fn assert_valid_path(graph: &WaypointGraph, path: &[String], start: &str, goal: &str) {
    assert_eq!(path.first().map(String::as_str), Some(start));
    assert_eq!(path.last().map(String::as_str), Some(goal));
    for (from, to) in path.iter().tuple_windows() {
        assert!(
            graph.neighbours(from).iter().any(|(id, _)| id == to),
            "{from} -> {to} is not an edge"
        );
    }
}

#[test]
fn fuzz_astar_matches_dijkstra() {
    const N: usize = 12;
    const N_GRAPHS: usize = 300;
    let mut rng = StdRng::seed_from_u64(0);
    let astar = AstarSolver::new();
    let dijkstra = DijkstraSolver;

    for _ in 0..N_GRAPHS {
        let graph = random_graph(N, &mut rng);
        let start = "n0";
        let goal = "n11";
        let baseline = dijkstra.get_path(&graph, start, goal, None);
        let found = astar.get_path(&graph, start, goal, None);
        assert_eq!(
            baseline.is_some(),
            found.is_some(),
            "solvers disagree on reachability\n{graph}"
        );
        if let (Some(baseline), Some(found)) = (baseline, found) {
            assert_valid_path(&graph, &baseline, start, goal);
            assert_valid_path(&graph, &found, start, goal);
            let baseline_cost = dijkstra.get_path_cost(&graph, &baseline);
            let found_cost = astar.get_path_cost(&graph, &found);
            assert!(baseline_cost < UNREACHABLE);
            assert!(
                (found_cost - baseline_cost).abs() < 1e-6,
                "astar cost {found_cost} differs from dijkstra cost {baseline_cost}\n{graph}"
            );
        }
    }
}

#[test]
fn fuzz_no_immediate_reversals() {
    const N: usize = 12;
    const N_GRAPHS: usize = 300;
    let mut rng = StdRng::seed_from_u64(1);
    let astar = AstarSolver::new();

    for _ in 0..N_GRAPHS {
        let graph = random_graph(N, &mut rng);
        if let Some(path) = astar.get_path(&graph, "n0", "n11", None) {
            for (a, _, c) in path.iter().tuple_windows() {
                assert_ne!(a, c, "path reverses a step: {path:?}");
            }
        }
    }
}

#[test]
fn fuzz_precheck_agrees_with_search() {
    const N: usize = 10;
    const N_GRAPHS: usize = 300;
    let mut rng = StdRng::seed_from_u64(2);
    let astar = AstarSolver::new();

    for _ in 0..N_GRAPHS {
        let graph = random_graph(N, &mut rng);
        let found = astar.get_path(&graph, "n0", "n9", None);
        if graph.unreachable("n0", "n9") {
            // Weak connectivity is a negative-only proof; it must never
            // contradict an actual route.
            assert!(found.is_none(), "precheck vetoed a findable route\n{graph}");
        }
    }
}
