use mission_pathfinding::{
    AstarSolver, GraphSolver, Mission, MissionPlanner, Point, ReferencePath, WaypointGraph,
};

// The full pirate-ship maze: 50 nodes spread over nine decks, with edge
// weights of 1 to 3 for the movement cost between waypoints. The agent
// starts on the top deck, picks up a cannonball on each of four decks and
// finishes back on the top deck. Coordinates are pixel positions on the
// ship image used by the renderer.

#[rustfmt::skip]
const COORDS: &[(&str, f64, f64)] = &[
    // Deck 0 (bottom)
    ("1", 448.0, 1104.0),
    // Deck 1
    ("2", 327.0, 1020.0), ("3", 552.0, 1013.0), ("4", 606.0, 988.0), ("5", 702.0, 1012.0),
    // Deck 2
    ("6", 488.0, 927.0), ("7", 679.0, 922.0), ("8", 796.0, 921.0), ("9", 845.0, 917.0),
    ("10", 362.0, 924.0), ("11", 319.0, 911.0), ("12", 225.0, 921.0),
    // Deck 3
    ("13", 153.0, 839.0), ("14", 285.0, 842.0), ("15", 437.0, 842.0), ("16", 577.0, 838.0),
    ("17", 652.0, 826.0), ("18", 743.0, 836.0), ("19", 839.0, 833.0), ("20", 920.0, 790.0),
    ("21", 327.0, 809.0),
    // Deck 4
    ("22", 188.0, 745.0), ("23", 324.0, 729.0), ("24", 456.0, 731.0), ("25", 604.0, 731.0),
    ("26", 670.0, 740.0), ("27", 775.0, 726.0), ("37", 108.0, 699.0),
    // Deck 5
    ("28", 793.0, 632.0), ("29", 877.0, 581.0), ("30", 719.0, 618.0), ("31", 628.0, 627.0),
    ("32", 596.0, 626.0), ("33", 416.0, 627.0), ("34", 451.0, 600.0), ("35", 351.0, 633.0),
    ("36", 212.0, 630.0),
    // Deck 6
    ("38", 234.0, 539.0), ("39", 416.0, 536.0), ("40", 529.0, 533.0), ("41", 579.0, 531.0),
    ("42", 683.0, 538.0), ("43", 745.0, 525.0),
    // Deck 7
    ("44", 778.0, 442.0), ("45", 571.0, 445.0), ("46", 478.0, 425.0), ("47", 383.0, 445.0),
    ("48", 249.0, 425.0),
    // Deck 8 (top)
    ("49", 348.0, 343.0), ("50", 665.0, 340.0),
];

#[rustfmt::skip]
const EDGES: &[(&str, &[(&str, f64)])] = &[
    ("1", &[("2", 1.0), ("3", 1.0)]),
    ("2", &[("1", 1.0), ("3", 2.0), ("10", 1.0)]),
    ("3", &[("1", 1.0), ("2", 2.0), ("4", 1.0)]),
    ("4", &[("3", 1.0), ("5", 3.0), ("7", 1.0), ("6", 3.0)]),
    ("5", &[("4", 3.0), ("8", 1.0)]),
    ("6", &[("4", 3.0), ("16", 3.0), ("10", 2.0)]),
    ("7", &[("4", 1.0), ("18", 3.0)]),
    ("8", &[("5", 1.0), ("9", 1.0), ("18", 3.0)]),
    ("9", &[("19", 3.0), ("8", 1.0)]),
    ("10", &[("6", 2.0), ("11", 1.0)]),
    ("11", &[("10", 1.0)]),
    ("12", &[("13", 1.0), ("14", 1.0)]),
    ("13", &[("12", 1.0), ("22", 1.0)]),
    ("14", &[("12", 1.0), ("21", 1.0)]),
    ("15", &[("21", 2.0), ("16", 2.0)]),
    ("16", &[("6", 3.0), ("15", 2.0), ("17", 3.0)]),
    ("17", &[("18", 1.0), ("16", 3.0)]),
    ("18", &[("8", 3.0), ("17", 1.0), ("19", 2.0)]),
    ("19", &[("9", 3.0), ("18", 2.0), ("20", 3.0)]),
    ("20", &[("19", 3.0), ("27", 1.0)]),
    ("21", &[("14", 1.0), ("15", 2.0), ("24", 3.0), ("23", 1.0), ("22", 3.0)]),
    ("22", &[("13", 1.0), ("21", 3.0), ("23", 2.0), ("37", 1.0)]),
    ("23", &[("35", 2.0), ("22", 2.0), ("21", 1.0)]),
    ("24", &[("21", 3.0), ("25", 3.0)]),
    ("25", &[("26", 1.0), ("24", 3.0)]),
    ("26", &[("27", 2.0), ("25", 1.0)]),
    ("27", &[("28", 2.0), ("26", 2.0), ("20", 1.0)]),
    ("28", &[("29", 1.0), ("27", 2.0), ("30", 1.0)]),
    ("29", &[("28", 1.0), ("43", 1.0)]),
    ("30", &[("28", 1.0), ("31", 1.0)]),
    ("31", &[("32", 1.0), ("30", 1.0), ("42", 3.0)]),
    ("32", &[("34", 1.0), ("31", 1.0)]),
    ("33", &[("35", 1.0), ("34", 2.0)]),
    ("34", &[("39", 3.0), ("33", 2.0), ("32", 1.0), ("41", 2.0), ("40", 1.0)]),
    ("35", &[("36", 2.0), ("33", 1.0), ("23", 2.0)]),
    ("36", &[("37", 1.0), ("35", 2.0), ("38", 2.0)]),
    ("37", &[("22", 1.0), ("36", 1.0)]),
    ("38", &[("36", 2.0), ("39", 2.0)]),
    ("39", &[("34", 3.0), ("38", 2.0)]),
    ("40", &[("34", 1.0), ("41", 1.0)]),
    ("41", &[("42", 2.0), ("34", 2.0), ("40", 1.0)]),
    ("42", &[("43", 2.0), ("41", 2.0), ("31", 3.0)]),
    ("43", &[("42", 2.0), ("29", 1.0)]),
    ("44", &[("50", 1.0), ("45", 1.0)]),
    ("45", &[("46", 1.0), ("44", 1.0)]),
    ("46", &[("49", 2.0), ("50", 3.0), ("45", 1.0), ("47", 1.0)]),
    ("47", &[("46", 1.0), ("48", 1.0)]),
    ("48", &[("49", 3.0), ("47", 1.0)]),
    ("49", &[("46", 2.0), ("48", 3.0)]),
    ("50", &[("44", 1.0), ("46", 3.0)]),
];

// One cannonball per marked deck, collected on the way to the finish.
const CANNONBALL_NODES: [&str; 4] = ["4", "21", "34", "46"];
const START_NODE: &str = "50";
const FINISH_NODE: &str = "49";

fn ship_graph() -> WaypointGraph {
    let mut graph = WaypointGraph::new();
    for &(id, x, y) in COORDS {
        graph.add_node(id, Point::new(x, y));
    }
    for &(from, edges) in EDGES {
        for &(to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
    }
    graph.generate_components();
    graph
}

fn main() {
    let graph = ship_graph();
    println!("{graph}");

    let mut checkpoints: Vec<&str> = CANNONBALL_NODES.to_vec();
    checkpoints.push(FINISH_NODE);
    let mission = Mission::new(START_NODE, checkpoints).with_collectibles(CANNONBALL_NODES);

    // A hand-played route down the port side, used to bias the search.
    let reference = ReferencePath::new(["46", "47", "48", "38", "36", "22", "21"]);

    let solver = AstarSolver::new();
    let planner = MissionPlanner::new(solver);
    let plan = planner.plan(&graph, &mission, Some(&reference));

    println!("Mission route ({} steps):", plan.route().len());
    println!("{}", plan.route().join(" -> "));
    println!(
        "Cannonballs collected: {}/{} {:?}",
        plan.collected().len(),
        CANNONBALL_NODES.len(),
        plan.collected()
    );
    println!(
        "Route cost: {:.1}",
        planner.solver().get_path_cost(&graph, plan.route())
    );
}
