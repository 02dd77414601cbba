use mission_pathfinding::{AstarSolver, GraphSolver, Point, WaypointGraph};

// In this example a path is found on a three node chain
// A - B - C
// with the nodes placed one unit apart on a line.
fn main() {
    let mut graph = WaypointGraph::new();
    graph.add_node("A", Point::new(0.0, 0.0));
    graph.add_node("B", Point::new(1.0, 0.0));
    graph.add_node("C", Point::new(2.0, 0.0));
    graph.add_edge("A", "B", 1.0);
    graph.add_edge("B", "C", 1.0);
    graph.generate_components();
    let solver = AstarSolver::new();
    if let Some(path) = solver.get_path(&graph, "A", "C", None) {
        println!("A path has been found:");
        for node in path {
            println!("{node}");
        }
    }
}
