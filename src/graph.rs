//! Static routing data: node positions, the directed weighted adjacency list
//! and an optional reference path. All of it is authored once, before any
//! search runs; searches only ever borrow it immutably.

use core::fmt;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::{N_SMALLVEC_SIZE, UNREACHABLE};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A position on the map, in the same pixel space the renderer draws in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Straight-line distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An ordered sequence of node ids marking a known-good route. Solvers that
/// support it use this as a steering signal only; it never constrains which
/// edges a search may take.
#[derive(Clone, Debug, Default)]
pub struct ReferencePath {
    nodes: Vec<String>,
}

impl ReferencePath {
    pub fn new<I, S>(nodes: I) -> ReferencePath
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReferencePath {
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// [WaypointGraph] holds the hand-authored adjacency list and node positions,
/// plus a [UnionFind] over weak connectivity (edge direction ignored) used as
/// a cheap unreachability precheck before a search floods the graph.
///
/// Edges are directed and weights must be positive. Every node a search may
/// touch needs a coordinate entry; nodes without one are treated as
/// infinitely far by the heuristics.
#[derive(Clone, Debug)]
pub struct WaypointGraph {
    adjacency: FxIndexMap<String, Vec<(String, f64)>>,
    coords: FxIndexMap<String, Point>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Default for WaypointGraph {
    fn default() -> WaypointGraph {
        WaypointGraph {
            adjacency: FxIndexMap::default(),
            coords: FxIndexMap::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl WaypointGraph {
    pub fn new() -> WaypointGraph {
        WaypointGraph::default()
    }

    /// Registers a node at the given position. Re-inserting an id updates the
    /// position.
    pub fn add_node(&mut self, id: impl Into<String>, position: Point) {
        self.coords.insert(id.into(), position);
        self.components_dirty = true;
    }

    /// Adds the directed edge `from -> to`. The reverse edge must be added
    /// explicitly if the connection is walkable both ways.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) {
        self.adjacency
            .entry(from.to_owned())
            .or_default()
            .push((to.to_owned(), weight));
        self.components_dirty = true;
    }

    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.coords.contains_key(node)
    }

    pub fn position(&self, node: &str) -> Option<Point> {
        self.coords.get(node).copied()
    }

    /// Outgoing edges of `node`; empty for unknown or dead-end nodes.
    pub fn neighbours(&self, node: &str) -> &[(String, f64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Outgoing edges as borrowed ids, in the fixed authored order.
    pub fn neighbourhood<'a>(&'a self, node: &str) -> SmallVec<[(&'a str, f64); N_SMALLVEC_SIZE]> {
        self.neighbours(node)
            .iter()
            .map(|(id, weight)| (id.as_str(), *weight))
            .collect()
    }

    /// Straight-line distance between two nodes, or [UNREACHABLE] when either
    /// side has no coordinate entry.
    pub fn heuristic_distance(&self, a: &str, b: &str) -> f64 {
        match (self.coords.get(a), self.coords.get(b)) {
            (Some(pa), Some(pb)) => pa.distance(pb),
            _ => UNREACHABLE,
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and unions the endpoints of
    /// every edge, ignoring direction. The coordinate map's stable insertion
    /// indices serve as union-find keys.
    pub fn generate_components(&mut self) {
        info!("generating weak-connectivity components");
        self.components = UnionFind::new(self.coords.len());
        self.components_dirty = false;
        for (from, edges) in &self.adjacency {
            let Some(from_ix) = self.coords.get_index_of(from) else {
                continue;
            };
            for (to, _) in edges {
                if let Some(to_ix) = self.coords.get_index_of(to) {
                    self.components.union(from_ix, to_ix);
                }
            }
        }
    }

    /// Checks whether `goal` is provably unreachable from `start`. Because
    /// the components ignore edge direction this can only prove
    /// unreachability, never reachability; while the components are dirty it
    /// answers [false] ("not provably unreachable") so a stale structure can
    /// never suppress a valid search.
    pub fn unreachable(&self, start: &str, goal: &str) -> bool {
        let (Some(start_ix), Some(goal_ix)) =
            (self.coords.get_index_of(start), self.coords.get_index_of(goal))
        else {
            return true;
        };
        if self.components_dirty {
            return false;
        }
        !self.components.equiv(start_ix, goal_ix)
    }
}

impl fmt::Display for WaypointGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "WaypointGraph: {} nodes, {} edges",
            self.node_count(),
            self.edge_count()
        )?;
        for (node, edges) in &self.adjacency {
            writeln!(f, "  {} -> {:?}", node, edges)?;
        }
        Ok(())
    }
}
