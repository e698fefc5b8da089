// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixed-capacity weighted graph backed by an adjacency matrix.

use crate::point::Point;
use std::fmt::Write as _;

/// Sentinel distance standing in for "unreachable"
pub const INFINITY: i32 = 9_999_999;

/// Half-width of the hit-test box around a vertex, in pixels
pub const NEARBY_RANGE: i32 = 20;

/// Minimum per-axis spacing enforced by the random generator
pub const MIN_SEPARATION: i32 = 5;

/// A spatial graph with a fixed vertex capacity.
///
/// Vertices are identified by dense indices `0..vertex_count()`, assigned in
/// insertion order and never reused. Edge weights are the integer Euclidean
/// distance between the endpoint positions; a weight of `0` means "no edge",
/// so two coincident vertices cannot be visibly connected. The matrix is
/// kept symmetric with a zero diagonal.
///
/// The only way to shrink a graph is to replace it wholesale with a fresh
/// one of the same capacity.
#[derive(Debug, Clone)]
pub struct Graph {
    capacity: usize,
    vertex_count: usize,
    labels: Vec<char>,
    positions: Vec<Point>,
    /// Row-major `capacity * capacity` weight matrix
    matrix: Vec<i32>,
}

impl Graph {
    /// Create an empty graph with room for `capacity` vertices
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            vertex_count: 0,
            labels: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            matrix: vec![0; capacity * capacity],
        }
    }

    /// Append a vertex at the next free index.
    ///
    /// Ignored when the graph is already at capacity; the editor checks
    /// before calling, the structure stays forgiving either way.
    pub fn add_vertex(&mut self, label: char, position: Point) {
        if self.vertex_count == self.capacity {
            tracing::debug!(label = %label, "vertex ignored, graph at capacity");
            return;
        }
        tracing::debug!(index = self.vertex_count, label = %label, ?position, "vertex added");
        self.labels.push(label);
        self.positions.push(position);
        self.vertex_count += 1;
    }

    /// Connect two vertices with their integer Euclidean distance.
    ///
    /// Self-loops and out-of-range endpoints are ignored. Both matrix
    /// entries are written, keeping the matrix symmetric. A distance of
    /// exactly `0` (coincident endpoints) is indistinguishable from
    /// "no edge".
    pub fn add_edge(&mut self, i: usize, j: usize) {
        if i >= self.vertex_count || j >= self.vertex_count || i == j {
            return;
        }
        let distance = self.positions[i].distance(&self.positions[j]);
        self.matrix[i * self.capacity + j] = distance;
        self.matrix[j * self.capacity + i] = distance;
        tracing::debug!(i, j, weight = distance, "edge added");
    }

    /// Weight of the edge between `i` and `j`; `0` when absent or out of range
    pub fn weight(&self, i: usize, j: usize) -> i32 {
        if i >= self.capacity || j >= self.capacity {
            return 0;
        }
        self.matrix[i * self.capacity + j]
    }

    /// Label of a vertex
    pub fn label(&self, vertex: usize) -> Option<char> {
        self.labels.get(vertex).copied()
    }

    /// Canvas position of a vertex
    pub fn position(&self, vertex: usize) -> Option<Point> {
        self.positions.get(vertex).copied()
    }

    /// Number of inserted vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Fixed vertex capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another vertex still fits
    pub fn is_full(&self) -> bool {
        self.vertex_count == self.capacity
    }

    /// First vertex whose position lies within the hit-test box around `point`.
    ///
    /// Linear scan in index order; the box extends [`NEARBY_RANGE`] pixels
    /// on each axis. Used to resolve mouse clicks against vertices.
    pub fn nearby_vertex(&self, point: Point) -> Option<usize> {
        self.positions.iter().position(|pos| {
            (pos.x - point.x).abs() < NEARBY_RANGE && (pos.y - point.y).abs() < NEARBY_RANGE
        })
    }

    /// Whether every slot is reachable from vertex 0.
    ///
    /// Runs Dijkstra from vertex 0 and checks the full capacity-sized
    /// distance array, so the answer is only meaningful when the graph is
    /// filled to capacity: uninserted slots keep the [`INFINITY`] sentinel
    /// and report as disconnected.
    pub fn is_connected(&self) -> bool {
        crate::dijkstra::shortest_distances(self, 0)
            .iter()
            .all(|&distance| distance != INFINITY)
    }

    /// Render the adjacency matrix as a labelled table.
    ///
    /// Uninserted slots show `.` in the header and row labels. The caller
    /// decides where the dump goes; the demo logs it.
    pub fn format_matrix(&self) -> String {
        let mut out = String::from("  ");
        for i in 0..self.capacity {
            let _ = write!(out, "{} ", self.label(i).unwrap_or('.'));
        }
        out.push('\n');

        for i in 0..self.capacity {
            let _ = write!(out, "{} ", self.label(i).unwrap_or('.'));
            for j in 0..self.capacity {
                let _ = write!(out, "{} ", self.weight(i, j));
            }
            out.push('\n');
        }
        out
    }
}

/// Letter label for an insertion index: 0 is 'A', 1 is 'B', and so on.
///
/// Indices past 'Z' continue through the character table, matching the
/// sequential labelling the editor and the random generator share.
pub fn letter_label(index: usize) -> char {
    char::from(b'A'.wrapping_add(index as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_graph() -> Graph {
        // A(0,0) B(10,0) C(10,10) D(0,10), edges A-B, B-C, C-D
        let mut g = Graph::new(4);
        g.add_vertex('A', Point::new(0, 0));
        g.add_vertex('B', Point::new(10, 0));
        g.add_vertex('C', Point::new(10, 10));
        g.add_vertex('D', Point::new(0, 10));
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g
    }

    #[test]
    fn test_edge_weight_is_symmetric_euclidean() {
        let mut g = Graph::new(4);
        g.add_vertex('A', Point::new(0, 0));
        g.add_vertex('B', Point::new(3, 4));
        g.add_vertex('C', Point::new(5, 5));
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        assert_eq!(g.weight(0, 1), 5);
        assert_eq!(g.weight(1, 0), 5);
        // sqrt(50) truncates to 7
        assert_eq!(g.weight(0, 2), 7);
        assert_eq!(g.weight(2, 0), 7);
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let mut g = square_graph();
        for i in 0..g.vertex_count() {
            g.add_edge(i, i);
            assert_eq!(g.weight(i, i), 0);
        }
    }

    #[test]
    fn test_out_of_range_edge_is_ignored() {
        let mut g = Graph::new(4);
        g.add_vertex('A', Point::new(0, 0));
        g.add_vertex('B', Point::new(10, 0));
        let before = g.clone();
        g.add_edge(0, 2);
        g.add_edge(7, 1);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(g.weight(i, j), before.weight(i, j));
            }
        }
    }

    #[test]
    fn test_add_vertex_at_capacity_is_ignored() {
        let mut g = Graph::new(1);
        g.add_vertex('A', Point::new(0, 0));
        g.add_vertex('B', Point::new(50, 50));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.label(0), Some('A'));
        assert_eq!(g.label(1), None);
    }

    #[test]
    fn test_nearby_vertex_hit_and_miss() {
        let g = square_graph();
        // within the 20px box of A
        assert_eq!(g.nearby_vertex(Point::new(15, 15)), Some(0));
        // exactly on B
        assert_eq!(g.nearby_vertex(Point::new(10, 0)), Some(1));
        // far from everything
        assert_eq!(g.nearby_vertex(Point::new(200, 200)), None);
        // 20 on one axis is already outside the open box
        assert_eq!(g.nearby_vertex(Point::new(10, 30)), None);
    }

    #[test]
    fn test_nearby_vertex_returns_first_match() {
        let mut g = Graph::new(2);
        g.add_vertex('A', Point::new(0, 0));
        g.add_vertex('B', Point::new(5, 5));
        assert_eq!(g.nearby_vertex(Point::new(3, 3)), Some(0));
    }

    #[test]
    fn test_is_connected_complete_graph() {
        let mut g = Graph::new(4);
        g.add_vertex('A', Point::new(0, 0));
        g.add_vertex('B', Point::new(10, 0));
        g.add_vertex('C', Point::new(10, 10));
        g.add_vertex('D', Point::new(0, 10));
        for i in 0..4 {
            for j in 0..4 {
                g.add_edge(i, j);
            }
        }
        assert!(g.is_connected());
    }

    #[test]
    fn test_is_connected_disjoint_components() {
        let mut g = Graph::new(4);
        g.add_vertex('A', Point::new(0, 0));
        g.add_vertex('B', Point::new(10, 0));
        g.add_vertex('C', Point::new(100, 100));
        g.add_vertex('D', Point::new(110, 100));
        g.add_edge(0, 1);
        g.add_edge(2, 3);
        assert!(!g.is_connected());
    }

    #[test]
    fn test_format_matrix_lists_labels() {
        let g = square_graph();
        let dump = g.format_matrix();
        let mut lines = dump.lines();
        assert_eq!(lines.next(), Some("  A B C D "));
        assert!(dump.lines().count() == 5);
        assert!(dump.contains("A 0 10 0 0 "));
    }
}
