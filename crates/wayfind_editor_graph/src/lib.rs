// SPDX-License-Identifier: MIT OR Apache-2.0
//! Spatial graph core for Wayfind Editor.
//!
//! This crate provides the in-memory graph model that powers the editor:
//! - Fixed-capacity vertex set with letter labels and canvas coordinates
//! - Symmetric adjacency matrix of integer Euclidean edge weights
//! - Depth/breadth-first traversals
//! - Dijkstra single-source shortest distances
//! - A* search with swappable heuristics
//! - Random instance generation for stress/demo use
//!
//! ## Architecture
//!
//! The graph is a pure combinatorial structure: it never issues drawing
//! calls. The editor layer reads vertex positions and edge weights out of
//! it and talks to the rendering collaborator itself. All operations are
//! synchronous and run on the caller's thread.

pub mod astar;
pub mod dijkstra;
pub mod graph;
pub mod point;
pub mod random;
pub mod traversal;

pub use astar::{a_star_search, path_cost, reconstruct_path, Heuristic, NoPathError};
pub use dijkstra::shortest_distances;
pub use graph::{letter_label, Graph, INFINITY};
pub use point::Point;
pub use random::random_graph;
pub use traversal::{breadth_first_search, depth_first_search, TraversalEvent};
