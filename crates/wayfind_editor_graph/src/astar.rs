// SPDX-License-Identifier: MIT OR Apache-2.0
//! A* search with swappable heuristics.

use crate::graph::{Graph, INFINITY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Distance estimate guiding A*'s vertex selection.
///
/// Passed explicitly into every search call; there is no shared mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heuristic {
    /// No estimate; reduces A* to Dijkstra
    Zero,
    /// Straight-line integer distance to the target. Admissible and
    /// consistent, since edge weights are exact Euclidean distances.
    #[default]
    Euclidean,
    /// Horizontal distance only. Not admissible in general; kept for
    /// comparative experiments, and may yield a non-optimal path.
    XDifference,
    /// Vertical distance only. Same caveat as [`Heuristic::XDifference`].
    YDifference,
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `to`.
    ///
    /// Vertices without a position (out-of-range indices) estimate as `0`,
    /// which is trivially admissible.
    pub fn estimate(&self, graph: &Graph, from: usize, to: usize) -> i32 {
        let (Some(a), Some(b)) = (graph.position(from), graph.position(to)) else {
            return 0;
        };
        match self {
            Self::Zero => 0,
            Self::Euclidean => a.distance(&b),
            Self::XDifference => (a.x - b.x).abs(),
            Self::YDifference => (a.y - b.y).abs(),
        }
    }

    /// Display name of this heuristic
    pub fn name(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Euclidean => "euclidean",
            Self::XDifference => "x-difference",
            Self::YDifference => "y-difference",
        }
    }

    /// All heuristics, in comparison-sweep order
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Euclidean,
        Heuristic::Zero,
        Heuristic::XDifference,
        Heuristic::YDifference,
    ];
}

/// The open set drained without reaching the target
#[derive(Debug, Clone, thiserror::Error)]
#[error("no path between vertices {start} and {finish}")]
pub struct NoPathError {
    /// Search origin
    pub start: usize,
    /// Unreached target
    pub finish: usize,
}

/// Shortest start-to-finish path under the given heuristic.
///
/// Returns the vertex indices from `start` to `finish` inclusive. The open
/// set is an ordered set scanned linearly for the least `f` score, so ties
/// resolve to the lowest index. Relaxation only accepts strict improvements
/// of the known path cost.
///
/// Fails with [`NoPathError`] when the open set empties before the target
/// is reached, or when either endpoint is not an inserted vertex.
pub fn a_star_search(
    graph: &Graph,
    start: usize,
    finish: usize,
    heuristic: Heuristic,
) -> Result<Vec<usize>, NoPathError> {
    if start >= graph.vertex_count() || finish >= graph.vertex_count() {
        return Err(NoPathError { start, finish });
    }

    let mut g_score = vec![INFINITY; graph.capacity()];
    let mut f_score = vec![INFINITY; graph.capacity()];
    let mut came_from: Vec<Option<usize>> = vec![None; graph.capacity()];
    let mut open_set = BTreeSet::new();

    open_set.insert(start);
    g_score[start] = 0;
    f_score[start] = heuristic.estimate(graph, start, finish);

    while !open_set.is_empty() {
        // vertex with the least f score; ascending iteration breaks ties low
        let mut min = INFINITY;
        let mut current = None;
        for &vertex in &open_set {
            if f_score[vertex] < min {
                min = f_score[vertex];
                current = Some(vertex);
            }
        }
        let Some(current) = current else { break };
        open_set.remove(&current);

        if current == finish {
            tracing::debug!(start, finish, cost = g_score[finish], "path found");
            return Ok(reconstruct_path(&came_from, current));
        }

        for i in 0..graph.vertex_count() {
            let weight = graph.weight(current, i);
            if weight == 0 {
                continue;
            }

            let tentative = g_score[current] + weight;
            if tentative < g_score[i] {
                g_score[i] = tentative;
                came_from[i] = Some(current);
                f_score[i] = tentative + heuristic.estimate(graph, i, finish);
                open_set.insert(i);
            }
        }
    }

    Err(NoPathError { start, finish })
}

/// Total weight of a path, summed over consecutive vertex pairs
pub fn path_cost(graph: &Graph, path: &[usize]) -> i32 {
    path.windows(2).map(|pair| graph.weight(pair[0], pair[1])).sum()
}

/// Walk predecessor links from `end` back to the search origin and return
/// the path in start-to-end order.
///
/// The origin is the vertex whose `came_from` entry is `None`.
pub fn reconstruct_path(came_from: &[Option<usize>], end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = came_from.get(end).copied().flatten();
    while let Some(vertex) = current {
        path.push(vertex);
        current = came_from.get(vertex).copied().flatten();
    }
    path.reverse();
    path
}
