// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connectivity walks over the graph.

use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One step of a depth-first walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalEvent {
    /// A vertex was entered for the first time
    Visit(usize),
    /// A vertex's neighbors are exhausted and the walk returned from it
    Backtrack(usize),
}

/// Depth-first walk from `start`, reporting visit and backtrack events.
///
/// Neighbors are explored in ascending index order, following every nonzero
/// adjacency weight. The walk uses an explicit stack of
/// (vertex, neighbor cursor) frames and a visited buffer allocated per call;
/// no recursion is involved. An out-of-range `start` yields an empty
/// sequence.
pub fn depth_first_search(graph: &Graph, start: usize) -> Vec<TraversalEvent> {
    let mut events = Vec::new();
    if start >= graph.vertex_count() {
        return events;
    }

    let mut visited = vec![false; graph.capacity()];
    let mut stack = vec![(start, 0usize)];
    visited[start] = true;
    events.push(TraversalEvent::Visit(start));
    tracing::debug!(vertex = start, label = ?graph.label(start), "visited");

    while let Some(frame) = stack.last_mut() {
        let vertex = frame.0;
        let mut child = None;
        while frame.1 < graph.vertex_count() {
            let candidate = frame.1;
            frame.1 += 1;
            if graph.weight(vertex, candidate) != 0 && !visited[candidate] {
                child = Some(candidate);
                break;
            }
        }
        match child {
            Some(next) => {
                visited[next] = true;
                events.push(TraversalEvent::Visit(next));
                tracing::debug!(vertex = next, label = ?graph.label(next), "visited");
                stack.push((next, 0));
            }
            None => {
                events.push(TraversalEvent::Backtrack(vertex));
                tracing::debug!(vertex, label = ?graph.label(vertex), "backtracked");
                stack.pop();
            }
        }
    }
    events
}

/// Breadth-first walk from `start`, returning vertices in dequeue order.
///
/// Neighbors are enqueued in ascending index order and marked visited on
/// enqueue, so each vertex appears at most once. An out-of-range `start`
/// yields an empty sequence.
pub fn breadth_first_search(graph: &Graph, start: usize) -> Vec<usize> {
    let mut order = Vec::new();
    if start >= graph.vertex_count() {
        return order;
    }

    let mut visited = vec![false; graph.capacity()];
    let mut queue = VecDeque::new();
    queue.push_back(start);
    visited[start] = true;

    while let Some(current) = queue.pop_front() {
        order.push(current);
        tracing::debug!(vertex = current, label = ?graph.label(current), "visited");

        for i in 0..graph.vertex_count() {
            if graph.weight(current, i) != 0 && !visited[i] {
                visited[i] = true;
                queue.push_back(i);
            }
        }
    }
    order
}
