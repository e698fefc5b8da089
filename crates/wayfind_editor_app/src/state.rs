// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor state management.
//!
//! This module contains the editor's interactive state: the graph being
//! edited, the current input mode, the displayed shortest path, and the
//! gesture handling that turns raw input events into graph edits.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use wayfind_editor_graph::{
    a_star_search, letter_label, path_cost, random_graph, Graph, Heuristic, Point,
};

/// Editor configuration knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Fixed vertex capacity of every graph the editor owns
    pub capacity: usize,
    /// Drawable canvas width in pixels
    pub canvas_width: i32,
    /// Drawable canvas height in pixels
    pub canvas_height: i32,
    /// Approximate edge percentage for random instances
    pub density: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            canvas_width: 1200,
            canvas_height: 960,
            density: 10,
        }
    }
}

/// Keyboard commands the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCommand {
    /// Replace the graph with a fresh empty one (C key)
    Clear,
    /// Switch between editing and path-picking (S key)
    TogglePathMode,
    /// Replace the graph with a random instance (R key)
    Randomize,
    /// End the session (window close)
    Quit,
}

/// A raw input event from the host event pump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Mouse button pressed at a canvas position
    MouseDown(Point),
    /// Keyboard command
    Key(KeyCommand),
}

/// The editor's input mode, including any half-finished gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Placing vertices and edges
    Editing {
        /// First endpoint of a two-click edge gesture, if one is pending
        pending_edge: Option<usize>,
    },
    /// Picking shortest-path endpoints
    PickingPath {
        /// Search origin, once the first endpoint is picked
        start: Option<usize>,
    },
}

/// Interactive editor session state
#[derive(Debug)]
pub struct EditorState {
    config: EditorConfig,
    graph: Graph,
    mode: EditorMode,
    path: Vec<usize>,
    running: bool,
}

impl EditorState {
    /// Create a session with an empty graph
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            graph: Graph::new(config.capacity),
            mode: EditorMode::Editing { pending_edge: None },
            path: Vec::new(),
            running: true,
        }
    }

    /// The graph being edited
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The currently displayed shortest path, empty when none
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Current input mode
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Session configuration
    pub fn config(&self) -> EditorConfig {
        self.config
    }

    /// Whether the host loop should keep running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply one input event.
    ///
    /// The random source backs the [`KeyCommand::Randomize`] gesture; the
    /// caller owns and seeds it once for the session.
    pub fn handle_event(&mut self, event: InputEvent, rng: &mut impl Rng) {
        match event {
            InputEvent::MouseDown(pos) => self.handle_click(pos),
            InputEvent::Key(KeyCommand::Clear) => {
                tracing::debug!("graph cleared");
                self.graph = Graph::new(self.config.capacity);
                self.path.clear();
                self.reset_gesture();
            }
            InputEvent::Key(KeyCommand::TogglePathMode) => {
                self.mode = match self.mode {
                    EditorMode::Editing { .. } => EditorMode::PickingPath { start: None },
                    EditorMode::PickingPath { .. } => EditorMode::Editing { pending_edge: None },
                };
                tracing::debug!(mode = ?self.mode, "mode switched");
            }
            InputEvent::Key(KeyCommand::Randomize) => {
                self.graph = random_graph(
                    self.config.capacity,
                    self.config.density,
                    self.config.canvas_width,
                    self.config.canvas_height,
                    rng,
                );
                self.path.clear();
                self.reset_gesture();
            }
            InputEvent::Key(KeyCommand::Quit) => self.running = false,
        }
    }

    fn handle_click(&mut self, pos: Point) {
        match self.mode {
            EditorMode::Editing { pending_edge } => {
                if let Some(vertex) = self.graph.nearby_vertex(pos) {
                    match pending_edge {
                        None => self.mode = EditorMode::Editing { pending_edge: Some(vertex) },
                        Some(first) => {
                            self.graph.add_edge(first, vertex);
                            self.mode = EditorMode::Editing { pending_edge: None };
                        }
                    }
                } else if !self.graph.is_full() {
                    let label = letter_label(self.graph.vertex_count());
                    self.graph.add_vertex(label, pos);
                    self.mode = EditorMode::Editing { pending_edge: None };
                }
            }
            EditorMode::PickingPath { start } => {
                self.path.clear();
                let Some(vertex) = self.graph.nearby_vertex(pos) else {
                    return;
                };
                match start {
                    None => self.mode = EditorMode::PickingPath { start: Some(vertex) },
                    Some(origin) => {
                        self.run_search(origin, vertex);
                        self.mode = EditorMode::PickingPath { start: None };
                    }
                }
            }
        }
    }

    /// Run the interactive search and, on success, the heuristic sweep.
    fn run_search(&mut self, start: usize, finish: usize) {
        match a_star_search(&self.graph, start, finish, Heuristic::default()) {
            Ok(path) => {
                self.path = path;
                self.compare_heuristics(start, finish);
            }
            Err(err) => {
                self.path.clear();
                tracing::warn!(%err, "no path between the picked vertices");
            }
        }
    }

    /// Re-run the same search under every heuristic, timing each run.
    fn compare_heuristics(&self, start: usize, finish: usize) {
        for heuristic in Heuristic::ALL {
            let timer = Instant::now();
            let outcome = a_star_search(&self.graph, start, finish, heuristic);
            let elapsed = timer.elapsed();
            match outcome {
                Ok(path) => tracing::info!(
                    heuristic = heuristic.name(),
                    cost = path_cost(&self.graph, &path),
                    ?elapsed,
                    "comparison run"
                ),
                Err(err) => tracing::warn!(heuristic = heuristic.name(), %err, "comparison run"),
            }
        }
    }

    fn reset_gesture(&mut self) {
        self.mode = match self.mode {
            EditorMode::Editing { .. } => EditorMode::Editing { pending_edge: None },
            EditorMode::PickingPath { .. } => EditorMode::PickingPath { start: None },
        };
    }
}
