// SPDX-License-Identifier: MIT OR Apache-2.0
//! Wayfind Editor - interactive shortest-path graph editor demo.
//!
//! A fixed-capacity graph editor: place vertices with mouse clicks, connect
//! them with distance-weighted edges, and compare Dijkstra against A* under
//! several heuristics, visualized through the rendering collaborator.
//!
//! ## Architecture
//!
//! The algorithmic core lives in `wayfind_editor_graph`; this crate owns the
//! gesture state machine, the scene drawing glue, and the [`canvas::Canvas`]
//! boundary behind which the real rendering backend sits. The binary runs a
//! scripted session against the recording backend, standing in for the host
//! window's event pump.

mod canvas;
mod scene;
mod state;

use canvas::RecordingCanvas;
use scene::draw_scene;
use state::{EditorConfig, EditorState, InputEvent, KeyCommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wayfind_editor_graph::{
    breadth_first_search, depth_first_search, shortest_distances, INFINITY,
};

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("wayfind_editor_app=debug".parse().unwrap())
        .add_directive("wayfind_editor_graph=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wayfind Editor v{}", env!("CARGO_PKG_VERSION"));

    let config = EditorConfig::default();
    let mut rng = rand::rng();
    let mut canvas = RecordingCanvas::new(config.canvas_width, config.canvas_height);
    let mut editor = EditorState::new(config);

    // Seed a random instance, as the R key would
    editor.handle_event(InputEvent::Key(KeyCommand::Randomize), &mut rng);
    tracing::info!(
        vertices = editor.graph().vertex_count(),
        connected = editor.graph().is_connected(),
        "graph generated"
    );
    tracing::debug!("adjacency matrix:\n{}", editor.graph().format_matrix());

    let dfs = depth_first_search(editor.graph(), 0);
    let bfs = breadth_first_search(editor.graph(), 0);
    tracing::info!(dfs_events = dfs.len(), bfs_visits = bfs.len(), "traversals complete");

    let distances = shortest_distances(editor.graph(), 0);
    let reachable = distances.iter().filter(|&&d| d != INFINITY).count();
    tracing::info!(reachable, "dijkstra from vertex 0");

    // Pick shortest-path endpoints the way two clicks would
    editor.handle_event(InputEvent::Key(KeyCommand::TogglePathMode), &mut rng);
    let first = editor.graph().position(0);
    let last = editor.graph().position(editor.graph().vertex_count().saturating_sub(1));
    if let (Some(a), Some(b)) = (first, last) {
        editor.handle_event(InputEvent::MouseDown(a), &mut rng);
        editor.handle_event(InputEvent::MouseDown(b), &mut rng);
    }
    tracing::info!(path = ?editor.path(), "shortest path display");

    draw_scene(&mut canvas, editor.graph(), editor.path());
    tracing::info!(
        draw_calls = canvas.commands.len(),
        frames = canvas.frames_presented,
        "frame recorded"
    );

    editor.handle_event(InputEvent::Key(KeyCommand::Quit), &mut rng);
    if !editor.is_running() {
        tracing::info!("editor session ended");
    }
}
