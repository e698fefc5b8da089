// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene drawing glue between the graph and the rendering collaborator.
//!
//! The graph itself never issues draw calls; this module reads vertex
//! positions and edge weights out of it and drives the [`Canvas`] trait.

use crate::canvas::{Canvas, Color};
use wayfind_editor_graph::Graph;

/// Radius of a vertex marker in pixels
pub const VERTEX_RADIUS: i32 = 10;

/// Draw one full frame: graph in red, the current path on top in blue.
pub fn draw_scene(canvas: &mut impl Canvas, graph: &Graph, path: &[usize]) {
    canvas.clear();
    canvas.set_color(Color::RED);
    draw_graph(canvas, graph);
    draw_path(canvas, graph, path);
    canvas.present();
}

/// Draw every vertex as a filled circle and every edge as a line.
pub fn draw_graph(canvas: &mut impl Canvas, graph: &Graph) {
    for i in 0..graph.vertex_count() {
        let Some(pos) = graph.position(i) else { continue };
        canvas.draw_filled_circle(pos.x, pos.y, VERTEX_RADIUS);
    }

    for i in 0..graph.vertex_count() {
        for j in (i + 1)..graph.vertex_count() {
            if graph.weight(i, j) == 0 {
                continue;
            }
            let (Some(a), Some(b)) = (graph.position(i), graph.position(j)) else {
                continue;
            };
            canvas.draw_line(a.x, a.y, b.x, b.y);
        }
    }
}

/// Highlight a path as a blue polyline over the graph.
pub fn draw_path(canvas: &mut impl Canvas, graph: &Graph, path: &[usize]) {
    if path.is_empty() {
        return;
    }

    canvas.set_color(Color::BLUE);
    for pair in path.windows(2) {
        let (Some(a), Some(b)) = (graph.position(pair[0]), graph.position(pair[1])) else {
            continue;
        };
        canvas.draw_line(a.x, a.y, b.x, b.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use wayfind_editor_graph::Point;

    fn square_graph() -> Graph {
        let mut g = Graph::new(4);
        g.add_vertex('A', Point::new(0, 0));
        g.add_vertex('B', Point::new(100, 0));
        g.add_vertex('C', Point::new(100, 100));
        g.add_vertex('D', Point::new(0, 100));
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g
    }

    fn count<F: Fn(&DrawCommand) -> bool>(canvas: &RecordingCanvas, pred: F) -> usize {
        canvas.commands.iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn test_scene_draws_vertices_edges_and_path() {
        let graph = square_graph();
        let mut canvas = RecordingCanvas::new(400, 400);
        draw_scene(&mut canvas, &graph, &[0, 1, 2, 3]);

        assert_eq!(count(&canvas, |c| matches!(c, DrawCommand::FilledCircle(..))), 4);
        // 3 graph edges + 3 path segments
        assert_eq!(count(&canvas, |c| matches!(c, DrawCommand::Line(..))), 6);
        assert_eq!(canvas.commands.first(), Some(&DrawCommand::Clear));
        assert_eq!(canvas.frames_presented, 1);
    }

    #[test]
    fn test_each_edge_draws_once() {
        let graph = square_graph();
        let mut canvas = RecordingCanvas::new(400, 400);
        draw_graph(&mut canvas, &graph);
        assert_eq!(count(&canvas, |c| matches!(c, DrawCommand::Line(..))), 3);
    }

    #[test]
    fn test_empty_path_sets_no_highlight_color() {
        let graph = square_graph();
        let mut canvas = RecordingCanvas::new(400, 400);
        draw_path(&mut canvas, &graph, &[]);
        assert!(canvas.commands.is_empty());
    }

    #[test]
    fn test_path_polyline_follows_vertex_positions() {
        let graph = square_graph();
        let mut canvas = RecordingCanvas::new(400, 400);
        draw_path(&mut canvas, &graph, &[0, 1]);
        assert_eq!(
            canvas.commands,
            vec![
                DrawCommand::SetColor(Color::BLUE),
                DrawCommand::Line(0, 0, 100, 0),
            ]
        );
    }
}
