// SPDX-License-Identifier: MIT OR Apache-2.0
//! Rendering collaborator boundary.
//!
//! The editor never owns a window or a GPU surface; it draws through the
//! [`Canvas`] trait, and the host application supplies the real backend.
//! [`RecordingCanvas`] is the in-process implementation used by the demo
//! binary and the tests.

use serde::{Deserialize, Serialize};

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Color used for vertices and edges
    pub const RED: Color = Color { r: 0xFF, g: 0x00, b: 0x00 };
    /// Color used for the highlighted shortest path
    pub const BLUE: Color = Color { r: 0x00, g: 0x00, b: 0xFF };
}

/// Primitive drawing surface provided by the rendering backend.
///
/// Mirrors the immediate-mode surface of the host: stateful draw color,
/// pixel-space coordinates, explicit `present` to swap the frame.
pub trait Canvas {
    /// Drawable width in pixels
    fn width(&self) -> i32;
    /// Drawable height in pixels
    fn height(&self) -> i32;
    /// Set the color used by subsequent draw calls
    fn set_color(&mut self, color: Color);
    /// Draw a single pixel
    fn draw_point(&mut self, x: i32, y: i32);
    /// Draw a line segment
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    /// Draw an axis-aligned rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
    /// Draw a circle outline
    fn draw_circle(&mut self, center_x: i32, center_y: i32, radius: i32);
    /// Draw a filled circle
    fn draw_filled_circle(&mut self, center_x: i32, center_y: i32, radius: i32);
    /// Erase the frame
    fn clear(&mut self);
    /// Swap the finished frame to the screen
    fn present(&mut self);
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Draw color change
    SetColor(Color),
    /// Single pixel
    Point(i32, i32),
    /// Line segment between two points
    Line(i32, i32, i32, i32),
    /// Rectangle outline at (x, y) with width and height
    Rect(i32, i32, i32, i32),
    /// Circle outline at (x, y) with radius
    Circle(i32, i32, i32),
    /// Filled circle at (x, y) with radius
    FilledCircle(i32, i32, i32),
    /// Frame erase
    Clear,
}

/// Canvas that records draw calls instead of rasterizing them.
///
/// Stands in for the real backend in tests and the demo binary; the
/// recorded command list is what would have been pushed to the screen.
#[derive(Debug)]
pub struct RecordingCanvas {
    width: i32,
    height: i32,
    /// Draw calls since construction, in issue order
    pub commands: Vec<DrawCommand>,
    /// Number of `present` calls
    pub frames_presented: usize,
}

impl RecordingCanvas {
    /// Create a recording surface with the given bounds
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            frames_presented: 0,
        }
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.commands.push(DrawCommand::Point(x, y));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.commands.push(DrawCommand::Line(x1, y1, x2, y2));
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::Rect(x, y, width, height));
    }

    fn draw_circle(&mut self, center_x: i32, center_y: i32, radius: i32) {
        self.commands.push(DrawCommand::Circle(center_x, center_y, radius));
    }

    fn draw_filled_circle(&mut self, center_x: i32, center_y: i32, radius: i32) {
        self.commands.push(DrawCommand::FilledCircle(center_x, center_y, radius));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn present(&mut self) {
        self.frames_presented += 1;
        tracing::trace!(frame = self.frames_presented, commands = self.commands.len(), "frame presented");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_commands_in_order() {
        let mut canvas = RecordingCanvas::new(100, 80);
        canvas.clear();
        canvas.set_color(Color::RED);
        canvas.draw_line(0, 0, 10, 10);
        canvas.present();

        assert_eq!(
            canvas.commands,
            vec![
                DrawCommand::Clear,
                DrawCommand::SetColor(Color::RED),
                DrawCommand::Line(0, 0, 10, 10),
            ]
        );
        assert_eq!(canvas.frames_presented, 1);
    }

    #[test]
    fn test_reports_bounds() {
        let canvas = RecordingCanvas::new(1200, 960);
        assert_eq!(canvas.width(), 1200);
        assert_eq!(canvas.height(), 960);
    }
}
