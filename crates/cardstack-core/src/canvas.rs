//! Canvas implementations for rendering.

use crate::widget::{Canvas, TextStyle, Transform2D};
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// A single recorded draw operation, with transforms already resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle
    Rect {
        /// Target rectangle
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// Stroked rectangle
    StrokeRect {
        /// Target rectangle
        rect: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Filled rounded rectangle
    RoundedRect {
        /// Target rectangle
        rect: Rect,
        /// Corner radii
        radius: CornerRadius,
        /// Fill color
        color: Color,
    },
    /// Filled circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Text run
    Text {
        /// Text content
        text: String,
        /// Baseline position
        position: Point,
        /// Style
        style: TextStyle,
    },
    /// Image resolved by the backend
    Image {
        /// Target rectangle
        rect: Rect,
        /// Backend-resolved source
        source: String,
    },
    /// Begin clipping to a rectangle
    PushClip {
        /// Clip rectangle
        rect: Rect,
    },
    /// End the innermost clip
    PopClip,
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to a GPU/remote backend)
/// - Diffing (compare render outputs)
///
/// The transform stack is applied while recording, so recorded geometry is in
/// final coordinates. Only translation and scaling exist in `Transform2D`, so
/// rectangles stay axis-aligned.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
        self.transform_stack.clear();
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Transform2D::IDENTITY)
    }

    fn resolve_point(&self, point: Point) -> Point {
        self.current_transform().apply(point)
    }

    fn resolve_rect(&self, rect: Rect) -> Rect {
        let t = self.current_transform();
        let origin = t.apply(rect.origin());
        let [a, _, _, d, _, _] = t.matrix;
        Rect::new(origin.x, origin.y, rect.width * a, rect.height * d)
    }

    fn resolve_scalar(&self, value: f32) -> f32 {
        value * self.current_transform().matrix[0]
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.resolve_rect(rect);
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let rect = self.resolve_rect(rect);
        self.commands.push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color) {
        let rect = self.resolve_rect(rect);
        self.commands.push(DrawCommand::RoundedRect { rect, radius, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let center = self.resolve_point(center);
        let radius = self.resolve_scalar(radius);
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let position = self.resolve_point(position);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, rect: Rect, source: &str) {
        let rect = self.resolve_rect(rect);
        self.commands.push(DrawCommand::Image {
            rect,
            source: source.to_string(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        let rect = self.resolve_rect(rect);
        self.clip_stack.push(rect);
        self.commands.push(DrawCommand::PushClip { rect });
    }

    fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_some() {
            self.commands.push(DrawCommand::PopClip);
        }
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_starts_empty() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_fill_rect_records() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert_eq!(canvas.command_count(), 1);
        assert!(matches!(canvas.commands()[0], DrawCommand::Rect { .. }));
    }

    #[test]
    fn test_transform_applies_to_geometry() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::translate(10.0, 20.0));
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        canvas.pop_transform();

        match &canvas.commands()[0] {
            DrawCommand::Rect { rect, .. } => {
                assert_eq!(rect.x, 10.0);
                assert_eq!(rect.y, 20.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_nested_transforms_compose() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::translate(10.0, 0.0));
        canvas.push_transform(Transform2D::scale(2.0, 2.0));
        canvas.fill_circle(Point::new(1.0, 1.0), 3.0, Color::WHITE);
        canvas.pop_transform();
        canvas.pop_transform();

        match &canvas.commands()[0] {
            DrawCommand::Circle { center, radius, .. } => {
                assert_eq!(*center, Point::new(12.0, 2.0));
                assert_eq!(*radius, 6.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_pop_transform_restores() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::translate(10.0, 0.0));
        canvas.pop_transform();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);

        match &canvas.commands()[0] {
            DrawCommand::Rect { rect, .. } => assert_eq!(rect.x, 0.0),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_clip_push_pop_balance() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
        canvas.pop_clip();
        // Unbalanced pop is ignored
        canvas.pop_clip();
        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(canvas.commands()[1], DrawCommand::PopClip));
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_draw_command_serde() {
        let command = DrawCommand::Image {
            rect: Rect::new(0.0, 0.0, 100.0, 50.0),
            source: "widgets/clock.png".to_string(),
        };
        let json = serde_json::to_string(&command).unwrap();
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, command);
    }
}
