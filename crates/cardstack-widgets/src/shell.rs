//! Frosted background plate behind the cards.
//!
//! The shell reads the continuous expansion value every frame and maps it to
//! a size, corner radius, and top-left offset, so it grows and rounds
//! proportionally while the spring settles rather than toggling between two
//! states.

use crate::dimensions::StackDimensions;
use cardstack_core::{interpolate, Canvas, Color, CornerRadius, Rect};

/// Collapsed-state top-left offset in pixels; the shell slides to (0, 0) as
/// it expands.
const COLLAPSED_OFFSET: f64 = 3.0;

/// Opacity of the translucent plate.
const PLATE_ALPHA: f32 = 0.25;

/// The expanding background plate.
#[derive(Debug, Clone)]
pub struct Shell {
    dims: StackDimensions,
}

impl Shell {
    /// Create a shell using the given dimension preset.
    #[must_use]
    pub fn new(dims: StackDimensions) -> Self {
        Self { dims }
    }

    /// Swap the dimension preset.
    pub fn set_dimensions(&mut self, dims: StackDimensions) {
        self.dims = dims;
    }

    /// Compute the plate frame and corner radius for an expansion value,
    /// relative to the window rect.
    #[must_use]
    pub fn frame(&self, progress: f64, window: Rect) -> (Rect, CornerRadius) {
        let d = &self.dims;
        let offset = interpolate(progress, [0.0, 1.0], [COLLAPSED_OFFSET, 0.0]) as f32;
        let width = interpolate(
            progress,
            [0.0, 1.0],
            [f64::from(d.base_width), f64::from(d.expanded_width)],
        ) as f32;
        let height = interpolate(
            progress,
            [0.0, 1.0],
            [f64::from(d.base_height), f64::from(d.expanded_height)],
        ) as f32;
        let radius = interpolate(
            progress,
            [0.0, 1.0],
            [f64::from(d.base_radius), f64::from(d.expanded_radius)],
        ) as f32;

        let rect = Rect::new(window.x + offset, window.y + offset, width, height);
        (rect, CornerRadius::uniform(radius))
    }

    /// Paint the plate for an expansion value.
    pub fn paint(&self, canvas: &mut dyn Canvas, progress: f64, window: Rect) {
        let (rect, radius) = self.frame(progress, window);
        canvas.fill_rounded_rect(rect, radius, Color::WHITE.with_alpha(PLATE_ALPHA));
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(StackDimensions::default())
    }
}
