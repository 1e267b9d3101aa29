//! Navigation dots beside the stack.
//!
//! One dot per card, fading and scaling in as the shell expands. Each dot's
//! reveal is gated through a staggered window of the expansion value so the
//! column cascades in, and the active dot crossfades brighter over a short
//! tween whenever the settled index changes.

use cardstack_core::{interpolate, Canvas, Color, EasedValue, Easing, Point, Rect};

/// Expansion-value delay between consecutive dots.
const STAGGER_STEP: f64 = 0.07;

/// Dot diameter in pixels.
const DOT_DIAMETER: f32 = 5.0;

/// Vertical margin above and below each dot.
const DOT_MARGIN: f32 = 3.5;

/// Duration of the active-state crossfade in seconds.
const ACTIVE_FADE_SECS: f64 = 0.15;

/// Opacity of an inactive dot at full expansion.
const INACTIVE_OPACITY: f64 = 0.6;

/// Scale of a dot at zero expansion.
const HIDDEN_SCALE: f64 = 0.8;

/// Per-dot visual computed from the expansion value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotVisual {
    /// Dot scale in [0.8, 1.0]
    pub scale: f32,
    /// Final opacity in [0.0, 1.0]
    pub opacity: f32,
}

/// Vertical column of per-card indicator dots.
#[derive(Debug)]
pub struct NavigationDots {
    active: usize,
    /// Crossfade toward 1.0 for the active dot, 0.0 for the rest
    fades: Vec<EasedValue>,
}

impl NavigationDots {
    /// Create dots for `count` cards; index 0 starts active.
    #[must_use]
    pub fn new(count: usize) -> Self {
        let fades = (0..count)
            .map(|i| {
                let target = if i == 0 { 1.0 } else { 0.0 };
                EasedValue::new(target, target, 0.0)
            })
            .collect();
        Self { active: 0, fades }
    }

    /// Number of dots.
    #[must_use]
    pub fn count(&self) -> usize {
        self.fades.len()
    }

    /// Currently highlighted index.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Rebuild for a new card count, keeping the highlight if still valid.
    pub fn set_count(&mut self, count: usize) {
        if count == 0 {
            self.fades.clear();
            self.active = 0;
            return;
        }
        let active = if self.active < count { self.active } else { 0 };
        self.fades = (0..count)
            .map(|i| {
                let target = if i == active { 1.0 } else { 0.0 };
                EasedValue::new(target, target, 0.0)
            })
            .collect();
        self.active = active;
    }

    /// Move the highlight, retargeting both crossfades.
    pub fn set_active(&mut self, index: usize) {
        if index >= self.fades.len() || index == self.active {
            return;
        }
        self.active = index;
        for (i, fade) in self.fades.iter_mut().enumerate() {
            let target = if i == index { 1.0 } else { 0.0 };
            if (fade.to - target).abs() > f64::EPSILON {
                *fade = EasedValue::new(fade.value(), target, ACTIVE_FADE_SECS)
                    .with_easing(Easing::EaseInOut);
            }
        }
    }

    /// Advance the crossfades.
    pub fn update(&mut self, dt: f64) {
        for fade in &mut self.fades {
            fade.update(dt);
        }
    }

    /// Whether any crossfade is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fades.iter().any(|fade| !fade.is_complete())
    }

    /// Compute the visual for dot `index` at an expansion value.
    #[must_use]
    pub fn visual(&self, index: usize, progress: f64) -> DotVisual {
        let start = index as f64 * STAGGER_STEP;
        let reveal = interpolate(progress, [start, 1.0], [0.0, 1.0]);
        let scale = interpolate(reveal, [0.0, 1.0], [HIDDEN_SCALE, 1.0]);

        let active = self.fades.get(index).map_or(0.0, EasedValue::value);
        let highlight = interpolate(active, [0.0, 1.0], [INACTIVE_OPACITY, 1.0]);

        DotVisual {
            scale: scale as f32,
            opacity: (reveal * highlight) as f32,
        }
    }

    /// Paint the column centered vertically in `column`.
    pub fn paint(&self, canvas: &mut dyn Canvas, progress: f64, column: Rect) {
        let n = self.fades.len();
        if n == 0 {
            return;
        }
        let step = DOT_DIAMETER + 2.0 * DOT_MARGIN;
        let total = step * n as f32;
        let x = column.x + column.width / 2.0;
        let top = column.y + (column.height - total) / 2.0;

        for i in 0..n {
            let visual = self.visual(i, progress);
            if visual.opacity <= 0.0 {
                continue;
            }
            let center = Point::new(x, top + step * (i as f32 + 0.5));
            let radius = (DOT_DIAMETER / 2.0) * visual.scale;
            canvas.fill_circle(center, radius, Color::WHITE.with_alpha(visual.opacity));
        }
    }
}

impl Default for NavigationDots {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstack_core::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_new_highlights_first_dot() {
        let dots = NavigationDots::new(3);
        assert_eq!(dots.count(), 3);
        assert_eq!(dots.active(), 0);
        assert!(dots.visual(0, 1.0).opacity > dots.visual(1, 1.0).opacity);
    }

    #[test]
    fn test_collapsed_dots_invisible() {
        let dots = NavigationDots::new(3);
        for i in 0..3 {
            assert_eq!(dots.visual(i, 0.0).opacity, 0.0);
        }
    }

    #[test]
    fn test_stagger_delays_later_dots() {
        let dots = NavigationDots::new(3);
        // Below dot 2's stagger window (2 * 0.07) it stays invisible while
        // dot 0 has started revealing.
        let p = 0.1;
        assert!(dots.visual(0, p).opacity > 0.0);
        assert_eq!(dots.visual(2, p).opacity, 0.0);
    }

    #[test]
    fn test_expanded_active_dot_fully_opaque() {
        let dots = NavigationDots::new(3);
        let active = dots.visual(0, 1.0);
        assert!((active.opacity - 1.0).abs() < 0.001);
        assert!((active.scale - 1.0).abs() < 0.001);

        let inactive = dots.visual(1, 1.0);
        assert!((f64::from(inactive.opacity) - INACTIVE_OPACITY).abs() < 0.001);
    }

    #[test]
    fn test_hidden_scale_at_zero_progress() {
        let dots = NavigationDots::new(1);
        assert!((f64::from(dots.visual(0, 0.0).scale) - HIDDEN_SCALE).abs() < 0.001);
    }

    #[test]
    fn test_set_active_crossfades_over_time() {
        let mut dots = NavigationDots::new(3);
        dots.set_active(1);
        assert!(dots.is_animating());

        // Mid-fade, both dots sit between the endpoints.
        dots.update(ACTIVE_FADE_SECS / 2.0);
        let leaving = dots.visual(0, 1.0).opacity;
        let arriving = dots.visual(1, 1.0).opacity;
        assert!(leaving > INACTIVE_OPACITY as f32 && leaving < 1.0);
        assert!(arriving > INACTIVE_OPACITY as f32 && arriving < 1.0);

        dots.update(ACTIVE_FADE_SECS);
        assert!(!dots.is_animating());
        assert!((dots.visual(1, 1.0).opacity - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_set_active_out_of_range_ignored() {
        let mut dots = NavigationDots::new(2);
        dots.set_active(5);
        assert_eq!(dots.active(), 0);
    }

    #[test]
    fn test_set_count_clamps_active() {
        let mut dots = NavigationDots::new(4);
        dots.set_active(3);
        dots.update(1.0);
        dots.set_count(2);
        assert_eq!(dots.count(), 2);
        assert_eq!(dots.active(), 0);
    }

    #[test]
    fn test_paint_expanded_draws_all_dots() {
        let dots = NavigationDots::new(3);
        let mut canvas = RecordingCanvas::new();
        dots.paint(&mut canvas, 1.0, Rect::new(348.0, 0.0, 13.0, 164.0));
        assert_eq!(canvas.command_count(), 3);
        assert!(matches!(canvas.commands()[0], DrawCommand::Circle { .. }));
    }

    #[test]
    fn test_paint_collapsed_draws_nothing() {
        let dots = NavigationDots::new(3);
        let mut canvas = RecordingCanvas::new();
        dots.paint(&mut canvas, 0.0, Rect::new(348.0, 0.0, 13.0, 164.0));
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_paint_empty_column() {
        let dots = NavigationDots::new(0);
        let mut canvas = RecordingCanvas::new();
        dots.paint(&mut canvas, 1.0, Rect::new(0.0, 0.0, 13.0, 164.0));
        assert!(canvas.is_empty());
    }
}
