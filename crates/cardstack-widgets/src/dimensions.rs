//! Dimension presets for the card stack.
//!
//! Presets differentiate small, default, and large screens and carry the
//! window, shell, and card measurements for each.

use cardstack_core::Size;
use serde::{Deserialize, Serialize};

/// Measurements for one screen class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackDimensions {
    /// Width of the swipeable window
    pub window_width: f32,
    /// Height of the swipeable window
    pub window_height: f32,
    /// Shell width when collapsed
    pub base_width: f32,
    /// Shell height when collapsed
    pub base_height: f32,
    /// Shell corner radius when collapsed
    pub base_radius: f32,
    /// Shell width when expanded
    pub expanded_width: f32,
    /// Shell height when expanded
    pub expanded_height: f32,
    /// Shell corner radius when expanded
    pub expanded_radius: f32,
    /// Card surface width
    pub card_width: f32,
    /// Card surface height
    pub card_height: f32,
    /// Card surface corner radius
    pub card_radius: f32,
}

impl StackDimensions {
    /// Large screens (width ≥ 430 or height ≥ 900).
    pub const LARGE: Self = Self {
        window_width: 370.0,
        window_height: 176.0,
        base_width: 364.0,
        base_height: 170.0,
        base_radius: 22.0,
        expanded_width: 370.0,
        expanded_height: 176.0,
        expanded_radius: 26.0,
        card_width: 364.0,
        card_height: 170.0,
        card_radius: 22.0,
    };

    /// Small screens (height ≤ 700).
    pub const SMALL: Self = Self {
        window_width: 335.0,
        window_height: 161.0,
        base_width: 329.0,
        base_height: 155.0,
        base_radius: 22.0,
        expanded_width: 335.0,
        expanded_height: 161.0,
        expanded_radius: 26.0,
        card_width: 329.0,
        card_height: 155.0,
        card_radius: 22.0,
    };

    /// Everything in between.
    pub const DEFAULT: Self = Self {
        window_width: 344.0,
        window_height: 164.0,
        base_width: 338.0,
        base_height: 158.0,
        base_radius: 22.0,
        expanded_width: 344.0,
        expanded_height: 164.0,
        expanded_radius: 26.0,
        card_width: 338.0,
        card_height: 158.0,
        card_radius: 22.0,
    };

    /// Select the preset for a screen size.
    #[must_use]
    pub fn for_screen(screen: Size) -> Self {
        if screen.width >= 430.0 || screen.height >= 900.0 {
            Self::LARGE
        } else if screen.height <= 700.0 {
            Self::SMALL
        } else {
            Self::DEFAULT
        }
    }

    /// Size of the swipeable window.
    #[must_use]
    pub fn window_size(&self) -> Size {
        Size::new(self.window_width, self.window_height)
    }

    /// Size of a card surface.
    #[must_use]
    pub fn card_size(&self) -> Size {
        Size::new(self.card_width, self.card_height)
    }
}

impl Default for StackDimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_by_width() {
        assert_eq!(
            StackDimensions::for_screen(Size::new(430.0, 800.0)),
            StackDimensions::LARGE
        );
    }

    #[test]
    fn test_large_by_height() {
        assert_eq!(
            StackDimensions::for_screen(Size::new(400.0, 900.0)),
            StackDimensions::LARGE
        );
    }

    #[test]
    fn test_small_by_height() {
        assert_eq!(
            StackDimensions::for_screen(Size::new(320.0, 700.0)),
            StackDimensions::SMALL
        );
    }

    #[test]
    fn test_default_between_breakpoints() {
        assert_eq!(
            StackDimensions::for_screen(Size::new(390.0, 844.0)),
            StackDimensions::DEFAULT
        );
    }

    #[test]
    fn test_default_trait_matches_default_preset() {
        assert_eq!(StackDimensions::default(), StackDimensions::DEFAULT);
    }

    #[test]
    fn test_card_fits_window() {
        for preset in [
            StackDimensions::SMALL,
            StackDimensions::DEFAULT,
            StackDimensions::LARGE,
        ] {
            assert!(preset.card_width < preset.window_width);
            assert!(preset.card_height < preset.window_height);
            assert!(preset.base_radius < preset.expanded_radius);
        }
    }
}
