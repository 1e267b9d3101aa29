//! Core types and traits for the cardstack widget library.
//!
//! This crate provides the foundations the widget layer builds on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - Animation: [`Spring`], [`EasedValue`], [`interpolate`]
//! - The continuous value cell widgets animate through: [`SharedValue`]
//! - The single delayed-action primitive: [`DelayTimer`]
//! - The [`Widget`] and [`Canvas`] traits with a [`RecordingCanvas`]

mod animation;
mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
mod timer;
mod value;
pub mod widget;

pub use animation::{interpolate, AnimatedValue, EasedValue, Easing, Spring, SpringConfig};
pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use timer::DelayTimer;
pub use value::SharedValue;
pub use widget::{
    Canvas, FontWeight, LayoutResult, TextStyle, Transform2D, TypeId, Widget,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==========================================================================
    // ANIMATION PROPERTIES
    // ==========================================================================

    proptest! {
        #[test]
        fn prop_interpolate_stays_in_output_range(
            value in -10.0f64..10.0,
            out0 in -100.0f64..100.0,
            out1 in -100.0f64..100.0,
        ) {
            let v = interpolate(value, [0.0, 1.0], [out0, out1]);
            let (lo, hi) = if out0 <= out1 { (out0, out1) } else { (out1, out0) };
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
        }

        #[test]
        fn prop_interpolate_endpoints(out0 in -100.0f64..100.0, out1 in -100.0f64..100.0) {
            prop_assert!((interpolate(0.0, [0.0, 1.0], [out0, out1]) - out0).abs() < 1e-9);
            prop_assert!((interpolate(1.0, [0.0, 1.0], [out0, out1]) - out1).abs() < 1e-9);
        }

        #[test]
        fn prop_easing_output_in_unit_range(t in -1.0f64..2.0) {
            for easing in [
                Easing::Linear,
                Easing::EaseIn,
                Easing::EaseOut,
                Easing::EaseInOut,
                Easing::CubicOut,
            ] {
                let v = easing.apply(t);
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }

        #[test]
        fn prop_spring_converges(target in -10.0f64..10.0, stiffness in 50.0f64..400.0, damping in 10.0f64..40.0) {
            let mut spring = Spring::new(0.0)
                .with_config(SpringConfig::custom(1.0, stiffness, damping));
            spring.set_target(target);
            for _ in 0..100_000 {
                if spring.at_rest {
                    break;
                }
                spring.update(1.0 / 60.0);
            }
            prop_assert!(spring.at_rest);
            prop_assert!((spring.value - target).abs() < 0.01);
        }
    }

    // ==========================================================================
    // TIMER PROPERTIES
    // ==========================================================================

    proptest! {
        #[test]
        fn prop_timer_fires_at_most_once(delay in 0.0f64..1.0, steps in proptest::collection::vec(0.0f64..0.2, 1..50)) {
            let mut timer = DelayTimer::new();
            timer.schedule(delay);
            let mut fires = 0;
            for dt in steps {
                if timer.tick(dt) {
                    fires += 1;
                }
            }
            prop_assert!(fires <= 1);
        }

        #[test]
        fn prop_timer_cancel_always_silences(delay in 0.0f64..1.0, dt in 0.0f64..2.0) {
            let mut timer = DelayTimer::new();
            timer.schedule(delay);
            timer.cancel();
            prop_assert!(!timer.tick(dt));
        }
    }

    // ==========================================================================
    // SHARED VALUE PROPERTIES
    // ==========================================================================

    proptest! {
        #[test]
        fn prop_shared_value_spring_settles_on_target(target in 0.0f64..1.0) {
            let mut value = SharedValue::new(0.0);
            value.spring_to(target, SpringConfig::custom(1.0, 200.0, 20.0));
            for _ in 0..100_000 {
                if !value.is_animating() {
                    break;
                }
                value.update(1.0 / 60.0);
            }
            prop_assert!(!value.is_animating());
            prop_assert!((value.get() - target).abs() < 0.01);
        }
    }
}
