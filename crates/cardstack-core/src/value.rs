//! A continuous animated value cell.
//!
//! `SharedValue` is the single reactive primitive the widget layer animates
//! through: a scalar that can be set directly, or retargeted with a spring or
//! a timed tween, and read at any intermediate point while it settles.

use crate::animation::{AnimatedValue, EasedValue, Easing, Spring, SpringConfig};

/// A continuous scalar with get/set/animate-to operations.
#[derive(Debug, Clone)]
pub struct SharedValue {
    inner: AnimatedValue,
}

impl SharedValue {
    /// Create a cell holding `initial`, at rest.
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            inner: AnimatedValue::Spring(Spring::new(initial)),
        }
    }

    /// Read the current value.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.inner.value()
    }

    /// Set the value discontinuously, stopping any running animation.
    pub fn set(&mut self, value: f64) {
        let mut spring = Spring::new(value);
        if let AnimatedValue::Spring(prev) = &self.inner {
            spring.config = prev.config;
            spring.precision = prev.precision;
        }
        self.inner = AnimatedValue::Spring(spring);
    }

    /// Animate toward `target` with a damped spring, preserving the current
    /// value and velocity of any in-flight animation.
    pub fn spring_to(&mut self, target: f64, config: SpringConfig) {
        let (value, velocity) = match &self.inner {
            AnimatedValue::Spring(s) => (s.value, s.velocity),
            AnimatedValue::Eased(e) => (e.value(), 0.0),
        };
        let mut spring = Spring::new(value).with_config(config);
        spring.velocity = velocity;
        spring.set_target(target);
        self.inner = AnimatedValue::Spring(spring);
    }

    /// Animate toward `target` over a fixed duration, starting from the
    /// current value.
    pub fn timing_to(&mut self, target: f64, duration: f64, easing: Easing) {
        let from = self.get();
        self.inner = AnimatedValue::Eased(EasedValue::new(from, target, duration).with_easing(easing));
    }

    /// Advance the animation by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.inner.update(dt);
    }

    /// Whether an animation is still in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.inner.is_complete()
    }
}

impl Default for SharedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
