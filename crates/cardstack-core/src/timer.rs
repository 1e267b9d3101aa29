//! Delayed-action timer with at-most-one-pending semantics.

/// A single-shot delay timer advanced by `tick(dt)`.
///
/// Scheduling always replaces any pending deadline, so at most one delayed
/// action can ever be outstanding. The timer fires exactly once per schedule:
/// the tick that crosses the deadline returns `true` and clears the timer.
#[derive(Debug, Clone, Default)]
pub struct DelayTimer {
    remaining: Option<f64>,
}

impl DelayTimer {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer to fire after `delay` seconds.
    ///
    /// Any previously scheduled deadline is cancelled first.
    pub fn schedule(&mut self, delay: f64) {
        self.remaining = Some(delay.max(0.0));
    }

    /// Cancel a pending deadline, if any.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance the timer by `dt` seconds.
    ///
    /// Returns `true` on the tick that reaches the deadline; the timer is
    /// cleared before returning, so it cannot fire twice.
    pub fn tick(&mut self, dt: f64) -> bool {
        match self.remaining.as_mut() {
            Some(remaining) => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.remaining = None;
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_idle_never_fires() {
        let mut timer = DelayTimer::new();
        assert!(!timer.is_pending());
        assert!(!timer.tick(10.0));
    }

    #[test]
    fn test_timer_fires_once_at_deadline() {
        let mut timer = DelayTimer::new();
        timer.schedule(0.35);
        assert!(timer.is_pending());
        assert!(!timer.tick(0.2));
        assert!(timer.tick(0.2));
        assert!(!timer.is_pending());
        assert!(!timer.tick(10.0));
    }

    #[test]
    fn test_timer_cancel_prevents_fire() {
        let mut timer = DelayTimer::new();
        timer.schedule(0.35);
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.tick(1.0));
    }

    #[test]
    fn test_timer_reschedule_replaces_deadline() {
        let mut timer = DelayTimer::new();
        timer.schedule(0.1);
        timer.schedule(0.35);
        // The earlier deadline must be gone: 0.2s in, nothing fires.
        assert!(!timer.tick(0.2));
        assert!(timer.tick(0.2));
    }

    #[test]
    fn test_timer_reschedule_after_fire() {
        let mut timer = DelayTimer::new();
        timer.schedule(0.1);
        assert!(timer.tick(0.1));
        timer.schedule(0.1);
        assert!(timer.is_pending());
        assert!(timer.tick(0.1));
    }

    #[test]
    fn test_timer_zero_delay_fires_next_tick() {
        let mut timer = DelayTimer::new();
        timer.schedule(0.0);
        assert!(timer.is_pending());
        assert!(timer.tick(0.0));
    }

    #[test]
    fn test_timer_negative_delay_clamps() {
        let mut timer = DelayTimer::new();
        timer.schedule(-1.0);
        assert!(timer.tick(0.0));
    }
}
