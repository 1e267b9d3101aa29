//! Expand/collapse state machine for the stack shell.
//!
//! The controller owns a continuous expansion value in [0, 1] (0 collapsed,
//! 1 expanded), the active card index, and the single pending-collapse timer.
//! It is driven by a `dt` tick and two external events: a gesture beginning
//! on the carousel, and the carousel settling on an item.
//!
//! Intermediate expansion values are meaningful: the shell and the navigation
//! dots read them every frame and scale proportionally, so the two logical
//! states are connected by animated transitions, never a discrete switch.

use cardstack_core::{DelayTimer, SharedValue, SpringConfig};

/// Spring used for every expansion transition.
pub const EXPAND_SPRING: SpringConfig = SpringConfig::custom(1.0, 200.0, 20.0);

/// Idle delay between a settle and the automatic collapse, in seconds.
pub const COLLAPSE_DELAY: f64 = 0.35;

/// Who owns the expansion value.
///
/// Selected once at construction; the controller never switches modes at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandMode {
    /// The controller owns the value and springs it itself.
    Uncontrolled {
        /// Whether the stack starts expanded
        default_expanded: bool,
    },
    /// The host owns the value. The controller only reports intent via
    /// [`ExpandChanged`] and expects the host to feed the value back through
    /// [`ExpansionController::set_expanded`].
    Controlled {
        /// Externally supplied initial state
        expanded: bool,
    },
}

impl Default for ExpandMode {
    fn default() -> Self {
        Self::Uncontrolled {
            default_expanded: false,
        }
    }
}

/// Message emitted when the expansion state changes (uncontrolled mode) or
/// when a change is requested (controlled mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandChanged {
    /// Desired expansion state
    pub expanded: bool,
}

/// Message emitted when the active card index changes on a settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChanged {
    /// Newly active index
    pub index: usize,
}

/// The expansion state machine.
#[derive(Debug)]
pub struct ExpansionController {
    progress: SharedValue,
    active_index: usize,
    collapse_timer: DelayTimer,
    controlled: bool,
}

impl ExpansionController {
    /// Create a controller in the given mode.
    #[must_use]
    pub fn new(mode: ExpandMode) -> Self {
        let (expanded, controlled) = match mode {
            ExpandMode::Uncontrolled { default_expanded } => (default_expanded, false),
            ExpandMode::Controlled { expanded } => (expanded, true),
        };
        Self {
            progress: SharedValue::new(if expanded { 1.0 } else { 0.0 }),
            active_index: 0,
            collapse_timer: DelayTimer::new(),
            controlled,
        }
    }

    /// Current expansion value in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    /// Currently settled card index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Whether a collapse is scheduled and has not yet fired.
    #[must_use]
    pub fn is_collapse_pending(&self) -> bool {
        self.collapse_timer.is_pending()
    }

    /// Whether the host owns the expansion value.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// The user began interacting with the carousel.
    ///
    /// Cancels any pending collapse (a gesture must never race a stale
    /// timer), then requests expansion.
    pub fn on_gesture_begin(&mut self) -> ExpandChanged {
        log::debug!("gesture began, expanding shell");
        self.collapse_timer.cancel();
        self.request(true)
    }

    /// The carousel's snap animation settled on `index`.
    ///
    /// Records the index and schedules the delayed collapse. Scheduling
    /// replaces any previous deadline, so settles in quick succession keep
    /// exactly one collapse outstanding.
    pub fn on_item_settled(&mut self, index: usize) -> IndexChanged {
        log::debug!("snapped to index {index}");
        self.active_index = index;
        self.collapse_timer.schedule(COLLAPSE_DELAY);
        IndexChanged { index }
    }

    /// Advance the expansion spring and the collapse timer.
    ///
    /// Returns the collapse notification on the tick where the settle delay
    /// elapses without interruption.
    pub fn update(&mut self, dt: f64) -> Option<ExpandChanged> {
        self.progress.update(dt);
        if self.collapse_timer.tick(dt) {
            log::debug!("settle delay elapsed, collapsing shell");
            return Some(self.request(false));
        }
        None
    }

    /// Drive the expansion value from outside.
    ///
    /// In controlled mode this is how the host applies the state it owns
    /// (typically after receiving [`ExpandChanged`]); in uncontrolled mode it
    /// doubles as a programmatic toggle.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.progress
            .spring_to(if expanded { 1.0 } else { 0.0 }, EXPAND_SPRING);
    }

    /// Cancel a pending collapse without firing it.
    ///
    /// Used when the card list empties while a collapse is outstanding.
    pub fn cancel_pending(&mut self) {
        self.collapse_timer.cancel();
    }

    /// Forget the settled index when the card list is replaced.
    pub(crate) fn reset_index(&mut self) {
        self.active_index = 0;
    }

    fn request(&mut self, expanded: bool) -> ExpandChanged {
        if !self.controlled {
            self.progress
                .spring_to(if expanded { 1.0 } else { 0.0 }, EXPAND_SPRING);
        }
        ExpandChanged { expanded }
    }
}

impl Default for ExpansionController {
    fn default() -> Self {
        Self::new(ExpandMode::default())
    }
}
