#![forbid(unsafe_code)]

//! Swipe-to-dismiss interaction controller.
//!
//! A pan on the card drives an interactive dismissal. The controller turns
//! the vertical translation into a dismissal progress and, when the finger
//! lifts, either finishes the dismissal or springs the card back.
//!
//! ```text
//!            begin                 end (progress > threshold
//!   Idle ───────────▶ Tracking ──────  or velocity > threshold) ──▶ Completing ─┐
//!    ▲                   │                                                       │
//!    │                   └── end (otherwise) / cancel ──────────▶ Cancelling ───┤
//!    │                                                                           │
//!    └────────────────────────── settle animation finished ◀────────────────────┘
//! ```
//!
//! # Invariants
//!
//! - Progress is clamped to `[0.0, 1.0]`; dragging past the travel distance
//!   yields exactly `1.0` and dragging upward yields `0.0`.
//! - Every interaction resolves to [`SwipeResolution::Completed`] or
//!   [`SwipeResolution::Cancelled`]; a cancelled pan phase is a cancellation.
//! - Only one interaction at a time: `begin` is refused unless `Idle`.
//!
//! # Failure Modes
//!
//! - A pan that never ends keeps the controller in `Tracking`; nothing times
//!   it out.
//! - Updates outside `Tracking` are ignored, so a stray sample cannot move a
//!   settling card.

use std::time::Duration;

use bulletin_core::geometry::Point;
use tracing::{debug, trace};

use super::animation::{Easing, Tween};

/// Lifecycle of one swipe interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Tracking,
    Completing,
    Cancelling,
}

/// How a finished interaction resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeResolution {
    /// The card left the screen.
    Completed,
    /// The card returned to rest.
    Cancelled,
}

/// Thresholds deciding whether a released swipe dismisses the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Progress above which a release completes the dismissal.
    pub completion_threshold: f64,
    /// Downward speed (units/s) above which a release completes regardless of progress.
    pub velocity_threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            completion_threshold: 0.5,
            velocity_threshold: 800.0,
        }
    }
}

impl SwipeConfig {
    /// Whether a release at `progress` with downward `velocity` completes.
    #[must_use]
    pub fn should_complete(&self, progress: f64, velocity: f64) -> bool {
        progress > self.completion_threshold || velocity > self.velocity_threshold
    }
}

/// Drives an interactive dismissal from pan samples.
#[derive(Debug, Clone)]
pub struct SwipeInteractionController {
    config: SwipeConfig,
    /// Duration of a full, non-interactive dismissal.
    base_duration: Duration,
    state: InteractionState,
    start: Option<Point>,
    travel: f64,
    progress: f64,
    settle: Option<Tween>,
}

impl SwipeInteractionController {
    #[must_use]
    pub fn new(config: SwipeConfig, base_duration: Duration) -> Self {
        Self {
            config,
            base_duration,
            state: InteractionState::Idle,
            start: None,
            travel: 0.0,
            progress: 0.0,
            settle: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// `true` from `begin` until the settle animation lands.
    ///
    /// Consulted when choosing between the interactive driver and the plain
    /// dismissal animator.
    #[must_use]
    pub fn is_interaction_in_progress(&self) -> bool {
        self.state != InteractionState::Idle
    }

    /// Dismissal progress in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Where the current interaction started.
    #[must_use]
    pub fn start_location(&self) -> Option<Point> {
        self.start
    }

    #[must_use]
    pub fn travel(&self) -> f64 {
        self.travel
    }

    /// Downward card translation matching the current progress.
    #[must_use]
    pub fn card_offset(&self) -> f64 {
        self.progress * self.travel
    }

    /// Start tracking a pan at `location` over `travel` units.
    ///
    /// Returns `false` if an interaction is already in progress or `travel`
    /// is not positive.
    pub fn begin(&mut self, location: Point, travel: f64) -> bool {
        if self.state != InteractionState::Idle {
            debug!(state = ?self.state, "swipe begin refused: interaction in progress");
            return false;
        }
        if !(travel > 0.0 && travel.is_finite()) {
            debug!(travel, "swipe begin refused: no travel distance");
            return false;
        }
        self.state = InteractionState::Tracking;
        self.start = Some(location);
        self.travel = travel;
        self.progress = 0.0;
        self.settle = None;
        debug!(x = location.x, y = location.y, travel, "swipe tracking");
        true
    }

    /// Apply the cumulative vertical translation of the pan.
    pub fn update(&mut self, translation_y: f64) {
        if self.state != InteractionState::Tracking {
            return;
        }
        self.progress = self.progress_for(translation_y);
        trace!(progress = self.progress, "swipe update");
    }

    /// Release the pan. Returns the settle state chosen, or `None` if not tracking.
    pub fn end(&mut self, translation_y: f64, velocity_y: f64) -> Option<InteractionState> {
        if self.state != InteractionState::Tracking {
            return None;
        }
        self.progress = self.progress_for(translation_y);
        if self.config.should_complete(self.progress, velocity_y) {
            self.settle_to(InteractionState::Completing, 1.0);
        } else {
            self.settle_to(InteractionState::Cancelling, 0.0);
        }
        debug!(
            progress = self.progress,
            velocity = velocity_y,
            state = ?self.state,
            "swipe released"
        );
        Some(self.state)
    }

    /// The system took the pan away; spring back.
    pub fn cancel(&mut self) {
        if self.state != InteractionState::Tracking {
            return;
        }
        self.settle_to(InteractionState::Cancelling, 0.0);
        debug!(progress = self.progress, "swipe cancelled");
    }

    /// Advance the settle animation. Returns the resolution when it lands.
    pub fn tick(&mut self, delta: Duration) -> Option<SwipeResolution> {
        let settle = self.settle.as_mut()?;
        let finished = settle.tick(delta);
        self.progress = settle.value();
        if !finished {
            return None;
        }

        let resolution = match self.state {
            InteractionState::Completing => SwipeResolution::Completed,
            _ => SwipeResolution::Cancelled,
        };
        self.reset();
        debug!(?resolution, "swipe settled");
        Some(resolution)
    }

    fn progress_for(&self, translation_y: f64) -> f64 {
        let progress = translation_y / self.travel;
        if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }

    fn settle_to(&mut self, state: InteractionState, target: f64) {
        let remaining = (target - self.progress).abs();
        self.state = state;
        self.settle = Some(Tween::new(
            self.progress,
            target,
            self.base_duration.mul_f64(remaining),
            Easing::EaseOut,
        ));
    }

    fn reset(&mut self) {
        self.state = InteractionState::Idle;
        self.start = None;
        self.travel = 0.0;
        self.progress = 0.0;
        self.settle = None;
    }
}
