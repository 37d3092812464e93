#![forbid(unsafe_code)]

//! Presentation and dismissal transitions.
//!
//! A transition moves the card between its resting position and fully below
//! the bottom edge while the backdrop fades between clear and the manager's
//! [`BackgroundStyle`]. Non-interactive transitions are driven by
//! [`PresentationAnimator`] / [`DismissalAnimator`]; an interactive dismissal
//! is driven by the swipe controller and only selected while a swipe is in
//! progress (see [`TransitionStrategy`]).
//!
//! # Invariants
//!
//! - A [`TransitionContext`] reports completion exactly once. Later calls are
//!   ignored and logged at `warn` level.
//! - Animators complete with `finished == true` unless interrupted.
//! - The card offset is `travel` when hidden and `0.0` at rest.

use std::time::Duration;

use tracing::{debug, warn};

use super::animation::{Easing, Tween};
use super::backdrop::{BackdropState, BackgroundStyle};

/// Which transition a context belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Presentation,
    Dismissal,
    InteractiveDismissal,
}

/// Result reported when a transition completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionOutcome {
    pub kind: TransitionKind,
    /// `false` if the transition was interrupted or reversed.
    pub finished: bool,
}

/// Completion bookkeeping for one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionContext {
    kind: TransitionKind,
    outcome: Option<TransitionOutcome>,
}

impl TransitionContext {
    #[must_use]
    pub fn new(kind: TransitionKind) -> Self {
        Self {
            kind,
            outcome: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Report completion. Returns `false` (and does nothing) if completion was
    /// already reported.
    pub fn complete(&mut self, finished: bool) -> bool {
        if let Some(previous) = self.outcome {
            warn!(
                kind = ?self.kind,
                previous = previous.finished,
                finished,
                "transition completed more than once"
            );
            return false;
        }
        debug!(kind = ?self.kind, finished, "transition complete");
        self.outcome = Some(TransitionOutcome {
            kind: self.kind,
            finished,
        });
        true
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<TransitionOutcome> {
        self.outcome
    }
}

/// Card offset and backdrop for one frame of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Downward translation of the card from its resting frame.
    pub card_offset: f64,
    pub backdrop: BackdropState,
}

impl TransitionFrame {
    /// Frame of a transition at `fraction` presented (`1.0` is at rest).
    #[must_use]
    pub fn at(style: BackgroundStyle, travel: f64, fraction: f64) -> Self {
        Self {
            card_offset: travel * (1.0 - fraction.clamp(0.0, 1.0)),
            backdrop: style.at(fraction),
        }
    }
}

/// Slides the card up from below the bottom edge and fades the backdrop in.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationAnimator {
    style: BackgroundStyle,
    travel: f64,
    tween: Tween,
}

impl PresentationAnimator {
    #[must_use]
    pub fn new(style: BackgroundStyle, duration: Duration) -> Self {
        Self {
            style,
            travel: 0.0,
            tween: Tween::new(0.0, 1.0, duration, Easing::EaseOut),
        }
    }

    #[must_use]
    pub fn style(&self) -> BackgroundStyle {
        self.style
    }

    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        self.tween.duration()
    }

    /// Place the card `travel` units below its resting frame and restart.
    pub fn start(&mut self, travel: f64) -> TransitionFrame {
        self.travel = travel.max(0.0);
        self.tween = Tween::new(0.0, 1.0, self.tween.duration(), Easing::EaseOut);
        self.frame()
    }

    /// Travel distance may change while presenting (content set late).
    pub fn set_travel(&mut self, travel: f64) {
        self.travel = travel.max(0.0);
    }

    /// How far the presentation has come, `0.0` off-screen to `1.0` at rest.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.tween.value()
    }

    #[must_use]
    pub fn frame(&self) -> TransitionFrame {
        TransitionFrame::at(self.style, self.travel, self.fraction())
    }

    /// Advance and complete `context` when the card lands.
    pub fn tick(&mut self, delta: Duration, context: &mut TransitionContext) -> TransitionFrame {
        if self.tween.tick(delta) && !context.is_complete() {
            context.complete(true);
        }
        self.frame()
    }

    /// Stop where the card is and report an unfinished transition.
    pub fn interrupt(&mut self, context: &mut TransitionContext) {
        context.complete(false);
    }
}

/// Slides the card down past the bottom edge and fades the backdrop out.
#[derive(Debug, Clone, PartialEq)]
pub struct DismissalAnimator {
    style: BackgroundStyle,
    duration: Duration,
    travel: f64,
    tween: Tween,
}

impl DismissalAnimator {
    #[must_use]
    pub fn new(style: BackgroundStyle, duration: Duration) -> Self {
        Self {
            style,
            duration,
            travel: 0.0,
            tween: Tween::new(1.0, 0.0, duration, Easing::EaseIn),
        }
    }

    #[must_use]
    pub fn style(&self) -> BackgroundStyle {
        self.style
    }

    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        self.tween.duration()
    }

    /// Start from the resting frame.
    pub fn start(&mut self, travel: f64) -> TransitionFrame {
        self.start_from(travel, 1.0)
    }

    /// Travel distance may change mid-flight (layout change).
    pub fn set_travel(&mut self, travel: f64) {
        self.travel = travel.max(0.0);
    }

    /// Start from `fraction` presented (e.g. a card interrupted mid-presentation).
    ///
    /// The duration shrinks in proportion to the remaining distance.
    pub fn start_from(&mut self, travel: f64, fraction: f64) -> TransitionFrame {
        let fraction = if fraction.is_nan() {
            1.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.travel = travel.max(0.0);
        let duration = self.duration.mul_f64(fraction);
        self.tween = Tween::new(fraction, 0.0, duration, Easing::EaseIn);
        self.frame()
    }

    #[must_use]
    pub fn frame(&self) -> TransitionFrame {
        TransitionFrame::at(self.style, self.travel, self.tween.value())
    }

    /// Advance and complete `context` when the card is off-screen.
    pub fn tick(&mut self, delta: Duration, context: &mut TransitionContext) -> TransitionFrame {
        if self.tween.tick(delta) && !context.is_complete() {
            context.complete(true);
        }
        self.frame()
    }

    /// Stop where the card is and report an unfinished transition.
    pub fn interrupt(&mut self, context: &mut TransitionContext) {
        context.complete(false);
    }
}

/// The driver chosen for a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionStrategy {
    Present(PresentationAnimator),
    Dismiss(DismissalAnimator),
    /// Driven frame by frame by the swipe interaction controller.
    InteractiveDismiss,
}

impl TransitionStrategy {
    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        match self {
            Self::Present(_) => TransitionKind::Presentation,
            Self::Dismiss(_) => TransitionKind::Dismissal,
            Self::InteractiveDismiss => TransitionKind::InteractiveDismissal,
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::InteractiveDismiss)
    }
}
