#![forbid(unsafe_code)]

//! Busy spinner overlaid on the card content.
//!
//! `show` starts the spinner and cross-fades it in while the content fades
//! out; when the fade lands, a screen-changed notification moves assistive
//! focus to the spinner. `hide` stops the spinner and snaps both opacities
//! back without animation.
//!
//! # Invariants
//!
//! - `spinner_alpha + content_alpha == 1` at every observable point.
//! - `show` while fading in or shown is a no-op (no restart, no second
//!   notification).
//! - `hide` during a fade cancels it; the notification is never posted for a
//!   cancelled fade.

use std::time::Duration;

use bulletin_a11y::{ElementId, Notification, NotificationQueue};
use tracing::debug;

use super::animation::{Easing, Tween};

/// Spinner revolutions per second.
const SPIN_RATE: f64 = 1.0;

/// Visibility phase of the activity indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityPhase {
    #[default]
    Hidden,
    FadingIn,
    Shown,
}

/// Spinner overlay controller.
#[derive(Debug, Clone)]
pub struct ActivityIndicator {
    element: ElementId,
    fade_duration: Duration,
    phase: ActivityPhase,
    fade: Option<Tween>,
    spinner_alpha: f64,
    spinning: bool,
    /// Fraction of a revolution in `[0.0, 1.0)`.
    rotation: f64,
}

impl ActivityIndicator {
    /// Create a hidden indicator exposed to assistive technology as `element`.
    #[must_use]
    pub fn new(element: ElementId, fade_duration: Duration) -> Self {
        Self {
            element,
            fade_duration,
            phase: ActivityPhase::Hidden,
            fade: None,
            spinner_alpha: 0.0,
            spinning: false,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ActivityPhase {
        self.phase
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[must_use]
    pub fn spinner_alpha(&self) -> f64 {
        self.spinner_alpha
    }

    /// Alpha the content stack should use.
    #[must_use]
    pub fn content_alpha(&self) -> f64 {
        1.0 - self.spinner_alpha
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Start the spinner and begin the cross-fade.
    ///
    /// Returns `false` if the indicator was already fading in or shown.
    pub fn show(&mut self) -> bool {
        if self.phase != ActivityPhase::Hidden {
            debug!(phase = ?self.phase, "activity indicator already visible");
            return false;
        }
        debug!(
            duration_ms = self.fade_duration.as_millis() as u64,
            "activity indicator show"
        );
        self.spinning = true;
        self.phase = ActivityPhase::FadingIn;
        self.fade = Some(Tween::new(
            self.spinner_alpha,
            1.0,
            self.fade_duration,
            Easing::EaseInOut,
        ));
        true
    }

    /// Stop the spinner and restore the content immediately.
    pub fn hide(&mut self) {
        if self.phase != ActivityPhase::Hidden {
            debug!(phase = ?self.phase, "activity indicator hide");
        }
        self.spinning = false;
        self.fade = None;
        self.spinner_alpha = 0.0;
        self.rotation = 0.0;
        self.phase = ActivityPhase::Hidden;
    }

    /// Advance the spin and the fade. Posts the focus notification when the
    /// fade completes.
    pub fn tick(&mut self, delta: Duration, notifications: &mut NotificationQueue) {
        if self.spinning {
            self.rotation = (self.rotation + delta.as_secs_f64() * SPIN_RATE).fract();
        }

        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        let finished = fade.tick(delta);
        self.spinner_alpha = fade.value();
        if finished {
            self.fade = None;
            self.phase = ActivityPhase::Shown;
            notifications.post(Notification::ScreenChanged {
                focus: Some(self.element),
            });
            debug!("activity indicator shown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    const SPINNER: ElementId = ElementId::new(3);
    const FADE: Duration = Duration::from_millis(250);
    const FRAME: Duration = Duration::from_millis(16);

    fn indicator() -> ActivityIndicator {
        ActivityIndicator::new(SPINNER, FADE)
    }

    fn settle(indicator: &mut ActivityIndicator, queue: &mut NotificationQueue) {
        for _ in 0..40 {
            indicator.tick(FRAME, queue);
        }
    }

    #[test]
    fn show_cross_fades_and_notifies_once() {
        let mut indicator = indicator();
        let mut queue = NotificationQueue::new();

        assert!(indicator.show());
        assert!(indicator.is_spinning());
        indicator.tick(Duration::from_millis(125), &mut queue);
        assert_eq!(indicator.phase(), ActivityPhase::FadingIn);
        assert!(indicator.spinner_alpha() > 0.0 && indicator.spinner_alpha() < 1.0);
        assert!((indicator.spinner_alpha() + indicator.content_alpha() - 1.0).abs() < 1e-12);
        assert!(queue.is_empty());

        settle(&mut indicator, &mut queue);
        assert_eq!(indicator.phase(), ActivityPhase::Shown);
        assert_eq!(indicator.spinner_alpha(), 1.0);
        assert_eq!(indicator.content_alpha(), 0.0);
        assert_eq!(
            queue.drain(),
            vec![Notification::ScreenChanged {
                focus: Some(SPINNER)
            }]
        );
    }

    #[test]
    fn show_is_idempotent() {
        let mut indicator = indicator();
        let mut queue = NotificationQueue::new();

        assert!(indicator.show());
        indicator.tick(Duration::from_millis(100), &mut queue);
        let alpha = indicator.spinner_alpha();
        assert!(!indicator.show());
        assert_eq!(indicator.spinner_alpha(), alpha);

        settle(&mut indicator, &mut queue);
        assert!(!indicator.show());
        settle(&mut indicator, &mut queue);
        assert_eq!(queue.drain().len(), 1);
        assert_eq!(indicator.spinner_alpha(), 1.0);
    }

    #[test]
    fn show_then_hide_restores_content() {
        let mut indicator = indicator();
        let mut queue = NotificationQueue::new();

        indicator.show();
        indicator.hide();
        settle(&mut indicator, &mut queue);

        assert_eq!(indicator.phase(), ActivityPhase::Hidden);
        assert_eq!(indicator.spinner_alpha(), 0.0);
        assert_eq!(indicator.content_alpha(), 1.0);
        assert!(!indicator.is_spinning());
        assert!(queue.is_empty(), "cancelled fade must not move focus");
    }

    #[test]
    fn hide_mid_fade_then_show_again() {
        let mut indicator = indicator();
        let mut queue = NotificationQueue::new();

        indicator.show();
        indicator.tick(Duration::from_millis(200), &mut queue);
        indicator.hide();
        assert_eq!(indicator.spinner_alpha(), 0.0);

        assert!(indicator.show());
        settle(&mut indicator, &mut queue);
        assert_eq!(indicator.phase(), ActivityPhase::Shown);
        assert_eq!(queue.drain().len(), 1);
    }

    #[test]
    fn rotation_wraps() {
        let mut indicator = indicator();
        let mut queue = NotificationQueue::new();
        indicator.show();
        indicator.tick(Duration::from_millis(1_250), &mut queue);
        assert!((indicator.rotation() - 0.25).abs() < 1e-9);
        indicator.hide();
        assert_eq!(indicator.rotation(), 0.0);
    }

    #[test]
    #[traced_test]
    fn repeated_show_is_logged() {
        let mut indicator = indicator();
        indicator.show();
        indicator.show();
        assert!(logs_contain("activity indicator already visible"));
    }
}
