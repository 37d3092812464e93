#![forbid(unsafe_code)]

//! Easing curves and a single-value tween.
//!
//! Every animation in the bulletin (card slide, backdrop fade, spinner
//! cross-fade, swipe settle, layout change) is a [`Tween`] advanced by
//! explicit frame deltas.
//!
//! # Invariants
//!
//! - Raw progress is always in `[0.0, 1.0]`.
//! - A finished tween reports exactly `to` as its value.
//! - Zero-duration tweens finish on the first tick.

use std::time::Duration;

use bulletin_core::geometry::lerp;

/// Easing function applied to raw progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Decelerating; used for entrances and settles.
    #[default]
    EaseOut,
    /// Accelerating; used for exits.
    EaseIn,
    /// S-curve; the platform default for view animations.
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (clamped to `[0.0, 1.0]`).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseIn => t * t * t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// Animates one `f64` from `from` to `to` over `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Advance by `delta`. Returns `true` once the tween has finished.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        self.is_finished()
    }

    /// Jump to the end.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Raw (un-eased) progress in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased progress in `[0.0, 1.0]`.
    #[must_use]
    pub fn eased(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        lerp(self.from, self.to, self.eased())
    }

    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
