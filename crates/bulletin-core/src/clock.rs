#![forbid(unsafe_code)]

//! Frame clock producing tick deltas for animations.
//!
//! Animations in this workspace advance by explicit `Duration` deltas so they
//! stay deterministic under test. Hosts that drive them from wall-clock time
//! use [`FrameClock`] to turn frame callbacks into deltas.
//!
//! # Invariants
//!
//! - The first call to [`FrameClock::tick`] returns `Duration::ZERO`.
//! - Deltas are capped at `max_delta` so a stalled frame (app suspended,
//!   debugger break) does not teleport an animation to its end.

use std::time::Duration;

/// Wall-clock instant, usable on wasm targets.
pub use web_time::Instant;

/// Default cap on a single frame delta.
pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(100);

/// Converts wall-clock frame callbacks into bounded deltas.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: None,
            max_delta: DEFAULT_MAX_DELTA,
        }
    }

    /// Override the per-frame delta cap.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Record a frame at `now` and return the delta since the previous frame.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let delta = match self.last {
            Some(last) => now.saturating_duration_since(last).min(self.max_delta),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        delta
    }

    /// Record a frame now.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Forget the previous frame (e.g., after the app resumes).
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick_at(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn deltas_are_capped() {
        let mut clock = FrameClock::new().with_max_delta(Duration::from_millis(50));
        let start = Instant::now();
        clock.tick_at(start);
        assert_eq!(
            clock.tick_at(start + Duration::from_millis(16)),
            Duration::from_millis(16)
        );
        assert_eq!(
            clock.tick_at(start + Duration::from_secs(5)),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        clock.reset();
        assert_eq!(
            clock.tick_at(start + Duration::from_millis(30)),
            Duration::ZERO
        );
    }
}
