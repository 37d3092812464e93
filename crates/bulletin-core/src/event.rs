#![forbid(unsafe_code)]

//! Discrete input events fed to a bulletin by the host event loop.
//!
//! Gestures arrive already recognized: the host's gesture layer decides what
//! a tap or a pan is and reports phases. Pan translations are cumulative since
//! the gesture began; velocities are in logical units per second.

use bitflags::bitflags;

use crate::geometry::Point;

/// Top-level input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A completed tap at a location in view coordinates.
    Tap(TapEvent),
    /// One phase of a pan (drag) gesture.
    Pan(PanEvent),
    /// Keyboard input.
    Key(KeyEvent),
}

/// A completed tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub location: Point,
}

impl TapEvent {
    #[must_use]
    pub const fn new(location: Point) -> Self {
        Self { location }
    }
}

/// Lifecycle phase of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    /// The system took the touch away (incoming call, gesture conflict).
    Cancelled,
}

/// One sample of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    /// Where the touch started, in view coordinates.
    pub location: Point,
    /// Cumulative translation since `Began`.
    pub translation: Point,
    /// Instantaneous velocity (units per second).
    pub velocity: Point,
}

impl PanEvent {
    /// A `Began` sample at `location` with no movement yet.
    #[must_use]
    pub const fn began(location: Point) -> Self {
        Self {
            phase: PanPhase::Began,
            location,
            translation: Point::ZERO,
            velocity: Point::ZERO,
        }
    }

    /// A `Changed` sample with the given vertical translation.
    #[must_use]
    pub const fn changed(location: Point, dy: f64, vy: f64) -> Self {
        Self {
            phase: PanPhase::Changed,
            location,
            translation: Point::new(0.0, dy),
            velocity: Point::new(0.0, vy),
        }
    }

    /// An `Ended` sample with the given vertical translation and velocity.
    #[must_use]
    pub const fn ended(location: Point, dy: f64, vy: f64) -> Self {
        Self {
            phase: PanPhase::Ended,
            location,
            translation: Point::new(0.0, dy),
            velocity: Point::new(0.0, vy),
        }
    }

    /// A `Cancelled` sample.
    #[must_use]
    pub const fn cancelled(location: Point) -> Self {
        Self {
            phase: PanPhase::Cancelled,
            location,
            translation: Point::ZERO,
            velocity: Point::ZERO,
        }
    }
}

/// Key codes the bulletin reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Char(char),
}

/// Press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Release,
}

bitflags! {
    /// Keyboard modifier state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const SUPER = 0b1000;
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A plain key press without modifiers.
    #[must_use]
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }
}
