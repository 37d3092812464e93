#![forbid(unsafe_code)]

//! Core primitives for bulletin cards: geometry, colors, size classes,
//! input events and the frame clock.

pub mod clock;
pub mod color;
pub mod event;
pub mod geometry;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod size_class;

pub use clock::{FrameClock, Instant};
pub use color::Rgba;
pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PanEvent, PanPhase, TapEvent};
pub use geometry::{EdgeInsets, Point, Rect, Size, Transform};
pub use size_class::{SizeClass, TraitCollection};
