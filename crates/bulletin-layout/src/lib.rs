#![forbid(unsafe_code)]

//! Constraint layout for bulletin cards.
//!
//! A bulletin card is laid out from a small, fixed constraint set whose
//! activation and constants depend on the horizontal/vertical size classes
//! and the safe-area insets. See [`engine`] for the rules.

pub mod constraint;
pub mod engine;
pub mod metrics;

pub use constraint::{Constraint, ConstraintId, ConstraintSet, Priority, WidthGroup};
pub use engine::{CardLayout, LayoutEngine, LayoutMode};
pub use metrics::{ContentPadding, LayoutMetrics};
