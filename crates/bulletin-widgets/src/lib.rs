#![forbid(unsafe_code)]

//! Bulletin widgets: a modal bottom card with animated presentation,
//! swipe-to-dismiss and an activity indicator.
//!
//! The widgets are host-driven. The host forwards input [`Event`]s, trait and
//! safe-area changes and frame deltas, and renders the
//! [`BulletinSnapshot`](bulletin::BulletinSnapshot) it gets back.
//!
//! # Feature Flags
//!
//! - `config`: load [`BulletinConfig`] overlays from TOML or JSON.
//!
//! [`Event`]: bulletin_core::event::Event

pub mod bulletin;
pub mod config;

pub use bulletin::{
    BackgroundStyle, BlurStyle, BulletinAction, BulletinItem, BulletinManager, BulletinSnapshot,
    BulletinViewController, PresentationState,
};
pub use config::{AnimationTimings, BulletinConfig, ConfigError};
