#![forbid(unsafe_code)]

//! The visual card and the content stack it hosts.
//!
//! The card is a rounded, filled rectangle whose frame comes from the layout
//! engine and whose transform and alpha belong to the running transition.
//! The content stack lays externally supplied [`BulletinItem`]s top to bottom.
//!
//! Items must tolerate any width: the card is edge-pinned on compact screens,
//! centered on regular ones, and its padding changes at runtime.

use std::fmt;

use bulletin_core::color::Rgba;
use bulletin_core::geometry::{Rect, Transform};

/// Content element shown inside a bulletin card.
pub trait BulletinItem {
    /// Height the item needs at `width`.
    fn preferred_height(&self, width: f64) -> f64;

    /// Label exposed to assistive technology.
    fn accessibility_label(&self) -> Option<String> {
        None
    }
}

/// A fixed-height item, handy for spacers and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedItem {
    pub height: f64,
    pub label: Option<String>,
}

impl FixedItem {
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            height,
            label: None,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl BulletinItem for FixedItem {
    fn preferred_height(&self, _width: f64) -> f64 {
        self.height
    }

    fn accessibility_label(&self) -> Option<String> {
        self.label.clone()
    }
}

/// Default card fill (near-white with a hint of cyan).
pub const CARD_FILL: Rgba = Rgba::rgb(253, 255, 255);

/// The card's visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardContainer {
    pub corner_radius: f64,
    pub fill: Rgba,
    /// Resolved frame, before `transform`.
    pub frame: Rect,
    /// Offset applied by transitions; identity at rest.
    pub transform: Transform,
    pub alpha: f64,
}

impl CardContainer {
    #[must_use]
    pub fn new(corner_radius: f64, fill: Rgba) -> Self {
        Self {
            corner_radius,
            fill,
            frame: Rect::ZERO,
            transform: Transform::IDENTITY,
            alpha: 1.0,
        }
    }

    /// Frame as drawn this frame (transform applied).
    #[must_use]
    pub fn visual_frame(&self) -> Rect {
        self.frame.apply(self.transform)
    }

    /// Restore the resting transform.
    pub fn reset_transform(&mut self) {
        self.transform = Transform::IDENTITY;
    }
}

/// Ordered content items plus the stack's own alpha.
pub struct ContentStack {
    items: Vec<Box<dyn BulletinItem>>,
    pub alpha: f64,
}

impl fmt::Debug for ContentStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentStack")
            .field("items", &self.items.len())
            .field("alpha", &self.alpha)
            .finish()
    }
}

impl Default for ContentStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            alpha: 1.0,
        }
    }

    /// Replace all items.
    pub fn set_items(&mut self, items: Vec<Box<dyn BulletinItem>>) {
        self.items = items;
    }

    /// Append one item.
    pub fn push(&mut self, item: Box<dyn BulletinItem>) {
        self.items.push(item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &dyn BulletinItem> {
        self.items.iter().map(|item| item.as_ref())
    }

    /// Total height at `width` with `spacing` between items.
    #[must_use]
    pub fn height_for_width(&self, width: f64, spacing: f64) -> f64 {
        let gaps = self.items.len().saturating_sub(1) as f64 * spacing;
        let items: f64 = self
            .items
            .iter()
            .map(|item| item.preferred_height(width).max(0.0))
            .sum();
        items + gaps
    }

    /// Frames of each item inside `frame`, top to bottom.
    #[must_use]
    pub fn item_frames(&self, frame: Rect, spacing: f64) -> Vec<Rect> {
        let mut y = frame.y;
        self.items
            .iter()
            .map(|item| {
                let height = item.preferred_height(frame.width).max(0.0);
                let rect = Rect::new(frame.x, y, frame.width, height);
                y += height + spacing;
                rect
            })
            .collect()
    }
}
