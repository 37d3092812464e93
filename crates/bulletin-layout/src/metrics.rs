#![forbid(unsafe_code)]

//! Named layout metrics.
//!
//! Every distance the layout engine uses lives here so the engine can be
//! exercised against arbitrary parameter sets. Defaults reproduce the stock
//! bulletin card.

use serde::{Deserialize, Serialize};

/// Distances (logical units) used by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Card corner radius.
    pub corner_radius: f64,
    /// Leading/trailing margin of the card in compact width.
    pub edge_margin: f64,
    /// Preferred card width in regular width (soft).
    pub preferred_width: f64,
    /// Total horizontal margin the card always keeps (hard cap: view width minus this).
    pub max_width_margin: f64,
    /// Smallest distance between the card and the bottom of the view.
    pub min_bottom_spacing: f64,
    /// Gap between the card top and the first content item (soft).
    pub content_top_padding: f64,
    /// Content inset applied before the first layout pass.
    pub initial_content_inset: f64,
    /// Padding and spacing when width or height is compact.
    pub compact: ContentPadding,
    /// Padding and spacing when both width and height are regular.
    pub regular: ContentPadding,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            corner_radius: 12.0,
            edge_margin: 12.0,
            preferred_width: 444.0,
            max_width_margin: 24.0,
            min_bottom_spacing: 12.0,
            content_top_padding: 24.0,
            initial_content_inset: 36.0,
            compact: ContentPadding::new(24.0, 16.0, 24.0),
            regular: ContentPadding::new(32.0, 24.0, 32.0),
        }
    }
}

impl LayoutMetrics {
    /// Bottom offset of the card for a safe-area bottom inset.
    ///
    /// Always negative: `-max(inset, min_bottom_spacing)`.
    #[must_use]
    pub fn bottom_offset(&self, safe_area_bottom: f64) -> f64 {
        let inset = if safe_area_bottom > 0.0 {
            safe_area_bottom
        } else {
            0.0
        };
        -inset.max(self.min_bottom_spacing)
    }
}

/// Content padding inside the card and spacing between items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentPadding {
    /// Leading and trailing inset (the same value on both sides).
    pub horizontal: f64,
    /// Inset between the last item and the card bottom.
    pub bottom: f64,
    /// Vertical spacing between consecutive items.
    pub spacing: f64,
}

impl ContentPadding {
    #[must_use]
    pub const fn new(horizontal: f64, bottom: f64, spacing: f64) -> Self {
        Self {
            horizontal,
            bottom,
            spacing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_offset_uses_minimum_without_inset() {
        let metrics = LayoutMetrics::default();
        assert_eq!(metrics.bottom_offset(0.0), -12.0);
        assert_eq!(metrics.bottom_offset(-3.0), -12.0);
    }

    #[test]
    fn bottom_offset_follows_home_indicator_inset() {
        let metrics = LayoutMetrics::default();
        assert_eq!(metrics.bottom_offset(34.0), -34.0);
        assert_eq!(metrics.bottom_offset(21.0), -21.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let metrics: LayoutMetrics =
            serde_json::from_str(r#"{ "preferred_width": 500.0 }"#).expect("valid json");
        assert_eq!(metrics.preferred_width, 500.0);
        assert_eq!(metrics.edge_margin, 12.0);
        assert_eq!(metrics.regular, ContentPadding::new(32.0, 24.0, 32.0));
    }
}
