#![forbid(unsafe_code)]

//! Bulletin configuration.
//!
//! [`BulletinConfig`] gathers every tunable the bulletin uses: layout metrics,
//! swipe thresholds, animation timings and the card fill. Defaults reproduce
//! the stock card.
//!
//! With the `config` feature, overlays can be parsed from TOML or JSON. Every
//! field of an overlay is optional; missing fields keep their defaults:
//!
//! ```toml
//! card_fill = [255, 255, 255, 255]
//!
//! [swipe]
//! velocity_threshold = 650.0
//!
//! [timings]
//! presentation = 0.4
//!
//! [layout]
//! preferred_width = 480.0
//! ```
//!
//! # Failure Modes
//!
//! - Malformed input yields [`ConfigError::Parse`].
//! - Out-of-range values (negative durations, thresholds outside their range,
//!   non-finite distances) yield [`ConfigError::Invalid`] naming the field.

use std::fmt;
use std::time::Duration;

use bulletin_core::color::Rgba;
use bulletin_layout::LayoutMetrics;

use crate::bulletin::container::CARD_FILL;
use crate::bulletin::swipe::SwipeConfig;

/// Errors from loading or validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The input could not be parsed.
    Parse {
        format: &'static str,
        message: String,
    },
    /// A value is out of range.
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { format, message } => write!(f, "{format} parse error: {message}"),
            Self::Invalid { field, reason } => write!(f, "invalid value for '{field}': {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Durations of the bulletin's animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Card slide-in and backdrop fade-in.
    pub presentation: Duration,
    /// Card slide-out and backdrop fade-out; also the base for swipe settles.
    pub dismissal: Duration,
    /// Spinner/content cross-fade.
    pub activity_fade: Duration,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            presentation: Duration::from_millis(500),
            dismissal: Duration::from_millis(350),
            activity_fade: Duration::from_millis(250),
        }
    }
}

/// Everything a bulletin controller can be tuned with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletinConfig {
    pub layout: LayoutMetrics,
    pub swipe: SwipeConfig,
    pub timings: AnimationTimings,
    pub card_fill: Rgba,
}

impl Default for BulletinConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMetrics::default(),
            swipe: SwipeConfig::default(),
            timings: AnimationTimings::default(),
            card_fill: CARD_FILL,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_distance(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(
            field,
            format!("expected a finite, non-negative distance, got {value}"),
        ))
    }
}

impl BulletinConfig {
    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        check_distance("layout.corner_radius", layout.corner_radius)?;
        check_distance("layout.edge_margin", layout.edge_margin)?;
        check_distance("layout.max_width_margin", layout.max_width_margin)?;
        check_distance("layout.min_bottom_spacing", layout.min_bottom_spacing)?;
        check_distance("layout.content_top_padding", layout.content_top_padding)?;
        check_distance("layout.initial_content_inset", layout.initial_content_inset)?;
        for (prefix, padding) in [
            ("layout.compact", layout.compact),
            ("layout.regular", layout.regular),
        ] {
            check_distance(prefix, padding.horizontal)?;
            check_distance(prefix, padding.bottom)?;
            check_distance(prefix, padding.spacing)?;
        }
        if !(layout.preferred_width.is_finite() && layout.preferred_width > 0.0) {
            return Err(invalid(
                "layout.preferred_width",
                format!("expected a positive width, got {}", layout.preferred_width),
            ));
        }

        let threshold = self.swipe.completion_threshold;
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(invalid(
                "swipe.completion_threshold",
                format!("expected a value in (0, 1), got {threshold}"),
            ));
        }
        let velocity = self.swipe.velocity_threshold;
        if !(velocity.is_finite() && velocity > 0.0) {
            return Err(invalid(
                "swipe.velocity_threshold",
                format!("expected a positive speed, got {velocity}"),
            ));
        }
        Ok(())
    }
}

#[cfg(feature = "config")]
mod overlay {
    use std::time::Duration;

    use bulletin_core::color::Rgba;
    use bulletin_layout::LayoutMetrics;
    use serde::Deserialize;

    use super::{BulletinConfig, ConfigError, invalid};

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct SwipeOverlay {
        completion_threshold: Option<f64>,
        velocity_threshold: Option<f64>,
    }

    /// Durations in seconds.
    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct TimingsOverlay {
        presentation: Option<f64>,
        dismissal: Option<f64>,
        activity_fade: Option<f64>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub(super) struct ConfigOverlay {
        layout: Option<LayoutMetrics>,
        swipe: SwipeOverlay,
        timings: TimingsOverlay,
        card_fill: Option<[u8; 4]>,
    }

    fn seconds(
        field: &'static str,
        value: Option<f64>,
        base: Duration,
    ) -> Result<Duration, ConfigError> {
        match value {
            None => Ok(base),
            Some(secs) => Duration::try_from_secs_f64(secs)
                .map_err(|_| invalid(field, format!("expected non-negative seconds, got {secs}"))),
        }
    }

    impl ConfigOverlay {
        pub(super) fn apply(
            self,
            mut config: BulletinConfig,
        ) -> Result<BulletinConfig, ConfigError> {
            if let Some(layout) = self.layout {
                config.layout = layout;
            }
            if let Some(value) = self.swipe.completion_threshold {
                config.swipe.completion_threshold = value;
            }
            if let Some(value) = self.swipe.velocity_threshold {
                config.swipe.velocity_threshold = value;
            }
            let timings = &mut config.timings;
            timings.presentation =
                seconds("timings.presentation", self.timings.presentation, timings.presentation)?;
            timings.dismissal =
                seconds("timings.dismissal", self.timings.dismissal, timings.dismissal)?;
            timings.activity_fade = seconds(
                "timings.activity_fade",
                self.timings.activity_fade,
                timings.activity_fade,
            )?;
            if let Some([r, g, b, a]) = self.card_fill {
                config.card_fill = Rgba::rgba(r, g, b, a);
            }
            config.validate()?;
            Ok(config)
        }
    }
}

#[cfg(feature = "config")]
impl BulletinConfig {
    /// Parse a TOML overlay on top of the defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let overlay: overlay::ConfigOverlay =
            toml::from_str(input).map_err(|err| ConfigError::Parse {
                format: "toml",
                message: err.to_string(),
            })?;
        overlay.apply(Self::default())
    }

    /// Parse a JSON overlay on top of the defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let overlay: overlay::ConfigOverlay =
            serde_json::from_str(input).map_err(|err| ConfigError::Parse {
                format: "json",
                message: err.to_string(),
            })?;
        overlay.apply(Self::default())
    }
}
