#![forbid(unsafe_code)]

//! Background styles shown behind the card.

use bulletin_core::color::Rgba;

/// Blur material behind the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlurStyle {
    Light,
    ExtraLight,
    Dark,
}

impl BlurStyle {
    /// Tint composited over the blurred content.
    #[must_use]
    pub const fn tint(self) -> BackdropConfig {
        match self {
            Self::Light => BackdropConfig::new(Rgba::WHITE, 0.3),
            Self::ExtraLight => BackdropConfig::new(Rgba::WHITE, 0.6),
            Self::Dark => BackdropConfig::new(Rgba::BLACK, 0.4),
        }
    }
}

/// Background treatment chosen by the manager at presentation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundStyle {
    /// Content behind the card stays untouched.
    None,
    /// Content behind the card is dimmed.
    #[default]
    Dimmed,
    /// Content behind the card is blurred.
    Blurred(BlurStyle),
}

impl BackgroundStyle {
    /// Backdrop at a given presentation fraction (`0.0` hidden, `1.0` fully shown).
    #[must_use]
    pub fn at(self, fraction: f64) -> BackdropState {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        match self {
            Self::None => BackdropState::CLEAR,
            Self::Dimmed => BackdropState {
                tint: BackdropConfig::default().scaled(fraction),
                blur: 0.0,
            },
            Self::Blurred(style) => BackdropState {
                tint: style.tint().scaled(fraction),
                blur: fraction,
            },
        }
    }
}

/// Backdrop color and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropConfig {
    /// Backdrop color (alpha will be scaled by `opacity`).
    pub color: Rgba,
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f64,
}

impl BackdropConfig {
    #[must_use]
    pub const fn new(color: Rgba, opacity: f64) -> Self {
        Self { color, opacity }
    }

    /// Same color with opacity multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            opacity: (self.opacity * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// The color with `opacity` folded into its alpha channel.
    #[must_use]
    pub fn resolved(self) -> Rgba {
        self.color.with_opacity(self.opacity)
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self::new(Rgba::BLACK, 0.6)
    }
}

/// What the renderer draws behind the card this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropState {
    pub tint: BackdropConfig,
    /// Blur amount in `[0.0, 1.0]`.
    pub blur: f64,
}

impl BackdropState {
    /// Nothing drawn.
    pub const CLEAR: Self = Self {
        tint: BackdropConfig::new(Rgba::TRANSPARENT, 0.0),
        blur: 0.0,
    };

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.tint.opacity == 0.0 && self.blur == 0.0
    }
}

impl Default for BackdropState {
    fn default() -> Self {
        Self::CLEAR
    }
}
