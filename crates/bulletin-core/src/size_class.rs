#![forbid(unsafe_code)]

//! Coarse screen-size categories that drive layout mode.

/// Coarse size category of one screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeClass {
    /// Not yet known (treated as compact by layout).
    #[default]
    Unspecified,
    Compact,
    Regular,
}

impl SizeClass {
    #[inline]
    pub fn is_regular(self) -> bool {
        matches!(self, Self::Regular)
    }
}

/// The pair of size classes describing the current environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TraitCollection {
    pub horizontal: SizeClass,
    pub vertical: SizeClass,
}

impl TraitCollection {
    /// Create a trait collection from horizontal and vertical size classes.
    #[must_use]
    pub const fn new(horizontal: SizeClass, vertical: SizeClass) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Phone in portrait: compact width, regular height.
    #[must_use]
    pub const fn phone_portrait() -> Self {
        Self::new(SizeClass::Compact, SizeClass::Regular)
    }

    /// Phone in landscape: compact in both axes.
    #[must_use]
    pub const fn phone_landscape() -> Self {
        Self::new(SizeClass::Compact, SizeClass::Compact)
    }

    /// Full-screen tablet: regular in both axes.
    #[must_use]
    pub const fn tablet() -> Self {
        Self::new(SizeClass::Regular, SizeClass::Regular)
    }

    /// Every combination, for exhaustive checks.
    pub const ALL: [Self; 9] = {
        use SizeClass::{Compact, Regular, Unspecified};
        [
            Self::new(Unspecified, Unspecified),
            Self::new(Unspecified, Compact),
            Self::new(Unspecified, Regular),
            Self::new(Compact, Unspecified),
            Self::new(Compact, Compact),
            Self::new(Compact, Regular),
            Self::new(Regular, Unspecified),
            Self::new(Regular, Compact),
            Self::new(Regular, Regular),
        ]
    };
}
