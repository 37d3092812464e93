#![forbid(unsafe_code)]

//! Size-class driven layout engine for the bulletin card.
//!
//! The engine owns the card's [`ConstraintSet`] and keeps it in sync with the
//! current [`TraitCollection`] and safe-area insets. Frame resolution is a
//! closed-form solve of that fixed set; there is no general solver.
//!
//! # Layout rules
//!
//! | Horizontal | Vertical | Width | Padding / spacing |
//! |------------|----------|-------|-------------------|
//! | compact (or unspecified) | any | pinned to edges (`edge_margin`) | compact |
//! | regular | compact | centered, `preferred_width` soft, `view - max_width_margin` hard | compact |
//! | regular | regular | centered | regular |
//!
//! # Invariants
//!
//! - Exactly one width group is active after any call.
//! - `apply_traits` and `update_safe_area` are idempotent: repeating a call
//!   with the same input reports no change and leaves the set untouched.
//! - The card top never rises above the top safe-area inset.
//! - The card bottom sits `-max(safe_bottom, min_bottom_spacing)` above the view bottom.
//!
//! # Failure Modes
//!
//! - A view narrower than the margins resolves to a zero-width card, never a
//!   negative one.
//! - A view shorter than the safe area resolves to a zero-height card.

use bulletin_core::geometry::{EdgeInsets, Rect, Size};
use bulletin_core::size_class::TraitCollection;

use crate::constraint::{ConstraintId, ConstraintSet, WidthGroup};
use crate::metrics::{ContentPadding, LayoutMetrics};

/// Layout mode derived from the size-class pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Compact (or unknown) width.
    #[default]
    Compact,
    /// Regular width, compact or unknown height.
    RegularWidth,
    /// Regular width and regular height.
    RegularBoth,
}

impl LayoutMode {
    /// Derive the mode from a trait collection.
    #[must_use]
    pub fn from_traits(traits: TraitCollection) -> Self {
        match (traits.horizontal.is_regular(), traits.vertical.is_regular()) {
            (true, true) => Self::RegularBoth,
            (true, false) => Self::RegularWidth,
            (false, _) => Self::Compact,
        }
    }

    /// Which width group this mode uses.
    #[must_use]
    pub const fn width_group(self) -> WidthGroup {
        match self {
            Self::Compact => WidthGroup::EdgePinned,
            Self::RegularWidth | Self::RegularBoth => WidthGroup::Centered,
        }
    }

    /// Content padding this mode uses.
    #[must_use]
    pub fn padding(self, metrics: &LayoutMetrics) -> ContentPadding {
        match self {
            Self::RegularBoth => metrics.regular,
            Self::Compact | Self::RegularWidth => metrics.compact,
        }
    }
}

/// Resolved frames for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardLayout {
    /// Card frame in view coordinates (before any transition transform).
    pub card: Rect,
    /// Content stack frame in view coordinates.
    pub content: Rect,
    /// Spacing between content items.
    pub spacing: f64,
}

/// Keeps the card constraint set in sync with traits and safe area.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    metrics: LayoutMetrics,
    constraints: ConstraintSet,
    mode: Option<LayoutMode>,
    spacing: f64,
    safe_area: EdgeInsets,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutMetrics::default())
    }
}

impl LayoutEngine {
    /// Create an engine with the initial (pre-layout) constraint set.
    #[must_use]
    pub fn new(metrics: LayoutMetrics) -> Self {
        let bottom = metrics.bottom_offset(0.0);
        Self {
            constraints: ConstraintSet::new(&metrics, bottom),
            spacing: metrics.compact.spacing,
            metrics,
            mode: None,
            safe_area: EdgeInsets::ZERO,
        }
    }

    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// The mode of the last `apply_traits` call, or `None` before the first.
    #[must_use]
    pub fn mode(&self) -> Option<LayoutMode> {
        self.mode
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    #[must_use]
    pub fn safe_area(&self) -> EdgeInsets {
        self.safe_area
    }

    /// Current card bottom offset (always negative).
    #[must_use]
    pub fn bottom_offset(&self) -> f64 {
        self.constraints.constant(ConstraintId::CardBottom)
    }

    /// (Re)compute constraints for a trait collection.
    ///
    /// Returns `true` if any constraint, constant or spacing changed.
    pub fn apply_traits(&mut self, traits: TraitCollection) -> bool {
        let mode = LayoutMode::from_traits(traits);
        let mut changed = self.constraints.activate_width_group(mode.width_group());

        let padding = mode.padding(&self.metrics);
        changed |= self
            .constraints
            .set_constant(ConstraintId::ContentLeading, padding.horizontal);
        changed |= self
            .constraints
            .set_constant(ConstraintId::ContentTrailing, -padding.horizontal);
        changed |= self
            .constraints
            .set_constant(ConstraintId::ContentBottom, -padding.bottom);
        if self.spacing != padding.spacing {
            self.spacing = padding.spacing;
            changed = true;
        }

        changed |= self.mode != Some(mode);
        self.mode = Some(mode);
        changed
    }

    /// Record new safe-area insets and recompute the bottom offset.
    ///
    /// Returns `true` if the bottom offset changed.
    pub fn update_safe_area(&mut self, insets: EdgeInsets) -> bool {
        self.safe_area = insets;
        let offset = self.metrics.bottom_offset(insets.bottom);
        self.constraints.set_constant(ConstraintId::CardBottom, offset)
    }

    /// Resolve frames for a view of `view` size.
    ///
    /// `content_height` receives the content width and returns the height the
    /// content stack needs at that width.
    pub fn resolve(&self, view: Size, content_height: impl FnOnce(f64) -> f64) -> CardLayout {
        let (x, width) = self.resolve_horizontal(view.width);

        let leading = self.constraints.constant(ConstraintId::ContentLeading);
        let trailing = self.constraints.constant(ConstraintId::ContentTrailing);
        let content_width = (width - leading + trailing).max(0.0);
        let stack_height = content_height(content_width).max(0.0);

        let bottom_pad = -self.constraints.constant(ConstraintId::ContentBottom);
        let top_pad = -self.constraints.constant(ConstraintId::CardFitContent);
        let card_bottom = view.height + self.bottom_offset();

        // Required: card.top >= safe top. Soft: fit the content.
        let fitted = top_pad + stack_height + bottom_pad;
        let ceiling = (card_bottom - self.safe_area.top).max(0.0);
        let height = fitted.min(ceiling);
        let card = Rect::new(x, card_bottom - height, width, height);

        // The bottom padding is required, so a capped card clips content at the top.
        let content = Rect::new(
            x + leading,
            card_bottom - bottom_pad - stack_height,
            content_width,
            stack_height,
        );

        CardLayout {
            card,
            content,
            spacing: self.spacing,
        }
    }

    fn resolve_horizontal(&self, view_width: f64) -> (f64, f64) {
        let max_width =
            (view_width + self.constraints.constant(ConstraintId::CardMaxWidth)).max(0.0);

        match self.constraints.width_group() {
            Some(WidthGroup::Centered) => {
                let preferred = self.constraints.constant(ConstraintId::CardPreferredWidth);
                let width = preferred.min(max_width).max(0.0);
                ((view_width - width) / 2.0, width)
            }
            // The set is built edge-pinned and only switched through
            // `activate_width_group`, so `None` cannot be observed here.
            Some(WidthGroup::EdgePinned) | None => {
                let leading = self.constraints.constant(ConstraintId::CardLeading);
                let trailing = self.constraints.constant(ConstraintId::CardTrailing);
                let width = (view_width - leading + trailing).min(max_width).max(0.0);
                (leading, width)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulletin_core::size_class::SizeClass;
    use proptest::prelude::*;

    const PHONE: Size = Size::new(375.0, 812.0);
    const TABLET: Size = Size::new(1024.0, 1366.0);

    fn engine(traits: TraitCollection) -> LayoutEngine {
        let mut engine = LayoutEngine::default();
        engine.apply_traits(traits);
        engine
    }

    #[test]
    fn mode_from_traits() {
        assert_eq!(
            LayoutMode::from_traits(TraitCollection::phone_portrait()),
            LayoutMode::Compact
        );
        assert_eq!(
            LayoutMode::from_traits(TraitCollection::new(SizeClass::Regular, SizeClass::Compact)),
            LayoutMode::RegularWidth
        );
        assert_eq!(
            LayoutMode::from_traits(TraitCollection::tablet()),
            LayoutMode::RegularBoth
        );
        assert_eq!(
            LayoutMode::from_traits(TraitCollection::default()),
            LayoutMode::Compact
        );
    }

    #[test]
    fn exactly_one_width_group_for_every_trait_pair() {
        for traits in TraitCollection::ALL {
            let engine = engine(traits);
            let group = engine.constraints().width_group();
            assert_eq!(
                group,
                Some(LayoutMode::from_traits(traits).width_group()),
                "traits {traits:?}"
            );
        }
    }

    #[test]
    fn exactly_one_width_group_across_transitions() {
        let mut engine = LayoutEngine::default();
        for from in TraitCollection::ALL {
            for to in TraitCollection::ALL {
                engine.apply_traits(from);
                engine.apply_traits(to);
                assert!(engine.constraints().width_group().is_some(), "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn apply_is_idempotent() {
        for traits in TraitCollection::ALL {
            let mut engine = LayoutEngine::default();
            engine.apply_traits(traits);
            let before = engine.constraints().clone();
            assert!(!engine.apply_traits(traits), "second apply changed {traits:?}");
            assert_eq!(engine.constraints(), &before);
        }
    }

    #[test]
    fn first_apply_replaces_initial_inset() {
        let mut engine = LayoutEngine::default();
        assert_eq!(engine.constraints().constant(ConstraintId::ContentLeading), 36.0);
        assert!(engine.apply_traits(TraitCollection::phone_portrait()));
        assert_eq!(engine.constraints().constant(ConstraintId::ContentLeading), 24.0);
    }

    #[test]
    fn compact_card_is_edge_pinned() {
        let engine = engine(TraitCollection::phone_portrait());
        let layout = engine.resolve(PHONE, |_| 100.0);
        assert_eq!(layout.card.x, 12.0);
        assert_eq!(layout.card.width, 375.0 - 24.0);
        assert_eq!(layout.spacing, 24.0);
    }

    #[test]
    fn regular_card_is_centered_at_preferred_width() {
        let engine = engine(TraitCollection::tablet());
        let layout = engine.resolve(TABLET, |_| 100.0);
        assert_eq!(layout.card.width, 444.0);
        assert_eq!(layout.card.center_x(), 512.0);
        assert_eq!(layout.spacing, 32.0);
    }

    #[test]
    fn regular_card_respects_hard_max_width() {
        let engine = engine(TraitCollection::tablet());
        let layout = engine.resolve(Size::new(400.0, 800.0), |_| 100.0);
        assert_eq!(layout.card.width, 376.0);
        assert_eq!(layout.card.x, 12.0);
    }

    #[test]
    fn padding_steps_up_only_when_both_regular() {
        let wide = engine(TraitCollection::new(SizeClass::Regular, SizeClass::Compact));
        assert_eq!(wide.constraints().constant(ConstraintId::ContentLeading), 24.0);
        assert_eq!(wide.constraints().constant(ConstraintId::ContentBottom), -16.0);

        let tablet = engine(TraitCollection::tablet());
        assert_eq!(tablet.constraints().constant(ConstraintId::ContentLeading), 32.0);
        assert_eq!(tablet.constraints().constant(ConstraintId::ContentTrailing), -32.0);
        assert_eq!(tablet.constraints().constant(ConstraintId::ContentBottom), -24.0);
    }

    #[test]
    fn card_fits_content_and_sits_above_bottom_offset() {
        let engine = engine(TraitCollection::phone_portrait());
        let layout = engine.resolve(PHONE, |width| {
            assert_eq!(width, 375.0 - 24.0 - 48.0);
            200.0
        });
        // 24 top + 200 content + 16 bottom
        assert_eq!(layout.card.height, 240.0);
        assert_eq!(layout.card.bottom(), 812.0 - 12.0);
        assert_eq!(layout.content.bottom(), layout.card.bottom() - 16.0);
        assert_eq!(layout.content.x, layout.card.x + 24.0);
    }

    #[test]
    fn card_top_never_rises_above_safe_area() {
        let mut engine = engine(TraitCollection::phone_portrait());
        engine.update_safe_area(EdgeInsets::new(44.0, 0.0, 34.0, 0.0));
        let layout = engine.resolve(PHONE, |_| 5_000.0);
        assert_eq!(layout.card.y, 44.0);
        assert_eq!(layout.card.bottom(), 812.0 - 34.0);
    }

    #[test]
    fn safe_area_updates_bottom_offset() {
        let mut engine = engine(TraitCollection::phone_portrait());
        assert_eq!(engine.bottom_offset(), -12.0);
        assert!(engine.update_safe_area(EdgeInsets::bottom(34.0)));
        assert_eq!(engine.bottom_offset(), -34.0);
        assert!(!engine.update_safe_area(EdgeInsets::bottom(34.0)));
        assert!(engine.update_safe_area(EdgeInsets::ZERO));
        assert_eq!(engine.bottom_offset(), -12.0);
    }

    #[test]
    fn tiny_view_never_produces_negative_sizes() {
        let engine = engine(TraitCollection::tablet());
        let layout = engine.resolve(Size::new(10.0, 5.0), |_| 50.0);
        assert!(layout.card.width >= 0.0);
        assert!(layout.card.height >= 0.0);
        assert!(layout.content.width >= 0.0);
    }

    #[test]
    fn custom_metrics_flow_through() {
        let metrics = LayoutMetrics {
            edge_margin: 20.0,
            preferred_width: 300.0,
            ..LayoutMetrics::default()
        };
        let mut engine = LayoutEngine::new(metrics);
        engine.apply_traits(TraitCollection::phone_portrait());
        assert_eq!(engine.resolve(PHONE, |_| 0.0).card.width, 375.0 - 40.0);
        engine.apply_traits(TraitCollection::tablet());
        assert_eq!(engine.resolve(TABLET, |_| 0.0).card.width, 300.0);
    }

    fn size_class() -> impl Strategy<Value = SizeClass> {
        prop_oneof![
            Just(SizeClass::Unspecified),
            Just(SizeClass::Compact),
            Just(SizeClass::Regular),
        ]
    }

    proptest! {
        #[test]
        fn prop_one_width_group_after_any_sequence(
            seq in proptest::collection::vec((size_class(), size_class()), 1..16)
        ) {
            let mut engine = LayoutEngine::default();
            for (h, v) in seq {
                engine.apply_traits(TraitCollection::new(h, v));
                prop_assert!(engine.constraints().width_group().is_some());
            }
        }

        #[test]
        fn prop_bottom_offset(inset in 0.0f64..200.0) {
            let mut engine = LayoutEngine::default();
            engine.update_safe_area(EdgeInsets::bottom(inset));
            prop_assert_eq!(engine.bottom_offset(), -inset.max(12.0));
        }

        #[test]
        fn prop_card_within_view(
            width in 0.0f64..2000.0,
            height in 0.0f64..2000.0,
            content in 0.0f64..3000.0,
            top in 0.0f64..60.0,
            regular in any::<bool>(),
        ) {
            let traits = if regular {
                TraitCollection::tablet()
            } else {
                TraitCollection::phone_portrait()
            };
            let mut engine = engine(traits);
            engine.update_safe_area(EdgeInsets::new(top, 0.0, 0.0, 0.0));
            let layout = engine.resolve(Size::new(width, height), |_| content);
            prop_assert!(layout.card.width <= (width - 24.0).max(0.0) + 1e-9);
            prop_assert!(layout.card.height >= 0.0);
            if layout.card.height > 0.0 {
                prop_assert!(layout.card.y >= top - 1e-9);
            }
        }
    }
}
