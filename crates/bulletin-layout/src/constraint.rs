#![forbid(unsafe_code)]

//! The bulletin card's constraint set.
//!
//! The card uses a fixed, named set of constraints. Each one carries a
//! constant, a priority and an activation flag; the layout engine flips
//! activation and rewrites constants, and [`crate::engine::LayoutEngine`]
//! resolves frames from whatever is active.
//!
//! # Invariants
//!
//! - Exactly one width group ([`WidthGroup::EdgePinned`] or
//!   [`WidthGroup::Centered`]) is active once the set is built.
//! - `set_active` / `set_constant` report whether anything changed, so the
//!   caller can tell an idempotent re-application apart from a real change.

use std::fmt;

/// Constraint priority. Higher wins when constraints conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u16);

impl Priority {
    /// Must be satisfied.
    pub const REQUIRED: Self = Self(1000);
    /// Satisfied unless a required constraint says otherwise.
    pub const DEFAULT_HIGH: Self = Self(750);
    pub const DEFAULT_LOW: Self = Self(250);

    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(if value > 1000 { 1000 } else { value })
    }

    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        self.0 >= 1000
    }
}

/// Every constraint the card layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintId {
    /// card.leading == view.leading + c
    CardLeading,
    /// card.trailing == view.trailing + c
    CardTrailing,
    /// card.centerX == view.centerX
    CardCenterX,
    /// card.width == c (soft)
    CardPreferredWidth,
    /// card.width <= view.width + c (required)
    CardMaxWidth,
    /// card.bottom == view.bottom + c
    CardBottom,
    /// card.top >= safeArea.top (required)
    CardTopMin,
    /// card.top == content.top - c (soft, keeps the card fitted)
    CardFitContent,
    /// content.leading == card.leading + c
    ContentLeading,
    /// content.trailing == card.trailing + c
    ContentTrailing,
    /// content.bottom == card.bottom + c
    ContentBottom,
}

impl ConstraintId {
    pub const COUNT: usize = 11;

    pub const ALL: [Self; Self::COUNT] = [
        Self::CardLeading,
        Self::CardTrailing,
        Self::CardCenterX,
        Self::CardPreferredWidth,
        Self::CardMaxWidth,
        Self::CardBottom,
        Self::CardTopMin,
        Self::CardFitContent,
        Self::ContentLeading,
        Self::ContentTrailing,
        Self::ContentBottom,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CardLeading => "card.leading",
            Self::CardTrailing => "card.trailing",
            Self::CardCenterX => "card.centerX",
            Self::CardPreferredWidth => "card.width.preferred",
            Self::CardMaxWidth => "card.width.max",
            Self::CardBottom => "card.bottom",
            Self::CardTopMin => "card.top.min",
            Self::CardFitContent => "card.top.fit",
            Self::ContentLeading => "content.leading",
            Self::ContentTrailing => "content.trailing",
            Self::ContentBottom => "content.bottom",
        };
        f.write_str(name)
    }
}

/// A single constraint's mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub constant: f64,
    pub priority: Priority,
    pub active: bool,
}

impl Constraint {
    const fn new(constant: f64, priority: Priority, active: bool) -> Self {
        Self {
            constant,
            priority,
            active,
        }
    }
}

/// The two mutually exclusive ways of sizing the card horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthGroup {
    /// Leading/trailing pinned to the view edges.
    EdgePinned,
    /// Centered with a preferred fixed width.
    Centered,
}

impl WidthGroup {
    /// Constraints that belong to this group.
    #[must_use]
    pub const fn members(self) -> [ConstraintId; 2] {
        match self {
            Self::EdgePinned => [ConstraintId::CardLeading, ConstraintId::CardTrailing],
            Self::Centered => [ConstraintId::CardCenterX, ConstraintId::CardPreferredWidth],
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::EdgePinned => Self::Centered,
            Self::Centered => Self::EdgePinned,
        }
    }
}

/// Fixed set of card constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSet {
    constraints: [Constraint; ConstraintId::COUNT],
}

impl ConstraintSet {
    /// Build the initial set: edge-pinned width, content at the initial inset.
    #[must_use]
    pub fn new(metrics: &crate::LayoutMetrics, bottom_offset: f64) -> Self {
        use ConstraintId as Id;

        let required = Priority::REQUIRED;
        let high = Priority::DEFAULT_HIGH;
        let mut constraints = [Constraint::new(0.0, required, false); ConstraintId::COUNT];

        constraints[Id::CardLeading.index()] = Constraint::new(metrics.edge_margin, required, true);
        constraints[Id::CardTrailing.index()] =
            Constraint::new(-metrics.edge_margin, required, true);
        constraints[Id::CardCenterX.index()] = Constraint::new(0.0, required, false);
        constraints[Id::CardPreferredWidth.index()] =
            Constraint::new(metrics.preferred_width, high, false);
        constraints[Id::CardMaxWidth.index()] =
            Constraint::new(-metrics.max_width_margin, required, true);
        constraints[Id::CardBottom.index()] = Constraint::new(bottom_offset, required, true);
        constraints[Id::CardTopMin.index()] = Constraint::new(0.0, required, true);
        constraints[Id::CardFitContent.index()] =
            Constraint::new(-metrics.content_top_padding, high, true);
        constraints[Id::ContentLeading.index()] =
            Constraint::new(metrics.initial_content_inset, required, true);
        constraints[Id::ContentTrailing.index()] =
            Constraint::new(-metrics.initial_content_inset, required, true);
        constraints[Id::ContentBottom.index()] =
            Constraint::new(-metrics.content_top_padding, required, true);

        Self { constraints }
    }

    #[must_use]
    pub fn get(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id.index()]
    }

    #[must_use]
    pub fn is_active(&self, id: ConstraintId) -> bool {
        self.get(id).active
    }

    #[must_use]
    pub fn constant(&self, id: ConstraintId) -> f64 {
        self.get(id).constant
    }

    /// Activate or deactivate a constraint. Returns `true` if it changed.
    pub fn set_active(&mut self, id: ConstraintId, active: bool) -> bool {
        let slot = &mut self.constraints[id.index()].active;
        let changed = *slot != active;
        *slot = active;
        changed
    }

    /// Rewrite a constraint constant. Returns `true` if it changed.
    pub fn set_constant(&mut self, id: ConstraintId, constant: f64) -> bool {
        let slot = &mut self.constraints[id.index()].constant;
        let changed = *slot != constant;
        *slot = constant;
        changed
    }

    /// Activate `group` and deactivate the other one. Returns `true` if anything changed.
    ///
    /// Deactivation happens first so the set never holds both groups.
    pub fn activate_width_group(&mut self, group: WidthGroup) -> bool {
        let mut changed = false;
        for id in group.other().members() {
            changed |= self.set_active(id, false);
        }
        for id in group.members() {
            changed |= self.set_active(id, true);
        }
        changed
    }

    /// The active width group, or `None` if the set is inconsistent
    /// (both or neither group fully active).
    #[must_use]
    pub fn width_group(&self) -> Option<WidthGroup> {
        let fully_active = |group: WidthGroup| group.members().iter().all(|&id| self.is_active(id));
        let any_active = |group: WidthGroup| group.members().iter().any(|&id| self.is_active(id));

        match (
            fully_active(WidthGroup::EdgePinned),
            fully_active(WidthGroup::Centered),
        ) {
            (true, false) if !any_active(WidthGroup::Centered) => Some(WidthGroup::EdgePinned),
            (false, true) if !any_active(WidthGroup::EdgePinned) => Some(WidthGroup::Centered),
            _ => None,
        }
    }

    /// Iterate over `(id, constraint)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        ConstraintId::ALL
            .iter()
            .map(move |&id| (id, &self.constraints[id.index()]))
    }
}
