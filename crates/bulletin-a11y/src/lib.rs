#![forbid(unsafe_code)]

//! Accessibility layer for bulletin cards.
//!
//! Hosts bridge this to the platform's assistive technology. The layer keeps:
//!
//! - an [`A11yTree`] of elements (the card, the content items, the spinner),
//!   each with a role, optional label, frame and [`A11yTraits`];
//! - a [`NotificationQueue`] of [`Notification`]s to post (focus moves,
//!   layout changes, announcements), drained by the host each frame.
//!
//! # Invariants
//!
//! 1. An element flagged [`A11yTraits::MODAL`] hides its siblings from
//!    assistive technology: [`A11yTree::visible_elements`] returns only the
//!    modal subtree while such an element exists.
//! 2. Hidden elements, and their descendants, never appear in
//!    `visible_elements`.
//! 3. Notifications are delivered in posting order, each exactly once.

use ahash::AHashMap;
use bitflags::bitflags;
use bulletin_core::geometry::Rect;

/// Stable identifier of an accessibility element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Semantic role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum A11yRole {
    /// A container grouping other elements (the card).
    Group,
    /// Static or interactive content item.
    Item,
    /// Busy/progress indicator.
    ProgressIndicator,
}

bitflags! {
    /// Accessibility traits of an element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct A11yTraits: u8 {
        /// Element is a modal region: siblings are ignored while it is present.
        const MODAL               = 0b0000_0001;
        /// Element is not exposed to assistive technology.
        const HIDDEN              = 0b0000_0010;
        /// Element's value changes often (spinner); don't announce every change.
        const UPDATES_FREQUENTLY  = 0b0000_0100;
        /// Element reports busy state.
        const BUSY                = 0b0000_1000;
    }
}

/// A node in the accessibility tree.
#[derive(Debug, Clone, PartialEq)]
pub struct A11yNode {
    pub role: A11yRole,
    pub label: Option<String>,
    pub frame: Rect,
    pub traits: A11yTraits,
    pub parent: Option<ElementId>,
}

impl A11yNode {
    #[must_use]
    pub fn new(role: A11yRole) -> Self {
        Self {
            role,
            label: None,
            frame: Rect::ZERO,
            traits: A11yTraits::empty(),
            parent: None,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn traits(mut self, traits: A11yTraits) -> Self {
        self.traits = traits;
        self
    }

    #[must_use]
    pub fn parent(mut self, parent: ElementId) -> Self {
        self.parent = Some(parent);
        self
    }

    #[inline]
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.traits.contains(A11yTraits::HIDDEN)
    }
}

/// Flat accessibility tree keyed by [`ElementId`].
#[derive(Debug, Clone, Default)]
pub struct A11yTree {
    nodes: AHashMap<ElementId, A11yNode>,
}

impl A11yTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a node.
    pub fn insert(&mut self, id: ElementId, node: A11yNode) {
        self.nodes.insert(id, node);
    }

    /// Remove a node and every node parented to it.
    pub fn remove(&mut self, id: ElementId) -> Option<A11yNode> {
        let removed = self.nodes.remove(&id)?;
        let children: Vec<ElementId> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.parent == Some(id))
            .map(|(&child, _)| child)
            .collect();
        for child in children {
            self.remove(child);
        }
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&A11yNode> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut A11yNode> {
        self.nodes.get_mut(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Set or clear the hidden trait. Returns `false` if the element is unknown.
    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.traits.set(A11yTraits::HIDDEN, hidden);
                true
            }
            None => false,
        }
    }

    /// Update an element's frame. Returns `false` if the element is unknown.
    pub fn set_frame(&mut self, id: ElementId, frame: Rect) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.frame = frame;
                true
            }
            None => false,
        }
    }

    /// The modal root, if any element carries [`A11yTraits::MODAL`].
    #[must_use]
    pub fn modal_root(&self) -> Option<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.traits.contains(A11yTraits::MODAL) && !node.is_hidden())
            .map(|(&id, _)| id)
            .min()
    }

    fn is_descendant_of(&self, mut id: ElementId, ancestor: ElementId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.nodes.get(&id).and_then(|node| node.parent) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn has_hidden_ancestor(&self, id: ElementId) -> bool {
        let mut parent = self.nodes.get(&id).and_then(|node| node.parent);
        while let Some(current) = parent {
            match self.nodes.get(&current) {
                Some(node) if node.is_hidden() => return true,
                Some(node) => parent = node.parent,
                None => return false,
            }
        }
        false
    }

    /// Elements exposed to assistive technology, sorted by id.
    ///
    /// Hiding an element hides its descendants. While a modal root exists,
    /// only it and its descendants are exposed.
    #[must_use]
    pub fn visible_elements(&self) -> Vec<ElementId> {
        let modal = self.modal_root();
        let mut ids: Vec<ElementId> = self
            .nodes
            .iter()
            .filter(|&(&id, node)| !node.is_hidden() && !self.has_hidden_ancestor(id))
            .filter(|&(&id, _)| modal.is_none_or(|root| self.is_descendant_of(id, root)))
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

/// Actions assistive technology can ask an element to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessibilityAction {
    /// The platform "escape" / dismiss gesture (two-finger Z scrub).
    Escape,
    /// Activate the focused element.
    Activate,
}

/// Notifications posted to assistive technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The screen changed substantially; move focus to `focus` (or the first element).
    ScreenChanged { focus: Option<ElementId> },
    /// The layout changed; re-read the focused element.
    LayoutChanged { focus: Option<ElementId> },
    /// Speak a message.
    Announcement(String),
}

/// FIFO of notifications waiting for the host to post them.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, notification: Notification) {
        self.pending.push(notification);
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
