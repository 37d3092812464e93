#![forbid(unsafe_code)]

//! The bulletin view controller.
//!
//! [`BulletinViewController`] owns the card, its content stack, the activity
//! indicator and the swipe controller. The host feeds it events, trait and
//! safe-area changes and frame ticks; it answers with a [`BulletinSnapshot`]
//! per frame and a queue of accessibility notifications.
//!
//! Dismissal is owned by the [`BulletinManager`]. The controller only asks for
//! it, through a single funnel gated by the dismissible flag:
//!
//! | Trigger                          | Path                                         |
//! |----------------------------------|----------------------------------------------|
//! | Tap outside the card             | `dismiss_if_possible` → `dismiss_bulletin(true)` |
//! | Accessibility escape / Esc key   | `dismiss_if_possible` → `dismiss_bulletin(true)` |
//! | Swipe released past threshold    | interactive dismissal → `dismiss_bulletin(false)` |
//!
//! # Invariants
//!
//! 1. At most one transition is active; its context completes exactly once.
//! 2. A swipe can only start on a presented, dismissible card with no other
//!    transition running.
//! 3. Exactly one width constraint group is active after any layout pass.
//! 4. The card is a modal accessibility region while on screen.
//!
//! # Failure Modes
//!
//! - Missing or dropped manager: dismissal requests are no-ops and the
//!   presentation backdrop falls back to [`BackgroundStyle::Dimmed`].
//! - The manager is called while the controller is mutably borrowed. A
//!   manager that needs to call back into the controller (typically
//!   `dismiss`) must defer that call until the current one returns.
//! - Overlapping present/dismiss requests are the manager's to serialize;
//!   the controller ignores requests that do not fit its current state.

use std::rc::{Rc, Weak};
use std::time::Duration;

use bulletin_a11y::{
    A11yNode, A11yRole, A11yTraits, A11yTree, AccessibilityAction, ElementId, Notification,
    NotificationQueue,
};
use bulletin_core::color::Rgba;
use bulletin_core::event::{Event, KeyCode, KeyEventKind, PanEvent, PanPhase};
use bulletin_core::geometry::{EdgeInsets, Point, Rect, Size, Transform};
use bulletin_core::size_class::TraitCollection;
use bulletin_layout::{CardLayout, LayoutEngine, LayoutMode};
use tracing::{debug, trace};

use super::activity::ActivityIndicator;
use super::animation::{Easing, Tween};
use super::backdrop::{BackdropState, BackgroundStyle};
use super::container::{BulletinItem, CardContainer, ContentStack};
use super::swipe::{InteractionState, SwipeInteractionController, SwipeResolution};
use super::transition::{
    DismissalAnimator, PresentationAnimator, TransitionContext, TransitionFrame, TransitionKind,
    TransitionOutcome, TransitionStrategy,
};
use crate::config::BulletinConfig;

/// Accessibility element of the card.
pub const CARD_ELEMENT: ElementId = ElementId::new(1);
/// Accessibility element of the activity spinner.
pub const SPINNER_ELEMENT: ElementId = ElementId::new(2);
const FIRST_ITEM_ELEMENT: u64 = 16;

/// The object that owns the bulletin's presentation lifecycle.
pub trait BulletinManager {
    /// Dismiss the current bulletin.
    fn dismiss_bulletin(&self, animated: bool);

    /// Backdrop to show behind the card.
    fn background_style(&self) -> BackgroundStyle;
}

/// Where the card is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationState {
    #[default]
    Hidden,
    Presenting,
    Presented,
    /// Animated or interactive dismissal in flight.
    Dismissing,
    Dismissed,
}

impl PresentationState {
    /// Whether the card is on screen.
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Presenting | Self::Presented | Self::Dismissing)
    }
}

/// What asked for a dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissTrigger {
    Tap,
    Swipe,
    AccessibilityEscape,
    EscapeKey,
    /// `dismiss_if_possible` called directly.
    Programmatic,
}

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletinAction {
    /// The funnel accepted a dismissal and forwarded it to the manager.
    DismissRequested(DismissTrigger),
    /// A dismissal trigger fired while the bulletin is not dismissible.
    DismissRefused(DismissTrigger),
    /// A swipe started tracking.
    SwipeBegan,
    /// A swipe was released (or taken away) and is settling.
    SwipeReleased(InteractionState),
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BulletinSnapshot {
    pub state: PresentationState,
    pub bounds: Rect,
    /// Card frame before `card_transform`.
    pub card_frame: Rect,
    pub card_transform: Transform,
    pub card_alpha: f64,
    pub corner_radius: f64,
    pub card_fill: Rgba,
    pub content_frame: Rect,
    pub item_frames: Vec<Rect>,
    pub content_alpha: f64,
    pub spinner_alpha: f64,
    /// Fraction of a revolution.
    pub spinner_rotation: f64,
    pub backdrop: BackdropState,
}

impl BulletinSnapshot {
    /// Card frame as drawn.
    #[must_use]
    pub fn visual_card_frame(&self) -> Rect {
        self.card_frame.apply(self.card_transform)
    }
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    strategy: TransitionStrategy,
    context: TransitionContext,
}

#[derive(Debug, Clone)]
struct LayoutTransition {
    from: CardLayout,
    tween: Tween,
}

/// Orchestrates one bulletin card.
#[derive(Debug)]
pub struct BulletinViewController {
    config: BulletinConfig,
    layout: LayoutEngine,
    traits: TraitCollection,
    view_size: Size,
    displayed: CardLayout,
    layout_transition: Option<LayoutTransition>,
    card: CardContainer,
    content: ContentStack,
    activity: ActivityIndicator,
    swipe: SwipeInteractionController,
    manager: Option<Weak<dyn BulletinManager>>,
    dismissable: bool,
    state: PresentationState,
    background_style: BackgroundStyle,
    backdrop: BackdropState,
    transition: Option<ActiveTransition>,
    outcomes: Vec<TransitionOutcome>,
    a11y: A11yTree,
    item_elements: Vec<ElementId>,
    notifications: NotificationQueue,
}

impl Default for BulletinViewController {
    fn default() -> Self {
        Self::new(BulletinConfig::default())
    }
}

impl BulletinViewController {
    /// Create a hidden, dismissible bulletin with no manager and no items.
    #[must_use]
    pub fn new(config: BulletinConfig) -> Self {
        let mut a11y = A11yTree::new();
        a11y.insert(
            CARD_ELEMENT,
            A11yNode::new(A11yRole::Group).traits(A11yTraits::MODAL | A11yTraits::HIDDEN),
        );
        a11y.insert(
            SPINNER_ELEMENT,
            A11yNode::new(A11yRole::ProgressIndicator)
                .traits(A11yTraits::HIDDEN | A11yTraits::UPDATES_FREQUENTLY | A11yTraits::BUSY)
                .parent(CARD_ELEMENT),
        );

        Self {
            layout: LayoutEngine::new(config.layout),
            traits: TraitCollection::default(),
            view_size: Size::ZERO,
            displayed: CardLayout::default(),
            layout_transition: None,
            card: CardContainer::new(config.layout.corner_radius, config.card_fill),
            content: ContentStack::new(),
            activity: ActivityIndicator::new(SPINNER_ELEMENT, config.timings.activity_fade),
            swipe: SwipeInteractionController::new(config.swipe, config.timings.dismissal),
            manager: None,
            dismissable: false,
            state: PresentationState::Hidden,
            background_style: BackgroundStyle::default(),
            backdrop: BackdropState::CLEAR,
            transition: None,
            outcomes: Vec::new(),
            a11y,
            item_elements: Vec::new(),
            notifications: NotificationQueue::new(),
            config,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn config(&self) -> &BulletinConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    #[must_use]
    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.layout.mode()
    }

    #[must_use]
    pub fn traits(&self) -> TraitCollection {
        self.traits
    }

    #[must_use]
    pub fn card(&self) -> &CardContainer {
        &self.card
    }

    #[must_use]
    pub fn content(&self) -> &ContentStack {
        &self.content
    }

    #[must_use]
    pub fn activity_indicator(&self) -> &ActivityIndicator {
        &self.activity
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.swipe.state()
    }

    /// Backdrop style captured at the last presentation.
    #[must_use]
    pub fn background_style(&self) -> BackgroundStyle {
        self.background_style
    }

    #[must_use]
    pub fn accessibility_tree(&self) -> &A11yTree {
        &self.a11y
    }

    /// Take pending accessibility notifications, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    // --- Manager ---

    /// Install the manager. Only a weak reference is kept.
    pub fn set_manager(&mut self, manager: &Rc<dyn BulletinManager>) {
        self.manager = Some(Rc::downgrade(manager));
    }

    pub fn clear_manager(&mut self) {
        self.manager = None;
    }

    fn manager(&self) -> Option<Rc<dyn BulletinManager>> {
        self.manager.as_ref().and_then(Weak::upgrade)
    }

    // --- Content ---

    /// Replace the content items.
    pub fn set_items(&mut self, items: Vec<Box<dyn BulletinItem>>) {
        for id in self.item_elements.drain(..) {
            self.a11y.remove(id);
        }
        for (index, item) in items.iter().enumerate() {
            let id = ElementId::new(FIRST_ITEM_ELEMENT + index as u64);
            let mut node = A11yNode::new(A11yRole::Item).parent(CARD_ELEMENT);
            node.label = item.accessibility_label();
            self.a11y.insert(id, node);
            self.item_elements.push(id);
        }
        debug!(count = items.len(), "bulletin items set");
        self.content.set_items(items);
        self.relayout();
    }

    // --- Dismissibility ---

    #[must_use]
    pub fn is_dismissable(&self) -> bool {
        self.dismissable
    }

    pub fn set_dismissable(&mut self, dismissable: bool) {
        self.dismissable = dismissable;
    }

    /// Ask the manager to dismiss the bulletin if it is dismissible.
    ///
    /// Returns `false` without contacting the manager when not dismissible.
    pub fn dismiss_if_possible(&mut self) -> bool {
        self.request_dismissal(DismissTrigger::Programmatic)
    }

    fn request_dismissal(&mut self, trigger: DismissTrigger) -> bool {
        if !self.dismissable {
            debug!(?trigger, "dismissal refused: not dismissable");
            return false;
        }
        match self.manager() {
            Some(manager) => {
                debug!(?trigger, "dismissal requested");
                manager.dismiss_bulletin(true);
            }
            None => debug!(?trigger, "dismissal requested without a manager"),
        }
        true
    }

    fn funnel(&mut self, trigger: DismissTrigger) -> BulletinAction {
        if self.request_dismissal(trigger) {
            BulletinAction::DismissRequested(trigger)
        } else {
            BulletinAction::DismissRefused(trigger)
        }
    }

    // --- Accessibility ---

    /// Perform an action requested by assistive technology.
    pub fn perform_accessibility_action(&mut self, action: AccessibilityAction) -> bool {
        match action {
            AccessibilityAction::Escape => self.accessibility_escape(),
            AccessibilityAction::Activate => false,
        }
    }

    /// The platform escape gesture; routed through the dismissal funnel.
    pub fn accessibility_escape(&mut self) -> bool {
        self.request_dismissal(DismissTrigger::AccessibilityEscape)
    }

    // --- Activity indicator ---

    /// Show the spinner and fade the content out.
    pub fn display_activity_indicator(&mut self) {
        if self.activity.show() {
            self.a11y.set_hidden(SPINNER_ELEMENT, false);
        }
    }

    /// Hide the spinner and restore the content immediately.
    pub fn hide_activity_indicator(&mut self) {
        self.activity.hide();
        self.content.alpha = self.activity.content_alpha();
        self.a11y.set_hidden(SPINNER_ELEMENT, true);
    }

    // --- Layout ---

    /// Resize the hosting view. Takes effect immediately.
    pub fn set_view_size(&mut self, size: Size) {
        if self.view_size == size {
            return;
        }
        self.view_size = size;
        self.layout_transition = None;
        self.relayout();
    }

    /// Recompute the bottom offset for new safe-area insets.
    pub fn safe_area_insets_did_change(&mut self, insets: EdgeInsets) {
        if self.layout.update_safe_area(insets) {
            trace!(bottom = self.layout.bottom_offset(), "bottom offset changed");
        }
        self.relayout();
    }

    /// Switch layout for new traits, animating the card over `duration`.
    ///
    /// Returns `true` if the layout changed.
    pub fn will_transition_to_traits(
        &mut self,
        traits: TraitCollection,
        duration: Duration,
    ) -> bool {
        let from = self.displayed;
        self.traits = traits;
        let changed = self.layout.apply_traits(traits);
        if changed {
            debug!(mode = ?self.layout.mode(), "layout mode applied");
            self.layout_transition = (!duration.is_zero() && !self.view_size.is_empty())
                .then(|| LayoutTransition {
                    from,
                    tween: Tween::new(0.0, 1.0, duration, Easing::EaseInOut),
                });
        }
        self.relayout();
        changed
    }

    fn target_layout(&self) -> CardLayout {
        let spacing = self.layout.spacing();
        self.layout.resolve(self.view_size, |width| {
            self.content.height_for_width(width, spacing)
        })
    }

    fn displayed_layout(&self) -> CardLayout {
        let target = self.target_layout();
        match &self.layout_transition {
            Some(transition) => {
                let t = transition.tween.value();
                CardLayout {
                    card: transition.from.card.lerp(target.card, t),
                    content: transition.from.content.lerp(target.content, t),
                    spacing: target.spacing,
                }
            }
            None => target,
        }
    }

    /// Distance between the resting card and fully below the bottom edge.
    fn travel(&self) -> f64 {
        self.card.frame.height + self.layout.bottom_offset().abs()
    }

    fn relayout(&mut self) {
        self.displayed = self.displayed_layout();
        self.card.frame = self.displayed.card;

        let travel = self.travel();
        if let Some(active) = self.transition.as_mut() {
            match &mut active.strategy {
                TransitionStrategy::Present(animator) => animator.set_travel(travel),
                TransitionStrategy::Dismiss(animator) => animator.set_travel(travel),
                TransitionStrategy::InteractiveDismiss => {}
            }
        }

        self.a11y.set_frame(CARD_ELEMENT, self.displayed.card);
        let frames = self
            .content
            .item_frames(self.displayed.content, self.displayed.spacing);
        for (id, frame) in self.item_elements.iter().zip(frames) {
            self.a11y.set_frame(*id, frame);
        }
        self.a11y.set_frame(SPINNER_ELEMENT, self.displayed.content);
    }

    // --- Transitions ---

    /// Presentation animator for the manager's current background style.
    #[must_use]
    pub fn animation_controller_for_presentation(&self) -> PresentationAnimator {
        let style = self
            .manager()
            .map_or(BackgroundStyle::Dimmed, |manager| manager.background_style());
        PresentationAnimator::new(style, self.config.timings.presentation)
    }

    /// Dismissal animator reversing the last presentation.
    #[must_use]
    pub fn animation_controller_for_dismissal(&self) -> DismissalAnimator {
        DismissalAnimator::new(self.background_style, self.config.timings.dismissal)
    }

    /// The swipe controller, only while it is driving a dismissal.
    #[must_use]
    pub fn interaction_controller_for_dismissal(&self) -> Option<&SwipeInteractionController> {
        self.swipe.is_interaction_in_progress().then_some(&self.swipe)
    }

    /// The driver a dismissal started now would use.
    #[must_use]
    pub fn transition_for_dismissal(&self) -> TransitionStrategy {
        if self.interaction_controller_for_dismissal().is_some() {
            TransitionStrategy::InteractiveDismiss
        } else {
            TransitionStrategy::Dismiss(self.animation_controller_for_dismissal())
        }
    }

    /// Start presenting. Returns `false` if the card is already on screen.
    pub fn present(&mut self) -> bool {
        if self.state.is_visible() {
            debug!(state = ?self.state, "present ignored");
            return false;
        }
        if self.layout.mode().is_none() {
            self.layout.apply_traits(self.traits);
        }
        self.layout_transition = None;
        self.relayout();

        let mut animator = self.animation_controller_for_presentation();
        self.background_style = animator.style();
        let frame = animator.start(self.travel());
        self.apply_frame(frame);

        debug!(style = ?self.background_style, "presentation started");
        self.transition = Some(ActiveTransition {
            strategy: TransitionStrategy::Present(animator),
            context: TransitionContext::new(TransitionKind::Presentation),
        });
        self.state = PresentationState::Presenting;
        self.a11y.set_hidden(CARD_ELEMENT, false);
        true
    }

    /// Start dismissing. Returns `false` if nothing is on screen or a
    /// dismissal is already running.
    ///
    /// A card still presenting is dismissed from where it is.
    pub fn dismiss(&mut self, animated: bool) -> bool {
        if !matches!(
            self.state,
            PresentationState::Presenting | PresentationState::Presented
        ) {
            debug!(state = ?self.state, animated, "dismiss ignored");
            return false;
        }

        let mut fraction = 1.0;
        if let Some(mut active) = self.transition.take()
            && let TransitionStrategy::Present(animator) = &mut active.strategy
        {
            fraction = animator.fraction();
            animator.interrupt(&mut active.context);
            self.record_outcome(&active.context);
        }

        if !animated {
            let mut context = TransitionContext::new(TransitionKind::Dismissal);
            context.complete(true);
            self.record_outcome(&context);
            self.finish_dismissal();
            return true;
        }

        let strategy = match self.transition_for_dismissal() {
            TransitionStrategy::Dismiss(mut animator) => {
                let frame = animator.start_from(self.travel(), fraction);
                self.apply_frame(frame);
                TransitionStrategy::Dismiss(animator)
            }
            other => other,
        };
        debug!(kind = ?strategy.kind(), "dismissal started");
        self.transition = Some(ActiveTransition {
            context: TransitionContext::new(strategy.kind()),
            strategy,
        });
        self.state = PresentationState::Dismissing;
        true
    }

    /// Put the card back at its resting position.
    pub fn reset_content_view(&mut self) {
        self.card.reset_transform();
    }

    fn apply_frame(&mut self, frame: TransitionFrame) {
        self.card.transform = Transform::translation(0.0, frame.card_offset);
        self.backdrop = frame.backdrop;
    }

    fn record_outcome(&mut self, context: &TransitionContext) {
        if let Some(outcome) = context.outcome() {
            self.outcomes.push(outcome);
        }
    }

    fn finish_presentation(&mut self) {
        self.state = PresentationState::Presented;
        self.reset_content_view();
        self.backdrop = self.background_style.at(1.0);
        self.notifications.post(Notification::ScreenChanged {
            focus: Some(CARD_ELEMENT),
        });
        debug!("bulletin presented");
    }

    fn finish_dismissal(&mut self) {
        self.state = PresentationState::Dismissed;
        self.card.transform = Transform::translation(0.0, self.travel());
        self.backdrop = BackdropState::CLEAR;
        self.a11y.set_hidden(CARD_ELEMENT, true);
        self.notifications.post(Notification::ScreenChanged { focus: None });
        debug!("bulletin dismissed");
    }

    // --- Events ---

    /// Handle one input event.
    pub fn handle_event(&mut self, event: &Event) -> Option<BulletinAction> {
        if !self.state.is_visible() {
            return None;
        }
        match event {
            Event::Tap(tap) => {
                if self.card.visual_frame().contains(tap.location) {
                    return None;
                }
                Some(self.funnel(DismissTrigger::Tap))
            }
            Event::Pan(pan) => self.handle_pan(pan),
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Escape {
                    Some(self.funnel(DismissTrigger::EscapeKey))
                } else {
                    None
                }
            }
        }
    }

    fn handle_pan(&mut self, pan: &PanEvent) -> Option<BulletinAction> {
        match pan.phase {
            PanPhase::Began => self.begin_swipe(pan.location),
            PanPhase::Changed => {
                if self.swipe.state() != InteractionState::Tracking {
                    return None;
                }
                self.swipe.update(pan.translation.y);
                self.apply_interactive_frame();
                None
            }
            PanPhase::Ended => {
                let state = self.swipe.end(pan.translation.y, pan.velocity.y)?;
                self.apply_interactive_frame();
                Some(BulletinAction::SwipeReleased(state))
            }
            PanPhase::Cancelled => {
                if self.swipe.state() != InteractionState::Tracking {
                    return None;
                }
                self.swipe.cancel();
                Some(BulletinAction::SwipeReleased(self.swipe.state()))
            }
        }
    }

    fn begin_swipe(&mut self, location: Point) -> Option<BulletinAction> {
        if !self.card.visual_frame().contains(location) {
            return None;
        }
        if self.state != PresentationState::Presented || self.transition.is_some() {
            trace!(state = ?self.state, "swipe ignored during transition");
            return None;
        }
        if !self.dismissable {
            debug!("swipe refused: not dismissable");
            return Some(BulletinAction::DismissRefused(DismissTrigger::Swipe));
        }
        if !self.swipe.begin(location, self.travel()) {
            return None;
        }

        let strategy = self.transition_for_dismissal();
        self.transition = Some(ActiveTransition {
            context: TransitionContext::new(strategy.kind()),
            strategy,
        });
        self.state = PresentationState::Dismissing;
        Some(BulletinAction::SwipeBegan)
    }

    fn apply_interactive_frame(&mut self) {
        let frame = TransitionFrame {
            card_offset: self.swipe.card_offset(),
            backdrop: self.background_style.at(1.0 - self.swipe.progress()),
        };
        self.apply_frame(frame);
    }

    fn resolve_swipe(&mut self, resolution: SwipeResolution) {
        let finished = resolution == SwipeResolution::Completed;
        if let Some(mut active) = self.transition.take() {
            active.context.complete(finished);
            self.record_outcome(&active.context);
        }
        if finished {
            self.finish_dismissal();
            if let Some(manager) = self.manager() {
                manager.dismiss_bulletin(false);
            }
        } else {
            self.state = PresentationState::Presented;
            self.reset_content_view();
            self.backdrop = self.background_style.at(1.0);
            debug!("swipe returned card to rest");
        }
    }

    // --- Frame ---

    /// Advance every animation by `delta`.
    ///
    /// Returns the transitions that completed since the previous tick,
    /// oldest first.
    pub fn tick(&mut self, delta: Duration) -> Vec<TransitionOutcome> {
        self.activity.tick(delta, &mut self.notifications);
        self.content.alpha = self.activity.content_alpha();

        if let Some(transition) = self.layout_transition.as_mut()
            && transition.tween.tick(delta)
        {
            self.layout_transition = None;
        }
        self.relayout();

        if self.swipe.is_interaction_in_progress() {
            let resolution = self.swipe.tick(delta);
            self.apply_interactive_frame();
            if let Some(resolution) = resolution {
                self.resolve_swipe(resolution);
            }
        } else {
            self.tick_animator(delta);
        }

        std::mem::take(&mut self.outcomes)
    }

    fn tick_animator(&mut self, delta: Duration) {
        let Some(active) = self.transition.as_mut() else {
            return;
        };
        let frame = match &mut active.strategy {
            TransitionStrategy::Present(animator) => animator.tick(delta, &mut active.context),
            TransitionStrategy::Dismiss(animator) => animator.tick(delta, &mut active.context),
            TransitionStrategy::InteractiveDismiss => return,
        };
        let outcome = active.context.outcome();
        self.apply_frame(frame);

        if let Some(outcome) = outcome {
            self.transition = None;
            self.outcomes.push(outcome);
            match outcome.kind {
                TransitionKind::Presentation => self.finish_presentation(),
                TransitionKind::Dismissal | TransitionKind::InteractiveDismissal => {
                    self.finish_dismissal();
                }
            }
        }
    }

    /// The current frame.
    #[must_use]
    pub fn snapshot(&self) -> BulletinSnapshot {
        BulletinSnapshot {
            state: self.state,
            bounds: Rect::from_size(self.view_size),
            card_frame: self.card.frame,
            card_transform: self.card.transform,
            card_alpha: self.card.alpha,
            corner_radius: self.card.corner_radius,
            card_fill: self.card.fill,
            content_frame: self.displayed.content,
            item_frames: self
                .content
                .item_frames(self.displayed.content, self.displayed.spacing),
            content_alpha: self.content.alpha,
            spinner_alpha: self.activity.spinner_alpha(),
            spinner_rotation: self.activity.rotation(),
            backdrop: self.backdrop,
        }
    }
}
