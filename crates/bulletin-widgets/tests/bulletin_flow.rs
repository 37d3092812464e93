//! End-to-end bulletin flows driven the way a host would drive them: a
//! manager that queues dismissal requests, an event feed and a frame loop
//! paced by a [`FrameClock`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use bulletin_a11y::Notification;
use bulletin_core::clock::{FrameClock, Instant};
use bulletin_core::event::{Event, KeyCode, KeyEvent, PanEvent, TapEvent};
use bulletin_core::geometry::{EdgeInsets, Point, Size};
use bulletin_core::size_class::TraitCollection;
use bulletin_widgets::bulletin::{
    BackgroundStyle, BlurStyle, BulletinAction, BulletinManager, BulletinViewController,
    CARD_ELEMENT, DismissTrigger, FixedItem, InteractionState, PresentationState,
    SPINNER_ELEMENT, TransitionKind, TransitionOutcome,
};
use bulletin_widgets::BulletinConfig;

const FRAME: Duration = Duration::from_millis(16);
const PHONE: Size = Size::new(390.0, 844.0);

/// Records every request and keeps them for the host loop to apply.
#[derive(Default)]
struct RecordingManager {
    style: Cell<BackgroundStyle>,
    requests: RefCell<Vec<bool>>,
    total: Cell<usize>,
}

impl BulletinManager for RecordingManager {
    fn dismiss_bulletin(&self, animated: bool) {
        self.total.set(self.total.get() + 1);
        self.requests.borrow_mut().push(animated);
    }

    fn background_style(&self) -> BackgroundStyle {
        self.style.get()
    }
}

struct Host {
    manager: Rc<RecordingManager>,
    bulletin: BulletinViewController,
    outcomes: Vec<TransitionOutcome>,
    clock: FrameClock,
    now: Instant,
}

impl Host {
    fn new(config: BulletinConfig) -> Self {
        let manager = Rc::new(RecordingManager::default());
        let handle: Rc<dyn BulletinManager> = manager.clone();
        let mut bulletin = BulletinViewController::new(config);
        bulletin.set_manager(&handle);
        bulletin.set_dismissable(true);
        bulletin.set_view_size(PHONE);
        bulletin.safe_area_insets_did_change(EdgeInsets::new(47.0, 0.0, 34.0, 0.0));
        bulletin.will_transition_to_traits(TraitCollection::phone_portrait(), Duration::ZERO);
        bulletin.set_items(vec![
            Box::new(FixedItem::new(44.0).label("Turn on notifications")),
            Box::new(FixedItem::new(88.0).label("Stay up to date")),
            Box::new(FixedItem::new(50.0).label("Allow")),
        ]);
        let mut clock = FrameClock::new();
        let now = Instant::now();
        assert_eq!(clock.tick_at(now), Duration::ZERO);
        Self {
            manager,
            bulletin,
            outcomes: Vec::new(),
            clock,
            now,
        }
    }

    /// Apply queued manager requests, as a manager would after the current
    /// callback returns.
    fn apply_requests(&mut self) {
        let requests: Vec<bool> = self.manager.requests.borrow_mut().drain(..).collect();
        for animated in requests {
            self.bulletin.dismiss(animated);
        }
    }

    fn send(&mut self, event: Event) -> Option<BulletinAction> {
        let action = self.bulletin.handle_event(&event);
        self.apply_requests();
        action
    }

    fn frames(&mut self, count: usize) {
        for _ in 0..count {
            self.now += FRAME;
            let delta = self.clock.tick_at(self.now);
            let outcomes = self.bulletin.tick(delta);
            self.outcomes.extend(outcomes);
            self.apply_requests();
        }
    }

    fn present(&mut self) {
        assert!(self.bulletin.present());
        self.frames(60);
        assert_eq!(self.bulletin.state(), PresentationState::Presented);
        self.outcomes.clear();
        self.bulletin.drain_notifications();
    }

    fn card_point(&self) -> Point {
        let card = self.bulletin.snapshot().visual_card_frame();
        Point::new(card.center_x(), card.y + card.height / 2.0)
    }

    fn travel(&self) -> f64 {
        self.bulletin.card().frame.height + 34.0
    }
}

#[test]
fn tap_outside_dismisses_with_animation() {
    let mut host = Host::new(BulletinConfig::default());
    host.present();

    let action = host.send(Event::Tap(TapEvent::new(Point::new(20.0, 100.0))));
    assert_eq!(
        action,
        Some(BulletinAction::DismissRequested(DismissTrigger::Tap))
    );
    assert_eq!(host.manager.total.get(), 1);
    assert_eq!(host.bulletin.state(), PresentationState::Dismissing);

    host.frames(40);
    assert_eq!(host.bulletin.state(), PresentationState::Dismissed);
    assert_eq!(
        host.outcomes,
        vec![TransitionOutcome {
            kind: TransitionKind::Dismissal,
            finished: true,
        }]
    );
    assert_eq!(
        host.bulletin.drain_notifications(),
        vec![Notification::ScreenChanged { focus: None }]
    );
}

#[test]
fn non_dismissible_bulletin_ignores_every_trigger() {
    let mut host = Host::new(BulletinConfig::default());
    host.present();
    host.bulletin.set_dismissable(false);

    host.send(Event::Tap(TapEvent::new(Point::new(20.0, 100.0))));
    host.send(Event::Key(KeyEvent::press(KeyCode::Escape)));
    assert!(!host.bulletin.accessibility_escape());
    assert!(!host.bulletin.dismiss_if_possible());
    let point = host.card_point();
    assert_eq!(
        host.send(Event::Pan(PanEvent::began(point))),
        Some(BulletinAction::DismissRefused(DismissTrigger::Swipe))
    );

    host.frames(30);
    assert_eq!(host.manager.total.get(), 0);
    assert_eq!(host.bulletin.state(), PresentationState::Presented);
}

#[test]
fn swipe_past_half_dismisses() {
    let mut host = Host::new(BulletinConfig::default());
    host.present();
    let start = host.card_point();
    let travel = host.travel();

    assert_eq!(
        host.send(Event::Pan(PanEvent::began(start))),
        Some(BulletinAction::SwipeBegan)
    );
    for step in 1..=7 {
        let dy = travel * f64::from(step) / 10.0;
        host.send(Event::Pan(PanEvent::changed(start, dy, 200.0)));
    }
    let mid = host.bulletin.snapshot();
    assert!((mid.card_transform.ty - travel * 0.7).abs() < 1e-9);
    assert!((mid.backdrop.tint.opacity - 0.6 * 0.3).abs() < 1e-9);

    assert_eq!(
        host.send(Event::Pan(PanEvent::ended(start, travel * 0.7, 200.0))),
        Some(BulletinAction::SwipeReleased(InteractionState::Completing))
    );
    host.frames(40);

    assert_eq!(host.bulletin.state(), PresentationState::Dismissed);
    assert_eq!(
        host.outcomes,
        vec![TransitionOutcome {
            kind: TransitionKind::InteractiveDismissal,
            finished: true,
        }]
    );
    assert_eq!(host.manager.total.get(), 1, "one non-animated finish request");
}

#[test]
fn flick_dismisses_from_small_drag() {
    let mut host = Host::new(BulletinConfig::default());
    host.present();
    let start = host.card_point();
    let travel = host.travel();

    host.send(Event::Pan(PanEvent::began(start)));
    host.send(Event::Pan(PanEvent::changed(start, travel * 0.1, 1_200.0)));
    assert_eq!(
        host.send(Event::Pan(PanEvent::ended(start, travel * 0.1, 1_200.0))),
        Some(BulletinAction::SwipeReleased(InteractionState::Completing))
    );
    host.frames(40);
    assert_eq!(host.bulletin.state(), PresentationState::Dismissed);
}

#[test]
fn short_drag_springs_back_and_can_swipe_again() {
    let mut host = Host::new(BulletinConfig::default());
    host.present();
    let start = host.card_point();
    let travel = host.travel();

    host.send(Event::Pan(PanEvent::began(start)));
    host.send(Event::Pan(PanEvent::changed(start, travel * 0.3, 100.0)));
    assert_eq!(
        host.send(Event::Pan(PanEvent::ended(start, travel * 0.3, 100.0))),
        Some(BulletinAction::SwipeReleased(InteractionState::Cancelling))
    );
    host.frames(40);

    assert_eq!(host.bulletin.state(), PresentationState::Presented);
    assert_eq!(host.bulletin.interaction_state(), InteractionState::Idle);
    assert!(host.bulletin.snapshot().card_transform.is_identity());
    assert_eq!(host.manager.total.get(), 0);
    assert_eq!(host.outcomes.len(), 1);
    assert!(!host.outcomes[0].finished);

    assert_eq!(
        host.send(Event::Pan(PanEvent::began(start))),
        Some(BulletinAction::SwipeBegan)
    );
}

#[test]
fn dragging_far_past_travel_caps_the_card() {
    let mut host = Host::new(BulletinConfig::default());
    host.present();
    let start = host.card_point();
    let travel = host.travel();

    host.send(Event::Pan(PanEvent::began(start)));
    host.send(Event::Pan(PanEvent::changed(start, travel * 5.0, 0.0)));
    assert_eq!(host.bulletin.snapshot().card_transform.ty, travel);
    host.send(Event::Pan(PanEvent::changed(start, -travel, 0.0)));
    assert_eq!(host.bulletin.snapshot().card_transform.ty, 0.0);
}

#[test]
fn blurred_style_is_used_for_both_directions() {
    let mut host = Host::new(BulletinConfig::default());
    host.manager.style.set(BackgroundStyle::Blurred(BlurStyle::ExtraLight));
    host.present();
    let shown = host.bulletin.snapshot().backdrop;
    assert_eq!(shown.blur, 1.0);
    assert!((shown.tint.opacity - 0.6).abs() < 1e-12);

    host.bulletin.dismiss(true);
    host.frames(10);
    let fading = host.bulletin.snapshot().backdrop;
    assert!(fading.blur > 0.0 && fading.blur < 1.0);
    host.frames(30);
    assert!(host.bulletin.snapshot().backdrop.is_clear());
}

#[test]
fn activity_indicator_cycle() {
    let mut host = Host::new(BulletinConfig::default());
    host.present();

    host.bulletin.display_activity_indicator();
    host.frames(5);
    let mid = host.bulletin.snapshot();
    assert!((mid.spinner_alpha + mid.content_alpha - 1.0).abs() < 1e-12);

    host.frames(20);
    assert_eq!(
        host.bulletin.drain_notifications(),
        vec![Notification::ScreenChanged {
            focus: Some(SPINNER_ELEMENT)
        }]
    );

    host.bulletin.hide_activity_indicator();
    let after = host.bulletin.snapshot();
    assert_eq!(after.spinner_alpha, 0.0);
    assert_eq!(after.content_alpha, 1.0);
}

#[test]
fn rotation_to_regular_recenters_card() {
    let mut host = Host::new(BulletinConfig::default());
    host.present();

    host.bulletin.set_view_size(Size::new(1024.0, 1366.0));
    host.bulletin
        .safe_area_insets_did_change(EdgeInsets::new(24.0, 0.0, 20.0, 0.0));
    assert!(
        host.bulletin
            .will_transition_to_traits(TraitCollection::tablet(), Duration::from_millis(300))
    );
    host.frames(25);

    let snapshot = host.bulletin.snapshot();
    assert_eq!(snapshot.card_frame.width, 444.0);
    assert_eq!(snapshot.card_frame.center_x(), 512.0);
    assert_eq!(snapshot.card_frame.bottom(), 1366.0 - 20.0);
    assert_eq!(snapshot.content_frame.x - snapshot.card_frame.x, 32.0);
}

#[test]
fn configured_thresholds_are_honoured() {
    let mut config = BulletinConfig::default();
    config.swipe.completion_threshold = 0.25;
    config.swipe.velocity_threshold = 5_000.0;
    let mut host = Host::new(config);
    host.present();
    let start = host.card_point();
    let travel = host.travel();

    host.send(Event::Pan(PanEvent::began(start)));
    assert_eq!(
        host.send(Event::Pan(PanEvent::ended(start, travel * 0.3, 1_200.0))),
        Some(BulletinAction::SwipeReleased(InteractionState::Completing))
    );
}

#[test]
fn stalled_frame_is_capped_by_clock() {
    let mut host = Host::new(BulletinConfig::default());
    assert!(host.bulletin.present());
    host.now += Duration::from_secs(10);
    let delta = host.clock.tick_at(host.now);
    assert_eq!(delta, Duration::from_millis(100));
    host.bulletin.tick(delta);
    assert_eq!(host.bulletin.state(), PresentationState::Presenting);
}

#[test]
fn presentation_focuses_card() {
    let mut host = Host::new(BulletinConfig::default());
    assert!(host.bulletin.present());
    host.frames(60);
    assert_eq!(
        host.bulletin.drain_notifications(),
        vec![Notification::ScreenChanged {
            focus: Some(CARD_ELEMENT)
        }]
    );
}
