#![forbid(unsafe_code)]

//! Bottom-card bulletin.
//!
//! A bulletin is a rounded card that slides up from the bottom of the screen
//! over a dimmed or blurred backdrop. It can be dismissed by tapping outside
//! it, by swiping it down, or by the accessibility escape gesture, each gated
//! by a dismissible flag and routed through an external [`BulletinManager`].
//!
//! # Structure
//!
//! - [`BulletinViewController`]: the orchestrator the host talks to.
//! - [`SwipeInteractionController`]: drives interactive swipe-to-dismiss.
//! - [`PresentationAnimator`] / [`DismissalAnimator`]: non-interactive slides.
//! - [`ActivityIndicator`]: busy spinner cross-faded against the content.
//! - [`CardContainer`] / [`ContentStack`]: the card and its items.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use bulletin_core::geometry::Size;
//! use bulletin_widgets::bulletin::{BulletinViewController, FixedItem, PresentationState};
//!
//! let mut bulletin = BulletinViewController::default();
//! bulletin.set_view_size(Size::new(375.0, 812.0));
//! bulletin.set_items(vec![Box::new(FixedItem::new(120.0))]);
//! bulletin.set_dismissable(true);
//! bulletin.present();
//! while bulletin.state() == PresentationState::Presenting {
//!     bulletin.tick(Duration::from_millis(16));
//! }
//! assert_eq!(bulletin.state(), PresentationState::Presented);
//! ```

pub mod activity;
pub mod animation;
pub mod backdrop;
pub mod container;
pub mod controller;
pub mod swipe;
pub mod transition;

pub use activity::{ActivityIndicator, ActivityPhase};
pub use animation::{Easing, Tween};
pub use backdrop::{BackdropConfig, BackdropState, BackgroundStyle, BlurStyle};
pub use container::{BulletinItem, CARD_FILL, CardContainer, ContentStack, FixedItem};
pub use controller::{
    BulletinAction, BulletinManager, BulletinSnapshot, BulletinViewController, CARD_ELEMENT,
    DismissTrigger, PresentationState, SPINNER_ELEMENT,
};
pub use swipe::{InteractionState, SwipeConfig, SwipeInteractionController, SwipeResolution};
pub use transition::{
    DismissalAnimator, PresentationAnimator, TransitionContext, TransitionFrame, TransitionKind,
    TransitionOutcome, TransitionStrategy,
};
