//! Gesture-to-decision plumbing for a swipeable card.
//!
//! Raw drag samples flow into a [`GestureController`], which keeps the
//! card's [`OffsetTracker`] in sync while dragging and, on release,
//! classifies the gesture and starts either a fly-out or a snap-back.

pub mod gesture_constants;
pub mod gesture_controller;
pub mod input;
pub mod offset_tracker;
pub mod rotation;
pub mod swipe;

pub use gesture_controller::{GestureConfig, GestureController, GestureState, SwipeCompletion};
pub use input::{GestureHandler, GesturePhase, GestureSample};
pub use offset_tracker::{CardTransform, OffsetTracker};
pub use rotation::RotationMapping;
pub use swipe::{classify, SwipeDecision};

pub mod prelude {
    pub use crate::gesture_controller::{GestureConfig, GestureController, SwipeCompletion};
    pub use crate::input::{GestureHandler, GesturePhase, GestureSample};
    pub use crate::offset_tracker::{CardTransform, OffsetTracker};
    pub use crate::swipe::{classify, SwipeDecision};
}
