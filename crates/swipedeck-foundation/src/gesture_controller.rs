//! Drag state machine for the active card.
//!
//! ```text
//! Idle --start--> Dragging --move--> Dragging
//! Dragging --release--> Idle  (+ fly-out or snap-back)
//! ```

use std::cell::Cell;
use std::rc::Rc;

use swipedeck_animation::{AnimationSpec, AnimationType, SpringSpec};
use swipedeck_ui_graphics::Point;

use crate::gesture_constants::{FLY_OUT_DURATION_MILLIS, SWIPE_THRESHOLD_FRACTION};
use crate::input::GestureHandler;
use crate::{classify, OffsetTracker, SwipeDecision};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging,
}

/// Release handling parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Distance a card travels horizontally when it flies out.
    pub fly_out_distance: f32,
    /// Horizontal displacement a release must exceed to be a swipe.
    pub swipe_threshold: f32,
    pub fly_out: AnimationSpec,
    pub snap_back: SpringSpec,
}

impl GestureConfig {
    /// Reference configuration: threshold at a quarter of the viewport,
    /// a linear 250ms fly-out to one full viewport width.
    pub fn for_viewport(viewport_width: f32) -> Self {
        Self {
            fly_out_distance: viewport_width,
            swipe_threshold: viewport_width * SWIPE_THRESHOLD_FRACTION,
            fly_out: AnimationSpec::linear(FLY_OUT_DURATION_MILLIS),
            snap_back: SpringSpec::snap_back(),
        }
    }
}

/// Receives the outcome of an accepted swipe once its fly-out lands.
///
/// The controller calls [`SwipeCompletion::swiped`], resets the card's
/// offset, then calls [`SwipeCompletion::advance`], all within one UI task.
pub trait SwipeCompletion {
    fn swiped(&self, decision: SwipeDecision);
    fn advance(&self);
}

/// Owns the active card's [`OffsetTracker`] and turns drag samples into
/// offset updates and, on release, a settle animation.
pub struct GestureController {
    state: GestureState,
    tracker: OffsetTracker,
    config: GestureConfig,
    completion: Rc<dyn SwipeCompletion>,
    /// Set from release until the fly-out continuation runs.
    in_flight: Rc<Cell<Option<SwipeDecision>>>,
}

impl GestureController {
    pub fn new(
        tracker: OffsetTracker,
        config: GestureConfig,
        completion: Rc<dyn SwipeCompletion>,
    ) -> Self {
        Self {
            state: GestureState::Idle,
            tracker,
            config,
            completion,
            in_flight: Rc::new(Cell::new(None)),
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn tracker(&self) -> &OffsetTracker {
        &self.tracker
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The accepted swipe whose fly-out has not landed yet.
    pub fn pending_swipe(&self) -> Option<SwipeDecision> {
        self.in_flight.get()
    }

    /// True while the card is flying out or springing back.
    pub fn is_settling(&self) -> bool {
        self.in_flight.get().is_some() || self.tracker.is_animating()
    }

    /// Drop any gesture and transition, leaving the card at rest.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.in_flight.set(None);
        self.tracker.reset();
    }

    fn fly_out(&self, decision: SwipeDecision) {
        let target = Point::new(decision.sign() * self.config.fly_out_distance, 0.0);
        self.in_flight.set(Some(decision));

        let tracker = self.tracker.clone();
        let completion = Rc::clone(&self.completion);
        let in_flight = Rc::clone(&self.in_flight);
        self.tracker.animate_to_then(
            target,
            AnimationType::Tween(self.config.fly_out),
            move || {
                log::debug!("fly-out {decision:?} landed");
                completion.swiped(decision);
                tracker.reset();
                in_flight.set(None);
                completion.advance();
            },
        );
    }

    fn snap_back(&self) {
        self.tracker
            .animate_to(Point::ZERO, AnimationType::Spring(self.config.snap_back));
    }
}

impl Drop for GestureController {
    /// The fly-out continuation holds a tracker clone, which keeps the
    /// offset alive through its own end listener. Cancelling here breaks
    /// that cycle so no completion outlives the controller.
    fn drop(&mut self) {
        if let Some(decision) = self.in_flight.take() {
            log::debug!("controller dropped during {decision:?} fly-out; completion discarded");
        }
        self.tracker.reset();
    }
}

impl GestureHandler for GestureController {
    /// Always accepts. While a committed fly-out is still landing the
    /// gesture is accepted but its samples are ignored.
    fn on_gesture_start(&mut self) -> bool {
        if let Some(decision) = self.in_flight.get() {
            log::debug!("gesture started during {decision:?} fly-out; ignoring its samples");
            return true;
        }
        log::debug!("gesture start: {:?} -> Dragging", self.state);
        self.state = GestureState::Dragging;
        true
    }

    fn on_gesture_move(&mut self, dx: f32, dy: f32) {
        if self.state != GestureState::Dragging {
            log::debug!("move sample ({dx}, {dy}) outside a gesture ignored");
            return;
        }
        if !dx.is_finite() || !dy.is_finite() {
            log::debug!("non-finite move sample ({dx}, {dy}) ignored");
            return;
        }
        self.tracker.set_immediate(dx, dy);
    }

    fn on_gesture_release(&mut self, dx: f32, dy: f32) -> Option<SwipeDecision> {
        if self.state != GestureState::Dragging {
            log::debug!("release sample ({dx}, {dy}) outside a gesture ignored");
            return None;
        }
        self.state = GestureState::Idle;

        if dx.is_finite() && dy.is_finite() {
            self.tracker.set_immediate(dx, dy);
        }
        let final_dx = self.tracker.offset().x;
        let decision = classify(final_dx, self.config.swipe_threshold);
        log::debug!(
            "release at dx {final_dx} (threshold {}): {decision:?}",
            self.config.swipe_threshold
        );

        if decision.is_accepted() {
            self.fly_out(decision);
        } else {
            self.snap_back();
        }
        Some(decision)
    }
}

#[cfg(test)]
#[path = "tests/gesture_controller_tests.rs"]
mod tests;
