use swipedeck_ui_graphics::Point;

use crate::SwipeDecision;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Start,
    Move,
    Release,
}

/// One sample from the gesture-capture layer.
///
/// `delta` is the cumulative displacement since the gesture started, not
/// the change since the previous sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub delta: Point,
}

impl GestureSample {
    pub fn start() -> Self {
        Self {
            phase: GesturePhase::Start,
            delta: Point::ZERO,
        }
    }

    pub fn moved(dx: f32, dy: f32) -> Self {
        Self {
            phase: GesturePhase::Move,
            delta: Point::new(dx, dy),
        }
    }

    pub fn release(dx: f32, dy: f32) -> Self {
        Self {
            phase: GesturePhase::Release,
            delta: Point::new(dx, dy),
        }
    }
}

/// Receiver of single-pointer drag gestures.
///
/// Samples for one gesture arrive in order: one start, any number of
/// moves, one release.
pub trait GestureHandler {
    /// Returns whether the handler takes ownership of the gesture.
    fn on_gesture_start(&mut self) -> bool;

    fn on_gesture_move(&mut self, dx: f32, dy: f32);

    /// Returns the decision taken for the gesture, or `None` when the
    /// sample was not consumed.
    fn on_gesture_release(&mut self, dx: f32, dy: f32) -> Option<SwipeDecision>;

    /// Routes a sample to the matching callback. Returns whether the
    /// sample was consumed.
    fn dispatch(&mut self, sample: GestureSample) -> bool {
        match sample.phase {
            GesturePhase::Start => self.on_gesture_start(),
            GesturePhase::Move => {
                self.on_gesture_move(sample.delta.x, sample.delta.y);
                true
            }
            GesturePhase::Release => self
                .on_gesture_release(sample.delta.x, sample.delta.y)
                .is_some(),
        }
    }
}
