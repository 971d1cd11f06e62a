//! Scripted drags for driving a [`GestureHandler`] from tests.

use swipedeck_foundation::{GestureHandler, SwipeDecision};

/// Start a gesture and move towards `(dx, dy)` in `steps` evenly spaced
/// samples, without releasing. Returns whether the handler accepted it.
pub fn drag<H: GestureHandler + ?Sized>(handler: &mut H, dx: f32, dy: f32, steps: usize) -> bool {
    if !handler.on_gesture_start() {
        return false;
    }
    let steps = steps.max(1);
    for step in 1..=steps {
        let fraction = step as f32 / steps as f32;
        handler.on_gesture_move(dx * fraction, dy * fraction);
    }
    true
}

/// [`drag`] followed by a release at `(dx, dy)`.
///
/// The release is sent even when the start was refused, matching a host
/// that forwards every sample it sees.
pub fn drag_and_release<H: GestureHandler + ?Sized>(
    handler: &mut H,
    dx: f32,
    dy: f32,
    steps: usize,
) -> Option<SwipeDecision> {
    drag(handler, dx, dy, steps);
    handler.on_gesture_release(dx, dy)
}
