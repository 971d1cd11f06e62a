use std::rc::Rc;

use swipedeck_animation::{Animatable, AnimationType};
use swipedeck_core::RuntimeHandle;
use swipedeck_ui_graphics::Point;

use crate::RotationMapping;

/// Style of the active card for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CardTransform {
    pub x: f32,
    pub y: f32,
    pub rotation_degrees: f32,
}

/// Current drag offset of the active card plus at most one in-flight
/// transition of it.
///
/// Clones share the offset, so a completion continuation can reset the
/// tracker it was started from.
#[derive(Clone)]
pub struct OffsetTracker {
    offset: Animatable<Point>,
    rotation: Rc<RotationMapping>,
}

impl OffsetTracker {
    pub fn new(runtime: RuntimeHandle, rotation: RotationMapping) -> Self {
        Self {
            offset: Animatable::new(Point::ZERO, runtime),
            rotation: Rc::new(rotation),
        }
    }

    pub fn offset(&self) -> Point {
        self.offset.value()
    }

    /// Set the offset without animating. Supersedes any running transition.
    pub fn set_immediate(&self, dx: f32, dy: f32) {
        self.offset.snapTo(Point::new(dx, dy));
    }

    /// Start a transition toward `target`. Supersedes any running one.
    pub fn animate_to(&self, target: Point, mode: AnimationType) {
        self.offset.animateTo(target, mode);
    }

    /// Start a transition toward `target` and run `on_complete` once, on
    /// the UI thread, after the target is reached.
    pub fn animate_to_then(
        &self,
        target: Point,
        mode: AnimationType,
        on_complete: impl FnOnce() + 'static,
    ) {
        self.offset.animateToThen(target, mode, on_complete);
    }

    /// Back to the origin with no animation.
    pub fn reset(&self) {
        self.offset.snapTo(Point::ZERO);
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_running()
    }

    /// Rotation for the current horizontal offset, saturating at the
    /// mapping's outer breakpoints.
    pub fn current_rotation(&self) -> f32 {
        self.rotation.rotation_for(self.offset().x)
    }

    pub fn layout_style(&self) -> CardTransform {
        let offset = self.offset();
        CardTransform {
            x: offset.x,
            y: offset.y,
            rotation_degrees: self.rotation.rotation_for(offset.x),
        }
    }

    pub fn rotation_mapping(&self) -> &RotationMapping {
        &self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipedeck_animation::{AnimationSpec, SpringSpec};
    use swipedeck_core::Runtime;

    fn tracker(runtime: &Runtime) -> OffsetTracker {
        let mapping = RotationMapping::standard(400.0).expect("valid mapping");
        OffsetTracker::new(runtime.handle(), mapping)
    }

    #[test]
    fn set_immediate_updates_style() {
        let runtime = Runtime::default();
        let tracker = tracker(&runtime);

        tracker.set_immediate(300.0, -20.0);

        assert_eq!(
            tracker.layout_style(),
            CardTransform {
                x: 300.0,
                y: -20.0,
                rotation_degrees: 60.0,
            }
        );
        assert!(!runtime.needs_frame());
    }

    #[test]
    fn repeated_set_immediate_keeps_rotation() {
        let runtime = Runtime::default();
        let tracker = tracker(&runtime);
        tracker.set_immediate(123.0, 45.0);
        let first = tracker.current_rotation();

        for _ in 0..10 {
            tracker.set_immediate(123.0, 45.0);
            assert_eq!(tracker.current_rotation(), first);
        }
    }

    #[test]
    fn rotation_saturates_far_off_screen() {
        let runtime = Runtime::default();
        let tracker = tracker(&runtime);
        tracker.set_immediate(4000.0, 0.0);
        assert_eq!(tracker.current_rotation(), 120.0);
        tracker.set_immediate(-4000.0, 0.0);
        assert_eq!(tracker.current_rotation(), -120.0);
    }

    #[test]
    fn set_immediate_supersedes_spring() {
        let runtime = Runtime::default();
        let tracker = tracker(&runtime);
        tracker.set_immediate(80.0, 10.0);
        tracker.animate_to(Point::ZERO, AnimationType::Spring(SpringSpec::snap_back()));
        assert!(tracker.is_animating());

        tracker.set_immediate(20.0, 5.0);

        assert!(!tracker.is_animating());
        assert_eq!(tracker.offset(), Point::new(20.0, 5.0));
    }

    #[test]
    fn clones_share_offset() {
        let runtime = Runtime::default();
        let tracker = tracker(&runtime);
        let other = tracker.clone();
        tracker.set_immediate(50.0, 0.0);
        assert_eq!(other.offset(), Point::new(50.0, 0.0));
        other.reset();
        assert_eq!(tracker.offset(), Point::ZERO);
    }

    #[test]
    fn timed_transition_lands_on_target() {
        let runtime = Runtime::default();
        let tracker = tracker(&runtime);
        tracker.animate_to(
            Point::new(400.0, 0.0),
            AnimationType::Tween(AnimationSpec::linear(250)),
        );

        runtime.run_frame(0);
        runtime.run_frame(250_000_000);

        assert_eq!(tracker.offset(), Point::new(400.0, 0.0));
        assert!((tracker.current_rotation() - 80.0).abs() < 1e-3);
    }
}
