//! Frame-driven animations with easing curves and spring physics.
//!
//! [`Animatable`] uses the Compose method names (`animateTo`, `snapTo`).

#![allow(non_snake_case)]

use std::cell::RefCell;
use std::rc::Rc;

use swipedeck_core::{FrameCallbackRegistration, RuntimeHandle};
use swipedeck_ui_graphics::Point;

use crate::Easing;

/// Fixed integration step for springs (~60fps).
const SPRING_TIMESTEP_SECS: f32 = 0.016;

/// Upper bound on simulated time per frame so a stalled host does not
/// make a spring jump.
const MAX_SPRING_FRAME_SECS: f32 = 0.1;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

/// Values an [`Animatable`] can drive.
///
/// Animations run on a scalar progress between the start and target
/// values, so the value type only needs interpolation and a distance for
/// the spring's rest check.
pub trait AnimationVector: Lerp + Clone {
    /// Distance between two values, in the value's own units.
    fn distance(&self, other: &Self) -> f32;
}

impl AnimationVector for f32 {
    fn distance(&self, other: &Self) -> f32 {
        (self - other).abs()
    }
}

impl AnimationVector for f64 {
    fn distance(&self, other: &Self) -> f32 {
        (self - other).abs() as f32
    }
}

impl AnimationVector for Point {
    fn distance(&self, other: &Self) -> f32 {
        self.distance_to(*other)
    }
}

/// Tween specification: duration, easing and optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Damped harmonic oscillator configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Higher values settle faster.
    pub stiffness: f32,
    /// Speed, in value units per second, below which the spring may rest.
    pub velocity_threshold: f32,
    /// Distance to the target, in value units, below which the spring may rest.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }

    /// Elastic return of a dragged card to its rest position. Thresholds
    /// are in pixels so the card settles once it is visually at rest.
    pub fn snap_back() -> Self {
        Self {
            damping_ratio: 0.55,
            stiffness: 400.0,
            velocity_threshold: 1.0,
            position_threshold: 0.5,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Fixed-duration tween.
    Tween(AnimationSpec),
    /// Physics-based spring; duration follows from the spring constants.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

type EndListener = Box<dyn FnOnce() + 'static>;

/// Animated value holder driven by the runtime's frame clock.
///
/// Clones share the same underlying value. At most one transition is in
/// flight; starting a new one (or snapping) supersedes the previous one
/// and drops its end listener without calling it.
pub struct Animatable<T: AnimationVector + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: AnimationVector + 'static> {
    runtime: RuntimeHandle,
    current: T,
    start: T,
    target: T,
    /// Fraction of the way from `start` to `target`; springs may overshoot 1.0.
    progress: f32,
    /// Rate of change of `progress` per second.
    velocity: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_end: Option<EndListener>,
}

impl<T: AnimationVector + 'static> AnimatableInner<T> {
    fn cancel_running(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        if self.on_end.take().is_some() {
            log::trace!("superseded transition dropped its end listener");
        }
    }

    fn finish(&mut self) -> Option<EndListener> {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.progress = 1.0;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.on_end.take()
    }

    /// Advances a tween. Returns true once the target is reached.
    fn step_tween(&mut self, spec: AnimationSpec, frame_time_nanos: u64) -> bool {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = spec.delay_millis.saturating_mul(1_000_000);
        if elapsed_nanos < delay_nanos {
            return false;
        }

        let duration_nanos = spec.duration_millis.saturating_mul(1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        self.progress = spec.easing.transform(linear_progress);
        self.current = self.start.lerp(&self.target, self.progress);
        linear_progress >= 1.0
    }

    /// Advances a spring by the time since the previous frame using
    /// semi-implicit Euler steps. Returns true once the spring is at rest.
    fn step_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) -> bool {
        let span = self.start.distance(&self.target);
        if span <= f32::EPSILON {
            return true;
        }

        let previous = self.last_frame_nanos.replace(frame_time_nanos);
        let Some(previous) = previous else {
            // First frame only anchors the clock.
            return false;
        };
        let dt = (frame_time_nanos.saturating_sub(previous) as f32 / 1_000_000_000.0)
            .min(MAX_SPRING_FRAME_SECS);

        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = SPRING_TIMESTEP_SECS.min(dt - simulated);
            let displacement = self.progress - 1.0;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.progress += self.velocity * step;
            simulated += step;
        }
        self.current = self.start.lerp(&self.target, self.progress);

        let at_rest = (self.velocity * span).abs() < spec.velocity_threshold;
        let near_target = self.current.distance(&self.target) < spec.position_threshold;
        at_rest && near_target
    }
}

impl<T: AnimationVector + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            runtime,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            progress: 1.0,
            velocity: 0.0,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
            on_end: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Current sampled value.
    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// True while a transition is waiting for its next frame.
    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Animate from the current value to `target`.
    pub fn animateTo(&self, target: T, animation: AnimationType) {
        self.start_transition(target, animation, None);
    }

    /// Like [`Animatable::animateTo`], calling `on_end` once the target is
    /// reached. The listener is queued as a UI task of the frame that
    /// completes the transition; it never runs if the transition is
    /// superseded first.
    pub fn animateToThen(
        &self,
        target: T,
        animation: AnimationType,
        on_end: impl FnOnce() + 'static,
    ) {
        self.start_transition(target, animation, Some(Box::new(on_end)));
    }

    /// Jump to `target` immediately, cancelling any running transition.
    pub fn snapTo(&self, target: T) {
        let mut inner = self.inner.borrow_mut();
        inner.runtime.assert_ui_thread();
        inner.cancel_running();
        inner.current = target.clone();
        inner.start = target.clone();
        inner.target = target;
        inner.progress = 1.0;
        inner.velocity = 0.0;
        inner.start_time_nanos = None;
        inner.last_frame_nanos = None;
    }

    fn start_transition(&self, target: T, animation: AnimationType, on_end: Option<EndListener>) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.runtime.assert_ui_thread();
            inner.cancel_running();
            inner.start = inner.current.clone();
            inner.target = target;
            inner.animation_type = animation;
            inner.progress = 0.0;
            inner.velocity = 0.0;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            inner.on_end = on_end;
        }
        Self::schedule_frame(&self.inner);
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (finished, on_end, runtime) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let finished = match inner.animation_type {
                AnimationType::Tween(spec) => inner.step_tween(spec, frame_time_nanos),
                AnimationType::Spring(spec) => inner.step_spring(spec, frame_time_nanos),
            };
            log::trace!(
                "animation frame at {frame_time_nanos}ns: progress {:.3}, finished {finished}",
                inner.progress
            );

            let on_end = if finished { inner.finish() } else { None };
            (finished, on_end, inner.runtime.clone())
        };

        if !finished {
            Self::schedule_frame(this);
        } else if let Some(on_end) = on_end {
            runtime.enqueue_ui_task(on_end);
        }
    }
}

impl<T: AnimationVector + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
