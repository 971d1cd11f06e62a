use super::*;

use std::cell::Cell;
use swipedeck_core::Runtime;

const FRAME_NANOS: u64 = 16_666_667;

fn run_frames(runtime: &Runtime, from: u64, frames: usize) -> u64 {
    let mut time = from;
    for _ in 0..frames {
        if !runtime.needs_frame() {
            break;
        }
        time += FRAME_NANOS;
        runtime.run_frame(time);
    }
    time
}

#[test]
fn linear_tween_reaches_target_at_duration() {
    let runtime = Runtime::default();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animateTo(400.0, AnimationType::Tween(AnimationSpec::linear(250)));
    assert!(animatable.is_running());

    runtime.run_frame(1_000_000_000);
    assert_eq!(animatable.value(), 0.0, "first frame anchors the start time");

    runtime.run_frame(1_125_000_000);
    assert!((animatable.value() - 200.0).abs() < 0.01);

    runtime.run_frame(1_250_000_000);
    assert_eq!(animatable.value(), 400.0);
    assert!(!animatable.is_running());
    assert!(!runtime.needs_frame());
}

#[test]
fn tween_delay_holds_start_value() {
    let runtime = Runtime::default();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animateTo(
        1.0,
        AnimationType::Tween(AnimationSpec::linear(100).with_delay(50)),
    );

    runtime.run_frame(0);
    runtime.run_frame(40_000_000);
    assert_eq!(animatable.value(), 0.0);

    runtime.run_frame(100_000_000);
    assert!((animatable.value() - 0.5).abs() < 0.01);
}

#[test]
fn huge_tween_durations_saturate_instead_of_overflowing() {
    let runtime = Runtime::default();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animateTo(
        400.0,
        AnimationType::Tween(AnimationSpec::linear(u64::MAX / 1000).with_delay(u64::MAX)),
    );
    let time = run_frames(&runtime, 0, 3);
    assert_eq!(animatable.value(), 0.0);
    assert!(animatable.is_running());

    animatable.animateTo(400.0, AnimationType::Tween(AnimationSpec::linear(u64::MAX / 1000)));
    run_frames(&runtime, time, 3);
    assert!(animatable.value() < 1e-3);
    assert!(animatable.is_running());
}

#[test]
fn end_listener_runs_once_after_target_is_reached() {
    let runtime = Runtime::default();
    let animatable = Animatable::new(Point::ZERO, runtime.handle());
    let calls = Rc::new(Cell::new(0));
    let seen_at_end = Rc::new(Cell::new(Point::ZERO));
    {
        let calls = Rc::clone(&calls);
        let seen_at_end = Rc::clone(&seen_at_end);
        let observer = animatable.clone();
        animatable.animateToThen(
            Point::new(400.0, 0.0),
            AnimationType::Tween(AnimationSpec::linear(250)),
            move || {
                calls.set(calls.get() + 1);
                seen_at_end.set(observer.value());
            },
        );
    }

    run_frames(&runtime, 0, 60);

    assert_eq!(calls.get(), 1);
    assert_eq!(seen_at_end.get(), Point::new(400.0, 0.0));
    assert!(!runtime.needs_frame());
}

#[test]
fn new_transition_supersedes_running_one() {
    let runtime = Runtime::default();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    let superseded = Rc::new(Cell::new(false));
    {
        let superseded = Rc::clone(&superseded);
        animatable.animateToThen(
            100.0,
            AnimationType::Tween(AnimationSpec::linear(250)),
            move || superseded.set(true),
        );
    }
    let time = run_frames(&runtime, 0, 3);

    animatable.animateTo(-50.0, AnimationType::Tween(AnimationSpec::linear(100)));
    run_frames(&runtime, time, 60);

    assert!(!superseded.get());
    assert_eq!(animatable.value(), -50.0);
}

#[test]
fn snap_to_cancels_and_jumps() {
    let runtime = Runtime::default();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animateTo(10.0, AnimationType::Tween(AnimationSpec::linear(250)));

    animatable.snapTo(3.0);

    assert_eq!(animatable.value(), 3.0);
    assert!(!animatable.is_running());
    assert!(!runtime.needs_frame());
}

#[test]
fn spring_returns_to_origin_and_settles() {
    let runtime = Runtime::default();
    let animatable = Animatable::new(Point::new(40.0, -12.0), runtime.handle());
    let settled = Rc::new(Cell::new(0));
    {
        let settled = Rc::clone(&settled);
        animatable.animateToThen(
            Point::ZERO,
            AnimationType::Spring(SpringSpec::snap_back()),
            move || settled.set(settled.get() + 1),
        );
    }

    let mut overshot = false;
    let mut time = 0;
    for _ in 0..600 {
        if !runtime.needs_frame() {
            break;
        }
        time += FRAME_NANOS;
        runtime.run_frame(time);
        if animatable.value().x < 0.0 {
            overshot = true;
        }
    }

    assert!(overshot, "under-damped spring should overshoot the origin");
    assert_eq!(animatable.value(), Point::ZERO);
    assert_eq!(settled.get(), 1);
    assert!(!runtime.needs_frame());
}

#[test]
fn critically_damped_spring_does_not_overshoot() {
    let runtime = Runtime::default();
    let animatable = Animatable::new(100.0f32, runtime.handle());
    animatable.animateTo(0.0, AnimationType::Spring(SpringSpec::default_spring()));

    let mut time = 0;
    for _ in 0..600 {
        if !runtime.needs_frame() {
            break;
        }
        time += FRAME_NANOS;
        runtime.run_frame(time);
        assert!(animatable.value() >= -0.01);
    }
    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn spring_to_current_value_finishes_immediately() {
    let runtime = Runtime::default();
    let animatable = Animatable::new(5.0f32, runtime.handle());
    let done = Rc::new(Cell::new(false));
    {
        let done = Rc::clone(&done);
        animatable.animateToThen(
            5.0,
            AnimationType::Spring(SpringSpec::default()),
            move || done.set(true),
        );
    }

    runtime.run_frame(FRAME_NANOS);

    assert!(done.get());
    assert!(!animatable.is_running());
}

#[test]
fn dropped_animatable_stops_scheduling() {
    let runtime = Runtime::default();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animateTo(1.0, AnimationType::Tween(AnimationSpec::linear(250)));

    drop(animatable);

    assert!(!runtime.needs_frame());
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_presets() {
    assert_eq!(SpringSpec::default().damping_ratio, 1.0);
    assert!(SpringSpec::bouncy().damping_ratio < 1.0);
    assert!(SpringSpec::stiff().stiffness > SpringSpec::default().stiffness);
    assert!(SpringSpec::snap_back().damping_ratio < 1.0);
}

#[test]
fn point_lerp_interpolates_both_axes() {
    let from = Point::new(0.0, 10.0);
    let to = Point::new(100.0, -10.0);
    assert_eq!(from.lerp(&to, 0.25), Point::new(25.0, 5.0));
}
