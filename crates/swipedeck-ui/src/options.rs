use swipedeck_animation::{AnimationSpec, Easing, SpringSpec};
use swipedeck_foundation::gesture_constants::{
    FLY_OUT_DURATION_MILLIS, MAX_ROTATION_DEGREES, ROTATION_EXTENT_FRACTION, STACK_OFFSET,
    SWIPE_THRESHOLD_FRACTION,
};
use swipedeck_foundation::{GestureConfig, RotationMapping};

use crate::DeckError;

/// Longest fly-out `validate` accepts.
pub const MAX_FLY_OUT_DURATION_MILLIS: u64 = 60_000;

/// Construction-time settings of a [`Deck`](crate::Deck).
///
/// ```
/// use swipedeck_ui::DeckOptions;
///
/// let options = DeckOptions::new(400.0)
///     .with_swipe_threshold_fraction(0.3)
///     .with_fly_out_duration_millis(200);
/// assert_eq!(options.swipe_threshold(), 120.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckOptions {
    pub viewport_width: f32,
    pub swipe_threshold_fraction: f32,
    pub fly_out_duration_millis: u64,
    pub fly_out_easing: Easing,
    pub snap_back: SpringSpec,
    pub max_rotation_degrees: f32,
    pub rotation_extent_fraction: f32,
    /// Vertical offset per position for cards behind the active one.
    pub stack_offset: f32,
}

impl DeckOptions {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            swipe_threshold_fraction: SWIPE_THRESHOLD_FRACTION,
            fly_out_duration_millis: FLY_OUT_DURATION_MILLIS,
            fly_out_easing: Easing::LinearEasing,
            snap_back: SpringSpec::snap_back(),
            max_rotation_degrees: MAX_ROTATION_DEGREES,
            rotation_extent_fraction: ROTATION_EXTENT_FRACTION,
            stack_offset: STACK_OFFSET,
        }
    }

    pub fn with_swipe_threshold_fraction(mut self, fraction: f32) -> Self {
        self.swipe_threshold_fraction = fraction;
        self
    }

    pub fn with_fly_out_duration_millis(mut self, millis: u64) -> Self {
        self.fly_out_duration_millis = millis;
        self
    }

    pub fn with_fly_out_easing(mut self, easing: Easing) -> Self {
        self.fly_out_easing = easing;
        self
    }

    pub fn with_snap_back(mut self, spring: SpringSpec) -> Self {
        self.snap_back = spring;
        self
    }

    pub fn with_max_rotation_degrees(mut self, degrees: f32) -> Self {
        self.max_rotation_degrees = degrees;
        self
    }

    pub fn with_rotation_extent_fraction(mut self, fraction: f32) -> Self {
        self.rotation_extent_fraction = fraction;
        self
    }

    pub fn with_stack_offset(mut self, offset: f32) -> Self {
        self.stack_offset = offset;
        self
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.viewport_width * self.swipe_threshold_fraction
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        require(
            "viewport_width",
            self.viewport_width.is_finite() && self.viewport_width > 0.0,
            || format!("must be a positive width, got {}", self.viewport_width),
        )?;
        require(
            "swipe_threshold_fraction",
            self.swipe_threshold_fraction > 0.0 && self.swipe_threshold_fraction <= 1.0,
            || format!("must be in (0, 1], got {}", self.swipe_threshold_fraction),
        )?;
        require(
            "fly_out_duration_millis",
            self.fly_out_duration_millis <= MAX_FLY_OUT_DURATION_MILLIS,
            || {
                format!(
                    "must be at most {MAX_FLY_OUT_DURATION_MILLIS}ms, got {}",
                    self.fly_out_duration_millis
                )
            },
        )?;
        require(
            "max_rotation_degrees",
            self.max_rotation_degrees.is_finite(),
            || format!("must be finite, got {}", self.max_rotation_degrees),
        )?;
        require(
            "rotation_extent_fraction",
            self.rotation_extent_fraction.is_finite() && self.rotation_extent_fraction > 0.0,
            || format!("must be positive, got {}", self.rotation_extent_fraction),
        )?;
        require("stack_offset", self.stack_offset.is_finite(), || {
            format!("must be finite, got {}", self.stack_offset)
        })?;
        require(
            "snap_back",
            self.snap_back.stiffness > 0.0
                && self.snap_back.damping_ratio > 0.0
                && self.snap_back.stiffness.is_finite()
                && self.snap_back.damping_ratio.is_finite(),
            || {
                format!(
                    "spring needs positive stiffness and damping, got {:?}",
                    self.snap_back
                )
            },
        )?;
        Ok(())
    }

    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            fly_out_distance: self.viewport_width,
            swipe_threshold: self.swipe_threshold(),
            fly_out: AnimationSpec::tween(self.fly_out_duration_millis, self.fly_out_easing),
            snap_back: self.snap_back,
        }
    }

    pub fn rotation_mapping(&self) -> Result<RotationMapping, DeckError> {
        RotationMapping::for_viewport(
            self.viewport_width,
            self.rotation_extent_fraction,
            self.max_rotation_degrees,
        )
        .map_err(|err| DeckError::InvalidOption {
            name: "rotation_extent_fraction",
            reason: err.to_string(),
        })
    }
}

fn require(
    name: &'static str,
    ok: bool,
    reason: impl FnOnce() -> String,
) -> Result<(), DeckError> {
    if ok {
        Ok(())
    } else {
        let reason = reason();
        log::warn!("rejecting deck option `{name}`: {reason}");
        Err(DeckError::InvalidOption { name, reason })
    }
}
