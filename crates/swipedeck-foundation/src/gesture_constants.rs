//! Reference values for swipe gestures.
//!
//! Distances are in logical pixels and expressed relative to the viewport
//! width so the same feel carries across screen sizes.

/// Fraction of the viewport width a release must travel horizontally to
/// count as a swipe rather than a cancelled drag.
pub const SWIPE_THRESHOLD_FRACTION: f32 = 0.25;

/// Duration of the fly-out after an accepted swipe.
pub const FLY_OUT_DURATION_MILLIS: u64 = 250;

/// Rotation, in degrees, a card saturates at while dragged sideways.
pub const MAX_ROTATION_DEGREES: f32 = 120.0;

/// Horizontal offset, as a fraction of the viewport width, at which the
/// rotation reaches [`MAX_ROTATION_DEGREES`].
pub const ROTATION_EXTENT_FRACTION: f32 = 1.5;

/// Vertical offset applied per position to cards stacked behind the
/// active card.
pub const STACK_OFFSET: f32 = 10.0;
