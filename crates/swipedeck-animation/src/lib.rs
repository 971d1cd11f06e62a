//! Animation system for the swipe deck
//!
//! Frame-driven tweens and springs ([`Animatable`]) plus the
//! breakpoint interpolation used to derive secondary properties such as
//! card rotation ([`PiecewiseLinear`]).

mod animation;
mod easing;
mod interpolation;

pub use animation::*;
pub use easing::Easing;
pub use interpolation::{Breakpoint, InterpolationError, PiecewiseLinear};
