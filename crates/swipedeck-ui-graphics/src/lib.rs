//! Pure math/data for positioning cards
//!
//! Geometry primitives used by the animation, gesture and deck crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::Point;
}
