//! Testing utilities for the swipe deck

pub mod gestures;
pub mod testing;

pub use gestures::*;
pub use testing::*;

pub mod prelude {
    pub use crate::gestures::*;
    pub use crate::testing::*;
}
