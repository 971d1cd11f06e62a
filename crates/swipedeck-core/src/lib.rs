#![doc = r"Core runtime pieces for the swipe deck: a cooperative, single-threaded frame loop."]

pub mod frame_clock;
pub mod owned;
pub mod platform;
pub mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use owned::Owned;
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

/// Identifier handed out for each registered frame callback.
pub type FrameCallbackId = u64;
