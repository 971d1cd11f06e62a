pub mod types;

pub use types::{GestureHandler, GesturePhase, GestureSample};
