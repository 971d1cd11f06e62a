use std::fmt;

use swipedeck_core::{Runtime, RuntimeHandle};

/// Nominal 60Hz frame interval.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Frames [`FrameTestRule::pump_until_idle`] runs before giving up.
pub const MAX_PUMP_FRAMES: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpError {
    /// Work was still pending after this many frames.
    NeverIdle { frames: usize },
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PumpError::NeverIdle { frames } => {
                write!(f, "runtime still had pending work after {frames} frames")
            }
        }
    }
}

impl std::error::Error for PumpError {}

/// Headless driver for a [`Runtime`] with a virtual clock.
///
/// Time only moves when the test asks it to, so animation progress is a
/// pure function of the frames a test runs.
pub struct FrameTestRule {
    runtime: Runtime,
    frame_time_nanos: u64,
    frame_interval_nanos: u64,
}

impl FrameTestRule {
    pub fn new() -> Self {
        Self::with_frame_interval(FRAME_INTERVAL_NANOS)
    }

    pub fn with_frame_interval(frame_interval_nanos: u64) -> Self {
        Self {
            runtime: Runtime::default(),
            frame_time_nanos: 0,
            frame_interval_nanos,
        }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Virtual time of the last frame that ran.
    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn needs_frame(&self) -> bool {
        self.runtime.needs_frame()
    }

    /// Step the clock by one interval and run a frame. Returns the new time.
    pub fn advance_frame(&mut self) -> u64 {
        self.frame_time_nanos += self.frame_interval_nanos;
        self.runtime.run_frame(self.frame_time_nanos);
        self.frame_time_nanos
    }

    /// Run whole frames until at least `millis` of virtual time has passed.
    pub fn advance_time_by(&mut self, millis: u64) -> usize {
        let target = self.frame_time_nanos + millis * 1_000_000;
        let mut frames = 0;
        while self.frame_time_nanos < target {
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    /// Run frames until no animation or queued continuation is pending.
    /// Returns the number of frames run.
    pub fn pump_until_idle(&mut self) -> Result<usize, PumpError> {
        let mut frames = 0;
        while self.runtime.needs_frame() {
            if frames >= MAX_PUMP_FRAMES {
                log::warn!("runtime still busy after {frames} frames");
                return Err(PumpError::NeverIdle { frames });
            }
            self.advance_frame();
            frames += 1;
        }
        log::trace!("runtime idle after {frames} frames");
        Ok(frames)
    }
}

impl Default for FrameTestRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for tests that only need temporary access to a
/// `FrameTestRule`.
pub fn run_frame_test<R>(f: impl FnOnce(&mut FrameTestRule) -> R) -> R {
    let mut rule = FrameTestRule::new();
    f(&mut rule)
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
