//! Platform abstraction traits for the deck runtime.
//!
//! The host decides when frames happen and where time comes from; the
//! runtime only asks for a frame and consumes the timestamps it is given.

/// Schedules work for the runtime.
///
/// Implementations are responsible for triggering frame processing on
/// behalf of the runtime. They must be safe to use from multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}
