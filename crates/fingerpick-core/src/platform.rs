//! Platform abstraction traits for the FingerPick runtime.
//!
//! The runtime never talks to a window system directly. Hosts implement
//! these traits to learn when a frame is wanted and to supply the clock
//! that drives timers and animations.

/// Receives frame requests from the runtime.
///
/// Implementations typically wake the host event loop. They must be safe to
/// call from the thread that owns the runtime.
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
}
