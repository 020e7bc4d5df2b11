//! Core runtime for FingerPick.
//!
//! Everything here runs on one thread: frame callbacks, one-shot timers and
//! redraw requests share a single timeline that the host advances.

mod frame_clock;
pub mod platform;
mod runtime;
mod timer;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};
pub use timer::TimerRegistration;

pub type FrameCallbackId = u64;
pub type TimerId = u64;
