//! Standard runtime services backed by Rust's `std` library.
//!
//! This crate provides concrete implementations of the platform
//! abstraction traits defined in `fingerpick-core`. Hosts construct a
//! [`StdRuntime`], hand its [`RuntimeHandle`] to widgets and call
//! [`StdRuntime::pump`] from their event loop.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use fingerpick_core::{Clock, FrameClock, Runtime, RuntimeHandle, RuntimeScheduler};
use web_time::{Duration, Instant};

type FrameWaker = Arc<dyn Fn() + Send + Sync + 'static>;

/// Scheduler that records frame requests and optionally wakes the host.
pub struct StdScheduler {
    frame_requested: AtomicBool,
    frame_waker: RwLock<Option<FrameWaker>>,
}

impl StdScheduler {
    pub fn new() -> Self {
        Self {
            frame_requested: AtomicBool::new(false),
            frame_waker: RwLock::new(None),
        }
    }

    /// Returns whether a frame has been requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::SeqCst)
    }

    /// Registers a waker that will be invoked whenever a new frame is scheduled.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        let mut slot = self
            .frame_waker
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(Arc::new(waker));
    }

    /// Clears any registered frame waker.
    pub fn clear_frame_waker(&self) {
        let mut slot = self
            .frame_waker
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = None;
    }

    fn wake(&self) {
        let waker = self
            .frame_waker
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        if let Some(waker) = waker {
            waker();
        }
    }
}

impl Default for StdScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdScheduler")
            .field(
                "frame_requested",
                &self.frame_requested.load(Ordering::SeqCst),
            )
            .finish()
    }
}

impl RuntimeScheduler for StdScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.store(true, Ordering::SeqCst);
        self.wake();
    }
}

/// Clock implementation backed by [`web_time`].
#[derive(Debug, Default, Clone)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }
}

/// Convenience container bundling the standard scheduler, clock and runtime.
#[derive(Clone)]
pub struct StdRuntime {
    scheduler: Arc<StdScheduler>,
    clock: Arc<StdClock>,
    runtime: Runtime,
    origin: Instant,
}

impl StdRuntime {
    /// Creates a new standard runtime instance. Runtime time zero is the
    /// moment of creation.
    pub fn new() -> Self {
        let scheduler = Arc::new(StdScheduler::default());
        let runtime = Runtime::new(scheduler.clone());
        let clock = Arc::new(StdClock);
        let origin = clock.now();
        Self {
            scheduler,
            clock,
            runtime,
            origin,
        }
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime.clone()
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    pub fn scheduler(&self) -> Arc<StdScheduler> {
        Arc::clone(&self.scheduler)
    }

    /// Current host time from the runtime's clock.
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Returns whether a frame was requested since the last poll.
    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    /// Registers a waker to be called when the runtime schedules a new frame.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        self.scheduler.set_frame_waker(waker);
    }

    /// Clears any previously registered frame waker.
    pub fn clear_frame_waker(&self) {
        self.scheduler.clear_frame_waker();
    }

    /// Milliseconds between runtime creation and `now`.
    pub fn millis_since_origin(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.origin).as_millis() as u64
    }

    /// Brings the runtime clock up to `now`, firing any timer that is due.
    ///
    /// Timers are scheduled relative to the runtime clock, which otherwise
    /// only moves in [`StdRuntime::pump`]. Hosts call this before handing
    /// input to widgets so that a timer armed in response to the input is
    /// measured from the moment the input arrived.
    pub fn sync(&self, now: Instant) {
        self.runtime_handle()
            .advance_timers(self.millis_since_origin(now));
    }

    /// Fires due timers and drains frame callbacks for the frame at `now`.
    ///
    /// Returns `true` when the surface should be redrawn.
    pub fn pump(&self, now: Instant) -> bool {
        let millis = self.millis_since_origin(now);
        let handle = self.runtime_handle();
        handle.advance_timers(millis);
        if handle.has_frame_callbacks() {
            let nanos = now.saturating_duration_since(self.origin).as_nanos() as u64;
            handle.drain_frame_callbacks(nanos);
        }
        let redraw = handle.take_invalidation();
        if redraw {
            log::trace!("redraw requested at t={millis}ms");
        }
        redraw
    }

    /// The next instant the host must wake up at, if any work is pending.
    ///
    /// Pending frame callbacks want the very next frame, so they report
    /// `now`; otherwise the earliest timer deadline is returned.
    pub fn next_wakeup(&self, now: Instant) -> Option<Instant> {
        let handle = self.runtime_handle();
        if handle.has_frame_callbacks() || handle.peek_invalidation() {
            return Some(now);
        }
        handle
            .next_timer_deadline()
            .map(|deadline| self.origin + Duration::from_millis(deadline))
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("scheduler", &self.scheduler)
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
