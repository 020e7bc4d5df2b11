use std::cell::{Cell, RefCell};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::rc::{Rc, Weak};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::timer::TimerRegistration;
use crate::{FrameCallbackId, TimerId};

type TimerCallback = Box<dyn FnOnce() + 'static>;
type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<FrameCallback>,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    needs_redraw: Cell<bool>,
    now_millis: Cell<u64>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
    // Ordered by (deadline, id); ids grow monotonically so equal deadlines
    // fire in registration order. Cancelled entries stay in the heap and are
    // skipped when their callback is no longer in `timers`.
    timer_queue: RefCell<BinaryHeap<Reverse<(u64, TimerId)>>>,
    timers: RefCell<FxHashMap<TimerId, TimerCallback>>,
    next_timer_id: Cell<u64>,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            needs_redraw: Cell::new(false),
            now_millis: Cell::new(0),
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            timer_queue: RefCell::new(BinaryHeap::new()),
            timers: RefCell::new(FxHashMap::default()),
            next_timer_id: Cell::new(1),
        }
    }

    fn invalidate(&self) {
        self.needs_redraw.set(true);
        self.scheduler.schedule_frame();
    }

    fn take_invalidation(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    fn register_frame_callback(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.scheduler.schedule_frame();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }

    fn is_frame_callback_pending(&self, id: FrameCallbackId) -> bool {
        self.frame_callbacks
            .borrow()
            .iter()
            .any(|entry| entry.id == id)
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let mut pending: Vec<FrameCallback> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        for callback in pending {
            callback(frame_time_nanos);
        }
    }

    fn schedule_timer(&self, delay_millis: u64, callback: TimerCallback) -> TimerId {
        let id = self.next_timer_id.get();
        self.next_timer_id.set(id + 1);
        let deadline = self.now_millis.get().saturating_add(delay_millis);
        self.timers.borrow_mut().insert(id, callback);
        self.timer_queue.borrow_mut().push(Reverse((deadline, id)));
        log::trace!("timer {id} scheduled for t={deadline}ms");
        id
    }

    fn cancel_timer(&self, id: TimerId) {
        if self.timers.borrow_mut().remove(&id).is_some() {
            log::trace!("timer {id} cancelled");
        }
    }

    fn is_timer_pending(&self, id: TimerId) -> bool {
        self.timers.borrow().contains_key(&id)
    }

    fn pending_timer_count(&self) -> usize {
        self.timers.borrow().len()
    }

    fn next_timer_deadline(&self) -> Option<u64> {
        let timers = self.timers.borrow();
        self.timer_queue
            .borrow()
            .iter()
            .filter(|Reverse((_, id))| timers.contains_key(id))
            .map(|Reverse((deadline, _))| *deadline)
            .min()
    }

    fn advance_timers(&self, now_millis: u64) {
        loop {
            let next = {
                let mut queue = self.timer_queue.borrow_mut();
                match queue.peek() {
                    Some(Reverse((deadline, _))) if *deadline <= now_millis => queue.pop(),
                    _ => None,
                }
            };
            let Some(Reverse((deadline, id))) = next else {
                break;
            };
            let callback = self.timers.borrow_mut().remove(&id);
            if let Some(callback) = callback {
                if deadline > self.now_millis.get() {
                    self.now_millis.set(deadline);
                }
                callback();
            }
        }
        if now_millis > self.now_millis.get() {
            self.now_millis.set(now_millis);
        }
    }
}

/// Owning handle to the runtime. Hosts keep one alive for the lifetime of
/// the widget tree; everything else holds a [`RuntimeHandle`].
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }

    /// Whether anything is waiting for the host: a redraw, a frame callback
    /// or a timer.
    pub fn has_pending_work(&self) -> bool {
        self.inner.needs_redraw.get()
            || self.inner.has_frame_callbacks()
            || self.inner.pending_timer_count() > 0
    }
}

/// Runtime scheduler that ignores frame requests; hosts poll
/// [`RuntimeHandle::take_invalidation`] instead.
#[derive(Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Weak, cloneable access to the runtime. Every operation is a silent no-op
/// once the owning [`Runtime`] is gone.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    /// Requests a redraw of the surface.
    pub fn invalidate(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.invalidate();
        }
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_invalidation(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.take_invalidation())
            .unwrap_or(false)
    }

    pub fn peek_invalidation(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_redraw.get())
            .unwrap_or(false)
    }

    /// Current runtime time in milliseconds, as last advanced by the host.
    pub fn now_millis(&self) -> u64 {
        self.inner
            .upgrade()
            .map(|inner| inner.now_millis.get())
            .unwrap_or(0)
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    pub fn is_frame_callback_pending(&self, id: FrameCallbackId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_frame_callback_pending(id))
            .unwrap_or(false)
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    /// Queues `callback` to run once, `delay_millis` after the current
    /// runtime time.
    pub fn schedule_timer(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> TimerRegistration {
        match self.inner.upgrade() {
            Some(inner) => {
                let id = inner.schedule_timer(delay_millis, Box::new(callback));
                TimerRegistration::new(self.clone(), id)
            }
            None => TimerRegistration::inactive(self.clone()),
        }
    }

    pub fn cancel_timer(&self, id: TimerId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_timer(id);
        }
    }

    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_timer_pending(id))
            .unwrap_or(false)
    }

    pub fn pending_timer_count(&self) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.pending_timer_count())
            .unwrap_or(0)
    }

    pub fn next_timer_deadline(&self) -> Option<u64> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.next_timer_deadline())
    }

    /// Fires every timer due at or before `now_millis`, in deadline order.
    ///
    /// The runtime clock is moved to each timer's deadline before it runs, so
    /// timers scheduled from inside a callback are relative to the moment it
    /// fired rather than to `now_millis`.
    pub fn advance_timers(&self, now_millis: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.advance_timers(now_millis);
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
