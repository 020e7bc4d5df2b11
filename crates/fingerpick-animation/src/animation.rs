//! Time-based animations driven by the runtime's frame clock.
//!
//! Provides linear tween specs and an infinitely repeating animation
//! that keeps re-registering itself on every frame until cancelled.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use fingerpick_core::{FrameCallbackRegistration, FrameClock};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Maps `value` from the range `[min1, max1]` onto `[min2, max2]`.
///
/// The mapping is linear and is not clamped: values outside the source
/// range extrapolate.
pub fn convert_value(min1: f32, max1: f32, min2: f32, max2: f32, value: f32) -> f32 {
    (value - min1) * ((max2 - min2) / (max1 - min1)) + min2
}

/// Duration of one linear pass of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
}

impl AnimationSpec {
    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self { duration_millis }
    }
}

/// Repeats an [`AnimationSpec`] forever, jumping back to the initial value
/// at the start of every iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfiniteRepeatableSpec {
    pub animation: AnimationSpec,
}

impl InfiniteRepeatableSpec {
    pub fn new(animation: AnimationSpec) -> Self {
        Self { animation }
    }

    /// Fraction in `[0, 1)` of the current iteration at the given play time.
    pub fn fraction_at(&self, play_time_millis: f64) -> f32 {
        let duration = self.animation.duration_millis.max(1) as f64;
        let elapsed = play_time_millis.max(0.0);
        let iteration = (elapsed / duration).floor();
        ((elapsed - iteration * duration) / duration) as f32
    }
}

/// Listener invoked with the current value on every animation frame.
pub type ValueListener<T> = Rc<dyn Fn(&T)>;

/// Infinitely repeating animation between two values.
///
/// Each frame the animation re-registers itself on the frame clock, so it
/// runs until [`InfiniteAnimation::cancel`] is called or every handle is
/// dropped.
pub struct InfiniteAnimation<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<InfiniteAnimationInner<T>>>,
}

struct InfiniteAnimationInner<T: Lerp + Clone + 'static> {
    clock: FrameClock,
    initial: T,
    target: T,
    spec: InfiniteRepeatableSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    listener: ValueListener<T>,
    running: bool,
}

impl<T: Lerp + Clone + 'static> InfiniteAnimation<T> {
    /// Starts animating from `initial` to `target`, calling `listener` on
    /// every frame with the current value.
    pub fn start(
        clock: FrameClock,
        initial: T,
        target: T,
        spec: InfiniteRepeatableSpec,
        listener: impl Fn(&T) + 'static,
    ) -> Self {
        let inner = InfiniteAnimationInner {
            clock,
            initial,
            target,
            spec,
            start_time_nanos: None,
            registration: None,
            listener: Rc::new(listener),
            running: true,
        };
        let this = Self {
            inner: Rc::new(RefCell::new(inner)),
        };
        Self::schedule_frame(&this.inner);
        this
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Stops the animation. Safe to call more than once.
    pub fn cancel(&self) {
        let registration = {
            let mut inner = self.inner.borrow_mut();
            if inner.running {
                log::trace!("infinite animation cancelled");
            }
            inner.running = false;
            inner.start_time_nanos = None;
            inner.registration.take()
        };
        if let Some(registration) = registration {
            registration.cancel();
        }
    }

    fn schedule_frame(this: &Rc<RefCell<InfiniteAnimationInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if !inner.running || inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak: Weak<RefCell<InfiniteAnimationInner<T>>> = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<InfiniteAnimationInner<T>>>, frame_time_nanos: u64) {
        let (value, listener) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let play_time_millis = frame_time_nanos.saturating_sub(start_time) as f64 / 1_000_000.0;
            let fraction = inner.spec.fraction_at(play_time_millis);
            let value = inner.initial.lerp(&inner.target, fraction);
            (value, Rc::clone(&inner.listener))
        };

        Self::schedule_frame(this);

        listener(&value);
    }
}

impl<T: Lerp + Clone + 'static> Clone for InfiniteAnimation<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
