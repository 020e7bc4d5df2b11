//! The finger picker widget.
//!
//! `FingerView` is a cheap, cloneable handle over shared widget state. Touch
//! events, the selection step timer and the pulse animation frames all
//! mutate that state on the runtime's single thread, so no two of them ever
//! overlap. Resetting cancels the pending step timer and the pulse
//! synchronously; a callback that was already queued finds nothing to do.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use fingerpick_core::{RuntimeHandle, TimerRegistration};
use fingerpick_foundation::{TouchAction, TouchEvent, TouchPointer};
use fingerpick_ui_graphics::{Color, DrawPrimitive, DrawScope, DrawScopeDefault, Size};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::PickerConfig;
use crate::pulse::PulseAnimator;
use crate::render::{draw_finger_picker, RingStyle};
use crate::selection::{SelectionEngine, SelectionState, StepOutcome};
use crate::tracker::{TouchPoint, TouchTracker};

#[derive(Clone)]
pub struct FingerView {
    inner: Rc<RefCell<FingerViewInner>>,
}

struct FingerViewInner {
    runtime: RuntimeHandle,
    config: PickerConfig,
    size: Size,
    tracker: TouchTracker,
    engine: SelectionEngine,
    pulse: PulseAnimator,
    step_timer: Option<TimerRegistration>,
    rng: SmallRng,
}

impl FingerView {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self::with_config(runtime, PickerConfig::default())
    }

    pub fn with_config(runtime: RuntimeHandle, config: PickerConfig) -> Self {
        Self::with_rng(runtime, config, SmallRng::from_os_rng())
    }

    /// Deterministic colors and picks, for tests and replays.
    pub fn with_seed(runtime: RuntimeHandle, config: PickerConfig, seed: u64) -> Self {
        Self::with_rng(runtime, config, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(runtime: RuntimeHandle, config: PickerConfig, rng: SmallRng) -> Self {
        let inner = FingerViewInner {
            runtime,
            size: Size::ZERO,
            tracker: TouchTracker::new(),
            engine: SelectionEngine::new(&config),
            pulse: PulseAnimator::new(&config),
            step_timer: None,
            rng,
            config,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// The surface was resized: stale coordinates are meaningless, so every
    /// tracked point is dropped.
    pub fn on_size_changed(&self, size: Size) {
        let mut inner = self.inner.borrow_mut();
        inner.size = size;
        inner.tracker.clear();
        log::debug!("surface resized to {}x{}", size.width, size.height);
        inner.runtime.invalidate();
    }

    /// Routes a touch snapshot. Always consumes the event.
    pub fn on_touch_event(&self, event: &TouchEvent) -> bool {
        match event.action {
            TouchAction::ContactBegin | TouchAction::SecondaryContactBegin => {
                self.on_contact_begin(&event.pointers)
            }
            TouchAction::ContactMove => self.on_contact_move(&event.pointers),
            TouchAction::ContactEnd => self.on_contact_end(event.pointer_count()),
            TouchAction::SecondaryContactEnd => {}
            TouchAction::Cancel => {
                let mut inner = self.inner.borrow_mut();
                inner.reset_all();
                inner.runtime.invalidate();
            }
        }
        true
    }

    /// Fingers touched down. While idle the tracked set is rebuilt with
    /// fresh colors; during a cycle new fingers are ignored.
    pub fn on_contact_begin(&self, pointers: &[TouchPointer]) {
        let mut inner = self.inner.borrow_mut();
        if !inner.engine.is_idle() {
            log::trace!("ignoring {} fingers while a selection runs", pointers.len());
            return;
        }
        let FingerViewInner { tracker, rng, .. } = &mut *inner;
        tracker.rebuild(pointers, || random_color(rng));
        log::trace!("tracking {} fingers", inner.tracker.len());
        inner.runtime.invalidate();
    }

    /// Fingers moved. Positions follow the snapshot; fingers missing from it
    /// are dropped, and losing a participant mid-cycle resets everything.
    pub fn on_contact_move(&self, pointers: &[TouchPointer]) {
        let mut inner = self.inner.borrow_mut();
        let dropped = inner.tracker.reconcile(pointers);
        if dropped > 0 && inner.engine.lost_participants(inner.tracker.len()) {
            log::debug!(
                "{} of {} fingers left mid-selection, resetting",
                dropped,
                inner.engine.participants()
            );
            inner.reset_all();
        }
        inner.runtime.invalidate();
    }

    /// The last finger of a gesture lifted; `remaining_count` is the finger
    /// count of the release snapshot, including the lifting finger.
    pub fn on_contact_end(&self, remaining_count: usize) {
        let mut inner = self.inner.borrow_mut();
        if remaining_count == 1 {
            inner.reset_all();
        }
        inner.runtime.invalidate();
    }

    /// Starts a selection. Ignored unless idle with at least two fingers.
    pub fn start(&self) {
        let mut inner = self.inner.borrow_mut();
        let count = inner.tracker.len();
        let Some(delay) = inner.engine.start(count) else {
            log::trace!("start ignored: {:?} with {count} fingers", inner.engine.state());
            return;
        };
        log::debug!("selection started with {count} fingers");
        let timer = FingerViewInner::schedule_step(Rc::downgrade(&self.inner), &inner.runtime, delay);
        inner.step_timer = Some(timer);
        inner.runtime.invalidate();
    }

    /// Cancels any selection in progress and returns to idle. Tracked
    /// points stay.
    pub fn reset(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.reset_selection();
        inner.runtime.invalidate();
    }

    /// Paints the current state.
    pub fn draw(&self, scope: &mut dyn DrawScope) {
        let inner = self.inner.borrow();
        let ring = inner.engine.highlighted_index().map(|index| RingStyle {
            index,
            radius: inner.config.ring_radius,
            stroke_width: inner.pulse.stroke_width(),
            color: inner.pulse.color(),
        });
        draw_finger_picker(scope, inner.tracker.points(), inner.config.disc_radius, ring);
    }

    /// Runs a draw pass over the whole surface.
    pub fn render(&self) -> Vec<DrawPrimitive> {
        let size = self.inner.borrow().size;
        let mut scope = DrawScopeDefault::new(size);
        self.draw(&mut scope);
        scope.into_primitives()
    }

    pub fn points(&self) -> Vec<TouchPoint> {
        self.inner.borrow().tracker.points().to_vec()
    }

    pub fn point_count(&self) -> usize {
        self.inner.borrow().tracker.len()
    }

    pub fn state(&self) -> SelectionState {
        self.inner.borrow().engine.state()
    }

    pub fn delay_millis(&self) -> u64 {
        self.inner.borrow().engine.delay_millis()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.inner.borrow().engine.highlighted_index()
    }

    pub fn stroke_width(&self) -> f32 {
        self.inner.borrow().pulse.stroke_width()
    }

    pub fn ring_color(&self) -> Color {
        self.inner.borrow().pulse.color()
    }

    pub fn has_pending_step(&self) -> bool {
        self.inner
            .borrow()
            .step_timer
            .as_ref()
            .map(TimerRegistration::is_pending)
            .unwrap_or(false)
    }

    pub fn is_pulsing(&self) -> bool {
        self.inner.borrow().pulse.is_running()
    }

    pub fn size(&self) -> Size {
        self.inner.borrow().size
    }

    pub fn config(&self) -> PickerConfig {
        self.inner.borrow().config
    }
}

impl FingerViewInner {
    fn schedule_step(
        this: Weak<RefCell<FingerViewInner>>,
        runtime: &RuntimeHandle,
        delay_millis: u64,
    ) -> TimerRegistration {
        runtime.schedule_timer(delay_millis, move || {
            if let Some(strong) = this.upgrade() {
                Self::on_step(&strong);
            }
        })
    }

    fn on_step(this: &Rc<RefCell<FingerViewInner>>) {
        let mut inner = this.borrow_mut();
        let count = inner.tracker.len();
        let outcome = {
            let FingerViewInner { engine, rng, .. } = &mut *inner;
            engine.step(count, rng)
        };
        match outcome {
            StepOutcome::Continue {
                highlighted,
                next_delay_millis,
            } => {
                log::trace!("highlight {highlighted:?}, next step in {next_delay_millis}ms");
                let timer = Self::schedule_step(Rc::downgrade(this), &inner.runtime, next_delay_millis);
                inner.step_timer = Some(timer);
                inner.runtime.invalidate();
            }
            StepOutcome::Settled { winner } => {
                log::debug!("selection settled on finger #{winner}");
                inner.step_timer = None;
                let clock = inner.runtime.frame_clock();
                let runtime = inner.runtime.clone();
                let weak = Rc::downgrade(this);
                inner.pulse.start(clock, move |progress| {
                    if let Some(strong) = weak.upgrade() {
                        strong.borrow_mut().pulse.apply_progress(progress);
                        runtime.invalidate();
                    }
                });
                inner.runtime.invalidate();
            }
            StepOutcome::Ignored => {}
        }
    }

    fn reset_selection(&mut self) {
        if let Some(timer) = self.step_timer.take() {
            timer.cancel();
        }
        self.pulse.cancel();
        if self.engine.is_armed() {
            log::debug!("selection reset");
        }
        self.engine.reset();
    }

    fn reset_all(&mut self) {
        self.reset_selection();
        self.tracker.clear();
    }
}

fn random_color(rng: &mut impl Rng) -> Color {
    Color::from_rgba_u8(rng.random(), rng.random(), rng.random(), u8::MAX)
}

#[cfg(test)]
#[path = "tests/finger_view_tests.rs"]
mod tests;
