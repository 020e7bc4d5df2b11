//! Headless harness for driving a [`FingerView`] on virtual time.
//!
//! The rule owns its own runtime and clock. Nothing happens between calls:
//! timers and animation frames only run inside [`FingerTestRule::advance_time`]
//! and friends, so every test is deterministic.
//!
//! # Example
//!
//! ```
//! use fingerpick_testing::FingerTestRule;
//!
//! let mut rule = FingerTestRule::new();
//! rule.touch_down(1, 100.0, 100.0);
//! rule.touch_down(2, 600.0, 900.0);
//! rule.start();
//!
//! let winner = rule.run_until_settled(10_000);
//! assert!(winner.is_some());
//! ```

use std::sync::Arc;

use fingerpick_core::{DefaultScheduler, Runtime, RuntimeHandle};
use fingerpick_foundation::{PointerId, PointerPhase, TouchDispatcher, TouchEvent};
use fingerpick_ui::{FingerView, PickerConfig, SelectionState};
use fingerpick_ui_graphics::{DrawPrimitive, Point, Size};

/// Virtual frame interval used when advancing time.
pub const FRAME_MILLIS: u64 = 16;

const DEFAULT_SEED: u64 = 0x5EED;

/// Test rule that feeds touches to a finger picker and steps its clock.
pub struct FingerTestRule {
    runtime: Runtime,
    view: FingerView,
    dispatcher: TouchDispatcher,
    now_millis: u64,
}

impl FingerTestRule {
    /// A picker with the default configuration on a 1080x1920 surface.
    pub fn new() -> Self {
        Self::with_config(PickerConfig::default())
    }

    pub fn with_config(config: PickerConfig) -> Self {
        Self::with_seed(config, DEFAULT_SEED)
    }

    pub fn with_seed(config: PickerConfig, seed: u64) -> Self {
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let view = FingerView::with_seed(runtime.handle(), config, seed);
        view.on_size_changed(Size::new(1080.0, 1920.0));
        runtime.handle().take_invalidation();
        Self {
            runtime,
            view,
            dispatcher: TouchDispatcher::new(),
            now_millis: 0,
        }
    }

    pub fn view(&self) -> &FingerView {
        &self.view
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Virtual time elapsed since the rule was created.
    pub fn now_millis(&self) -> u64 {
        self.now_millis
    }

    /// Resize the surface (simulates a window resize).
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.view.on_size_changed(Size::new(width, height));
    }

    /// Put a finger down. Returns whether the view consumed the event.
    pub fn touch_down(&mut self, id: PointerId, x: f32, y: f32) -> bool {
        self.dispatch(id, PointerPhase::Start, Point::new(x, y))
    }

    pub fn touch_move(&mut self, id: PointerId, x: f32, y: f32) -> bool {
        self.dispatch(id, PointerPhase::Move, Point::new(x, y))
    }

    /// Lift a finger where it last was.
    pub fn touch_up(&mut self, id: PointerId) -> bool {
        let Some(position) = self.dispatcher.position(id) else {
            return false;
        };
        self.dispatch(id, PointerPhase::End, position)
    }

    /// The platform took the gesture away.
    pub fn cancel_touches(&mut self) -> bool {
        self.dispatch(0, PointerPhase::Cancel, Point::ZERO)
    }

    /// Deliver a prepared snapshot directly, bypassing the dispatcher.
    pub fn send_event(&mut self, event: &TouchEvent) -> bool {
        self.view.on_touch_event(event)
    }

    pub fn start(&mut self) {
        self.view.start();
    }

    /// Advance virtual time, firing timers as their deadlines pass and
    /// delivering an animation frame every [`FRAME_MILLIS`].
    pub fn advance_time(&mut self, millis: u64) {
        let target = self.now_millis + millis;
        while self.now_millis < target {
            let next = (self.now_millis + FRAME_MILLIS).min(target);
            self.tick(next);
        }
    }

    /// Advance until the selection settles, giving up after `max_millis`.
    ///
    /// Returns the winning index, or `None` if nothing settled in time.
    pub fn run_until_settled(&mut self, max_millis: u64) -> Option<usize> {
        let deadline = self.now_millis + max_millis;
        loop {
            if let SelectionState::Settled { winner } = self.view.state() {
                return Some(winner);
            }
            if self.now_millis >= deadline || self.view.state() == SelectionState::Idle {
                return None;
            }
            let next = (self.now_millis + FRAME_MILLIS).min(deadline);
            self.tick(next);
        }
    }

    /// Everything the view would paint right now.
    pub fn render(&self) -> Vec<DrawPrimitive> {
        self.view.render()
    }

    /// Whether anything asked for a redraw since the last call.
    pub fn take_invalidation(&mut self) -> bool {
        self.runtime.handle().take_invalidation()
    }

    fn dispatch(&mut self, id: PointerId, phase: PointerPhase, position: Point) -> bool {
        match self.dispatcher.dispatch(id, phase, position) {
            Some(event) => {
                log::trace!("test touch {:?} with {} fingers", event.action, event.pointer_count());
                self.view.on_touch_event(&event)
            }
            None => false,
        }
    }

    fn tick(&mut self, now_millis: u64) {
        let handle = self.runtime.handle();
        handle.advance_timers(now_millis);
        self.now_millis = now_millis;
        handle.drain_frame_callbacks(now_millis * 1_000_000);
    }
}

impl Default for FingerTestRule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/rule_tests.rs"]
mod tests;
