use super::*;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use fingerpick_core::{DefaultScheduler, Runtime};

use crate::config::{IDLE_RING_COLOR, WINNER_RING_COLOR};

fn frame(runtime: &Runtime, millis: u64) {
    runtime.handle().drain_frame_callbacks(millis * 1_000_000);
}

#[test]
fn new_pulse_rests_at_idle_style() {
    let pulse = PulseAnimator::new(&PickerConfig::default());
    assert_eq!(pulse.stroke_width(), 20.0);
    assert_eq!(pulse.color(), IDLE_RING_COLOR);
    assert!(!pulse.is_running());
}

#[test]
fn apply_progress_maps_onto_stroke_range() {
    let mut pulse = PulseAnimator::new(&PickerConfig::default());
    pulse.apply_progress(0.0);
    assert_eq!(pulse.stroke_width(), 20.0);
    assert_eq!(pulse.color(), WINNER_RING_COLOR);

    pulse.apply_progress(0.5);
    assert!((pulse.stroke_width() - 35.0).abs() < 1e-4);

    pulse.apply_progress(1.0);
    assert!((pulse.stroke_width() - 50.0).abs() < 1e-4);
}

#[test]
fn progress_restarts_every_cycle() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut pulse = PulseAnimator::new(&PickerConfig::default());
    {
        let seen = Rc::clone(&seen);
        pulse.start(runtime.frame_clock(), move |progress| {
            seen.borrow_mut().push(progress)
        });
    }
    assert!(pulse.is_running());

    for millis in [0, 250, 500, 1000, 1250] {
        frame(&runtime, millis);
    }

    let seen = seen.borrow();
    let expected = [0.0, 0.25, 0.5, 0.0, 0.25];
    assert_eq!(seen.len(), expected.len());
    for (actual, expected) in seen.iter().zip(expected) {
        assert!((actual - expected).abs() < 1e-4, "{actual} != {expected}");
    }
}

#[test]
fn second_start_is_ignored() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let calls = Rc::new(RefCell::new(0));
    let mut pulse = PulseAnimator::new(&PickerConfig::default());
    for _ in 0..2 {
        let calls = Rc::clone(&calls);
        pulse.start(runtime.frame_clock(), move |_| *calls.borrow_mut() += 1);
    }

    frame(&runtime, 0);
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn cancel_stops_frames_and_restores_idle_style() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let calls = Rc::new(RefCell::new(0));
    let mut pulse = PulseAnimator::new(&PickerConfig::default());
    {
        let calls = Rc::clone(&calls);
        pulse.start(runtime.frame_clock(), move |_| *calls.borrow_mut() += 1);
    }
    frame(&runtime, 0);
    pulse.apply_progress(0.8);

    pulse.cancel();
    assert!(!pulse.is_running());
    assert_eq!(pulse.stroke_width(), 20.0);
    assert_eq!(pulse.color(), IDLE_RING_COLOR);
    assert!(!runtime.handle().has_frame_callbacks());

    frame(&runtime, 16);
    assert_eq!(*calls.borrow(), 1);
}
