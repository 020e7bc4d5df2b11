use super::*;

use std::sync::Arc;

use fingerpick_core::{DefaultScheduler, Runtime};
use fingerpick_ui_graphics::Point;

use crate::config::{IDLE_RING_COLOR, WINNER_RING_COLOR};

const SETTLE_MILLIS: u64 = 7_750;

fn setup() -> (Runtime, FingerView) {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let view = FingerView::with_seed(runtime.handle(), PickerConfig::default(), 42);
    view.on_size_changed(Size::new(1080.0, 1920.0));
    (runtime, view)
}

fn pointers(ids: &[u64]) -> Vec<TouchPointer> {
    ids.iter()
        .map(|&id| TouchPointer::new(id, 100.0 * id as f32, 200.0 * id as f32))
        .collect()
}

fn event(action: TouchAction, ids: &[u64]) -> TouchEvent {
    TouchEvent::new(action, pointers(ids))
}

fn advance(runtime: &Runtime, millis: u64) {
    let handle = runtime.handle();
    handle.advance_timers(millis);
    handle.drain_frame_callbacks(millis * 1_000_000);
}

fn started(ids: &[u64]) -> (Runtime, FingerView) {
    let (runtime, view) = setup();
    view.on_touch_event(&event(TouchAction::ContactBegin, ids));
    view.start();
    (runtime, view)
}

#[test]
fn contact_begin_tracks_opaque_points() {
    let (_runtime, view) = setup();
    assert!(view.on_touch_event(&event(TouchAction::ContactBegin, &[1, 2, 3])));

    let points = view.points();
    assert_eq!(points.len(), 3);
    assert_eq!(
        points.iter().map(|point| point.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert!(points.iter().all(|point| point.color.is_opaque()));
    assert_eq!(points[1].position, Point::new(200.0, 400.0));
}

#[test]
fn start_needs_two_fingers() {
    let (runtime, view) = setup();
    view.start();
    assert_eq!(view.state(), SelectionState::Idle);

    view.on_touch_event(&event(TouchAction::ContactBegin, &[1]));
    view.start();
    assert_eq!(view.state(), SelectionState::Idle);
    assert!(!view.has_pending_step());
    assert_eq!(runtime.handle().pending_timer_count(), 0);
}

#[test]
fn first_step_waits_for_base_delay() {
    let (runtime, view) = started(&[1, 2]);
    assert_eq!(view.highlighted_index(), Some(0));
    assert_eq!(view.delay_millis(), 100);
    assert!(view.has_pending_step());

    advance(&runtime, 99);
    assert_eq!(view.delay_millis(), 100);

    advance(&runtime, 100);
    assert_eq!(view.delay_millis(), 110);
    assert!(view.highlighted_index().is_some_and(|index| index < 2));
}

#[test]
fn second_start_does_not_double_schedule() {
    let (runtime, view) = started(&[1, 2]);
    view.start();
    assert_eq!(runtime.handle().pending_timer_count(), 1);
}

#[test]
fn selection_settles_after_full_deceleration() {
    let (runtime, view) = started(&[1, 2, 3]);

    advance(&runtime, SETTLE_MILLIS - 1);
    assert!(matches!(
        view.state(),
        SelectionState::Selecting {
            delay_millis: 400,
            ..
        }
    ));

    advance(&runtime, SETTLE_MILLIS);
    let SelectionState::Settled { winner } = view.state() else {
        panic!("expected a winner, got {:?}", view.state());
    };
    assert!(winner < 3);
    assert!(!view.has_pending_step());
    assert!(view.is_pulsing());
    assert_eq!(runtime.handle().pending_timer_count(), 0);
}

#[test]
fn pulse_cycles_the_winner_ring() {
    let (runtime, view) = started(&[1, 2]);
    advance(&runtime, SETTLE_MILLIS);
    assert_eq!(view.stroke_width(), 20.0);
    assert_eq!(view.ring_color(), WINNER_RING_COLOR);

    advance(&runtime, SETTLE_MILLIS + 500);
    assert!((view.stroke_width() - 35.0).abs() < 1e-3);

    advance(&runtime, SETTLE_MILLIS + 1_000);
    assert!((view.stroke_width() - 20.0).abs() < 1e-3);
    assert_eq!(view.ring_color(), WINNER_RING_COLOR);
}

#[test]
fn ring_is_idle_colored_while_selecting() {
    let (runtime, view) = started(&[1, 2]);
    advance(&runtime, 500);

    let primitives = view.render();
    assert_eq!(primitives.len(), 3);
    let DrawPrimitive::Ring {
        radius,
        stroke_width,
        brush,
        ..
    } = &primitives[2]
    else {
        panic!("ring missing: {primitives:?}");
    };
    assert_eq!(*radius, 225.0);
    assert_eq!(*stroke_width, 20.0);
    assert_eq!(brush.as_solid(), Some(IDLE_RING_COLOR));
}

#[test]
fn idle_render_has_discs_only() {
    let (_runtime, view) = setup();
    view.on_touch_event(&event(TouchAction::ContactBegin, &[1, 2]));
    let primitives = view.render();
    assert_eq!(primitives.len(), 2);
    assert!(primitives
        .iter()
        .all(|primitive| matches!(primitive, DrawPrimitive::Circle { radius, .. } if *radius == 200.0)));
}

#[test]
fn releasing_last_finger_resets_everything() {
    let (runtime, view) = started(&[1, 2]);
    advance(&runtime, SETTLE_MILLIS + 300);
    assert!(view.is_pulsing());

    view.on_touch_event(&event(TouchAction::ContactEnd, &[2]));

    assert_eq!(view.state(), SelectionState::Idle);
    assert_eq!(view.point_count(), 0);
    assert_eq!(view.delay_millis(), 100);
    assert_eq!(view.stroke_width(), 20.0);
    assert_eq!(view.ring_color(), IDLE_RING_COLOR);
    assert!(!view.is_pulsing());
    assert!(view.render().is_empty());
}

#[test]
fn reset_mid_selection_cancels_pending_step() {
    let (runtime, view) = started(&[1, 2]);
    advance(&runtime, 300);

    view.on_touch_event(&event(TouchAction::ContactEnd, &[1]));
    assert!(!view.has_pending_step());
    assert_eq!(runtime.handle().pending_timer_count(), 0);

    advance(&runtime, 20_000);
    assert_eq!(view.state(), SelectionState::Idle);
    assert!(!view.is_pulsing());
}

#[test]
fn losing_a_finger_mid_selection_resets() {
    let (runtime, view) = started(&[1, 2, 3]);
    advance(&runtime, 250);

    view.on_touch_event(&event(TouchAction::ContactMove, &[1, 3]));

    assert_eq!(view.state(), SelectionState::Idle);
    assert_eq!(view.point_count(), 0);
    assert!(!view.has_pending_step());
}

#[test]
fn moves_update_positions_while_idle() {
    let (_runtime, view) = setup();
    view.on_touch_event(&event(TouchAction::ContactBegin, &[1, 2]));
    let colors: Vec<_> = view.points().iter().map(|point| point.color).collect();

    view.on_touch_event(&TouchEvent::new(
        TouchAction::ContactMove,
        [TouchPointer::new(1, 5.0, 5.0), TouchPointer::new(2, 6.0, 6.0)],
    ));

    let points = view.points();
    assert_eq!(points[0].position, Point::new(5.0, 5.0));
    assert_eq!(
        points.iter().map(|point| point.color).collect::<Vec<_>>(),
        colors
    );
}

#[test]
fn moves_narrow_the_set_while_idle() {
    let (_runtime, view) = setup();
    view.on_touch_event(&event(TouchAction::ContactBegin, &[1, 2, 3]));
    view.on_touch_event(&event(TouchAction::ContactMove, &[2, 3]));
    assert_eq!(view.point_count(), 2);
    assert_eq!(view.state(), SelectionState::Idle);
}

#[test]
fn new_fingers_are_ignored_during_a_cycle() {
    let (_runtime, view) = started(&[1, 2]);
    view.on_touch_event(&event(TouchAction::SecondaryContactBegin, &[1, 2, 3]));
    assert_eq!(view.point_count(), 2);

    view.on_touch_event(&event(TouchAction::ContactMove, &[1, 2, 3]));
    assert_eq!(view.point_count(), 2);
}

#[test]
fn secondary_release_is_ignored() {
    let (_runtime, view) = started(&[1, 2, 3]);
    view.on_touch_event(&event(TouchAction::SecondaryContactEnd, &[1, 2, 3]));
    assert_eq!(view.point_count(), 3);
    assert!(view.has_pending_step());
}

#[test]
fn cancel_resets_everything() {
    let (_runtime, view) = started(&[1, 2]);
    view.on_touch_event(&event(TouchAction::Cancel, &[]));
    assert_eq!(view.state(), SelectionState::Idle);
    assert_eq!(view.point_count(), 0);
    assert!(!view.has_pending_step());
}

#[test]
fn programmatic_reset_keeps_points() {
    let (runtime, view) = started(&[1, 2]);
    advance(&runtime, SETTLE_MILLIS);

    view.reset();

    assert_eq!(view.state(), SelectionState::Idle);
    assert_eq!(view.point_count(), 2);
    assert!(!view.is_pulsing());

    view.start();
    assert!(view.has_pending_step());
}

#[test]
fn resize_clears_points_but_not_selection() {
    let (_runtime, view) = started(&[1, 2]);
    view.on_size_changed(Size::new(720.0, 1280.0));
    assert_eq!(view.point_count(), 0);
    assert_eq!(view.size(), Size::new(720.0, 1280.0));
    assert!(matches!(view.state(), SelectionState::Selecting { .. }));
}

#[test]
fn changes_request_redraw() {
    let (runtime, view) = setup();
    let handle = runtime.handle();
    handle.take_invalidation();

    view.on_touch_event(&event(TouchAction::ContactBegin, &[1, 2]));
    assert!(handle.take_invalidation());

    view.start();
    assert!(handle.take_invalidation());

    advance(&runtime, 100);
    assert!(handle.take_invalidation());
}

#[test]
fn same_seed_picks_same_winner() {
    let winners: Vec<_> = (0..2)
        .map(|_| {
            let (runtime, view) = started(&[1, 2, 3, 4]);
            advance(&runtime, SETTLE_MILLIS);
            view.state()
        })
        .collect();
    assert_eq!(winners[0], winners[1]);
}

#[test]
fn dropped_view_leaves_timers_inert() {
    let (runtime, view) = started(&[1, 2]);
    drop(view);
    advance(&runtime, SETTLE_MILLIS);
    assert!(!runtime.handle().has_frame_callbacks());
}
