use super::*;

#[test]
fn touch_phases_map_one_to_one() {
    assert_eq!(pointer_phase(TouchPhase::Started), PointerPhase::Start);
    assert_eq!(pointer_phase(TouchPhase::Moved), PointerPhase::Move);
    assert_eq!(pointer_phase(TouchPhase::Ended), PointerPhase::End);
    assert_eq!(pointer_phase(TouchPhase::Cancelled), PointerPhase::Cancel);
}

#[test]
fn pinned_ids_never_collide_with_mouse() {
    let ids: Vec<_> = (0..4).map(pinned_pointer_id).collect();
    assert!(ids.iter().all(|id| *id != MOUSE_POINTER_ID));
    assert_eq!(ids[0] - ids[3], 3);
}

#[test]
fn finger_on_start_button_never_reaches_picker() {
    let mut router = TouchRouter::new();

    assert_eq!(router.route(7, TouchPhase::Started, true), TouchRoute::PressStart);
    assert!(router.is_button_finger(7));
    // Sliding off the button keeps the finger out of the picker.
    assert_eq!(router.route(7, TouchPhase::Moved, false), TouchRoute::Swallow);
    assert_eq!(router.route(7, TouchPhase::Ended, false), TouchRoute::Swallow);
    assert!(!router.is_button_finger(7));
}

#[test]
fn picker_fingers_pass_through_while_button_is_held() {
    let mut router = TouchRouter::new();
    router.route(9, TouchPhase::Started, true);

    assert_eq!(
        router.route(1, TouchPhase::Started, false),
        TouchRoute::Dispatch(PointerPhase::Start)
    );
    assert_eq!(
        router.route(1, TouchPhase::Moved, true),
        TouchRoute::Dispatch(PointerPhase::Move),
        "only the landing point decides"
    );
    assert_eq!(
        router.route(1, TouchPhase::Cancelled, false),
        TouchRoute::Dispatch(PointerPhase::Cancel)
    );
    assert_eq!(router.route(9, TouchPhase::Cancelled, false), TouchRoute::Swallow);
}

#[test]
fn reused_id_off_button_is_a_picker_finger_again() {
    let mut router = TouchRouter::new();
    router.route(3, TouchPhase::Started, true);

    assert_eq!(
        router.route(3, TouchPhase::Started, false),
        TouchRoute::Dispatch(PointerPhase::Start)
    );
    assert!(!router.is_button_finger(3));
}
