use super::*;

const RED: Color = Color::from_argb(0xFFFF0000);

#[test]
fn rebuild_replaces_the_whole_set() {
    let mut tracker = TouchTracker::new();
    tracker.rebuild(&[TouchPointer::new(1, 10.0, 10.0)], || RED);
    tracker.rebuild(
        &[
            TouchPointer::new(1, 12.0, 12.0),
            TouchPointer::new(2, 50.0, 60.0),
        ],
        || Color::WHITE,
    );

    assert_eq!(tracker.len(), 2);
    assert!(tracker.points().iter().all(|point| point.color == Color::WHITE));
    assert_eq!(tracker.get(1).map(|point| point.id), Some(2));
}

#[test]
fn reconcile_moves_points_and_keeps_colors() {
    let mut tracker = TouchTracker::new();
    let mut colors = [RED, Color::WHITE].into_iter();
    tracker.rebuild(
        &[
            TouchPointer::new(1, 0.0, 0.0),
            TouchPointer::new(2, 100.0, 100.0),
        ],
        || colors.next().unwrap_or(Color::BLACK),
    );

    let dropped = tracker.reconcile(&[
        TouchPointer::new(1, 5.0, 6.0),
        TouchPointer::new(2, 105.0, 106.0),
    ]);

    assert_eq!(dropped, 0);
    assert_eq!(tracker.points()[0].position, Point::new(5.0, 6.0));
    assert_eq!(tracker.points()[0].color, RED);
    assert_eq!(tracker.points()[1].color, Color::WHITE);
}

#[test]
fn reconcile_drops_missing_and_ignores_unknown() {
    let mut tracker = TouchTracker::new();
    tracker.rebuild(
        &[
            TouchPointer::new(1, 0.0, 0.0),
            TouchPointer::new(2, 1.0, 1.0),
            TouchPointer::new(3, 2.0, 2.0),
        ],
        || RED,
    );

    let dropped = tracker.reconcile(&[
        TouchPointer::new(3, 20.0, 20.0),
        TouchPointer::new(9, 90.0, 90.0),
    ]);

    assert_eq!(dropped, 2);
    assert_eq!(tracker.len(), 1);
    assert_eq!(tracker.points()[0].id, 3);
}

#[test]
fn clear_empties_tracker() {
    let mut tracker = TouchTracker::new();
    tracker.rebuild(&[TouchPointer::new(4, 1.0, 2.0)], || RED);
    tracker.clear();
    assert!(tracker.is_empty());
}
