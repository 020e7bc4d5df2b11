use super::*;

#[test]
fn advance_time_moves_clock_in_frames() {
    let mut rule = FingerTestRule::new();
    rule.advance_time(40);
    assert_eq!(rule.now_millis(), 40);
    assert_eq!(rule.runtime_handle().now_millis(), 40);
}

#[test]
fn touch_up_without_touch_down_is_not_delivered() {
    let mut rule = FingerTestRule::new();
    assert!(!rule.touch_up(3));
    assert!(!rule.touch_move(3, 1.0, 1.0));
}

#[test]
fn run_until_settled_gives_up_when_idle() {
    let mut rule = FingerTestRule::new();
    assert_eq!(rule.run_until_settled(1_000), None);
    assert_eq!(rule.now_millis(), 0);
}

#[test]
fn run_until_settled_reports_winner() {
    let mut rule = FingerTestRule::new();
    rule.touch_down(1, 100.0, 100.0);
    rule.touch_down(2, 500.0, 500.0);
    rule.start();

    let winner = rule.run_until_settled(10_000);
    assert!(winner.is_some_and(|index| index < 2));
    assert!(rule.now_millis() >= 7_750);
}
