use super::*;

use rand::rngs::SmallRng;
use rand::SeedableRng;

fn engine() -> SelectionEngine {
    SelectionEngine::new(&PickerConfig::default())
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

#[test]
fn start_requires_two_points() {
    let mut engine = engine();
    assert_eq!(engine.start(0), None);
    assert_eq!(engine.start(1), None);
    assert!(engine.is_idle());

    assert_eq!(engine.start(2), Some(100));
    assert_eq!(
        engine.state(),
        SelectionState::Selecting {
            highlighted: 0,
            delay_millis: 100
        }
    );
    assert_eq!(engine.participants(), 2);
}

#[test]
fn start_is_ignored_while_armed() {
    let mut engine = engine();
    assert!(engine.start(3).is_some());
    assert_eq!(engine.start(5), None);
    assert_eq!(engine.participants(), 3);
}

#[test]
fn delay_grows_by_step_until_ceiling() {
    let mut engine = engine();
    let mut rng = rng();
    engine.start(4);

    let mut delays = vec![engine.delay_millis()];
    loop {
        match engine.step(4, &mut rng) {
            StepOutcome::Continue {
                highlighted,
                next_delay_millis,
            } => {
                let index = highlighted.expect("points to pick from");
                assert!(index < 4);
                delays.push(next_delay_millis);
            }
            StepOutcome::Settled { .. } => break,
            StepOutcome::Ignored => panic!("engine stopped selecting"),
        }
    }

    let expected: Vec<u64> = (0..=30).map(|n| 100 + 10 * n).collect();
    assert_eq!(delays, expected);
    assert_eq!(engine.delay_millis(), 400);
}

#[test]
fn settles_on_last_highlight_exactly_once() {
    let mut engine = engine();
    let mut rng = rng();
    engine.start(3);

    let mut last = None;
    let winner = loop {
        match engine.step(3, &mut rng) {
            StepOutcome::Continue { highlighted, .. } => last = highlighted,
            StepOutcome::Settled { winner } => break winner,
            StepOutcome::Ignored => panic!("engine stopped selecting"),
        }
    };

    assert_eq!(Some(winner), last);
    assert_eq!(engine.state(), SelectionState::Settled { winner });
    assert_eq!(engine.highlighted_index(), Some(winner));
    assert_eq!(engine.step(3, &mut rng), StepOutcome::Ignored);
    assert_eq!(engine.state(), SelectionState::Settled { winner });
}

#[test]
fn step_without_points_keeps_highlight_and_still_decelerates() {
    let mut engine = engine();
    let mut rng = rng();
    engine.start(2);

    assert_eq!(
        engine.step(0, &mut rng),
        StepOutcome::Continue {
            highlighted: None,
            next_delay_millis: 110
        }
    );
    assert_eq!(engine.highlighted_index(), Some(0));
}

#[test]
fn idle_engine_ignores_steps() {
    let mut engine = engine();
    let mut rng = rng();
    assert_eq!(engine.step(3, &mut rng), StepOutcome::Ignored);
    assert_eq!(engine.highlighted_index(), None);
    assert_eq!(engine.delay_millis(), 100);
}

#[test]
fn lost_participants_only_counts_while_armed() {
    let mut engine = engine();
    assert!(!engine.lost_participants(0));

    engine.start(3);
    assert!(!engine.lost_participants(3));
    assert!(engine.lost_participants(2));

    engine.reset();
    assert!(!engine.lost_participants(0));
}

#[test]
fn reset_returns_to_base_delay() {
    let mut engine = engine();
    let mut rng = rng();
    engine.start(2);
    engine.step(2, &mut rng);
    engine.step(2, &mut rng);
    assert_eq!(engine.delay_millis(), 120);

    engine.reset();
    assert!(engine.is_idle());
    assert_eq!(engine.delay_millis(), 100);
    assert_eq!(engine.participants(), 0);
    assert_eq!(engine.start(2), Some(100));
}

#[test]
fn zero_step_config_still_terminates() {
    let config = PickerConfig {
        delay_step_millis: 0,
        ..PickerConfig::default()
    };
    let mut engine = SelectionEngine::new(&config);
    let mut rng = rng();
    engine.start(2);

    let mut steps = 0;
    while !matches!(engine.step(2, &mut rng), StepOutcome::Settled { .. }) {
        steps += 1;
        assert!(steps < 1_000);
    }
}
