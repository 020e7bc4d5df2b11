//! The decelerating random walk that picks a winner.
//!
//! The engine is a plain state machine: it owns no timers. The view feeds it
//! steps when its step timer fires and schedules the next one with the delay
//! the engine reports.

use rand::Rng;

use crate::config::PickerConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selecting {
        highlighted: usize,
        delay_millis: u64,
    },
    Settled {
        winner: usize,
    },
}

/// Result of one selection step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new index is highlighted; run the next step after `next_delay_millis`.
    Continue {
        highlighted: Option<usize>,
        next_delay_millis: u64,
    },
    /// The delay reached the ceiling; `winner` is final.
    Settled { winner: usize },
    /// The engine was not selecting.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct SelectionEngine {
    state: SelectionState,
    participants: usize,
    base_delay_millis: u64,
    delay_ceiling_millis: u64,
    delay_step_millis: u64,
    min_participants: usize,
}

impl SelectionEngine {
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            state: SelectionState::Idle,
            participants: 0,
            base_delay_millis: config.base_delay_millis,
            delay_ceiling_millis: config.delay_ceiling_millis,
            delay_step_millis: config.delay_step_millis.max(1),
            min_participants: config.min_participants,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SelectionState::Idle
    }

    /// Selecting or settled: a cycle is in progress until the next reset.
    pub fn is_armed(&self) -> bool {
        !self.is_idle()
    }

    /// Number of points tracked when the current cycle started.
    pub fn participants(&self) -> usize {
        self.participants
    }

    /// Accumulated delay; the base delay whenever no selection is running.
    pub fn delay_millis(&self) -> u64 {
        match self.state {
            SelectionState::Selecting { delay_millis, .. } => delay_millis,
            SelectionState::Idle => self.base_delay_millis,
            SelectionState::Settled { .. } => self.delay_ceiling_millis,
        }
    }

    /// Index the ring is drawn at, if any.
    pub fn highlighted_index(&self) -> Option<usize> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Selecting { highlighted, .. } => Some(highlighted),
            SelectionState::Settled { winner } => Some(winner),
        }
    }

    /// Arms the engine when idle with enough points.
    ///
    /// Returns the delay before the first step, or `None` when the call was
    /// ignored.
    pub fn start(&mut self, point_count: usize) -> Option<u64> {
        if !self.is_idle() || point_count < self.min_participants {
            return None;
        }
        self.participants = point_count;
        self.state = SelectionState::Selecting {
            highlighted: 0,
            delay_millis: self.base_delay_millis,
        };
        Some(self.base_delay_millis)
    }

    /// Runs one step of the walk over `point_count` points.
    pub fn step(&mut self, point_count: usize, rng: &mut impl Rng) -> StepOutcome {
        let SelectionState::Selecting {
            highlighted,
            delay_millis,
        } = self.state
        else {
            return StepOutcome::Ignored;
        };

        if delay_millis >= self.delay_ceiling_millis {
            self.state = SelectionState::Settled {
                winner: highlighted,
            };
            return StepOutcome::Settled {
                winner: highlighted,
            };
        }

        let picked = (point_count > 0).then(|| rng.random_range(0..point_count));
        let next_delay_millis = delay_millis + self.delay_step_millis;
        self.state = SelectionState::Selecting {
            highlighted: picked.unwrap_or(highlighted),
            delay_millis: next_delay_millis,
        };
        StepOutcome::Continue {
            highlighted: picked,
            next_delay_millis,
        }
    }

    /// True when a cycle in progress has lost fingers it started with.
    pub fn lost_participants(&self, point_count: usize) -> bool {
        self.is_armed() && point_count < self.participants
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
        self.participants = 0;
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
