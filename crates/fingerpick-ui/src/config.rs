//! Fixed tuning constants of the picker.

use fingerpick_ui_graphics::Color;

/// Delay before the first selection step, and the delay restored on reset.
pub const DEFAULT_DELAY_MILLIS: u64 = 100;
/// Once the accumulated delay reaches this value the selection settles.
pub const DELAY_CEILING_MILLIS: u64 = 400;
/// Added to the delay after every selection step.
pub const DELAY_STEP_MILLIS: u64 = 10;
pub const DISC_RADIUS: f32 = 200.0;
pub const RING_RADIUS: f32 = 225.0;
pub const DEFAULT_STROKE: f32 = 20.0;
pub const MAX_STROKE: f32 = 50.0;
pub const PULSE_DURATION_MILLIS: u64 = 1000;
pub const IDLE_RING_COLOR: Color = Color::from_argb(0xFF424444);
pub const WINNER_RING_COLOR: Color = Color::from_argb(0xFFEB5757);
/// Fewer fingers than this cannot start a selection.
pub const MIN_PARTICIPANTS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerConfig {
    pub base_delay_millis: u64,
    pub delay_ceiling_millis: u64,
    pub delay_step_millis: u64,
    pub disc_radius: f32,
    pub ring_radius: f32,
    pub min_stroke_width: f32,
    pub max_stroke_width: f32,
    pub pulse_duration_millis: u64,
    pub idle_ring_color: Color,
    pub winner_ring_color: Color,
    pub min_participants: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            base_delay_millis: DEFAULT_DELAY_MILLIS,
            delay_ceiling_millis: DELAY_CEILING_MILLIS,
            delay_step_millis: DELAY_STEP_MILLIS,
            disc_radius: DISC_RADIUS,
            ring_radius: RING_RADIUS,
            min_stroke_width: DEFAULT_STROKE,
            max_stroke_width: MAX_STROKE,
            pulse_duration_millis: PULSE_DURATION_MILLIS,
            idle_ring_color: IDLE_RING_COLOR,
            winner_ring_color: WINNER_RING_COLOR,
            min_participants: MIN_PARTICIPANTS,
        }
    }
}

impl PickerConfig {
    /// Same picker at a different scale; radii and stroke widths are
    /// multiplied, timings are untouched.
    pub fn scaled(mut self, factor: f32) -> Self {
        self.disc_radius *= factor;
        self.ring_radius *= factor;
        self.min_stroke_width *= factor;
        self.max_stroke_width *= factor;
        self
    }
}
