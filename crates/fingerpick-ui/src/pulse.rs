//! Pulsing highlight ring around the winner.

use fingerpick_animation::{convert_value, AnimationSpec, InfiniteAnimation, InfiniteRepeatableSpec};
use fingerpick_core::FrameClock;
use fingerpick_ui_graphics::Color;

use crate::config::PickerConfig;

/// Ring stroke width and color, plus the animation that drives them once a
/// winner is settled.
pub struct PulseAnimator {
    stroke_width: f32,
    color: Color,
    min_stroke_width: f32,
    max_stroke_width: f32,
    idle_color: Color,
    winner_color: Color,
    duration_millis: u64,
    animation: Option<InfiniteAnimation<f32>>,
}

impl PulseAnimator {
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            stroke_width: config.min_stroke_width,
            color: config.idle_ring_color,
            min_stroke_width: config.min_stroke_width,
            max_stroke_width: config.max_stroke_width,
            idle_color: config.idle_ring_color,
            winner_color: config.winner_ring_color,
            duration_millis: config.pulse_duration_millis,
            animation: None,
        }
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_running(&self) -> bool {
        self.animation
            .as_ref()
            .map(InfiniteAnimation::is_running)
            .unwrap_or(false)
    }

    /// Starts the repeating 0→1 progress animation. `on_progress` receives
    /// every frame's progress and is expected to call
    /// [`PulseAnimator::apply_progress`]. Does nothing when already running.
    pub fn start(&mut self, clock: FrameClock, on_progress: impl Fn(f32) + 'static) {
        if self.animation.is_some() {
            return;
        }
        let spec = InfiniteRepeatableSpec::new(AnimationSpec::linear(self.duration_millis));
        let animation = InfiniteAnimation::start(clock, 0.0f32, 1.0, spec, move |progress| {
            on_progress(*progress)
        });
        self.animation = Some(animation);
    }

    pub fn apply_progress(&mut self, progress: f32) {
        self.stroke_width = convert_value(
            0.0,
            1.0,
            self.min_stroke_width,
            self.max_stroke_width,
            progress,
        );
        self.color = self.winner_color;
        log::trace!("pulse stroke {:.1}", self.stroke_width);
    }

    /// Stops the animation and restores the idle stroke and color.
    pub fn cancel(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.cancel();
        }
        self.stroke_width = self.min_stroke_width;
        self.color = self.idle_color;
    }
}

#[cfg(test)]
#[path = "tests/pulse_tests.rs"]
mod tests;
