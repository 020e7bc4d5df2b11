//! Finger picker widget.
//!
//! Tracks the fingers on a touch surface, marks each with a colored disc
//! and, on [`FingerView::start`], walks a decelerating random highlight
//! over them until it settles on one and pulses a ring around it.

pub mod config;
mod finger_view;
pub mod pulse;
pub mod render;
pub mod selection;
pub mod tracker;

pub use config::PickerConfig;
pub use finger_view::FingerView;
pub use pulse::PulseAnimator;
pub use render::{draw_finger_picker, RingStyle};
pub use selection::{SelectionEngine, SelectionState, StepOutcome};
pub use tracker::{TouchPoint, TouchTracker};

pub use fingerpick_foundation::{PointerId, TouchAction, TouchEvent, TouchPointer};
pub use fingerpick_ui_graphics::{Brush, Color, DrawPrimitive, DrawScope, Point, Size};
