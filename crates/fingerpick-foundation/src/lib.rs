//! Touch input foundation for FingerPick.
//!
//! Widgets consume [`TouchEvent`] snapshots: every event carries the full
//! list of fingers that are down at that moment. Platforms that report one
//! finger per event go through [`TouchDispatcher`] to build them.

pub mod input;

pub use input::dispatcher::{PointerPhase, TouchDispatcher};
pub use input::types::{PointerId, TouchAction, TouchEvent, TouchPointer, TouchPointers};

pub mod prelude {
    pub use crate::input::types::{PointerId, TouchAction, TouchEvent, TouchPointer};
}
