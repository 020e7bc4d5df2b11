//! Testing utilities and harness for FingerPick

pub mod assertions;
pub mod rule;

pub use assertions::*;
pub use rule::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::rule::{FingerTestRule, FRAME_MILLIS};
}
