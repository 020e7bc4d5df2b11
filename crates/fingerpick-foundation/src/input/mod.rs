pub mod dispatcher;
pub mod types;

pub use dispatcher::{PointerPhase, TouchDispatcher};
pub use types::{PointerId, TouchAction, TouchEvent, TouchPointer, TouchPointers};
