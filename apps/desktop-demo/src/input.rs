//! Mapping from winit input to picker pointers.

use fingerpick_foundation::{PointerId, PointerPhase};
use winit::event::TouchPhase;

/// Pointer id of the finger driven by the left mouse button.
pub const MOUSE_POINTER_ID: PointerId = u64::MAX;

/// Pointer ids for right-click pinned fingers count down from here, well
/// away from the small ids touchscreens hand out.
const PINNED_POINTER_BASE: PointerId = u64::MAX - 1;

pub fn pointer_phase(phase: TouchPhase) -> PointerPhase {
    match phase {
        TouchPhase::Started => PointerPhase::Start,
        TouchPhase::Moved => PointerPhase::Move,
        TouchPhase::Ended => PointerPhase::End,
        TouchPhase::Cancelled => PointerPhase::Cancel,
    }
}

pub fn pinned_pointer_id(index: u64) -> PointerId {
    PINNED_POINTER_BASE.saturating_sub(index)
}

/// Where a touch update should go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchRoute {
    /// A finger landed on the start button.
    PressStart,
    /// Later updates of a finger that pressed the button.
    Swallow,
    /// A picker finger.
    Dispatch(PointerPhase),
}

/// Keeps fingers that pressed the start button away from the picker for
/// their whole lifetime.
#[derive(Debug, Default)]
pub struct TouchRouter {
    button_fingers: Vec<PointerId>,
}

impl TouchRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `on_button` is only consulted when the finger lands.
    pub fn route(&mut self, id: PointerId, phase: TouchPhase, on_button: bool) -> TouchRoute {
        let held = self.button_fingers.contains(&id);
        match phase {
            TouchPhase::Started => {
                if on_button {
                    if !held {
                        self.button_fingers.push(id);
                    }
                    return TouchRoute::PressStart;
                }
                if held {
                    self.release(id);
                }
                TouchRoute::Dispatch(PointerPhase::Start)
            }
            TouchPhase::Moved if held => TouchRoute::Swallow,
            TouchPhase::Ended | TouchPhase::Cancelled if held => {
                self.release(id);
                TouchRoute::Swallow
            }
            _ => TouchRoute::Dispatch(pointer_phase(phase)),
        }
    }

    pub fn is_button_finger(&self, id: PointerId) -> bool {
        self.button_fingers.contains(&id)
    }

    fn release(&mut self, id: PointerId) {
        self.button_fingers.retain(|finger| *finger != id);
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
