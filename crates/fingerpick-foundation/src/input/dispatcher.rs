//! Per-finger platform input to snapshot events.
//!
//! Windowing systems such as winit report one finger per event. Widgets in
//! this workspace want the whole set of active fingers every time, the way
//! mobile platforms deliver motion events. [`TouchDispatcher`] keeps the
//! active set and emits a [`TouchEvent`] for every platform update.

use fingerpick_ui_graphics::Point;

use super::types::{PointerId, TouchAction, TouchEvent, TouchPointer, TouchPointers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Default, Debug)]
pub struct TouchDispatcher {
    active: TouchPointers,
}

impl TouchDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, id: PointerId) -> bool {
        self.active.iter().any(|pointer| pointer.id == id)
    }

    /// Last known position of an active finger.
    pub fn position(&self, id: PointerId) -> Option<Point> {
        self.active
            .iter()
            .find(|pointer| pointer.id == id)
            .map(|pointer| pointer.position)
    }

    /// Folds one platform pointer update into the active set.
    ///
    /// Returns `None` for updates that carry no information: a move or end
    /// for a finger that never started, or a cancel with nothing down.
    pub fn dispatch(
        &mut self,
        id: PointerId,
        phase: PointerPhase,
        position: Point,
    ) -> Option<TouchEvent> {
        match phase {
            PointerPhase::Start => {
                let action = if self.active.is_empty() {
                    TouchAction::ContactBegin
                } else {
                    TouchAction::SecondaryContactBegin
                };
                match self.active.iter_mut().find(|pointer| pointer.id == id) {
                    Some(pointer) => pointer.position = position,
                    None => self.active.push(TouchPointer { id, position }),
                }
                Some(self.snapshot(action))
            }
            PointerPhase::Move => {
                let pointer = self.active.iter_mut().find(|pointer| pointer.id == id)?;
                pointer.position = position;
                Some(self.snapshot(TouchAction::ContactMove))
            }
            PointerPhase::End => {
                let index = self.active.iter().position(|pointer| pointer.id == id)?;
                self.active[index].position = position;
                let action = if self.active.len() == 1 {
                    TouchAction::ContactEnd
                } else {
                    TouchAction::SecondaryContactEnd
                };
                let event = self.snapshot(action);
                self.active.remove(index);
                Some(event)
            }
            PointerPhase::Cancel => {
                if self.active.is_empty() {
                    return None;
                }
                log::debug!("touch gesture cancelled with {} fingers down", self.active.len());
                let event = self.snapshot(TouchAction::Cancel);
                self.active.clear();
                Some(event)
            }
        }
    }

    fn snapshot(&self, action: TouchAction) -> TouchEvent {
        TouchEvent {
            action,
            pointers: self.active.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/dispatcher_tests.rs"]
mod tests;
