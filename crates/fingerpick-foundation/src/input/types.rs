use fingerpick_ui_graphics::Point;
use smallvec::SmallVec;

/// Identifier the platform assigns to one finger for the lifetime of its
/// contact.
pub type PointerId = u64;

/// Action class of a multi-touch event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    /// The first finger touched down.
    ContactBegin,
    /// Another finger touched down while at least one was already down.
    SecondaryContactBegin,
    /// One or more fingers moved.
    ContactMove,
    /// A finger lifted while others stay down.
    SecondaryContactEnd,
    /// The last finger lifted.
    ContactEnd,
    /// The platform aborted the gesture.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPointer {
    pub id: PointerId,
    pub position: Point,
}

impl TouchPointer {
    pub const fn new(id: PointerId, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

/// Fingers down at one instant, in platform order. Ten fits every common
/// touch panel without spilling to the heap.
pub type TouchPointers = SmallVec<[TouchPointer; 10]>;

/// Snapshot of all active fingers at the moment of an action.
///
/// For `ContactEnd` and `SecondaryContactEnd` the lifting finger is still
/// part of the snapshot, so a last-finger release reports a count of one.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub pointers: TouchPointers,
}

impl TouchEvent {
    pub fn new(action: TouchAction, pointers: impl IntoIterator<Item = TouchPointer>) -> Self {
        Self {
            action,
            pointers: pointers.into_iter().collect(),
        }
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn pointer(&self, id: PointerId) -> Option<&TouchPointer> {
        self.pointers.iter().find(|pointer| pointer.id == id)
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.pointer(id).is_some()
    }
}
