//! Authoritative list of fingers on the surface.

use fingerpick_foundation::{PointerId, TouchPointer};
use fingerpick_ui_graphics::{Color, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: PointerId,
    pub color: Color,
    pub position: Point,
}

/// Ordered set of tracked fingers. Components refer to points by index into
/// this list; the order is the platform's snapshot order.
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    points: Vec<TouchPoint>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[TouchPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&TouchPoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Discards every tracked point and starts over with one point per
    /// finger in `pointers`, each colored by `next_color`.
    pub fn rebuild(&mut self, pointers: &[TouchPointer], mut next_color: impl FnMut() -> Color) {
        self.points.clear();
        self.points.extend(pointers.iter().map(|pointer| TouchPoint {
            id: pointer.id,
            color: next_color(),
            position: pointer.position,
        }));
    }

    /// Keeps only the points whose id appears in `pointers`, moving each to
    /// its new position. Fingers unknown to the tracker are ignored, so the
    /// set never grows here.
    ///
    /// Returns the number of points dropped.
    pub fn reconcile(&mut self, pointers: &[TouchPointer]) -> usize {
        let before = self.points.len();
        let survivors: Vec<TouchPoint> = pointers
            .iter()
            .filter_map(|pointer| {
                self.points
                    .iter()
                    .find(|point| point.id == pointer.id)
                    .map(|point| TouchPoint {
                        id: point.id,
                        color: point.color,
                        position: pointer.position,
                    })
            })
            .collect();
        self.points = survivors;
        before.saturating_sub(self.points.len())
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
