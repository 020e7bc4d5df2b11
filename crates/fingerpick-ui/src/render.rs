use fingerpick_ui_graphics::{Brush, Color, DrawScope};

use crate::tracker::TouchPoint;

/// Ring drawn around the highlighted point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingStyle {
    pub index: usize,
    pub radius: f32,
    pub stroke_width: f32,
    pub color: Color,
}

/// Paints one disc per point and, when `ring` targets a tracked point, the
/// highlight ring on top of it.
pub fn draw_finger_picker(
    scope: &mut dyn DrawScope,
    points: &[TouchPoint],
    disc_radius: f32,
    ring: Option<RingStyle>,
) {
    for point in points {
        scope.draw_circle(point.position, disc_radius, Brush::solid(point.color));
    }

    if let Some(ring) = ring {
        if let Some(point) = points.get(ring.index) {
            scope.draw_ring(
                point.position,
                ring.radius,
                ring.stroke_width,
                Brush::solid(ring.color),
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
