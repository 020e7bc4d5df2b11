//! Assertion helpers for draw output.

use fingerpick_ui_graphics::{Color, DrawPrimitive, Point};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Centers and colors of every disc, in paint order.
pub fn discs(primitives: &[DrawPrimitive]) -> Vec<(Point, Color)> {
    primitives
        .iter()
        .filter_map(|primitive| match primitive {
            DrawPrimitive::Circle { center, brush, .. } => {
                brush.as_solid().map(|color| (*center, color))
            }
            _ => None,
        })
        .collect()
}

/// The highlight ring, if one is painted: center, stroke width and color.
pub fn ring(primitives: &[DrawPrimitive]) -> Option<(Point, f32, Color)> {
    primitives.iter().find_map(|primitive| match primitive {
        DrawPrimitive::Ring {
            center,
            stroke_width,
            brush,
            ..
        } => brush.as_solid().map(|color| (*center, *stroke_width, color)),
        _ => None,
    })
}

/// Assert the ring is painted around `center` in `color`.
pub fn assert_ring_at(primitives: &[DrawPrimitive], center: Point, color: Color, msg: &str) {
    let Some((actual_center, _, actual_color)) = ring(primitives) else {
        panic!("{}: no ring in {:?}", msg, primitives);
    };
    assert_eq!(actual_center, center, "{}: ring center", msg);
    assert_eq!(actual_color, color, "{}: ring color", msg);
}

/// Assert nothing but discs are painted.
pub fn assert_no_ring(primitives: &[DrawPrimitive], msg: &str) {
    assert!(ring(primitives).is_none(), "{}: unexpected ring", msg);
}
