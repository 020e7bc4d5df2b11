//! Pure math/data for drawing in FingerPick
//!
//! Geometry primitives, ARGB colors, brushes and the draw-primitive list
//! that widgets emit and renderers consume.

mod brush;
mod color;
mod geometry;

pub use brush::*;
pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{DrawPrimitive, DrawScope, Point, Rect, Size};
}
