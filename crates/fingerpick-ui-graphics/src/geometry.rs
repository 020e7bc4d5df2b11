//! Geometric primitives and the draw-primitive list: Point, Size, Rect, DrawScope

use crate::Brush;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Square bounding box of a circle.
    pub fn around(center: Point, radius: f32) -> Self {
        Self {
            x: center.x - radius,
            y: center.y - radius,
            width: radius * 2.0,
            height: radius * 2.0,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        brush: Brush,
    },
    /// Filled disc.
    Circle {
        center: Point,
        radius: f32,
        brush: Brush,
    },
    /// Stroked circle; the stroke is centered on `radius`.
    Ring {
        center: Point,
        radius: f32,
        stroke_width: f32,
        brush: Brush,
    },
}

impl DrawPrimitive {
    /// Pixel-space bounds touched by the primitive.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawPrimitive::Rect { rect, .. } => *rect,
            DrawPrimitive::Circle { center, radius, .. } => Rect::around(*center, *radius),
            DrawPrimitive::Ring {
                center,
                radius,
                stroke_width,
                ..
            } => Rect::around(*center, radius + stroke_width / 2.0),
        }
    }
}

pub trait DrawScope {
    fn size(&self) -> Size;
    /// Draws a rectangle at the specified position and size.
    fn draw_rect_at(&mut self, rect: Rect, brush: Brush);
    fn draw_circle(&mut self, center: Point, radius: f32, brush: Brush);
    fn draw_ring(&mut self, center: Point, radius: f32, stroke_width: f32, brush: Brush);
    fn primitives(&self) -> &[DrawPrimitive];
}

#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_rect_at(&mut self, rect: Rect, brush: Brush) {
        self.primitives.push(DrawPrimitive::Rect { rect, brush });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, brush: Brush) {
        self.primitives.push(DrawPrimitive::Circle {
            center,
            radius,
            brush,
        });
    }

    fn draw_ring(&mut self, center: Point, radius: f32, stroke_width: f32, brush: Brush) {
        self.primitives.push(DrawPrimitive::Ring {
            center,
            radius,
            stroke_width,
            brush,
        });
    }

    fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }
}
