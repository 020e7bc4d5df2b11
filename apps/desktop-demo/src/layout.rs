use fingerpick_ui_graphics::{Brush, Color, DrawPrimitive, Point, Rect, Size};

const BUTTON_MAX_WIDTH: f32 = 320.0;
const BUTTON_HEIGHT: f32 = 96.0;
const BUTTON_MARGIN: f32 = 48.0;

const BUTTON_TOP: Color = Color::from_argb(0xFF5A5D63);
const BUTTON_BOTTOM: Color = Color::from_argb(0xFF424444);

/// Placement of the picker surface and its start button in the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenLayout {
    size: Size,
    start_button: Rect,
}

impl ScreenLayout {
    pub fn new(size: Size) -> Self {
        let width = (size.width * 0.5).min(BUTTON_MAX_WIDTH);
        let height = BUTTON_HEIGHT.min(size.height);
        let x = (size.width - width) / 2.0;
        let y = (size.height - height - BUTTON_MARGIN).max(0.0);
        Self {
            size,
            start_button: Rect::new(x, y, width, height),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Frame buffer dimensions in whole pixels.
    pub fn buffer_size(&self) -> (u32, u32) {
        (self.size.width as u32, self.size.height as u32)
    }

    pub fn start_button(&self) -> Rect {
        self.start_button
    }

    pub fn hits_start(&self, point: Point) -> bool {
        self.start_button.contains(point.x, point.y)
    }

    /// The picker's primitives with the start button painted on top.
    pub fn compose(&self, mut picker: Vec<DrawPrimitive>) -> Vec<DrawPrimitive> {
        picker.push(DrawPrimitive::Rect {
            rect: self.start_button,
            brush: Brush::linear_gradient(vec![BUTTON_TOP, BUTTON_BOTTOM]),
        });
        picker
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
