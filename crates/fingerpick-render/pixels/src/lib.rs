//! CPU rasterizer that turns [`DrawPrimitive`]s into an RGBA8 frame, the
//! format `pixels` hands out.

mod draw;

use std::fmt;

use fingerpick_ui_graphics::{Color, DrawPrimitive};

pub use draw::draw_primitives;

/// Default surface color behind the discs.
pub const BACKGROUND: Color = Color::from_argb(0xFF121218);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The frame buffer does not hold `width * height` RGBA pixels.
    FrameSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::FrameSizeMismatch { expected, actual } => write!(
                f,
                "frame buffer holds {actual} bytes, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for RasterError {}

pub struct PixelsRenderer {
    background: Color,
    primitives: Vec<DrawPrimitive>,
}

impl Default for PixelsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelsRenderer {
    pub fn new() -> Self {
        Self::with_background(BACKGROUND)
    }

    pub fn with_background(background: Color) -> Self {
        Self {
            background,
            primitives: Vec::new(),
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Replaces the scene painted by the next [`PixelsRenderer::draw`].
    pub fn set_primitives(&mut self, primitives: Vec<DrawPrimitive>) {
        self.primitives = primitives;
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn draw(&self, frame: &mut [u8], width: u32, height: u32) -> Result<(), RasterError> {
        draw::draw_primitives(frame, width, height, &self.primitives, self.background)
    }
}
