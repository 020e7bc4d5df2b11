//! Brush definitions for painting (solid colors, gradients)

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Vertical gradient, evenly spaced stops from top to bottom.
    LinearGradient(Vec<Color>),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn linear_gradient(colors: Vec<Color>) -> Self {
        Brush::LinearGradient(colors)
    }

    /// The solid color, if this brush has one.
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Brush::Solid(color) => Some(*color),
            Brush::LinearGradient(_) => None,
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}
