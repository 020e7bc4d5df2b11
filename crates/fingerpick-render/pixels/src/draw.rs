use fingerpick_ui_graphics::{Brush, Color, DrawPrimitive, Point, Rect};

use crate::RasterError;

#[derive(Clone, Copy)]
struct ClipBounds {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

fn clip_rect_to_bounds(rect: Rect, width: u32, height: u32) -> Option<ClipBounds> {
    let min_x = rect.x.max(0.0);
    let min_y = rect.y.max(0.0);
    let max_x = (rect.x + rect.width).min(width as f32);
    let max_y = (rect.y + rect.height).min(height as f32);

    if max_x <= min_x || max_y <= min_y {
        return None;
    }

    let min_x = (min_x.floor() as i32).clamp(0, width as i32);
    let min_y = (min_y.floor() as i32).clamp(0, height as i32);
    let max_x = (max_x.ceil() as i32).clamp(0, width as i32);
    let max_y = (max_y.ceil() as i32).clamp(0, height as i32);

    if min_x >= max_x || min_y >= max_y {
        return None;
    }

    Some(ClipBounds {
        min_x,
        min_y,
        max_x,
        max_y,
    })
}

/// Clears `frame` to `background` and paints `primitives` over it in order.
///
/// `frame` is RGBA8, row-major, `width * height` pixels.
pub fn draw_primitives(
    frame: &mut [u8],
    width: u32,
    height: u32,
    primitives: &[DrawPrimitive],
    background: Color,
) -> Result<(), RasterError> {
    let expected = width as usize * height as usize * 4;
    if frame.len() != expected {
        return Err(RasterError::FrameSizeMismatch {
            expected,
            actual: frame.len(),
        });
    }

    let clear = background.to_rgba_u8();
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&clear);
    }

    for primitive in primitives {
        draw_shape(frame, width, height, primitive);
    }
    log::trace!("rasterized {} primitives at {width}x{height}", primitives.len());
    Ok(())
}

/// Fraction of the pixel centered at (x, y) covered by `primitive`, with a
/// one pixel soft edge.
fn coverage(primitive: &DrawPrimitive, x: f32, y: f32) -> f32 {
    match primitive {
        DrawPrimitive::Rect { rect, .. } => {
            if rect.contains(x, y) {
                1.0
            } else {
                0.0
            }
        }
        DrawPrimitive::Circle { center, radius, .. } => {
            let distance = Point::new(x, y).distance_to(*center);
            (radius + 0.5 - distance).clamp(0.0, 1.0)
        }
        DrawPrimitive::Ring {
            center,
            radius,
            stroke_width,
            ..
        } => {
            let distance = Point::new(x, y).distance_to(*center);
            let half = stroke_width.max(0.0) / 2.0;
            (half + 0.5 - (distance - radius).abs()).clamp(0.0, 1.0)
        }
    }
}

fn brush_of(primitive: &DrawPrimitive) -> &Brush {
    match primitive {
        DrawPrimitive::Rect { brush, .. }
        | DrawPrimitive::Circle { brush, .. }
        | DrawPrimitive::Ring { brush, .. } => brush,
    }
}

fn draw_shape(frame: &mut [u8], width: u32, height: u32, primitive: &DrawPrimitive) {
    let bounds = primitive.bounds();
    let soft = Rect::new(
        bounds.x - 1.0,
        bounds.y - 1.0,
        bounds.width + 2.0,
        bounds.height + 2.0,
    );
    let Some(clip_bounds) = clip_rect_to_bounds(soft, width, height) else {
        return;
    };
    let brush = brush_of(primitive);
    for py in clip_bounds.min_y..clip_bounds.max_y {
        for px in clip_bounds.min_x..clip_bounds.max_x {
            let center_x = px as f32 + 0.5;
            let center_y = py as f32 + 0.5;
            let covered = coverage(primitive, center_x, center_y);
            if covered <= 0.0 {
                continue;
            }
            let sample = sample_brush(brush, bounds, center_x, center_y);
            let alpha = sample[3] * covered;
            if alpha <= 0.0 {
                continue;
            }
            let idx = ((py as u32 * width + px as u32) * 4) as usize;
            blend(&mut frame[idx..idx + 4], sample, alpha);
        }
    }
}

/// Source-over blend of `sample` at `alpha` onto one RGBA8 pixel.
fn blend(existing: &mut [u8], sample: [f32; 4], alpha: f32) {
    for i in 0..3 {
        let dst = existing[i] as f32 / 255.0;
        let out = sample[i] * alpha + dst * (1.0 - alpha);
        existing[i] = (out.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    let dst_a = existing[3] as f32 / 255.0;
    let out_a = alpha + dst_a * (1.0 - alpha);
    existing[3] = (out_a.clamp(0.0, 1.0) * 255.0).round() as u8;
}

fn color_to_rgba(color: Color) -> [f32; 4] {
    [
        color.0.clamp(0.0, 1.0),
        color.1.clamp(0.0, 1.0),
        color.2.clamp(0.0, 1.0),
        color.3.clamp(0.0, 1.0),
    ]
}

fn sample_brush(brush: &Brush, rect: Rect, _x: f32, y: f32) -> [f32; 4] {
    match brush {
        Brush::Solid(color) => color_to_rgba(*color),
        Brush::LinearGradient(colors) => {
            let t = if rect.height.abs() <= f32::EPSILON {
                0.0
            } else {
                ((y - rect.y) / rect.height).clamp(0.0, 1.0)
            };
            color_to_rgba(interpolate_colors(colors, t))
        }
    }
}

fn interpolate_colors(colors: &[Color], t: f32) -> Color {
    let (Some(first), Some(last)) = (colors.first(), colors.last()) else {
        return Color::TRANSPARENT;
    };
    if colors.len() == 1 {
        return *first;
    }
    let segments = (colors.len() - 1) as f32;
    let scaled = t.clamp(0.0, 1.0) * segments;
    let index = scaled.floor() as usize;
    if index >= colors.len() - 1 {
        return *last;
    }
    let frac = scaled - index as f32;
    lerp_color(colors[index], colors[index + 1], frac)
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let lerp = |start: f32, end: f32| start + (end - start) * t;
    Color(
        lerp(a.0, b.0),
        lerp(a.1, b.1),
        lerp(a.2, b.2),
        lerp(a.3, b.3),
    )
}

#[cfg(test)]
#[path = "tests/draw_tests.rs"]
mod tests;
