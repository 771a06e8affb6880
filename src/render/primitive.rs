use crate::types::{PixelPos, Rgba};

/// One drawing instruction in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Line {
        from: PixelPos,
        to: PixelPos,
        color: Rgba,
        width: f64,
    },
    Circle {
        center: PixelPos,
        radius: f64,
        color: Rgba,
    },
    /// Stroked (unfilled) axis-aligned rectangle.
    Rect {
        min: PixelPos,
        width: f64,
        height: f64,
        color: Rgba,
        stroke: f64,
    },
}

/// Immediate-mode drawing target for [`Primitive`]s.
pub trait Canvas {
    fn clear(&mut self, color: Rgba);
    fn line(&mut self, from: PixelPos, to: PixelPos, color: Rgba, width: f64);
    fn circle_filled(&mut self, center: PixelPos, radius: f64, color: Rgba);
    fn rect_stroke(&mut self, min: PixelPos, width: f64, height: f64, color: Rgba, stroke: f64);
}

impl Primitive {
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match *self {
            Self::Line {
                from,
                to,
                color,
                width,
            } => canvas.line(from, to, color, width),
            Self::Circle {
                center,
                radius,
                color,
            } => canvas.circle_filled(center, radius, color),
            Self::Rect {
                min,
                width,
                height,
                color,
                stroke,
            } => canvas.rect_stroke(min, width, height, color, stroke),
        }
    }
}

/// Replay a whole frame onto `canvas`, in order.
pub fn draw_all<C: Canvas + ?Sized>(primitives: &[Primitive], canvas: &mut C) {
    for primitive in primitives {
        primitive.draw(canvas);
    }
}
