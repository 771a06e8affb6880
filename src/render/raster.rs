use std::ops::Range;

use anyhow::{Context as _, bail};
use image::{Rgba as ImagePixel, RgbaImage};

use super::primitive::Canvas;
use crate::types::{PixelPos, Rgba};

/// Largest edge accepted for an off-screen surface.
pub const MAX_SURFACE_DIM: u32 = 16_384;

/// Pixel columns/rows whose centers fall inside `[lo, hi]`, clipped to the
/// surface.
fn covered_range(lo: f64, hi: f64, limit: u32) -> Option<Range<u32>> {
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).floor() + 1.0;
    let end = end.min(f64::from(limit));
    if end <= start {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        Some(start as u32..end as u32)
    }
}

fn distance_to_segment(px: f64, py: f64, from: PixelPos, to: PixelPos) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len_sq = dx.mul_add(dx, dy * dy);
    let t = if len_sq <= f64::EPSILON {
        0.0
    } else {
        ((px - from.x).mul_add(dx, (py - from.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let cx = t.mul_add(dx, from.x);
    let cy = t.mul_add(dy, from.y);
    (px - cx).hypot(py - cy)
}

fn blend_channel(src: u8, dst: u8, alpha: f32) -> u8 {
    let mixed = f32::from(src).mul_add(alpha, f32::from(dst) * (1.0 - alpha));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        mixed.round().clamp(0.0, 255.0) as u8
    }
}

/// Off-screen opaque RGBA drawing surface.
///
/// Primitives are rasterized without anti-aliasing: a pixel is painted when
/// its center lies inside the shape. Translucent colors are blended over the
/// current contents.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Allocate a white surface.
    pub fn new(width: u32, height: u32) -> anyhow::Result<Self> {
        if width == 0 || height == 0 {
            bail!("Cannot allocate an empty {width}x{height} surface");
        }
        if width > MAX_SURFACE_DIM || height > MAX_SURFACE_DIM {
            bail!("Surface {width}x{height} exceeds the {MAX_SURFACE_DIM}px limit");
        }
        let len = u64::from(width) * u64::from(height) * 4;
        usize::try_from(len).context("Surface does not fit in memory")?;
        let mut surface = Self {
            image: RgbaImage::new(width, height),
        };
        surface.clear(Rgba::WHITE);
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn paint_where(
        &mut self,
        xs: Option<Range<u32>>,
        ys: Option<Range<u32>>,
        color: Rgba,
        inside: impl Fn(f64, f64) -> bool,
    ) {
        let (Some(xs), Some(ys)) = (xs, ys) else {
            return;
        };
        let [r, g, b, a] = color.to_rgba8();
        if a == 0 {
            return;
        }
        let alpha = f32::from(a) / 255.0;
        for y in ys {
            for x in xs.clone() {
                if !inside(f64::from(x) + 0.5, f64::from(y) + 0.5) {
                    continue;
                }
                let dst = self.image.get_pixel_mut(x, y);
                let [dr, dg, db, _] = dst.0;
                *dst = ImagePixel([
                    blend_channel(r, dr, alpha),
                    blend_channel(g, dg, alpha),
                    blend_channel(b, db, alpha),
                    u8::MAX,
                ]);
            }
        }
    }
}

impl Canvas for RasterSurface {
    fn clear(&mut self, color: Rgba) {
        let [r, g, b, _] = color.to_rgba8();
        for pixel in self.image.pixels_mut() {
            *pixel = ImagePixel([r, g, b, u8::MAX]);
        }
    }

    fn line(&mut self, from: PixelPos, to: PixelPos, color: Rgba, width: f64) {
        let half = (width * 0.5).max(0.5);
        let xs = covered_range(from.x.min(to.x) - half, from.x.max(to.x) + half, self.width());
        let ys = covered_range(
            from.y.min(to.y) - half,
            from.y.max(to.y) + half,
            self.height(),
        );
        self.paint_where(xs, ys, color, |px, py| {
            distance_to_segment(px, py, from, to) <= half
        });
    }

    fn circle_filled(&mut self, center: PixelPos, radius: f64, color: Rgba) {
        let radius = radius.max(0.5);
        let xs = covered_range(center.x - radius, center.x + radius, self.width());
        let ys = covered_range(center.y - radius, center.y + radius, self.height());
        self.paint_where(xs, ys, color, |px, py| {
            (px - center.x).hypot(py - center.y) <= radius
        });
    }

    fn rect_stroke(&mut self, min: PixelPos, width: f64, height: f64, color: Rgba, stroke: f64) {
        let max = PixelPos::new(min.x + width, min.y + height);
        let top_right = PixelPos::new(max.x, min.y);
        let bottom_left = PixelPos::new(min.x, max.y);
        self.line(min, top_right, color, stroke);
        self.line(top_right, max, color, stroke);
        self.line(max, bottom_left, color, stroke);
        self.line(bottom_left, min, color, stroke);
    }
}
