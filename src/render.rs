//! Turns the store into an ordered list of drawing primitives.
//!
//! Frame order is grid lines, border, then for every path its segments and
//! point markers. Later primitives paint over earlier ones.

mod primitive;
mod raster;

pub use primitive::{Canvas, Primitive, draw_all};
pub use raster::RasterSurface;

use crate::model::Store;
use crate::style::StyleConfig;
use crate::types::{GridMapping, PixelPos, Point, Rgba};

/// Stroke width of grid lines and the border, in pixels.
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// Build the primitive sequence for one frame.
pub fn render(store: &Store, mapping: &GridMapping, style: &StyleConfig) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(estimate_len(store, mapping, style));
    if style.grid_enabled() {
        push_grid(&mut out, mapping, style.grid_color());
    }
    for (index, path) in store.paths().iter().enumerate() {
        push_path(
            &mut out,
            path.points(),
            mapping,
            style,
            style.line_color_for(index),
        );
    }
    out
}

fn estimate_len(store: &Store, mapping: &GridMapping, style: &StyleConfig) -> usize {
    let grid = if style.grid_enabled() {
        usize::try_from(mapping.hcells.saturating_add(mapping.vcells)).unwrap_or(0) + 1
    } else {
        0
    };
    grid + store.point_count() * 2 + store.len()
}

fn push_grid(out: &mut Vec<Primitive>, mapping: &GridMapping, color: Rgba) {
    let top = mapping.padding;
    let left = mapping.padding;
    let bottom = mapping.height - mapping.padding;
    let right = mapping.width - mapping.padding;
    for i in 0..mapping.hcells {
        let x = f64::from(i).mul_add(mapping.cell_width(), left);
        out.push(Primitive::Line {
            from: PixelPos::new(x, top),
            to: PixelPos::new(x, bottom),
            color,
            width: GRID_LINE_WIDTH,
        });
    }
    for i in 0..mapping.vcells {
        let y = f64::from(i).mul_add(mapping.cell_height(), top);
        out.push(Primitive::Line {
            from: PixelPos::new(left, y),
            to: PixelPos::new(right, y),
            color,
            width: GRID_LINE_WIDTH,
        });
    }
    out.push(Primitive::Rect {
        min: PixelPos::new(left, top),
        width: mapping.inner_width(),
        height: mapping.inner_height(),
        color,
        stroke: GRID_LINE_WIDTH,
    });
}

fn push_path(
    out: &mut Vec<Primitive>,
    points: &[Point],
    mapping: &GridMapping,
    style: &StyleConfig,
    line_color: Rgba,
) {
    let Some(last) = points.last() else {
        return;
    };
    let marker = |center: PixelPos| Primitive::Circle {
        center,
        radius: style.point_radius(),
        color: style.point_color(),
    };
    // Segments first so no later segment covers an earlier marker.
    for pair in points.windows(2) {
        out.push(Primitive::Line {
            from: mapping.map(pair[0].finite_or_zero()),
            to: mapping.map(pair[1].finite_or_zero()),
            color: line_color,
            width: style.line_width(),
        });
    }
    for point in points.iter().skip(1) {
        out.push(marker(mapping.map(point.finite_or_zero())));
    }
    out.push(marker(mapping.map(last.finite_or_zero())));
}

#[cfg(test)]
mod tests;
