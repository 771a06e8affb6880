//! Grid-to-pixel mapping for the preview canvas.

use egui::Pos2;

use super::point::Point;

/// Position on the canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

impl PixelPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to an egui screen position relative to `origin`.
    pub fn to_pos2(self, origin: Pos2) -> Pos2 {
        #[allow(clippy::cast_possible_truncation)]
        {
            Pos2::new(origin.x + self.x as f32, origin.y + self.y as f32)
        }
    }
}

/// Canvas geometry: size, padding around the grid, and cell counts.
///
/// Grid point `(0, 0)` sits on the top-left padding corner and
/// `(hcells, vcells)` on the bottom-right one. Values outside that range map
/// outside the grid (and possibly off the canvas); nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMapping {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub hcells: u32,
    pub vcells: u32,
}

impl GridMapping {
    pub const DEFAULT_CELLS: u32 = 10;
    pub const DEFAULT_PADDING: f64 = 20.0;

    /// Build a mapping; cell counts below one are raised to one.
    pub const fn new(width: f64, height: f64, padding: f64, hcells: u32, vcells: u32) -> Self {
        Self {
            width,
            height,
            padding,
            hcells: if hcells == 0 { 1 } else { hcells },
            vcells: if vcells == 0 { 1 } else { vcells },
        }
    }

    pub fn inner_width(&self) -> f64 {
        2.0f64.mul_add(-self.padding, self.width)
    }

    pub fn inner_height(&self) -> f64 {
        2.0f64.mul_add(-self.padding, self.height)
    }

    pub fn cell_width(&self) -> f64 {
        self.inner_width() / f64::from(self.hcells)
    }

    pub fn cell_height(&self) -> f64 {
        self.inner_height() / f64::from(self.vcells)
    }

    /// Map a grid-space point to canvas pixels.
    pub fn map(&self, point: Point) -> PixelPos {
        PixelPos {
            x: point.x.mul_add(self.cell_width(), self.padding),
            y: point.y.mul_add(self.cell_height(), self.padding),
        }
    }
}

impl Default for GridMapping {
    fn default() -> Self {
        Self::new(
            0.0,
            0.0,
            Self::DEFAULT_PADDING,
            Self::DEFAULT_CELLS,
            Self::DEFAULT_CELLS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn map_matches_linear_formula() {
        let mapping = GridMapping::new(640.0, 480.0, 20.0, 10, 10);
        for (x, y) in [(0.0, 0.0), (3.0, 4.0), (-2.5, 11.25), (10.0, 10.0)] {
            let px = mapping.map(Point::new(x, y));
            assert!(close(px.x, x * (640.0 - 2.0 * 20.0) / 10.0 + 20.0));
            assert!(close(px.y, y * (480.0 - 2.0 * 20.0) / 10.0 + 20.0));
        }
    }

    #[test]
    fn grid_corners_land_on_padding() {
        let mapping = GridMapping::new(220.0, 120.0, 10.0, 10, 5);
        let origin = mapping.map(Point::new(0.0, 0.0));
        let far = mapping.map(Point::new(10.0, 5.0));
        assert!(close(origin.x, 10.0) && close(origin.y, 10.0));
        assert!(close(far.x, 210.0) && close(far.y, 110.0));
    }

    #[test]
    fn zero_cells_are_raised_to_one() {
        let mapping = GridMapping::new(100.0, 100.0, 0.0, 0, 0);
        assert_eq!((mapping.hcells, mapping.vcells), (1, 1));
        assert!(mapping.map(Point::new(1.0, 1.0)).x.is_finite());
    }

    #[test]
    fn out_of_range_points_are_not_clamped() {
        let mapping = GridMapping::new(120.0, 120.0, 10.0, 10, 10);
        let px = mapping.map(Point::new(-5.0, 20.0));
        assert!(close(px.x, -40.0));
        assert!(close(px.y, 210.0));
    }
}
