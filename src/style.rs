//! Colors, widths and toggles applied uniformly to one rendered frame.

use crate::types::Rgba;

/// Line colors cycled through when every path gets its own color.
pub const PATH_PALETTE: [Rgba; 8] = [
    Rgba::opaque(0.800, 0.000, 0.000),
    Rgba::opaque(0.204, 0.396, 0.643),
    Rgba::opaque(0.306, 0.604, 0.024),
    Rgba::opaque(0.961, 0.475, 0.000),
    Rgba::opaque(0.459, 0.314, 0.482),
    Rgba::opaque(0.757, 0.490, 0.067),
    Rgba::opaque(0.024, 0.596, 0.604),
    Rgba::opaque(0.929, 0.831, 0.000),
];

pub const DEFAULT_LINE_WIDTH: f64 = 5.0;
pub const DEFAULT_POINT_RADIUS: f64 = 5.0;
/// `#D3D7CF`
pub const DEFAULT_GRID_COLOR: Rgba = Rgba::opaque(0.827, 0.843, 0.812);
/// `#555753`
pub const DEFAULT_LINE_COLOR: Rgba = Rgba::opaque(0.333, 0.341, 0.325);
/// `#2E3436`
pub const DEFAULT_POINT_COLOR: Rgba = Rgba::opaque(0.180, 0.204, 0.212);

fn valid_size(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Current rendering settings.
///
/// Width and radius are always strictly positive: setters that would break
/// this leave the previous value in place and report `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    line_width: f64,
    point_radius: f64,
    grid_enabled: bool,
    color_per_path: bool,
    line_color: Rgba,
    grid_color: Rgba,
    point_color: Rgba,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            point_radius: DEFAULT_POINT_RADIUS,
            grid_enabled: true,
            color_per_path: false,
            line_color: DEFAULT_LINE_COLOR,
            grid_color: DEFAULT_GRID_COLOR,
            point_color: DEFAULT_POINT_COLOR,
        }
    }
}

impl StyleConfig {
    pub const fn line_width(&self) -> f64 {
        self.line_width
    }

    pub const fn point_radius(&self) -> f64 {
        self.point_radius
    }

    pub const fn grid_enabled(&self) -> bool {
        self.grid_enabled
    }

    pub const fn color_per_path(&self) -> bool {
        self.color_per_path
    }

    pub const fn line_color(&self) -> Rgba {
        self.line_color
    }

    pub const fn grid_color(&self) -> Rgba {
        self.grid_color
    }

    pub const fn point_color(&self) -> Rgba {
        self.point_color
    }

    /// Line color for the path at `path_index` in store order.
    pub const fn line_color_for(&self, path_index: usize) -> Rgba {
        if self.color_per_path {
            PATH_PALETTE[path_index % PATH_PALETTE.len()]
        } else {
            self.line_color
        }
    }

    pub fn set_line_width(&mut self, width: f64) -> bool {
        if !valid_size(width) {
            return false;
        }
        self.line_width = width;
        true
    }

    pub fn set_point_radius(&mut self, radius: f64) -> bool {
        if !valid_size(radius) {
            return false;
        }
        self.point_radius = radius;
        true
    }

    pub const fn set_grid_enabled(&mut self, enabled: bool) {
        self.grid_enabled = enabled;
    }

    pub const fn set_color_per_path(&mut self, enabled: bool) {
        self.color_per_path = enabled;
    }

    pub const fn set_line_color(&mut self, color: Rgba) {
        self.line_color = color;
    }

    pub const fn set_grid_color(&mut self, color: Rgba) {
        self.grid_color = color;
    }

    pub const fn set_point_color(&mut self, color: Rgba) {
        self.point_color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_hex_values() {
        let style = StyleConfig::default();
        assert_eq!(style.grid_color().to_hex(), "#D3D7CF");
        assert_eq!(style.line_color().to_hex(), "#555753");
        assert_eq!(style.point_color().to_hex(), "#2E3436");
        assert!(style.grid_enabled());
        assert!((style.line_width() - 5.0).abs() < f64::EPSILON);
        assert!((style.point_radius() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_positive_sizes_are_ignored() {
        let mut style = StyleConfig::default();
        assert!(!style.set_line_width(0.0));
        assert!(!style.set_line_width(-3.0));
        assert!(!style.set_point_radius(f64::NAN));
        assert!(!style.set_point_radius(f64::INFINITY));
        assert!((style.line_width() - DEFAULT_LINE_WIDTH).abs() < f64::EPSILON);
        assert!((style.point_radius() - DEFAULT_POINT_RADIUS).abs() < f64::EPSILON);

        assert!(style.set_line_width(0.5));
        assert!(style.set_point_radius(12.0));
        assert!((style.line_width() - 0.5).abs() < f64::EPSILON);
        assert!((style.point_radius() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn per_path_colors_cycle_through_palette() {
        let mut style = StyleConfig::default();
        assert_eq!(style.line_color_for(3), DEFAULT_LINE_COLOR);
        style.set_color_per_path(true);
        assert_ne!(style.line_color_for(0), style.line_color_for(1));
        assert_eq!(style.line_color_for(0), style.line_color_for(PATH_PALETTE.len()));
    }
}
