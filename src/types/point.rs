/// Coordinate column of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    X,
    Y,
}

impl Field {
    pub const fn label(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
        }
    }
}

/// A point in grid space (cells, not pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn get(self, field: Field) -> f64 {
        match field {
            Field::X => self.x,
            Field::Y => self.y,
        }
    }

    pub const fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::X => self.x = value,
            Field::Y => self.y = value,
        }
    }

    /// Replace non-finite coordinates with zero.
    pub fn finite_or_zero(self) -> Self {
        Self {
            x: if self.x.is_finite() { self.x } else { 0.0 },
            y: if self.y.is_finite() { self.y } else { 0.0 },
        }
    }
}
