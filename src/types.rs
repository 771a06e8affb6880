//! Grid-space and pixel-space value types shared by the model and the renderer.

mod color;
mod mapping;
mod point;

pub use color::Rgba;
pub use mapping::{GridMapping, PixelPos};
pub use point::{Field, Point};
