//! Fill and stroke descriptions consumed by the scene and renderers.

mod color;

pub use color::Color;

/// Outline description for shapes that support a border ring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
