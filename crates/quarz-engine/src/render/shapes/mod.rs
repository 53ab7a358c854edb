//! One renderer per scene shape.

mod common;

pub mod circle;
pub mod polygon;
pub mod text;

pub use circle::CircleRenderer;
pub use polygon::PolygonRenderer;
pub use text::TextRenderer;
