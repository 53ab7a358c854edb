//! Shape payloads and `DrawList` push helpers, one file per shape.

pub mod circle;
pub mod polygon;
pub mod text;

pub use circle::CircleCmd;
pub use polygon::PolygonCmd;
pub use text::{TextAnchor, TextCmd};
