use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled convex polygon payload.
///
/// Vertices are in perimeter order (either winding). The renderer
/// tessellates with a triangle fan, so concave outlines are not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub vertices: Vec<Vec2>,
    pub fill: Color,
}

impl PolygonCmd {
    #[inline]
    pub fn new(vertices: Vec<Vec2>, fill: Color) -> Self {
        Self { vertices, fill }
    }
}

impl DrawList {
    /// Records a filled convex polygon. Fewer than 3 vertices draws nothing.
    #[inline]
    pub fn push_polygon(&mut self, z: ZIndex, vertices: impl Into<Vec<Vec2>>, fill: Color) {
        self.push(z, DrawCmd::Polygon(PolygonCmd::new(vertices.into(), fill)));
    }
}
