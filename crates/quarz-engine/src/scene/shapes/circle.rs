use crate::coords::Vec2;
use crate::paint::{Color, Stroke};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Circle draw payload.
///
/// Either `fill` or `outline` (or both) may be present; an all-`None` circle
/// is legal but draws nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Option<Color>,
    pub outline: Option<Stroke>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Option<Color>, outline: Option<Stroke>) -> Self {
        Self { center, radius, fill, outline }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        outline: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, fill, outline)));
    }

    /// Records a solid filled circle.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_circle(z, center, radius, Some(color), None);
    }

    /// Records an unfilled circle outline (e.g. the clock's outer ring).
    #[inline]
    pub fn push_circle_outline(&mut self, z: ZIndex, center: Vec2, radius: f32, stroke: Stroke) {
        self.push_circle(z, center, radius, None, Some(stroke));
    }
}
