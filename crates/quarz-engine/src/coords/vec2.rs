use core::ops::{Add, Div, Mul, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector for a clock-style angle: radians measured clockwise from
    /// straight up (12 o'clock). Angle 0 points up; +Y is down on screen,
    /// hence the negated cosine.
    #[inline]
    pub fn from_clock_angle(angle: f32) -> Self {
        Self {
            x: angle.sin(),
            y: -angle.cos(),
        }
    }

    /// Clockwise perpendicular (rotated 90° in screen space).
    #[inline]
    pub fn perp(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::Vec2;

    const EPS: f32 = 1e-5;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn clock_angle_cardinal_directions() {
        use core::f32::consts::PI;

        // 12 o'clock points up (−Y), 3 o'clock right, 6 o'clock down.
        assert!(close(Vec2::from_clock_angle(0.0), Vec2::new(0.0, -1.0)));
        assert!(close(Vec2::from_clock_angle(PI / 2.0), Vec2::new(1.0, 0.0)));
        assert!(close(Vec2::from_clock_angle(PI), Vec2::new(0.0, 1.0)));
        assert!(close(Vec2::from_clock_angle(1.5 * PI), Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn perp_is_orthogonal() {
        let v = Vec2::new(3.0, 4.0);
        let p = v.perp();
        assert!((v.x * p.x + v.y * p.y).abs() < EPS);
        assert!((p.length() - v.length()).abs() < EPS);
    }
}
