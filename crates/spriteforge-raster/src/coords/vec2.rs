use core::ops::{Add, Div, Mul, Sub};

/// 2D point/vector in pixel space.
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

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    /// Rotates this point by `radians` around `pivot`.
    ///
    /// Positive angles rotate clockwise in the canonical top-left/+Y-down space.
    #[inline]
    pub fn rotated_about(self, pivot: Vec2, radians: f32) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        let d = self - pivot;
        Vec2::new(
            pivot.x + d.x * cos - d.y * sin,
            pivot.y + d.x * sin + d.y * cos,
        )
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
    use super::*;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a.x - b.x).abs() < 1e-4, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-4, "{a:?} != {b:?}");
    }

    // ── distance ──────────────────────────────────────────────────────────

    #[test]
    fn distance_along_axis() {
        assert_eq!(Vec2::new(1.0, 2.0).distance(Vec2::new(4.0, 2.0)), 3.0);
    }

    #[test]
    fn distance_diagonal() {
        assert_eq!(Vec2::zero().distance(Vec2::new(3.0, 4.0)), 5.0);
    }

    // ── rotated_about ─────────────────────────────────────────────────────

    #[test]
    fn rotate_zero_angle_is_identity() {
        let p = Vec2::new(7.0, -3.0);
        assert_close(p.rotated_about(Vec2::new(1.0, 1.0), 0.0), p);
    }

    #[test]
    fn rotate_quarter_turn_about_origin() {
        let p = Vec2::new(1.0, 0.0);
        let r = p.rotated_about(Vec2::zero(), std::f32::consts::FRAC_PI_2);
        assert_close(r, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn rotate_half_turn_about_pivot() {
        let p = Vec2::new(3.0, 2.0);
        let r = p.rotated_about(Vec2::new(2.0, 2.0), std::f32::consts::PI);
        assert_close(r, Vec2::new(1.0, 2.0));
    }
}
