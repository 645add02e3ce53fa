//! Screen-space offsets.

use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// An offset in screen space.
///
/// Polygon edges, separating axes and minimum translation vectors are all
/// `Vec2`s; positions are [`Point2`](super::Point2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Vector of the given `length` pointing at `direction` degrees.
    ///
    /// Screen convention: 0 points right, 90 points up (negative y).
    ///
    /// ```
    /// use polycollide::Vec2;
    ///
    /// let up: Vec2<f64> = Vec2::from_length_dir(2.0, 90.0);
    /// assert!(up.x.abs() < 1e-12);
    /// assert!((up.y + 2.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_length_dir(length: F, direction: F) -> Self {
        crate::angle::length_dir(length, direction)
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Signed area of the parallelogram spanned by `self` and `other`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` for (near) zero length.
    ///
    /// Separating-axis tests skip edges that fail to normalize.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let len = self.magnitude();
        (len > F::epsilon()).then(|| self / len)
    }

    /// `(-y, x)`: the edge normal used as a separating axis.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates about the origin by `radians`.
    #[inline]
    pub fn rotated(self, radians: F) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<F: Float> AddAssign for Vec2<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, factor: F) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, divisor: F) -> Self {
        Self::new(self.x / divisor, self.y / divisor)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_and_cross() {
        let edge: Vec2<f64> = Vec2::new(2.0, -1.0);
        let axis = Vec2::new(0.5, 3.0);
        assert_eq!(edge.dot(axis), -2.0);
        assert_eq!(Vec2::new(1.0, 0.0).cross(Vec2::new(0.0, 1.0)), 1.0);
        assert_eq!(Vec2::new(0.0, 1.0).cross(Vec2::new(1.0, 0.0)), -1.0);
    }

    #[test]
    fn test_normalize() {
        let axis = Vec2::new(-8.0_f64, 6.0).normalize().unwrap();
        assert_relative_eq!(axis.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(axis.x, -0.8, epsilon = 1e-12);
        assert_relative_eq!(axis.y, 0.6, epsilon = 1e-12);
        assert!(Vec2::<f64>::zero().normalize().is_none());
    }

    #[test]
    fn test_perpendicular_is_edge_normal() {
        let edge: Vec2<f64> = Vec2::new(4.0, 1.0);
        let normal = edge.perpendicular();
        assert_eq!(normal, Vec2::new(-1.0, 4.0));
        assert_eq!(edge.dot(normal), 0.0);
    }

    #[test]
    fn test_rotated_quarter_turn() {
        let v: Vec2<f64> = Vec2::new(1.0, 0.0);
        let r = v.rotated(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_length_dir() {
        let right: Vec2<f64> = Vec2::from_length_dir(3.0, 0.0);
        assert_relative_eq!(right.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(right.y, 0.0, epsilon = 1e-12);

        let left: Vec2<f64> = Vec2::from_length_dir(3.0, 180.0);
        assert_relative_eq!(left.x, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_operators() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b: Vec2<f64> = Vec2::new(3.0, 4.0);

        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vec2::new(4.0, 6.0));
        c -= b;
        assert_eq!(c, a);
    }

    #[quickcheck_macros::quickcheck]
    fn rotation_preserves_magnitude(x: f64, y: f64, angle: f64) -> bool {
        if !(x.is_finite() && y.is_finite() && angle.is_finite()) {
            return true;
        }
        let (x, y, angle) = (x % 1e6, y % 1e6, angle % 1e3);
        let v = Vec2::new(x, y);
        (v.magnitude() - v.rotated(angle).magnitude()).abs() <= 1e-6 * (1.0 + v.magnitude())
    }
}
