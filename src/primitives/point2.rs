//! 2D point type for positions.

use super::Vec2;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A 2D point representing a position.
///
/// Subtracting two points yields a [`Vec2`]; adding a [`Vec2`] to a point
/// yields a point. Coordinates follow the screen convention (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the point at (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, F::from(0.5).unwrap())
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// Rotates the point about `pivot` by `radians`.
    ///
    /// `x' = (x - px) cos - (y - py) sin + px`, `y' = (x - px) sin + (y - py) cos + py`.
    #[inline]
    pub fn rotated_about(self, pivot: Self, radians: F) -> Self {
        pivot + (self - pivot).rotated(radians)
    }

    /// Converts the position into an offset from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, offset: Vec2<F>) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, offset: Vec2<F>) -> Self {
        Self::new(self.x - offset.x, self.y - offset.y)
    }
}

impl<F: Float> AddAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn add_assign(&mut self, offset: Vec2<F>) {
        self.x = self.x + offset.x;
        self.y = self.y + offset.y;
    }
}

impl<F: Float> SubAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn sub_assign(&mut self, offset: Vec2<F>) {
        self.x = self.x - offset.x;
        self.y = self.y - offset.y;
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: fmt::Display> fmt::Display for Point2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_point_vector_arithmetic() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        let v = b - a;
        assert_eq!(v, Vec2::new(3.0, 4.0));
        assert_eq!(a + v, b);
        assert_eq!(b - v, a);

        let mut c = a;
        c += v;
        assert_eq!(c, b);
        c -= v;
        assert_eq!(c, a);
    }

    #[test]
    fn test_midpoint() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 4.0);
        assert_eq!(a.midpoint(b), Point2::new(1.0, 2.0));
    }

    #[test]
    fn test_rotated_about() {
        let p: Point2<f64> = Point2::new(2.0, 1.0);
        let pivot = Point2::new(1.0, 1.0);
        let r = p.rotated_about(pivot, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(r.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let p: Point2<f32> = Point2::new(1.5, -2.0);
        assert_eq!(p.to_string(), "{1.5, -2}");
    }
}
