//! Circles, the round counterpart of the rectangle shorthand.

use super::{Point2, Rect2, Vec2};
use crate::angle::length_dir;
use crate::polygon::Polygon;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A circle in screen space.
///
/// Circles do not take part in polygon collision directly; use
/// [`to_polygon`](Self::to_polygon) for an inscribed collision shape.
///
/// # Example
///
/// ```
/// use polycollide::{Circle2, Point2};
///
/// let coin: Circle2<f64> = Circle2::from_position(Point2::new(10.0, 10.0), 4.0);
/// assert_eq!(coin.center, Point2::new(14.0, 14.0));
/// assert!(coin.contains(Point2::new(17.0, 14.0)));
/// assert!(!coin.contains(Point2::new(10.0, 10.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle2<F> {
    pub center: Point2<F>,
    /// Non-negative.
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Creates a circle whose bounding box has its top-left corner at `position`.
    #[inline]
    pub fn from_position(position: Point2<F>, radius: F) -> Self {
        Self {
            center: position + Vec2::new(radius, radius),
            radius,
        }
    }

    /// Top-left corner of the bounding box.
    #[inline]
    pub fn position(&self) -> Point2<F> {
        self.center - Vec2::new(self.radius, self.radius)
    }

    /// Returns the axis-aligned bounding rectangle.
    #[inline]
    pub fn bounding_rect(&self) -> Rect2<F> {
        let diameter = self.radius + self.radius;
        Rect2::new(self.position(), Vec2::new(diameter, diameter))
    }

    /// Returns true if `point` is inside or on the circle.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Returns true if the circles overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius
    }

    /// Returns true if the circle overlaps the rectangle.
    #[inline]
    pub fn intersects_rect(&self, rect: &Rect2<F>) -> bool {
        rect.intersects_circle(self)
    }

    /// Inscribed regular polygon with `sides` vertices (at least three).
    ///
    /// The first vertex sits at direction 0 (right of the center). The
    /// polygon is positioned at the center, so rotating it spins it in place.
    pub fn to_polygon(&self, sides: usize) -> Polygon<F> {
        let sides = sides.max(3);
        let step = F::from(360.0 / sides as f64).unwrap();
        let mut polygon: Polygon<F> = (0..sides)
            .map(|i| Point2::origin() + length_dir(self.radius, step * F::from(i).unwrap()))
            .collect();
        polygon.set_position(self.center);
        polygon
    }
}

impl<F: Float> Default for Circle2<F> {
    fn default() -> Self {
        Self::new(Point2::origin(), F::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_position() {
        let c: Circle2<f64> = Circle2::from_position(Point2::new(0.0, 0.0), 2.0);
        assert_eq!(c.center, Point2::new(2.0, 2.0));
        assert_eq!(c.position(), Point2::new(0.0, 0.0));
        assert_eq!(c.bounding_rect(), Rect2::from_coords(0.0, 0.0, 4.0, 4.0));
    }

    #[test]
    fn test_contains_boundary() {
        let c: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
        assert!(c.contains(Point2::new(1.0, 0.0)));
        assert!(!c.contains(Point2::new(1.0, 0.1)));
    }

    #[test]
    fn test_intersects() {
        let a: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
        let touching = Circle2::new(Point2::new(2.0, 0.0), 1.0);
        let apart = Circle2::new(Point2::new(2.5, 0.0), 1.0);
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_intersects_rect() {
        let c: Circle2<f64> = Circle2::new(Point2::new(-1.0, 5.0), 2.0);
        assert!(c.intersects_rect(&Rect2::from_coords(0.0, 0.0, 10.0, 10.0)));
        assert!(!c.intersects_rect(&Rect2::from_coords(1.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_to_polygon() {
        let c: Circle2<f64> = Circle2::new(Point2::new(1.0, 1.0), 2.0);
        let poly = c.to_polygon(8);
        assert_eq!(poly.len(), 8);
        assert_eq!(poly.position(), c.center);
        for p in &poly {
            assert_relative_eq!(p.distance(c.center), 2.0, epsilon = 1e-12);
        }
        assert!(poly.is_convex());
        assert!(poly.contains(c.center));
        assert_eq!(c.to_polygon(1).len(), 3);
    }
}
