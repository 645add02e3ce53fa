//! Axis-aligned rectangle in screen coordinates.

use super::{Circle2, Point2, Vec2};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left `position` and `size`.
///
/// Y grows downward, so `top <= bottom` for a non-negative size.
///
/// # Example
///
/// ```
/// use polycollide::{Point2, Rect2, Vec2};
///
/// let a: Rect2<f64> = Rect2::new(Point2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
/// let b = Rect2::from_coords(5.0, 5.0, 10.0, 10.0);
/// assert!(a.intersects(&b));
/// assert_eq!(a.intersection(&b).unwrap().size, Vec2::new(5.0, 5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect2<F> {
    /// Top-left corner.
    pub position: Point2<F>,
    /// Width and height.
    pub size: Vec2<F>,
}

impl<F: Float> Rect2<F> {
    /// Creates a rectangle from its top-left corner and size.
    #[inline]
    pub fn new(position: Point2<F>, size: Vec2<F>) -> Self {
        Self { position, size }
    }

    /// Creates a rectangle from `x, y, width, height`.
    #[inline]
    pub fn from_coords(x: F, y: F, width: F, height: F) -> Self {
        Self::new(Point2::new(x, y), Vec2::new(width, height))
    }

    /// Creates a rectangle from its four sides.
    #[inline]
    pub fn from_sides(left: F, top: F, right: F, bottom: F) -> Self {
        Self::from_coords(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn left(&self) -> F {
        self.position.x
    }

    #[inline]
    pub fn top(&self) -> F {
        self.position.y
    }

    #[inline]
    pub fn right(&self) -> F {
        self.position.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> F {
        self.position.y + self.size.y
    }

    /// Returns the center point.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.position + self.size / F::from(2.0).unwrap()
    }

    /// Moves the rectangle so its center lands on `center`.
    #[inline]
    pub fn set_center(&mut self, center: Point2<F>) {
        self.position = center - self.size / F::from(2.0).unwrap();
    }

    /// Corners in order top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point2<F>; 4] {
        [
            self.position,
            Point2::new(self.right(), self.top()),
            Point2::new(self.right(), self.bottom()),
            Point2::new(self.left(), self.bottom()),
        ]
    }

    /// Returns true if the point lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Returns true if the two rectangles overlap with positive area.
    ///
    /// Rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.left().max(other.left()) < self.right().min(other.right())
            && self.top().max(other.top()) < self.bottom().min(other.bottom())
    }

    /// Returns the overlapping region, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self::from_sides(
            self.left().max(other.left()),
            self.top().max(other.top()),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        ))
    }

    /// Returns true if the circle overlaps this rectangle.
    ///
    /// The circle center is clamped onto the rectangle; the circle intersects
    /// when that clamped point is closer than the radius.
    pub fn intersects_circle(&self, circle: &Circle2<F>) -> bool {
        let clamped = Point2::new(
            circle.center.x.max(self.left()).min(self.right()),
            circle.center.y.max(self.top()).min(self.bottom()),
        );
        clamped.distance(circle.center) < circle.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_and_center() {
        let r: Rect2<f64> = Rect2::from_coords(2.0, 3.0, 10.0, 4.0);
        assert_eq!(r.left(), 2.0);
        assert_eq!(r.top(), 3.0);
        assert_eq!(r.right(), 12.0);
        assert_eq!(r.bottom(), 7.0);
        assert_eq!(r.center(), Point2::new(7.0, 5.0));
        assert_eq!(Rect2::from_sides(2.0, 3.0, 12.0, 7.0), r);
    }

    #[test]
    fn test_set_center() {
        let mut r: Rect2<f64> = Rect2::from_coords(0.0, 0.0, 4.0, 2.0);
        r.set_center(Point2::new(10.0, 10.0));
        assert_eq!(r.position, Point2::new(8.0, 9.0));
    }

    #[test]
    fn test_corners_order() {
        let r: Rect2<f64> = Rect2::from_coords(0.0, 0.0, 2.0, 1.0);
        assert_eq!(
            r.corners(),
            [
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 1.0),
                Point2::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_contains_inclusive() {
        let r: Rect2<f64> = Rect2::from_coords(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point2::new(5.0, 5.0)));
        assert!(r.contains(Point2::new(10.0, 0.0)));
        assert!(!r.contains(Point2::new(10.5, 5.0)));
    }

    #[test]
    fn test_touching_rectangles_do_not_intersect() {
        let a: Rect2<f64> = Rect2::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Rect2::from_coords(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_intersects_circle() {
        let r: Rect2<f64> = Rect2::from_coords(0.0, 0.0, 10.0, 10.0);
        assert!(r.intersects_circle(&Circle2::new(Point2::new(12.0, 5.0), 3.0)));
        assert!(!r.intersects_circle(&Circle2::new(Point2::new(13.0, 5.0), 3.0)));
        // Corner region uses the true distance, not the bounding box.
        assert!(!r.intersects_circle(&Circle2::new(Point2::new(12.0, 12.0), 2.5)));
        // Center inside the rectangle.
        assert!(r.intersects_circle(&Circle2::new(Point2::new(5.0, 5.0), 1.0)));
    }
}
