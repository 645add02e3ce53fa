//! Straight lines between two screen points.

use super::{Point2, Vec2};
use crate::angle::point_direction;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A line from `start` to `end`.
///
/// Turned into a two-point collision shape by
/// [`Polygon::from_segment`](crate::polygon::Polygon::from_segment); ray
/// casting builds the same shape internally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Line of `length` leaving `start` at `direction` degrees (90 is up).
    #[inline]
    pub fn from_length_dir(start: Point2<F>, length: F, direction: F) -> Self {
        Self::new(start, start + Vec2::from_length_dir(length, direction))
    }

    /// Offset from `start` to `end`.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Heading from `start` to `end` in degrees, in `[0, 360)`.
    #[inline]
    pub fn angle(self) -> F {
        point_direction(self.start, self.end)
    }

    #[inline]
    pub fn length(self) -> F {
        self.direction().magnitude()
    }

    /// Interpolates from `start` (`t = 0`) to `end` (`t = 1`).
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start + self.direction() * t
    }

    /// Same line walked from `end` back to `start`.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }
}
