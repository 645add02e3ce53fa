//! Three-point polygons produced by triangulation.

use super::collision::separating_axis;
use super::contains::convex_contains;
use super::Polygon;
use crate::config::DEFAULT_CONTAINMENT_EPSILON;
use crate::error::GeomError;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A triangle, the atomic shape of concave-polygon collision and containment.
///
/// Triangles are always convex, so every query on them runs the convex
/// algorithm directly without any cached state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonTriangle<F> {
    pub a: Point2<F>,
    pub b: Point2<F>,
    pub c: Point2<F>,
}

impl<F: Float> PolygonTriangle<F> {
    /// Creates a new triangle from three points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn points(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Edge vectors `b - a`, `c - b`, `a - c`.
    #[inline]
    pub fn edges(&self) -> [Vec2<F>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// Mean of the three vertices.
    pub fn center(&self) -> Point2<F> {
        let three = F::from(3.0).unwrap();
        Point2::new(
            (self.a.x + self.b.x + self.c.x) / three,
            (self.a.y + self.b.y + self.c.y) / three,
        )
    }

    /// Unsigned area.
    pub fn area(&self) -> F {
        (self.b - self.a).cross(self.c - self.a).abs() / F::from(2.0).unwrap()
    }

    /// Tests whether `point` lies inside the triangle.
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.contains_within(point, F::from(DEFAULT_CONTAINMENT_EPSILON).unwrap())
    }

    /// Tests containment with an explicit winding-angle threshold.
    pub fn contains_within(&self, point: Point2<F>, epsilon: F) -> bool {
        convex_contains(&self.points(), point, epsilon)
    }

    /// Separating-axis test against a convex polygon.
    ///
    /// Returns the minimum translation vector that pushes this triangle out of
    /// `polygon`, or `None` when they do not overlap. `polygon` must be convex.
    pub fn collision(&self, polygon: &Polygon<F>) -> Option<Vec2<F>> {
        separating_axis(&self.points(), &self.edges(), polygon.points(), polygon.edges())
    }

    /// Separating-axis test against another triangle.
    pub fn collision_triangle(&self, other: &Self) -> Option<Vec2<F>> {
        separating_axis(&self.points(), &self.edges(), &other.points(), &other.edges())
    }

    pub(crate) fn translate(&mut self, offset: Vec2<F>) {
        self.a += offset;
        self.b += offset;
        self.c += offset;
    }

    pub(crate) fn rotate_about(&mut self, pivot: Point2<F>, radians: F) {
        self.a = self.a.rotated_about(pivot, radians);
        self.b = self.b.rotated_about(pivot, radians);
        self.c = self.c.rotated_about(pivot, radians);
    }
}

impl<F: Float> TryFrom<&Polygon<F>> for PolygonTriangle<F> {
    type Error = GeomError;

    fn try_from(polygon: &Polygon<F>) -> Result<Self, Self::Error> {
        match polygon.points() {
            &[a, b, c] => Ok(Self::new(a, b, c)),
            points => Err(GeomError::NotATriangle { len: points.len() }),
        }
    }
}
