//! The polygon type and its cached derived state.

use super::cache::Cached;
use super::contains::convex_contains;
use super::triangulate::triangulate;
use super::winding::{is_convex, is_oriented_clockwise, orient_clockwise, orient_counter_clockwise};
use super::PolygonTriangle;
use crate::angle::{adjust_angle, to_radians};
use crate::config::{CollisionConfig, DEFAULT_CONTAINMENT_EPSILON};
use crate::error::GeomError;
use crate::primitives::{Point2, Rect2, Segment2, Vec2};
use num_traits::Float;
use std::fmt;

/// A 2D polygon used as a collision shape.
///
/// Points are stored in insertion order; edge `i` runs from point `i` to point
/// `i + 1`, wrapping from the last point back to the first.
///
/// Four derived values are cached: the edge list, the ear-clipping
/// triangulation, the convexity flag and the orientation flag. Each is
/// computed on first use and kept until a point edit (`add_point`,
/// `set_point`, an orientation flip) drops all four. Moving or rotating the
/// polygon carries the cached edges and triangles along instead of dropping
/// them.
///
/// Queries take `&self`, so the caches fill lazily even when the polygon is
/// only borrowed. The type is therefore not `Sync`; clone it to hand a copy to
/// another thread.
///
/// # Example
///
/// ```
/// use polycollide::{Point2, Polygon};
///
/// let mut poly: Polygon<f64> = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
/// assert!(poly.is_convex());
/// assert!(poly.contains(Point2::new(2.0, 2.0)));
///
/// poly.set_position(Point2::new(10.0, 0.0));
/// assert!(poly.contains(Point2::new(12.0, 2.0)));
/// assert!(!poly.contains(Point2::new(2.0, 2.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Polygon<F> {
    points: Vec<Point2<F>>,
    position: Point2<F>,
    origin: Vec2<F>,
    rotation: F,
    edges: Cached<Vec<Vec2<F>>>,
    triangles: Cached<Vec<PolygonTriangle<F>>>,
    convex: Cached<bool>,
    clockwise: Cached<bool>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from its points, with position and origin at zero.
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self {
            points,
            position: Point2::origin(),
            origin: Vec2::zero(),
            rotation: F::zero(),
            edges: Cached::new(),
            triangles: Cached::new(),
            convex: Cached::new(),
            clockwise: Cached::new(),
        }
    }

    /// Creates a polygon with no points.
    #[inline]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates the four-corner polygon of `rect`.
    ///
    /// Corners are `(0,0) (w,0) (w,h) (0,h)` relative to the position, which
    /// is set to the rectangle's top-left corner. Rotation pivots around it.
    pub fn from_rect(rect: Rect2<F>) -> Self {
        let mut polygon = Self::new(vec![
            Point2::origin(),
            Point2::new(rect.size.x, F::zero()),
            Point2::new(rect.size.x, rect.size.y),
            Point2::new(F::zero(), rect.size.y),
        ]);
        polygon.set_position(rect.position);
        polygon
    }

    /// Creates a two-point polygon along `segment`, positioned at its start.
    pub fn from_segment(segment: Segment2<F>) -> Self {
        let mut polygon = Self::new(vec![
            Point2::origin(),
            Point2::origin() + segment.direction(),
        ]);
        polygon.set_position(segment.start);
        polygon
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point2<F>> {
        self.points.iter()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<Point2<F>> {
        self.points.get(index).copied()
    }

    /// Arithmetic mean of the points, or the origin for an empty polygon.
    pub fn center(&self) -> Point2<F> {
        if self.points.is_empty() {
            return Point2::origin();
        }
        let n = F::from(self.points.len()).unwrap();
        let sum = self
            .points
            .iter()
            .fold(Vec2::zero(), |acc, p| acc + p.to_vec());
        Point2::new(sum.x / n, sum.y / n)
    }

    #[inline]
    pub fn position(&self) -> Point2<F> {
        self.position
    }

    #[inline]
    pub fn origin(&self) -> Vec2<F> {
        self.origin
    }

    /// Current rotation in degrees, in `[0, 360)`.
    #[inline]
    pub fn rotation(&self) -> F {
        self.rotation
    }

    /// Appends a point and drops every cached value.
    pub fn add_point(&mut self, point: Point2<F>) {
        self.points.push(point);
        self.invalidate();
    }

    /// Replaces the point at `index` and drops every cached value.
    pub fn set_point(&mut self, index: usize, point: Point2<F>) -> Result<(), GeomError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(GeomError::IndexOutOfBounds { index, len })?;
        *slot = point;
        self.invalidate();
        Ok(())
    }

    /// Moves the polygon so its position becomes `position`.
    ///
    /// Every point shifts by the change in position.
    pub fn set_position(&mut self, position: Point2<F>) {
        let offset = position - self.position;
        self.position = position;
        self.shift(offset);
    }

    /// Moves the polygon by `offset`.
    #[inline]
    pub fn translate(&mut self, offset: Vec2<F>) {
        self.set_position(self.position + offset);
    }

    /// Sets the origin offset; points shift by the negated change.
    pub fn set_origin(&mut self, origin: Vec2<F>) {
        let offset = origin - self.origin;
        self.origin = origin;
        self.shift(-offset);
    }

    /// Rotates the polygon about its position to `degrees`.
    ///
    /// Only the difference from the current rotation is applied to the stored
    /// points, so repeated small changes accumulate rounding error.
    pub fn set_rotation(&mut self, degrees: F) {
        let delta = to_radians(adjust_angle(degrees - self.rotation));
        self.rotation = adjust_angle(degrees);
        let pivot = self.position;

        for point in &mut self.points {
            *point = point.rotated_about(pivot, delta);
        }
        if let Some(triangles) = self.triangles.get_mut() {
            for triangle in triangles {
                triangle.rotate_about(pivot, delta);
            }
        }
        if let Some(edges) = self.edges.get_mut() {
            for edge in edges {
                *edge = edge.rotated(delta);
            }
        }
    }

    /// Returns true if the polygon is convex. Cached.
    pub fn is_convex(&self) -> bool {
        *self.convex.get_or_compute(|| is_convex(&self.points))
    }

    /// Returns true if the points wind clockwise on screen. Cached.
    pub fn is_oriented_clockwise(&self) -> bool {
        *self
            .clockwise
            .get_or_compute(|| is_oriented_clockwise(&self.points))
    }

    /// Reorders the points clockwise (`true`) or counter-clockwise (`false`).
    ///
    /// Reversing the points drops every cached value.
    pub fn set_oriented_clockwise(&mut self, clockwise: bool) {
        let reversed = if clockwise {
            orient_clockwise(&mut self.points)
        } else {
            orient_counter_clockwise(&mut self.points)
        };
        if reversed {
            self.invalidate();
        }
    }

    /// Edge vectors, `edges[i] = points[i + 1] - points[i]` (wrapping). Cached.
    pub fn edges(&self) -> &[Vec2<F>] {
        self.edges.get_or_compute(|| {
            log::trace!("rebuilding {} polygon edges", self.points.len());
            let n = self.points.len();
            (0..n)
                .map(|i| self.points[(i + 1) % n] - self.points[i])
                .collect()
        })
    }

    #[inline]
    pub fn edge(&self, index: usize) -> Option<Vec2<F>> {
        self.edges().get(index).copied()
    }

    /// Triangulates the polygon, convex or not, and caches the result.
    pub fn triangulate(&self) -> &[PolygonTriangle<F>] {
        self.triangles.get_or_compute(|| {
            log::trace!("triangulating polygon with {} points", self.points.len());
            triangulate(&self.points)
        })
    }

    /// Cached triangles of a concave polygon.
    pub(crate) fn concave_triangles(&self) -> &[PolygonTriangle<F>] {
        self.triangulate()
    }

    /// The triangulation used for collision and containment.
    ///
    /// A concave polygon is triangulated on demand. A convex polygon returns
    /// `None` unless [`triangulate`](Self::triangulate) was called since the
    /// last point edit.
    pub fn triangles(&self) -> Option<&[PolygonTriangle<F>]> {
        if self.is_convex() {
            self.triangles.get().map(Vec::as_slice)
        } else {
            Some(self.concave_triangles())
        }
    }

    #[inline]
    pub fn triangle_count(&self) -> Option<usize> {
        self.triangles().map(<[_]>::len)
    }

    /// Copy of the triangle at `index`, if the polygon is triangulated.
    #[inline]
    pub fn triangle(&self, index: usize) -> Option<PolygonTriangle<F>> {
        self.triangles()?.get(index).copied()
    }

    /// Returns true if the triangle cache is filled.
    #[inline]
    pub fn is_triangulated(&self) -> bool {
        !self.triangles.is_stale()
    }

    /// Tests whether `point` lies inside the polygon.
    ///
    /// Convex polygons use the winding-angle sum directly; concave polygons
    /// test each of their triangles.
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.contains_within(point, F::from(DEFAULT_CONTAINMENT_EPSILON).unwrap())
    }

    /// [`contains`](Self::contains) with the epsilon from `config`.
    pub fn contains_with(&self, point: Point2<F>, config: &CollisionConfig) -> bool {
        self.contains_within(point, config.containment_epsilon())
    }

    /// [`contains`](Self::contains) with an explicit winding-angle threshold.
    pub fn contains_within(&self, point: Point2<F>, epsilon: F) -> bool {
        if self.is_convex() {
            convex_contains(&self.points, point, epsilon)
        } else {
            self.concave_triangles()
                .iter()
                .any(|tri| tri.contains_within(point, epsilon))
        }
    }

    fn invalidate(&mut self) {
        self.edges.invalidate();
        self.triangles.invalidate();
        self.convex.invalidate();
        self.clockwise.invalidate();
    }

    /// Translates points and cached triangles; edges and flags are unaffected.
    fn shift(&mut self, offset: Vec2<F>) {
        for point in &mut self.points {
            *point += offset;
        }
        if let Some(triangles) = self.triangles.get_mut() {
            for triangle in triangles {
                triangle.translate(offset);
            }
        }
    }
}

impl<F: Float> Default for Polygon<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Float> From<Rect2<F>> for Polygon<F> {
    fn from(rect: Rect2<F>) -> Self {
        Self::from_rect(rect)
    }
}

impl<F: Float> From<Segment2<F>> for Polygon<F> {
    fn from(segment: Segment2<F>) -> Self {
        Self::from_segment(segment)
    }
}

impl<F: Float> From<PolygonTriangle<F>> for Polygon<F> {
    fn from(triangle: PolygonTriangle<F>) -> Self {
        Self::new(triangle.points().to_vec())
    }
}

impl<F: Float> FromIterator<Point2<F>> for Polygon<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, F> IntoIterator for &'a Polygon<F> {
    type Item = &'a Point2<F>;
    type IntoIter = std::slice::Iter<'a, Point2<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<F: fmt::Display> fmt::Display for Polygon<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{point}")?;
        }
        Ok(())
    }
}
