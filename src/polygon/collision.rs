//! Separating-axis collision with minimum translation vectors.
//!
//! Convex pairs are tested directly. A concave operand is replaced by its
//! ear-clipping triangles and every triangle pair is tested; the reported
//! translation vector is then the plain sum of the per-pair vectors. That sum
//! is not necessarily minimal, but any overlapping pair makes the whole
//! collision true.
//!
//! # Example
//!
//! ```
//! use polycollide::{Polygon, Rect2};
//!
//! let a: Polygon<f64> = Polygon::from_rect(Rect2::from_coords(0.0, 0.0, 10.0, 10.0));
//! let b = Polygon::from_rect(Rect2::from_coords(5.0, 5.0, 10.0, 10.0));
//! let c = Polygon::from_rect(Rect2::from_coords(20.0, 0.0, 10.0, 10.0));
//!
//! let mtv = a.collision(&b).unwrap();
//! assert!((mtv.magnitude() - 5.0).abs() < 1e-9);
//! assert!(a.collision(&c).is_none());
//! ```

use super::{Polygon, PolygonTriangle};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Projects `points` onto `axis`, returning `(min, max)`.
fn project<F: Float>(axis: Vec2<F>, points: &[Point2<F>]) -> (F, F) {
    points
        .iter()
        .map(|p| p.to_vec().dot(axis))
        .fold((F::infinity(), F::neg_infinity()), |(min, max), d| {
            (min.min(d), max.max(d))
        })
}

/// Gap between two projected intervals; negative when they overlap.
#[inline]
fn interval_distance<F: Float>(min_a: F, max_a: F, min_b: F, max_b: F) -> F {
    if min_a < min_b {
        min_b - max_a
    } else {
        min_a - max_b
    }
}

fn center<F: Float>(points: &[Point2<F>]) -> Point2<F> {
    let n = F::from(points.len()).unwrap();
    let sum = points
        .iter()
        .fold(Vec2::zero(), |acc, p| acc + p.to_vec());
    Point2::new(sum.x / n, sum.y / n)
}

/// Separating-axis test between two convex point lists.
///
/// Every edge normal of A, then of B, is a candidate axis. Returns `None` as
/// soon as one axis separates the projections. Otherwise returns the
/// minimum translation vector: the least-overlap axis scaled by the overlap,
/// oriented from B's center toward A's center. Zero-length edges contribute
/// no axis.
pub(crate) fn separating_axis<F: Float>(
    a_points: &[Point2<F>],
    a_edges: &[Vec2<F>],
    b_points: &[Point2<F>],
    b_edges: &[Vec2<F>],
) -> Option<Vec2<F>> {
    if a_points.is_empty() || b_points.is_empty() {
        return None;
    }

    let offset = center(a_points) - center(b_points);
    let mut min_overlap = F::infinity();
    let mut translation_axis = Vec2::zero();

    for edge in a_edges.iter().chain(b_edges) {
        let Some(axis) = edge.perpendicular().normalize() else {
            continue;
        };

        let (min_a, max_a) = project(axis, a_points);
        let (min_b, max_b) = project(axis, b_points);
        let distance = interval_distance(min_a, max_a, min_b, max_b);
        if distance > F::zero() {
            return None;
        }

        let overlap = distance.abs();
        if overlap < min_overlap {
            min_overlap = overlap;
            translation_axis = if offset.dot(axis) < F::zero() {
                -axis
            } else {
                axis
            };
        }
    }

    if min_overlap.is_infinite() {
        return Some(Vec2::zero());
    }
    Some(translation_axis * min_overlap)
}

/// Folds per-pair results: colliding if any pair collides, vectors summed.
fn sum_contacts<F: Float>(contacts: impl IntoIterator<Item = Option<Vec2<F>>>) -> Option<Vec2<F>> {
    contacts
        .into_iter()
        .flatten()
        .fold(None, |sum, mtv| Some(sum.unwrap_or_else(Vec2::zero) + mtv))
}

impl<F: Float> Polygon<F> {
    /// Tests this polygon against `other`.
    ///
    /// Returns the minimum translation vector that moves `self` out of
    /// `other`, or `None` when the shapes do not overlap. Shapes that only
    /// touch count as colliding. Convex pairs never triangulate; a concave
    /// operand is triangulated once and cached.
    pub fn collision(&self, other: &Polygon<F>) -> Option<Vec2<F>> {
        match (self.is_convex(), other.is_convex()) {
            (true, true) => self.convex_collision(other),
            (true, false) => sum_contacts(
                other
                    .concave_triangles()
                    .iter()
                    .map(|tri| self.triangle_collision(tri)),
            ),
            (false, true) => sum_contacts(
                self.concave_triangles()
                    .iter()
                    .map(|tri| tri.collision(other)),
            ),
            (false, false) => {
                let theirs = other.concave_triangles();
                sum_contacts(self.concave_triangles().iter().flat_map(|mine| {
                    theirs.iter().map(move |tri| mine.collision_triangle(tri))
                }))
            }
        }
    }

    /// Returns true if the polygons overlap or touch.
    #[inline]
    pub fn collides(&self, other: &Polygon<F>) -> bool {
        self.collision(other).is_some()
    }

    /// Separating-axis test that treats both polygons as convex.
    ///
    /// Both operands must be convex; [`collision`](Self::collision) picks this
    /// path automatically when they are. Builds the edge caches of both.
    pub fn convex_collision(&self, other: &Polygon<F>) -> Option<Vec2<F>> {
        separating_axis(self.points(), self.edges(), other.points(), other.edges())
    }

    fn triangle_collision(&self, tri: &PolygonTriangle<F>) -> Option<Vec2<F>> {
        separating_axis(self.points(), self.edges(), &tri.points(), &tri.edges())
    }
}
