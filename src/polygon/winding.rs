//! Convexity and orientation tests over point lists.
//!
//! "Clockwise" is as seen on screen, with y growing downward.

use crate::angle::cross_abc;
use crate::primitives::Point2;
use num_traits::Float;

/// Returns true if the polygon described by `points` is convex.
///
/// Three points are always convex. Otherwise the cross product of BA and BC is
/// taken at every vertex B; the polygon is concave as soon as two corners turn
/// in opposite directions. A cross product of exactly zero (collinear corner)
/// counts as neither direction.
pub fn is_convex<F: Float>(points: &[Point2<F>]) -> bool {
    let n = points.len();
    if n == 3 {
        return true;
    }

    let mut got_negative = false;
    let mut got_positive = false;

    for a in 0..n {
        let b = (a + 1) % n;
        let c = (b + 1) % n;
        let cross = cross_abc(points[a], points[b], points[c]);

        if cross < F::zero() {
            got_negative = true;
        } else if cross > F::zero() {
            got_positive = true;
        }
        if got_negative && got_positive {
            return false;
        }
    }

    true
}

/// Signed area under the screen convention: negative for clockwise winding.
///
/// Shoelace sum of `(x[i+1] - x[i]) * (y[i+1] + y[i]) / 2` with the first point
/// closing the loop.
pub fn screen_signed_area<F: Float>(points: &[Point2<F>]) -> F {
    let two = F::from(2.0).unwrap();
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .fold(F::zero(), |area, (p, q)| {
            area + (q.x - p.x) * (q.y + p.y) / two
        })
}

/// Returns true if `points` wind clockwise on screen.
pub fn is_oriented_clockwise<F: Float>(points: &[Point2<F>]) -> bool {
    screen_signed_area(points) < F::zero()
}

/// Reverses `points` in place unless they already wind clockwise.
///
/// Returns true if the list was reversed.
pub fn orient_clockwise<F: Float>(points: &mut [Point2<F>]) -> bool {
    if is_oriented_clockwise(points) {
        return false;
    }
    points.reverse();
    true
}

/// Reverses `points` in place if they wind clockwise.
///
/// Returns true if the list was reversed.
pub fn orient_counter_clockwise<F: Float>(points: &mut [Point2<F>]) -> bool {
    if !is_oriented_clockwise(points) {
        return false;
    }
    points.reverse();
    true
}
