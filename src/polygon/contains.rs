//! Winding-angle point containment for convex point lists.

use crate::angle::angle_abc;
use crate::primitives::Point2;
use num_traits::Float;

/// Tests whether `point` lies inside the convex shape described by `points`.
///
/// Sums the signed angle subtended at `point` by every edge (last to first
/// included). The sum is about `±2π` inside and about zero outside; the point
/// is inside when its magnitude exceeds `epsilon`. Points exactly on the
/// boundary may go either way. Only meaningful for simple polygons.
pub fn convex_contains<F: Float>(points: &[Point2<F>], point: Point2<F>, epsilon: F) -> bool {
    let Some(&last) = points.last() else {
        return false;
    };

    let closing = angle_abc(last, point, points[0]);
    let total = points
        .windows(2)
        .fold(closing, |sum, w| sum + angle_abc(w[0], point, w[1]));

    total.abs() > epsilon
}
