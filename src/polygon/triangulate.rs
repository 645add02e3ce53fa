//! Polygon triangulation using ear clipping.
//!
//! An ear is three consecutive vertices A, B, C where the corner at B is not
//! reflex and no other remaining vertex lies inside triangle ABC. Ears are
//! cut one at a time, always taking the first one found in index order.
//!
//! # Complexity
//!
//! - Time: O(n²) for a polygon with n vertices
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use polycollide::polygon::triangulate;
//! use polycollide::Point2;
//!
//! // L-shaped polygon (concave)
//! let l_shape = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let triangles = triangulate(&l_shape);
//! assert_eq!(triangles.len(), 4); // 6 vertices -> 4 triangles
//!
//! let area: f64 = triangles.iter().map(|t| t.area()).sum();
//! assert!((area - 3.0).abs() < 1e-9);
//! ```

use super::winding::orient_clockwise;
use super::PolygonTriangle;
use crate::angle::angle_abc;
use crate::primitives::Point2;
use num_traits::Float;

/// Triangulates a simple polygon without touching the caller's points.
///
/// For n input vertices a simple polygon yields n - 2 triangles. Fewer than
/// three points yield none.
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Vec<PolygonTriangle<F>> {
    let mut working = points.to_vec();
    triangulate_in_place(&mut working)
}

/// Triangulates `points`, consuming the list as ears are cut.
///
/// The list is first reordered clockwise and ends up holding the last three
/// vertices (or fewer for degenerate input).
///
/// When a full scan finds no ear, which happens for self-intersecting or
/// degenerate input, no triangle is emitted for that pass and the vertex at
/// index 0 is dropped anyway. The result then has fewer than n - 2 triangles.
pub fn triangulate_in_place<F: Float>(points: &mut Vec<Point2<F>>) -> Vec<PolygonTriangle<F>> {
    if points.len() < 3 {
        log::debug!("cannot triangulate {} points", points.len());
        return Vec::new();
    }

    orient_clockwise(points);
    let mut triangles = Vec::with_capacity(points.len() - 2);

    while points.len() > 3 {
        let n = points.len();
        match (0..n).find(|&a| is_ear(points, a, (a + 1) % n, (a + 2) % n)) {
            Some(a) => {
                let b = (a + 1) % n;
                let c = (b + 1) % n;
                triangles.push(PolygonTriangle::new(points[a], points[b], points[c]));
                points.remove(b);
            }
            None => {
                log::warn!(
                    "no ear found among {n} remaining vertices, dropping vertex 0 without a triangle"
                );
                points.remove(0);
            }
        }
    }

    if let &[a, b, c] = points.as_slice() {
        triangles.push(PolygonTriangle::new(a, b, c));
    }
    triangles
}

/// Returns true if `points[a]`, `points[b]`, `points[c]` form an ear.
///
/// `points` must wind clockwise. The corner at B must not be reflex
/// (`angle_abc <= 0` under the y-down convention) and no other vertex may lie
/// inside triangle ABC.
pub fn is_ear<F: Float>(points: &[Point2<F>], a: usize, b: usize, c: usize) -> bool {
    if angle_abc(points[a], points[b], points[c]) > F::zero() {
        return false;
    }

    let triangle = PolygonTriangle::new(points[a], points[b], points[c]);
    !points
        .iter()
        .enumerate()
        .any(|(i, &p)| i != a && i != b && i != c && triangle.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::winding::{is_oriented_clockwise, screen_signed_area};
    use approx::assert_relative_eq;
    use quickcheck::TestResult;

    fn l_shape() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
    }

    fn total_area(triangles: &[PolygonTriangle<f64>]) -> f64 {
        triangles.iter().map(|t| t.area()).sum()
    }

    #[test]
    fn test_triangle_passes_through() {
        let pts = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let tris = triangulate(&pts);
        assert_eq!(tris.len(), 1);
        assert_relative_eq!(tris[0].area(), 0.5);
    }

    #[test]
    fn test_too_few_points() {
        let pts = vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)];
        assert!(triangulate(&pts).is_empty());
        assert!(triangulate::<f64>(&[]).is_empty());
    }

    #[test]
    fn test_square() {
        let pts = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let tris = triangulate(&pts);
        assert_eq!(tris.len(), 2);
        assert_relative_eq!(total_area(&tris), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_l_shape() {
        let tris = triangulate(&l_shape());
        assert_eq!(tris.len(), 4);
        assert_relative_eq!(total_area(&tris), 3.0, epsilon = 1e-12);
        // The reflex corner at (1, 1) is never cut off as an ear tip.
        for t in &tris {
            assert!(!t.contains(Point2::new(1.5, 1.5)));
        }
    }

    #[test]
    fn test_counter_clockwise_input() {
        let mut pts = l_shape();
        pts.reverse();
        let tris = triangulate(&pts);
        assert_eq!(tris.len(), 4);
        assert_relative_eq!(total_area(&tris), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_in_place_consumes_points() {
        let mut pts = l_shape();
        pts.reverse();
        let tris = triangulate_in_place(&mut pts);
        assert_eq!(tris.len(), 4);
        assert_eq!(pts.len(), 3);
        assert!(is_oriented_clockwise(&pts));
    }

    #[test]
    fn test_copy_leaves_input_untouched() {
        let mut pts = l_shape();
        pts.reverse();
        let before = pts.clone();
        triangulate(&pts);
        assert_eq!(pts, before);
    }

    #[test]
    fn test_is_ear() {
        let pts = l_shape();
        // (0,0) (2,0) (2,1): convex corner, nothing inside.
        assert!(is_ear(&pts, 0, 1, 2));
        // (2,1) (1,1) (1,2): reflex corner.
        assert!(!is_ear(&pts, 2, 3, 4));
    }

    #[test]
    fn test_is_ear_rejects_enclosed_vertex() {
        // Arrow pointing right; its notch vertex sits inside the hull triangle.
        let pts = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(0.0, 4.0),
            Point2::new(1.0, 2.0),
        ];
        assert!(is_oriented_clockwise(&pts));
        assert!(!is_ear(&pts, 0, 1, 2));
        assert_eq!(triangulate(&pts).len(), 2);
    }

    #[test]
    fn test_collinear_input_has_no_area() {
        let pts: Vec<Point2<f64>> = (0..5).map(|i| Point2::new(f64::from(i), 0.0)).collect();
        let tris = triangulate(&pts);
        assert!(tris.len() <= 3);
        assert_relative_eq!(total_area(&tris), 0.0);
    }

    #[quickcheck_macros::quickcheck]
    fn regular_polygon_yields_n_minus_two(sides: u8, radius: u16) -> TestResult {
        let n = usize::from(sides);
        if !(3..=64).contains(&n) || radius == 0 {
            return TestResult::discard();
        }
        let r = f64::from(radius);
        let pts: Vec<Point2<f64>> = (0..n)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / n as f64;
                Point2::new(r * angle.cos(), r * angle.sin())
            })
            .collect();

        let tris = triangulate(&pts);
        let area = screen_signed_area(&pts).abs();
        TestResult::from_bool(
            tris.len() == n - 2 && (total_area(&tris) - area).abs() <= 1e-9 * area.max(1.0),
        )
    }
}
