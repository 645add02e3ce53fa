//! Ray casting by bisection over collision tests.
//!
//! A ray is modelled as a two-point polygon from the start point to the end
//! point. The first contact is found by shortening that segment until the
//! remaining search interval is no longer than the requested precision.
//!
//! # Example
//!
//! ```
//! use polycollide::{Point2, Polygon, Rect2};
//!
//! let wall: Polygon<f64> = Polygon::from_rect(Rect2::from_coords(0.0, 0.0, 10.0, 10.0));
//!
//! // Cast to the right (0 degrees) from the left of the wall.
//! let hit = wall.ray_cast(Point2::new(-5.0, 5.0), 6.0, 0.0, 0.5).unwrap();
//! assert!(hit.point.x >= 0.0 && hit.point.x <= 0.5);
//!
//! // Casting away from it misses.
//! assert!(wall.ray_cast(Point2::new(-5.0, 5.0), 6.0, 180.0, 0.5).is_none());
//! ```

use super::Polygon;
use crate::angle::length_dir;
use crate::config::CollisionConfig;
use crate::primitives::Point2;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// The first contact found by a ray cast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit<F> {
    /// End of the shortest ray known to collide.
    pub point: Point2<F>,
    /// Length of that ray; within the cast precision of the true contact.
    pub length: F,
}

impl<F: Float> Polygon<F> {
    /// Casts a ray of `length` from `start` toward `direction` degrees.
    ///
    /// Returns `None` when the full ray misses, when `start` already lies
    /// inside the polygon, or when `length` is not positive. Otherwise the
    /// ray is bisected between zero and `length` until the search interval is
    /// at most `precision` long, and the shortest colliding ray is reported.
    pub fn ray_cast(
        &self,
        start: Point2<F>,
        length: F,
        direction: F,
        precision: F,
    ) -> Option<RayHit<F>> {
        if !(length > F::zero()) || self.contains(start) {
            return None;
        }
        self.bisect_ray(start, length, direction, precision)
    }

    /// [`ray_cast`](Self::ray_cast) with precision and containment epsilon
    /// taken from `config`.
    pub fn ray_cast_with(
        &self,
        start: Point2<F>,
        length: F,
        direction: F,
        config: &CollisionConfig,
    ) -> Option<RayHit<F>> {
        if !(length > F::zero()) || self.contains_with(start, config) {
            return None;
        }
        self.bisect_ray(start, length, direction, config.ray_precision())
    }

    /// Casts the same ray against every polygon and returns the nearest hit.
    ///
    /// On equal lengths the earlier polygon wins.
    pub fn ray_cast_all<'a, I>(
        polygons: I,
        start: Point2<F>,
        length: F,
        direction: F,
        precision: F,
    ) -> Option<RayHit<F>>
    where
        I: IntoIterator<Item = &'a Polygon<F>>,
        F: 'a,
    {
        polygons
            .into_iter()
            .filter_map(|polygon| polygon.ray_cast(start, length, direction, precision))
            .fold(None, |nearest: Option<RayHit<F>>, hit| match nearest {
                Some(best) if best.length <= hit.length => Some(best),
                _ => Some(hit),
            })
    }

    fn bisect_ray(
        &self,
        start: Point2<F>,
        length: F,
        direction: F,
        precision: F,
    ) -> Option<RayHit<F>> {
        let mut ray = Polygon::new(vec![start, start + length_dir(length, direction)]);
        if !self.collides(&ray) {
            return None;
        }

        let two = F::from(2.0).unwrap();
        let mut min = F::zero();
        let mut max = length;

        while max - min > precision {
            let mid = (min + max) / two;
            // The interval cannot shrink any further in this precision.
            if mid <= min || mid >= max {
                break;
            }
            ray.set_point(1, start + length_dir(mid, direction)).ok()?;
            if self.collides(&ray) {
                max = mid;
            } else {
                min = mid;
            }
        }

        log::trace!(
            "ray cast settled on length {:?}",
            max.to_f64().unwrap_or(f64::NAN)
        );
        Some(RayHit {
            point: start + length_dir(max, direction),
            length: max,
        })
    }
}
