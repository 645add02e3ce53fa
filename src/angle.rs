//! Degree-based angle helpers in screen coordinates.
//!
//! Directions are measured in degrees, counter-clockwise as seen on screen:
//! 0 points right, 90 points up. Because y grows downward, "up" is negative y.
//!
//! The corner helpers ([`cross_abc`], [`dot_abc`], [`angle_abc`]) work on the
//! vectors BA and BC around the middle vertex B. Under the y-down convention a
//! corner of a clockwise polygon is convex when [`angle_abc`] is `<= 0`.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use std::sync::OnceLock;

/// Size of the fast sine/cosine tables. Must be a power of two.
const LOOKUP_SIZE: usize = 1024;

struct TrigTable {
    sin: [f64; LOOKUP_SIZE],
    cos: [f64; LOOKUP_SIZE],
}

static TRIG_TABLE: OnceLock<TrigTable> = OnceLock::new();

fn trig_table() -> &'static TrigTable {
    TRIG_TABLE.get_or_init(|| {
        let mut sin = [0.0; LOOKUP_SIZE];
        let mut cos = [0.0; LOOKUP_SIZE];
        for i in 0..LOOKUP_SIZE {
            let radians = i as f64 * std::f64::consts::TAU / LOOKUP_SIZE as f64;
            sin[i] = radians.sin();
            cos[i] = radians.cos();
        }
        TrigTable { sin, cos }
    })
}

fn lookup_index<F: Float>(degrees: F) -> usize {
    let scale = F::from(LOOKUP_SIZE as f64 / 360.0).unwrap();
    let half = F::from(0.5).unwrap();
    // Nearest entry, then wrap with the table mask (negative angles included).
    let raw = (degrees * scale + half).floor().to_i64().unwrap_or(0);
    (raw & (LOOKUP_SIZE as i64 - 1)) as usize
}

/// Table-driven sine of an angle in degrees.
///
/// Accurate to within [`max_fast_sin_cos_error`].
pub fn fast_sin<F: Float>(degrees: F) -> F {
    F::from(trig_table().sin[lookup_index(degrees)]).unwrap()
}

/// Table-driven cosine of an angle in degrees.
pub fn fast_cos<F: Float>(degrees: F) -> F {
    F::from(trig_table().cos[lookup_index(degrees)]).unwrap()
}

/// Upper bound on the error of [`fast_sin`] and [`fast_cos`].
///
/// Half of the largest step between neighbouring table entries.
pub fn max_fast_sin_cos_error() -> f64 {
    static MAX_ERROR: OnceLock<f64> = OnceLock::new();
    *MAX_ERROR.get_or_init(|| {
        let sin = &trig_table().sin;
        sin.windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .fold(0.0, f64::max)
            / 2.0
    })
}

#[inline]
pub fn to_radians<F: Float>(degrees: F) -> F {
    degrees.to_radians()
}

#[inline]
pub fn to_degrees<F: Float>(radians: F) -> F {
    radians.to_degrees()
}

/// Normalizes an angle in degrees into `[0, 360)`.
pub fn adjust_angle<F: Float>(degrees: F) -> F {
    let full = F::from(360.0).unwrap();
    let wrapped = degrees % full;
    let wrapped = if wrapped < F::zero() {
        wrapped + full
    } else {
        wrapped
    };
    // -tiny % 360 + 360 can round up to exactly 360.
    if wrapped >= full {
        F::zero()
    } else {
        wrapped
    }
}

/// Returns the opposite direction, e.g. 90 becomes 270.
pub fn flip_direction<F: Float>(degrees: F) -> F {
    let half = F::from(180.0).unwrap();
    let degrees = adjust_angle(degrees);
    if degrees >= half {
        degrees - half
    } else {
        degrees + half
    }
}

/// Vector of the given `length` pointing at `direction` degrees.
///
/// `x = cos(direction) * length`, `y = -sin(direction) * length`.
pub fn length_dir<F: Float>(length: F, direction: F) -> Vec2<F> {
    let (sin, cos) = to_radians(direction).sin_cos();
    Vec2::new(cos * length, -sin * length)
}

/// Direction in degrees from `from` toward `to`, in `[0, 360)`.
pub fn point_direction<F: Float>(from: Point2<F>, to: Point2<F>) -> F {
    adjust_angle(to_degrees((from.y - to.y).atan2(to.x - from.x)))
}

/// Distance between two points.
#[inline]
pub fn point_distance<F: Float>(a: Point2<F>, b: Point2<F>) -> F {
    a.distance(b)
}

/// Cross product of BA and BC.
#[inline]
pub fn cross_abc<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (a - b).cross(c - b)
}

/// Dot product of BA and BC.
#[inline]
pub fn dot_abc<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (a - b).dot(c - b)
}

/// Signed angle ABC in radians, in `(-pi, pi]`.
///
/// The sign is the opposite of the usual mathematical convention because y
/// grows downward.
#[inline]
pub fn angle_abc<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    cross_abc(a, b, c).atan2(dot_abc(a, b, c))
}
