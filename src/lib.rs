//! polycollide - Polygon collision for 2D games
//!
//! Collision shapes built from point lists: separating-axis tests with
//! minimum translation vectors, point containment, ray casting and
//! ear-clipping triangulation for concave shapes. Angles are in degrees with
//! y growing downward, as on screen.

pub mod angle;
pub mod config;
pub mod error;
pub mod polygon;
pub mod primitives;

pub use config::CollisionConfig;
pub use error::GeomError;
pub use polygon::{Polygon, PolygonTriangle, RayHit};
pub use primitives::{Circle2, Point2, Rect2, Segment2, Vec2};
