//! Polygon collision shapes.
//!
//! This module provides:
//! - [`Polygon`], a point list with cached edges, triangulation, convexity
//!   and orientation
//! - Separating-axis collision with minimum translation vectors
//! - Winding-angle point containment
//! - Ear-clipping triangulation
//! - Ray casting by bisection
//!
//! Coordinates follow the screen convention: y grows downward and angles are
//! in degrees, with 90 pointing up.
//!
//! # Example
//!
//! ```
//! use polycollide::{Point2, Polygon, Rect2};
//!
//! // L-shaped polygon (concave)
//! let l_shape: Polygon<f64> = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//! assert!(!l_shape.is_convex());
//!
//! // A box sitting in the notch does not touch the L.
//! let in_notch = Polygon::from_rect(Rect2::from_coords(1.25, 1.25, 0.5, 0.5));
//! assert!(!l_shape.collides(&in_notch));
//!
//! let on_arm = Polygon::from_rect(Rect2::from_coords(0.25, 1.25, 0.5, 0.5));
//! assert!(l_shape.collides(&on_arm));
//! ```

mod cache;
mod collision;
mod contains;
mod core;
mod raycast;
mod triangle;
mod triangulate;
mod winding;

pub use contains::convex_contains;
pub use core::Polygon;
pub use raycast::RayHit;
pub use triangle::PolygonTriangle;
pub use triangulate::{is_ear, triangulate, triangulate_in_place};
pub use winding::{
    is_convex, is_oriented_clockwise, orient_clockwise, orient_counter_clockwise,
    screen_signed_area,
};
