//! Polygon types, containment testing, and visibility computation.
//!
//! # Example
//!
//! ```
//! use sightline::polygon::{visibility_polygon, Polygon};
//! use sightline::Point2;
//!
//! let room = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//!
//! assert!(room.contains(Point2::new(5.0, 5.0)));
//!
//! let visible = visibility_polygon(&room, Point2::new(5.0, 5.0));
//! assert_eq!(visible.len(), 4);
//! ```

mod core;
mod visibility;

pub use self::core::{
    polygon_centroid, polygon_contains, polygon_contains_with, polygon_is_convex,
    polygon_signed_area, Polygon,
};
pub use visibility::{cast_ray, visibility_polygon, visibility_polygon_with};
