//! sightline - Visibility polygons for simple polygons
//!
//! Computes the region of a simple polygon directly visible from an interior
//! observer ("guard"), the construction behind art-gallery and line-of-sight
//! problems. The crate provides the geometric pipeline end to end: 2D
//! primitives, even-odd point containment, polygon-edge ray casting, angular
//! visibility assembly, and a guard registry that gates placement on
//! containment.
//!
//! # Example
//!
//! ```
//! use sightline::{Gallery, Point2, Polygon};
//!
//! let room = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//!
//! let mut gallery = Gallery::new(room).unwrap();
//! gallery.try_add_guard(Point2::new(5.0, 5.0));
//!
//! for region in gallery.visibility_polygons() {
//!     if region.len() >= 3 {
//!         // Drawable visible area, one point per boundary feature
//!     }
//! }
//! ```

pub mod error;
pub mod gallery;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use error::SightlineError;
pub use gallery::Gallery;
pub use polygon::{polygon_contains, visibility_polygon, Polygon};
pub use primitives::{Point2, Ray2, Segment2, Vec2};
pub use tolerance::Tolerances;
