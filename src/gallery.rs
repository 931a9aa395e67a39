//! Guard registry: placed observers and their visible regions.
//!
//! A [`Gallery`] owns a validated boundary polygon and an ordered list of
//! guard positions. Candidates are accepted only if they land inside the
//! boundary; visibility is recomputed from scratch on every query rather
//! than cached, so there is no invalidation state to manage.
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
//! assert!(gallery.try_add_guard(Point2::new(5.0, 5.0)));
//! assert!(!gallery.try_add_guard(Point2::new(20.0, 20.0))); // outside, rejected
//!
//! let regions = gallery.visibility_polygons();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].len(), 4); // center guard sees all four corners
//! ```

use crate::error::SightlineError;
use crate::polygon::{visibility_polygon_with, Polygon};
use crate::primitives::Point2;
use crate::tolerance::Tolerances;
use num_traits::Float;

/// An ordered collection of guards inside a boundary polygon.
#[derive(Debug, Clone)]
pub struct Gallery<F> {
    polygon: Polygon<F>,
    guards: Vec<Point2<F>>,
    tolerances: Tolerances<F>,
}

impl<F: Float> Gallery<F> {
    /// Creates a gallery for the given boundary polygon.
    ///
    /// The polygon is validated up front: fewer than 3 vertices or coincident
    /// consecutive vertices are rejected.
    pub fn new(polygon: Polygon<F>) -> Result<Self, SightlineError> {
        Self::with_tolerances(polygon, Tolerances::new())
    }

    /// Creates a gallery with explicit tolerances for all visibility queries.
    pub fn with_tolerances(
        polygon: Polygon<F>,
        tolerances: Tolerances<F>,
    ) -> Result<Self, SightlineError> {
        polygon.validate()?;
        Ok(Self {
            polygon,
            guards: Vec::new(),
            tolerances,
        })
    }

    /// Returns the boundary polygon.
    #[inline]
    pub fn polygon(&self) -> &Polygon<F> {
        &self.polygon
    }

    /// Returns the accepted guards in insertion order.
    #[inline]
    pub fn guards(&self) -> &[Point2<F>] {
        &self.guards
    }

    /// Returns the number of accepted guards.
    #[inline]
    pub fn guard_count(&self) -> usize {
        self.guards.len()
    }

    /// Returns true if no guards have been placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Accepts the candidate as a guard iff it lies inside the boundary.
    ///
    /// Returns whether the candidate was accepted. Rejection is a routine
    /// outcome (a click outside the polygon), not an error: nothing changes
    /// and no diagnostic is raised.
    pub fn try_add_guard(&mut self, candidate: Point2<F>) -> bool {
        if self.polygon.contains(candidate) {
            self.guards.push(candidate);
            true
        } else {
            false
        }
    }

    /// Removes and returns the guard at `index`, shifting later guards down.
    ///
    /// Returns `None` if the index is out of range.
    pub fn remove_guard(&mut self, index: usize) -> Option<Point2<F>> {
        if index < self.guards.len() {
            Some(self.guards.remove(index))
        } else {
            None
        }
    }

    /// Removes all guards.
    pub fn clear_guards(&mut self) {
        self.guards.clear();
    }

    /// Computes the visibility polygon of the guard at `index`.
    ///
    /// Recomputed fresh on every call; returns `None` for an out-of-range
    /// index.
    pub fn visibility(&self, index: usize) -> Option<Polygon<F>> {
        let guard = *self.guards.get(index)?;
        Some(visibility_polygon_with(
            &self.polygon,
            guard,
            &self.tolerances,
        ))
    }

    /// Computes the visibility polygon of every guard, in guard order.
    ///
    /// This is the per-redraw entry point: one fresh recomputation per guard.
    /// Entries with fewer than 3 points mean that guard has no drawable
    /// visible area and should be skipped by the renderer.
    pub fn visibility_polygons(&self) -> Vec<Polygon<F>> {
        self.guards
            .iter()
            .map(|&guard| visibility_polygon_with(&self.polygon, guard, &self.tolerances))
            .collect()
    }

    /// Replaces the boundary polygon.
    ///
    /// The new polygon is validated, and guards that fall outside it are
    /// dropped (remaining guards keep their relative order). On validation
    /// failure the gallery is left unchanged.
    pub fn set_polygon(&mut self, polygon: Polygon<F>) -> Result<(), SightlineError> {
        polygon.validate()?;
        self.guards.retain(|&g| polygon.contains(g));
        self.polygon = polygon;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(size: f64) -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ])
    }

    #[test]
    fn test_new_validates_polygon() {
        assert!(Gallery::new(square(10.0)).is_ok());

        let degenerate: Polygon<f64> =
            Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert_eq!(
            Gallery::new(degenerate).unwrap_err(),
            SightlineError::TooFewVertices { count: 2 }
        );
    }

    #[test]
    fn test_try_add_guard_inside() {
        let mut gallery = Gallery::new(square(10.0)).unwrap();
        assert!(gallery.try_add_guard(Point2::new(5.0, 5.0)));
        assert!(gallery.try_add_guard(Point2::new(1.0, 9.0)));
        assert_eq!(gallery.guard_count(), 2);
        assert_eq!(gallery.guards()[0], Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_try_add_guard_outside_rejected() {
        let mut gallery = Gallery::new(square(10.0)).unwrap();
        assert!(!gallery.try_add_guard(Point2::new(20.0, 20.0)));
        assert!(!gallery.try_add_guard(Point2::new(-1.0, 5.0)));
        assert!(gallery.is_empty());
        assert_eq!(gallery.guard_count(), 0);
    }

    #[test]
    fn test_remove_guard() {
        let mut gallery = Gallery::new(square(10.0)).unwrap();
        gallery.try_add_guard(Point2::new(2.0, 2.0));
        gallery.try_add_guard(Point2::new(8.0, 8.0));

        let removed = gallery.remove_guard(0).unwrap();
        assert_eq!(removed, Point2::new(2.0, 2.0));
        assert_eq!(gallery.guard_count(), 1);
        assert_eq!(gallery.guards()[0], Point2::new(8.0, 8.0));

        assert!(gallery.remove_guard(5).is_none());
        assert_eq!(gallery.guard_count(), 1);
    }

    #[test]
    fn test_clear_guards() {
        let mut gallery = Gallery::new(square(10.0)).unwrap();
        gallery.try_add_guard(Point2::new(2.0, 2.0));
        gallery.try_add_guard(Point2::new(8.0, 8.0));
        gallery.clear_guards();
        assert!(gallery.is_empty());
    }

    #[test]
    fn test_visibility_per_guard() {
        let mut gallery = Gallery::new(square(10.0)).unwrap();
        gallery.try_add_guard(Point2::new(5.0, 5.0));

        let vis = gallery.visibility(0).unwrap();
        assert_eq!(vis.len(), 4);
        assert_relative_eq!(vis.area(), 100.0, epsilon = 1e-2);

        assert!(gallery.visibility(1).is_none());
    }

    #[test]
    fn test_visibility_polygons_one_per_guard() {
        let mut gallery = Gallery::new(square(10.0)).unwrap();
        gallery.try_add_guard(Point2::new(5.0, 5.0));
        gallery.try_add_guard(Point2::new(2.0, 3.0));
        gallery.try_add_guard(Point2::new(9.0, 9.0));

        let regions = gallery.visibility_polygons();
        assert_eq!(regions.len(), 3);
        for region in &regions {
            assert!(region.len() >= 3);
            assert_relative_eq!(region.area(), 100.0, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_set_polygon_refilters_guards() {
        let mut gallery = Gallery::new(square(10.0)).unwrap();
        gallery.try_add_guard(Point2::new(2.0, 2.0));
        gallery.try_add_guard(Point2::new(8.0, 8.0));

        // Shrink the room: only the first guard survives.
        gallery.set_polygon(square(5.0)).unwrap();
        assert_eq!(gallery.guard_count(), 1);
        assert_eq!(gallery.guards()[0], Point2::new(2.0, 2.0));
    }

    #[test]
    fn test_set_polygon_invalid_leaves_gallery_unchanged() {
        let mut gallery = Gallery::new(square(10.0)).unwrap();
        gallery.try_add_guard(Point2::new(8.0, 8.0));

        let bad: Polygon<f64> = Polygon::new(vec![Point2::new(0.0, 0.0)]);
        assert!(gallery.set_polygon(bad).is_err());
        assert_eq!(gallery.guard_count(), 1);
        assert_eq!(gallery.polygon().len(), 4);
    }

    #[test]
    fn test_visibility_recompute_is_stable() {
        let mut gallery = Gallery::new(square(10.0)).unwrap();
        gallery.try_add_guard(Point2::new(3.0, 7.0));

        let first = gallery.visibility(0).unwrap();
        let second = gallery.visibility(0).unwrap();
        assert_eq!(first, second);
    }
}
