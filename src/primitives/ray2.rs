//! 2D ray type.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A 2D ray defined by an origin point and direction.
///
/// A ray extends infinitely from its origin in the direction specified.
/// The direction is stored as-is (not necessarily normalized).
///
/// # Example
///
/// ```
/// use sightline::primitives::{Point2, Ray2};
///
/// let ray: Ray2<f64> = Ray2::from_angle(Point2::origin(), 0.0);
/// let p = ray.point_at(5.0);
/// assert_eq!(p.x, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Origin point of the ray
    pub origin: Point2<F>,
    /// Direction vector (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray from an origin point through a target point.
    #[inline]
    pub fn from_points(origin: Point2<F>, through: Point2<F>) -> Self {
        Self {
            origin,
            direction: through - origin,
        }
    }

    /// Creates a ray from an origin at the given angle (radians from +X, CCW).
    ///
    /// The direction is a unit vector, so `point_at(t)` is at distance `t`
    /// from the origin.
    #[inline]
    pub fn from_angle(origin: Point2<F>, angle: F) -> Self {
        Self {
            origin,
            direction: Vec2::from_angle(angle),
        }
    }

    /// Returns the point along the ray at parameter t.
    ///
    /// - `t = 0` returns the origin
    /// - `t > 0` returns points along the ray direction
    /// - `t < 0` returns points behind the origin (not on the ray)
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        Point2::new(
            self.origin.x + t * self.direction.x,
            self.origin.y + t * self.direction.y,
        )
    }

    /// Converts a forward slice of the ray into a finite probe segment.
    ///
    /// The segment runs from the origin to `point_at(length)`.
    #[inline]
    pub fn to_segment(&self, length: F) -> Segment2<F> {
        Segment2::new(self.origin, self.point_at(length))
    }
}

impl<F: Float> Default for Ray2<F> {
    fn default() -> Self {
        Self {
            origin: Point2::origin(),
            direction: Vec2::new(F::one(), F::zero()),
        }
    }
}
