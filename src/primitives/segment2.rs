//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    /// - Values outside [0, 1] extrapolate beyond the segment
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns `true` if the segment is degenerate (start equals end within `eps`).
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.length_squared() <= eps * eps
    }

    /// Intersects the supporting lines of `self` and `other`.
    ///
    /// Both segments are treated as parametrized lines: `self.point_at(t)` and
    /// `other.point_at(u)`. Solves the two-line system via Cramer's rule on the
    /// direction cross products.
    ///
    /// Returns `Some((point, t, u))` with the intersection point and both line
    /// parameters. No range restriction is applied to `t` or `u` — the caller
    /// decides which parameter ranges count as a hit (segment, ray, or line).
    ///
    /// Returns `None` when the denominator cross product is smaller than
    /// `parallel_eps`, i.e. the lines are parallel or nearly so.
    pub fn intersect_lines(self, other: Self, parallel_eps: F) -> Option<(Point2<F>, F, F)> {
        let d1 = self.direction();
        let d2 = other.direction();

        let den = d1.cross(d2);
        if den.abs() < parallel_eps {
            return None;
        }

        let delta = other.start - self.start;
        let t = delta.cross(d2) / den;
        let u = delta.cross(d1) / den;

        Some((self.point_at(t), t, u))
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
