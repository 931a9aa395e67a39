//! Visibility polygon computation.
//!
//! Computes the region of a simple polygon directly visible from an interior
//! point, via angular ray casting against the polygon's edges.
//!
//! # Example
//!
//! ```
//! use sightline::polygon::{visibility_polygon, Polygon};
//! use sightline::Point2;
//!
//! // A square room with the viewpoint in the center
//! let room = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//!
//! let visible = visibility_polygon(&room, Point2::new(5.0, 5.0));
//! // The whole room is visible: one point per corner
//! assert_eq!(visible.len(), 4);
//! ```

use super::core::Polygon;
use crate::primitives::{Point2, Ray2, Segment2};
use crate::tolerance::Tolerances;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the visibility polygon of a guard inside a simple polygon.
///
/// Uses the default [`Tolerances`]; see [`visibility_polygon_with`] for the
/// tunable variant and the algorithm description.
pub fn visibility_polygon<F: Float>(boundary: &Polygon<F>, guard: Point2<F>) -> Polygon<F> {
    visibility_polygon_with(boundary, guard, &Tolerances::new())
}

/// Computes the visibility polygon of a guard with explicit tolerances.
///
/// For every boundary vertex, three candidate rays are cast from the guard:
/// one aimed exactly at the vertex and one jittered a hair to each side. A
/// ray aimed exactly at a vertex grazes the shared endpoint of two edges,
/// which is a degenerate intersection; the jittered rays reliably land on
/// the visible surface just before and just after the vertex, so occluding
/// corners contribute both their own position and the point they project
/// onto the far wall.
///
/// Hit points closer together than the dedup tolerance are merged, and the
/// survivors are sorted by angle around the guard, yielding a boundary that
/// traverses the visible region counter-clockwise.
///
/// The guard is assumed to lie strictly inside the boundary; callers that
/// accept arbitrary points should gate on containment first (see
/// [`crate::gallery::Gallery::try_add_guard`]). Behavior for a guard exactly
/// on the boundary or on a vertex is unspecified.
///
/// The result may have fewer than 3 points, meaning there is no drawable
/// visible area. Polygons with fewer than 3 vertices produce an empty result.
pub fn visibility_polygon_with<F: Float>(
    boundary: &Polygon<F>,
    guard: Point2<F>,
    tol: &Tolerances<F>,
) -> Polygon<F> {
    let vertices = &boundary.vertices;
    if vertices.len() < 3 {
        return Polygon::empty();
    }

    let length = probe_length(boundary, guard);

    // Three candidate angles per vertex: just before, at, and just after.
    let mut hits: Vec<Point2<F>> = Vec::with_capacity(vertices.len() * 3);
    for v in vertices {
        let angle = guard.angle_to(*v);
        for candidate in [
            angle - tol.angle_jitter,
            angle,
            angle + tol.angle_jitter,
        ] {
            if let Some(hit) = cast_ray_inner(guard, candidate, vertices, length, tol) {
                hits.push(hit);
            }
        }
    }

    // Merge near-duplicate hits. The hit count is bounded by 3x the vertex
    // count, so the quadratic scan stays cheap.
    let dedup_sq = tol.dedup * tol.dedup;
    let mut points: Vec<Point2<F>> = Vec::with_capacity(hits.len());
    for hit in hits {
        if points
            .iter()
            .all(|kept| kept.distance_squared(hit) >= dedup_sq)
        {
            points.push(hit);
        }
    }

    // Angular sort around the guard gives a CCW traversal of the visible
    // region boundary, making the result drawable as a simple polygon.
    points.sort_by(|a, b| {
        guard
            .angle_to(*a)
            .partial_cmp(&guard.angle_to(*b))
            .unwrap_or(Ordering::Equal)
    });

    Polygon::new(points)
}

/// Casts a ray from `origin` at `angle` and returns the nearest boundary hit.
///
/// Returns `None` when no polygon edge lies forward along the ray, which for
/// an origin inside the polygon only happens on degenerate input.
pub fn cast_ray<F: Float>(
    boundary: &Polygon<F>,
    origin: Point2<F>,
    angle: F,
    tol: &Tolerances<F>,
) -> Option<Point2<F>> {
    if boundary.vertices.is_empty() {
        return None;
    }
    let length = probe_length(boundary, origin);
    cast_ray_inner(origin, angle, &boundary.vertices, length, tol)
}

/// Probe length long enough that a ray from `origin` always exits the scene:
/// the distance to the farthest bounding-box corner plus the box diagonal.
fn probe_length<F: Float>(boundary: &Polygon<F>, origin: Point2<F>) -> F {
    match boundary.bounding_box() {
        Some((min, max)) => {
            let diag = min.distance(max);
            origin.distance(min).max(origin.distance(max)) + diag + F::one()
        }
        None => F::one(),
    }
}

fn cast_ray_inner<F: Float>(
    origin: Point2<F>,
    angle: F,
    vertices: &[Point2<F>],
    length: F,
    tol: &Tolerances<F>,
) -> Option<Point2<F>> {
    let probe = Ray2::from_angle(origin, angle).to_segment(length);

    let n = vertices.len();
    let mut nearest_t = F::infinity();
    let mut nearest: Option<Point2<F>> = None;

    for i in 0..n {
        let edge = Segment2::new(vertices[i], vertices[(i + 1) % n]);

        if let Some((point, t, u)) = probe.intersect_lines(edge, tol.parallel) {
            // Strictly forward along the ray (excluding the origin itself),
            // and on the edge segment with endpoint slack.
            let forward = t > tol.ray_forward;
            let on_edge = u >= -tol.edge_slack && u <= F::one() + tol.edge_slack;

            if forward && on_edge && t < nearest_t {
                nearest_t = t;
                nearest = Some(point);
            }
        }
    }

    nearest
}
