//! Core polygon type and basic operations.

use crate::error::SightlineError;
use crate::primitives::Point2;
use crate::tolerance::Tolerances;
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed: vertex `i` connects to vertex
/// `(i + 1) % n`, and the last vertex connects back to the first. Vertices
/// may be in either winding order; containment testing is winding-agnostic,
/// while `signed_area` is positive for counter-clockwise order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon boundary.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the centroid (center of mass) of the polygon.
    ///
    /// Returns `None` for degenerate polygons (fewer than 3 vertices or zero
    /// area).
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(&self.vertices)
    }

    /// Tests if a point is inside the polygon.
    ///
    /// Uses the even-odd ray-crossing rule; see [`polygon_contains`].
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Tests if the polygon is convex.
    pub fn is_convex(&self) -> bool {
        polygon_is_convex(&self.vertices)
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            if v.x < min.x {
                min.x = v.x;
            }
            if v.y < min.y {
                min.y = v.y;
            }
            if v.x > max.x {
                max.x = v.x;
            }
            if v.y > max.y {
                max.y = v.y;
            }
        }

        Some((min, max))
    }

    /// Validates the polygon as usable boundary input.
    ///
    /// Rejects polygons with fewer than 3 vertices and polygons with
    /// coincident consecutive vertices (near-zero-length edges), both of
    /// which make the downstream edge math unreliable.
    pub fn validate(&self) -> Result<(), SightlineError> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(SightlineError::TooFewVertices { count: n });
        }

        let eps = Tolerances::<F>::new().parallel;
        for i in 0..n {
            let j = (i + 1) % n;
            if self.vertices[i].distance_squared(self.vertices[j]) < eps * eps {
                return Err(SightlineError::DegenerateEdge { index: i, next: j });
            }
        }

        Ok(())
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Computes the centroid of a polygon.
///
/// Returns `None` for degenerate polygons (fewer than 3 vertices or zero area).
pub fn polygon_centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    if vertices.len() < 3 {
        return None;
    }

    let area = polygon_signed_area(vertices);
    if area.abs() < F::epsilon() {
        return None;
    }

    let mut cx = F::zero();
    let mut cy = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        let cross = vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
        cx = cx + (vertices[i].x + vertices[j].x) * cross;
        cy = cy + (vertices[i].y + vertices[j].y) * cross;
    }

    let six = F::from(6.0).unwrap();
    Some(Point2::new(cx / (six * area), cy / (six * area)))
}

/// Tests if a point is inside a polygon using the even-odd crossing rule.
///
/// Casts a horizontal ray from the point toward increasing x and counts edge
/// crossings; an odd count means inside. The test is agnostic to winding
/// order and handles non-convex polygons. Points exactly on the boundary may
/// report either way.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    polygon_contains_with(vertices, point, Tolerances::<F>::new().parallel)
}

/// [`polygon_contains`] with an explicit near-horizontal-edge guard epsilon.
///
/// An edge is counted when its y-span straddles the point's y and the edge
/// crosses the horizontal line through the point to the right of it. The
/// edge's y-delta is clamped to `eps` to keep the crossing-x division stable
/// for near-horizontal edges.
pub fn polygon_contains_with<F: Float>(vertices: &[Point2<F>], point: Point2<F>, eps: F) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let n = vertices.len();
    let mut inside = false;

    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[(i + 1) % n];

        let straddles = (vi.y > point.y) != (vj.y > point.y);
        if !straddles {
            continue;
        }

        let dy = vj.y - vi.y;
        let dy = if dy.abs() > eps { dy } else { eps };
        let crossing_x = (vj.x - vi.x) * (point.y - vi.y) / dy + vi.x;

        if point.x < crossing_x {
            inside = !inside;
        }
    }

    inside
}

/// Tests if a polygon is convex.
///
/// Returns true if all cross products of consecutive edges have the same sign.
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    if vertices.len() < 3 {
        return true; // Degenerate cases are considered convex
    }

    let n = vertices.len();
    let mut sign: Option<bool> = None;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let cross = (b - a).cross(c - b);

        if cross.abs() > F::epsilon() {
            let is_positive = cross > F::zero();
            match sign {
                None => sign = Some(is_positive),
                Some(s) if s != is_positive => return false,
                _ => {}
            }
        }
    }

    true
}
