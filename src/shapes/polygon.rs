use std::f64::consts::PI;

use super::edge::Edge;
use crate::error::PhysicsError;
use crate::math::vec2::Vec2;

/// Polygons with less area than this are rejected as degenerate.
const AREA_EPSILON: f64 = 1e-12;

/// A simple polygon in local space, vertices ordered counter-clockwise.
///
/// Construction validates the outline: at least three finite vertices, no
/// zero-length edges, no crossing edges, non-zero area and CCW winding. The
/// winding fixes the sign of the outward normals, so a clockwise outline is
/// rejected rather than silently flipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, PhysicsError> {
        let n = vertices.len();
        if n < 3 {
            return Err(PhysicsError::TooFewVertices { count: n });
        }
        if !vertices.iter().all(|v| v.is_finite()) {
            return Err(PhysicsError::NonFiniteInput);
        }

        let polygon = Polygon { vertices };
        for (index, edge) in polygon.edges().enumerate() {
            if edge.direction().magnitude_squared() == 0.0 {
                return Err(PhysicsError::DegenerateEdge { index });
            }
        }
        polygon.check_simple()?;

        let signed_area = polygon.signed_area();
        if signed_area.abs() < AREA_EPSILON {
            return Err(PhysicsError::DegenerateArea { area: signed_area.abs() });
        }
        if signed_area < 0.0 {
            return Err(PhysicsError::ClockwiseWinding);
        }
        Ok(polygon)
    }

    /// Axis-aligned rectangle centred on the origin.
    pub fn rect(width: f64, height: f64) -> Result<Self, PhysicsError> {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Polygon::new(vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ])
    }

    /// Regular polygon with `sides` vertices at distance `size` from the origin,
    /// the first one on the +x axis.
    pub fn regular(sides: usize, size: f64) -> Result<Self, PhysicsError> {
        if sides < 3 {
            return Err(PhysicsError::TooFewVertices { count: sides });
        }
        let theta = 2.0 * PI / sides as f64;
        let vertices = (0..sides)
            .map(|i| {
                let angle = i as f64 * theta;
                Vec2::new(size * angle.cos(), size * angle.sin())
            })
            .collect();
        Polygon::new(vertices)
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a validated polygon; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges between consecutive vertices, wrapping from the last to the first.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area of the fan from vertex 0; positive for CCW winding.
    pub fn signed_area(&self) -> f64 {
        let p0 = self.vertices[0];
        let mut twice_area = 0.0;
        for i in 1..(self.vertices.len() - 1) {
            twice_area += (self.vertices[i] - p0).cross(self.vertices[i + 1] - p0);
        }
        twice_area / 2.0
    }

    /// Area from the fan triangulation at vertex 0, summing unsigned triangle areas.
    pub fn area(&self) -> f64 {
        let (twice_area, _) = fan_moments(&self.vertices);
        twice_area / 2.0
    }

    /// Area-weighted centroid of the fan triangles.
    pub fn centroid(&self) -> Vec2 {
        polygon_centroid(&self.vertices).unwrap_or(Vec2::ZERO)
    }

    /// Copy of this polygon translated so its centroid sits at the origin,
    /// together with the centroid that was subtracted.
    pub fn recentered(&self) -> (Polygon, Vec2) {
        let centroid = self.centroid();
        let vertices = self.vertices.iter().map(|&v| v - centroid).collect();
        (Polygon { vertices }, centroid)
    }

    /// Rotational inertia about the centroid for unit mass.
    ///
    /// Each triangle (centroid, v_i, v_i+1) contributes its second moment
    /// `(a² + a·b + b²) / 6` weighted by its area; the sum is normalised by the
    /// total area so that multiplying by the mass gives the body's inertia.
    pub fn inertia_per_mass(&self) -> f64 {
        let centroid = self.centroid();
        let n = self.vertices.len();
        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        for i in 0..n {
            let a = self.vertices[i] - centroid;
            let b = self.vertices[(i + 1) % n] - centroid;
            let weight = b.cross(a).abs();
            total_weight += weight;
            weighted += weight * (a.magnitude_squared() + a.dot(b) + b.magnitude_squared());
        }
        if total_weight < AREA_EPSILON {
            return 0.0;
        }
        weighted / total_weight / 6.0
    }

    /// Mean distance of the vertices from the centroid. Not a bounding radius.
    pub fn mean_radius(&self) -> f64 {
        let centroid = self.centroid();
        let sum: f64 = self.vertices.iter().map(|&v| v.distance(centroid)).sum();
        sum / self.vertices.len() as f64
    }

    /// Any two non-adjacent edges touching or crossing makes the outline non-simple.
    fn check_simple(&self) -> Result<(), PhysicsError> {
        let edges: Vec<Edge> = self.edges().collect();
        let n = edges.len();
        for first in 0..n {
            for second in (first + 2)..n {
                if first == 0 && second == n - 1 {
                    continue; // adjacent through the wrap-around
                }
                if edges[first].intersect(&edges[second]).is_some() {
                    return Err(PhysicsError::SelfIntersecting { first, second });
                }
            }
        }
        Ok(())
    }
}

/// Sum of unsigned doubled triangle areas of the fan from `points[0]`, and the
/// same areas weighted by each triangle's centroid.
fn fan_moments(points: &[Vec2]) -> (f64, Vec2) {
    let p0 = points[0];
    let mut total = 0.0;
    let mut weighted = Vec2::ZERO;
    for i in 1..points.len().saturating_sub(1) {
        let pi = points[i];
        let pii = points[i + 1];
        let weight = (pi - p0).cross(pii - p0).abs();
        total += weight;
        weighted += ((p0 + pi + pii) / 3.0) * weight;
    }
    (total, weighted)
}

/// Centroid of the polygon outlined by `points`, via fan triangulation.
///
/// One point is its own centroid and two points give their midpoint. When all
/// points are collinear the fan has no area and the arithmetic mean is
/// returned instead. `None` only for an empty slice.
pub fn polygon_centroid(points: &[Vec2]) -> Option<Vec2> {
    match points.len() {
        0 => None,
        1 => Some(points[0]),
        2 => Some((points[0] + points[1]) / 2.0),
        n => {
            let (total, weighted) = fan_moments(points);
            if total < AREA_EPSILON {
                let mut avg = Vec2::ZERO;
                for &p in points {
                    avg += p;
                }
                Some(avg / n as f64)
            } else {
                Some(weighted / total)
            }
        }
    }
}
