use crate::math::vec2::Vec2;

/// Segments whose direction cross product is below this fraction of
/// `|d1| * |d2|` (the sine of the angle between them) are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-12;

/// A directed segment between two consecutive polygon points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edge {
    pub start: Vec2,
    pub end: Vec2,
}

impl Edge {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector of the edge (from start to end).
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Unit normal pointing to the right of the direction of travel.
    /// For a counter-clockwise polygon this is the outward normal.
    pub fn outward_normal(&self) -> Vec2 {
        let dir = self.direction().normalize();
        Vec2::new(dir.y, -dir.x)
    }

    /// Intersection of two segments, with parameters `t` along `self` and `u`
    /// along `other`. Endpoints count (`0 <= t, u <= 1`); parallel and
    /// collinear segments yield `None`.
    pub fn intersect(&self, other: &Edge) -> Option<(Vec2, f64, f64)> {
        let d1 = self.direction();
        let d2 = other.direction();
        let delta_start = other.start - self.start;

        let denominator = d1.cross(d2);
        if denominator.abs() <= PARALLEL_EPSILON * d1.magnitude() * d2.magnitude() {
            return None;
        }

        let t = delta_start.cross(d2) / denominator;
        let u = delta_start.cross(d1) / denominator;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some((self.start + d1 * t, t, u))
        } else {
            None
        }
    }

    /// Just the intersection point of [`Edge::intersect`].
    pub fn intersection_point(&self, other: &Edge) -> Option<Vec2> {
        self.intersect(other).map(|(point, _, _)| point)
    }
}
