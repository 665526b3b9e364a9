// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        // Ensure min coordinates are <= max coordinates
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Strict interval overlap on both axes. Boxes that only share a face or
    /// a corner do not overlap.
    pub fn overlaps(&self, other: &AABB) -> bool {
        let x_overlap = self.max.x > other.min.x && self.min.x < other.max.x;
        let y_overlap = self.max.y > other.min.y && self.min.y < other.max.y;
        x_overlap && y_overlap
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Merges another AABB into this one, expanding this AABB to contain both.
    pub fn merge(&mut self, other: &AABB) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    /// Creates an AABB that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min_pt = *first;
        let mut max_pt = *first;
        for point in rest {
            min_pt.x = min_pt.x.min(point.x);
            min_pt.y = min_pt.y.min(point.y);
            max_pt.x = max_pt.x.max(point.x);
            max_pt.y = max_pt.y.max(point.y);
        }
        Some(AABB::new(min_pt, max_pt))
    }
}

/// Broad-phase test between two boxes; symmetric in its arguments.
pub fn overlaps(a: &AABB, b: &AABB) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> AABB {
        AABB::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    #[test]
    fn test_aabb_new_orders_corners() {
        let b = AABB::new(Vec2::new(2.0, -1.0), Vec2::new(0.0, 3.0));
        assert_eq!(b.min, Vec2::new(0.0, -1.0));
        assert_eq!(b.max, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_aabb_overlaps() {
        let a = aabb(0.0, 0.0, 1.0, 1.0);
        assert!(overlaps(&a, &aabb(0.5, 0.5, 1.5, 1.5)));
        assert!(overlaps(&a, &aabb(0.25, 0.25, 0.75, 0.75)));
        assert!(!overlaps(&a, &aabb(2.0, 0.0, 3.0, 1.0)));
        // Separated on y only
        assert!(!overlaps(&a, &aabb(0.0, 1.5, 1.0, 2.0)));
    }

    #[test]
    fn test_aabb_touching_is_not_overlap() {
        let a = aabb(0.0, 0.0, 1.0, 1.0);
        assert!(!overlaps(&a, &aabb(1.0, 0.0, 2.0, 1.0)));
        assert!(!overlaps(&a, &aabb(1.0, 1.0, 2.0, 2.0)));
    }

    #[test]
    fn test_aabb_overlap_is_symmetric() {
        let a = aabb(0.0, 0.0, 2.0, 1.0);
        let b = aabb(1.5, 0.5, 4.0, 4.0);
        let c = aabb(-3.0, -3.0, -1.0, -1.0);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        assert_eq!(overlaps(&a, &c), overlaps(&c, &a));
    }

    #[test]
    fn test_aabb_from_points() {
        assert!(AABB::from_points(&[]).is_none());
        let b = AABB::from_points(&[Vec2::new(1.0, 5.0), Vec2::new(-2.0, 0.0), Vec2::new(3.0, 2.0)])
            .expect("non-empty");
        assert_eq!(b.min, Vec2::new(-2.0, 0.0));
        assert_eq!(b.max, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_aabb_merge_and_contains() {
        let mut a = aabb(0.0, 0.0, 1.0, 1.0);
        a.merge(&aabb(2.0, -1.0, 3.0, 0.5));
        assert_eq!(a, aabb(0.0, -1.0, 3.0, 1.0));
        assert!(a.contains_point(Vec2::new(3.0, 1.0)));
        assert!(a.contains_point(Vec2::new(1.5, 0.0)));
        assert!(!a.contains_point(Vec2::new(3.1, 0.0)));
    }
}
