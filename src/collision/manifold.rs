use crate::math::vec2::Vec2;

/// Outcome of a narrow-phase test between two bodies.
///
/// `left_idx`/`right_idx` are arena indices. "Left" is the body whose
/// projection onto `axis` comes first, so `depth` is
/// `max(left · axis) - min(right · axis)` and `axis` runs from left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    pub colliding: bool,
    /// SAT reported an overlap but no contact point could be found.
    pub retracted: bool,
    /// Penetration depth along `axis`; negative for the separating witness.
    pub depth: f64,
    /// Unit axis of minimum penetration, or the separating axis.
    pub axis: Vec2,
    /// Centroid of the intersection region. Zero unless `colliding`.
    pub contact_point: Vec2,
    pub left_idx: usize,
    pub right_idx: usize,
}

impl CollisionResult {
    /// Non-colliding result carrying the separating axis and its (negative) depth.
    pub fn separated(left_idx: usize, right_idx: usize, depth: f64, axis: Vec2) -> Self {
        Self {
            colliding: false,
            retracted: false,
            depth,
            axis,
            contact_point: Vec2::ZERO,
            left_idx,
            right_idx,
        }
    }

    /// SAT overlap downgraded to "not colliding" for lack of a contact point.
    pub fn retracted(left_idx: usize, right_idx: usize, depth: f64, axis: Vec2) -> Self {
        Self {
            retracted: true,
            ..Self::separated(left_idx, right_idx, depth, axis)
        }
    }

    pub fn contact(left_idx: usize, right_idx: usize, depth: f64, axis: Vec2, contact_point: Vec2) -> Self {
        Self {
            colliding: true,
            retracted: false,
            depth,
            axis,
            contact_point,
            left_idx,
            right_idx,
        }
    }
}
