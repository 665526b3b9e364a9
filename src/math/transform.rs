use super::vec2::Vec2;

/// Position plus rotation, with the rotation's cosine and sine cached so that
/// per-vertex transforms do not call into trigonometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    angle: f64, // Radians
    cos: f64,
    sin: f64,
}

impl Transform {
    /// Creates a new transform.
    pub fn new(position: Vec2, angle: f64) -> Self {
        Self {
            position,
            angle,
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    /// Creates an identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn cos(&self) -> f64 {
        self.cos
    }

    pub fn sin(&self) -> f64 {
        self.sin
    }

    /// Sets the rotation angle and refreshes the cached cosine/sine.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
        self.cos = angle.cos();
        self.sin = angle.sin();
    }

    /// Rotates a vector by this transform's rotation (no translation).
    pub fn rotate(&self, v: Vec2) -> Vec2 {
        v.rotate_fast(self.cos, self.sin)
    }

    /// Applies the transform (rotation then translation) to a point.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.rotate(point) + self.position
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
