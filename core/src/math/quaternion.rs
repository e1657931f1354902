use crate::math::vector::{Vec3f, Vec4f};

/// Rotation stored as `(x, y, z, w)` with `w` the scalar part.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion {
    pub v: Vec4f,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            v: Vec4f::new(x, y, z, w),
        }
    }

    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation of `angle` degrees around `axis`.
    pub fn from_axis_angle(angle: f32, axis: Vec3f) -> Self {
        let length = axis.length();
        if length <= f32::EPSILON {
            return Self::identity();
        }
        let half = angle.to_radians() * 0.5;
        let factor = half.sin() / length;
        Self::new(axis.x * factor, axis.y * factor, axis.z * factor, half.cos())
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.v.x, -self.v.y, -self.v.z, self.v.w)
    }
}
