use crate::math::vector::Vec3f;

/// 4x4 transform stored as a flat row-major element sequence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4 {
    pub mat: [f32; 16],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix4x4 {
    pub const fn new(mat: [f32; 16]) -> Self {
        Self { mat }
    }

    pub const fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn translation(offset: Vec3f) -> Self {
        let mut result = Self::identity();
        result.mat[12] = offset.x;
        result.mat[13] = offset.y;
        result.mat[14] = offset.z;
        result
    }

    pub fn scale(factor: Vec3f) -> Self {
        let mut result = Self::identity();
        result.mat[0] = factor.x;
        result.mat[5] = factor.y;
        result.mat[10] = factor.z;
        result
    }

    pub fn get(&self, row: usize, column: usize) -> f32 {
        self.mat[row * 4 + column]
    }

    pub fn set(&mut self, row: usize, column: usize, value: f32) {
        self.mat[row * 4 + column] = value;
    }

    pub fn transpose(&self) -> Self {
        let mut result = *self;
        for row in 0..4 {
            for column in 0..4 {
                result.mat[column * 4 + row] = self.mat[row * 4 + column];
            }
        }
        result
    }
}
