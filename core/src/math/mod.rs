//! Value types of the toolkit that adapters know how to decompose.

pub mod color;
pub mod matrix;
pub mod quaternion;
pub mod rectangle;
pub mod vector;

pub use self::{
    color::{Channel, Color, Color8, FloatColor, ShortColor},
    matrix::Matrix4x4,
    quaternion::Quaternion,
    rectangle::Rectangle,
    vector::{Vec2f, Vec3f, Vec4f},
};
