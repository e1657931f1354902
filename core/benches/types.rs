use ofx_serde::{
    math::{Color8, Matrix4x4, Quaternion, Rectangle, Vec3f},
    ofx_define,
};
use rand::prelude::*;

pub trait Generate {
    fn generate<R>(rng: &mut R) -> Self
    where
        R: Rng;
}

impl Generate for Vec3f {
    fn generate<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        Vec3f::new(
            rng.random_range(-1000.0..1000.0),
            rng.random_range(-1000.0..1000.0),
            rng.random_range(-1000.0..1000.0),
        )
    }
}

#[derive(Debug, Default, Clone)]
pub struct Stroke {
    transform: Matrix4x4,
    rotation: Quaternion,
    points: Vec<Vec3f>,
    color: Color8,
}

ofx_define!(Stroke {
    transform,
    rotation,
    points,
    color,
});

impl Generate for Stroke {
    fn generate<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        let count = rng.random_range(10..200);
        Self {
            transform: Matrix4x4::translation(Vec3f::generate(rng)),
            rotation: Quaternion::from_axis_angle(
                rng.random_range(0.0..360.0),
                Vec3f::generate(rng),
            ),
            points: std::iter::repeat_with(|| Vec3f::generate(rng))
                .take(count)
                .collect(),
            color: Color8::from_hsb(rng.random(), 255, 255),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Sketch {
    canvas: Rectangle,
    strokes: Vec<Stroke>,
}

ofx_define!(Sketch { canvas, strokes });

impl Generate for Sketch {
    fn generate<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        let count = rng.random_range(5..20);
        Self {
            canvas: Rectangle::new(0.0, 0.0, 1280.0, 720.0),
            strokes: std::iter::repeat_with(|| Stroke::generate(rng))
                .take(count)
                .collect(),
        }
    }
}
