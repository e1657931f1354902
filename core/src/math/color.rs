use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Numeric type a color stores its channels in.
pub trait Channel: Debug + Default + Copy + PartialEq + Serialize + DeserializeOwned {
    /// Fully saturated channel value.
    const LIMIT: Self;
}

impl Channel for u8 {
    const LIMIT: Self = u8::MAX;
}

impl Channel for u16 {
    const LIMIT: Self = u16::MAX;
}

impl Channel for f32 {
    const LIMIT: Self = 1.0;
}

/// RGBA color parameterized by channel type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color<T: Channel> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
}

pub type Color8 = Color<u8>;
pub type ShortColor = Color<u16>;
pub type FloatColor = Color<f32>;

impl<T: Channel> Default for Color<T> {
    fn default() -> Self {
        Self::gray(T::LIMIT)
    }
}

impl<T: Channel> Color<T> {
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b, a: T::LIMIT }
    }

    pub const fn with_alpha(r: T, g: T, b: T, a: T) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(value: T) -> Self {
        Self::new(value, value, value)
    }

    pub fn limit() -> T {
        T::LIMIT
    }
}

impl Color<u8> {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Builds a color from hue, saturation and brightness in `0..=255`.
    pub fn from_hsb(hue: u8, saturation: u8, brightness: u8) -> Self {
        let FloatColor { r, g, b, .. } = FloatColor::from_hsb(
            hue as f32 / 255.0,
            saturation as f32 / 255.0,
            brightness as f32 / 255.0,
        );
        let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }
}

impl Color<f32> {
    /// Builds a color from hue, saturation and brightness in `0.0..=1.0`.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        if saturation <= 0.0 {
            return Self::gray(brightness);
        }
        let sector = (hue.rem_euclid(1.0)) * 6.0;
        let index = sector.floor();
        let fraction = sector - index;
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * fraction);
        let t = brightness * (1.0 - saturation * (1.0 - fraction));
        match index as u8 {
            0 => Self::new(brightness, t, p),
            1 => Self::new(q, brightness, p),
            2 => Self::new(p, brightness, t),
            3 => Self::new(p, q, brightness),
            4 => Self::new(t, p, brightness),
            _ => Self::new(brightness, p, q),
        }
    }
}

impl<T: Channel> From<[T; 4]> for Color<T> {
    fn from([r, g, b, a]: [T; 4]) -> Self {
        Self { r, g, b, a }
    }
}
