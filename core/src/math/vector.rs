use std::ops::{Add, Mul, Neg, Sub};

macro_rules! impl_vector {
    ($name:ident : $( $field:ident ),+ ; $size:literal) => {
        #[derive(Debug, Default, Copy, Clone, PartialEq)]
        pub struct $name {
            $( pub $field: f32, )+
        }

        impl $name {
            pub const fn new($( $field: f32 ),+) -> Self {
                Self { $( $field ),+ }
            }

            pub const fn splat(value: f32) -> Self {
                Self { $( $field: value ),+ }
            }

            pub fn dot(&self, other: &Self) -> f32 {
                0.0 $( + self.$field * other.$field )+
            }

            pub fn length(&self) -> f32 {
                self.dot(self).sqrt()
            }

            pub fn to_array(self) -> [f32; $size] {
                [$( self.$field ),+]
            }
        }

        impl From<[f32; $size]> for $name {
            fn from([$( $field ),+]: [f32; $size]) -> Self {
                Self { $( $field ),+ }
            }
        }

        impl From<$name> for [f32; $size] {
            fn from(value: $name) -> Self {
                value.to_array()
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self { $( $field: self.$field + other.$field ),+ }
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self { $( $field: self.$field - other.$field ),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            fn mul(self, scalar: f32) -> Self {
                Self { $( $field: self.$field * scalar ),+ }
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $( $field: -self.$field ),+ }
            }
        }
    };
}

impl_vector!(Vec2f: x, y; 2);
impl_vector!(Vec3f: x, y, z; 3);
impl_vector!(Vec4f: x, y, z, w; 4);

impl Vec3f {
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}
