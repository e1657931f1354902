//! Field lists of the toolkit value types.
//!
//! Order and names are part of the on-disk contract: JSON and XML are keyed
//! by these names, binary is positional in this order.

use crate::{
    math::{Channel, Color, Matrix4x4, Quaternion, Rectangle, Vec2f, Vec3f, Vec4f},
    ofx_define,
};

ofx_define!(Vec2f { x, y });
ofx_define!(Vec3f { x, y, z });
ofx_define!(Vec4f { x, y, z, w });
ofx_define!(impl[T: Channel] Color<T> { r, g, b, a });
ofx_define!(Quaternion { v });
ofx_define!(Rectangle { x, y, width, height });
ofx_define!(Matrix4x4 { mat });
