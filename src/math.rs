//! Vector primitives over glam, with the numeric edge cases the mapper relies on.
//!
//! glam already provides most of these as methods. They are kept as free
//! functions so the exact arithmetic is pinned down in one place: the mapper
//! output must not change if glam reorders an operation internally.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Divisor substituted by [`normalize`] when a vector has no usable length.
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Plain `{x, y, z}` record used on the JSON / JavaScript boundary.
///
/// glam serializes `Vec3` as a `[x, y, z]` tuple; pose-estimation output and
/// the viewer both speak objects, so this is the wire shape.
#[repr(C)]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for Vec3 {
    #[inline]
    fn from(p: Point3) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<Vec3> for Point3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

#[inline]
pub fn scale(v: Vec3, s: f32) -> Vec3 {
    Vec3::new(v.x * s, v.y * s, v.z * s)
}

/// Euclidean norm.
#[inline]
pub fn length(v: Vec3) -> f32 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

/// Scale `v` to unit length.
///
/// Never fails and never divides by zero: if `length(v)` is not strictly
/// positive (a zero vector, or NaN components) the divisor becomes
/// [`NORMALIZE_EPSILON`]. A zero vector therefore comes back as a zero vector,
/// which callers must be prepared to see in place of a unit direction.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = length(v);
    let len = if len > 0.0 { len } else { NORMALIZE_EPSILON };
    Vec3::new(v.x / len, v.y / len, v.z / len)
}

/// Component-wise `a + (b - a) * t`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(
        a.x + (b.x - a.x) * t,
        a.y + (b.y - a.y) * t,
        a.z + (b.z - a.z) * t,
    )
}

/// Average of two points.
#[inline]
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    scale(add(a, b), 0.5)
}
