//! Vector algebra for the tracer.
//!
//! `Vector3` is glam's double precision vector, so addition, subtraction,
//! scaling, dot and cross products and length come straight from its operators
//! and methods. The helpers here cover the operations with a convention of
//! their own: the ternary sum, normalization by reciprocal length, and the
//! reflection used for specular bounces.

use glam::DVec3;

/// Three component real vector used for points, directions and colors.
pub type Vector3 = DVec3;

/// Component-wise sum of three vectors.
pub fn add3(a: Vector3, b: Vector3, c: Vector3) -> Vector3 {
    a + b + c
}

/// Scale `a` to unit length.
///
/// Computed as `a * (1 / |a|)`. The zero vector has no direction and yields
/// non-finite components, so callers must never pass one.
pub fn unit_vector(a: Vector3) -> Vector3 {
    a * (1.0 / a.length())
}

/// Reflect `a` through `normal`: `2 * (normal * (a . normal)) - a`.
///
/// The result is the mirror image of `a` itself about the normal axis, not of
/// `-a`. Shading depends on this sign convention.
pub fn reflect(a: Vector3, normal: Vector3) -> Vector3 {
    let d = normal * a.dot(normal);
    d * 2.0 - a
}
