//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction. Every ray the tracer
//! casts carries a unit direction, so `t` is a distance in world units.

use crate::vector::Vector3;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, a surface point for reflection
    /// and shadow rays.
    pub origin: Vector3,

    /// Direction of the ray.
    ///
    /// Not enforced, but the intersection formula assumes a unit vector.
    /// Build it with [`crate::vector::unit_vector`].
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}
