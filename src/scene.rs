//! Immutable scene description: one camera, spheres and point lights.

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::hittable::{Hit, Hittable};
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::Vector3;

/// Everything the tracer needs to render a frame.
///
/// Built once and shared read-only for the whole render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Viewpoint of the render.
    pub camera: Camera,
    /// Spheres in intersection order. The first of equally close spheres wins.
    #[serde(default)]
    pub spheres: Vec<Sphere>,
    /// Point light positions.
    #[serde(default)]
    pub lights: Vec<Vector3>,
}

impl Scene {
    /// Create a scene from its parts.
    pub fn new(camera: Camera, spheres: Vec<Sphere>, lights: Vec<Vector3>) -> Self {
        Self {
            camera,
            spheres,
            lights,
        }
    }

    /// Closest sphere along `ray`, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        self.spheres.as_slice().hit(ray)
    }
}
