//! Sphere primitive for ray tracing.
//!
//! Intersection uses the geometric form of the ray-sphere test: project the
//! origin-to-center vector onto the (unit) ray direction and compare the
//! squared perpendicular distance with the squared radius.

use serde::{Deserialize, Serialize};

use crate::hittable::{Hit, Hittable};
use crate::material::{Color, Material};
use crate::ray::Ray;
use crate::vector::{unit_vector, Vector3};

/// Sphere primitive defined by center, radius, color and material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vector3,

    /// Surface color, channels in [0, 255].
    pub color: Color,

    /// Radius of the sphere, expected to be positive.
    pub radius: f64,

    /// Reflectance coefficients.
    #[serde(flatten)]
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vector3, radius: f64, color: Color, material: Material) -> Self {
        Self {
            center,
            color,
            radius,
            material,
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vector3) -> Vector3 {
        unit_vector(point - self.center)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray) -> Option<Hit<'_>> {
        // Vector from ray origin to sphere center
        let eye_to_center = self.center - r.origin;

        // Length of its projection onto the ray, and its squared length
        let v = eye_to_center.dot(r.direction);
        let eo_dot = eye_to_center.dot(eye_to_center);

        let discriminant = self.radius * self.radius - eo_dot + v * v;
        if discriminant < 0.0 {
            return None;
        }

        // Near root only. It goes negative when the origin is inside the
        // sphere or the sphere lies behind the ray; both are reported as is.
        Some(Hit {
            distance: v - discriminant.sqrt(),
            sphere: self,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vector3::ZERO, 1.0, Color::splat(255.0), Material::new(0.0, 0.7, 0.1))
    }

    #[test]
    fn ray_at_center_hits_front_surface() {
        let sphere = unit_sphere();
        let origin = Vector3::new(3.0, 4.0, 12.0);
        let ray = Ray::new(origin, unit_vector(sphere.center - origin));

        let hit = sphere.hit(&ray).expect("ray aimed at the center must hit");
        assert!((hit.distance - (origin.length() - 1.0)).abs() < EPSILON);
    }

    #[test]
    fn ray_passing_beside_sphere_misses() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vector3::new(2.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn tangent_ray_hits_at_grazing_point() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vector3::new(1.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = sphere.hit(&ray).expect("tangent ray has a zero discriminant");
        assert!((hit.distance - 10.0).abs() < EPSILON);
    }

    #[test]
    fn sphere_behind_ray_gives_negative_distance() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        let hit = sphere.hit(&ray).expect("the line still crosses the sphere");
        assert!((hit.distance - (-6.0)).abs() < EPSILON);
    }

    #[test]
    fn origin_inside_sphere_reports_near_root() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 1.0, 0.0));
        let hit = sphere.hit(&ray).expect("origin inside always intersects");
        assert!((hit.distance - (-1.0)).abs() < EPSILON);
    }

    #[test]
    fn normal_points_outward() {
        let center = Vector3::new(0.0, 2.0, 0.0);
        let sphere = Sphere::new(center, 2.0, Color::ONE, Material::new(0.0, 0.0, 1.0));
        let normal = sphere.normal_at(Vector3::new(0.0, 4.0, 0.0));
        assert!((normal - Vector3::Y).length() < EPSILON);
    }
}
