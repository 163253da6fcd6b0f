//! Ray-object intersection.
//!
//! Defines the Hittable trait and the `Hit` record it returns. A slice of
//! spheres is itself hittable: it reports the closest hit among its members,
//! which is the scene intersection the tracer and the shadow test share.

use crate::ray::Ray;
use crate::sphere::Sphere;

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Distance along the ray to the intersection point.
    ///
    /// May be negative: the near root of the sphere equation is reported even
    /// when it lies behind the ray origin.
    pub distance: f64,
    /// Sphere that was hit.
    pub sphere: &'a Sphere,
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so the scene can be shared across the
/// render's worker threads.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection, returning the near hit if any.
    fn hit(&self, r: &Ray) -> Option<Hit<'_>>;
}

impl Hittable for [Sphere] {
    fn hit(&self, r: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;

        // Strict comparison keeps the first of equally distant spheres
        for sphere in self {
            if let Some(candidate) = sphere.hit(r) {
                let closest_so_far = closest.map_or(f64::INFINITY, |best| best.distance);
                if candidate.distance < closest_so_far {
                    closest = Some(candidate);
                }
            }
        }

        closest
    }
}
