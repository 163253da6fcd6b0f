//! Surface shading: ambient, shadow-tested Lambertian diffuse, and recursive
//! mirror reflection, summed without normalization or clamping.

use crate::material::Color;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::sphere::Sphere;
use crate::tracer::{trace, Trace, MAX_DEPTH};
use crate::vector::{add3, reflect, unit_vector, Vector3};

/// Nearest shadow-ray distance at or below which a light counts as blocked.
///
/// The shading point's own sphere reports a distance near zero, which must
/// not shadow it.
pub const SHADOW_TOLERANCE: f64 = -0.005;

/// Color of `sphere` at `point` for a ray arriving along `ray`.
///
/// Returns [`Trace::DepthExceeded`] when `depth` is past [`MAX_DEPTH`].
/// A reflection that misses or runs out of depth adds nothing.
pub fn shade(
    scene: &Scene,
    ray: &Ray,
    sphere: &Sphere,
    point: Vector3,
    normal: Vector3,
    depth: u32,
) -> Trace {
    if depth > MAX_DEPTH {
        return Trace::DepthExceeded;
    }

    let material = &sphere.material;

    let lambert_amount = if material.is_diffuse() {
        lambert_amount(scene, point, normal)
    } else {
        0.0
    };

    let reflected = if material.is_reflective() {
        let reflected_ray = Ray::new(point, reflect(ray.direction, normal));
        trace(scene, &reflected_ray, depth + 1)
            .hit_color()
            .map_or(Color::ZERO, |reflected_color| material.specular_term(reflected_color))
    } else {
        Color::ZERO
    };

    Trace::Hit(add3(
        reflected,
        material.diffuse_term(sphere.color, lambert_amount),
        material.ambient_term(sphere.color),
    ))
}

/// Sum of positive cosines between `normal` and the direction to each visible light.
pub fn lambert_amount(scene: &Scene, point: Vector3, normal: Vector3) -> f64 {
    scene
        .lights
        .iter()
        .filter(|light| is_light_visible(scene, point, **light))
        .map(|light| unit_vector(*light - point).dot(normal))
        .filter(|contribution| *contribution > 0.0)
        .sum()
}

/// Whether `light` illuminates `point`.
///
/// The shadow ray is cast from `point` away from the light, so occluders
/// between the two show up at negative distances.
pub fn is_light_visible(scene: &Scene, point: Vector3, light: Vector3) -> bool {
    let shadow_ray = Ray::new(point, unit_vector(point - light));
    match scene.intersect(&shadow_ray) {
        Some(hit) => clears_shadow(hit.distance),
        None => true,
    }
}

/// Whether a shadow-ray hit at `distance` leaves the light unblocked.
fn clears_shadow(distance: f64) -> bool {
    distance > SHADOW_TOLERANCE
}
