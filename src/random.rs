//! Random scene generation.
//!
//! Builds the default scene: a cluster of reflective white spheres under a
//! single light, viewed from slightly below. Every draw comes from an
//! explicitly seeded ChaCha20 generator so a render can be reproduced from
//! its logged seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::camera::Camera;
use crate::material::{Color, Material};
use crate::scene::Scene;
use crate::sphere::Sphere;
use crate::vector::Vector3;

/// Number of spheres in the default scene.
pub const DEFAULT_SPHERE_COUNT: usize = 10;

/// Sphere centers are drawn from `[0, CLUSTER_SIZE)` on each axis.
const CLUSTER_SIZE: f64 = 4.0;
const MIN_RADIUS: f64 = 0.3;
const RADIUS_SPREAD: f64 = 0.4;

/// Seeded generator for scene construction, along with the seed it used.
///
/// Without a seed, one is drawn from the operating system backed generator.
pub fn scene_rng(seed: Option<u64>) -> (ChaCha20Rng, u64) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    (ChaCha20Rng::seed_from_u64(seed), seed)
}

/// Generate a random Vector3 with components in [0.0, max).
fn random_point<R: Rng>(rng: &mut R, max: f64) -> Vector3 {
    Vector3::new(
        rng.random::<f64>() * max,
        rng.random::<f64>() * max,
        rng.random::<f64>() * max,
    )
}

/// Camera, light and `count` random spheres of the default scene.
pub fn random_scene<R: Rng>(rng: &mut R, count: usize) -> Scene {
    let material = Material::new(0.7, 0.3, 0.1);
    let white = Color::splat(255.0);

    let spheres = (0..count)
        .map(|_| {
            let center = random_point(rng, CLUSTER_SIZE);
            let radius = MIN_RADIUS + rng.random::<f64>() * RADIUS_SPREAD;
            Sphere::new(center, radius, white, material)
        })
        .collect();

    let camera = Camera::new(Vector3::new(0.0, 1.8, 10.0), Vector3::new(0.0, 3.0, 0.0), 45.0);
    Scene::new(camera, spheres, vec![Vector3::new(-30.0, -10.0, 20.0)])
}
