//! Recursive ray tracing.
//!
//! A ray either misses every sphere, hits one and gets shaded, or arrives at
//! a shading step deeper than [`MAX_DEPTH`]. The three outcomes are values of
//! [`Trace`], so callers decide what a miss or an exhausted bounce means to
//! them instead of unwinding through errors.

use crate::material::Color;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shader::shade;

/// Deepest recursion level that is still shaded.
///
/// Primary rays are depth 0, so a pixel sees at most three reflective bounces.
/// This cap is what terminates mutually reflecting spheres.
pub const MAX_DEPTH: u32 = 3;

/// Color of rays that hit nothing.
pub const BACKGROUND: Color = Color::splat(255.0);

/// Outcome of tracing one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trace {
    /// The ray hit a sphere and shading produced this color.
    Hit(Color),
    /// The ray hit nothing.
    Miss,
    /// The ray was shaded beyond [`MAX_DEPTH`]; no color was produced.
    DepthExceeded,
}

impl Trace {
    /// Color of the outcome as seen by a primary ray.
    ///
    /// A miss shows the background. Exceeding the depth yields nothing and
    /// the caller must pick a fallback.
    pub fn color(self) -> Option<Color> {
        match self {
            Trace::Hit(color) => Some(color),
            Trace::Miss => Some(BACKGROUND),
            Trace::DepthExceeded => None,
        }
    }

    /// Color of the outcome as seen by a reflection: only hits contribute.
    pub fn hit_color(self) -> Option<Color> {
        match self {
            Trace::Hit(color) => Some(color),
            Trace::Miss | Trace::DepthExceeded => None,
        }
    }
}

/// Trace `ray` through `scene` at recursion level `depth`.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32) -> Trace {
    let Some(hit) = scene.intersect(ray) else {
        return Trace::Miss;
    };

    let point_at_time = ray.at(hit.distance);
    let normal = hit.sphere.normal_at(point_at_time);

    shade(scene, ray, hit.sphere, point_at_time, normal, depth)
}
