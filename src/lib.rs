//! spheretrace ray tracer
//!
//! Renders spheres lit by point lights with recursive Whitted-style ray
//! tracing: an ambient term, a shadow-tested Lambertian term and mirror
//! reflections capped at three bounces. The core takes an immutable
//! [`scene::Scene`] and a raster size and returns a [`render::Raster`] of
//! unclamped colors; scene generation, scene files and image output live in
//! their own modules around it.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod ray;
pub mod material;
pub mod sphere;
pub mod hittable;
pub mod camera;
pub mod scene;
pub mod shader;
pub mod tracer;
pub mod render;
pub mod random;
pub mod config;
pub mod output;
