//! Surface material for the shading model.
//!
//! A material is three independent reflectance coefficients: ambient,
//! Lambertian diffuse, and mirror specular. They are not normalized against
//! each other, so a bright surface can exceed the display range before the
//! output writer clamps it.

use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// RGB color with channels in real form, nominally [0, 255].
pub type Color = Vector3;

/// Reflectance coefficients of a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Weight of the recursively traced mirror reflection.
    pub specular: f64,
    /// Weight of the shadow-tested diffuse term.
    pub lambert: f64,
    /// Weight of the constant baseline term.
    pub ambient: f64,
}

impl Material {
    /// Create a material from its specular, lambert and ambient weights.
    pub fn new(specular: f64, lambert: f64, ambient: f64) -> Self {
        Self {
            specular,
            lambert,
            ambient,
        }
    }

    /// Whether the diffuse term should be evaluated at all.
    pub fn is_diffuse(&self) -> bool {
        self.lambert > 0.0
    }

    /// Whether a reflection ray should be traced.
    pub fn is_reflective(&self) -> bool {
        self.specular > 0.0
    }

    /// Constant contribution independent of any light.
    pub fn ambient_term(&self, color: Color) -> Color {
        color * self.ambient
    }

    /// Diffuse contribution for an accumulated cosine sum over visible lights.
    pub fn diffuse_term(&self, color: Color, lambert_amount: f64) -> Color {
        color * (lambert_amount * self.lambert)
    }

    /// Contribution of a reflected ray's color.
    pub fn specular_term(&self, reflected: Color) -> Color {
        reflected * self.specular
    }
}
