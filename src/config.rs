//! Scene files.
//!
//! Scenes can be described in TOML instead of being generated. Vectors and
//! colors are written as `[x, y, z]` arrays and a sphere's material
//! coefficients sit next to its geometry:
//!
//! ```toml
//! lights = [[-30.0, -10.0, 20.0]]
//!
//! [camera]
//! point = [0.0, 1.8, 10.0]
//! look_at = [0.0, 3.0, 0.0]
//! field_of_view = 45.0
//!
//! [[spheres]]
//! center = [0.0, 2.0, 0.0]
//! color = [255.0, 255.0, 255.0]
//! radius = 1.0
//! specular = 0.0
//! lambert = 0.7
//! ambient = 0.1
//! ```
//!
//! Loading checks that the scene can be rendered at all: every coordinate is
//! finite, the camera has a view direction that is not parallel to the world
//! up axis, the field of view lies in (0, 180) degrees, radii are positive,
//! material coefficients are non-negative and color channels lie in [0, 255].
//! The tracer itself assumes a well-formed scene and never validates.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::camera::WORLD_UP;
use crate::material::{Color, Material};
use crate::scene::Scene;
use crate::vector::unit_vector;

/// Upper bound of a color channel in a scene description.
const MAX_CHANNEL: f64 = 255.0;

/// Below this the view direction counts as parallel to the world up axis.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Scene file loading errors
#[derive(Debug, Error)]
pub enum SceneError {
    /// The file could not be read.
    #[error("cannot read scene file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not a valid TOML scene description.
    #[error("malformed scene description: {0}")]
    Parse(#[from] toml::de::Error),
    /// The description parsed but cannot be rendered.
    #[error("invalid scene: {0}")]
    Invalid(String),
}

impl Scene {
    /// Parse and validate a TOML scene description.
    pub fn from_toml_str(text: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(text)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Reject scenes the tracer cannot render meaningfully.
    pub fn validate(&self) -> Result<(), SceneError> {
        let camera = &self.camera;
        if !camera.point.is_finite() || !camera.look_at.is_finite() {
            let reason = "camera coordinates must be finite";
            return Err(SceneError::Invalid(reason.into()));
        }
        if camera.point == camera.look_at {
            let reason = "camera point and look_at must differ";
            return Err(SceneError::Invalid(reason.into()));
        }
        let eye_vector = unit_vector(camera.look_at - camera.point);
        if eye_vector.cross(WORLD_UP).length() < PARALLEL_EPSILON {
            return Err(SceneError::Invalid(
                "camera must not look straight along the world up axis".into(),
            ));
        }
        let fov = camera.field_of_view;
        if !fov.is_finite() || fov <= 0.0 || fov >= 180.0 {
            return Err(SceneError::Invalid(format!(
                "field of view must be between 0 and 180 degrees, got {}",
                fov
            )));
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(SceneError::Invalid(format!(
                    "sphere {} radius must be positive, got {}",
                    index, sphere.radius
                )));
            }
            if !sphere.center.is_finite() {
                return Err(SceneError::Invalid(format!(
                    "sphere {} has a non-finite center",
                    index
                )));
            }
            validate_color(index, sphere.color)?;
            validate_material(index, &sphere.material)?;
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !light.is_finite() {
                return Err(SceneError::Invalid(format!(
                    "light {} has a non-finite position",
                    index
                )));
            }
        }

        Ok(())
    }
}

fn validate_color(index: usize, color: Color) -> Result<(), SceneError> {
    let in_range = |channel: f64| (0.0..=MAX_CHANNEL).contains(&channel);
    if color.to_array().into_iter().all(in_range) {
        Ok(())
    } else {
        Err(SceneError::Invalid(format!(
            "sphere {} color channels must lie in [0, 255], got {}",
            index, color
        )))
    }
}

fn validate_material(index: usize, material: &Material) -> Result<(), SceneError> {
    let coefficients = [
        ("specular", material.specular),
        ("lambert", material.lambert),
        ("ambient", material.ambient),
    ];
    for (name, value) in coefficients {
        if !value.is_finite() || value < 0.0 {
            return Err(SceneError::Invalid(format!(
                "sphere {} {} must be non-negative, got {}",
                index, name, value
            )));
        }
    }
    Ok(())
}

/// Read a scene from a TOML file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, SceneError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let scene = Scene::from_toml_str(&text)?;
    debug!(
        "Loaded {} spheres and {} lights from {}",
        scene.spheres.len(),
        scene.lights.len(),
        path.display()
    );
    Ok(scene)
}
