//! Camera description and primary ray generation.

use serde::{Deserialize, Serialize};

use crate::ray::Ray;
use crate::vector::{add3, unit_vector, Vector3};

/// World up direction used to build the view basis.
///
/// A camera looking exactly along this axis has no defined right vector.
pub const WORLD_UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);

/// Pinhole camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye position in world space.
    pub point: Vector3,
    /// Point the camera is looking at (a position, not a direction).
    ///
    /// Must differ from `point`.
    pub look_at: Vector3,
    /// Field of view in degrees.
    pub field_of_view: f64,
}

impl Camera {
    /// Create a camera at `point` looking towards `look_at`.
    pub fn new(point: Vector3, look_at: Vector3, field_of_view: f64) -> Self {
        Self {
            point,
            look_at,
            field_of_view,
        }
    }
}

/// Image plane of a camera sized for a particular raster.
///
/// Holds the view basis and pixel spacing so that [`Viewport::ray_for_pixel`]
/// is a handful of multiply-adds. Pixel `(0, 0)` sits at `-half_width` along
/// `vp_right` and `-half_height` along `vp_up`, so `y` grows upwards.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Ray origin shared by every primary ray.
    origin: Vector3,
    /// Unit forward direction.
    eye_vector: Vector3,
    /// Unit direction of increasing `x`.
    vp_right: Vector3,
    /// Unit direction of increasing `y`.
    vp_up: Vector3,
    half_width: f64,
    half_height: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl Viewport {
    /// Derive the image plane for a `width` x `height` raster.
    ///
    /// The field of view is halved and its tangent gives the half width of
    /// the plane at unit distance. The half height is the half width scaled
    /// by `height / width`. Rasters narrower or shorter than two pixels give
    /// non-finite pixel spacing.
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        let width = f64::from(width);
        let height = f64::from(height);

        let eye_vector = unit_vector(camera.look_at - camera.point);
        let vp_right = unit_vector(eye_vector.cross(WORLD_UP));
        let vp_up = unit_vector(vp_right.cross(eye_vector));

        let fov_radians = std::f64::consts::PI * (camera.field_of_view / 2.0) / 180.0;
        let half_width = fov_radians.tan();
        let half_height = (height / width) * half_width;

        let camera_width = half_width * 2.0;
        let camera_height = half_height * 2.0;

        Self {
            origin: camera.point,
            eye_vector,
            vp_right,
            vp_up,
            half_width,
            half_height,
            pixel_width: camera_width / (width - 1.0),
            pixel_height: camera_height / (height - 1.0),
        }
    }

    /// Primary ray through pixel `(x, y)`.
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let x_comp = self.vp_right * (f64::from(x) * self.pixel_width - self.half_width);
        let y_comp = self.vp_up * (f64::from(y) * self.pixel_height - self.half_height);

        Ray::new(self.origin, unit_vector(add3(self.eye_vector, x_comp, y_comp)))
    }

    /// Unit forward direction of the camera.
    pub fn eye_vector(&self) -> Vector3 {
        self.eye_vector
    }

    /// Unit right and up directions of the image plane.
    pub fn basis(&self) -> (Vector3, Vector3) {
        (self.vp_right, self.vp_up)
    }
}
