//! Pixel loop: one primary ray per pixel, traced in parallel by row.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::camera::Viewport;
use crate::material::Color;
use crate::scene::Scene;
use crate::tracer::trace;

/// Grid of traced colors, row-major with row `y` in camera orientation
/// (row 0 is the bottom of the image plane).
///
/// A `None` cell is a pixel whose primary ray produced no color.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Option<Color>>,
}

impl Raster {
    /// Raster of the given size with every pixel unset.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`, `None` if the pixel was left unset.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels[self.index(x, y)]
    }

    /// Store a color at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, color: Option<Color>) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Number of pixels that hold no color.
    pub fn unset_count(&self) -> usize {
        self.pixels.iter().filter(|pixel| pixel.is_none()).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

/// Render `scene` into a `width` x `height` raster.
///
/// Both dimensions should be at least 2; the image plane spacing divides by
/// `dimension - 1`.
pub fn render(scene: &Scene, width: u32, height: u32) -> Raster {
    let progress =
        ProgressBar::with_draw_target(Some(u64::from(height)), ProgressDrawTarget::stderr());
    let template = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}");
    if let Ok(style) = template {
        progress.set_style(style);
    }

    let raster = render_with_progress(scene, width, height, &progress);
    progress.finish_and_clear();
    raster
}

/// Render `scene`, advancing `progress` by one per finished row.
pub fn render_with_progress(
    scene: &Scene,
    width: u32,
    height: u32,
    progress: &ProgressBar,
) -> Raster {
    let viewport = Viewport::new(&scene.camera, width, height);
    let mut raster = Raster::new(width, height);

    info!(
        "Tracing {}x{} pixels, {} spheres, {} lights on {} threads",
        width,
        height,
        scene.spheres.len(),
        scene.lights.len(),
        rayon::current_num_threads()
    );
    let generation_start = std::time::Instant::now();

    // Each worker owns a whole row of the raster
    raster
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = viewport.ray_for_pixel(x as u32, y);
                *pixel = trace(scene, &ray, 0).color();
            }
            progress.inc(1);
        });

    let unset = raster.unset_count();
    if unset > 0 {
        debug!("{} pixels produced no color", unset);
    }
    info!("Image generated in {:.2?}", generation_start.elapsed());

    raster
}
