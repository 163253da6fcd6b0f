use indicatif::ProgressBar;

use spheretrace::camera::{Camera, Viewport};
use spheretrace::material::{Color, Material};
use spheretrace::output::{to_rgba8, UNSET_PIXEL};
use spheretrace::random::{random_scene, scene_rng};
use spheretrace::render::{render_with_progress, Raster};
use spheretrace::scene::Scene;
use spheretrace::sphere::Sphere;
use spheretrace::tracer::BACKGROUND;
use spheretrace::vector::Vector3;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn single_sphere_scene() -> Scene {
    let camera = Camera::new(Vector3::new(0.0, 1.8, 10.0), Vector3::new(0.0, 3.0, 0.0), 45.0);
    let sphere = Sphere::new(
        Vector3::new(0.0, 2.0, 0.0),
        1.0,
        Color::splat(255.0),
        Material::new(0.0, 0.7, 0.1),
    );
    Scene::new(camera, vec![sphere], vec![Vector3::new(-30.0, -10.0, 20.0)])
}

fn render_quietly(scene: &Scene, width: u32, height: u32) -> Raster {
    render_with_progress(scene, width, height, &ProgressBar::hidden())
}

/// Pixel whose primary ray passes closest to `target`.
fn project(scene: &Scene, target: Vector3, width: u32, height: u32) -> (u32, u32) {
    let viewport = Viewport::new(&scene.camera, width, height);
    let (right, up) = viewport.basis();
    let to_target = target - scene.camera.point;
    let depth = to_target.dot(viewport.eye_vector());

    let half_width = (scene.camera.field_of_view / 2.0).to_radians().tan();
    let half_height = f64::from(height) / f64::from(width) * half_width;
    let pixel_width = 2.0 * half_width / f64::from(width - 1);
    let pixel_height = 2.0 * half_height / f64::from(height - 1);

    let x = (to_target.dot(right) / depth + half_width) / pixel_width;
    let y = (to_target.dot(up) / depth + half_height) / pixel_height;
    (x.round() as u32, y.round() as u32)
}

#[test]
fn single_sphere_is_visible_against_background() {
    let scene = single_sphere_scene();
    let raster = render_quietly(&scene, WIDTH, HEIGHT);

    let (x, y) = project(&scene, scene.spheres[0].center, WIDTH, HEIGHT);
    let center = raster.get(x, y).expect("primary rays always produce a color");
    assert_ne!(center, BACKGROUND);
    // Ambient plus a partial diffuse term stays below white
    assert!(center.max_element() < 255.0);
    assert!(center.min_element() >= 255.0 * 0.1);

    for (x, y) in [(0, 0), (WIDTH - 1, 0), (0, HEIGHT - 1), (WIDTH - 1, HEIGHT - 1)] {
        assert_eq!(raster.get(x, y), Some(BACKGROUND), "corner ({x}, {y})");
    }
    assert_eq!(raster.unset_count(), 0);
}

#[test]
fn single_sphere_png_is_upright() {
    let scene = single_sphere_scene();
    let raster = render_quietly(&scene, 80, 60);
    let image = to_rgba8(&raster, UNSET_PIXEL);

    let (x, y) = project(&scene, scene.spheres[0].center, 80, 60);
    let sphere_pixel = image.get_pixel(x, 60 - 1 - y);
    assert_ne!(sphere_pixel.0, [255, 255, 255, 255]);
    assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn facing_mirrors_render_in_bounded_time() {
    let camera = Camera::new(Vector3::new(0.0, 0.0, 10.0), Vector3::ZERO, 45.0);
    let mirror = Material::new(1.0, 0.0, 0.1);
    let color = Color::new(200.0, 220.0, 255.0);
    let scene = Scene::new(
        camera,
        vec![
            Sphere::new(Vector3::new(-1.5, 0.0, 0.0), 1.0, color, mirror),
            Sphere::new(Vector3::new(1.5, 0.0, 0.0), 1.0, color, mirror),
        ],
        vec![Vector3::new(0.0, 10.0, 10.0)],
    );

    let raster = render_quietly(&scene, 64, 48);
    assert_eq!(raster.unset_count(), 0);
    for y in 0..48 {
        for x in 0..64 {
            let pixel = raster.get(x, y).expect("set");
            assert!(pixel.is_finite());
        }
    }
}

#[test]
fn seeded_random_scene_renders_reproducibly() {
    let (mut first_rng, _) = scene_rng(Some(2024));
    let (mut second_rng, _) = scene_rng(Some(2024));
    let first = random_scene(&mut first_rng, 10);
    let second = random_scene(&mut second_rng, 10);

    let a = render_quietly(&first, 40, 30);
    let b = render_quietly(&second, 40, 30);
    assert_eq!(a, b);
    assert_eq!(a.unset_count(), 0);
}

#[test]
fn sample_scene_files_load_and_render() {
    for name in ["single_sphere.toml", "mirrors.toml"] {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes").join(name);
        let scene = spheretrace::config::load_scene(&path).expect("bundled scenes are valid");
        let raster = render_quietly(&scene, 32, 24);
        assert_eq!(raster.unset_count(), 0, "{name}");
    }
}
