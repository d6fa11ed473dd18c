// Copyright @yucwang 2026

use pingpong::core::scene::{Scene, SceneObject};
use pingpong::core::sensor::Sensor;
use pingpong::integrators::path::PathIntegrator;
use pingpong::io::ppm::PpmStreamer;
use pingpong::materials::Material;
use pingpong::math::constants::{Float, Vector3f, DEFAULT_SAMPLES_PER_PIXEL, MAX_TRACE_DEPTH};
use pingpong::renderers::renderer::Renderer;
use pingpong::renderers::scanline::ScanlineRenderer;
use pingpong::sensors::perspective::PerspectiveCamera;
use pingpong::shapes::sphere::Sphere;

use std::env;
use std::io::{self, BufWriter};
use std::process;
use std::sync::Arc;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <width> <height> [samples-per-pixel] [workers]", program);
    process::exit(1);
}

fn parse_dimension(value: Option<&String>, program: &str) -> usize {
    match value.and_then(|v| v.parse::<usize>().ok()) {
        Some(v) if v >= 2 => v,
        _ => usage(program),
    }
}

/// Four spheres: a grassy ground ball, a matte center, a polished metal
/// ball on the left, and a glass ball on the right.
fn build_scene() -> Scene {
    let material_ground = Arc::new(Material::lambertian(Vector3f::new(0.6, 0.8, 0.0)));
    let material_center = Arc::new(Material::lambertian(Vector3f::new(0.7, 0.3, 0.3)));
    let material_left = Arc::new(Material::metal(Vector3f::new(0.8, 0.8, 0.8), 0.0));
    let material_right = Arc::new(Material::dielectric(1.5));

    let mut scene = Scene::new();
    scene.add_object(SceneObject::new(
        Arc::new(Sphere::new(Vector3f::new(0.0, -100.5, -1.0), 100.0)),
        material_ground,
    ));
    scene.add_object(SceneObject::new(
        Arc::new(Sphere::new(Vector3f::new(0.0, 0.0, -1.0), 0.5)),
        material_center,
    ));
    scene.add_object(SceneObject::new(
        Arc::new(Sphere::new(Vector3f::new(-1.0, 0.0, -1.0), 0.5)),
        material_left,
    ));
    scene.add_object(SceneObject::new(
        Arc::new(Sphere::new(Vector3f::new(1.0, 0.0, -1.0), 0.5)),
        material_right,
    ));

    scene
}

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        usage(&args[0]);
    }

    let width = parse_dimension(args.get(1), &args[0]);
    let height = parse_dimension(args.get(2), &args[0]);
    let samples = args.get(3)
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_SAMPLES_PER_PIXEL);
    let workers = args.get(4)
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(1);

    let scene = build_scene();
    let aspect_ratio = width as Float / height as Float;
    let camera = PerspectiveCamera::new(aspect_ratio);
    log::debug!("{}", camera.describe());
    log::info!("rendering {}x{}, {} objects, {} samples per pixel, {} workers",
               width, height, scene.objects().len(), samples, workers);

    let integrator = Box::new(PathIntegrator::new(MAX_TRACE_DEPTH, samples));
    let renderer = ScanlineRenderer::new(integrator, workers, 0);

    let streamer = PpmStreamer::new(BufWriter::new(io::stdout()));
    if let Err(err) = streamer.write_header(width, height) {
        log::error!("failed to write the stream header: {}", err);
        process::exit(1);
    }

    if let Err(err) = renderer.render(&scene, &camera, (width, height), &streamer) {
        log::error!("render aborted: {}", err);
        process::exit(1);
    }
}
