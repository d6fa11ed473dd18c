// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::ray::Ray3f;

/// Environment contribution for a ray that escapes the scene: a vertical
/// white to sky-blue gradient over the unit direction.
pub fn sky_gradient(direction: &Vector3f) -> Vector3f {
    let t = 0.5 * (direction.y + 1.0);
    (1.0 - t) * Vector3f::new(1.0, 1.0, 1.0) + t * Vector3f::new(0.5, 0.7, 1.0)
}

pub struct PathIntegrator {
    pub max_depth: u32,
    pub samples_per_pixel: u32,
}

impl PathIntegrator {
    pub fn new(max_depth: u32, samples_per_pixel: u32) -> Self {
        Self { max_depth, samples_per_pixel }
    }

    fn trace(&self, scene: &Scene, ray: &Ray3f, depth: u32, rng: &mut LcgRng) -> Vector3f {
        // Absorption floor: degenerate geometry cannot recurse forever.
        if depth == 0 {
            return Vector3f::zeros();
        }

        let hit = match scene.ray_intersection(ray) {
            Some(hit) => hit,
            None => return sky_gradient(&ray.dir()),
        };

        let material = match hit.material() {
            Some(material) => material,
            None => return Vector3f::zeros(),
        };

        match material.scatter(ray, &hit, rng) {
            Some(scatter) => {
                let incoming = self.trace(scene, &scatter.scattered, depth - 1, rng);
                scatter.attenuation.component_mul(&incoming)
            }
            None => Vector3f::zeros(),
        }
    }
}

impl Integrator for PathIntegrator {
    fn sample_pixel(&self, scene: &Scene, sensor: &dyn Sensor,
                    pixel: Vector2f, resolution: Vector2f,
                    rng: &mut LcgRng) -> Vector3f {
        let spp = if self.samples_per_pixel == 0 { 1 } else { self.samples_per_pixel };

        let mut color = Vector3f::zeros();
        for _ in 0..spp {
            let jitter = rng.next_2d();
            let u = (pixel.x + jitter.x) / (resolution.x - 1.0);
            let v = (pixel.y + jitter.y) / (resolution.y - 1.0);
            let ray = sensor.sample_ray(&Vector2f::new(u, v));
            color += self.trace(scene, &ray, self.max_depth, rng);
        }

        color
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }
}
