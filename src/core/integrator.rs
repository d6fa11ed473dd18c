// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::constants::{Vector2f, Vector3f};

pub trait Integrator: Sync {
    /// Raw radiance sum over this pixel's samples. Averaging and gamma are
    /// deferred to tone mapping.
    fn sample_pixel(&self, scene: &Scene, sensor: &dyn Sensor,
                    pixel: Vector2f, resolution: Vector2f,
                    rng: &mut LcgRng) -> Vector3f;

    fn samples_per_pixel(&self) -> u32;
}
