// Copyright @yucwang 2026

use crate::math::constants::Vector2f;
use crate::math::ray::Ray3f;

pub trait Sensor: Sync {
    /// Primary ray for a film-plane coordinate `(u, v)` in [0, 1]^2.
    fn sample_ray(&self, uv: &Vector2f) -> Ray3f;

    fn describe(&self) -> String {
        String::from("Sensor")
    }
}
