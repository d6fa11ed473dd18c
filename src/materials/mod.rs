// Copyright @yucwang 2026

pub mod dielectric;
pub mod lambertian;
pub mod metal;

use crate::core::interaction::SurfaceHit;
use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

/// Attenuation and continuation ray produced by a scatter event.
pub struct ScatterRecord {
    pub attenuation: Vector3f,
    pub scattered: Ray3f,
}

/// Closed set of surface responses; dispatch is a single match so the
/// variants stay enumerable.
pub enum Material {
    Lambertian { albedo: Vector3f },
    Metal { albedo: Vector3f, fuzz: Float },
    Dielectric { refraction_index: Float },
}

impl Material {
    pub fn lambertian(albedo: Vector3f) -> Self {
        Material::Lambertian { albedo }
    }

    pub fn metal(albedo: Vector3f, fuzz: Float) -> Self {
        Material::Metal { albedo, fuzz: fuzz.min(1.0) }
    }

    pub fn dielectric(refraction_index: Float) -> Self {
        Material::Dielectric { refraction_index }
    }

    /// `None` means the path is absorbed.
    pub fn scatter(&self, ray: &Ray3f, hit: &SurfaceHit,
                   rng: &mut LcgRng) -> Option<ScatterRecord> {
        match self {
            Material::Lambertian { albedo } =>
                lambertian::scatter(*albedo, hit, rng),
            Material::Metal { albedo, fuzz } =>
                metal::scatter(*albedo, *fuzz, ray, hit, rng),
            Material::Dielectric { refraction_index } =>
                dielectric::scatter(*refraction_index, ray, hit, rng),
        }
    }
}
