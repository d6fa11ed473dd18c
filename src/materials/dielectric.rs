// Copyright @yucwang 2026

use crate::core::interaction::SurfaceHit;
use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector3f, RAY_EPSILON};
use crate::math::ray::Ray3f;
use crate::math::warp::{reflect, reflectance, refract};

use super::ScatterRecord;

/// Clear glass: refract when Snell's law allows it and a Schlick draw
/// passes, reflect otherwise. Never absorbs.
pub(super) fn scatter(refraction_index: Float, ray: &Ray3f,
                      hit: &SurfaceHit, rng: &mut LcgRng) -> Option<ScatterRecord> {
    let eta_ratio = if hit.front_face() {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = ray.dir();
    let cos_theta = (-unit_direction).dot(&hit.normal()).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

    let cannot_refract = eta_ratio * sin_theta > 1.0;
    let direction = if cannot_refract || reflectance(cos_theta, eta_ratio) > rng.next_f32() {
        reflect(unit_direction, hit.normal())
    } else {
        refract(unit_direction, hit.normal(), eta_ratio)
    };

    let scattered = Ray3f::new(hit.p(), direction, Some(RAY_EPSILON), None);
    Some(ScatterRecord {
        attenuation: Vector3f::new(1.0, 1.0, 1.0),
        scattered,
    })
}
