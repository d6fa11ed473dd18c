// Copyright @yucwang 2026

use crate::core::interaction::SurfaceHit;
use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector3f, RAY_EPSILON};
use crate::math::ray::Ray3f;
use crate::math::warp::{reflect, sample_uniform_ball};

use super::ScatterRecord;

/// Mirror reflection, roughened by a fuzz sphere. Scatters that end up
/// below the surface horizon are absorbed.
pub(super) fn scatter(albedo: Vector3f, fuzz: Float, ray: &Ray3f,
                      hit: &SurfaceHit, rng: &mut LcgRng) -> Option<ScatterRecord> {
    let reflected = reflect(ray.dir(), hit.normal());
    let jitter = sample_uniform_ball(&rng.next_2d(), rng.next_f32());
    let direction = reflected + fuzz * jitter;
    if direction.dot(&hit.normal()) <= 0.0 {
        return None;
    }

    let scattered = Ray3f::new(hit.p(), direction, Some(RAY_EPSILON), None);
    Some(ScatterRecord { attenuation: albedo, scattered })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polished_metal_mirrors_exactly() {
        let incoming = Ray3f::new(Vector3f::zeros(), Vector3f::new(1.0, -1.0, 0.0), None, None);
        let hit = SurfaceHit::new(&incoming, Vector3f::new(1.0, -1.0, 0.0),
                                  Vector3f::new(0.0, 1.0, 0.0), 1.0);
        let mut rng = LcgRng::new(3);

        // fuzz 0 ignores the jitter draw entirely.
        let record = scatter(Vector3f::new(0.8, 0.8, 0.8), 0.0, &incoming, &hit, &mut rng).unwrap();
        let expected = Vector3f::new(1.0, 1.0, 0.0).normalize();
        assert!((record.scattered.dir() - expected).norm() < 1e-6);
    }

    #[test]
    fn test_grazing_reflection_is_absorbed() {
        // A ray sliding along the surface reflects onto the horizon, which
        // counts as below it.
        let incoming = Ray3f::new(Vector3f::zeros(), Vector3f::new(1.0, 0.0, 0.0), None, None);
        let hit = SurfaceHit::new(&incoming, Vector3f::new(1.0, 0.0, 0.0),
                                  Vector3f::new(0.0, 1.0, 0.0), 1.0);
        let mut rng = LcgRng::new(3);

        let record = scatter(Vector3f::new(0.8, 0.8, 0.8), 0.0, &incoming, &hit, &mut rng);
        assert!(record.is_none());
    }
}
