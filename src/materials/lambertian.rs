// Copyright @yucwang 2026

use crate::core::interaction::SurfaceHit;
use crate::core::rng::LcgRng;
use crate::math::constants::{Vector3f, RAY_EPSILON};
use crate::math::ray::Ray3f;
use crate::math::warp::{near_zero, sample_uniform_sphere};

use super::ScatterRecord;

/// Diffuse bounce: the scatter direction is the surface normal plus a
/// uniform unit vector, which weights directions by the cosine law.
pub(super) fn scatter(albedo: Vector3f, hit: &SurfaceHit,
                      rng: &mut LcgRng) -> Option<ScatterRecord> {
    let mut direction = hit.normal() + sample_uniform_sphere(&rng.next_2d());
    if near_zero(&direction) {
        // Unit vector opposite the normal; fall back to the normal itself.
        direction = hit.normal();
    }

    let scattered = Ray3f::new(hit.p(), direction, Some(RAY_EPSILON), None);
    Some(ScatterRecord { attenuation: albedo, scattered })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::ray::Ray3f;

    #[test]
    fn test_scatter_leaves_the_surface() {
        let incoming = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let hit = SurfaceHit::new(&incoming, Vector3f::new(0.0, 0.0, -2.0),
                                  Vector3f::new(0.0, 0.0, 1.0), 2.0);
        let albedo = Vector3f::new(0.7, 0.3, 0.3);

        for seed in 0..64 {
            let mut rng = LcgRng::new(seed);
            let record = scatter(albedo, &hit, &mut rng).unwrap();
            assert!((record.attenuation - albedo).norm() < 1e-6);
            assert!((record.scattered.origin() - hit.p()).norm() < 1e-6);
            // normal + unit vector never points into the surface.
            assert!(record.scattered.dir().dot(&hit.normal()) >= -1e-6);
            assert!((record.scattered.min_t - RAY_EPSILON).abs() < 1e-9);
        }
    }
}
