// Copyright @yucwang 2026

use super::constants::{Float, PI, Vector2f, Vector3f};

/// Map two uniform draws onto the surface of the unit sphere.
pub fn sample_uniform_sphere(u: &Vector2f) -> Vector3f {
    let z: Float = 1.0 - 2.0 * u.x;
    let r: Float = (1.0 - z * z).max(0.0).sqrt();
    let phi: Float = 2.0 * PI * u.y;

    return Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Map two uniform draws plus a radius draw into the unit ball.
pub fn sample_uniform_ball(u: &Vector2f, radius_draw: Float) -> Vector3f {
    return sample_uniform_sphere(u) * radius_draw.cbrt()
}

pub fn reflect(v: Vector3f, n: Vector3f) -> Vector3f {
    v - 2.0 * v.dot(&n) * n
}

/// Snell refraction of the unit vector `v` about `n`, with
/// `eta_ratio = eta_incident / eta_transmitted`.
pub fn refract(v: Vector3f, n: Vector3f, eta_ratio: Float) -> Vector3f {
    let cos_theta = (-v).dot(&n).min(1.0);
    let out_perpendicular = eta_ratio * (v + cos_theta * n);
    let out_parallel = -(1.0 - out_perpendicular.norm_squared()).abs().sqrt() * n;
    out_perpendicular + out_parallel
}

/// Schlick's reflectance approximation.
pub fn reflectance(cosine: Float, refraction_index: Float) -> Float {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

pub fn near_zero(v: &Vector3f) -> bool {
    let threshold: Float = 1e-8;
    v.x.abs() < threshold && v.y.abs() < threshold && v.z.abs() < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_uniform_sphere_is_unit() {
        let draws = [
            Vector2f::new(0.0, 0.0),
            Vector2f::new(0.25, 0.75),
            Vector2f::new(0.5, 0.5),
            Vector2f::new(0.99, 0.01),
        ];
        for u in &draws {
            let v = sample_uniform_sphere(u);
            assert!((v.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sample_uniform_ball_stays_inside() {
        let v = sample_uniform_ball(&Vector2f::new(0.3, 0.8), 0.5);
        assert!(v.norm() <= 1.0 + 1e-5);
    }

    #[test]
    fn test_reflect_mirror() {
        let v = Vector3f::new(1.0, -1.0, 0.0);
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let r = reflect(v, n);
        assert!((r - Vector3f::new(1.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_refract_normal_incidence_passes_through() {
        let v = Vector3f::new(0.0, 0.0, -1.0);
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let t = refract(v, n, 1.0 / 1.5);
        assert!((t - v).norm() < 1e-6);
    }

    #[test]
    fn test_reflectance_normal_incidence() {
        let r = reflectance(1.0, 1.5);
        assert!((r - 0.04).abs() < 1e-3);
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(&Vector3f::new(1e-9, -1e-9, 0.0)));
        assert!(!near_zero(&Vector3f::new(1e-3, 0.0, 0.0)));
    }
}
