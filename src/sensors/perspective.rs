// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector2f, Vector3f, RAY_EPSILON};
use crate::math::ray::Ray3f;

/// Fixed viewport camera at the world origin: a height-2 film plane one
/// focal length down the -z axis, widened by the aspect ratio.
pub struct PerspectiveCamera {
    origin: Vector3f,
    lower_left: Vector3f,
    horizontal: Vector3f,
    vertical: Vector3f,
}

impl PerspectiveCamera {
    pub fn new(aspect_ratio: Float) -> Self {
        let viewport_height: Float = 2.0;
        let viewport_width = aspect_ratio * viewport_height;
        let focal_length: Float = 1.0;

        let origin = Vector3f::zeros();
        let horizontal = Vector3f::new(viewport_width, 0.0, 0.0);
        let vertical = Vector3f::new(0.0, viewport_height, 0.0);
        let lower_left = origin - horizontal * 0.5 - vertical * 0.5
            - Vector3f::new(0.0, 0.0, focal_length);

        Self { origin, lower_left, horizontal, vertical }
    }
}

impl Sensor for PerspectiveCamera {
    fn sample_ray(&self, uv: &Vector2f) -> Ray3f {
        let direction = self.lower_left
            + self.horizontal * uv.x
            + self.vertical * uv.y
            - self.origin;
        Ray3f::new(self.origin, direction, Some(RAY_EPSILON), None)
    }

    fn describe(&self) -> String {
        String::from("PerspectiveCamera\n  origin: Vector3f\n  lower_left: Vector3f\n  horizontal: Vector3f\n  vertical: Vector3f")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let cam = PerspectiveCamera::new(1.0);
        let ray = cam.sample_ray(&Vector2f::new(0.5, 0.5));
        let dir = ray.dir();

        assert!((dir.x - 0.0).abs() < 1e-6);
        assert!((dir.y - 0.0).abs() < 1e-6);
        assert!((dir.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_corner_ray_reaches_lower_left() {
        let cam = PerspectiveCamera::new(2.0);
        let ray = cam.sample_ray(&Vector2f::new(0.0, 0.0));
        let expected = Vector3f::new(-2.0, -1.0, -1.0).normalize();
        assert!((ray.dir() - expected).norm() < 1e-6);
    }
}
