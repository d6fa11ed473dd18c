// Copyright @yucwang 2026

use crate::core::interaction::SurfaceHit;
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

pub struct Sphere {
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl Shape for Sphere {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceHit> {
        let oc = ray.origin() - self.center;
        let a = ray.dir().norm_squared();
        let half_b = oc.dot(&ray.dir());
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();

        // Nearest root inside the ray segment; fall through to the far
        // root when the near one is clipped (ray origin inside the sphere).
        let mut root = (-half_b - sqrt_d) / a;
        if !ray.test_segment(root) {
            root = (-half_b + sqrt_d) / a;
            if !ray.test_segment(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(SurfaceHit::new(ray, p, outward_normal, root))
    }
}
