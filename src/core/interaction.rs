// Copyright @yucwang 2026

use crate::materials::Material;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// Transient record of a ray/surface intersection. Produced by shapes,
/// consumed by the integrator within the same trace step.
pub struct SurfaceHit {
    p: Vector3f,
    normal: Vector3f,
    t: Float,
    front_face: bool,
    material: Option<Arc<Material>>,
}

impl SurfaceHit {
    /// Record a hit, orienting the stored normal against the incoming ray.
    pub fn new(ray: &Ray3f, p: Vector3f, outward_normal: Vector3f, t: Float) -> Self {
        let front_face = ray.dir().dot(&outward_normal) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };
        Self { p, normal, t, front_face, material: None }
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn front_face(&self) -> bool {
        self.front_face
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_deref()
    }

    pub fn with_material(mut self, material: Arc<Material>) -> Self {
        self.material = Some(material);
        self
    }
}
