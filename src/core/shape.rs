// Copyright @yucwang 2026

use crate::core::interaction::SurfaceHit;
use crate::math::ray::Ray3f;

pub trait Shape: Send + Sync {
    /// Nearest intersection inside the ray's segment, if any. The returned
    /// hit carries no material; the scene attaches it.
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceHit>;
}
