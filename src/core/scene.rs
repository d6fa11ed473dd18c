// Copyright @yucwang 2026

use crate::core::interaction::SurfaceHit;
use crate::core::shape::Shape;
use crate::materials::Material;
use crate::math::ray::Ray3f;
use std::sync::Arc;

pub struct SceneObject {
    pub shape: Arc<dyn Shape>,
    pub material: Arc<Material>,
}

impl SceneObject {
    pub fn new(shape: Arc<dyn Shape>, material: Arc<Material>) -> Self {
        Self { shape, material }
    }
}

/// Immutable once built; shared read-only across all worker threads for
/// the lifetime of a render.
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    pub fn with_objects(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &Vec<SceneObject> {
        &self.objects
    }

    /// Closest hit along the ray segment, with the winning object's
    /// material attached.
    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceHit> {
        let mut closest: Option<SurfaceHit> = None;
        for object in &self.objects {
            if let Some(hit) = object.shape.ray_intersection(ray) {
                let nearer = match &closest {
                    Some(best) => hit.t() < best.t(),
                    None => true,
                };
                if nearer {
                    closest = Some(hit.with_material(object.material.clone()));
                }
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector3f;
    use crate::shapes::sphere::Sphere;

    fn sphere_at(z: f32, albedo: Vector3f) -> SceneObject {
        SceneObject::new(
            Arc::new(Sphere::new(Vector3f::new(0.0, 0.0, z), 0.5)),
            Arc::new(Material::lambertian(albedo)),
        )
    }

    #[test]
    fn test_closest_object_wins() {
        let near_albedo = Vector3f::new(0.9, 0.0, 0.0);
        let scene = Scene::with_objects(vec![
            sphere_at(-5.0, Vector3f::new(0.0, 0.9, 0.0)),
            sphere_at(-2.0, near_albedo),
        ]);

        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let hit = scene.ray_intersection(&ray).unwrap();
        assert!((hit.t() - 1.5).abs() < 1e-4);

        match hit.material().unwrap() {
            Material::Lambertian { albedo } => {
                assert!((albedo - near_albedo).norm() < 1e-6);
            }
            _ => panic!("unexpected material variant"),
        }
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), None, None);
        assert!(scene.ray_intersection(&ray).is_none());
    }
}
