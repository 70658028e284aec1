use glam::{Mat4, Vec2, Vec3};

use crate::bounds::Sphere;
use crate::camera::Camera;

/// A ray in 3D space, defined by an origin point and a direction vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction.
    /// The direction will be normalized automatically.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from the camera eye through a pointer position in normalized
    /// device coordinates (`x`, `y` in `[-1, 1]`, `y` up).
    #[must_use]
    pub fn from_ndc(camera: &Camera, ndc: Vec2) -> Self {
        let inv = camera.build_matrix().inverse();
        // [0,1] depth range: 0 is the near plane, 1 the far plane
        let near = inv.project_point3(ndc.extend(0.0));
        let far = inv.project_point3(ndc.extend(1.0));
        Self::new(camera.eye, far - near)
    }

    /// Returns a point along the ray at parameter t.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Transforms the ray by the given 4x4 transformation matrix.
    #[must_use]
    pub fn transform(&self, matrix: &Mat4) -> Self {
        Self::new(
            matrix.transform_point3(self.origin),
            matrix.transform_vector3(self.direction),
        )
    }

    /// Distance along the ray to where it enters `sphere`, or `0.0` if the
    /// origin is already inside. `None` on a miss or when the sphere is
    /// entirely behind the origin.
    #[must_use]
    pub fn intersect_sphere(&self, sphere: &Sphere) -> Option<f32> {
        let oc = self.origin - sphere.center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - sphere.radius * sphere.radius;
        if c > 0.0 && b > 0.0 {
            return None;
        }
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        Some((-b - discriminant.sqrt()).max(0.0))
    }
}
