//! Debug wireframe of the live bounding sphere.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};

use crate::bounds::Sphere;

/// Line-list vertices (pairs) for three great circles of `local`, carried
/// through `world` so the wireframe spins with the structure.
#[must_use]
pub fn sphere_wireframe(local: &Sphere, world: &Mat4, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    let sphere = local.transformed(world);
    let axes = [
        (world.transform_vector3(Vec3::X), world.transform_vector3(Vec3::Y)),
        (world.transform_vector3(Vec3::Y), world.transform_vector3(Vec3::Z)),
        (world.transform_vector3(Vec3::Z), world.transform_vector3(Vec3::X)),
    ];

    let mut lines = Vec::with_capacity(axes.len() * segments as usize * 2);
    for (u, v) in axes {
        let (u, v) = (u.normalize_or_zero(), v.normalize_or_zero());
        let point = |i: u32| {
            let theta = TAU * i as f32 / segments as f32;
            sphere.center + (u * theta.cos() + v * theta.sin()) * sphere.radius
        };
        for i in 0..segments {
            lines.push(point(i));
            lines.push(point(i + 1));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_lie_on_the_world_sphere() {
        let local = Sphere::new(Vec3::new(3.0, 0.0, 0.0), 2.0);
        let world = Mat4::from_rotation_y(0.7);
        let lines = sphere_wireframe(&local, &world, 24);

        assert_eq!(lines.len(), 3 * 24 * 2);
        let center = world.transform_point3(local.center);
        for p in &lines {
            assert!((p.distance(center) - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn segment_count_has_a_floor() {
        let lines = sphere_wireframe(&Sphere::new(Vec3::ZERO, 1.0), &Mat4::IDENTITY, 0);
        assert_eq!(lines.len(), 3 * 3 * 2);
    }
}
