//! Atom-level picking.
//!
//! Much more expensive than the hover test (one ray-sphere test per atom),
//! so the engine only runs it when atom picking is switched on and the
//! pointer is already over the structure's bounding sphere.

use glam::Mat4;

use super::ray::Ray;
use crate::bounds::{AtomPositions, CenteredBounds, Sphere};

/// The atom under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickedAtom {
    /// Index into the structure's atom array.
    pub index: usize,
    /// Distance from the ray origin to where the ray enters the atom.
    pub distance: f32,
}

/// Nearest atom hit by a world-space `ray`.
///
/// `atoms` are in the caller's original coordinates; `centered` supplies
/// the recentering offset and `world` the root's current transform, so the
/// test runs in the same frame the atoms are drawn in. Atoms use their
/// padding radius when one is attached, otherwise `default_radius`.
#[must_use]
pub fn pick_atom(
    ray: &Ray,
    world: &Mat4,
    centered: &CenteredBounds,
    atoms: &AtomPositions<'_>,
    default_radius: f32,
) -> Option<PickedAtom> {
    let local_ray = ray.transform(&world.inverse());

    let widest_pad = atoms
        .padding_radii()
        .map_or(0.0, |pads| pads.iter().copied().fold(0.0, f32::max));
    let envelope = Sphere::new(
        centered.bounds().center,
        centered.radius() + default_radius.max(widest_pad).max(0.0),
    );
    if local_ray.intersect_sphere(&envelope).is_none() {
        return None;
    }

    let mut best: Option<PickedAtom> = None;
    for (index, position) in atoms.iter().enumerate() {
        let pad = atoms.padding(index);
        let radius = if pad > 0.0 { pad } else { default_radius };
        let sphere = Sphere::new(centered.to_local(position), radius);
        let Some(distance) = local_ray.intersect_sphere(&sphere) else {
            continue;
        };
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(PickedAtom { index, distance });
        }
    }
    best
}
