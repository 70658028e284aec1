//! Bounding volumes for atom coordinate sets.
//!
//! [`compute_bounds`] turns a flat `[x, y, z, x, y, z, ...]` coordinate
//! array into a [`Bounds`]: an exact axis-aligned box plus a near-minimal
//! bounding sphere, both from a single linear pass. [`CenteredBounds`] is the
//! same volume re-expressed in the frame where the sphere center sits at the
//! origin, which is the frame every consumer sees after camera fitting.

mod ritter;

use glam::{Mat4, Vec3};
pub use ritter::{compute_bounds, compute_bounds_with_stats, ScanStats};

use crate::error::MolframeError;

/// Axis-aligned box and bounding sphere of one structure.
///
/// Every input position lies within `radius` of `center` and inside
/// `[min, max]` componentwise. Built fresh per structure load and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Componentwise minimum corner of the box.
    pub min: Vec3,
    /// Componentwise maximum corner of the box.
    pub max: Vec3,
    /// Bounding sphere center.
    pub center: Vec3,
    /// Bounding sphere radius (never negative).
    pub radius: f32,
}

impl Bounds {
    /// The zero-atom bounds: degenerate box and zero-radius sphere at the
    /// origin.
    pub const EMPTY: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
        center: Vec3::ZERO,
        radius: 0.0,
    };

    /// Box extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// The bounding sphere as a standalone value.
    #[must_use]
    pub fn sphere(&self) -> Sphere {
        Sphere::new(self.center, self.radius)
    }

    /// Whether `point` lies inside both the box and the sphere, allowing
    /// `tolerance` of slack for floating-point error.
    #[must_use]
    pub fn contains(&self, point: Vec3, tolerance: f32) -> bool {
        let in_box = point.cmpge(self.min - Vec3::splat(tolerance)).all()
            && point.cmple(self.max + Vec3::splat(tolerance)).all();
        in_box && self.sphere().contains_point(point, tolerance)
    }

    /// Same volume shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
            center: self.center + offset,
            radius: self.radius,
        }
    }
}

/// [`Bounds`] expressed in the recentered frame: the sphere center is the
/// origin and the box is shifted by the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CenteredBounds {
    bounds: Bounds,
    offset: Vec3,
}

impl CenteredBounds {
    /// Recenter `bounds` so its sphere center lands on the origin.
    #[must_use]
    pub fn from_bounds(bounds: &Bounds) -> Self {
        let offset = -bounds.center;
        let mut centered = bounds.translated(offset);
        centered.center = Vec3::ZERO;
        Self {
            bounds: centered,
            offset,
        }
    }

    /// The recentered bounds (`center` is always the origin).
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Translation that was applied to the structure's children (`-c` of
    /// the original bounds).
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Box minimum in the recentered frame.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.bounds.min
    }

    /// Box maximum in the recentered frame.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.bounds.max
    }

    /// Sphere radius, unchanged by recentering.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.bounds.radius
    }

    /// Origin-centered bounding sphere in the root's local frame.
    #[must_use]
    pub fn sphere(&self) -> Sphere {
        self.bounds.sphere()
    }

    /// Map a position from the caller's original coordinates into the
    /// recentered frame.
    #[must_use]
    pub fn to_local(&self, position: Vec3) -> Vec3 {
        position + self.offset
    }
}

/// A sphere in some frame of reference.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sphere {
    /// Center point.
    pub center: Vec3,
    /// Radius.
    pub radius: f32,
}

impl Sphere {
    /// Create a sphere; negative radii are clamped to zero.
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Transform the sphere by an affine matrix. The radius grows by the
    /// largest axis scale so the result still encloses the transformed
    /// contents.
    #[must_use]
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let scale = matrix
            .x_axis
            .truncate()
            .length()
            .max(matrix.y_axis.truncate().length())
            .max(matrix.z_axis.truncate().length());
        Self {
            center: matrix.transform_point3(self.center),
            radius: self.radius * scale,
        }
    }

    /// Whether `point` is within `radius + tolerance` of the center.
    #[must_use]
    pub fn contains_point(&self, point: Vec3, tolerance: f32) -> bool {
        let reach = self.radius + tolerance;
        point.distance_squared(self.center) <= reach * reach
    }
}

/// Validated view over a flat atom coordinate array, with optional per-atom
/// padding radii (for example van der Waals radii).
#[derive(Debug, Clone, Copy)]
pub struct AtomPositions<'a> {
    coords: &'a [f32],
    padding: Option<&'a [f32]>,
}

impl<'a> AtomPositions<'a> {
    /// Wrap a flat `[x, y, z, ...]` array in scene units.
    ///
    /// # Errors
    ///
    /// [`MolframeError::MalformedPositions`] if the length is not a multiple
    /// of 3.
    pub fn from_flat(coords: &'a [f32]) -> Result<Self, MolframeError> {
        if coords.len() % 3 != 0 {
            return Err(MolframeError::MalformedPositions { len: coords.len() });
        }
        Ok(Self {
            coords,
            padding: None,
        })
    }

    /// Attach per-atom padding radii, one entry per atom.
    ///
    /// # Errors
    ///
    /// [`MolframeError::PaddingLength`] if `padding` is not parallel to the
    /// atom count.
    pub fn with_padding(
        self,
        padding: &'a [f32],
    ) -> Result<Self, MolframeError> {
        if padding.len() != self.len() {
            return Err(MolframeError::PaddingLength {
                atoms: self.len(),
                padding: padding.len(),
            });
        }
        Ok(Self {
            padding: Some(padding),
            ..self
        })
    }

    /// Number of atoms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len() / 3
    }

    /// Whether there are no atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Position of atom `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        let start = index.checked_mul(3)?;
        self.coords.get(start..start + 3).map(Vec3::from_slice)
    }

    /// Padding radius of atom `index` (zero when no padding was attached).
    #[must_use]
    pub fn padding(&self, index: usize) -> f32 {
        self.padding
            .and_then(|p| p.get(index))
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterate atom positions in order.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + 'a {
        self.coords.chunks_exact(3).map(Vec3::from_slice)
    }

    /// Underlying flat coordinate array.
    #[must_use]
    pub fn coords(&self) -> &'a [f32] {
        self.coords
    }

    /// Underlying padding array, if any.
    #[must_use]
    pub fn padding_radii(&self) -> Option<&'a [f32]> {
        self.padding
    }

    /// Compute the bounding volumes of these atoms.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        compute_bounds(self.coords, self.padding)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn rejects_partial_triples() {
        let coords = [1.0, 2.0, 3.0, 4.0];
        assert!(matches!(
            AtomPositions::from_flat(&coords),
            Err(MolframeError::MalformedPositions { len: 4 })
        ));
    }

    #[test]
    fn rejects_non_parallel_padding() {
        let coords = [0.0; 6];
        let positions = AtomPositions::from_flat(&coords).unwrap();
        assert!(matches!(
            positions.with_padding(&[1.0]),
            Err(MolframeError::PaddingLength {
                atoms: 2,
                padding: 1
            })
        ));
    }

    #[test]
    fn positions_index_and_iterate() {
        let coords = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let positions = AtomPositions::from_flat(&coords)
            .unwrap()
            .with_padding(&[0.5, 1.5])
            .unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions.get(1), Some(Vec3::new(4.0, 5.0, 6.0)));
        assert_eq!(positions.get(2), None);
        assert_eq!(positions.padding(1), 1.5);
        assert_eq!(positions.iter().count(), 2);
    }

    #[test]
    fn centered_bounds_move_center_to_origin() {
        let bounds = Bounds {
            min: Vec3::new(0.0, 0.0, 0.0),
            max: Vec3::new(10.0, 10.0, 0.0),
            center: Vec3::new(5.0, 5.0, 0.0),
            radius: 7.5,
        };
        let centered = CenteredBounds::from_bounds(&bounds);
        assert_eq!(centered.bounds().center, Vec3::ZERO);
        assert_eq!(centered.min(), Vec3::new(-5.0, -5.0, 0.0));
        assert_eq!(centered.max(), Vec3::new(5.0, 5.0, 0.0));
        assert_eq!(centered.radius(), 7.5);
        assert_eq!(centered.offset(), Vec3::new(-5.0, -5.0, 0.0));
        assert_eq!(centered.to_local(bounds.center), Vec3::ZERO);
    }

    #[test]
    fn sphere_follows_rotation() {
        let sphere = Sphere::new(Vec3::new(10.0, 0.0, 0.0), 2.0);
        let rotated = sphere.transformed(&Mat4::from_rotation_y(FRAC_PI_2));
        assert!((rotated.center - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-4);
        assert!((rotated.radius - 2.0).abs() < 1e-6);
    }

    #[test]
    fn sphere_grows_with_scale() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let scaled =
            sphere.transformed(&Mat4::from_scale(Vec3::new(1.0, 3.0, 2.0)));
        assert!((scaled.radius - 3.0).abs() < 1e-6);
    }
}
