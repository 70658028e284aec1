//! Ritter-style bounding sphere with an exact AABB, in three linear scans.
//!
//! 1. From atom 0, find the farthest atom `q`.
//! 2. From `q`, find the farthest atom `s`.
//! 3. Seed the sphere on segment `q..s`, then sweep every atom once, growing
//!    the box and pulling the sphere outward whenever an atom (plus its
//!    padding) falls outside it.
//!
//! The result encloses every atom but is not the provably minimal sphere;
//! in practice it lands within a few percent of it, which is plenty for
//! camera framing.

use glam::Vec3;

use super::Bounds;

/// Below this separation an atom is treated as sitting on the sphere center.
const COINCIDENT_EPSILON: f32 = 1e-12;

/// Scan instrumentation: how many full passes were made over the atoms and
/// how many atom visits they added up to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Number of complete passes over the coordinate array.
    pub passes: u32,
    /// Total atoms visited across all passes.
    pub visited: usize,
}

/// Compute the AABB and bounding sphere of a flat `[x, y, z, ...]` array.
///
/// `per_atom_padding`, when given, is parallel to the atom count and widens
/// each atom's contribution to the sphere (the box stays exact over raw
/// positions). Zero atoms yield [`Bounds::EMPTY`]; a single atom yields a
/// sphere of its padding radius centered exactly on it.
#[must_use]
pub fn compute_bounds(
    positions: &[f32],
    per_atom_padding: Option<&[f32]>,
) -> Bounds {
    compute_bounds_with_stats(positions, per_atom_padding).0
}

/// [`compute_bounds`] that also reports how much scanning it did.
#[must_use]
pub fn compute_bounds_with_stats(
    positions: &[f32],
    per_atom_padding: Option<&[f32]>,
) -> (Bounds, ScanStats) {
    let mut stats = ScanStats::default();

    let trailing = positions.len() % 3;
    if trailing != 0 {
        log::warn!(
            "ignoring {trailing} trailing coordinate(s) of a {}-value \
             position array",
            positions.len()
        );
    }

    let Some(first) = atoms(positions).next() else {
        return (Bounds::EMPTY, stats);
    };

    let q = farthest_from(first, positions, &mut stats);
    let s = farthest_from(q, positions, &mut stats);

    let mut center = (q + s) * 0.5;
    let mut radius = q.distance(s) * 0.5;
    let mut min = first;
    let mut max = first;

    for (i, p) in atoms(positions).enumerate() {
        min = min.min(p);
        max = max.max(p);

        let pad = per_atom_padding
            .and_then(|pads| pads.get(i))
            .copied()
            .unwrap_or(0.0)
            .max(0.0);

        let offset = p - center;
        let dist_sq = offset.length_squared();
        let reach = radius - pad;
        if reach >= 0.0 && dist_sq <= reach * reach {
            continue;
        }

        let dist = dist_sq.sqrt();
        if pad >= radius + dist {
            // The padded atom swallows the whole running sphere.
            center = p;
            radius = pad;
            continue;
        }
        if dist <= COINCIDENT_EPSILON {
            continue;
        }

        let grown = (radius + dist + pad) * 0.5;
        center += offset * ((grown - radius) / dist);
        radius = grown;
    }
    stats.passes += 1;
    stats.visited += positions.len() / 3;

    (
        Bounds {
            min,
            max,
            center,
            radius,
        },
        stats,
    )
}

fn atoms(positions: &[f32]) -> impl Iterator<Item = Vec3> + '_ {
    positions.chunks_exact(3).map(Vec3::from_slice)
}

/// Farthest atom from `from` by squared distance (first one wins ties).
fn farthest_from(from: Vec3, positions: &[f32], stats: &mut ScanStats) -> Vec3 {
    let mut best = from;
    let mut best_dist_sq = 0.0_f32;
    for p in atoms(positions) {
        let d = p.distance_squared(from);
        if d > best_dist_sq {
            best_dist_sq = d;
            best = p;
        }
    }
    stats.passes += 1;
    stats.visited += positions.len() / 3;
    best
}

#[cfg(test)]
mod tests {
    use std::f32::consts::SQRT_2;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn random_cube(rng: &mut StdRng, count: usize, half: f32) -> Vec<f32> {
        (0..count * 3).map(|_| rng.random_range(-half..half)).collect()
    }

    fn random_ball(rng: &mut StdRng, count: usize, radius: f32) -> Vec<f32> {
        let mut out = Vec::with_capacity(count * 3);
        while out.len() < count * 3 {
            let p = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            if p.length_squared() <= 1.0 {
                out.extend_from_slice(&(p * radius).to_array());
            }
        }
        out
    }

    /// Half the largest pairwise distance: a lower bound on the minimum
    /// enclosing sphere radius.
    fn half_diameter(positions: &[f32]) -> f32 {
        let points: Vec<Vec3> = atoms(positions).collect();
        let mut best = 0.0_f32;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                best = best.max(a.distance_squared(*b));
            }
        }
        best.sqrt() * 0.5
    }

    fn assert_contains_all(bounds: &Bounds, positions: &[f32]) {
        let tolerance = bounds.radius * 1e-4 + 1e-4;
        for p in atoms(positions) {
            assert!(
                bounds.contains(p, tolerance),
                "{p} escapes {bounds:?}"
            );
        }
    }

    #[test]
    fn empty_input_is_degenerate_not_an_error() {
        let bounds = compute_bounds(&[], None);
        assert_eq!(bounds, Bounds::EMPTY);
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::ZERO);
        assert_eq!(bounds.center, Vec3::ZERO);
        assert_eq!(bounds.radius, 0.0);
    }

    #[test]
    fn single_atom_is_a_point_sphere() {
        let bounds = compute_bounds(&[3.5, -2.0, 7.25], None);
        assert_eq!(bounds.center, Vec3::new(3.5, -2.0, 7.25));
        assert_eq!(bounds.radius, 0.0);
        assert_eq!(bounds.min, bounds.center);
        assert_eq!(bounds.max, bounds.center);
    }

    #[test]
    fn single_padded_atom_uses_its_padding() {
        let bounds = compute_bounds(&[1.0, 1.0, 1.0], Some(&[2.0]));
        assert_eq!(bounds.center, Vec3::ONE);
        assert_eq!(bounds.radius, 2.0);
    }

    #[test]
    fn right_triangle_scenario() {
        let positions = [0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 10.0, 0.0];
        let bounds = compute_bounds(&positions, None);

        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::new(10.0, 10.0, 0.0));
        assert!((bounds.center - Vec3::new(5.0, 5.0, 0.0)).length() < 1e-3);

        let corner = 5.0 * SQRT_2;
        assert!(bounds.radius >= corner - 1e-4);
        assert!(bounds.radius <= 1.5 * corner);
        assert_contains_all(&bounds, &positions);
    }

    #[test]
    fn trailing_partial_triple_is_ignored() {
        let positions = [1.0, 2.0, 3.0, 99.0];
        let bounds = compute_bounds(&positions, None);
        assert_eq!(bounds.center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn random_clouds_are_contained() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for count in [2, 17, 500, 10_000] {
            let positions = random_cube(&mut rng, count, 500.0);
            let bounds = compute_bounds(&positions, None);
            assert_contains_all(&bounds, &positions);
        }
    }

    #[test]
    fn aabb_is_exact() {
        let mut rng = StdRng::seed_from_u64(11);
        let positions = random_cube(&mut rng, 2_000, 40.0);
        let bounds = compute_bounds(&positions, None);

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in atoms(&positions) {
            min = min.min(p);
            max = max.max(p);
        }
        assert_eq!(bounds.min, min);
        assert_eq!(bounds.max, max);
    }

    #[test]
    fn padded_atoms_are_enclosed_with_their_radii() {
        let mut rng = StdRng::seed_from_u64(3);
        let positions = random_cube(&mut rng, 1_000, 100.0);
        let padding: Vec<f32> =
            (0..1_000).map(|_| rng.random_range(0.0..25.0)).collect();
        let bounds = compute_bounds(&positions, Some(&padding));

        let tolerance = bounds.radius * 1e-4 + 1e-4;
        for (p, pad) in atoms(&positions).zip(&padding) {
            let reach = p.distance(bounds.center) + pad;
            assert!(reach <= bounds.radius + tolerance);
        }
    }

    #[test]
    fn padding_at_the_center_still_grows_the_sphere() {
        // Middle atom sits on the seeded center with a large padding.
        let positions = [-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        let bounds = compute_bounds(&positions, Some(&[0.0, 5.0, 0.0]));
        assert!(bounds.radius >= 5.0);
        assert!(bounds.center.is_finite());
    }

    fn assert_padded_contained(bounds: &Bounds, positions: &[f32], padding: &[f32]) {
        let tolerance = bounds.radius * 1e-4 + 1e-4;
        for (p, pad) in atoms(positions).zip(padding) {
            let reach = p.distance(bounds.center) + pad;
            assert!(
                reach <= bounds.radius + tolerance,
                "{p} + {pad} reaches {reach}, radius {}",
                bounds.radius
            );
        }
    }

    #[test]
    fn padding_larger_than_the_running_sphere_recenters() {
        // Atom just off the seeded center whose padding dwarfs the seed.
        let positions = [-1.0, 0.0, 0.0, 0.1, 0.0, 0.0, 1.0, 0.0, 0.0];
        let padding = [0.0, 10.0, 0.0];
        let bounds = compute_bounds(&positions, Some(&padding));
        assert_padded_contained(&bounds, &positions, &padding);
        assert!((bounds.radius - 10.0).abs() < 1e-4);
        assert!((bounds.center - Vec3::new(0.1, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn diatomic_with_wide_padding_is_enclosed() {
        let positions = [0.0, 0.0, 0.0, 89.0, 0.0, 0.0];
        let padding = [144.0, 144.0];
        let bounds = compute_bounds(&positions, Some(&padding));
        assert_padded_contained(&bounds, &positions, &padding);
        assert!((bounds.radius - 188.5).abs() < 1e-3);
        assert!((bounds.center.x - 44.5).abs() < 1e-3);
    }

    #[test]
    fn radius_is_within_one_and_a_half_of_minimum() {
        let mut rng = StdRng::seed_from_u64(42);
        for count in [200, 2_000, 10_000] {
            for positions in [
                random_cube(&mut rng, count, 300.0),
                random_ball(&mut rng, count, 300.0),
            ] {
                let bounds = compute_bounds(&positions, None);
                let lower = half_diameter(&positions);
                assert!(
                    bounds.radius <= 1.5 * lower,
                    "{count} atoms: radius {} vs lower bound {lower}",
                    bounds.radius
                );
            }
        }
    }

    #[test]
    fn scaling_by_a_power_of_two_scales_exactly() {
        let mut rng = StdRng::seed_from_u64(9);
        let positions = random_cube(&mut rng, 3_000, 50.0);
        let scaled: Vec<f32> = positions.iter().map(|v| v * 4.0).collect();

        let a = compute_bounds(&positions, None);
        let b = compute_bounds(&scaled, None);
        assert_eq!(b.radius, a.radius * 4.0);
        assert_eq!(b.center, a.center * 4.0);
        assert_eq!(b.min, a.min * 4.0);
        assert_eq!(b.max, a.max * 4.0);
    }

    #[test]
    fn scaling_by_any_factor_scales_proportionally() {
        let mut rng = StdRng::seed_from_u64(10);
        let positions = random_cube(&mut rng, 3_000, 50.0);
        let k = 3.3_f32;
        let scaled: Vec<f32> = positions.iter().map(|v| v * k).collect();

        let a = compute_bounds(&positions, None);
        let b = compute_bounds(&scaled, None);
        assert!((b.radius / a.radius - k).abs() < 1e-3);
        assert!((b.center - a.center * k).length() < a.radius * k * 1e-4);
    }

    #[test]
    fn hundred_thousand_atoms_take_exactly_three_scans() {
        let mut rng = StdRng::seed_from_u64(100_000);
        let positions = random_cube(&mut rng, 100_000, 500.0);
        let (bounds, stats) = compute_bounds_with_stats(&positions, None);

        assert_eq!(stats.passes, 3);
        assert_eq!(stats.visited, 300_000);
        assert_contains_all(&bounds, &positions);
    }

    #[test]
    fn empty_input_does_not_scan() {
        let (_, stats) = compute_bounds_with_stats(&[], None);
        assert_eq!(stats, ScanStats::default());
    }
}
