//! Ångström to scene-unit conversion.
//!
//! The framing core works in one consistent "scene unit". Structure files
//! are in Ångströms; callers scale once, here, before bounding or fitting.

/// Scene units per Ångström.
pub const SCENE_UNITS_PER_ANGSTROM: f32 = 120.0;

/// Convert a flat Ångström coordinate array to scene units.
#[must_use]
pub fn scale_angstroms(coords: &[f32]) -> Vec<f32> {
    coords.iter().map(|v| v * SCENE_UNITS_PER_ANGSTROM).collect()
}

/// Convert a scene-unit length back to Ångströms.
#[must_use]
pub fn to_angstroms(scene_units: f32) -> f32 {
    scene_units / SCENE_UNITS_PER_ANGSTROM
}
