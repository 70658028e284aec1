//! Camera placement from a bounding sphere.
//!
//! Fitting is split in two: [`CameraFrame::from_bounds`] is a pure function
//! of the bounds, margin, and field of view; [`fit_camera_to_bounds`] then
//! applies it, recentering the structure and resetting rotation first so a
//! stale spin from the previous structure cannot bias the new fit.

use glam::Vec3;

use crate::animation::RotationAnimator;
use crate::bounds::{Bounds, CenteredBounds};
use crate::camera::controller::OrbitControls;
use crate::options::CameraOptions;
use crate::scene::SceneRoot;

/// Near plane as a fraction of the fitted distance.
pub const NEAR_RATIO: f32 = 0.01;
/// Far plane as a multiple of the fitted distance.
pub const FAR_RATIO: f32 = 10.0;
/// Closest zoom as a fraction of the fitted distance.
pub const MIN_DISTANCE_RATIO: f32 = 0.2;
/// Farthest zoom as a multiple of the fitted distance.
pub const MAX_DISTANCE_RATIO: f32 = 5.0;

/// Field of view is kept inside this range (degrees) so `sin(fov / 2)`
/// stays well away from zero.
const FOVY_RANGE: (f32, f32) = (1.0, 179.0);

/// Camera placement derived from a [`Bounds`]. Carries no identity of its
/// own: the same bounds, margin, and field of view always give the same
/// frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Eye-to-origin distance.
    pub distance: f32,
    /// Eye position in the recentered frame (always on +Z).
    pub position: Vec3,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Closest orbit distance allowed.
    pub min_distance: f32,
    /// Farthest orbit distance allowed.
    pub max_distance: f32,
}

impl CameraFrame {
    /// Frame a sphere of `bounds.radius` so it exactly fills the vertical
    /// field of view, times `margin`.
    ///
    /// `distance = (r * margin) / sin(fovy / 2)`. Radii below
    /// `min_fit_radius` are raised to it first, so single atoms and other
    /// degenerate structures still get a camera that is not sitting on its
    /// target. A margin below 1 zooms in past the sphere; a margin that is
    /// not positive (or not finite) is treated as 1.
    #[must_use]
    pub fn from_bounds(
        bounds: &Bounds,
        fovy_degrees: f32,
        margin: f32,
        min_fit_radius: f32,
    ) -> Self {
        let radius = bounds.radius.max(min_fit_radius).max(f32::MIN_POSITIVE);
        let half_fov =
            fovy_degrees.clamp(FOVY_RANGE.0, FOVY_RANGE.1).to_radians() * 0.5;
        let margin = if margin.is_finite() && margin > 0.0 {
            margin
        } else {
            1.0
        };
        let distance = (radius * margin) / half_fov.sin();

        Self {
            distance,
            position: Vec3::new(0.0, 0.0, distance),
            near: distance * NEAR_RATIO,
            far: distance * FAR_RATIO,
            min_distance: distance * MIN_DISTANCE_RATIO,
            max_distance: distance * MAX_DISTANCE_RATIO,
        }
    }
}

/// Recenter the structure under `root` and frame it with `controls`.
///
/// In order:
/// 1. camera zoom back to 1, rotation state and the root's spin back to 0;
/// 2. every direct child of `root` offset by `-bounds.center` (the root's
///    own transform stays free for the rotation animator);
/// 3. camera distance from [`CameraFrame::from_bounds`];
/// 4. camera placed at `(0, 0, distance)` with near/far planes;
/// 5. orbit target at the origin with proportional zoom limits, and the
///    result saved as the controls' reset baseline.
///
/// Returns the bounds re-expressed in the recentered frame. The children
/// offset is absolute, so fitting the same bounds twice leaves the scene and
/// the result unchanged.
pub fn fit_camera_to_bounds<R: SceneRoot + ?Sized>(
    bounds: &Bounds,
    controls: &mut OrbitControls,
    root: &mut R,
    animator: &mut RotationAnimator,
    options: &CameraOptions,
) -> CenteredBounds {
    controls.camera.zoom = 1.0;
    animator.reset();
    root.set_rotation_y(0.0);

    root.set_children_offset(-bounds.center);

    if bounds.radius < options.min_fit_radius {
        log::warn!(
            "bounding radius {} below floor {}, framing at the floor",
            bounds.radius,
            options.min_fit_radius
        );
    }
    let frame = CameraFrame::from_bounds(
        bounds,
        controls.camera.fovy,
        options.margin,
        options.min_fit_radius,
    );

    controls.apply_frame(&frame);
    let _ = controls.update();
    controls.save_state();

    CenteredBounds::from_bounds(bounds)
}
