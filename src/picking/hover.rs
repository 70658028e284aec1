use glam::{Mat4, Vec2};

use super::atom::PickedAtom;
use super::ray::Ray;
use crate::bounds::Sphere;
use crate::camera::Camera;
use crate::scene::SceneRoot;

/// What the pointer is over.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverState {
    /// Pointer ray hits the structure's live bounding sphere.
    pub is_hovered: bool,
    /// Atom under the pointer, when atom-level picking is enabled.
    pub picked: Option<PickedAtom>,
    /// Smoothed glow intensity in `[0, 1]`, easing toward `is_hovered`.
    pub glow: f32,
}

/// Hover detection against the structure's bounding sphere as currently
/// rotated.
///
/// The sphere handed in lives in the root's local (recentered, unrotated)
/// frame, normally [`CenteredBounds::sphere`](crate::bounds::CenteredBounds::sphere).
/// Every test first carries it through the root's world matrix; testing
/// the local sphere directly would drift out of step with the spinning
/// molecule.
#[derive(Debug, Clone, Default)]
pub struct HoverPicker {
    state: HoverState,
}

impl HoverPicker {
    /// Create a picker with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hover state.
    #[must_use]
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// Whether the pointer is over the structure.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.state.is_hovered
    }

    /// A root-local sphere in world space under the root's current
    /// transform.
    #[must_use]
    pub fn world_sphere(local: &Sphere, world: &Mat4) -> Sphere {
        local.transformed(world)
    }

    /// Pure hover test: does the ray through `ndc` hit the live sphere?
    /// `false` before any structure is fitted or when the root is empty.
    #[must_use]
    pub fn hit_test<R: SceneRoot + ?Sized>(
        camera: &Camera,
        ndc: Vec2,
        local: Option<&Sphere>,
        root: &R,
    ) -> bool {
        let Some(local) = local else {
            return false;
        };
        if root.child_count() == 0 {
            return false;
        }
        let sphere = Self::world_sphere(local, &root.world_matrix());
        Ray::from_ndc(camera, ndc).intersect_sphere(&sphere).is_some()
    }

    /// Handle a pointer move. Returns the new hover flag.
    pub fn pointer_move<R: SceneRoot + ?Sized>(
        &mut self,
        camera: &Camera,
        ndc: Vec2,
        local: Option<&Sphere>,
        root: &R,
    ) -> bool {
        let hovered = Self::hit_test(camera, ndc, local, root);
        if hovered != self.state.is_hovered {
            log::debug!("structure hover {}", if hovered { "on" } else { "off" });
        }
        self.state.is_hovered = hovered;
        if !hovered {
            self.state.picked = None;
        }
        hovered
    }

    /// Record the atom-level pick result for the current pointer position.
    pub fn set_picked(&mut self, picked: Option<PickedAtom>) {
        self.state.picked = picked;
    }

    /// Pointer left the viewport.
    pub fn pointer_leave(&mut self) {
        self.state.is_hovered = false;
        self.state.picked = None;
    }

    /// Forget everything, including glow. Called when the structure changes.
    pub fn clear(&mut self) {
        self.state = HoverState::default();
    }

    /// Ease the glow toward the hover flag by `smoothing` per tick.
    pub fn tick_glow(&mut self, smoothing: f32) {
        let target = if self.state.is_hovered { 1.0 } else { 0.0 };
        let glow = self.state.glow
            + (target - self.state.glow) * smoothing.clamp(0.0, 1.0);
        self.state.glow = if (glow - target).abs() < 1e-4 { target } else { glow };
    }
}
