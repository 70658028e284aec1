//! Per-frame lifecycle and read-only queries for [`FramingEngine`].

use glam::Vec3;

use super::FramingEngine;
use crate::animation::RotationState;
use crate::bounds::CenteredBounds;
use crate::camera::{Camera, CameraUniform, Frustum, OrbitControls};
use crate::options::Options;
use crate::picking::{HoverPicker, HoverState};
use crate::scene::SceneRoot;
use crate::util::wireframe::sphere_wireframe;

// ── Lifecycle ──

impl FramingEngine {
    /// Advance one frame by `dt` seconds: camera damping, spin, and hover
    /// glow. Returns `false` (and changes nothing) while the newest load
    /// has not committed, meaning the frame should not be drawn.
    pub fn tick<R: SceneRoot + ?Sized>(&mut self, dt: f32, root: &mut R) -> bool {
        if !self.is_ready() {
            return false;
        }
        let _ = self.controls.update();
        let _ = self
            .animator
            .tick_root(dt, self.hover.is_hovered(), root);
        self.refresh_hover(root);
        self.hover.tick_glow(self.options.rotation.smoothing);

        self.uniform.update_view_proj(&self.controls.camera);
        self.uniform.update_hover(self.hover.state());
        true
    }

    /// [`Self::tick`] with `dt` taken from the engine's frame clock.
    pub fn frame<R: SceneRoot + ?Sized>(&mut self, root: &mut R) -> bool {
        let dt = self.clock.tick();
        self.tick(dt, root)
    }

    /// Viewport resized. Zero-sized viewports (minimized windows) are
    /// ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.controls.camera.aspect = width as f32 / height as f32;
            self.uniform.update_view_proj(&self.controls.camera);
        }
    }

    /// Replace the options and push them to every subsystem. Takes effect
    /// from the next tick; the current fit is kept until the next load.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.apply_options();
    }

    /// Set a single option by section and field name, as sent by a
    /// settings panel. Returns `false` (leaving options unchanged) if the
    /// section is unknown or the value does not fit the field.
    pub fn set_option(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> bool {
        match self.options.with_field(section, field, value) {
            Ok(options) => {
                self.set_options(options);
                true
            }
            Err(e) => {
                log::warn!("ignoring option {section}.{field}: {e}");
                false
            }
        }
    }

    /// Push current option values to the camera controls and animator.
    pub fn apply_options(&mut self) {
        self.controls.apply_options(&self.options.camera);
        self.animator.apply_options(&self.options.rotation);
        self.uniform.update_view_proj(&self.controls.camera);
    }
}

// ── Queries ──

impl FramingEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The camera as last updated.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.controls.camera
    }

    /// Orbit controls, including the fitted frame and zoom limits.
    #[must_use]
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    /// GPU-ready camera block for the current frame.
    #[must_use]
    pub fn camera_uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// Spin state.
    #[must_use]
    pub fn rotation(&self) -> RotationState {
        self.animator.state()
    }

    /// Hover state.
    #[must_use]
    pub fn hover(&self) -> &HoverState {
        self.hover.state()
    }

    /// Bounds of the committed structure in its recentered frame.
    #[must_use]
    pub fn centered_bounds(&self) -> Option<&CenteredBounds> {
        self.centered.as_ref()
    }

    /// Smoothed frames per second from the frame clock.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Whether the whole live bounding sphere is inside the view frustum.
    #[must_use]
    pub fn structure_in_view<R: SceneRoot + ?Sized>(&self, root: &R) -> bool {
        let Some(centered) = self.centered else {
            return false;
        };
        let sphere =
            HoverPicker::world_sphere(&centered.sphere(), &root.world_matrix());
        Frustum::from_view_projection(self.controls.camera.build_matrix())
            .contains_sphere(&sphere)
    }

    /// Line-list wireframe of the live bounding sphere, when the debug
    /// overlay is switched on and a structure is framed.
    #[must_use]
    pub fn debug_wireframe<R: SceneRoot + ?Sized>(
        &self,
        root: &R,
    ) -> Option<Vec<Vec3>> {
        if !self.options.debug.show_bounding_sphere || !self.is_ready() {
            return None;
        }
        let centered = self.centered?;
        Some(sphere_wireframe(
            &centered.sphere(),
            &root.world_matrix(),
            self.options.debug.wireframe_segments,
        ))
    }
}
