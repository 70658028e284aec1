//! Smoothed, hover-pausable spin.
//!
//! Each tick the current speed approaches the target speed exponentially,
//! so pausing (or hovering) decelerates instead of snapping to a stop, and
//! resuming accelerates back up. The angle is assigned to the scene root
//! absolutely every tick; nothing accumulates on the transform itself.

use std::f32::consts::TAU;

use crate::options::RotationOptions;
use crate::scene::SceneRoot;

/// Speeds below this (rad/s) are snapped to zero once the target is zero.
const REST_EPSILON: f32 = 1e-6;

/// The animator's continuous state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    /// Current angle in radians, wrapped to `[0, 2π)`.
    pub angle: f32,
    /// Current angular speed in rad/s.
    pub current_speed: f32,
    /// Speed the current speed is easing toward, in rad/s.
    pub target_speed: f32,
}

impl RotationState {
    /// Pure single-tick update: ease toward `target_speed` by `smoothing`,
    /// then advance the angle by `dt` seconds.
    #[must_use]
    pub fn step(self, target_speed: f32, smoothing: f32, dt: f32) -> Self {
        let mut current_speed = self.current_speed
            + (target_speed - self.current_speed) * smoothing.clamp(0.0, 1.0);
        if target_speed == 0.0 && current_speed.abs() < REST_EPSILON {
            current_speed = 0.0;
        }
        let angle = (self.angle + current_speed * dt.max(0.0)).rem_euclid(TAU);
        Self {
            // rem_euclid can round up to exactly TAU for tiny negatives
            angle: if angle >= TAU { 0.0 } else { angle },
            current_speed,
            target_speed,
        }
    }

    /// Whether the spin has fully stopped and is not about to restart.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.current_speed == 0.0 && self.target_speed == 0.0
    }
}

/// Drives [`RotationState`] from pause and hover signals.
#[derive(Debug, Clone)]
pub struct RotationAnimator {
    state: RotationState,
    /// Full-speed spin in rad/s.
    speed: f32,
    smoothing: f32,
    hover_pause: bool,
    paused: bool,
}

impl RotationAnimator {
    /// Create an animator at rest, configured from `options`.
    #[must_use]
    pub fn new(options: &RotationOptions) -> Self {
        let mut animator = Self {
            state: RotationState::default(),
            speed: 0.0,
            smoothing: 0.0,
            hover_pause: true,
            paused: false,
        };
        animator.apply_options(options);
        animator
    }

    /// Re-read speed, smoothing, and pause toggles. Keeps the current state.
    pub fn apply_options(&mut self, options: &RotationOptions) {
        self.speed = options.speed * TAU;
        self.smoothing = options.smoothing;
        self.hover_pause = options.hover_pause;
        self.paused = options.paused;
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> RotationState {
        self.state
    }

    /// Current angle in radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.state.angle
    }

    /// Zero angle, speed, and target. Called whenever a new structure is
    /// fitted.
    pub fn reset(&mut self) {
        self.state = RotationState::default();
    }

    /// User pause toggle.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Whether the user has paused rotation.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Enable or disable pausing while the pointer hovers the structure.
    pub fn set_hover_pause(&mut self, enabled: bool) {
        self.hover_pause = enabled;
    }

    /// Speed the animator wants given the pause and hover signals.
    #[must_use]
    pub fn target_speed(&self, hovered: bool) -> f32 {
        if self.paused || (self.hover_pause && hovered) {
            0.0
        } else {
            self.speed
        }
    }

    /// Advance one frame of `dt` seconds. Returns the new angle.
    pub fn tick(&mut self, dt: f32, hovered: bool) -> f32 {
        let target = self.target_speed(hovered);
        self.state = self.state.step(target, self.smoothing, dt);
        self.state.angle
    }

    /// Advance one frame and assign the angle to `root`.
    pub fn tick_root<R: SceneRoot + ?Sized>(
        &mut self,
        dt: f32,
        hovered: bool,
        root: &mut R,
    ) -> f32 {
        let angle = self.tick(dt, hovered);
        root.set_rotation_y(angle);
        angle
    }
}
