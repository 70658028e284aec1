use glam::{Quat, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::camera::fit::CameraFrame;
use crate::options::CameraOptions;

/// Rotational velocity below this is treated as settled.
const SETTLE_EPSILON: f32 = 1e-5;

/// Snapshot restored by [`OrbitControls::reset`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct SavedView {
    orientation: Quat,
    distance: f32,
    target: Vec3,
    zoom: f32,
}

/// Orbit-style camera controller: the camera circles `target` at
/// `distance`, with zoom clamped to `[min_distance, max_distance]`.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    orientation: Quat,
    distance: f32,
    target: Vec3,

    /// The controlled camera.
    pub camera: Camera,
    /// Closest allowed zoom distance.
    pub min_distance: f32,
    /// Farthest allowed zoom distance.
    pub max_distance: f32,
    /// Whether rotation keeps coasting after input stops.
    pub enable_damping: bool,
    /// Fraction of coasting velocity removed per update.
    pub damping_factor: f32,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    rotate_velocity: Vec2,
    saved: Option<SavedView>,
    frame: Option<CameraFrame>,
}

impl OrbitControls {
    /// Wrap `camera`, orbiting its current target at its current distance.
    #[must_use]
    pub fn new(camera: Camera, options: &CameraOptions) -> Self {
        let distance = camera.distance();
        let target = camera.target;
        let mut controls = Self {
            orientation: Quat::IDENTITY,
            distance,
            target,
            camera,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            enable_damping: true,
            damping_factor: options.damping_factor,
            rotate_speed: options.rotate_speed * 0.01,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            rotate_velocity: Vec2::ZERO,
            saved: None,
            frame: None,
        };
        controls.camera.fovy = options.fovy;
        controls.update_camera_pos();
        controls
    }

    /// Re-read sensitivity, damping, and field of view from options.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.damping_factor = options.damping_factor;
        self.rotate_speed = options.rotate_speed * 0.01;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
        self.camera.fovy = options.fovy;
    }

    /// Orbit center.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current orbit distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The frame applied by the most recent fit, if any.
    #[must_use]
    pub fn frame(&self) -> Option<&CameraFrame> {
        self.frame.as_ref()
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.target + (dir * self.distance);
        self.camera.target = self.target;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Adopt a fitted frame: orbit the origin from +Z at the frame's
    /// distance, with its clip planes and zoom limits. Clears any coasting
    /// rotation. Does not snapshot; call [`Self::save_state`] for that.
    pub fn apply_frame(&mut self, frame: &CameraFrame) {
        self.orientation = Quat::IDENTITY;
        self.target = Vec3::ZERO;
        self.distance = frame.distance;
        self.rotate_velocity = Vec2::ZERO;
        self.camera.znear = frame.near;
        self.camera.zfar = frame.far;
        self.min_distance = frame.min_distance;
        self.max_distance = frame.max_distance;
        self.frame = Some(*frame);
        self.update_camera_pos();
    }

    /// Record the current view as the baseline for [`Self::reset`].
    pub fn save_state(&mut self) {
        self.saved = Some(SavedView {
            orientation: self.orientation,
            distance: self.distance,
            target: self.target,
            zoom: self.camera.zoom,
        });
    }

    /// Return to the last saved baseline. Returns `false` if nothing was
    /// saved yet.
    pub fn reset(&mut self) -> bool {
        let Some(saved) = self.saved else {
            return false;
        };
        self.orientation = saved.orientation;
        self.distance = saved.distance;
        self.target = saved.target;
        self.camera.zoom = saved.zoom;
        self.rotate_velocity = Vec2::ZERO;
        self.update_camera_pos();
        true
    }

    /// Orbit by a pointer-drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        if self.enable_damping {
            self.rotate_velocity += delta;
        } else {
            self.apply_rotation(delta);
            self.update_camera_pos();
        }
    }

    fn apply_rotation(&mut self, delta: Vec2) {
        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal = Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal * self.orientation;

        // Vertical rotation around camera's right vector (after horizontal
        // rotation)
        let right = self.orientation * Vec3::X;
        let vertical = Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = (vertical * self.orientation).normalize();
    }

    /// Slide the target in the view plane. Scaled by distance so panning
    /// feels the same at any structure size.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        let scale = self.pan_speed * self.distance * 0.001;

        let translation = right * (-delta.x * scale) + up * (delta.y * scale);

        self.target += translation;
        self.update_camera_pos();
    }

    /// Dolly in (positive) or out (negative), clamped to the zoom limits.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.max(self.min_distance).min(self.max_distance);
        self.update_camera_pos();
    }

    /// Advance damping by one frame. Returns `true` if the camera moved.
    pub fn update(&mut self) -> bool {
        if self.rotate_velocity.length_squared() <= SETTLE_EPSILON {
            self.rotate_velocity = Vec2::ZERO;
            self.update_camera_pos();
            return false;
        }
        let step = self.rotate_velocity * self.damping_factor.clamp(0.0, 1.0);
        self.apply_rotation(step);
        self.rotate_velocity -= step;
        self.update_camera_pos();
        true
    }
}
