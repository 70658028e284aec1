//! Camera system for framing a molecule.
//!
//! Provides a perspective camera, an orbit-style controller with a
//! resettable baseline, frustum tests, and the fitter that places the camera
//! so a structure's bounding sphere fills the view.

/// Orbit controller owning the camera, with zoom limits and damping.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Camera placement from a bounding sphere.
pub mod fit;
/// View frustum extraction and intersection tests.
pub mod frustum;

pub use self::core::{Camera, CameraUniform};
pub use controller::OrbitControls;
pub use fit::{fit_camera_to_bounds, CameraFrame};
pub use frustum::Frustum;
