//! Auto-rotation of the structure root.
//!
//! A single smoothed spin about the vertical axis, paused by the user or by
//! hovering, advanced once per rendered frame.

mod rotation;

pub use rotation::{RotationAnimator, RotationState};
