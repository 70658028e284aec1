use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Auto-rotation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
pub struct RotationOptions {
    /// Full spin speed in rotations per second.
    #[schemars(title = "Speed", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub speed: f32,
    /// Per-frame easing toward the target speed (also drives hover glow).
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
    /// Stop spinning while the pointer is over the structure.
    #[schemars(title = "Pause on Hover")]
    pub hover_pause: bool,
    /// Start with rotation paused.
    #[schemars(title = "Paused")]
    pub paused: bool,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            speed: 0.1,
            smoothing: 0.15,
            hover_pause: true,
            paused: false,
        }
    }
}
