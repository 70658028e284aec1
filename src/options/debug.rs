use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug visualization toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Draw the live bounding sphere as a wireframe.
    #[schemars(title = "Show Bounding Sphere")]
    pub show_bounding_sphere: bool,
    /// Line segments per wireframe circle.
    #[schemars(skip)]
    pub wireframe_segments: u32,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            show_bounding_sphere: false,
            wireframe_segments: 48,
        }
    }
}
