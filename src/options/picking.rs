use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Atom-level picking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
pub struct PickingOptions {
    /// Resolve the individual atom under the pointer (one test per atom).
    #[schemars(title = "Pick Atoms")]
    pub pick_atoms: bool,
    /// Pick radius (scene units) for atoms without a padding radius.
    #[schemars(skip)]
    pub atom_radius: f32,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            pick_atoms: false,
            atom_radius: 60.0,
        }
    }
}
