//! The scene-graph capability the framing core drives.
//!
//! The core never owns a renderer. It needs exactly four things from the
//! host's scene graph, captured by [`SceneRoot`]: how many children the
//! structure root has, a way to offset those children, a way to set the
//! root's spin angle, and the root's current world matrix.
//!
//! [`StructureRoot`] is a small retained-mode implementation used headlessly
//! (tests, the demo binary) and as a reference for host integrations.

use glam::{Mat4, Vec3};

/// The parent node of a loaded structure.
///
/// Direct children carry the structure's geometry (meshes, instanced atoms,
/// point clouds). The root's own transform is reserved for the rotation
/// animator, so recentering only ever touches the children.
pub trait SceneRoot {
    /// Number of direct children.
    fn child_count(&self) -> usize;

    /// Offset every direct child by `offset` relative to where the
    /// structure assembler placed it. Replaces any previous offset rather
    /// than accumulating, so recentering the same structure twice cannot
    /// drift. The root's own transform is untouched.
    fn set_children_offset(&mut self, offset: Vec3);

    /// The offset last passed to [`SceneRoot::set_children_offset`].
    fn children_offset(&self) -> Vec3;

    /// Set the root's rotation about the vertical (Y) axis, in radians.
    /// Absolute assignment, not an increment.
    fn set_rotation_y(&mut self, angle: f32);

    /// Current local-to-world matrix of the root.
    fn world_matrix(&self) -> Mat4;
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// What kind of renderable a child node holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A single mesh (e.g. a bond cylinder batch).
    Mesh,
    /// An instanced mesh with one instance per atom.
    Instanced {
        /// Number of instances.
        count: usize,
    },
    /// A point cloud (used for very large structures).
    Points {
        /// Number of points.
        count: usize,
    },
}

/// One direct child of a [`StructureRoot`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// Display name.
    pub name: String,
    /// Renderable kind.
    pub kind: NodeKind,
    /// Translation given by the assembler, relative to the root and before
    /// recentering.
    pub translation: Vec3,
}

// ---------------------------------------------------------------------------
// StructureRoot
// ---------------------------------------------------------------------------

/// In-memory structure root: a Y-axis spin and a flat list of children
/// sharing one recentering offset. Mutations bump a generation counter so a
/// renderer can skip frames where nothing moved.
#[derive(Debug, Default)]
pub struct StructureRoot {
    children: Vec<SceneNode>,
    children_offset: Vec3,
    rotation_y: f32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl StructureRoot {
    /// Create an empty root at the origin with no rotation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether the root changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark current generation as rendered.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// Append a child at the root's origin. Returns its index.
    pub fn add_child(&mut self, name: &str, kind: NodeKind) -> usize {
        self.children.push(SceneNode {
            name: name.to_owned(),
            kind,
            translation: Vec3::ZERO,
        });
        self.invalidate();
        self.children.len() - 1
    }

    /// Remove all children and their recentering offset (the root
    /// transform is kept).
    pub fn clear(&mut self) {
        self.children.clear();
        self.children_offset = Vec3::ZERO;
        self.invalidate();
    }

    /// Effective translation of child `index` relative to the root,
    /// including the recentering offset.
    #[must_use]
    pub fn child_translation(&self, index: usize) -> Option<Vec3> {
        self.children
            .get(index)
            .map(|child| child.translation + self.children_offset)
    }

    /// Read access to the children.
    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Current spin about Y, in radians.
    #[must_use]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }
}

impl SceneRoot for StructureRoot {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn set_children_offset(&mut self, offset: Vec3) {
        self.children_offset = offset;
        self.invalidate();
    }

    fn children_offset(&self) -> Vec3 {
        self.children_offset
    }

    fn set_rotation_y(&mut self, angle: f32) {
        if self.rotation_y != angle {
            self.rotation_y = angle;
            self.invalidate();
        }
    }

    fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}
