//! Pointer picking against the live, rotating structure.
//!
//! Hover uses one ray-sphere test against the structure's bounding sphere,
//! carried through the root's current world matrix so it stays in step with
//! the spin. Atom-level picking is a separate, more expensive pass that
//! tests every atom.

mod atom;
mod hover;
mod ray;

pub use atom::{pick_atom, PickedAtom};
pub use hover::{HoverPicker, HoverState};
pub use ray::Ray;
