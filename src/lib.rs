// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Framing core for an interactive molecular viewer.
//!
//! Given a loaded structure's atom coordinates, molframe computes its
//! bounding volumes, recenters it, places the camera so it fills the view,
//! spins it with hover-aware easing, and answers "is the pointer over the
//! molecule?" against the structure as it is currently rotated. It drives a
//! host scene graph through the small [`scene::SceneRoot`] trait and never
//! owns a renderer.
//!
//! # Key entry points
//!
//! - [`engine::FramingEngine`] - owns one structure's framing state and
//!   sequences loads so the newest always wins
//! - [`bounds::compute_bounds`] - AABB plus Ritter bounding sphere in three
//!   linear scans
//! - [`camera::fit_camera_to_bounds`] - recenter and frame a structure
//! - [`animation::RotationAnimator`] - smoothed, pausable auto-rotation
//! - [`picking::HoverPicker`] - pointer hover against the live sphere
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Coordinates
//!
//! Positions are in scene units. Callers holding angstroms scale them with
//! [`util::units::scale_angstroms`] first.

pub mod animation;
pub mod bounds;
pub mod camera;
pub mod engine;
pub mod error;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;
