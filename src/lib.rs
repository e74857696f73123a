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

//! Orbiting scene camera with an eased hand-off between user interaction
//! and a scripted path.
//!
//! The camera follows a deterministic orbit until the user grabs it. While
//! dragging, the pose comes from the orbit controls; on release the camera
//! eases back onto the orbit with a cubic ease-in-out.
//!
//! # Key entry points
//!
//! - [`camera::CameraTransitionController`] - the per-frame hand-off state
//!   machine
//! - [`camera::CameraRig`] - wires an interaction source to the controller
//! - [`camera::OrbitControls`] - mouse orbit interaction source
//! - [`options::Options`] - runtime configuration (transition, orbit,
//!   camera, effects, scene)
//! - [`postprocess`] - GPU uniform layouts for the screen-space effects
//!
//! # Frame order
//!
//! Each frame the rig applies queued interaction events, lets the source
//! write the pose while the user is interacting, then ticks the controller.
//! The resulting pose feeds [`camera::core::CameraUniform`] for the host
//! renderer.

pub mod camera;
pub mod error;
pub mod options;
pub mod postprocess;
pub mod trace;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
