//! Core types for thumbview.
//!
//! This crate turns a mesh bounding box into a camera pose for a thumbnail:
//! - [`BoundingBox`] for model-space extents
//! - [`OrthoView`] for the five candidate angles
//! - [`ViewOptimizer`] to score the candidates and pick one
//! - [`CameraParameters`] and the [`CameraSink`] seam to a renderer

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod bounds;
pub mod camera;
pub mod error;
pub mod optimizer;
pub mod options;
pub mod view;

pub use bounds::BoundingBox;
pub use camera::{CameraParameters, CameraSink};
pub use error::{Result, ThumbviewError};
pub use optimizer::{aspect_penalty, find_best_orthogonal_view, ScoredView, ViewOptimizer};
pub use options::OptimizerOptions;
pub use view::OrthoView;

// Re-export glam types for convenience
pub use glam::{DMat4, DVec3};
