//! thumbview: presentable orthogonal thumbnail cameras for 3D models.
//!
//! Given an STL or OBJ file (or just its bounding box), thumbview evaluates
//! the front, right, back, left and top views and returns the camera pose
//! that best fills a thumbnail frame. Rendering is left to the caller, which
//! applies the pose through [`CameraSink`].
//!
//! # Quick Start
//!
//! ```no_run
//! use thumbview::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let optimizer = ViewOptimizer::default();
//!     let camera = best_view_for_mesh("bracket.stl", &optimizer)?;
//!     println!("{} view from {:?}", camera.view_name, camera.position);
//!
//!     Ok(())
//! }
//! ```
//!
//! Bounds can also be passed directly:
//!
//! ```
//! use thumbview::{find_best_orthogonal_view, OrthoView};
//!
//! let camera = find_best_orthogonal_view([0.0, 10.0, 0.0, 10.0, 0.0, 10.0], true);
//! assert_eq!(camera.view_name, OrthoView::Front);
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod init;
mod thumbnail;

pub use init::init_logging;
pub use thumbnail::{analyze_mesh, best_view_for_mesh, MeshView};

// Re-export core types
pub use thumbview_core::{
    aspect_penalty, find_best_orthogonal_view, BoundingBox, CameraParameters, CameraSink,
    DMat4, DVec3, OptimizerOptions, OrthoView, Result, ScoredView, ThumbviewError,
    ViewOptimizer,
};

// Re-export loaders
pub use thumbview_mesh::{
    load_bounds, load_stats, obj_bounds, stl_bounds, stl_bounds_from_bytes, MeshFormat,
    MeshStats,
};
