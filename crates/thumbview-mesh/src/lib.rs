//! Mesh loaders for thumbview.
//!
//! The optimizer only needs an axis-aligned bounding box, so these loaders
//! read vertex positions and discard everything else.
//!
//! - **STL** - binary and ASCII, detected from content
//! - **OBJ** - via `tobj`, all models merged
//!
//! # Example
//!
//! ```no_run
//! use thumbview_mesh::load_bounds;
//!
//! let bounds = load_bounds("model.stl").unwrap();
//! println!("center {:?}", bounds.center());
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod format;
pub mod obj;
pub mod stl;

use std::path::Path;

use thumbview_core::{BoundingBox, Result};

pub use format::MeshFormat;
pub use obj::{obj_bounds, obj_stats};
pub use stl::{stl_bounds, stl_bounds_from_bytes, stl_stats, stl_stats_from_bytes};

/// Summary of a parsed mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    /// Number of triangles read.
    pub triangles: usize,
    /// Tight bounds of every vertex.
    pub bounds: BoundingBox,
}

/// Loads a mesh file and returns its triangle count and bounds.
///
/// The format is chosen from the file extension.
pub fn load_stats(path: impl AsRef<Path>) -> Result<MeshStats> {
    let path = path.as_ref();
    match MeshFormat::from_path(path)? {
        MeshFormat::Stl => stl_stats(path),
        MeshFormat::Obj => obj_stats(path),
    }
}

/// Loads a mesh file and returns its bounding box.
pub fn load_bounds(path: impl AsRef<Path>) -> Result<BoundingBox> {
    Ok(load_stats(path)?.bounds)
}
