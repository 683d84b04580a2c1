//! Mesh file to thumbnail camera.
//!
//! Glues the mesh loaders to the view optimizer. Loader errors propagate;
//! once bounds are known a camera is always produced.

use std::path::Path;

use thumbview_core::{CameraParameters, Result, ScoredView, ViewOptimizer};
use thumbview_mesh::{load_stats, MeshStats};

/// Everything the optimizer decided about one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshView {
    /// Triangle count and bounds from the loader.
    pub stats: MeshStats,
    /// All candidate scores, best first.
    pub ranked: Vec<ScoredView>,
    /// The selected camera.
    pub camera: CameraParameters,
}

/// Loads `path` and returns the best thumbnail camera for it.
///
/// The tie-break preference comes from the optimizer's options.
pub fn best_view_for_mesh(
    path: impl AsRef<Path>,
    optimizer: &ViewOptimizer,
) -> Result<CameraParameters> {
    Ok(analyze_mesh(path, optimizer)?.camera)
}

/// Loads `path` and returns its stats, ranked views and selected camera.
pub fn analyze_mesh(path: impl AsRef<Path>, optimizer: &ViewOptimizer) -> Result<MeshView> {
    let path = path.as_ref();
    let stats = load_stats(path)?;
    let ranked = optimizer.rank_views(&stats.bounds);
    let camera = optimizer.find(&stats.bounds);
    log::info!(
        "{}: {} triangles, {} view",
        path.display(),
        stats.triangles,
        camera.view_name
    );
    Ok(MeshView {
        stats,
        ranked,
        camera,
    })
}
