//! OBJ bounding boxes, via `tobj`.

use std::path::Path;

use glam::DVec3;
use thumbview_core::{BoundingBox, Result, ThumbviewError};

use crate::MeshStats;

/// Reads an OBJ file and returns the bounds of every model in it.
pub fn obj_bounds(path: impl AsRef<Path>) -> Result<BoundingBox> {
    Ok(obj_stats(path)?.bounds)
}

/// Reads an OBJ file and returns its triangle count and bounds.
///
/// Faces are triangulated so the count matches what a renderer would draw.
/// Materials are not needed and a missing `.mtl` is ignored.
pub fn obj_stats(path: impl AsRef<Path>) -> Result<MeshStats> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ThumbviewError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|e| ThumbviewError::ObjLoad(format!("{}: {e}", path.display())))?;

    let mut bounds: Option<BoundingBox> = None;
    let mut triangles = 0;
    for model in &models {
        let mesh = &model.mesh;
        triangles += mesh.indices.len() / 3;
        // Positions come in groups of 3: x, y, z
        let points = mesh
            .positions
            .chunks_exact(3)
            .map(|p| DVec3::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2])));
        if let Some(model_bounds) = BoundingBox::from_points(points) {
            bounds = Some(bounds.map_or(model_bounds, |b| b.union(&model_bounds)));
        }
    }

    let bounds = bounds.ok_or(ThumbviewError::EmptyMesh)?;
    log::debug!(
        "{}: {} models, {} triangles, bounds {:?}",
        path.display(),
        models.len(),
        triangles,
        bounds.as_array()
    );
    Ok(MeshStats { triangles, bounds })
}
