//! Mesh file format detection.

use std::path::Path;

use thumbview_core::{Result, ThumbviewError};

/// Mesh formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// Stereolithography, ASCII or binary.
    Stl,
    /// Wavefront OBJ.
    Obj,
}

impl MeshFormat {
    /// Matches a file extension, ignoring case and a leading dot.
    pub fn from_extension(extension: &str) -> Result<Self> {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "stl" => Ok(MeshFormat::Stl),
            "obj" => Ok(MeshFormat::Obj),
            _ => Err(ThumbviewError::UnknownFormat { extension: ext }),
        }
    }

    /// Detects the format from a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    /// Returns the canonical extension.
    pub fn extension(self) -> &'static str {
        match self {
            MeshFormat::Stl => "stl",
            MeshFormat::Obj => "obj",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(MeshFormat::from_path("part.STL").unwrap(), MeshFormat::Stl);
        assert_eq!(MeshFormat::from_path("/a/b/bunny.obj").unwrap(), MeshFormat::Obj);
        assert_eq!(MeshFormat::from_extension(".Obj").unwrap(), MeshFormat::Obj);
    }

    #[test]
    fn test_unknown_extension() {
        assert!(matches!(
            MeshFormat::from_path("scene.ply"),
            Err(ThumbviewError::UnknownFormat { extension }) if extension == "ply"
        ));
        assert!(MeshFormat::from_path("no_extension").is_err());
    }
}
