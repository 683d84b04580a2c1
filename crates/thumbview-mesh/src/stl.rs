//! STL bounding boxes.
//!
//! Both encodings are accepted:
//!
//! ```text
//! binary:  UINT8[80] header, UINT32 triangle count, then per triangle
//!          REAL32[3] normal, 3 x REAL32[3] vertex, UINT16 attribute
//!
//! ascii:   solid name
//!            facet normal ni nj nk
//!              outer loop
//!                vertex x y z   (x3)
//!              endloop
//!            endfacet
//!          endsolid name
//! ```
//!
//! Decoding is done by `stl_io`. The encoding is picked here rather than by
//! `stl_io::read_stl`, because binary exporters often start the header with
//! `solid` too.

use std::io::{self, Cursor};
use std::path::Path;

use glam::DVec3;
use stl_io::{AsciiStlReader, BinaryStlReader};
use thumbview_core::{BoundingBox, Result, ThumbviewError};

use crate::MeshStats;

/// Binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one binary triangle record.
const TRIANGLE_SIZE: usize = 50;

/// Reads an STL file and returns its bounding box.
pub fn stl_bounds(path: impl AsRef<Path>) -> Result<BoundingBox> {
    Ok(stl_stats(path)?.bounds)
}

/// Reads an STL file and returns its triangle count and bounds.
pub fn stl_stats(path: impl AsRef<Path>) -> Result<MeshStats> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ThumbviewError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ThumbviewError::IoError(e)
        }
    })?;
    let stats = stl_stats_from_bytes(&data)?;
    log::debug!(
        "{}: {} triangles, bounds {:?}",
        path.display(),
        stats.triangles,
        stats.bounds.as_array()
    );
    Ok(stats)
}

/// Returns the bounding box of in-memory STL data.
pub fn stl_bounds_from_bytes(data: &[u8]) -> Result<BoundingBox> {
    Ok(stl_stats_from_bytes(data)?.bounds)
}

/// Parses in-memory STL data, detecting ASCII vs binary.
pub fn stl_stats_from_bytes(data: &[u8]) -> Result<MeshStats> {
    if data.len() < 6 {
        return Err(ThumbviewError::invalid_content("file too small to be valid STL"));
    }
    if is_ascii(data) {
        parse_ascii(data)
    } else {
        parse_binary(data)
    }
}

/// ASCII files start with `solid`. Some binary exporters also write `solid`
/// into the header, so a NUL byte in the header, or enough data for the
/// declared triangle count, wins over the keyword.
fn is_ascii(data: &[u8]) -> bool {
    let header = &data[..data.len().min(HEADER_SIZE)];
    if !header[leading_whitespace(header)..].starts_with(b"solid") {
        return false;
    }
    if header.contains(&0) {
        return false;
    }
    // Exporters may pad past the last record
    binary_triangle_count(data)
        .and_then(binary_len)
        .map_or(true, |expected| data.len() < expected)
}

fn leading_whitespace(data: &[u8]) -> usize {
    data.iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len())
}

/// Total file length implied by a binary triangle count.
fn binary_len(triangles: usize) -> Option<usize> {
    triangles
        .checked_mul(TRIANGLE_SIZE)?
        .checked_add(HEADER_SIZE + 4)
}

fn binary_triangle_count(data: &[u8]) -> Option<usize> {
    let bytes = data.get(HEADER_SIZE..HEADER_SIZE + 4)?;
    let count = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    usize::try_from(count).ok()
}

fn parse_binary(data: &[u8]) -> Result<MeshStats> {
    let triangles = binary_triangle_count(data).ok_or(ThumbviewError::UnexpectedEof {
        position: data.len(),
    })?;
    let expected = binary_len(triangles)
        .ok_or_else(|| ThumbviewError::invalid_content("triangle count overflows"))?;
    if data.len() < expected {
        return Err(ThumbviewError::UnexpectedEof {
            position: data.len(),
        });
    }

    let mut cursor = Cursor::new(&data[..expected]);
    let mut reader = BinaryStlReader::create_triangle_iterator(&mut cursor)
        .map_err(|e| binary_error(e, data.len()))?;
    let mesh = reader
        .as_indexed_triangles()
        .map_err(|e| binary_error(e, data.len()))?;
    mesh_stats(&mesh)
}

fn parse_ascii(data: &[u8]) -> Result<MeshStats> {
    let mut cursor = Cursor::new(&data[leading_whitespace(data)..]);
    let mut reader = AsciiStlReader::create_triangle_iterator(&mut cursor)
        .map_err(|e| ThumbviewError::invalid_content(e.to_string()))?;
    let mesh = reader
        .as_indexed_triangles()
        .map_err(|e| ThumbviewError::invalid_content(e.to_string()))?;
    mesh_stats(&mesh)
}

fn binary_error(err: io::Error, position: usize) -> ThumbviewError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        ThumbviewError::UnexpectedEof { position }
    } else {
        ThumbviewError::invalid_content(err.to_string())
    }
}

/// Only vertex positions count; normals and attributes are ignored.
fn mesh_stats(mesh: &stl_io::IndexedMesh) -> Result<MeshStats> {
    if mesh.faces.is_empty() {
        return Err(ThumbviewError::EmptyMesh);
    }
    let points = mesh
        .vertices
        .iter()
        .map(|v| DVec3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2])));
    let bounds = BoundingBox::from_points(points).ok_or(ThumbviewError::EmptyMesh)?;
    Ok(MeshStats {
        triangles: mesh.faces.len(),
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_stl(header: &[u8], triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_SIZE];
        data[..header.len()].copy_from_slice(header);
        data.extend_from_slice(&u32::try_from(triangles.len()).unwrap().to_le_bytes());
        for tri in triangles {
            data.extend_from_slice(&[0u8; 12]);
            for v in tri {
                for c in v {
                    data.extend_from_slice(&c.to_le_bytes());
                }
            }
            data.extend_from_slice(&[0u8; 2]);
        }
        data
    }

    /// An 80-byte header that starts with `solid` and has no NUL.
    fn solid_header(name: &str) -> Vec<u8> {
        format!("solid {name}")
            .into_bytes()
            .into_iter()
            .chain(std::iter::repeat(b' '))
            .take(HEADER_SIZE)
            .collect()
    }

    const ASCII_TRIANGLE: &str = "solid tri
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 10.5 0 0
      vertex 0 -2 3e1
    endloop
  endfacet
endsolid tri
";

    #[test]
    fn test_ascii_bounds() {
        let stats = stl_stats_from_bytes(ASCII_TRIANGLE.as_bytes()).unwrap();
        assert_eq!(stats.triangles, 1);
        assert_eq!(stats.bounds.as_array(), [0.0, 10.5, -2.0, 0.0, 0.0, 30.0]);
    }

    #[test]
    fn test_binary_bounds() {
        let data = binary_stl(
            b"binary",
            &[
                [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
                [[-4.0, 0.5, 2.0], [1.0, 8.0, 0.0], [0.0, 1.0, -1.5]],
            ],
        );
        let stats = stl_stats_from_bytes(&data).unwrap();
        assert_eq!(stats.triangles, 2);
        assert_eq!(stats.bounds.as_array(), [-4.0, 1.0, 0.0, 8.0, -1.5, 2.0]);
    }

    #[test]
    fn test_binary_with_solid_header() {
        // No NUL after the keyword, so only the length check identifies it
        let data = binary_stl(
            &solid_header("part"),
            &[[[0.0, 0.0, 0.0], [2.0, 2.0, 2.0], [1.0, 1.0, 1.0]]],
        );
        let stats = stl_stats_from_bytes(&data).unwrap();
        assert_eq!(stats.triangles, 1);
        assert_eq!(stats.bounds.as_array(), [0.0, 2.0, 0.0, 2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_padded_binary_with_solid_header() {
        let mut data = binary_stl(
            &solid_header("exporter"),
            &[[[0.0, 0.0, 0.0], [1.0, 2.0, 3.0], [-1.0, 0.5, 0.0]]],
        );
        data.extend_from_slice(&[0u8; 2]);
        let stats = stl_stats_from_bytes(&data).unwrap();
        assert_eq!(stats.triangles, 1);
        assert_eq!(stats.bounds.as_array(), [-1.0, 1.0, 0.0, 2.0, 0.0, 3.0]);
    }

    #[test]
    fn test_truncated_binary() {
        let mut data = binary_stl(b"", &[[[0.0; 3]; 3]]);
        data.truncate(data.len() - 10);
        assert!(matches!(
            stl_stats_from_bytes(&data),
            Err(ThumbviewError::UnexpectedEof { .. })
        ));

        // Too short for its count, so read as text, which has no facets either
        let mut data = binary_stl(&solid_header("cut"), &[[[0.0; 3]; 3]]);
        data.truncate(HEADER_SIZE + 4 + 20);
        assert!(stl_stats_from_bytes(&data).is_err());
    }

    #[test]
    fn test_empty_meshes() {
        assert!(matches!(
            stl_stats_from_bytes(&binary_stl(b"", &[])),
            Err(ThumbviewError::EmptyMesh)
        ));
        assert!(matches!(
            stl_stats_from_bytes(b"solid empty\nendsolid empty\n"),
            Err(ThumbviewError::EmptyMesh)
        ));
    }

    #[test]
    fn test_malformed_ascii_vertex() {
        for vertex in ["vertex 0 0", "vertex 0 zero 0"] {
            let text = format!(
                "solid bad\n facet normal 0 0 1\n  outer loop\n   {vertex}\n   \
                 vertex 1 0 0\n   vertex 0 1 0\n  endloop\n endfacet\nendsolid bad\n"
            );
            assert!(
                matches!(
                    stl_stats_from_bytes(text.as_bytes()),
                    Err(ThumbviewError::InvalidContent(_))
                ),
                "{vertex}"
            );
        }
    }

    #[test]
    fn test_leading_whitespace_before_solid() {
        let text = format!("\n  {ASCII_TRIANGLE}");
        let stats = stl_stats_from_bytes(text.as_bytes()).unwrap();
        assert_eq!(stats.triangles, 1);
    }

    #[test]
    fn test_too_small() {
        assert!(stl_stats_from_bytes(b"sol").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            stl_bounds("/nonexistent/thumbview/part.stl"),
            Err(ThumbviewError::FileNotFound { .. })
        ));
    }
}
