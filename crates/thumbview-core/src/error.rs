//! Error types for thumbview.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for thumbview operations.
#[derive(Error, Debug)]
pub enum ThumbviewError {
    /// A bounding box component or a value derived from it is NaN or infinite.
    #[error("bounding box is not finite: {0}")]
    NonFiniteBounds(String),

    /// A bounding box has `max < min` on some axis.
    #[error("bounding box is inverted on the {axis} axis: min {min} > max {max}")]
    InvertedBounds { axis: char, min: f64, max: f64 },

    /// Scoring produced no candidate view.
    #[error("no candidate view could be selected")]
    NoCandidate,

    /// A view name did not match any of the orthogonal views.
    #[error("unknown view '{0}' (expected front, right, back, left or top)")]
    UnknownView(String),

    /// An optimizer option is out of range.
    #[error("invalid option {name} = {value}")]
    InvalidOption { name: &'static str, value: f64 },

    /// A mesh file was not found.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file extension does not name a supported mesh format.
    #[error("unknown mesh format: .{extension}")]
    UnknownFormat { extension: String },

    /// The mesh file content could not be parsed.
    #[error("invalid file content: {0}")]
    InvalidContent(String),

    /// The mesh file ended before the declared data.
    #[error("unexpected end of file at byte {position}")]
    UnexpectedEof { position: usize },

    /// The mesh contains no vertices.
    #[error("mesh contains no geometry")]
    EmptyMesh,

    /// OBJ loader error.
    #[error("OBJ load error: {0}")]
    ObjLoad(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ThumbviewError {
    /// Builds a [`ThumbviewError::InvalidContent`] from a message.
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent(message.into())
    }
}

/// A specialized Result type for thumbview operations.
pub type Result<T> = std::result::Result<T, ThumbviewError>;
