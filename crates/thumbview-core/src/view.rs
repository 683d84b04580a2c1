//! The canonical orthogonal views evaluated for thumbnails.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::ThumbviewError;

/// One of the five axis-aligned camera angles considered for a thumbnail.
///
/// The scene is Z-up. "Bottom" is never a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrthoView {
    /// Camera on -Y, looking along +Y.
    #[default]
    Front,
    /// Camera on +X, looking along -X.
    Right,
    /// Camera on +Y, looking along -Y.
    Back,
    /// Camera on -X, looking along +X.
    Left,
    /// Camera on +Z, looking down.
    Top,
}

impl OrthoView {
    /// All candidate views, in evaluation order.
    pub const ALL: [OrthoView; 5] = [
        OrthoView::Front,
        OrthoView::Right,
        OrthoView::Back,
        OrthoView::Left,
        OrthoView::Top,
    ];

    /// Returns the lowercase view name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            OrthoView::Front => "front",
            OrthoView::Right => "right",
            OrthoView::Back => "back",
            OrthoView::Left => "left",
            OrthoView::Top => "top",
        }
    }

    /// Unit offset from the focal point to the camera position.
    #[must_use]
    pub fn direction(self) -> DVec3 {
        match self {
            OrthoView::Front => DVec3::NEG_Y,
            OrthoView::Right => DVec3::X,
            OrthoView::Back => DVec3::Y,
            OrthoView::Left => DVec3::NEG_X,
            OrthoView::Top => DVec3::Z,
        }
    }

    /// Axis index and sign of [`Self::direction`].
    #[must_use]
    pub fn axis(self) -> (usize, f64) {
        match self {
            OrthoView::Front => (1, -1.0),
            OrthoView::Right => (0, 1.0),
            OrthoView::Back => (1, 1.0),
            OrthoView::Left => (0, -1.0),
            OrthoView::Top => (2, 1.0),
        }
    }

    /// Up vector for this view.
    ///
    /// Side views use +Z. The top view looks along -Z, so it uses +Y instead.
    #[must_use]
    pub fn view_up(self) -> DVec3 {
        match self {
            OrthoView::Top => DVec3::Y,
            _ => DVec3::Z,
        }
    }

    /// Returns the (width, height) of the box face seen from this view.
    #[must_use]
    pub fn projected_extents(self, extents: DVec3) -> (f64, f64) {
        match self {
            OrthoView::Front | OrthoView::Back => (extents.x, extents.z),
            OrthoView::Right | OrthoView::Left => (extents.y, extents.z),
            OrthoView::Top => (extents.x, extents.y),
        }
    }
}

impl fmt::Display for OrthoView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrthoView {
    type Err = ThumbviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrthoView::ALL
            .into_iter()
            .find(|view| view.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThumbviewError::UnknownView(s.to_string()))
    }
}
