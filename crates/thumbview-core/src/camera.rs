//! Camera parameters handed to the thumbnail renderer.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::view::OrthoView;

/// A camera pose for one orthogonal thumbnail view.
///
/// Produced fresh by the optimizer for every query and never mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraParameters {
    /// Camera position in model space.
    pub position: DVec3,
    /// Point the camera looks at (the bounding box center).
    pub focal_point: DVec3,
    /// Up direction.
    pub view_up: DVec3,
    /// Distance from `position` to `focal_point`.
    pub distance: f64,
    /// Which orthogonal view this is.
    pub view_name: OrthoView,
}

impl CameraParameters {
    /// Places a camera `distance` away from `focal_point` along `view`'s direction.
    ///
    /// Only the view axis is offset, so the other two coordinates equal the
    /// focal point's even when `distance` is infinite.
    #[must_use]
    pub fn for_view(view: OrthoView, focal_point: DVec3, distance: f64) -> Self {
        let (axis, sign) = view.axis();
        let mut position = focal_point;
        position[axis] += sign * distance;
        Self {
            position,
            focal_point,
            view_up: view.view_up(),
            distance,
            view_name: view,
        }
    }

    /// Gets the normalized look direction.
    #[must_use]
    pub fn look_dir(&self) -> DVec3 {
        (self.focal_point - self.position).normalize_or_zero()
    }

    /// Gets the right direction (look cross up).
    #[must_use]
    pub fn right_dir(&self) -> DVec3 {
        self.look_dir().cross(self.view_up).normalize_or_zero()
    }

    /// Returns the right-handed view matrix (world to camera space).
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.focal_point, self.view_up)
    }

    /// Pushes this pose into a renderer camera.
    pub fn apply_to<S: CameraSink + ?Sized>(&self, sink: &mut S) {
        sink.set_position(self.position);
        sink.set_focal_point(self.focal_point);
        sink.set_view_up(self.view_up);
    }
}

/// A renderer-side camera that can be positioned from [`CameraParameters`].
///
/// Implementations must apply the values as given; no further transform is
/// expected between the optimizer and the renderer.
pub trait CameraSink {
    /// Sets the camera position.
    fn set_position(&mut self, position: DVec3);

    /// Sets the point the camera looks at.
    fn set_focal_point(&mut self, focal_point: DVec3);

    /// Sets the camera up vector.
    fn set_view_up(&mut self, view_up: DVec3);
}
