//! Axis-aligned bounding boxes in model space.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThumbviewError};

/// An axis-aligned bounding box in model coordinates.
///
/// Units are whatever the mesh was authored in (usually millimeters). The
/// optimizer only ever reads the box, so no invariant is enforced on
/// construction; call [`BoundingBox::validate`] when the caller wants one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingBox {
    /// Creates a bounding box from per-axis extents in
    /// `(xmin, xmax, ymin, ymax, zmin, zmax)` order.
    #[must_use]
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, zmin: f64, zmax: f64) -> Self {
        Self {
            min: DVec3::new(xmin, ymin, zmin),
            max: DVec3::new(xmax, ymax, zmax),
        }
    }

    /// Creates a bounding box from its two corners.
    #[must_use]
    pub fn from_min_max(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Computes the tight box around a set of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_min_max(first, first);
        for p in iter {
            bounds.expand_to_include(p);
        }
        Some(bounds)
    }

    /// Grows the box so that it contains `point`.
    pub fn expand_to_include(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Returns the smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Exact per-axis midpoint.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        DVec3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Raw per-axis extents (`max - min`), possibly zero or negative.
    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Per-axis extents with each component clamped to at least `min_extent`.
    #[must_use]
    pub fn clamped_extents(&self, min_extent: f64) -> DVec3 {
        let size = self.size();
        DVec3::new(
            size.x.max(min_extent),
            size.y.max(min_extent),
            size.z.max(min_extent),
        )
    }

    /// Returns the extents in `(xmin, xmax, ymin, ymax, zmin, zmax)` order.
    #[must_use]
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z,
        ]
    }

    /// Returns whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Checks that the box is finite and ordered on every axis.
    pub fn validate(&self) -> Result<()> {
        if !self.is_finite() {
            return Err(ThumbviewError::NonFiniteBounds(format!("{:?}", self.as_array())));
        }
        for (axis, min, max) in [
            ('x', self.min.x, self.max.x),
            ('y', self.min.y, self.max.y),
            ('z', self.min.z, self.max.z),
        ] {
            if max < min {
                return Err(ThumbviewError::InvertedBounds { axis, min, max });
            }
        }
        Ok(())
    }
}

impl From<[f64; 6]> for BoundingBox {
    fn from(b: [f64; 6]) -> Self {
        Self::new(b[0], b[1], b[2], b[3], b[4], b[5])
    }
}

impl From<(f64, f64, f64, f64, f64, f64)> for BoundingBox {
    fn from(b: (f64, f64, f64, f64, f64, f64)) -> Self {
        Self::new(b.0, b.1, b.2, b.3, b.4, b.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_axes() {
        let bounds = BoundingBox::new(0.0, 100.0, -5.0, 50.0, 1.0, 30.0);
        assert_eq!(bounds.min, DVec3::new(0.0, -5.0, 1.0));
        assert_eq!(bounds.max, DVec3::new(100.0, 50.0, 30.0));
        assert_eq!(bounds.as_array(), [0.0, 100.0, -5.0, 50.0, 1.0, 30.0]);
    }

    #[test]
    fn test_center_and_size() {
        let bounds = BoundingBox::from([0.0, 100.0, 0.0, 50.0, 0.0, 30.0]);
        assert_eq!(bounds.center(), DVec3::new(50.0, 25.0, 15.0));
        assert_eq!(bounds.size(), DVec3::new(100.0, 50.0, 30.0));
    }

    #[test]
    fn test_clamped_extents_degenerate() {
        let bounds = BoundingBox::new(0.0, 100.0, 0.0, 100.0, 0.0, 0.0);
        let extents = bounds.clamped_extents(1e-6);
        assert_eq!(extents, DVec3::new(100.0, 100.0, 1e-6));
    }

    #[test]
    fn test_from_points() {
        let bounds = BoundingBox::from_points([
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(-1.0, 5.0, 0.0),
            DVec3::new(0.5, -2.0, 7.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, DVec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, DVec3::new(1.0, 5.0, 7.0));

        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_union() {
        let a = BoundingBox::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0);
        let b = BoundingBox::new(-1.0, 0.5, 0.5, 2.0, 0.0, 3.0);
        let u = a.union(&b);
        assert_eq!(u.as_array(), [-1.0, 1.0, 0.0, 2.0, 0.0, 3.0]);
    }

    #[test]
    fn test_validate() {
        assert!(BoundingBox::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0).validate().is_ok());

        let inverted = BoundingBox::new(0.0, 1.0, 2.0, 1.0, 0.0, 1.0);
        assert!(matches!(
            inverted.validate(),
            Err(ThumbviewError::InvertedBounds { axis: 'y', .. })
        ));

        let nan = BoundingBox::new(f64::NAN, 1.0, 0.0, 1.0, 0.0, 1.0);
        assert!(matches!(
            nan.validate(),
            Err(ThumbviewError::NonFiniteBounds(_))
        ));
    }
}
