//! Selection of a presentable orthogonal camera for a mesh thumbnail.
//!
//! The optimizer looks at the mesh's axis-aligned bounding box from five
//! canonical directions (front, right, back, left, top) and scores each one by
//! the area of the box face it sees, damped by how far that face is from
//! square. Small multipliers bias the result toward the front and right views
//! when the geometry is symmetric.
//!
//! This is a projection heuristic only: occlusion, concavity and the real
//! rendered silhouette are ignored.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::camera::CameraParameters;
use crate::error::{Result, ThumbviewError};
use crate::options::OptimizerOptions;
use crate::view::OrthoView;

/// Score breakdown for one candidate view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredView {
    /// The view that was scored.
    pub view: OrthoView,
    /// Area of the box face seen from this view.
    pub raw_area: f64,
    /// Width / height of that face.
    pub aspect_ratio: f64,
    /// Aspect balance multiplier in `(0, 1]`.
    pub aspect_penalty: f64,
    /// Preference multiplier for this view.
    pub preference: f64,
    /// Final score: `raw_area * aspect_penalty * preference`.
    pub score: f64,
}

/// Penalty for elongated faces.
///
/// Returns `1 / (1 + |a - 1|)` where `a` is the aspect ratio folded to be at
/// least 1, so `r` and `1 / r` are penalized identically and a square face
/// scores exactly 1.
#[must_use]
pub fn aspect_penalty(aspect: f64) -> f64 {
    let folded = if aspect >= 1.0 { aspect } else { 1.0 / aspect };
    1.0 / (1.0 + (folded - 1.0).abs())
}

/// Picks the best orthogonal thumbnail camera for `bounds` using default options.
///
/// Never fails: if scoring cannot produce a view, a front view framed the same
/// way is returned instead.
///
/// # Example
///
/// ```
/// use thumbview_core::{find_best_orthogonal_view, OrthoView};
///
/// let camera = find_best_orthogonal_view([0.0, 100.0, 0.0, 50.0, 0.0, 30.0], true);
/// assert_eq!(camera.view_name, OrthoView::Top);
/// ```
pub fn find_best_orthogonal_view(
    bounds: impl Into<BoundingBox>,
    prefer_front: bool,
) -> CameraParameters {
    ViewOptimizer::default().find_best_view(&bounds.into(), prefer_front)
}

/// Stateless thumbnail view optimizer.
///
/// Holds only its options, so one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewOptimizer {
    options: OptimizerOptions,
}

impl ViewOptimizer {
    /// Creates an optimizer with the given options.
    pub fn new(options: OptimizerOptions) -> Self {
        Self { options }
    }

    /// Returns the optimizer's options.
    pub fn options(&self) -> &OptimizerOptions {
        &self.options
    }

    /// Picks the best view using the configured tie-break preference.
    pub fn find(&self, bounds: &BoundingBox) -> CameraParameters {
        self.find_best_view(bounds, self.options.prefer_front)
    }

    /// Picks the best view, falling back to [`Self::default_front_view`] if the
    /// scoring path fails.
    pub fn find_best_view(&self, bounds: &BoundingBox, prefer_front: bool) -> CameraParameters {
        match self.try_find_best_view(bounds, prefer_front) {
            Ok(camera) => {
                log::info!(
                    "selected {} view at distance {:.3}",
                    camera.view_name,
                    camera.distance
                );
                camera
            }
            Err(err) => {
                log::warn!("view optimization failed ({err}), using front view");
                self.default_front_view(bounds)
            }
        }
    }

    /// Runs the scoring path and reports failure instead of falling back.
    ///
    /// The highest score wins. On an exact tie the earlier candidate is kept,
    /// unless `prefer_front` is set and the later one is the front view.
    #[allow(clippy::float_cmp)] // ties are exact by definition
    pub fn try_find_best_view(
        &self,
        bounds: &BoundingBox,
        prefer_front: bool,
    ) -> Result<CameraParameters> {
        self.options.validate()?;
        // Inverted axes are allowed here; they clamp to `min_extent`
        if !bounds.is_finite() {
            return Err(ThumbviewError::NonFiniteBounds(format!(
                "{:?}",
                bounds.as_array()
            )));
        }

        let candidates = self.generate_candidates(bounds);
        if let Some(bad) = candidates
            .iter()
            .find(|c| !c.position.is_finite() || !c.distance.is_finite())
        {
            return Err(ThumbviewError::NonFiniteBounds(format!(
                "{} camera at {:?}, distance {}",
                bad.view_name, bad.position, bad.distance
            )));
        }

        let extents = bounds.clamped_extents(self.options.min_extent);
        let mut best: Option<(CameraParameters, f64)> = None;

        for candidate in candidates {
            let scored = self.score_view(candidate.view_name, extents);
            log::debug!(
                "{} view: area {:.6} aspect {:.4} penalty {:.4} score {:.6}",
                scored.view,
                scored.raw_area,
                scored.aspect_ratio,
                scored.aspect_penalty,
                scored.score
            );
            if !scored.score.is_finite() {
                return Err(ThumbviewError::NonFiniteBounds(format!(
                    "{} view scored {}",
                    scored.view, scored.score
                )));
            }

            let replace = match best {
                None => true,
                Some((_, best_score)) => {
                    scored.score > best_score
                        || (prefer_front
                            && scored.score == best_score
                            && candidate.view_name == OrthoView::Front)
                }
            };
            if replace {
                best = Some((candidate, scored.score));
            }
        }

        best.map(|(camera, _)| camera).ok_or(ThumbviewError::NoCandidate)
    }

    /// Builds the five candidate cameras, in [`OrthoView::ALL`] order.
    pub fn generate_candidates(&self, bounds: &BoundingBox) -> [CameraParameters; 5] {
        let (center, distance) = self.framing(bounds);
        OrthoView::ALL.map(|view| CameraParameters::for_view(view, center, distance))
    }

    /// Scores one view given the clamped box extents.
    pub fn score_view(&self, view: OrthoView, extents: DVec3) -> ScoredView {
        let (width, height) = view.projected_extents(extents);
        let raw_area = width * height;
        let aspect_ratio = width / height;
        let penalty = aspect_penalty(aspect_ratio);
        let preference = match view {
            OrthoView::Front => self.options.front_bonus,
            OrthoView::Right => self.options.right_bonus,
            _ => 1.0,
        };

        ScoredView {
            view,
            raw_area,
            aspect_ratio,
            aspect_penalty: penalty,
            preference,
            score: raw_area * penalty * preference,
        }
    }

    /// Scores all five views for `bounds`, in [`OrthoView::ALL`] order.
    pub fn evaluate_views(&self, bounds: &BoundingBox) -> [ScoredView; 5] {
        let extents = bounds.clamped_extents(self.options.min_extent);
        OrthoView::ALL.map(|view| self.score_view(view, extents))
    }

    /// Scores all five views and sorts them best first.
    ///
    /// The sort is stable, so equal scores stay in evaluation order.
    pub fn rank_views(&self, bounds: &BoundingBox) -> Vec<ScoredView> {
        let mut ranked = self.evaluate_views(bounds).to_vec();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Front view framed like the candidates, without any scoring.
    pub fn default_front_view(&self, bounds: &BoundingBox) -> CameraParameters {
        let (center, distance) = self.framing(bounds);
        CameraParameters::for_view(OrthoView::Front, center, distance)
    }

    /// Returns the focal point and camera distance shared by every candidate.
    fn framing(&self, bounds: &BoundingBox) -> (DVec3, f64) {
        let extents = bounds.clamped_extents(self.options.min_extent);
        let mut length = extents.length();
        if length.is_infinite() {
            // Squares overflowed; rescale so finite extents keep a finite length
            let scale = extents.max_element();
            if scale.is_finite() {
                length = scale * (extents / scale).length();
            }
        }
        (bounds.center(), 0.5 * length * self.options.framing_factor)
    }
}
