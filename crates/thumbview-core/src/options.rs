//! Tunable constants for the view optimizer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThumbviewError};

/// Configuration options for [`ViewOptimizer`](crate::ViewOptimizer).
///
/// The defaults reproduce the stock thumbnail heuristic. The preference
/// bonuses are aesthetic tie-breakers, not derived quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerOptions {
    /// Camera distance as a multiple of the bounding-sphere radius.
    pub framing_factor: f64,

    /// Smallest extent used for any axis; flat meshes are clamped to this.
    pub min_extent: f64,

    /// Score multiplier for the front view.
    pub front_bonus: f64,

    /// Score multiplier for the right view.
    pub right_bonus: f64,

    /// On exact score ties, pick the front view.
    pub prefer_front: bool,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            framing_factor: 2.5,
            min_extent: 1e-6,
            front_bonus: 1.05,
            right_bonus: 1.03,
            prefer_front: true,
        }
    }
}

impl OptimizerOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the framing factor.
    pub fn with_framing_factor(mut self, framing_factor: f64) -> Self {
        self.framing_factor = framing_factor;
        self
    }

    /// Sets the minimum extent.
    pub fn with_min_extent(mut self, min_extent: f64) -> Self {
        self.min_extent = min_extent;
        self
    }

    /// Sets the front and right preference multipliers.
    pub fn with_bonuses(mut self, front_bonus: f64, right_bonus: f64) -> Self {
        self.front_bonus = front_bonus;
        self.right_bonus = right_bonus;
        self
    }

    /// Sets the tie-break flag.
    pub fn with_prefer_front(mut self, prefer_front: bool) -> Self {
        self.prefer_front = prefer_front;
        self
    }

    /// Checks that every numeric option is finite and positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("framing_factor", self.framing_factor),
            ("min_extent", self.min_extent),
            ("front_bonus", self.front_bonus),
            ("right_bonus", self.right_bonus),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ThumbviewError::InvalidOption { name, value });
            }
        }
        Ok(())
    }

    /// Parses and validates options from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
