//! Engine configuration.

use crate::geometry::EPSILON;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weight attached to every placed pallet instance, regardless of its size.
pub const DEFAULT_PALLET_WEIGHT: f64 = 30.0;

/// Weight attached to every placed box instance, regardless of its size.
pub const DEFAULT_BOX_WEIGHT: f64 = 5.0;

/// Common configuration for the placement engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Config {
    /// Tolerance for container containment and residual gap detection.
    pub epsilon: f64,

    /// Weight recorded for each placed pallet.
    pub pallet_weight: f64,

    /// Weight recorded for each placed box.
    pub box_weight: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            pallet_weight: DEFAULT_PALLET_WEIGHT,
            box_weight: DEFAULT_BOX_WEIGHT,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the containment tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the per-pallet weight.
    pub fn with_pallet_weight(mut self, weight: f64) -> Self {
        self.pallet_weight = weight;
        self
    }

    /// Sets the per-box weight.
    pub fn with_box_weight(mut self, weight: f64) -> Self {
        self.box_weight = weight;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::ConfigError(format!(
                "Epsilon must be a non-negative finite number, got {}",
                self.epsilon
            )));
        }

        for (name, weight) in [("pallet", self.pallet_weight), ("box", self.box_weight)] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::ConfigError(format!(
                    "The {} weight must be a non-negative finite number, got {}",
                    name, weight
                )));
            }
        }

        Ok(())
    }
}
