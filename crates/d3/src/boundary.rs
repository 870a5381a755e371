//! Container (boundary) type.

use u_loading_core::geometry::{within_container, Dimensions, Position};
use u_loading_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular container anchored at the origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Container {
    /// Inner dimensions.
    dimensions: Dimensions,

    /// Maximum total weight. Informational only; placement never checks it.
    #[cfg_attr(feature = "serde", serde(default))]
    max_weight: Option<f64>,
}

impl Container {
    /// Creates a new container with the given inner dimensions.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self::from_dimensions(Dimensions::new(width, height, depth))
    }

    /// Creates a new container from dimensions.
    pub fn from_dimensions(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            max_weight: None,
        }
    }

    /// Sets the maximum allowed weight.
    pub fn with_max_weight(mut self, weight: f64) -> Self {
        self.max_weight = Some(weight);
        self
    }

    /// Returns the inner dimensions.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.width
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.height
    }

    /// Returns the depth.
    pub fn depth(&self) -> f64 {
        self.dimensions.depth
    }

    /// Returns the maximum weight.
    pub fn max_weight(&self) -> Option<f64> {
        self.max_weight
    }

    /// Returns the inner volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Checks whether an item stays inside the container, within `epsilon`.
    pub fn contains(&self, position: &Position, dimensions: &Dimensions, epsilon: f64) -> bool {
        within_container(position, dimensions, &self.dimensions, epsilon)
    }

    /// Validates the container.
    ///
    /// The engine itself accepts degenerate containers and simply places nothing; front ends
    /// call this to reject bad input before optimizing.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.is_degenerate() {
            return Err(Error::InvalidBoundary(format!(
                "All dimensions must be positive and finite, got {}",
                self.dimensions
            )));
        }

        if let Some(weight) = self.max_weight {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(Error::InvalidBoundary(
                    "Maximum weight must be positive".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_container_volume() {
        let container = Container::new(12.0, 2.4, 2.4);
        assert_relative_eq!(container.volume(), 69.12, epsilon = 1e-9);
    }

    #[test]
    fn test_max_weight() {
        let container = Container::new(4.0, 4.0, 4.0);
        assert_eq!(container.max_weight(), None);

        let container = container.with_max_weight(1000.0);
        assert_eq!(container.max_weight(), Some(1000.0));
    }

    #[test]
    fn test_contains() {
        let container = Container::new(4.0, 4.0, 4.0);
        let cube = Dimensions::new(2.0, 2.0, 2.0);
        assert!(container.contains(&Position::new(2.0, 2.0, 2.0), &cube, 0.001));
        assert!(!container.contains(&Position::new(2.5, 0.0, 0.0), &cube, 0.001));
    }

    #[test]
    fn test_validation() {
        assert!(Container::new(4.0, 4.0, 4.0).validate().is_ok());
        assert!(matches!(
            Container::new(-4.0, 4.0, 4.0).validate(),
            Err(Error::InvalidBoundary(_))
        ));
        assert!(Container::new(4.0, 4.0, 4.0)
            .with_max_weight(0.0)
            .validate()
            .is_err());
    }
}
