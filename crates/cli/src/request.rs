//! Loading request files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use u_loading_core::Dimensions;
use u_loading_d3::Container;

/// Errors that can occur when reading a loading request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    Invalid(#[from] u_loading_core::Error),
}

/// Container section of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    pub dimensions: Dimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
}

/// One pallet definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletSpec {
    pub dimensions: Dimensions,
}

/// A complete loading request: one container, pallet definitions and one box type.
///
/// ```json
/// {
///   "container": { "dimensions": { "width": 12, "height": 2.4, "depth": 2.4 }, "maxWeight": 1000 },
///   "pallets": [{ "dimensions": { "width": 1.2, "height": 0.15, "depth": 0.8 } }],
///   "box": { "width": 0.4, "height": 0.3, "depth": 0.5 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRequest {
    pub container: ContainerSpec,
    #[serde(default)]
    pub pallets: Vec<PalletSpec>,
    #[serde(rename = "box")]
    pub box_dims: Dimensions,
}

impl LoadRequest {
    /// Creates a request for a single pallet type.
    pub fn new(container: Container, pallet: Dimensions, box_dims: Dimensions) -> Self {
        Self {
            container: ContainerSpec {
                dimensions: *container.dimensions(),
                max_weight: container.max_weight(),
            },
            pallets: vec![PalletSpec { dimensions: pallet }],
            box_dims,
        }
    }

    /// Parses a request from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the container described by the request.
    pub fn container(&self) -> Container {
        let container = Container::from_dimensions(self.container.dimensions);
        match self.container.max_weight {
            Some(weight) => container.with_max_weight(weight),
            None => container,
        }
    }

    /// Returns the pallet dimensions in request order.
    pub fn pallet_dimensions(&self) -> Vec<Dimensions> {
        self.pallets.iter().map(|p| p.dimensions).collect()
    }

    /// Rejects degenerate dimensions and weight limits.
    ///
    /// An empty pallet list is left to the engine, which reports it.
    pub fn validate(&self) -> Result<(), RequestError> {
        self.container().validate()?;
        for pallet in &self.pallets {
            pallet.dimensions.validate()?;
        }
        self.box_dims.validate()?;
        Ok(())
    }
}
