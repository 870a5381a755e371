//! Greedy pallet-then-box loading.

use crate::boundary::Container;
use crate::infill::place_boxes;
use crate::metrics::aggregate;
use crate::pallet_layer::place_pallets;
use crate::residual::find_residual_spaces;
use u_loading_core::geometry::Dimensions;
use u_loading_core::{Config, Error, PackingResult, Result};

/// Container loader running the layered pallet placement followed by box infill.
///
/// Every call owns its placement lists, so one packer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Packer3D {
    config: Config,
}

impl Packer3D {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads `container` with pallets of the first definition in `pallets`, then fills the
    /// remaining space with boxes of `box_dims`.
    ///
    /// Only the first pallet definition is used. Inputs that cannot hold anything, including
    /// non-positive dimensions, produce an empty result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `pallets` is empty and [`Error::ConfigError`]
    /// when the configuration is invalid.
    pub fn optimize(
        &self,
        container: &Container,
        pallets: &[Dimensions],
        box_dims: &Dimensions,
    ) -> Result<PackingResult> {
        self.config.validate()?;

        let (pallet_dims, ignored) = pallets.split_first().ok_or_else(Error::no_pallets)?;
        if !ignored.is_empty() {
            log::debug!(
                "Using pallet {} and ignoring {} further definitions",
                pallet_dims,
                ignored.len()
            );
        }

        let placed_pallets = place_pallets(container, pallet_dims, &self.config);
        let spaces = find_residual_spaces(container, &placed_pallets, self.config.epsilon);
        let placed_boxes = place_boxes(&spaces, box_dims, &placed_pallets, &self.config);

        let result = aggregate(container, placed_pallets, placed_boxes);

        log::debug!(
            "Loaded {} pallets and {} boxes into {}: {} used, {:.3} unused, weight {}",
            result.pallets.len(),
            result.boxes.len(),
            container.dimensions(),
            result.utilization_percent(),
            result.unused_space,
            result.total_weight
        );

        Ok(result)
    }
}

/// Runs [`Packer3D::optimize`] with the default configuration.
pub fn optimize(
    container: &Container,
    pallets: &[Dimensions],
    box_dims: &Dimensions,
) -> Result<PackingResult> {
    Packer3D::default_config().optimize(container, pallets, box_dims)
}
