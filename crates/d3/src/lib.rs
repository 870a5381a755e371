//! # U-Loading 3D
//!
//! Greedy container loading for the U-Loading engine.
//!
//! A single optimization call places pallets of one type in layers, finds the space left
//! beside and above them, and fills that space with boxes of one type. The scan order is
//! fixed and there is no backtracking, so the same inputs always give the same placement.
//!
//! ## Example
//!
//! ```
//! use u_loading_d3::{Container, Dimensions, Packer3D};
//!
//! let container = Container::new(4.0, 4.0, 4.0);
//! let pallet = Dimensions::new(2.0, 2.0, 2.0);
//! let box_dims = Dimensions::new(1.0, 1.0, 1.0);
//!
//! let result = Packer3D::default_config()
//!     .optimize(&container, &[pallet], &box_dims)
//!     .unwrap();
//! assert_eq!(result.pallets.len(), 8);
//! ```
//!
//! ## Modules
//!
//! - [`orientation`]: the fixed pallet and box orientation sets
//! - [`pallet_layer`]: layered pallet placement
//! - [`residual`]: side and above spaces left by the pallets
//! - [`infill`]: box grid infill of residual spaces
//! - [`metrics`]: volume and weight accounting
//! - [`estimate`]: quick grid-based capacity estimate

pub mod boundary;
pub mod estimate;
pub mod infill;
pub mod metrics;
pub mod orientation;
pub mod packer;
pub mod pallet_layer;
pub mod residual;

// Re-exports
pub use boundary::Container;
pub use estimate::{CapacityEstimate, QuickEstimator, STANDARD_PALLET};
pub use orientation::{BoxOrientation, PalletOrientation};
pub use packer::{optimize, Packer3D};
pub use residual::Space;
pub use u_loading_core::{
    Config, Dimensions, Error, ItemKind, PackingResult, PackingSummary, PlacedItem, Position,
    Result,
};
