//! # U-Loading
//!
//! Greedy container loading engine.
//!
//! Pallets of one type are placed in layers inside a rectangular container; the space left
//! beside and above them is then filled with boxes of one type. The result carries both
//! placement lists with volume, weight and utilization figures.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_loading::d3::{Container, Packer3D};
//! use u_loading::{Config, Dimensions};
//!
//! let packer = Packer3D::new(Config::default());
//! let result = packer
//!     .optimize(
//!         &Container::new(5.0, 2.0, 2.0),
//!         &[Dimensions::new(2.0, 2.0, 2.0)],
//!         &Dimensions::new(1.0, 1.0, 1.0),
//!     )
//!     .unwrap();
//!
//! assert_eq!(result.pallets.len(), 2);
//! assert_eq!(result.boxes.len(), 4);
//! ```
//!
//! ## Feature Flags
//!
//! - `d3` (default): the placement engine and quick estimator
//! - `serde`: Serialization support

/// Core types and geometry primitives.
pub use u_loading_core as core;

/// Container loading algorithms.
#[cfg(feature = "d3")]
pub use u_loading_d3 as d3;

// Re-export commonly used types at root level
pub use u_loading_core::{Config, Dimensions, Error, PackingResult, PlacedItem, Position, Result};

#[cfg(feature = "d3")]
pub use u_loading_d3::{optimize, Container, Packer3D};
