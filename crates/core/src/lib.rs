//! # U-Loading Core
//!
//! Core types and geometry primitives for the U-Loading container loading engine.
//!
//! This crate provides the foundational types shared by the placement engine and its
//! front ends.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Dimensions`], [`Position`], [`Aabb3D`], [`overlaps`], [`within_container`]
//! - **Placement**: [`PlacedItem`], [`ItemKind`], [`PlacementStats`]
//! - **Result**: [`PackingResult`], [`PackingSummary`]
//! - **Configuration**: [`Config`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;

// Re-exports
pub use config::{Config, DEFAULT_BOX_WEIGHT, DEFAULT_PALLET_WEIGHT};
pub use error::{Error, Result};
pub use geometry::{overlaps, within_container, Aabb3D, Dimensions, Position, EPSILON};
pub use placement::{collides, ItemKind, PlacedItem, PlacementStats};
pub use result::{PackingResult, PackingSummary};
