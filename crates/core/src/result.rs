//! Packing result representation.

use crate::placement::{PlacedItem, PlacementStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one optimization call.
///
/// `unused_space`, `total_weight` and `utilization_percentage` are derived from the two
/// item lists and the container volume when the result is built.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PackingResult {
    /// Placed pallets, in placement order.
    pub pallets: Vec<PlacedItem>,

    /// Placed boxes, in placement order.
    pub boxes: Vec<PlacedItem>,

    /// Container volume not occupied by any placed item.
    pub unused_space: f64,

    /// Sum of the per-instance weights of all placed items.
    pub total_weight: f64,

    /// Occupied share of the container volume, in percent. Not clamped.
    pub utilization_percentage: f64,
}

impl PackingResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over all placed items, pallets first.
    pub fn items(&self) -> impl Iterator<Item = &PlacedItem> {
        self.pallets.iter().chain(self.boxes.iter())
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.pallets.len() + self.boxes.len()
    }

    /// Returns true if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.pallets.is_empty() && self.boxes.is_empty()
    }

    /// Returns the summed volume of all placed items.
    pub fn used_volume(&self) -> f64 {
        self.items().map(PlacedItem::volume).sum()
    }

    /// Returns true if the placed weight is above `max_weight`.
    ///
    /// The engine never enforces the container's weight limit; this is for display.
    pub fn exceeds_weight(&self, max_weight: f64) -> bool {
        self.total_weight > max_weight
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization_percentage)
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_items(self.items())
    }
}

/// Summary statistics for a packing result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PackingSummary {
    /// Number of placed pallets.
    pub pallet_count: usize,
    /// Number of placed boxes.
    pub box_count: usize,
    /// Utilization percentage.
    pub utilization_percentage: f64,
    /// Unused container volume.
    pub unused_space: f64,
    /// Total placed weight.
    pub total_weight: f64,
}

impl From<&PackingResult> for PackingSummary {
    fn from(result: &PackingResult) -> Self {
        Self {
            pallet_count: result.pallets.len(),
            box_count: result.boxes.len(),
            utilization_percentage: result.utilization_percentage,
            unused_space: result.unused_space,
            total_weight: result.total_weight,
        }
    }
}
