//! Placed items inside a container.

use crate::geometry::{Aabb3D, Dimensions, Position};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The tier an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemKind {
    /// Packed directly against the container, in layers.
    Pallet,
    /// Packed into the space left around and above the pallets.
    Box,
}

/// A pallet or box at its final position and orientation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// Item tier.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ItemKind,

    /// Edge lengths after the orientation was applied.
    pub dimensions: Dimensions,

    /// Minimum corner.
    pub position: Position,

    /// Weight attached to this instance.
    pub weight: f64,

    /// Index of the enumerated orientation used, if known.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub orientation: Option<usize>,
}

impl PlacedItem {
    /// Creates a new placed item.
    pub fn new(kind: ItemKind, dimensions: Dimensions, position: Position, weight: f64) -> Self {
        Self {
            kind,
            dimensions,
            position,
            weight,
            orientation: None,
        }
    }

    /// Creates a placed pallet.
    pub fn pallet(dimensions: Dimensions, position: Position, weight: f64) -> Self {
        Self::new(ItemKind::Pallet, dimensions, position, weight)
    }

    /// Creates a placed box.
    pub fn boxed(dimensions: Dimensions, position: Position, weight: f64) -> Self {
        Self::new(ItemKind::Box, dimensions, position, weight)
    }

    /// Sets the orientation index.
    pub fn with_orientation(mut self, index: usize) -> Self {
        self.orientation = Some(index);
        self
    }

    /// Returns the occupied box.
    pub fn aabb(&self) -> Aabb3D {
        Aabb3D::from_placement(&self.position, &self.dimensions)
    }

    /// Returns the occupied volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Returns the Y coordinate of the top face.
    pub fn top(&self) -> f64 {
        self.position.y + self.dimensions.height
    }

    /// Returns the X coordinate of the far face.
    pub fn right(&self) -> f64 {
        self.position.x + self.dimensions.width
    }

    /// Checks whether this item intersects another with positive volume.
    pub fn overlaps(&self, other: &PlacedItem) -> bool {
        self.aabb().overlaps(&other.aabb())
    }

    /// Checks whether an item of `dimensions` at `position` would intersect this one.
    pub fn blocks(&self, position: &Position, dimensions: &Dimensions) -> bool {
        self.aabb()
            .overlaps(&Aabb3D::from_placement(position, dimensions))
    }
}

/// Checks whether a candidate intersects any of `placed`.
pub fn collides(position: &Position, dimensions: &Dimensions, placed: &[PlacedItem]) -> bool {
    placed.iter().any(|item| item.blocks(position, dimensions))
}

/// Placement statistics for a set of placed items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementStats {
    /// Total number of placed items.
    pub count: usize,
    /// Number of items per tier.
    pub kind_distribution: BTreeMap<ItemKind, usize>,
    /// Number of items per (tier, orientation index).
    pub orientation_distribution: BTreeMap<(ItemKind, usize), usize>,
}

impl PlacementStats {
    /// Computes statistics from a set of placed items.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a PlacedItem>) -> Self {
        let mut stats = Self::default();

        for item in items {
            stats.count += 1;
            *stats.kind_distribution.entry(item.kind).or_insert(0) += 1;

            if let Some(index) = item.orientation {
                *stats
                    .orientation_distribution
                    .entry((item.kind, index))
                    .or_insert(0) += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placed_item_extents() {
        let item = PlacedItem::pallet(
            Dimensions::new(1.2, 0.15, 0.8),
            Position::new(1.0, 0.3, 0.0),
            30.0,
        );
        assert_eq!(item.kind, ItemKind::Pallet);
        assert!((item.top() - 0.45).abs() < 1e-12);
        assert!((item.right() - 2.2).abs() < 1e-12);
        assert!(item.orientation.is_none());
    }

    #[test]
    fn test_collides() {
        let dims = Dimensions::new(1.0, 1.0, 1.0);
        let placed = vec![
            PlacedItem::pallet(dims, Position::origin(), 30.0),
            PlacedItem::boxed(dims, Position::new(1.0, 0.0, 0.0), 5.0),
        ];

        assert!(collides(&Position::new(0.5, 0.0, 0.0), &dims, &placed));
        assert!(!collides(&Position::new(2.0, 0.0, 0.0), &dims, &placed));
        assert!(!collides(&Position::new(0.0, 1.0, 0.0), &dims, &placed));
        assert!(placed[0].overlaps(&placed[0]));
        assert!(!placed[0].overlaps(&placed[1]));
    }

    #[test]
    fn test_placement_stats() {
        let dims = Dimensions::new(1.0, 1.0, 1.0);
        let items = vec![
            PlacedItem::pallet(dims, Position::origin(), 30.0).with_orientation(0),
            PlacedItem::pallet(dims, Position::new(1.0, 0.0, 0.0), 30.0).with_orientation(1),
            PlacedItem::boxed(dims, Position::new(2.0, 0.0, 0.0), 5.0).with_orientation(0),
            PlacedItem::boxed(dims, Position::new(3.0, 0.0, 0.0), 5.0),
        ];

        let stats = PlacementStats::from_items(&items);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.kind_distribution.get(&ItemKind::Pallet), Some(&2));
        assert_eq!(stats.kind_distribution.get(&ItemKind::Box), Some(&2));
        assert_eq!(
            stats.orientation_distribution.get(&(ItemKind::Pallet, 1)),
            Some(&1)
        );
        assert_eq!(
            stats.orientation_distribution.get(&(ItemKind::Box, 0)),
            Some(&1)
        );
    }
}
