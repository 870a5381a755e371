//! Residual spaces left beside and above the placed pallets.

use crate::boundary::Container;
use u_loading_core::geometry::{Dimensions, Position};
use u_loading_core::placement::PlacedItem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned sub-volume of the container that is a candidate for box infill.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Space {
    /// Minimum corner.
    pub origin: Position,
    /// Extent.
    pub dimensions: Dimensions,
}

impl Space {
    /// Creates a new space.
    pub fn new(origin: Position, dimensions: Dimensions) -> Self {
        Self { origin, dimensions }
    }

    /// Far X coordinate.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.dimensions.width
    }

    /// Far Y coordinate.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.dimensions.height
    }

    /// Far Z coordinate.
    pub fn max_z(&self) -> f64 {
        self.origin.z + self.dimensions.depth
    }

    /// Checks whether an item at `position` ends inside this space on every axis.
    ///
    /// No tolerance is applied.
    pub fn fits(&self, position: &Position, dimensions: &Dimensions) -> bool {
        position.x + dimensions.width <= self.max_x()
            && position.y + dimensions.height <= self.max_y()
            && position.z + dimensions.depth <= self.max_z()
    }
}

/// Merges the X extents of `pallets` into sorted, non-overlapping intervals.
fn merged_x_intervals(pallets: &[PlacedItem], epsilon: f64) -> Vec<(f64, f64)> {
    let mut ranges: Vec<(f64, f64)> = pallets.iter().map(|p| (p.position.x, p.right())).collect();
    ranges.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut merged: Vec<(f64, f64)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 + epsilon => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Finds the full-height, full-depth slabs along X that no pallet touches.
///
/// Emits the gap before the first pallet interval, the gaps between intervals and the gap
/// after the last one, ignoring gaps no wider than `epsilon`. No pallets, no side spaces.
pub fn find_side_spaces(container: &Container, pallets: &[PlacedItem], epsilon: f64) -> Vec<Space> {
    let intervals = merged_x_intervals(pallets, epsilon);
    let (Some(first), Some(last)) = (intervals.first(), intervals.last()) else {
        return Vec::new();
    };

    let slab = |x: f64, width: f64| {
        Space::new(
            Position::new(x, 0.0, 0.0),
            Dimensions::new(width, container.height(), container.depth()),
        )
    };

    let mut spaces = Vec::new();

    if first.0 > epsilon {
        spaces.push(slab(0.0, first.0));
    }

    for pair in intervals.windows(2) {
        let gap = pair[1].0 - pair[0].1;
        if gap > epsilon {
            spaces.push(slab(pair[0].1, gap));
        }
    }

    if last.1 < container.width() - epsilon {
        spaces.push(slab(last.1, container.width() - last.1));
    }

    spaces
}

/// Finds the single space above the pallet stack.
///
/// It spans from the highest pallet top to the container ceiling, over the X range covered
/// by pallets and the full container depth. Returns `None` without pallets or headroom.
pub fn find_above_space(
    container: &Container,
    pallets: &[PlacedItem],
    epsilon: f64,
) -> Option<Space> {
    if pallets.is_empty() {
        return None;
    }

    let top = pallets.iter().map(PlacedItem::top).fold(f64::MIN, f64::max);
    let min_x = pallets.iter().map(|p| p.position.x).fold(f64::MAX, f64::min);
    let max_x = pallets.iter().map(PlacedItem::right).fold(f64::MIN, f64::max);

    let height = container.height() - top;
    if height <= epsilon {
        return None;
    }

    Some(Space::new(
        Position::new(min_x, top, 0.0),
        Dimensions::new(max_x - min_x, height, container.depth()),
    ))
}

/// Collects the residual spaces for box infill: side spaces first, then the space above.
///
/// The two kinds may overlap; they are not de-duplicated.
pub fn find_residual_spaces(
    container: &Container,
    pallets: &[PlacedItem],
    epsilon: f64,
) -> Vec<Space> {
    let mut spaces = find_side_spaces(container, pallets, epsilon);
    spaces.extend(find_above_space(container, pallets, epsilon));

    log::debug!(
        "Found {} residual spaces around {} pallets",
        spaces.len(),
        pallets.len()
    );

    spaces
}
