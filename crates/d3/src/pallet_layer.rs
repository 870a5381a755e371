//! Layered pallet placement.
//!
//! Pallets are packed shelf by shelf: layers stack along Y in steps of the base pallet
//! height, and each layer is scanned column by column along X and, within a column, along Z.
//! At every cursor position the narrowest orientation that fits is taken.
//!
//! # Algorithm
//!
//! 1. Sort the six pallet orientations by width (stable).
//! 2. For each layer `y = 0, h, 2h, ...` while `y <= H - h`:
//!    - move an X cursor from 0 while `x <= W - min(w, d)`;
//!    - at each X, move a Z cursor from 0 while `z <= D - d`, placing the first orientation
//!      that stays inside the container and overlaps no placed pallet, then stepping Z by its
//!      depth;
//!    - a column where nothing fits at `z = 0` is skipped by two strides of `min(w, d)`;
//!    - otherwise X steps by the width of the first pallet found at this `(x, y)`.
//!
//! The scan never revisits a position and never backtracks; that sub-optimality is part of
//! the heuristic's observable behavior.

use crate::boundary::Container;
use crate::orientation::PalletOrientation;
use u_loading_core::geometry::{Dimensions, Position};
use u_loading_core::placement::{collides, PlacedItem};
use u_loading_core::Config;

/// Places as many pallets of `base` dimensions as the layered scan finds room for.
///
/// Returns the pallets in placement order. Degenerate inputs yield no pallets.
pub fn place_pallets(container: &Container, base: &Dimensions, config: &Config) -> Vec<PlacedItem> {
    let mut placed: Vec<PlacedItem> = Vec::new();

    if base.is_degenerate() || container.dimensions().is_degenerate() {
        log::warn!(
            "Skipping pallet placement for degenerate input (pallet {}, container {})",
            base,
            container.dimensions()
        );
        return placed;
    }

    let mut orientations = PalletOrientation::candidates(base);
    orientations.sort_by(|a, b| a.1.width.total_cmp(&b.1.width));

    let x_stride = base.width.min(base.depth);
    let mut layers = 0usize;

    let mut y = 0.0;
    while y <= container.height() - base.height {
        let mut x = 0.0;

        while x <= container.width() - x_stride {
            let mut z = 0.0;

            while z <= container.depth() - base.depth {
                let position = Position::new(x, y, z);
                let fit = orientations.iter().find(|(_, dims)| {
                    x + dims.width <= container.width()
                        && can_place(&position, dims, container, &placed, config.epsilon)
                });

                match fit {
                    Some((orientation, dims)) => {
                        placed.push(
                            PlacedItem::pallet(*dims, position, config.pallet_weight)
                                .with_orientation(orientation.index()),
                        );
                        z += dims.depth;
                    }
                    None => {
                        if z == 0.0 {
                            x += x_stride;
                        }
                        break;
                    }
                }
            }

            if z == 0.0 {
                x += x_stride;
            } else {
                x += column_stride(&placed, x, y).unwrap_or(x_stride);
            }
        }

        layers += 1;
        y += base.height;
    }

    log::debug!(
        "Placed {} pallets of {} across {} layers",
        placed.len(),
        base,
        layers
    );

    placed
}

/// Width of the first placed pallet at this `(x, y)`, used as the step to the next column.
fn column_stride(placed: &[PlacedItem], x: f64, y: f64) -> Option<f64> {
    placed
        .iter()
        .find(|p| p.position.x == x && p.position.y == y)
        .map(|p| p.dimensions.width)
}

fn can_place(
    position: &Position,
    dimensions: &Dimensions,
    container: &Container,
    placed: &[PlacedItem],
    epsilon: f64,
) -> bool {
    container.contains(position, dimensions, epsilon) && !collides(position, dimensions, placed)
}
