//! Greedy box infill of residual spaces.

use crate::orientation::BoxOrientation;
use crate::residual::Space;
use u_loading_core::geometry::{Dimensions, Position};
use u_loading_core::placement::{collides, PlacedItem};
use u_loading_core::Config;

/// Fills `spaces` with boxes of `base` dimensions on a grid.
///
/// Spaces are visited in order and share one placement list, so a box placed in an earlier
/// space blocks cells of a later, overlapping one. Each space is scanned along Y, then X,
/// then Z, stepping by the base box edges; at each cell the first orientation that stays in
/// the space and hits neither a pallet nor a placed box is taken.
pub fn place_boxes(
    spaces: &[Space],
    base: &Dimensions,
    pallets: &[PlacedItem],
    config: &Config,
) -> Vec<PlacedItem> {
    let mut boxes: Vec<PlacedItem> = Vec::new();

    if base.is_degenerate() {
        log::warn!("Skipping box infill for degenerate box {}", base);
        return boxes;
    }

    let orientations = BoxOrientation::candidates(base);

    for space in spaces {
        let before = boxes.len();

        let mut y = space.origin.y;
        while y <= space.max_y() - base.height {
            let mut x = space.origin.x;
            while x <= space.max_x() - base.width {
                let mut z = space.origin.z;
                while z <= space.max_z() - base.depth {
                    let position = Position::new(x, y, z);
                    let fit = orientations.iter().find(|(_, dims)| {
                        space.fits(&position, dims)
                            && !collides(&position, dims, pallets)
                            && !collides(&position, dims, &boxes)
                    });

                    if let Some((orientation, dims)) = fit {
                        boxes.push(
                            PlacedItem::boxed(*dims, position, config.box_weight)
                                .with_orientation(orientation.index()),
                        );
                    }

                    z += base.depth;
                }
                x += base.width;
            }
            y += base.height;
        }

        log::debug!(
            "Placed {} boxes in space at ({}, {}, {}) of {}",
            boxes.len() - before,
            space.origin.x,
            space.origin.y,
            space.origin.z,
            space.dimensions
        );
    }

    boxes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Dimensions {
        Dimensions::new(1.0, 1.0, 1.0)
    }

    #[test]
    fn test_fills_single_space() {
        let space = Space::new(Position::new(4.0, 0.0, 0.0), Dimensions::new(1.0, 2.0, 2.0));
        let boxes = place_boxes(&[space], &unit(), &[], &Config::default());

        let positions: Vec<Position> = boxes.iter().map(|b| b.position).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(4.0, 0.0, 0.0),
                Position::new(4.0, 0.0, 1.0),
                Position::new(4.0, 1.0, 0.0),
                Position::new(4.0, 1.0, 1.0),
            ]
        );
        for b in &boxes {
            assert_eq!(b.weight, 5.0);
            assert_eq!(b.orientation, Some(BoxOrientation::Original.index()));
        }
    }

    #[test]
    fn test_pallets_block_cells() {
        let space = Space::new(Position::origin(), Dimensions::new(2.0, 1.0, 1.0));
        let pallets = vec![PlacedItem::pallet(unit(), Position::origin(), 30.0)];

        let boxes = place_boxes(&[space], &unit(), &pallets, &Config::default());
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].position, Position::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_overlapping_spaces_share_placements() {
        let space = Space::new(Position::origin(), Dimensions::new(1.0, 1.0, 1.0));
        let boxes = place_boxes(&[space, space], &unit(), &[], &Config::default());
        assert_eq!(boxes.len(), 1);
    }

    #[test]
    fn test_falls_back_to_turned_orientation() {
        // The original (1, 1, 2) runs into the pallet, so the turned (2, 1, 1) is taken.
        // It then covers the next column as well.
        let space = Space::new(Position::origin(), Dimensions::new(2.0, 1.0, 2.0));
        let base = Dimensions::new(1.0, 1.0, 2.0);
        let pallets = vec![PlacedItem::pallet(
            Dimensions::new(1.0, 1.0, 1.0),
            Position::new(0.0, 0.0, 1.0),
            30.0,
        )];

        let boxes = place_boxes(&[space], &base, &pallets, &Config::default());
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].position, Position::origin());
        assert_eq!(boxes[0].dimensions, Dimensions::new(2.0, 1.0, 1.0));
        assert_eq!(boxes[0].orientation, Some(BoxOrientation::Turned.index()));
    }

    #[test]
    fn test_box_larger_than_space() {
        let space = Space::new(Position::origin(), Dimensions::new(1.0, 1.0, 1.0));
        let boxes = place_boxes(
            &[space],
            &Dimensions::new(2.0, 1.0, 1.0),
            &[],
            &Config::default(),
        );
        assert!(boxes.is_empty());
    }

    #[test]
    fn test_degenerate_box_places_nothing() {
        let space = Space::new(Position::origin(), Dimensions::new(4.0, 4.0, 4.0));
        let boxes = place_boxes(
            &[space],
            &Dimensions::new(0.0, 1.0, 1.0),
            &[],
            &Config::default(),
        );
        assert!(boxes.is_empty());
    }
}
