//! Integration tests for u-loading-core.

use u_loading_core::geometry::{overlaps, within_container, Aabb3D, Dimensions, Position};
use u_loading_core::placement::{collides, ItemKind, PlacedItem, PlacementStats};
use u_loading_core::result::{PackingResult, PackingSummary};
use u_loading_core::{Config, Error};

mod aabb_tests {
    use super::*;

    #[test]
    fn test_aabb_from_placement() {
        let aabb = Aabb3D::from_placement(
            &Position::new(1.0, 2.0, 3.0),
            &Dimensions::new(4.0, 5.0, 6.0),
        );

        assert!((aabb.min.x - 1.0).abs() < 1e-10);
        assert!((aabb.max.x - 5.0).abs() < 1e-10);
        assert!((aabb.max.y - 7.0).abs() < 1e-10);
        assert!((aabb.max.z - 9.0).abs() < 1e-10);
        assert!((aabb.volume() - 120.0).abs() < 1e-10);
    }

    #[test]
    fn test_aabb_fits_within() {
        let corner = Position::new(5.0, 5.0, 5.0);
        let room = Dimensions::new(10.0, 10.0, 10.0);
        let bounds = Aabb3D::from_placement(&Position::origin(), &room);
        let inner = Aabb3D::from_placement(&corner, &Dimensions::new(5.0, 5.0, 5.0));
        let outer = Aabb3D::from_placement(&corner, &Dimensions::new(6.0, 5.0, 5.0));

        assert!(inner.fits_within(&bounds, 0.0));
        assert!(!outer.fits_within(&bounds, 0.001));
        assert!(outer.fits_within(&bounds, 1.0));
    }

    #[test]
    fn test_overlap_separating_axes() {
        let cube = Dimensions::new(1.0, 1.0, 1.0);
        let origin = Position::origin();

        // Separated on exactly one axis each.
        for offset in [
            Position::new(1.0, 0.5, 0.5),
            Position::new(0.5, 1.0, 0.5),
            Position::new(0.5, 0.5, 1.0),
            Position::new(-1.0, 0.0, 0.0),
        ] {
            assert!(!overlaps(&origin, &cube, &offset, &cube), "{:?}", offset);
        }

        // Identical boxes overlap.
        assert!(overlaps(&origin, &cube, &origin, &cube));

        // A thin slab crossing the cube overlaps.
        let slab = Dimensions::new(3.0, 0.1, 3.0);
        assert!(overlaps(&origin, &cube, &Position::new(-1.0, 0.5, -1.0), &slab));
    }

    #[test]
    fn test_within_container_tolerance() {
        let container = Dimensions::new(12.0, 2.4, 2.4);
        let pallet = Dimensions::new(1.2, 0.15, 0.8);

        assert!(within_container(&Position::new(10.8, 2.25, 1.6), &pallet, &container, 0.001));
        assert!(!within_container(&Position::new(10.9, 2.25, 1.6), &pallet, &container, 0.001));
        assert!(within_container(&Position::new(10.9, 2.25, 1.6), &pallet, &container, 0.2));
    }
}

mod placement_tests {
    use super::*;

    #[test]
    fn test_collision_against_mixed_items() {
        let pallet = Dimensions::new(2.0, 1.0, 2.0);
        let cube = Dimensions::new(0.5, 0.5, 0.5);
        let placed = vec![
            PlacedItem::pallet(pallet, Position::origin(), 30.0),
            PlacedItem::boxed(cube, Position::new(0.0, 1.0, 0.0), 5.0),
        ];

        assert!(collides(&Position::new(0.25, 1.0, 0.25), &cube, &placed));
        assert!(!collides(&Position::new(0.5, 1.0, 0.0), &cube, &placed));
        assert!(!collides(&Position::new(2.0, 0.0, 0.0), &cube, &placed));
    }

    #[test]
    fn test_placement_stats_computation() {
        let cube = Dimensions::new(1.0, 1.0, 1.0);
        let items = vec![
            PlacedItem::pallet(cube, Position::origin(), 30.0).with_orientation(1),
            PlacedItem::pallet(cube, Position::new(1.0, 0.0, 0.0), 30.0).with_orientation(1),
            PlacedItem::boxed(cube, Position::new(2.0, 0.0, 0.0), 5.0).with_orientation(2),
        ];

        let stats = PlacementStats::from_items(&items);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.kind_distribution.get(&ItemKind::Pallet), Some(&2));
        assert_eq!(
            stats.orientation_distribution.get(&(ItemKind::Pallet, 1)),
            Some(&2)
        );
        assert_eq!(
            stats.orientation_distribution.get(&(ItemKind::Box, 2)),
            Some(&1)
        );
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_config_rejects_negative_epsilon() {
        let err = Config::new().with_epsilon(-0.5).validate().unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}

mod packing_result_tests {
    use super::*;

    #[test]
    fn test_result_summary() {
        let cube = Dimensions::new(1.0, 1.0, 1.0);
        let result = PackingResult {
            pallets: vec![PlacedItem::pallet(cube, Position::origin(), 30.0)],
            boxes: vec![PlacedItem::boxed(cube, Position::new(1.0, 0.0, 0.0), 5.0)],
            unused_space: 6.0,
            total_weight: 35.0,
            utilization_percentage: 25.0,
        };

        let summary = PackingSummary::from(&result);
        assert_eq!(summary.pallet_count, 1);
        assert_eq!(summary.box_count, 1);
        assert!((summary.utilization_percentage - 25.0).abs() < 1e-10);
        assert!((result.used_volume() - 2.0).abs() < 1e-10);
        assert_eq!(result.utilization_percent(), "25.0%");
    }
}
