//! Volume and weight accounting for a finished placement.

use crate::boundary::Container;
use u_loading_core::placement::PlacedItem;
use u_loading_core::result::PackingResult;

/// Builds the result for `pallets` and `boxes` placed in `container`.
///
/// Utilization is not clamped. A container without positive volume reports 0.
pub fn aggregate(
    container: &Container,
    pallets: Vec<PlacedItem>,
    boxes: Vec<PlacedItem>,
) -> PackingResult {
    let container_volume = container.volume();

    let mut used = 0.0;
    let mut total_weight = 0.0;
    for item in pallets.iter().chain(boxes.iter()) {
        used += item.volume();
        total_weight += item.weight;
    }

    let utilization_percentage = if container_volume > 0.0 {
        used / container_volume * 100.0
    } else {
        0.0
    };

    PackingResult {
        pallets,
        boxes,
        unused_space: container_volume - used,
        total_weight,
        utilization_percentage,
    }
}
