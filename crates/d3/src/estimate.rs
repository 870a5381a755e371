//! Quick grid-based capacity estimate.
//!
//! A coarser alternative to [`Packer3D`](crate::Packer3D) for sizing questions such as "how
//! many boxes fit" and "how many pallets do I need". Pallets sit on a regular grid with a
//! single layer of boxes on each; without pallets, boxes fill a regular grid directly. No
//! rotation is tried.

use crate::orientation::{BoxOrientation, PalletOrientation};
use u_loading_core::geometry::{Dimensions, Position};
use u_loading_core::placement::PlacedItem;
use u_loading_core::Config;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard pallet footprint and deck height, in centimeters.
pub const STANDARD_PALLET: Dimensions = Dimensions::new(80.0, 14.0, 120.0);

/// Number of whole `edge` lengths that fit in `span`, saturating at `usize::MAX`.
fn fit_count(span: f64, edge: f64) -> usize {
    if !edge.is_finite() || edge <= 0.0 || !span.is_finite() || span <= 0.0 {
        return 0;
    }
    (span / edge).floor() as usize
}

/// Product of grid counts, saturating at `usize::MAX`.
fn grid_product(counts: &[usize]) -> usize {
    counts.iter().fold(1, |acc, &n| acc.saturating_mul(n))
}

/// Outcome of a quick estimate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CapacityEstimate {
    /// Requested number of boxes.
    pub requested: usize,
    /// Pallets laid out, in placement order. Empty without pallets.
    pub pallets: Vec<PlacedItem>,
    /// Boxes laid out, in placement order.
    pub boxes: Vec<PlacedItem>,
    /// Boxes carried by one pallet, when pallets are used.
    pub boxes_per_pallet: Option<usize>,
    /// Pallets required to carry every requested box.
    pub pallets_needed: usize,
    /// Boxes the container can take with this layout.
    pub max_boxes: usize,
    /// Share of the container volume the requested load would occupy, capped at 100.
    pub fill_percentage: f64,
    /// True if every requested box fits.
    pub fits: bool,
}

impl CapacityEstimate {
    /// Returns the number of boxes laid out.
    pub fn boxes_placed(&self) -> usize {
        self.boxes.len()
    }

    /// Returns the number of requested boxes left over.
    pub fn unplaced(&self) -> usize {
        self.requested.saturating_sub(self.boxes.len())
    }
}

/// Grid estimator for loading one box type, optionally on pallets.
#[derive(Debug, Clone)]
pub struct QuickEstimator {
    pallet: Dimensions,
    use_pallets: bool,
    config: Config,
}

impl Default for QuickEstimator {
    fn default() -> Self {
        Self {
            pallet: STANDARD_PALLET,
            use_pallets: true,
            config: Config::default(),
        }
    }
}

impl QuickEstimator {
    /// Creates an estimator using [`STANDARD_PALLET`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different pallet.
    pub fn with_pallet(mut self, pallet: Dimensions) -> Self {
        self.pallet = pallet;
        self
    }

    /// Enables or disables pallets.
    pub fn with_pallets(mut self, use_pallets: bool) -> Self {
        self.use_pallets = use_pallets;
        self
    }

    /// Sets the configuration supplying item weights.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Boxes that fit side by side on one pallet deck (a single layer).
    pub fn boxes_per_pallet(&self, box_dims: &Dimensions) -> usize {
        grid_product(&[
            fit_count(self.pallet.width, box_dims.width),
            fit_count(self.pallet.depth, box_dims.depth),
        ])
    }

    /// Pallets required to carry `quantity` boxes. Zero when a box does not fit on a pallet.
    pub fn pallets_needed(&self, box_dims: &Dimensions, quantity: usize) -> usize {
        match self.boxes_per_pallet(box_dims) {
            0 => 0,
            per_pallet => quantity.div_ceil(per_pallet),
        }
    }

    /// Height of one loaded pallet: the deck plus one box layer.
    fn tier_height(&self, box_dims: &Dimensions) -> f64 {
        self.pallet.height + box_dims.height
    }

    /// Pallet grid counts along X, Y and Z.
    fn pallet_grid(&self, container: &Dimensions, box_dims: &Dimensions) -> [usize; 3] {
        [
            fit_count(container.width, self.pallet.width),
            fit_count(container.height, self.tier_height(box_dims)),
            fit_count(container.depth, self.pallet.depth),
        ]
    }

    /// Direct box grid counts along X, Y and Z.
    fn box_grid(container: &Dimensions, box_dims: &Dimensions) -> [usize; 3] {
        [
            fit_count(container.width, box_dims.width),
            fit_count(container.height, box_dims.height),
            fit_count(container.depth, box_dims.depth),
        ]
    }

    /// Maximum number of boxes the container takes with the current layout.
    pub fn max_boxes(&self, container: &Dimensions, box_dims: &Dimensions) -> usize {
        if self.use_pallets {
            let pallets = grid_product(&self.pallet_grid(container, box_dims));
            pallets.saturating_mul(self.boxes_per_pallet(box_dims))
        } else {
            grid_product(&Self::box_grid(container, box_dims))
        }
    }

    /// Share of the container volume taken by `quantity` boxes and the pallets they need,
    /// capped at 100.
    pub fn fill_percentage(
        &self,
        container: &Dimensions,
        box_dims: &Dimensions,
        quantity: usize,
    ) -> f64 {
        let container_volume = container.volume();
        if container_volume <= 0.0 {
            return 0.0;
        }

        let mut volume = box_dims.volume() * quantity as f64;
        if self.use_pallets {
            volume += self.pallet.volume() * self.pallets_needed(box_dims, quantity) as f64;
        }

        (volume / container_volume * 100.0).min(100.0)
    }

    /// Lays out up to `quantity` boxes in `container`.
    pub fn estimate(
        &self,
        container: &Dimensions,
        box_dims: &Dimensions,
        quantity: usize,
    ) -> CapacityEstimate {
        let (pallets, boxes) = if self.use_pallets {
            self.layout_on_pallets(container, box_dims, quantity)
        } else {
            (Vec::new(), self.layout_direct(container, box_dims, quantity))
        };

        let max_boxes = self.max_boxes(container, box_dims);
        let estimate = CapacityEstimate {
            requested: quantity,
            pallets,
            boxes,
            boxes_per_pallet: self.use_pallets.then(|| self.boxes_per_pallet(box_dims)),
            pallets_needed: if self.use_pallets {
                self.pallets_needed(box_dims, quantity)
            } else {
                0
            },
            max_boxes,
            fill_percentage: self.fill_percentage(container, box_dims, quantity),
            fits: quantity <= max_boxes,
        };

        log::debug!(
            "Estimated {} of {} boxes on {} pallets (capacity {})",
            estimate.boxes_placed(),
            quantity,
            estimate.pallets.len(),
            max_boxes
        );

        estimate
    }

    fn layout_on_pallets(
        &self,
        container: &Dimensions,
        box_dims: &Dimensions,
        quantity: usize,
    ) -> (Vec<PlacedItem>, Vec<PlacedItem>) {
        let per_x = fit_count(self.pallet.width, box_dims.width);
        let per_z = fit_count(self.pallet.depth, box_dims.depth);
        let per_pallet = per_x.saturating_mul(per_z);

        let grid = self.pallet_grid(container, box_dims);
        let [nx, ny, nz] = grid;
        let to_pack = self.pallets_needed(box_dims, quantity).min(grid_product(&grid));
        let tier = self.tier_height(box_dims);

        let mut pallets = Vec::new();
        let mut boxes = Vec::new();
        let mut remaining = quantity;

        'grid: for py in 0..ny {
            for pz in 0..nz {
                for px in 0..nx {
                    if pallets.len() >= to_pack {
                        break 'grid;
                    }

                    let origin = Position::new(
                        px as f64 * self.pallet.width,
                        py as f64 * tier,
                        pz as f64 * self.pallet.depth,
                    );
                    pallets.push(
                        PlacedItem::pallet(self.pallet, origin, self.config.pallet_weight)
                            .with_orientation(PalletOrientation::Standing.index()),
                    );

                    let on_this = per_pallet.min(remaining);
                    for i in 0..on_this {
                        let (bz, bx) = (i / per_x, i % per_x);
                        let position = Position::new(
                            origin.x + bx as f64 * box_dims.width,
                            origin.y + self.pallet.height,
                            origin.z + bz as f64 * box_dims.depth,
                        );
                        boxes.push(
                            PlacedItem::boxed(*box_dims, position, self.config.box_weight)
                                .with_orientation(BoxOrientation::Original.index()),
                        );
                    }
                    remaining -= on_this;
                }
            }
        }

        (pallets, boxes)
    }

    fn layout_direct(
        &self,
        container: &Dimensions,
        box_dims: &Dimensions,
        quantity: usize,
    ) -> Vec<PlacedItem> {
        let grid = Self::box_grid(container, box_dims);
        let [nx, ny, nz] = grid;
        let to_pack = quantity.min(grid_product(&grid));

        let mut boxes = Vec::new();
        'grid: for z in 0..nz {
            for y in 0..ny {
                for x in 0..nx {
                    if boxes.len() >= to_pack {
                        break 'grid;
                    }
                    let position = Position::new(
                        x as f64 * box_dims.width,
                        y as f64 * box_dims.height,
                        z as f64 * box_dims.depth,
                    );
                    boxes.push(
                        PlacedItem::boxed(*box_dims, position, self.config.box_weight)
                            .with_orientation(BoxOrientation::Original.index()),
                    );
                }
            }
        }

        boxes
    }
}
