//! Discrete orientations for pallets and boxes.
//!
//! Each item class has its own fixed set of axis permutations. Pallets may be stood,
//! laid on a side or set on an end (6 orientations); boxes only get 3. The two sets are
//! separate types so their contracts can be tested independently.

use u_loading_core::geometry::Dimensions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of a pallet, as a permutation of its base `(width, height, depth)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PalletOrientation {
    /// `(w, h, d)`, as supplied.
    Standing,
    /// `(d, h, w)`: upright, turned 90° about the vertical axis.
    StandingTurned,
    /// `(w, d, h)`: height and depth swapped.
    OnSide,
    /// `(d, w, h)`
    OnSideTurned,
    /// `(h, w, d)`: height and width swapped.
    OnEnd,
    /// `(h, d, w)`
    OnEndTurned,
}

impl PalletOrientation {
    /// All pallet orientations, in enumeration order.
    pub const ALL: [PalletOrientation; 6] = [
        PalletOrientation::Standing,
        PalletOrientation::StandingTurned,
        PalletOrientation::OnSide,
        PalletOrientation::OnSideTurned,
        PalletOrientation::OnEnd,
        PalletOrientation::OnEndTurned,
    ];

    /// Returns the oriented dimensions of `base`.
    pub fn apply(self, base: &Dimensions) -> Dimensions {
        let Dimensions {
            width: w,
            height: h,
            depth: d,
        } = *base;
        match self {
            PalletOrientation::Standing => Dimensions::new(w, h, d),
            PalletOrientation::StandingTurned => Dimensions::new(d, h, w),
            PalletOrientation::OnSide => Dimensions::new(w, d, h),
            PalletOrientation::OnSideTurned => Dimensions::new(d, w, h),
            PalletOrientation::OnEnd => Dimensions::new(h, w, d),
            PalletOrientation::OnEndTurned => Dimensions::new(h, d, w),
        }
    }

    /// Returns the position of this orientation in [`PalletOrientation::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns every orientation paired with the oriented dimensions, in enumeration order.
    pub fn candidates(base: &Dimensions) -> Vec<(PalletOrientation, Dimensions)> {
        Self::ALL.iter().map(|o| (*o, o.apply(base))).collect()
    }
}

/// Orientation of a box, as a permutation of its base `(width, height, depth)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoxOrientation {
    /// `(w, h, d)`, as supplied.
    Original,
    /// `(d, h, w)`: width and depth swapped.
    Turned,
    /// `(h, w, d)`: width and height swapped.
    Tipped,
}

impl BoxOrientation {
    /// All box orientations, in enumeration order.
    pub const ALL: [BoxOrientation; 3] = [
        BoxOrientation::Original,
        BoxOrientation::Turned,
        BoxOrientation::Tipped,
    ];

    /// Returns the oriented dimensions of `base`.
    pub fn apply(self, base: &Dimensions) -> Dimensions {
        match self {
            BoxOrientation::Original => *base,
            BoxOrientation::Turned => Dimensions::new(base.depth, base.height, base.width),
            BoxOrientation::Tipped => Dimensions::new(base.height, base.width, base.depth),
        }
    }

    /// Returns the position of this orientation in [`BoxOrientation::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns every orientation paired with the oriented dimensions, in enumeration order.
    pub fn candidates(base: &Dimensions) -> Vec<(BoxOrientation, Dimensions)> {
        Self::ALL.iter().map(|o| (*o, o.apply(base))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_counts() {
        let base = Dimensions::new(1.0, 2.0, 3.0);
        assert_eq!(PalletOrientation::candidates(&base).len(), 6);
        assert_eq!(BoxOrientation::candidates(&base).len(), 3);
    }

    #[test]
    fn test_pallet_orientations_are_all_permutations() {
        let base = Dimensions::new(1.0, 2.0, 3.0);
        let mut seen: Vec<[f64; 3]> = PalletOrientation::ALL
            .iter()
            .map(|o| {
                let d = o.apply(&base);
                assert_eq!(d.sorted_edges(), base.sorted_edges());
                [d.width, d.height, d.depth]
            })
            .collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        seen.dedup();
        // Distinct edges give six distinct permutations.
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_pallet_orientation_values() {
        let base = Dimensions::new(1.0, 2.0, 3.0);
        assert_eq!(
            PalletOrientation::Standing.apply(&base),
            Dimensions::new(1.0, 2.0, 3.0)
        );
        assert_eq!(
            PalletOrientation::StandingTurned.apply(&base),
            Dimensions::new(3.0, 2.0, 1.0)
        );
        assert_eq!(
            PalletOrientation::OnSide.apply(&base),
            Dimensions::new(1.0, 3.0, 2.0)
        );
        assert_eq!(
            PalletOrientation::OnSideTurned.apply(&base),
            Dimensions::new(3.0, 1.0, 2.0)
        );
        assert_eq!(
            PalletOrientation::OnEnd.apply(&base),
            Dimensions::new(2.0, 1.0, 3.0)
        );
        assert_eq!(
            PalletOrientation::OnEndTurned.apply(&base),
            Dimensions::new(2.0, 3.0, 1.0)
        );
    }

    #[test]
    fn test_box_orientation_values() {
        let base = Dimensions::new(1.0, 2.0, 3.0);
        let dims: Vec<Dimensions> = BoxOrientation::candidates(&base)
            .into_iter()
            .map(|(_, d)| d)
            .collect();
        assert_eq!(
            dims,
            vec![
                Dimensions::new(1.0, 2.0, 3.0),
                Dimensions::new(3.0, 2.0, 1.0),
                Dimensions::new(2.0, 1.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_indices_follow_enumeration_order() {
        for (i, o) in PalletOrientation::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
        }
        for (i, o) in BoxOrientation::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
        }
    }
}
