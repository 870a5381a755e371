//! Geometry primitives: dimensions, positions and axis-aligned boxes.
//!
//! Coordinates follow the container frame: the origin is the bottom, near, left corner
//! of the container and Y is the vertical axis.

use crate::{Error, Result};
use nalgebra::Vector3;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default tolerance for containment checks, in input units.
pub const EPSILON: f64 = 0.001;

/// Edge lengths of a rectangular item or container.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Extent along X.
    pub width: f64,
    /// Extent along Y (vertical).
    pub height: f64,
    /// Extent along Z.
    pub depth: f64,
}

impl Dimensions {
    /// Creates new dimensions.
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Returns the dimensions as a vector (x = width, y = height, z = depth).
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.height, self.depth)
    }

    /// Returns true if any edge is non-positive or not finite.
    ///
    /// Degenerate dimensions never produce placements.
    pub fn is_degenerate(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .any(|v| !v.is_finite() || *v <= 0.0)
    }

    /// Returns the three edge lengths sorted ascending.
    ///
    /// Two dimension triples are permutations of each other iff their sorted edges match.
    pub fn sorted_edges(&self) -> [f64; 3] {
        let mut edges = [self.width, self.height, self.depth];
        edges.sort_by(|a, b| a.total_cmp(b));
        edges
    }

    /// Validates that every edge is a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.is_degenerate() {
            return Err(Error::InvalidGeometry(format!(
                "All dimensions must be positive and finite, got {}",
                self
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

impl FromStr for Dimensions {
    type Err = Error;

    /// Parses `W,H,D` or `WxHxD`.
    fn from_str(s: &str) -> Result<Self> {
        let separator = if s.contains(',') { ',' } else { 'x' };
        let parts: Vec<&str> = s.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(Error::InvalidGeometry(format!(
                "Expected three values as W,H,D or WxHxD, got '{}'",
                s
            )));
        }

        let mut values = [0.0; 3];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.parse::<f64>().map_err(|e| {
                Error::InvalidGeometry(format!("Invalid dimension '{}': {}", part, e))
            })?;
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }
}

/// Minimum corner of a placed item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate (vertical).
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Position {
    /// Creates a new position.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The container origin.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the position as a vector.
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// An axis-aligned box, the half-open interval product `[min, max)` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3D {
    /// Minimum corner.
    pub min: Vector3<f64>,
    /// Maximum corner.
    pub max: Vector3<f64>,
}

impl Aabb3D {
    /// Creates a new AABB from its corners.
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    /// Creates the box occupied by an item of `dimensions` placed at `position`.
    pub fn from_placement(position: &Position, dimensions: &Dimensions) -> Self {
        let min = position.to_vector();
        Self {
            min,
            max: min + dimensions.to_vector(),
        }
    }

    /// Returns the edge lengths.
    pub fn extent(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        let e = self.extent();
        e.x * e.y * e.z
    }

    /// Checks whether two boxes share a region of positive volume.
    ///
    /// Boxes are disjoint when, on any single axis, the far face of one is at or before the
    /// near face of the other. Touching faces do not count as an overlap. No tolerance is
    /// applied here.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max.x <= other.min.x
            || self.min.x >= other.max.x
            || self.max.y <= other.min.y
            || self.min.y >= other.max.y
            || self.max.z <= other.min.z
            || self.min.z >= other.max.z)
    }

    /// Checks whether this box lies inside `bounds`, allowing `epsilon` of slack per face.
    pub fn fits_within(&self, bounds: &Self, epsilon: f64) -> bool {
        (0..3).all(|axis| {
            self.min[axis] >= bounds.min[axis] - epsilon
                && self.max[axis] <= bounds.max[axis] + epsilon
        })
    }
}

/// Checks whether two placed boxes intersect with positive volume.
pub fn overlaps(
    a_position: &Position,
    a_dimensions: &Dimensions,
    b_position: &Position,
    b_dimensions: &Dimensions,
) -> bool {
    Aabb3D::from_placement(a_position, a_dimensions)
        .overlaps(&Aabb3D::from_placement(b_position, b_dimensions))
}

/// Checks whether an item stays inside a container anchored at the origin.
pub fn within_container(
    position: &Position,
    dimensions: &Dimensions,
    container: &Dimensions,
    epsilon: f64,
) -> bool {
    let bounds = Aabb3D::from_placement(&Position::origin(), container);
    Aabb3D::from_placement(position, dimensions).fits_within(&bounds, epsilon)
}
