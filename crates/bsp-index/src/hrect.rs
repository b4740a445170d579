//! Axis-aligned bounding box ("HRect") for range queries.

use crate::{BspError, Point};

/// An axis-aligned box in fixed-dimensional space, defined by per-dimension
/// minimum and maximum bounds.
///
/// The invariant `mins[i] <= maxs[i]` holds for every dimension; it is
/// guaranteed by [`HRect::from_corners`], which accepts the two corners in
/// any order.
#[derive(Debug, Clone, PartialEq)]
pub struct HRect {
    mins: Point,
    maxs: Point,
}

impl HRect {
    /// Creates a box from two arbitrary corner points.
    ///
    /// The bounds are the per-dimension minimum and maximum of the two
    /// corners, so the construction is order-independent:
    /// `from_corners(a, b) == from_corners(b, a)`.
    ///
    /// Returns [`BspError::DimensionMismatch`] if the corners differ in
    /// dimensionality, and [`BspError::InvalidDimension`] for zero-length
    /// corners.
    pub fn from_corners(a: &Point, b: &Point) -> Result<Self, BspError> {
        if a.len() != b.len() {
            return Err(BspError::DimensionMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }
        if a.len() == 0 {
            return Err(BspError::InvalidDimension);
        }
        Ok(Self {
            mins: a.zip_map(b, f64::min),
            maxs: a.zip_map(b, f64::max),
        })
    }

    /// Returns the dimensionality of the box.
    #[inline]
    pub fn dim(&self) -> usize {
        self.mins.len()
    }

    /// Returns the per-dimension lower bounds as a point (the min corner).
    #[inline]
    pub fn mins(&self) -> &Point {
        &self.mins
    }

    /// Returns the per-dimension upper bounds as a point (the max corner).
    #[inline]
    pub fn maxs(&self) -> &Point {
        &self.maxs
    }

    /// Tests whether `other` falls within this box's intervals.
    ///
    /// For every dimension, `other`'s lower or upper bound must lie within
    /// this box's half-open interval `[mins[i], maxs[i])`. The test is
    /// asymmetric and exclusive at the upper boundary: a box starting
    /// exactly at `maxs[i]` does not overlap.
    ///
    /// # Panics
    /// Panics if the boxes do not have the same dimensionality.
    pub fn overlaps(&self, other: &HRect) -> bool {
        (0..self.dim()).all(|i| {
            let lo = other.mins[i] >= self.mins[i] && other.mins[i] < self.maxs[i];
            let hi = other.maxs[i] >= self.mins[i] && other.maxs[i] < self.maxs[i];
            lo || hi
        })
    }

    /// Tests whether a point lies inside the box.
    ///
    /// Both boundaries are inclusive: `mins[i] <= point[i] <= maxs[i]`
    /// must hold for every dimension.
    ///
    /// # Panics
    /// Panics if the point's dimensionality is smaller than the box's.
    pub fn contains(&self, point: &Point) -> bool {
        (0..self.dim()).all(|i| self.mins[i] <= point[i] && point[i] <= self.maxs[i])
    }
}
