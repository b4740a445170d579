//! Pole selection strategies for splitting over-threshold leaves.
//!
//! The choice of the two partition poles decides how a bucket's points are
//! divided between the new children, and therefore how balanced the tree
//! ends up. Different strategies trade split cost against tree quality.

use crate::{Point, distance};

/// Strategy for choosing the two partition poles of a bucket about to
/// split.
///
/// The selected points become the routing representatives of the two new
/// children: every other bucket point joins the pole it is strictly closer
/// to (ties join the second pole's group).
pub trait PoleSelector {
    /// Selects the poles for a split, as `(first, second)` indices into
    /// `points`.
    ///
    /// Returns `None` if the bucket holds fewer than two points. The two
    /// indices must be distinct, and the selection must be deterministic:
    /// the same bucket always yields the same poles.
    fn select_poles(&self, points: &[Point]) -> Option<(usize, usize)>;
}

/// Approximates the bucket's most-separated pair with two farthest-point
/// scans.
///
/// The first pole is the point farthest from the bucket's centroid; the
/// second is the point farthest from the first. This avoids the quadratic
/// cost of finding a true diameter pair while still producing well-spread
/// poles on most inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FarthestPair;

impl PoleSelector for FarthestPair {
    fn select_poles(&self, points: &[Point]) -> Option<(usize, usize)> {
        if points.len() < 2 {
            return None;
        }

        let centroid = centroid(points);
        let first = farthest_from(points, &centroid);
        let mut second = farthest_from(points, &points[first]);
        if second == first {
            // Every point coincides with the first pole; any other slot
            // serves as the second.
            second = if first == 0 { 1 } else { 0 };
        }
        Some((first, second))
    }
}

/// Arithmetic mean of the points, per dimension.
fn centroid(points: &[Point]) -> Point {
    let mut sum = Point::zeros(points[0].len());
    for point in points {
        sum += point;
    }
    sum / points.len() as f64
}

/// Index of the point farthest from `origin`. Ties keep the earliest
/// index, so the scan is deterministic for any input order.
fn farthest_from(points: &[Point], origin: &Point) -> usize {
    let mut best = 0;
    let mut best_distance = distance(&points[0], origin);
    for (i, point) in points.iter().enumerate().skip(1) {
        let d = distance(point, origin);
        if d > best_distance {
            best = i;
            best_distance = d;
        }
    }
    best
}
