//! Point representation and distance metric for BSP indexes.

use nalgebra::DVector;

/// A point in fixed-dimensional Euclidean space.
///
/// The dimensionality is chosen per tree instance; every point stored in
/// one [`BspTree`](crate::BspTree) has the same number of coordinates.
/// Exact equality between points is element-wise `==` on the coordinates,
/// with no epsilon tolerance.
pub type Point = DVector<f64>;

/// Computes the Euclidean distance between two points.
///
/// # Panics
/// Panics if the points do not have the same number of coordinates.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (a - b).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pt(coords: &[f64]) -> Point {
        Point::from_row_slice(coords)
    }

    #[test]
    fn distance_along_axis() {
        let a = pt(&[0.0, 0.0]);
        let b = pt(&[3.0, 0.0]);
        assert_relative_eq!(distance(&a, &b), 3.0);
    }

    #[test]
    fn distance_diagonal() {
        let a = pt(&[0.0, 0.0]);
        let b = pt(&[3.0, 4.0]);
        assert_relative_eq!(distance(&a, &b), 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = pt(&[1.0, -2.0, 0.5]);
        let b = pt(&[-4.0, 7.0, 2.5]);
        assert_relative_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = pt(&[1.5, 2.5, -3.5]);
        assert_relative_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn exact_equality_has_no_tolerance() {
        let a = pt(&[1.0, 2.0]);
        let b = pt(&[1.0, 2.0]);
        let c = pt(&[1.0, 2.0 + 1e-12]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
