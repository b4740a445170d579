//! Visitor pattern for leaf traversal.
//!
//! Visitors allow custom processing of leaf buckets during tree traversal
//! without coupling traversal logic to specific use cases.

use crate::Point;

/// Visitor for processing leaf buckets during tree traversal.
///
/// Implement this trait to define custom behavior when visiting the
/// tree's leaves. Common uses include:
/// - Rendering points grouped by leaf
/// - Collecting all stored points
/// - Computing per-leaf statistics
pub trait LeafVisitor {
    /// Called once for each leaf's point bucket during traversal.
    ///
    /// Every stored point belongs to exactly one leaf, so across a full
    /// traversal each point is visited exactly once. Empty buckets are
    /// visited too.
    fn visit(&mut self, points: &[Point]);
}

/// A simple visitor that collects all visited points.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Point>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected points.
    pub fn into_points(self) -> Vec<Point> {
        self.collected
    }

    /// Returns a reference to the collected points.
    pub fn points(&self) -> &[Point] {
        &self.collected
    }
}

impl LeafVisitor for CollectingVisitor {
    fn visit(&mut self, points: &[Point]) {
        self.collected.extend(points.iter().cloned());
    }
}

/// A visitor that calls a closure for each leaf bucket.
pub struct FnVisitor<F>
where
    F: FnMut(&[Point]),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&[Point]),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> LeafVisitor for FnVisitor<F>
where
    F: FnMut(&[Point]),
{
    fn visit(&mut self, points: &[Point]) {
        (self.func)(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(coords: &[f64]) -> Point {
        Point::from_row_slice(coords)
    }

    #[test]
    fn collecting_visitor_empty() {
        let visitor = CollectingVisitor::new();
        assert!(visitor.points().is_empty());
    }

    #[test]
    fn collecting_visitor_collects() {
        let mut visitor = CollectingVisitor::new();
        let a = pt(&[0.0, 0.0]);
        let b = pt(&[1.0, 1.0]);

        visitor.visit(&[a.clone()]);
        visitor.visit(&[b.clone()]);

        let collected = visitor.into_points();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0], a);
        assert_eq!(collected[1], b);
    }

    #[test]
    fn fn_visitor_calls_closure() {
        let mut count = 0;
        {
            let mut visitor = FnVisitor::new(|points: &[Point]| {
                count += points.len();
            });

            let p = pt(&[2.0, 3.0]);
            visitor.visit(&[p.clone(), p]);
        }
        assert_eq!(count, 2);
    }
}
