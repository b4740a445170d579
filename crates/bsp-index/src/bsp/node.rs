//! BSP tree node implementation.

use crate::bsp::selector::PoleSelector;
use crate::{HRect, Point, distance};

/// Which child of an internal node a point routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch {
    First,
    Second,
}

/// A node in the BSP tree.
///
/// A node is either a leaf holding a bucket of points, or an internal node
/// owning exactly two children. The two states are mutually exclusive: a
/// node is a leaf if and only if both children are absent, and only a leaf
/// may hold a non-empty bucket. A leaf becomes internal exactly once, at
/// the moment its bucket outgrows the tree's leaf capacity, and never
/// reverts.
///
/// # Routing pivots
///
/// Each child created by a split permanently carries the partition pole it
/// was built around as its `pivot`. Queries and insertions descend an
/// internal node by comparing distances to the two children's pivots. The
/// root is never created by a split and has no pivot.
#[derive(Debug, Clone)]
pub struct BspNode {
    /// Routing representative, assigned once by the parent's split.
    pivot: Option<Point>,

    /// The leaf bucket. Drained when the node splits; internal nodes hold
    /// no points.
    points: Vec<Point>,

    /// First child subtree (the first pole's group).
    first: Option<Box<BspNode>>,

    /// Second child subtree (the second pole's group).
    second: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a root node over `points`, splitting immediately if the
    /// bucket exceeds `leaf_size`.
    pub(crate) fn build<S: PoleSelector>(
        points: Vec<Point>,
        leaf_size: usize,
        selector: &S,
    ) -> Self {
        let mut node = Self {
            pivot: None,
            points,
            first: None,
            second: None,
        };
        if node.points.len() > leaf_size {
            node.split(leaf_size, selector);
        }
        node
    }

    /// Creates a child node carrying its partition pole as the routing
    /// pivot.
    fn child<S: PoleSelector>(
        pivot: Point,
        points: Vec<Point>,
        leaf_size: usize,
        selector: &S,
    ) -> Self {
        let mut node = Self::build(points, leaf_size, selector);
        node.pivot = Some(pivot);
        node
    }

    /// Returns this node's routing pivot, if it was created by a split.
    #[inline]
    pub fn pivot(&self) -> Option<&Point> {
        self.pivot.as_ref()
    }

    /// Returns the leaf bucket. Empty for internal nodes.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns a reference to the first child subtree.
    #[inline]
    pub fn first(&self) -> Option<&BspNode> {
        self.first.as_deref()
    }

    /// Returns a reference to the second child subtree.
    #[inline]
    pub fn second(&self) -> Option<&BspNode> {
        self.second.as_deref()
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    /// Returns the total number of points in this subtree.
    pub fn point_count(&self) -> usize {
        let mut count = self.points.len();

        if let Some(ref first) = self.first {
            count += first.point_count();
        }
        if let Some(ref second) = self.second {
            count += second.point_count();
        }

        count
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let first_depth = self.first.as_ref().map_or(0, |n| n.depth());
        let second_depth = self.second.as_ref().map_or(0, |n| n.depth());
        1 + first_depth.max(second_depth)
    }

    /// The two children's routing pivots. `None` for leaves.
    fn child_pivots(&self) -> Option<(&Point, &Point)> {
        let first = self.first.as_deref()?;
        let second = self.second.as_deref()?;
        Some((first.pivot.as_ref()?, second.pivot.as_ref()?))
    }

    /// Routes a point toward the child whose pivot is strictly closer.
    /// Ties go to the second child, matching the split's partition rule.
    /// Returns `None` at a leaf.
    fn route(&self, point: &Point) -> Option<Branch> {
        let (first_pivot, second_pivot) = self.child_pivots()?;
        if distance(point, first_pivot) < distance(point, second_pivot) {
            Some(Branch::First)
        } else {
            Some(Branch::Second)
        }
    }

    /// Inserts a point into this subtree, splitting the receiving leaf if
    /// its bucket outgrows `leaf_size`.
    pub(crate) fn insert<S: PoleSelector>(
        &mut self,
        point: Point,
        leaf_size: usize,
        selector: &S,
    ) {
        match self.route(&point) {
            Some(Branch::First) => {
                if let Some(first) = self.first.as_deref_mut() {
                    first.insert(point, leaf_size, selector);
                }
            }
            Some(Branch::Second) => {
                if let Some(second) = self.second.as_deref_mut() {
                    second.insert(point, leaf_size, selector);
                }
            }
            None => {
                self.points.push(point);
                if self.points.len() > leaf_size {
                    self.split(leaf_size, selector);
                }
            }
        }
    }

    /// Converts this over-threshold leaf into an internal node with two
    /// leaf children.
    ///
    /// The selector picks the two partition poles; every other bucket
    /// point joins the pole it is strictly closer to (ties join the
    /// second group). Each pole is appended to its own group, so both
    /// children are non-empty, and each group is strictly smaller than
    /// the original bucket. Children re-split recursively while they
    /// remain over threshold.
    fn split<S: PoleSelector>(&mut self, leaf_size: usize, selector: &S) {
        let Some((first_idx, second_idx)) = selector.select_poles(&self.points) else {
            return;
        };
        let first_pole = self.points[first_idx].clone();
        let second_pole = self.points[second_idx].clone();

        let mut first_group = Vec::new();
        let mut second_group = Vec::new();
        for (i, point) in std::mem::take(&mut self.points).into_iter().enumerate() {
            if i == first_idx || i == second_idx {
                continue;
            }
            if distance(&point, &first_pole) < distance(&point, &second_pole) {
                first_group.push(point);
            } else {
                second_group.push(point);
            }
        }
        first_group.push(first_pole.clone());
        second_group.push(second_pole.clone());

        self.first = Some(Box::new(Self::child(
            first_pole,
            first_group,
            leaf_size,
            selector,
        )));
        self.second = Some(Box::new(Self::child(
            second_pole,
            second_group,
            leaf_size,
            selector,
        )));
    }

    /// Finds a stored point exactly equal to `point`.
    ///
    /// Descends by nearest-pivot routing and scans the reached leaf; there
    /// is no backtracking into the sibling subtree.
    pub(crate) fn point_query<'a>(&'a self, point: &Point) -> Option<&'a Point> {
        match self.route(point) {
            Some(Branch::First) => self.first.as_deref().and_then(|n| n.point_query(point)),
            Some(Branch::Second) => self.second.as_deref().and_then(|n| n.point_query(point)),
            None => self.points.iter().find(|stored| *stored == point),
        }
    }

    /// Collects every stored point inside `rect` into `out`.
    ///
    /// An internal node recurses into a child only if the child's routing
    /// region (the half-space of points nearer its pivot) reaches into the
    /// rectangle. The rectangle corner extremal toward a pivot decides
    /// this exactly, so no matching point is ever skipped.
    pub(crate) fn range_query<'a>(&'a self, rect: &HRect, out: &mut Vec<&'a Point>) {
        let Some((first_pivot, second_pivot)) = self.child_pivots() else {
            out.extend(self.points.iter().filter(|point| rect.contains(point)));
            return;
        };

        if first_pivot == second_pivot {
            // Coincident pivots tie every point toward the second child,
            // but the first pole itself lives in the first child's bucket.
            if let Some(first) = self.first.as_deref() {
                first.range_query(rect, out);
            }
            if let Some(second) = self.second.as_deref() {
                second.range_query(rect, out);
            }
            return;
        }

        let toward_first = extremal_corner(rect, first_pivot, second_pivot);
        if self.route(&toward_first) == Some(Branch::First) {
            if let Some(first) = self.first.as_deref() {
                first.range_query(rect, out);
            }
        }

        let toward_second = extremal_corner(rect, second_pivot, first_pivot);
        if self.route(&toward_second) == Some(Branch::Second) {
            if let Some(second) = self.second.as_deref() {
                second.range_query(rect, out);
            }
        }
    }
}

/// The rectangle corner leaning farthest toward `pole`'s side of the pole
/// pair: per dimension, the bound that minimizes the projection onto the
/// axis from `pole` to `other`. If even this corner routes away from
/// `pole`, no point of the rectangle can route toward it.
fn extremal_corner(rect: &HRect, pole: &Point, other: &Point) -> Point {
    Point::from_fn(rect.dim(), |i, _| {
        if other[i] >= pole[i] {
            rect.mins()[i]
        } else {
            rect.maxs()[i]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsp::selector::FarthestPair;

    fn pt(coords: &[f64]) -> Point {
        Point::from_row_slice(coords)
    }

    fn build(points: Vec<Point>, leaf_size: usize) -> BspNode {
        BspNode::build(points, leaf_size, &FarthestPair)
    }

    #[test]
    fn small_bucket_stays_a_leaf() {
        let node = build(vec![pt(&[0.0, 0.0]), pt(&[1.0, 1.0])], 2);
        assert!(node.is_leaf());
        assert_eq!(node.points().len(), 2);
        assert_eq!(node.depth(), 1);
        assert!(node.pivot().is_none());
    }

    #[test]
    fn empty_bucket_is_a_valid_leaf() {
        let node = build(vec![], 1);
        assert!(node.is_leaf());
        assert_eq!(node.point_count(), 0);
    }

    #[test]
    fn over_threshold_bucket_splits() {
        let node = build(
            vec![pt(&[0.0, 0.0]), pt(&[1.0, 0.0]), pt(&[10.0, 0.0])],
            2,
        );

        assert!(!node.is_leaf());
        // Internal nodes retain no points of their own.
        assert!(node.points().is_empty());
        assert_eq!(node.point_count(), 3);
        assert_eq!(node.depth(), 2);
    }

    #[test]
    fn split_children_carry_their_poles_as_pivots() {
        let node = build(
            vec![pt(&[0.0, 0.0]), pt(&[1.0, 0.0]), pt(&[10.0, 0.0])],
            2,
        );

        // The farthest-pair poles of this bucket are (10, 0) and (0, 0).
        let first = node.first().unwrap();
        let second = node.second().unwrap();
        assert_eq!(first.pivot().unwrap(), &pt(&[10.0, 0.0]));
        assert_eq!(second.pivot().unwrap(), &pt(&[0.0, 0.0]));

        // Each pole is a member of its own group.
        assert!(first.points().contains(&pt(&[10.0, 0.0])));
        assert!(second.points().contains(&pt(&[0.0, 0.0])));
        // The midpoint (1, 0) is strictly closer to (0, 0).
        assert!(second.points().contains(&pt(&[1.0, 0.0])));
    }

    #[test]
    fn insert_appends_to_a_leaf() {
        let mut node = build(vec![pt(&[0.0, 0.0])], 3);
        node.insert(pt(&[1.0, 1.0]), 3, &FarthestPair);
        assert!(node.is_leaf());
        assert_eq!(node.points().len(), 2);
    }

    #[test]
    fn insert_splits_an_overflowing_leaf() {
        let mut node = build(vec![pt(&[0.0, 0.0]), pt(&[10.0, 0.0])], 2);
        assert!(node.is_leaf());

        node.insert(pt(&[5.0, 1.0]), 2, &FarthestPair);
        assert!(!node.is_leaf());
        assert_eq!(node.point_count(), 3);
    }

    #[test]
    fn insert_routes_ties_to_the_second_child() {
        let mut node = build(
            vec![pt(&[0.0, 0.0]), pt(&[1.0, 0.0]), pt(&[10.0, 0.0])],
            2,
        );
        let first_count = node.first().unwrap().point_count();

        // (5, 0) is equidistant from the pivots (10, 0) and (0, 0).
        node.insert(pt(&[5.0, 0.0]), 2, &FarthestPair);

        assert_eq!(node.first().unwrap().point_count(), first_count);
        assert!(node.second().unwrap().point_count() > 0);
        assert!(
            node.second()
                .unwrap()
                .point_query(&pt(&[5.0, 0.0]))
                .is_some()
        );
    }

    #[test]
    fn point_query_misses_without_backtracking() {
        let node = build(
            vec![pt(&[0.0, 0.0]), pt(&[1.0, 0.0]), pt(&[10.0, 0.0])],
            2,
        );
        // Absent point: the reached leaf decides, not the whole tree.
        assert!(node.point_query(&pt(&[4.0, 4.0])).is_none());
    }

    #[test]
    fn range_query_with_coincident_pivots_searches_both_children() {
        // Five identical points with leaf capacity 1 force splits whose
        // poles coincide.
        let p = pt(&[3.0, 3.0]);
        let node = build(vec![p.clone(); 5], 1);

        let rect = HRect::from_corners(&p, &p).unwrap();
        let mut out = Vec::new();
        node.range_query(&rect, &mut out);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn extremal_corner_picks_the_bound_facing_the_pole() {
        let rect = HRect::from_corners(&pt(&[0.0, 0.0]), &pt(&[10.0, 10.0])).unwrap();
        let pole = pt(&[0.0, 10.0]);
        let other = pt(&[10.0, 0.0]);

        // Toward (0, 10): the low x bound and the high y bound.
        assert_eq!(extremal_corner(&rect, &pole, &other), pt(&[0.0, 10.0]));
        // Toward (10, 0): the mirror corner.
        assert_eq!(extremal_corner(&rect, &other, &pole), pt(&[10.0, 0.0]));
    }
}
