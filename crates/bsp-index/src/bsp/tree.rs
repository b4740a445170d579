//! BSP tree container and public operations.

use crate::bsp::node::BspNode;
use crate::bsp::selector::{FarthestPair, PoleSelector};
use crate::bsp::visitor::LeafVisitor;
use crate::{BspError, HRect, Point};

/// A binary space partitioning tree over points in fixed-dimensional
/// Euclidean space.
///
/// The tree recursively partitions an initial point collection into leaf
/// buckets of at most `leaf_size` points, choosing two well-separated
/// "pole" points per split and grouping every point with the nearer pole.
/// Queries and later insertions descend by comparing distances to the
/// routing pivots the splits left behind.
///
/// # Construction
///
/// ```
/// use bsp_index::{BspTree, Point};
///
/// let points = vec![
///     Point::from_row_slice(&[0.0, 0.0]),
///     Point::from_row_slice(&[10.0, 10.0]),
///     Point::from_row_slice(&[0.0, 10.0]),
/// ];
/// let tree = BspTree::new(2, 2, points)?;
/// assert_eq!(tree.len(), 3);
/// # Ok::<(), bsp_index::BspError>(())
/// ```
///
/// # Queries
///
/// ```
/// use bsp_index::{BspTree, HRect, Point};
///
/// let points = vec![
///     Point::from_row_slice(&[1.0, 1.0]),
///     Point::from_row_slice(&[9.0, 9.0]),
/// ];
/// let tree = BspTree::new(2, 4, points)?;
///
/// let rect = HRect::from_corners(
///     &Point::from_row_slice(&[0.0, 0.0]),
///     &Point::from_row_slice(&[5.0, 5.0]),
/// )?;
/// assert_eq!(tree.range_query(&rect)?.len(), 1);
/// assert!(tree.point_query(&Point::from_row_slice(&[9.0, 9.0]))?.is_some());
/// # Ok::<(), bsp_index::BspError>(())
/// ```
///
/// # Mutation
///
/// [`BspTree::insert`] appends to the receiving leaf and splits it when
/// it outgrows the leaf capacity. The tree only ever splits: nodes are
/// never merged, rebalanced, or removed, so heavily skewed insertion
/// orders can produce deep subtrees.
#[derive(Debug, Clone)]
pub struct BspTree<S: PoleSelector = FarthestPair> {
    dim: usize,
    leaf_size: usize,
    root: BspNode,
    selector: S,
}

impl BspTree {
    /// Builds a tree with the default [`FarthestPair`] pole selector.
    ///
    /// `dim` is the dimensionality every point must carry and `leaf_size`
    /// the maximum bucket size per leaf; both must be at least 1. The
    /// initial collection may be empty. Splitting happens eagerly: the
    /// returned tree already satisfies the leaf-capacity bound.
    pub fn new(dim: usize, leaf_size: usize, points: Vec<Point>) -> Result<Self, BspError> {
        Self::with_selector(dim, leaf_size, points, FarthestPair)
    }
}

impl<S: PoleSelector> BspTree<S> {
    /// Builds a tree using a custom pole selection strategy.
    ///
    /// The selector is retained and reused for splits triggered by later
    /// insertions.
    pub fn with_selector(
        dim: usize,
        leaf_size: usize,
        points: Vec<Point>,
        selector: S,
    ) -> Result<Self, BspError> {
        if dim == 0 {
            return Err(BspError::InvalidDimension);
        }
        if leaf_size == 0 {
            return Err(BspError::InvalidLeafSize);
        }
        for point in &points {
            check_dim(dim, point)?;
        }

        let root = BspNode::build(points, leaf_size, &selector);
        Ok(Self {
            dim,
            leaf_size,
            root,
            selector,
        })
    }

    /// Returns the dimensionality every stored point carries.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the maximum number of points a leaf bucket may hold.
    #[inline]
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    /// Returns a reference to the root node.
    #[inline]
    pub fn root(&self) -> &BspNode {
        &self.root
    }

    /// Returns the total number of stored points.
    pub fn len(&self) -> usize {
        self.root.point_count()
    }

    /// Returns `true` if the tree stores no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum depth of the tree. A tree that has never split
    /// has depth 1.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Inserts a point, splitting the receiving leaf if its bucket
    /// outgrows the leaf capacity.
    ///
    /// Returns [`BspError::DimensionMismatch`] if the point's
    /// dimensionality differs from the tree's.
    pub fn insert(&mut self, point: Point) -> Result<(), BspError> {
        check_dim(self.dim, &point)?;
        self.root.insert(point, self.leaf_size, &self.selector);
        Ok(())
    }

    /// Looks up a stored point exactly equal to `point` (all coordinates
    /// compared without tolerance).
    ///
    /// `Ok(None)` means no equal point was found at the leaf the query
    /// routed to; it is a valid negative result, not an error.
    pub fn point_query(&self, point: &Point) -> Result<Option<&Point>, BspError> {
        check_dim(self.dim, point)?;
        Ok(self.root.point_query(point))
    }

    /// Returns every stored point inside `rect` (closed boundaries, per
    /// [`HRect::contains`]). Result order is unspecified.
    pub fn range_query(&self, rect: &HRect) -> Result<Vec<&Point>, BspError> {
        if rect.dim() != self.dim {
            return Err(BspError::DimensionMismatch {
                expected: self.dim,
                actual: rect.dim(),
            });
        }

        let mut result = Vec::new();
        self.root.range_query(rect, &mut result);
        Ok(result)
    }

    /// Collects all stored points into a vector.
    ///
    /// The order of points is not guaranteed.
    pub fn collect_points(&self) -> Vec<Point> {
        let mut result = Vec::with_capacity(self.len());
        collect_points_recursive(&self.root, &mut result);
        result
    }

    /// Visits every leaf bucket in the tree, first subtrees before second.
    ///
    /// The visitor's `visit` method is called once per leaf; each stored
    /// point is presented exactly once.
    pub fn visit_leaves<V: LeafVisitor>(&self, visitor: &mut V) {
        visit_leaves_node(&self.root, visitor);
    }
}

/// Rejects points whose coordinate count differs from the tree's
/// dimensionality.
fn check_dim(expected: usize, point: &Point) -> Result<(), BspError> {
    if point.len() == expected {
        Ok(())
    } else {
        Err(BspError::DimensionMismatch {
            expected,
            actual: point.len(),
        })
    }
}

/// Recursively collects all points from a node subtree.
fn collect_points_recursive(node: &BspNode, result: &mut Vec<Point>) {
    result.extend(node.points().iter().cloned());
    if let Some(first) = node.first() {
        collect_points_recursive(first, result);
    }
    if let Some(second) = node.second() {
        collect_points_recursive(second, result);
    }
}

/// Recursively visits the leaf buckets of a node subtree.
fn visit_leaves_node<V: LeafVisitor>(node: &BspNode, visitor: &mut V) {
    if node.is_leaf() {
        visitor.visit(node.points());
        return;
    }
    if let Some(first) = node.first() {
        visit_leaves_node(first, visitor);
    }
    if let Some(second) = node.second() {
        visit_leaves_node(second, visitor);
    }
}
