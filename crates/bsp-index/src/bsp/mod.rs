//! Binary space partitioning tree for point collections.
//!
//! This module provides a BSP tree implementation that recursively
//! partitions a point collection around pairs of well-separated "pole"
//! points. The tree enables:
//!
//! - Axis-aligned range queries over the stored points
//! - Exact point lookup by nearest-pivot routing
//! - Incremental insertion with local leaf splits
//!
//! # Example
//!
//! ```
//! use bsp_index::{BspTree, CollectingVisitor, HRect, Point};
//!
//! // Build a tree from points
//! let points = vec![
//!     Point::from_row_slice(&[0.0, 0.0]),
//!     Point::from_row_slice(&[10.0, 10.0]),
//!     Point::from_row_slice(&[0.0, 10.0]),
//!     Point::from_row_slice(&[10.0, 0.0]),
//!     Point::from_row_slice(&[5.0, 5.0]),
//! ];
//! let tree = BspTree::new(2, 2, points)?;
//!
//! // Query a region
//! let region = HRect::from_corners(
//!     &Point::from_row_slice(&[0.0, 0.0]),
//!     &Point::from_row_slice(&[4.0, 4.0]),
//! )?;
//! let matches = tree.range_query(&region)?;
//! assert_eq!(matches.len(), 1);
//!
//! // Walk the stored points leaf by leaf
//! let mut visitor = CollectingVisitor::new();
//! tree.visit_leaves(&mut visitor);
//! assert_eq!(visitor.points().len(), 5);
//! # Ok::<(), bsp_index::BspError>(())
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: The main container holding the root node
//! - [`BspNode`]: Tree nodes, either leaf buckets or internal routing nodes
//! - [`PoleSelector`]: Strategy trait for choosing split poles
//! - [`LeafVisitor`]: Visitor trait for custom leaf traversal

mod node;
mod selector;
mod tree;
mod visitor;

// Re-export main types
pub use node::BspNode;
pub use selector::{FarthestPair, PoleSelector};
pub use tree::BspTree;
pub use visitor::{CollectingVisitor, FnVisitor, LeafVisitor};
