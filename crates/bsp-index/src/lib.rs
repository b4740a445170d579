//! BSP (Binary Space Partitioning) index for point sets.
//!
//! A spatial index over points in fixed-dimensional Euclidean space,
//! supporting bulk construction, incremental insertion, exact point
//! lookup, and axis-aligned range queries. See [`BspTree`] for the main
//! entry point.

pub mod bsp;
mod error;
mod hrect;
mod point;

pub use bsp::{
    BspNode, BspTree, CollectingVisitor, FarthestPair, FnVisitor, LeafVisitor, PoleSelector,
};
pub use error::BspError;
pub use hrect::HRect;
pub use point::{Point, distance};
