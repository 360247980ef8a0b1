//! **reachmap-core** — core types for reachability analysis on occupancy
//! grids.
//!
//! This crate provides the geometry primitives and the binary
//! open/blocked grid that the traversal algorithms in `reachmap-paths`
//! read from.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{GridParseError, OccupancyGrid, Tile};
