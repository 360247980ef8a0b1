//! Distance and heat maps on occupancy grids.
//!
//! Given an [`OccupancyGrid`](reachmap_core::OccupancyGrid) and an open
//! start cell, every [`Algorithm`] fills a distance buffer with the
//! 4-connected distance from the start to each reachable cell and a heat
//! buffer describing how the traversal explored the grid:
//!
//! - **Flood fill** ([`FloodFill`]): breadth-first, one visit per cell,
//!   heat grows with distance.
//! - **Recursive visit** ([`RecursiveVisit`]): exhaustive depth-first with
//!   revisit-on-improvement, heat counts visits per cell.
//!
//! Both strategies produce identical distance buffers. Each algorithm owns
//! its buffers and reuses them across queries, so repeated analyses of
//! same-sized grids do not allocate. [`MapAnalyzer`] runs every strategy
//! and extracts the farthest reachable cell.

mod analyzer;
mod config;
mod distance;
mod error;
mod farthest;
mod flood_fill;
mod recursive_visit;
mod state;
mod traits;

pub use analyzer::{AnalysisReport, MapAnalyzer};
pub use config::VisitLimits;
pub use distance::manhattan;
pub use error::AnalyzeError;
pub use farthest::farthest_point;
pub use flood_fill::FloodFill;
pub use recursive_visit::RecursiveVisit;
pub use state::{AlgorithmState, HeatLabels, UNVISITED};
pub use traits::{Algorithm, Strategy};
