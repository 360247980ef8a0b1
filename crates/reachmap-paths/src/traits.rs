use std::fmt;

use reachmap_core::{OccupancyGrid, Point};

use crate::config::VisitLimits;
use crate::error::AnalyzeError;
use crate::flood_fill::FloodFill;
use crate::recursive_visit::RecursiveVisit;
use crate::state::AlgorithmState;

/// A traversal strategy computing distances and heat from a start cell.
///
/// Implementors own an [`AlgorithmState`] sized to one grid and reuse it
/// across queries.
pub trait Algorithm {
    fn state(&self) -> &AlgorithmState;

    fn state_mut(&mut self) -> &mut AlgorithmState;

    /// Reset the distance and heat buffers.
    fn clear(&mut self) {
        self.state_mut().clear();
    }

    /// Traverse `grid` from `start`, filling the distance and heat buffers.
    ///
    /// The buffers are cleared first, so results never carry over from a
    /// previous run. Cells not reachable through open tiles keep
    /// distance [`UNVISITED`](crate::UNVISITED).
    fn analyze(&mut self, grid: &OccupancyGrid, start: Point) -> Result<(), AnalyzeError>;

    /// Re-target the algorithm at grids of a different size.
    fn resize(&mut self, size: Point) {
        self.state_mut().resize(size);
    }

    fn name(&self) -> &str {
        self.state().name()
    }
}

/// Selects a concrete [`Algorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first, one visit per cell.
    FloodFill,
    /// Exhaustive depth-first with revisit-on-improvement.
    RecursiveVisit,
}

impl Strategy {
    /// Every strategy, in the order a host runs them.
    pub const ALL: [Strategy; 2] = [Strategy::RecursiveVisit, Strategy::FloodFill];

    /// Build an algorithm sized for a grid of `size`.
    pub fn build(self, size: Point, limits: VisitLimits) -> Box<dyn Algorithm + Send> {
        match self {
            Strategy::FloodFill => Box::new(FloodFill::new(size)),
            Strategy::RecursiveVisit => Box::new(RecursiveVisit::with_limits(size, limits)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::FloodFill => f.write_str(FloodFill::NAME),
            Strategy::RecursiveVisit => f.write_str(RecursiveVisit::NAME),
        }
    }
}
