//! Exhaustive depth-first traversal with revisit-on-improvement.

use reachmap_core::{OccupancyGrid, Point};

use crate::config::VisitLimits;
use crate::error::AnalyzeError;
use crate::state::{AlgorithmState, HeatLabels, UNVISITED};
use crate::traits::Algorithm;

/// One pending cell on the depth-first stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    idx: usize,
    distance: i32,
    /// Index into [`Point::neighbors_4`] of the next neighbour to try.
    next_dir: u8,
}

/// Depth-first traversal that re-enters a cell whenever a strictly shorter
/// path to it is found.
///
/// Every entry into a cell increments its heat, so heat counts how often a
/// cell was explored. Distances converge to the shortest 4-connected
/// distance, but the number of visits can grow far beyond the cell count
/// on open maps; [`VisitLimits`] bounds it.
///
/// The traversal runs on an explicit frame stack rather than native
/// recursion. A chain of frames is always a simple path (distances grow by
/// one along it and a cell is only re-entered at a strictly smaller
/// distance), so the stack never holds more frames than there are cells.
pub struct RecursiveVisit {
    state: AlgorithmState,
    limits: VisitLimits,
    stack: Vec<Frame>,
    visits: u64,
}

impl RecursiveVisit {
    pub const NAME: &'static str = "Recursive visit";
    const HIGH_LABEL: &'static str = "High visit count";

    /// Create an unbounded recursive visit sized for grids of `size`.
    pub fn new(size: Point) -> Self {
        Self::with_limits(size, VisitLimits::default())
    }

    pub fn with_limits(size: Point, limits: VisitLimits) -> Self {
        let state = AlgorithmState::new(
            Self::NAME,
            HeatLabels::new(Self::HIGH_LABEL, "Low visit count"),
            size,
        );
        Self {
            state,
            limits,
            stack: Vec::new(),
            visits: 0,
        }
    }

    pub fn limits(&self) -> VisitLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: VisitLimits) {
        self.limits = limits;
    }

    /// Number of cell visits performed by the last run.
    pub fn visits(&self) -> u64 {
        self.visits
    }

    /// Enter a cell: bump its heat, record the distance, and push a frame.
    /// Returns the cell's new heat.
    fn enter(&mut self, idx: usize, distance: i32) -> Result<i32, AnalyzeError> {
        self.visits += 1;
        if let Err(err) = self.limits.check(self.visits) {
            log::warn!(
                "recursive visit aborted after {} visits: {err}",
                self.visits - 1
            );
            return Err(err);
        }
        let heat = self.state.bump_heat(idx);
        self.state.set_distance(idx, distance);
        self.stack.push(Frame {
            idx,
            distance,
            next_dir: 0,
        });
        Ok(heat)
    }
}

impl Algorithm for RecursiveVisit {
    fn state(&self) -> &AlgorithmState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut AlgorithmState {
        &mut self.state
    }

    fn analyze(&mut self, grid: &OccupancyGrid, start: Point) -> Result<(), AnalyzeError> {
        let si = self.state.begin(grid, start)?;
        self.state.labels_mut().high = Self::HIGH_LABEL.to_string();
        self.stack.clear();
        self.visits = 0;

        let mut max_heat = self.enter(si, 0)?;
        let mut max_depth = 1;

        while let Some(top) = self.stack.last_mut() {
            if top.next_dir as usize == 4 {
                self.stack.pop();
                continue;
            }
            let dir = top.next_dir as usize;
            top.next_dir += 1;
            let (ci, cd) = (top.idx, top.distance);

            let np = self.state.point(ci).neighbors_4()[dir];
            if !grid.is_open(np) {
                continue;
            }
            let Some(ni) = self.state.idx(np) else {
                continue;
            };
            let nd = cd + 1;
            let stored = self.state.distance(ni);
            if stored != UNVISITED && stored <= nd {
                continue;
            }

            let heat = self.enter(ni, nd)?;
            max_heat = max_heat.max(heat);
            max_depth = max_depth.max(self.stack.len());
        }

        self.state.set_max_heat(max_heat);
        self.state.labels_mut().high = format!("{} ({max_heat})", Self::HIGH_LABEL);
        self.state.finish();
        log::debug!(
            "recursive visit from {start}: {} visits, max heat {max_heat}, max depth {max_depth}",
            self.visits
        );
        Ok(())
    }
}
