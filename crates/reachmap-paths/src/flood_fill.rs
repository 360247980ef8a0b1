use reachmap_core::{OccupancyGrid, Point};

use crate::error::AnalyzeError;
use crate::state::{AlgorithmState, HeatLabels, UNVISITED};
use crate::traits::Algorithm;

/// Breadth-first traversal producing shortest 4-connected distances.
///
/// Cells are expanded ring by ring: every cell at distance `d` is visited
/// before any cell at distance `d + 1`. A cell's distance is fixed when it
/// is first discovered, so each cell is visited exactly once. Heat is
/// `distance + 1`, and [`max_heat`](AlgorithmState::max_heat) is the
/// eccentricity of the start cell within its component.
pub struct FloodFill {
    state: AlgorithmState,
    // Frontiers, swapped between rounds. Each has room for every cell, so
    // a round never reallocates or drops cells.
    current: Vec<usize>,
    next: Vec<usize>,
}

impl FloodFill {
    pub const NAME: &'static str = "Flood fill";

    /// Create a flood fill sized for grids of `size`.
    pub fn new(size: Point) -> Self {
        let state = AlgorithmState::new(Self::NAME, HeatLabels::new("Longer", "Closer"), size);
        let len = state.range().len();
        Self {
            state,
            current: Vec::with_capacity(len),
            next: Vec::with_capacity(len),
        }
    }
}

impl Algorithm for FloodFill {
    fn state(&self) -> &AlgorithmState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut AlgorithmState {
        &mut self.state
    }

    fn analyze(&mut self, grid: &OccupancyGrid, start: Point) -> Result<(), AnalyzeError> {
        let si = self.state.begin(grid, start)?;

        self.current.clear();
        self.next.clear();
        self.current.push(si);
        self.state.set_distance(si, 0);

        let mut distance = 0;
        let mut reached = 0usize;

        while !self.current.is_empty() {
            self.next.clear();
            for &ci in self.current.iter() {
                self.state.set_distance(ci, distance);
                self.state.set_heat(ci, distance + 1);

                let cp = self.state.point(ci);
                for np in grid.open_neighbors(cp) {
                    let Some(ni) = self.state.idx(np) else {
                        continue;
                    };
                    if self.state.distance(ni) != UNVISITED {
                        continue;
                    }
                    self.state.set_distance(ni, distance + 1);
                    self.next.push(ni);
                }
            }
            reached += self.current.len();
            log::trace!(
                "flood fill round {distance}: {} cells, {} queued",
                self.current.len(),
                self.next.len()
            );
            std::mem::swap(&mut self.current, &mut self.next);
            distance += 1;
        }

        self.state.set_max_heat(distance - 1);
        self.state.finish();
        log::debug!(
            "flood fill from {start}: reached {reached} cells, eccentricity {}",
            distance - 1
        );
        Ok(())
    }

    fn resize(&mut self, size: Point) {
        self.state.resize(size);
        let len = self.state.range().len();
        self.current.clear();
        self.next.clear();
        self.current.reserve(len);
        self.next.reserve(len);
    }
}
