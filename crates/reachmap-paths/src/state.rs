use reachmap_core::{OccupancyGrid, Point, Range};

use crate::error::AnalyzeError;

/// Sentinel distance meaning "not visited in the current run".
pub const UNVISITED: i32 = -1;

/// Human-readable meaning of the two ends of a heat scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatLabels {
    /// What a high heat value means.
    pub high: String,
    /// What a low heat value means.
    pub low: String,
}

impl HeatLabels {
    pub fn new(high: impl Into<String>, low: impl Into<String>) -> Self {
        Self {
            high: high.into(),
            low: low.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AlgorithmState
// ---------------------------------------------------------------------------

/// Per-instance buffers shared by every traversal strategy.
///
/// `AlgorithmState` owns a distance buffer and a heat buffer sized to one
/// grid, so that repeated queries against grids of that size incur no
/// allocations. Both buffers are row-major.
#[derive(Debug, Clone)]
pub struct AlgorithmState {
    rng: Range,
    width: usize,
    distances: Vec<i32>,
    heat: Vec<i32>,
    max_heat: i32,
    peak_heat: i32,
    name: &'static str,
    labels: HeatLabels,
}

impl AlgorithmState {
    /// Create cleared buffers for a grid of the given size.
    pub fn new(name: &'static str, labels: HeatLabels, size: Point) -> Self {
        let rng = Range::from_size(size);
        let len = rng.len();
        Self {
            rng,
            width: rng.width() as usize,
            distances: vec![UNVISITED; len],
            heat: vec![0; len],
            max_heat: 0,
            peak_heat: 0,
            name,
            labels,
        }
    }

    /// Reset every distance to [`UNVISITED`] and every heat value to 0.
    pub fn clear(&mut self) {
        self.distances.fill(UNVISITED);
        self.heat.fill(0);
        self.max_heat = 0;
        self.peak_heat = 0;
    }

    /// Re-target the buffers at a grid of a different size.
    ///
    /// Existing allocations are reused when the new cell count fits within
    /// them. The buffers are left cleared either way.
    pub fn resize(&mut self, size: Point) {
        let rng = Range::from_size(size);
        let new_len = rng.len();
        if new_len > self.distances.capacity() {
            log::debug!(
                "{}: growing buffers from {} to {} cells",
                self.name,
                self.distances.capacity(),
                new_len
            );
        }
        self.rng = rng;
        self.width = rng.width() as usize;
        self.distances.clear();
        self.distances.resize(new_len, UNVISITED);
        self.heat.clear();
        self.heat.resize(new_len, 0);
        self.max_heat = 0;
        self.peak_heat = 0;
    }

    /// Validate `grid` and `start`, clear the buffers, and return the flat
    /// index of `start`.
    pub(crate) fn begin(
        &mut self,
        grid: &OccupancyGrid,
        start: Point,
    ) -> Result<usize, AnalyzeError> {
        if grid.size() != self.rng.size() {
            return Err(AnalyzeError::SizeMismatch {
                expected: self.rng.size(),
                found: grid.size(),
            });
        }
        let Some(si) = self.idx(start) else {
            return Err(AnalyzeError::StartOutOfBounds {
                start,
                bounds: self.rng,
            });
        };
        if !grid.is_open(start) {
            return Err(AnalyzeError::StartBlocked(start));
        }
        self.clear();
        Ok(si)
    }

    /// Record the largest heat value present, used for normalisation.
    pub(crate) fn finish(&mut self) {
        self.peak_heat = self.heat.iter().copied().max().unwrap_or(0);
    }

    // -----------------------------------------------------------------------
    // Buffer access for strategies
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn distance(&self, idx: usize) -> i32 {
        self.distances[idx]
    }

    #[inline]
    pub(crate) fn set_distance(&mut self, idx: usize, d: i32) {
        self.distances[idx] = d;
    }

    #[inline]
    pub(crate) fn set_heat(&mut self, idx: usize, h: i32) {
        self.heat[idx] = h;
    }

    /// Increment the heat at `idx` and return the new value.
    #[inline]
    pub(crate) fn bump_heat(&mut self, idx: usize) -> i32 {
        self.heat[idx] += 1;
        self.heat[idx]
    }

    #[inline]
    pub(crate) fn set_max_heat(&mut self, h: i32) {
        self.max_heat = h;
    }

    pub(crate) fn labels_mut(&mut self) -> &mut HeatLabels {
        &mut self.labels
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The grid rectangle the buffers are sized for.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Display name of the strategy owning these buffers.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn labels(&self) -> &HeatLabels {
        &self.labels
    }

    /// Distance from the start at `p`, or [`UNVISITED`] if `p` was not
    /// reached or lies outside the range.
    pub fn distance_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.distances[i],
            None => UNVISITED,
        }
    }

    /// Heat at `p`, 0 outside the range.
    pub fn heat_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.heat[i],
            None => 0,
        }
    }

    /// The strategy-specific maximum heat of the last run.
    #[inline]
    pub fn max_heat(&self) -> i32 {
        self.max_heat
    }

    /// Heat at `p` scaled into `[0, 1]` by the largest heat value of the
    /// last run.
    pub fn normalized_heat(&self, p: Point) -> f32 {
        if self.peak_heat <= 0 {
            return 0.0;
        }
        self.heat_at(p) as f32 / self.peak_heat as f32
    }

    /// Row-major distance buffer.
    #[inline]
    pub fn distances(&self) -> &[i32] {
        &self.distances
    }

    /// Row-major heat buffer.
    #[inline]
    pub fn heat(&self) -> &[i32] {
        &self.heat
    }

    /// Every visited cell with its distance, in row-major order.
    pub fn reached(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.rng
            .iter()
            .zip(self.distances.iter().copied())
            .filter(|&(_, d)| d != UNVISITED)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
