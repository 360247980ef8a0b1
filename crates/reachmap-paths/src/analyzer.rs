//! Runs every strategy against one grid and extracts the far endpoint.

use std::time::{Duration, Instant};

use reachmap_core::{OccupancyGrid, Point};

use crate::config::VisitLimits;
use crate::error::AnalyzeError;
use crate::farthest::farthest_point;
use crate::traits::{Algorithm, Strategy};

/// Outcome of one strategy's run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub strategy: Strategy,
    /// The reached cell farthest from the start.
    pub endpoint: Point,
    pub max_distance: i32,
    pub max_heat: i32,
    /// Number of cells with a distance.
    pub reached: usize,
    pub elapsed: Duration,
}

/// Owns one algorithm per strategy and runs them all against a grid.
///
/// The algorithms keep their buffers between runs, so after
/// [`run`](Self::run) the distance and heat maps of each strategy can be
/// read back through [`algorithm`](Self::algorithm).
pub struct MapAnalyzer {
    size: Point,
    algorithms: Vec<(Strategy, Box<dyn Algorithm + Send>)>,
}

impl MapAnalyzer {
    /// Create an analyzer running every strategy, in [`Strategy::ALL`] order.
    pub fn new(size: Point, limits: VisitLimits) -> Self {
        Self::with_strategies(size, &Strategy::ALL, limits)
    }

    /// Create an analyzer running only `strategies`, in the given order.
    pub fn with_strategies(size: Point, strategies: &[Strategy], limits: VisitLimits) -> Self {
        let algorithms = strategies
            .iter()
            .map(|&s| (s, s.build(size, limits)))
            .collect();
        Self { size, algorithms }
    }

    /// The grid size the algorithms are currently sized for.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Re-target every algorithm at grids of `size`.
    pub fn resize(&mut self, size: Point) {
        self.size = size;
        for (_, alg) in self.algorithms.iter_mut() {
            alg.resize(size);
        }
    }

    /// The algorithm for `strategy`, if this analyzer runs it.
    pub fn algorithm(&self, strategy: Strategy) -> Option<&(dyn Algorithm + Send)> {
        self.algorithms
            .iter()
            .find(|(s, _)| *s == strategy)
            .map(|(_, alg)| alg.as_ref())
    }

    /// Clear and run every algorithm from `start`, returning one report per
    /// strategy in run order.
    ///
    /// The algorithms are resized first if `grid` differs in size from the
    /// last run. The first failing strategy aborts the whole run.
    pub fn run(
        &mut self,
        grid: &OccupancyGrid,
        start: Point,
    ) -> Result<Vec<AnalysisReport>, AnalyzeError> {
        if grid.size() != self.size {
            log::debug!("resizing analyzer from {} to {}", self.size, grid.size());
            self.resize(grid.size());
        }

        let mut reports = Vec::with_capacity(self.algorithms.len());
        for (strategy, alg) in self.algorithms.iter_mut() {
            alg.clear();
            let t0 = Instant::now();
            alg.analyze(grid, start)?;
            let elapsed = t0.elapsed();

            let state = alg.state();
            let (endpoint, max_distance) = farthest_point(state, start);
            reports.push(AnalysisReport {
                strategy: *strategy,
                endpoint,
                max_distance,
                max_heat: state.max_heat(),
                reached: state.reached().count(),
                elapsed,
            });
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UNVISITED;
    use reachmap_core::Tile;

    const MAZE: &str = "\
.....#....
.###.#.##.
...#...#..
##.#####.#
.........#";

    #[test]
    fn runs_all_strategies_in_order() {
        let g = OccupancyGrid::parse(MAZE).unwrap();
        let mut an = MapAnalyzer::new(g.size(), VisitLimits::default());
        let reports = an.run(&g, Point::ZERO).unwrap();
        let order: Vec<Strategy> = reports.iter().map(|r| r.strategy).collect();
        assert_eq!(order, vec![Strategy::RecursiveVisit, Strategy::FloodFill]);
        assert_eq!(reports[0].endpoint, reports[1].endpoint);
        assert_eq!(reports[0].max_distance, reports[1].max_distance);
        assert_eq!(reports[0].reached, reports[1].reached);
        assert_eq!(reports[1].max_heat, reports[1].max_distance);
    }

    #[test]
    fn buffers_readable_after_run() {
        let g = OccupancyGrid::parse(MAZE).unwrap();
        let mut an = MapAnalyzer::new(g.size(), VisitLimits::default());
        an.run(&g, Point::ZERO).unwrap();
        let ff = an.algorithm(Strategy::FloodFill).unwrap();
        let rv = an.algorithm(Strategy::RecursiveVisit).unwrap();
        assert_eq!(ff.state().distances(), rv.state().distances());
        assert_eq!(ff.name(), "Flood fill");
        assert!(rv.state().labels().high.starts_with("High visit count ("));
        // (9, 4) is blocked.
        assert_eq!(ff.state().distance_at(Point::new(9, 4)), UNVISITED);
    }

    #[test]
    fn resizes_for_a_new_grid() {
        let mut an = MapAnalyzer::new(Point::new(2, 2), VisitLimits::default());
        let g = OccupancyGrid::new(4, 3);
        let reports = an.run(&g, Point::new(3, 2)).unwrap();
        assert_eq!(an.size(), Point::new(4, 3));
        for r in &reports {
            assert_eq!(r.endpoint, Point::ZERO);
            assert_eq!(r.max_distance, 5);
            assert_eq!(r.reached, 12);
        }
    }

    #[test]
    fn selected_strategies_only() {
        let g = OccupancyGrid::new(3, 3);
        let mut an =
            MapAnalyzer::with_strategies(g.size(), &[Strategy::FloodFill], VisitLimits::default());
        let reports = an.run(&g, Point::new(1, 1)).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].endpoint, Point::new(0, 0));
        assert!(an.algorithm(Strategy::RecursiveVisit).is_none());
    }

    #[test]
    fn invalid_start_aborts() {
        let mut g = OccupancyGrid::new(3, 3);
        g.set(Point::new(1, 1), Tile::Blocked);
        let mut an = MapAnalyzer::new(g.size(), VisitLimits::default());
        let err = an.run(&g, Point::new(1, 1)).unwrap_err();
        assert_eq!(err, AnalyzeError::StartBlocked(Point::new(1, 1)));
    }

    #[test]
    fn exhausted_budget_aborts() {
        let g = OccupancyGrid::new(5, 5);
        let limits = VisitLimits::default().with_max_visits(10);
        let mut an = MapAnalyzer::new(g.size(), limits);
        assert_eq!(
            an.run(&g, Point::ZERO),
            Err(AnalyzeError::ResourceExhausted { limit: 10 })
        );
    }

    #[test]
    fn separate_instances_share_a_grid_across_threads() {
        let g = OccupancyGrid::parse(MAZE).unwrap();
        let mut algs: Vec<Box<dyn Algorithm + Send>> = Strategy::ALL
            .iter()
            .map(|s| s.build(g.size(), VisitLimits::default()))
            .collect();
        std::thread::scope(|scope| {
            let handles: Vec<_> = algs
                .iter_mut()
                .map(|alg| {
                    let g = &g;
                    scope.spawn(move || alg.analyze(g, Point::ZERO))
                })
                .collect();
            for h in handles {
                h.join().unwrap().unwrap();
            }
        });
        assert_eq!(algs[0].state().distance_at(Point::ZERO), 0);
        assert_eq!(algs[0].state().distances(), algs[1].state().distances());
    }
}
