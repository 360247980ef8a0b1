use reachmap_core::Point;

use crate::state::AlgorithmState;

/// The reached cell farthest from `start`, with its distance.
///
/// Scans column by column (x outer, y inner) and keeps the first cell
/// holding the maximum, so ties resolve to the leftmost, then topmost cell.
/// When nothing lies beyond the start the result is `(start, 0)`.
pub fn farthest_point(state: &AlgorithmState, start: Point) -> (Point, i32) {
    let size = state.range().size();
    let mut best = (start, 0);
    for x in 0..size.x {
        for y in 0..size.y {
            let p = Point::new(x, y);
            let d = state.distance_at(p);
            if d > best.1 {
                best = (p, d);
            }
        }
    }
    best
}
