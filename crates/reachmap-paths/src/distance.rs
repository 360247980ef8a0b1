use reachmap_core::Point;

/// Manhattan (L1) distance between two points: the shortest 4-connected
/// distance on a grid with no blocked tiles.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
