//! A binary occupancy grid.
//!
//! [`Tile`] is either [`Open`](Tile::Open) or [`Blocked`](Tile::Blocked).
//! [`OccupancyGrid`] stores `width × height` tiles row-major and is only
//! ever read by the traversal algorithms, so it can be shared freely
//! between threads while analyses run.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// The state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Traversable.
    #[default]
    Open,
    /// Impassable.
    Blocked,
}

impl Tile {
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }

    /// ASCII representation used by [`OccupancyGrid::parse`].
    pub const fn as_char(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Blocked => '#',
        }
    }

    /// Inverse of [`as_char`](Self::as_char).
    pub const fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '.' => Some(Tile::Open),
            '#' => Some(Tile::Blocked),
            _ => None,
        }
    }
}

/// A `width × height` matrix of [`Tile`]s with its origin at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl OccupancyGrid {
    /// Create a new grid with every tile open.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Open; (width * height) as usize],
        }
    }

    /// Parse an ASCII map: `.` is open, `#` is blocked, one line per row.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, GridParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new(0, 0));
        }
        let mut width: Option<usize> = None;
        let mut tiles = Vec::with_capacity(s.len());
        let mut height = 0;
        for (y, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut w = 0;
            for (x, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(GridParseError::InvalidRune {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                tiles.push(tile);
                w += 1;
            }
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(GridParseError::InconsistentSize {
                        line: y,
                        expected,
                        found: w,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        Ok(Self {
            width: width.unwrap_or(0) as i32,
            height,
            tiles,
        })
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Get the tile at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_open)
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Fill the grid using a function that takes each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Tile) {
        for (p, t) in self.bounds().iter().zip(self.tiles.iter_mut()) {
            *t = f(p);
        }
    }

    /// Count how many tiles equal `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Row-major tiles.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.tiles.iter().copied())
    }

    /// Open cardinal neighbours of `p`, in left, right, up, down order.
    pub fn open_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(move |&n| self.is_open(n))
    }
}

impl FromStr for OccupancyGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let i = (y * self.width + x) as usize;
                write!(f, "{}", self.tiles[i].as_char())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing an ASCII grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// A line's width differs from the first line's.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `.` or `#` was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune '{ch}' at {pos}")
            }
        }
    }
}

impl std::error::Error for GridParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
####
#..#
#.##
####";

    #[test]
    fn test_new_and_size() {
        let g = OccupancyGrid::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.count(Tile::Open), 50);
        assert_eq!(g.bounds().len(), 50);
    }

    #[test]
    fn test_set_and_at() {
        let mut g = OccupancyGrid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Tile::Blocked);
        assert_eq!(g.at(p), Some(Tile::Blocked));
        assert_eq!(g.at(Point::new(0, 0)), Some(Tile::Open));
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert!(!g.is_open(Point::new(-1, 0)));
        g.set(Point::new(4, 0), Tile::Blocked);
        assert_eq!(g.count(Tile::Blocked), 1);
    }

    #[test]
    fn fill_fn_row_major() {
        let mut g = OccupancyGrid::new(3, 2);
        g.fill_fn(|p| if p.x == p.y { Tile::Blocked } else { Tile::Open });
        assert_eq!(g.to_string(), "#..\n.#.");
    }

    #[test]
    fn parse_room() {
        let g = OccupancyGrid::parse(ROOM).unwrap();
        assert_eq!(g.size(), Point::new(4, 4));
        assert_eq!(g.count(Tile::Open), 3);
        assert!(g.is_open(Point::new(1, 2)));
        assert!(!g.is_open(Point::new(2, 2)));
        assert_eq!(g.to_string(), ROOM);
    }

    #[test]
    fn parse_via_from_str() {
        let g: OccupancyGrid = "..\n.#".parse().unwrap();
        assert_eq!(g.at(Point::new(1, 1)), Some(Tile::Blocked));
    }

    #[test]
    fn parse_rejects_inconsistent_width() {
        let err = OccupancyGrid::parse("...\n..").unwrap_err();
        assert_eq!(
            err,
            GridParseError::InconsistentSize {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_invalid_rune() {
        let err = OccupancyGrid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridParseError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert_eq!(err.to_string(), "grid contains invalid rune 'x' at (1, 1)");
    }

    #[test]
    fn open_neighbors_filters_and_orders() {
        let g = OccupancyGrid::parse(
            "\
.#.
...
.#.",
        )
        .unwrap();
        let n: Vec<Point> = g.open_neighbors(Point::new(1, 1)).collect();
        assert_eq!(n, vec![Point::new(0, 1), Point::new(2, 1)]);
        let corner: Vec<Point> = g.open_neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(0, 1)]);
    }

    #[test]
    fn iter_pairs() {
        let g = OccupancyGrid::parse(".#").unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(
            items,
            vec![(Point::new(0, 0), Tile::Open), (Point::new(1, 0), Tile::Blocked)]
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = OccupancyGrid::parse("#.\n..").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: OccupancyGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
