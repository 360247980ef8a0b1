//! Host side of the reachmap demo: random map generation and start
//! selection, the parts the analysis crates leave to their caller.

use std::fmt;

use rand::{Rng, RngExt, SeedableRng};
use reachmap_core::{OccupancyGrid, Point, Tile};

pub const DEFAULT_WIDTH: i32 = 20;
pub const DEFAULT_HEIGHT: i32 = 12;
/// Percent chance that a generated tile is open.
pub const DEFAULT_OPEN_CHANCE: u32 = 60;
/// Visit budget for the recursive strategy on generated maps.
pub const DEFAULT_MAX_VISITS: u64 = 50_000_000;

/// Demo settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    /// Percent chance (0-100) that a tile is open.
    pub open_chance: u32,
    pub seed: u64,
    pub max_visits: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            open_chance: DEFAULT_OPEN_CHANCE,
            seed: 42,
            max_visits: DEFAULT_MAX_VISITS,
        }
    }
}

impl DemoConfig {
    /// Parse positional arguments `[width] [height] [seed]`, falling back to
    /// defaults for any that are missing.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cfg = Self::default();
        for (i, arg) in args.into_iter().enumerate() {
            let arg = arg.as_ref();
            match i {
                0 => cfg.width = parse_dim("width", arg)?,
                1 => cfg.height = parse_dim("height", arg)?,
                2 => {
                    cfg.seed = arg.parse().map_err(|_| ConfigError::Invalid {
                        name: "seed",
                        value: arg.to_string(),
                    })?
                }
                _ => return Err(ConfigError::TooManyArgs(i + 1)),
            }
        }
        Ok(cfg)
    }
}

fn parse_dim(name: &'static str, s: &str) -> Result<i32, ConfigError> {
    match s.parse::<i32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::Invalid {
            name,
            value: s.to_string(),
        }),
    }
}

/// Errors from command-line configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { name: &'static str, value: String },
    TooManyArgs(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { name, value } => write!(f, "invalid {name}: {value:?}"),
            Self::TooManyArgs(n) => {
                write!(f, "expected at most 3 arguments (width height seed), got {n}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Generate a map where each tile is independently open with
/// `cfg.open_chance` percent probability.
pub fn random_grid(cfg: &DemoConfig, rng: &mut impl Rng) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(cfg.width, cfg.height);
    grid.fill_fn(|_| {
        if rng.random_range(0..100) < cfg.open_chance {
            Tile::Open
        } else {
            Tile::Blocked
        }
    });
    grid
}

/// Pick a uniformly random open tile. Returns `None` on a fully blocked map.
pub fn random_start(grid: &OccupancyGrid, rng: &mut impl Rng) -> Option<Point> {
    let open = grid.count(Tile::Open);
    if open == 0 {
        return None;
    }
    let nth = rng.random_range(0..open);
    grid.iter()
        .filter(|&(_, t)| t.is_open())
        .nth(nth)
        .map(|(p, _)| p)
}

/// Seeded generator for reproducible maps.
pub fn seeded_rng(seed: u64) -> rand::rngs::StdRng {
    rand::rngs::StdRng::seed_from_u64(seed)
}
