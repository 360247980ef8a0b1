//! Generate a random map, analyze it with every strategy, and report the
//! far endpoint and timings.
//!
//! Run: cargo run --bin reachmap -- [width] [height] [seed]
//! Set `RUST_LOG=debug` to see per-run traversal details.

use reachmap_demos::{DemoConfig, random_grid, random_start, seeded_rng};
use reachmap_paths::{MapAnalyzer, VisitLimits};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = DemoConfig::from_args(std::env::args().skip(1))?;
    log::info!(
        "generating {}x{} map, seed {}, {}% open",
        cfg.width,
        cfg.height,
        cfg.seed,
        cfg.open_chance
    );

    let mut rng = seeded_rng(cfg.seed);
    let grid = random_grid(&cfg, &mut rng);
    let start = random_start(&grid, &mut rng).ok_or("generated map has no open tiles")?;
    log::debug!("map:\n{grid}");

    let limits = VisitLimits::default().with_max_visits(cfg.max_visits);
    let mut analyzer = MapAnalyzer::new(grid.size(), limits);
    let reports = analyzer.run(&grid, start)?;

    println!("start: {start}");
    for r in &reports {
        let labels = analyzer
            .algorithm(r.strategy)
            .map(|alg| alg.state().labels().clone());
        println!(
            "{:<16} end {} at distance {:>3}  reached {:>4}  max heat {:>6}  {:?}",
            r.strategy.to_string(),
            r.endpoint,
            r.max_distance,
            r.reached,
            r.max_heat,
            r.elapsed
        );
        if let Some(labels) = labels {
            log::debug!("{}: high = {:?}, low = {:?}", r.strategy, labels.high, labels.low);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
