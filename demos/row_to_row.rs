//! Cross a map of horizontal walls from the top row to the bottom row.
//!
//! Run: cargo run --bin row-to-row [seed] [size]

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tilestar_demos::{MapConfig, mapgen};
use tilestar_paths::{Engine, PathError, RowToRow};

fn run(cfg: &MapConfig) -> Result<(), PathError> {
    let seed = cfg.effective_seed();
    println!("Map Seed {seed}");

    let engine = Engine::new(cfg.side(), cfg.side());
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut map = mapgen::generate_rows(&engine, cfg, &mut rng);
    println!("{}", map.grid);

    let start = Instant::now();
    let found = engine.find_path(&RowToRow, &[map.source], &[map.target])?;
    let elapsed = start.elapsed();

    match found {
        Some(path) => {
            map.grid.draw_path(&path, '*');
            println!("{}", map.grid);
            println!(
                "{} steps, overlay weight {}",
                path.total_steps(),
                path.terminal().cumulative_overlay_weight()
            );
        }
        None => println!("no route between the rows"),
    }
    log::info!("row-to-row {elapsed:?}");
    Ok(())
}

fn main() {
    env_logger::init();

    let cfg = MapConfig::default().with_args(std::env::args().skip(1));

    if let Err(e) = run(&cfg) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
