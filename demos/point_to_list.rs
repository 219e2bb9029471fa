//! Route `a` to `b` point to point, then route `c` back onto that route.
//!
//! Run: cargo run --bin point-to-list [seed] [size]

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tilestar_demos::{MapConfig, mapgen};
use tilestar_paths::{Engine, ListToPoint, PathError, PointToPoint};

fn run(cfg: &MapConfig) -> Result<(), PathError> {
    let seed = cfg.effective_seed();
    println!("Map Seed {seed}");

    let engine = Engine::new(cfg.side(), cfg.side());
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut map = mapgen::generate(&engine, cfg, &mut rng);
    println!("{}", map.grid);

    let start = Instant::now();
    let first = engine.find_path(&PointToPoint, &[map.source], &[map.target])?;
    let first_t = start.elapsed();

    let Some(route) = first else {
        println!("no route from a to b");
        return Ok(());
    };
    map.grid.draw_path(&route, '*');
    println!("{}", map.grid);

    let start = Instant::now();
    let second = engine.find_path(&ListToPoint::reversed(), &route.points(), &[map.me])?;
    let second_t = start.elapsed();

    match second {
        Some(back) => {
            map.grid.draw_path(&back, '.');
            println!("{}", map.grid);
            let joined = back.root().coord();
            println!("me {}", map.me);
            println!("joins route at {joined} ({:?})", map.grid.get(joined));
        }
        None => println!("c cannot reach the route"),
    }
    log::info!("point-to-point {first_t:?}, list-to-point {second_t:?}");
    println!("{:.3} ms", first_t.as_secs_f64() * 1000.0);
    println!("{:.3} ms", second_t.as_secs_f64() * 1000.0);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(&MapConfig::default().with_args(std::env::args().skip(1))) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
