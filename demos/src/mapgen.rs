//! Random wall maps.
//!
//! Walls are straight segments of heavily weighted tiles: a route can still
//! cross one, it just costs [`MapConfig::wall_weight`] per tile. The map
//! border is impassable.

use rand::{Rng, RngExt};
use tilestar_core::Point;
use tilestar_paths::{Engine, IMPASSABLE};

use crate::ascii::{AsciiGrid, EMPTY, WALL};

/// Smallest grid whose interior fits the three markers.
pub const MIN_GRID_SIZE: i32 = 5;

/// Parameters for a random map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    /// Side length of the square grid.
    pub grid_size: i32,
    /// Total number of wall tiles to place (segments may overlap).
    pub wall_count: i32,
    /// Segments are shorter than this.
    pub wall_size: i32,
    /// Overlay weight of a wall tile.
    pub wall_weight: i32,
    /// RNG seed; 0 picks one from the clock.
    pub seed: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            wall_count: 600,
            wall_size: 24,
            wall_weight: 100_000,
            seed: 0,
        }
    }
}

impl MapConfig {
    /// The configured seed, or a clock-derived one when it is 0.
    pub fn effective_seed(&self) -> u64 {
        if self.seed != 0 {
            return self.seed;
        }
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    }

    /// Side length actually generated: `grid_size` raised to
    /// [`MIN_GRID_SIZE`].
    pub fn side(&self) -> i32 {
        self.grid_size.max(MIN_GRID_SIZE)
    }

    /// Apply positional overrides: `[seed] [size]`. Unparsable values are
    /// ignored and sizes below 5 are raised to 5.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        let mut args = args.into_iter();
        if let Some(seed) = args.next().and_then(|s| s.parse().ok()) {
            self.seed = seed;
        }
        if let Some(size) = args.next().and_then(|s| s.parse::<i32>().ok()) {
            self.grid_size = size.max(MIN_GRID_SIZE);
        }
        self
    }
}

/// A map with three marked tiles: `a`, `b` and `c`.
#[derive(Debug, Clone)]
pub struct RandomMap {
    pub grid: AsciiGrid,
    pub source: Point,
    pub target: Point,
    pub me: Point,
}

/// A map crossed from the top row (`A`) to the bottom row (`B`).
#[derive(Debug, Clone)]
pub struct RowMap {
    pub grid: AsciiGrid,
    pub source: Point,
    pub target: Point,
}

fn wall(engine: &Engine, grid: &mut AsciiGrid, p: Point, weight: i32) {
    grid.set(p, WALL);
    engine.fill_tile(p, weight);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Orientation {
    Mixed,
    Horizontal,
}

/// Place wall segments until `wall_count` tiles have been laid. Segments
/// start on a row drawn from `rows`.
fn lay_walls(
    engine: &Engine,
    grid: &mut AsciiGrid,
    cfg: &MapConfig,
    rng: &mut impl Rng,
    rows: std::ops::Range<i32>,
    orientation: Orientation,
) {
    let n = cfg.side();
    let max_len = cfg.wall_size.clamp(1, n);
    let mut laid = 0;
    while laid < cfg.wall_count {
        let size = rng.random_range(0..max_len);
        let horizontal = orientation == Orientation::Horizontal || rng.random_range(0..2) == 1;
        if horizontal {
            let r = rng.random_range(rows.clone());
            let c = rng.random_range(0..=n - size - 1);
            for i in 0..size {
                wall(engine, grid, Point::new(r, c + i), cfg.wall_weight);
            }
        } else {
            let r = rng.random_range(0..=n - size - 1);
            let c = rng.random_range(0..n);
            for i in 0..size {
                wall(engine, grid, Point::new(r + i, c), cfg.wall_weight);
            }
        }
        laid += size.max(1);
    }
}

/// Pick a random interior tile for a marker. Free tiles are preferred;
/// when walls cover the whole interior one of them is knocked down.
fn random_free(engine: &Engine, grid: &mut AsciiGrid, rng: &mut impl Rng) -> Point {
    let bounds = grid.range();
    let interior: Vec<Point> = bounds
        .iter()
        .filter(|p| {
            p.row > 0 && p.col > 0 && p.row < bounds.rows() - 1 && p.col < bounds.cols() - 1
        })
        .collect();
    let free: Vec<Point> = interior
        .iter()
        .copied()
        .filter(|&p| grid.get(p) == Some(EMPTY))
        .collect();
    if !free.is_empty() {
        return free[rng.random_range(0..free.len())];
    }
    let walls: Vec<Point> = interior.into_iter().filter(|&p| grid.get(p) == Some(WALL)).collect();
    let p = walls[rng.random_range(0..walls.len())];
    engine.clear_tile(p);
    grid.set(p, EMPTY);
    p
}

/// Generate a square map with random walls, an impassable border and three
/// distinct free tiles: the source `a`, the target `b` and the wanderer `c`.
///
/// The map is [`MapConfig::side`] tiles across, so the border always leaves
/// room for the markers.
pub fn generate(engine: &Engine, cfg: &MapConfig, rng: &mut impl Rng) -> RandomMap {
    let n = cfg.side();
    let mut grid = AsciiGrid::new(n, n);

    lay_walls(engine, &mut grid, cfg, rng, 0..n, Orientation::Mixed);

    for i in 0..n {
        for p in [
            Point::new(0, i),
            Point::new(i, 0),
            Point::new(n - 1, i),
            Point::new(i, n - 1),
        ] {
            wall(engine, &mut grid, p, IMPASSABLE);
        }
    }

    let source = random_free(engine, &mut grid, rng);
    grid.set(source, 'a');
    let target = random_free(engine, &mut grid, rng);
    grid.set(target, 'b');
    let me = random_free(engine, &mut grid, rng);
    grid.set(me, 'c');

    log::debug!("generated {n}x{n} map: a={source} b={target} c={me}");
    RandomMap {
        grid,
        source,
        target,
        me,
    }
}

/// Generate a map of horizontal walls between an `A` row at the top and a
/// `B` row at the bottom. The left and right columns are impassable.
///
/// The source sits on the top row and the target on a random free column of
/// the bottom row.
pub fn generate_rows(engine: &Engine, cfg: &MapConfig, rng: &mut impl Rng) -> RowMap {
    let n = cfg.side();
    let mut grid = AsciiGrid::new(n, n);

    lay_walls(engine, &mut grid, cfg, rng, 1..n - 1, Orientation::Horizontal);

    for i in 0..n {
        wall(engine, &mut grid, Point::new(i, 0), IMPASSABLE);
        wall(engine, &mut grid, Point::new(i, n - 1), IMPASSABLE);
    }
    for i in 1..n - 1 {
        grid.set(Point::new(0, i), 'A');
        grid.set(Point::new(n - 1, i), 'B');
    }

    let source = Point::new(0, 1);
    let target = Point::new(n - 1, rng.random_range(1..n - 1));
    log::debug!("generated {n}x{n} row map: target column {}", target.col);
    RowMap {
        grid,
        source,
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn small() -> MapConfig {
        MapConfig {
            grid_size: 12,
            wall_count: 20,
            wall_size: 5,
            wall_weight: 1000,
            seed: 42,
        }
    }

    #[test]
    fn args_override_defaults() {
        let cfg = MapConfig::default().with_args(["17".to_string(), "2".to_string()]);
        assert_eq!(cfg.seed, 17);
        assert_eq!(cfg.grid_size, MIN_GRID_SIZE);

        let cfg = MapConfig::default().with_args(["nope".to_string()]);
        assert_eq!(cfg, MapConfig::default());
    }

    #[test]
    fn border_is_impassable() {
        let cfg = small();
        let eng = Engine::new(cfg.grid_size, cfg.grid_size);
        let mut rng = SmallRng::seed_from_u64(cfg.seed);
        let map = generate(&eng, &cfg, &mut rng);
        for i in 0..cfg.grid_size {
            assert_eq!(eng.weight_of(Point::new(0, i)), IMPASSABLE);
            assert_eq!(eng.weight_of(Point::new(i, cfg.grid_size - 1)), IMPASSABLE);
        }
        assert_eq!(map.grid.get(map.source), Some('a'));
        assert_eq!(map.grid.get(map.target), Some('b'));
        assert_eq!(map.grid.get(map.me), Some('c'));
        assert_ne!(map.source, map.target);
    }

    #[test]
    fn crowded_map_still_places_markers() {
        let cfg = MapConfig {
            grid_size: MIN_GRID_SIZE,
            wall_count: 400,
            wall_size: 5,
            wall_weight: 7,
            seed: 1,
        };
        let eng = Engine::new(cfg.grid_size, cfg.grid_size);
        let map = generate(&eng, &cfg, &mut SmallRng::seed_from_u64(1));
        let marks = [map.source, map.target, map.me];
        for (i, p) in marks.iter().enumerate() {
            assert_eq!(eng.weight_of(*p), 0);
            assert!(!marks[i + 1..].contains(p));
        }
    }

    #[test]
    fn undersized_config_is_raised() {
        let cfg = MapConfig {
            grid_size: 2,
            wall_count: 10,
            wall_size: 4,
            wall_weight: 3,
            seed: 8,
        };
        assert_eq!(cfg.side(), MIN_GRID_SIZE);

        let eng = Engine::new(MIN_GRID_SIZE, MIN_GRID_SIZE);
        let map = generate(&eng, &cfg, &mut SmallRng::seed_from_u64(8));
        assert_eq!(map.grid.range().rows(), MIN_GRID_SIZE);
        assert_ne!(map.source, map.target);

        let eng = Engine::new(MIN_GRID_SIZE, MIN_GRID_SIZE);
        let rows = generate_rows(&eng, &cfg, &mut SmallRng::seed_from_u64(8));
        assert_eq!(rows.target.row, MIN_GRID_SIZE - 1);
    }

    #[test]
    fn same_seed_same_map() {
        let cfg = small();
        let a = generate(&Engine::new(12, 12), &cfg, &mut SmallRng::seed_from_u64(9));
        let b = generate(&Engine::new(12, 12), &cfg, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn row_map_keeps_side_columns_closed() {
        let cfg = small();
        let eng = Engine::new(cfg.grid_size, cfg.grid_size);
        let map = generate_rows(&eng, &cfg, &mut SmallRng::seed_from_u64(3));
        for i in 0..cfg.grid_size {
            assert_eq!(eng.weight_of(Point::new(i, 0)), IMPASSABLE);
            assert_eq!(eng.weight_of(Point::new(i, cfg.grid_size - 1)), IMPASSABLE);
        }
        assert_eq!(map.source.row, 0);
        assert_eq!(map.target.row, cfg.grid_size - 1);
        // Walls never touch the A and B rows.
        for col in 1..cfg.grid_size - 1 {
            assert_eq!(eng.weight_of(Point::new(0, col)), 0);
            assert_eq!(eng.weight_of(Point::new(cfg.grid_size - 1, col)), 0);
        }
    }

    #[test]
    fn walls_carry_configured_weight() {
        let cfg = small();
        let eng = Engine::new(cfg.grid_size, cfg.grid_size);
        let map = generate(&eng, &cfg, &mut SmallRng::seed_from_u64(5));
        for p in map.grid.range() {
            if map.grid.get(p) == Some(WALL) {
                let w = eng.weight_of(p);
                assert!(w == cfg.wall_weight || w == IMPASSABLE, "{p} weighs {w}");
            }
        }
    }
}
