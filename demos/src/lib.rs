//! Host-side helpers for the tilestar demos: random wall maps and an ASCII
//! view of the grid.
//!
//! Both only talk to the engine through [`Engine::fill_tile`] and the
//! [`Path`] observation surface.
//!
//! [`Engine::fill_tile`]: tilestar_paths::Engine::fill_tile
//! [`Path`]: tilestar_paths::Path

pub mod ascii;
pub mod mapgen;

pub use ascii::AsciiGrid;
pub use mapgen::{MapConfig, RandomMap, RowMap};
