//! Strategy-driven best-first path search over weighted tile grids.
//!
//! An [`Engine`] owns a `rows × cols` grid and a lock-protected weight
//! [`Overlay`]. Hosts set per-tile weights with [`Engine::fill_tile`] and
//! [`Engine::clear_tile`], then ask for a route with [`Engine::find_path`].
//! What a route costs, when the search has arrived and how the finished
//! route is shaped are decided by a [`Strategy`]:
//!
//! | Strategy | Endpoints | Completes on | Post-processing |
//! |---|---|---|---|
//! | [`PointToPoint`] | 1 source, 1 target | the source tile | none |
//! | [`RowToRow`] | 1 source, 1 target | any tile on the source row | none |
//! | [`ListToPoint`] | any | any source tile | none, or reversal |
//! | [`RawDistance`] | 1 source, 1 target | the source tile | none |
//!
//! Movement is 4-connected. Tiles weighted [`IMPASSABLE`] are walls for
//! every built-in strategy.
//!
//! ```
//! use tilestar_core::Point;
//! use tilestar_paths::{Engine, IMPASSABLE, PointToPoint};
//!
//! let engine = Engine::new(5, 5);
//! engine.fill_tile(Point::new(1, 1), IMPASSABLE);
//! let path = engine
//!     .find_path(&PointToPoint, &[Point::new(0, 0)], &[Point::new(4, 4)])
//!     .unwrap()
//!     .expect("route exists");
//! assert_eq!(path.total_steps(), 8);
//! assert_eq!(path.terminal().coord(), Point::new(0, 0));
//! ```

mod distance;
mod engine;
mod error;
mod frontier;
mod neighbors;
mod node;
mod overlay;
mod postprocess;
mod strategies;
mod strategy;

pub use distance::{manhattan, row_distance};
pub use engine::Engine;
pub use error::PathError;
pub use neighbors::Neighbors;
pub use node::{NodeId, Path, PathNode};
pub use overlay::{IMPASSABLE, Overlay};
pub use postprocess::{PostProcess, reverse};
pub use strategies::{ListToPoint, PointToPoint, RawDistance, RowToRow};
pub use strategy::{Sources, Strategy};
