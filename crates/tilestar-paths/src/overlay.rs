use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tilestar_core::Point;

/// Overlay weight marking a tile that can never be entered.
///
/// The built-in strategies reject any candidate standing on such a tile.
pub const IMPASSABLE: i32 = -1;

/// Lock-protected per-tile traversal cost overrides.
///
/// Tiles without an entry weigh 0. Each accessor holds the lock for a single
/// map operation only, so a running search can observe a concurrent
/// [`fill`](Overlay::fill) or [`clear`](Overlay::clear) between two of its
/// own reads. Searches get no snapshot isolation.
#[derive(Debug, Default)]
pub struct Overlay {
    tiles: Mutex<HashMap<Point, i32>>,
}

impl Overlay {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    // The map only holds integers, so a writer that panicked cannot have
    // left it half-updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<Point, i32>> {
        self.tiles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set or overwrite the weight of `p`. Filling with 0 removes the entry.
    pub fn fill(&self, p: Point, weight: i32) {
        let mut tiles = self.lock();
        if weight == 0 {
            tiles.remove(&p);
        } else {
            tiles.insert(p, weight);
        }
    }

    /// Remove any override for `p`. Clearing an unset tile does nothing.
    pub fn clear(&self, p: Point) {
        self.lock().remove(&p);
    }

    /// The override for `p`, or 0 when none is set.
    pub fn weight_of(&self, p: Point) -> i32 {
        self.lock().get(&p).copied().unwrap_or(0)
    }

    /// Number of tiles carrying an override.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no tile carries an override.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
