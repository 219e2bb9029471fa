//! Built-in search strategies.
//!
//! Every strategy here rejects tiles whose overlay weight is
//! [`IMPASSABLE`] and prices a node as its accumulated overlay weight plus
//! the steps taken plus a distance estimate towards the sources.

use tilestar_core::{Point, Range};

use crate::distance::{manhattan, row_distance};
use crate::error::PathError;
use crate::node::{Path, PathNode};
use crate::overlay::{IMPASSABLE, Overlay};
use crate::postprocess::PostProcess;
use crate::strategy::{Sources, Strategy, require_single};

// ---------------------------------------------------------------------------
// Point to point
// ---------------------------------------------------------------------------

/// Route between exactly one source and one target.
///
/// The Manhattan estimate never overestimates as long as overlay weights
/// are non-negative, so the route found is a cheapest one.
#[derive(Copy, Clone, Debug, Default)]
pub struct PointToPoint;

impl PointToPoint {
    /// Same as `PointToPoint`; provided for symmetry with [`ListToPoint::new`].
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for PointToPoint {
    type Payload = ();

    fn check(&self, sources: &[Point], targets: &[Point]) -> Result<(), PathError> {
        require_single("point-to-point", sources, targets)
    }

    fn is_complete(&self, p: Point, sources: &Sources<'_>) -> bool {
        sources.first() == Some(p)
    }

    fn weigh(&self, node: &mut PathNode, tile_weight: i32, sources: &Sources<'_>) -> bool {
        let Some(goal) = sources.first() else {
            return false;
        };
        if tile_weight == IMPASSABLE {
            return false;
        }
        node.priority_weight =
            node.cumulative_overlay_weight + node.steps_traveled + manhattan(node.coord, goal);
        true
    }
}

// ---------------------------------------------------------------------------
// Row to row
// ---------------------------------------------------------------------------

/// Route from the target's row to the source's row, landing on any column.
///
/// Only the row of each endpoint matters, so a caller may pass any tile of
/// the wanted row.
#[derive(Copy, Clone, Debug, Default)]
pub struct RowToRow;

impl RowToRow {
    /// Same as `RowToRow`.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RowToRow {
    type Payload = ();

    fn check(&self, sources: &[Point], targets: &[Point]) -> Result<(), PathError> {
        require_single("row-to-row", sources, targets)
    }

    fn is_complete(&self, p: Point, sources: &Sources<'_>) -> bool {
        sources.first().is_some_and(|goal| goal.row == p.row)
    }

    fn weigh(&self, node: &mut PathNode, tile_weight: i32, sources: &Sources<'_>) -> bool {
        let Some(goal) = sources.first() else {
            return false;
        };
        if tile_weight == IMPASSABLE {
            return false;
        }
        node.priority_weight =
            node.cumulative_overlay_weight + node.steps_traveled + row_distance(node.coord, goal);
        true
    }
}

// ---------------------------------------------------------------------------
// List to point
// ---------------------------------------------------------------------------

/// Route between any of several sources and any of several targets.
///
/// The estimate scans every source for each candidate, so searches cost
/// O(k) more per node than the single-point strategies, k being the number
/// of sources. The forward variant returns the route as searched; the
/// reversed variant turns it around, which suits joining an existing route
/// given as the source list.
#[derive(Copy, Clone, Debug, Default)]
pub struct ListToPoint {
    post: PostProcess,
}

impl ListToPoint {
    /// A list-to-point strategy that reverses its result when `reversed`
    /// is set.
    pub fn new(reversed: bool) -> Self {
        let post = if reversed {
            PostProcess::Reverse
        } else {
            PostProcess::Identity
        };
        Self { post }
    }

    /// Return routes as searched: terminal on a source, root on the target.
    pub fn forward() -> Self {
        Self::new(false)
    }

    /// Return routes turned around: terminal on the target, root on the
    /// source reached.
    pub fn reversed() -> Self {
        Self::new(true)
    }

    /// Whether results are reversed before being returned.
    pub fn is_reversed(&self) -> bool {
        self.post == PostProcess::Reverse
    }
}

impl Strategy for ListToPoint {
    type Payload = ();

    fn is_complete(&self, p: Point, sources: &Sources<'_>) -> bool {
        sources.contains(p)
    }

    fn weigh(&self, node: &mut PathNode, tile_weight: i32, sources: &Sources<'_>) -> bool {
        if tile_weight == IMPASSABLE {
            return false;
        }
        let Some(nearest) = sources.iter().map(|s| manhattan(node.coord, s)).min() else {
            return false;
        };
        node.priority_weight = node.cumulative_overlay_weight + node.steps_traveled + nearest;
        true
    }

    fn post_process(&self, path: Option<Path>, _range: Range, overlay: &Overlay) -> Option<Path> {
        self.post.apply(path, overlay)
    }
}

// ---------------------------------------------------------------------------
// Raw distance
// ---------------------------------------------------------------------------

/// Single source, single target routing priced on the current tile only.
///
/// The priority is the tile's own overlay weight plus steps plus the
/// Manhattan estimate; weights met earlier on the route are forgotten. This
/// makes heavy tiles something to step around locally rather than a cost
/// carried along the whole route, and gives no cheapest-route guarantee.
#[derive(Copy, Clone, Debug, Default)]
pub struct RawDistance;

impl RawDistance {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RawDistance {
    type Payload = ();

    fn check(&self, sources: &[Point], targets: &[Point]) -> Result<(), PathError> {
        require_single("raw-distance", sources, targets)
    }

    fn is_complete(&self, p: Point, sources: &Sources<'_>) -> bool {
        sources.first() == Some(p)
    }

    fn weigh(&self, node: &mut PathNode, tile_weight: i32, sources: &Sources<'_>) -> bool {
        let Some(goal) = sources.first() else {
            return false;
        };
        if tile_weight == IMPASSABLE {
            return false;
        }
        node.priority_weight = tile_weight + node.steps_traveled + manhattan(node.coord, goal);
        true
    }
}
