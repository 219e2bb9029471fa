use std::collections::HashSet;

use tilestar_core::{Point, Range};

use crate::error::PathError;
use crate::node::{Path, PathNode};
use crate::overlay::Overlay;

/// The endpoints a search is heading for.
///
/// The engine searches backwards from the targets, so these are the
/// caller's sources. They are offered both as the caller's list, for
/// strategies that scan every endpoint, and as a set for O(1) membership.
#[derive(Clone, Copy, Debug)]
pub struct Sources<'a> {
    list: &'a [Point],
    set: &'a HashSet<Point>,
}

impl<'a> Sources<'a> {
    pub(crate) fn new(list: &'a [Point], set: &'a HashSet<Point>) -> Self {
        Self { list, set }
    }

    /// The endpoints in the order the caller gave them.
    #[inline]
    pub fn as_slice(&self) -> &'a [Point] {
        self.list
    }

    /// The first endpoint, for single-endpoint strategies.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.list.first().copied()
    }

    /// Whether `p` is one of the endpoints.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.set.contains(&p)
    }

    /// Number of endpoints, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Never true inside a search: empty lists are rejected up front.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The endpoints in caller order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + 'a {
        self.list.iter().copied()
    }
}

/// Caller-supplied rules for a search: how to price a node, when to stop
/// and how to shape the finished route.
///
/// The engine never inspects [`Payload`](Strategy::Payload); it is created
/// with `Default` for every candidate node and left for the strategy to use.
///
/// Searches only find the cheapest route when [`weigh`](Strategy::weigh)
/// produces consistent (monotonic, admissible) priorities. Closed tiles are
/// never reopened, so other cost functions may return a more expensive
/// route.
pub trait Strategy {
    type Payload: Default;

    /// Validate the endpoints before the search starts.
    fn check(&self, sources: &[Point], targets: &[Point]) -> Result<(), PathError> {
        let _ = (sources, targets);
        Ok(())
    }

    /// Whether reaching `p` ends the search.
    fn is_complete(&self, p: Point, sources: &Sources<'_>) -> bool;

    /// Assign the priority weight of a candidate node.
    ///
    /// `tile_weight` is the raw overlay weight of the candidate's tile.
    /// Returning `false` rejects the candidate.
    fn weigh(
        &self,
        node: &mut PathNode<Self::Payload>,
        tile_weight: i32,
        sources: &Sources<'_>,
    ) -> bool;

    /// Transform the search result before it is returned. Must pass `None`
    /// through.
    fn post_process(
        &self,
        path: Option<Path<Self::Payload>>,
        range: Range,
        overlay: &Overlay,
    ) -> Option<Path<Self::Payload>> {
        let _ = (range, overlay);
        path
    }
}

/// Reject anything other than one source and one target.
pub(crate) fn require_single(
    strategy: &'static str,
    sources: &[Point],
    targets: &[Point],
) -> Result<(), PathError> {
    if sources.len() == 1 && targets.len() == 1 {
        Ok(())
    } else {
        Err(PathError::Cardinality {
            strategy,
            sources: sources.len(),
            targets: targets.len(),
        })
    }
}
