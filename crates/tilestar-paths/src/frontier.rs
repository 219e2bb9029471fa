use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tilestar_core::Point;

use crate::node::NodeId;

/// Reference into the search arena, ordered for use in a `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) id: NodeId,
    pub(crate) priority: i32,
    pub(crate) coord: Point,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first, then
        // the smallest coordinate in row-major order.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.coord.cmp(&self.coord))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of open nodes.
///
/// Relaxing a node pushes a fresh entry instead of updating the old one, so
/// the heap may hold stale entries. The caller decides staleness on pop.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
}

impl Frontier {
    pub(crate) fn push(&mut self, id: NodeId, priority: i32, coord: Point) {
        self.heap.push(NodeRef { id, priority, coord });
    }

    /// Pop the cheapest entry for which `is_live` holds, discarding stale ones.
    pub(crate) fn pop_live(
        &mut self,
        mut is_live: impl FnMut(&NodeRef) -> bool,
    ) -> Option<NodeRef> {
        while let Some(entry) = self.heap.pop() {
            if is_live(&entry) {
                return Some(entry);
            }
        }
        None
    }
}
