use crate::node::{Path, PathNode};
use crate::overlay::Overlay;

/// Transform applied to a finished route before it reaches the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PostProcess {
    /// Return the route as found.
    #[default]
    Identity,
    /// Turn the route around so the terminal node becomes the root.
    Reverse,
}

impl PostProcess {
    pub fn apply<T>(self, path: Option<Path<T>>, overlay: &Overlay) -> Option<Path<T>> {
        match self {
            Self::Identity => path,
            Self::Reverse => path.map(|p| reverse(p, overlay)),
        }
    }
}

/// Invert the chain of `path`.
///
/// Step counts and cumulative overlay weights are recomputed from the new
/// root, reading tile weights from `overlay`. The heuristic part of the
/// priority weight has no meaning once the route is complete, so priorities
/// become the accumulated cost (overlay weight + steps). Payloads stay with
/// their tile.
pub fn reverse<T>(path: Path<T>, overlay: &Overlay) -> Path<T> {
    let mut nodes = path.nodes;
    nodes.reverse();

    // Nodes are now root-to-terminal of the old chain; the old terminal is
    // the new root and sits at the back once relinked.
    let mut prev: Option<(i32, i32)> = None;
    for node in nodes.iter_mut().rev() {
        restamp(node, prev, overlay);
        prev = Some((node.cumulative_overlay_weight, node.steps_traveled));
    }
    Path::from_chain(nodes)
}

fn restamp<T>(node: &mut PathNode<T>, prev: Option<(i32, i32)>, overlay: &Overlay) {
    let tile = overlay.weight_of(node.coord);
    let (weight, steps) = match prev {
        Some((w, s)) => (w + tile, s + 1),
        None => (tile, 0),
    };
    node.cumulative_overlay_weight = weight;
    node.steps_traveled = steps;
    node.priority_weight = weight + steps;
}
