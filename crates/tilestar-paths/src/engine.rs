use std::collections::{HashMap, HashSet};

use tilestar_core::{Point, Range};

use crate::error::PathError;
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::node::{NodeId, Path, PathNode};
use crate::overlay::Overlay;
use crate::strategy::{Sources, Strategy};

/// Path search engine for a `rows × cols` tile grid.
///
/// The engine owns the weight overlay and runs searches against it. Searches
/// take `&self` and keep all of their state on the stack, so one engine can
/// serve several threads at once. Overlay reads are locked one at a time:
/// a search running alongside [`fill_tile`](Engine::fill_tile) or
/// [`clear_tile`](Engine::clear_tile) may see a tile change between two
/// of its own reads.
#[derive(Debug)]
pub struct Engine {
    rng: Range,
    overlay: Overlay,
}

impl Engine {
    /// Create an engine for the grid `[0, rows) × [0, cols)`.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rng: Range::sized(rows, cols),
            overlay: Overlay::new(),
        }
    }

    /// The grid rectangle searched by this engine.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Set the traversal weight of `p`. The built-in strategies treat
    /// [`IMPASSABLE`](crate::IMPASSABLE) as a wall.
    pub fn fill_tile(&self, p: Point, weight: i32) {
        self.overlay.fill(p, weight);
    }

    /// Reset the weight of `p` to 0.
    pub fn clear_tile(&self, p: Point) {
        self.overlay.clear(p);
    }

    /// Current weight of `p`, 0 if never filled.
    pub fn weight_of(&self, p: Point) -> i32 {
        self.overlay.weight_of(p)
    }

    /// Find the cheapest route, as priced by `strategy`, from any of
    /// `sources` to any of `targets`.
    ///
    /// The search runs backwards: it grows from the targets and stops on the
    /// first popped node `strategy` accepts as complete. The returned path's
    /// terminal node is therefore on the source side, and walking its parents
    /// leads to a target. `Ok(None)` means no route exists.
    ///
    /// Ties between equally weighted frontier nodes go to the smaller
    /// coordinate in row-major order, so results are reproducible for a
    /// fixed overlay. Targets outside the grid are ignored, and when a
    /// target is listed twice only the first occurrence is used.
    pub fn find_path<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        sources: &[Point],
        targets: &[Point],
    ) -> Result<Option<Path<S::Payload>>, PathError> {
        if sources.is_empty() {
            return Err(PathError::EmptySources);
        }
        if targets.is_empty() {
            return Err(PathError::EmptyTargets);
        }
        strategy.check(sources, targets)?;

        let set: HashSet<Point> = sources.iter().copied().collect();
        let ends = Sources::new(sources, &set);

        let mut search = Search::new(self.rng);
        search.seed(strategy, &self.overlay, targets, &ends);
        let found = search.run(strategy, &self.overlay, &ends);

        log::debug!(
            "search over {} from {} target(s) to {} source(s): {} ({} node(s) created)",
            self.rng,
            targets.len(),
            sources.len(),
            if found.is_some() { "found" } else { "no path" },
            search.arena.len(),
        );

        let path = found.map(|id| Path::from_arena(search.arena, id));
        Ok(strategy.post_process(path, self.rng, &self.overlay))
    }
}

// ---------------------------------------------------------------------------
// Per-call search state
// ---------------------------------------------------------------------------

struct Search<T> {
    rng: Range,
    arena: Vec<PathNode<T>>,
    // Keyed by coordinate so memory follows the explored area, not the grid.
    open: HashMap<Point, NodeId>,
    closed: HashSet<Point>,
    frontier: Frontier,
}

impl<T: Default> Search<T> {
    fn new(rng: Range) -> Self {
        Self {
            rng,
            arena: Vec::new(),
            open: HashMap::new(),
            closed: HashSet::new(),
            frontier: Frontier::default(),
        }
    }

    fn seed<S>(&mut self, strategy: &S, overlay: &Overlay, targets: &[Point], ends: &Sources<'_>)
    where
        S: Strategy<Payload = T> + ?Sized,
    {
        for &t in targets {
            if !self.rng.contains(t) {
                log::debug!("skipping target {t}: outside {}", self.rng);
                continue;
            }
            if self.open.contains_key(&t) {
                log::debug!("skipping duplicate target {t}");
                continue;
            }
            let weight = overlay.weight_of(t);
            let mut node = PathNode::root(t, weight);
            if !strategy.weigh(&mut node, weight, ends) {
                continue;
            }
            self.insert(node);
        }
    }

    fn insert(&mut self, node: PathNode<T>) {
        let id = NodeId(self.arena.len());
        self.frontier.push(id, node.priority_weight, node.coord);
        self.open.insert(node.coord, id);
        self.arena.push(node);
    }

    fn run<S>(&mut self, strategy: &S, overlay: &Overlay, ends: &Sources<'_>) -> Option<NodeId>
    where
        S: Strategy<Payload = T> + ?Sized,
    {
        let mut nb = Neighbors::new();
        let rng = self.rng;

        loop {
            let arena = &self.arena;
            let closed = &self.closed;
            let current = self.frontier.pop_live(|e| {
                !closed.contains(&e.coord) && arena[e.id.0].priority_weight == e.priority
            })?;

            let ci = current.id;
            let cp = current.coord;
            if strategy.is_complete(cp, ends) {
                return Some(ci);
            }

            self.open.remove(&cp);
            self.closed.insert(cp);

            for &np in nb.cardinal(cp, |q| rng.contains(q)) {
                if self.closed.contains(&np) {
                    continue;
                }

                let weight = overlay.weight_of(np);
                let mut cand = PathNode::child(ci, &self.arena[ci.0], np, weight);
                if !strategy.weigh(&mut cand, weight, ends) {
                    continue;
                }

                match self.open.get(&np).copied() {
                    None => self.insert(cand),
                    Some(ei) => {
                        let existing = &mut self.arena[ei.0];
                        if cand.priority_weight >= existing.priority_weight {
                            continue;
                        }
                        log::trace!(
                            "relaxing {np}: priority {} -> {}",
                            existing.priority_weight,
                            cand.priority_weight
                        );
                        existing.parent = cand.parent;
                        existing.priority_weight = cand.priority_weight;
                        existing.cumulative_overlay_weight = cand.cumulative_overlay_weight;
                        existing.steps_traveled = cand.steps_traveled;
                        self.frontier.push(ei, cand.priority_weight, np);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::IMPASSABLE;
    use crate::strategies::{ListToPoint, PointToPoint, RowToRow};

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let eng = Engine::new(5, 5);
        let path = eng
            .find_path(&PointToPoint, &[p(0, 0)], &[p(4, 4)])
            .unwrap()
            .expect("path");
        assert_eq!(path.len(), 9);
        assert_eq!(path.total_steps(), 8);
        assert_eq!(path.terminal().coord(), p(0, 0));
        assert_eq!(path.root().coord(), p(4, 4));
        assert_eq!(path.terminal().cumulative_overlay_weight(), 0);
    }

    #[test]
    fn same_source_and_target() {
        let eng = Engine::new(3, 3);
        let path = eng
            .find_path(&PointToPoint, &[p(1, 1)], &[p(1, 1)])
            .unwrap()
            .expect("path");
        assert_eq!(path.points(), vec![p(1, 1)]);
    }

    #[test]
    fn wall_with_single_gap_blocks_when_gap_closed() {
        let eng = Engine::new(5, 5);
        for col in 0..5 {
            eng.fill_tile(p(2, col), IMPASSABLE);
        }
        assert!(eng.find_path(&PointToPoint, &[p(0, 0)], &[p(4, 4)]).unwrap().is_none());

        eng.clear_tile(p(2, 2));
        let path = eng
            .find_path(&PointToPoint, &[p(0, 0)], &[p(4, 4)])
            .unwrap()
            .expect("gap reopened");
        assert!(path.points().contains(&p(2, 2)));
        assert_eq!(path.total_steps(), 8);
    }

    #[test]
    fn heavy_tile_is_avoided() {
        let eng = Engine::new(3, 3);
        eng.fill_tile(p(1, 1), 100);
        let path = eng
            .find_path(&PointToPoint, &[p(1, 0)], &[p(1, 2)])
            .unwrap()
            .expect("path");
        assert!(!path.points().contains(&p(1, 1)));
        assert_eq!(path.total_steps(), 4);
        assert_eq!(path.terminal().cumulative_overlay_weight(), 0);
    }

    #[test]
    fn impassable_target_is_never_seeded() {
        let eng = Engine::new(3, 3);
        eng.fill_tile(p(2, 2), IMPASSABLE);
        assert!(eng.find_path(&PointToPoint, &[p(0, 0)], &[p(2, 2)]).unwrap().is_none());
    }

    #[test]
    fn out_of_range_target_is_ignored() {
        let eng = Engine::new(3, 3);
        let found = eng
            .find_path(&ListToPoint::forward(), &[p(0, 0)], &[p(9, 9), p(2, 2)])
            .unwrap();
        let path = found.expect("in-range target still searched");
        assert_eq!(path.root().coord(), p(2, 2));

        assert!(eng.find_path(&PointToPoint, &[p(0, 0)], &[p(3, 0)]).unwrap().is_none());
    }

    #[test]
    fn empty_endpoints_are_errors() {
        let eng = Engine::new(3, 3);
        assert_eq!(
            eng.find_path(&ListToPoint::forward(), &[], &[p(0, 0)]),
            Err(PathError::EmptySources)
        );
        assert_eq!(
            eng.find_path(&ListToPoint::forward(), &[p(0, 0)], &[]),
            Err(PathError::EmptyTargets)
        );
    }

    #[test]
    fn cardinality_is_not_coerced() {
        let eng = Engine::new(3, 3);
        let err = eng
            .find_path(&PointToPoint, &[p(0, 0), p(0, 1)], &[p(2, 2)])
            .unwrap_err();
        assert!(matches!(err, PathError::Cardinality { sources: 2, targets: 1, .. }));
    }

    #[test]
    fn row_to_row_lands_on_any_column() {
        let eng = Engine::new(6, 6);
        for col in 0..5 {
            eng.fill_tile(p(3, col), IMPASSABLE);
        }
        let path = eng
            .find_path(&RowToRow, &[p(0, 0)], &[p(5, 0)])
            .unwrap()
            .expect("path");
        assert_eq!(path.terminal().coord().row, 0);
        assert!(path.points().contains(&p(3, 5)));
    }

    #[test]
    fn ties_are_reproducible() {
        let eng = Engine::new(6, 6);
        let a = eng.find_path(&PointToPoint, &[p(0, 0)], &[p(5, 5)]).unwrap().expect("path");
        let b = eng.find_path(&PointToPoint, &[p(0, 0)], &[p(5, 5)]).unwrap().expect("path");
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn huge_grid_short_search() {
        let eng = Engine::new(200_000, 200_000);
        let path = eng
            .find_path(&PointToPoint, &[p(0, 0)], &[p(0, 1)])
            .unwrap()
            .expect("adjacent tiles");
        assert_eq!(path.points(), vec![p(0, 0), p(0, 1)]);
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Engine>();
    }
}
