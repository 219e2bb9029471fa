use tilestar_core::Point;

/// Cached neighbor computation helper.
///
/// Enumerates the orthogonal (4-way) neighbors of a grid point, filtered by
/// a predicate. Diagonal moves are never produced.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilestar_core::Range;

    #[test]
    fn corner_has_two_neighbors() {
        let rng = Range::sized(5, 5);
        let mut nb = Neighbors::new();
        let mut got = nb.cardinal(Point::new(0, 0), |q| rng.contains(q)).to_vec();
        got.sort();
        assert_eq!(got, vec![Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn far_edge_stays_in_bounds() {
        let rng = Range::sized(3, 4);
        let mut nb = Neighbors::new();
        for p in rng {
            for &n in nb.cardinal(p, |q| rng.contains(q)) {
                assert!(rng.contains(n), "{n} escaped {rng}");
            }
        }
    }

    #[test]
    fn interior_has_four_neighbors() {
        let rng = Range::sized(3, 3);
        let mut nb = Neighbors::new();
        assert_eq!(nb.cardinal(Point::new(1, 1), |q| rng.contains(q)).len(), 4);
    }
}
