//! Character grid used to print maps and routes.

use std::fmt;

use tilestar_core::{Point, Range};
use tilestar_paths::Path;

pub const EMPTY: char = ' ';
pub const WALL: char = '#';
/// A wall tile a route had to cross.
pub const CROSSED: char = 'X';

/// A `rows × cols` grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    rng: Range,
    cells: Vec<char>,
}

impl AsciiGrid {
    pub fn new(rows: i32, cols: i32) -> Self {
        let rng = Range::sized(rows, cols);
        Self {
            rng,
            cells: vec![EMPTY; rng.len()],
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(p.row as usize * self.rng.cols() as usize + p.col as usize)
    }

    /// Character at `p`, `None` outside the grid.
    pub fn get(&self, p: Point) -> Option<char> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the character at `p`. Points outside the grid are ignored.
    pub fn set(&mut self, p: Point, ch: char) {
        if let Some(i) = self.index(p) {
            self.cells[i] = ch;
        }
    }

    /// Mark every tile of `path` with `ch`.
    ///
    /// Walls on the route become [`CROSSED`]; tiles already holding a
    /// marker other than a wall keep it.
    pub fn draw_path<T>(&mut self, path: &Path<T>, ch: char) {
        for node in path {
            let p = node.coord();
            match self.get(p) {
                Some(WALL) => self.set(p, CROSSED),
                Some(EMPTY) => self.set(p, ch),
                _ => {}
            }
        }
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.rng.cols().max(1) as usize;
        for row in self.cells.chunks(cols) {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
