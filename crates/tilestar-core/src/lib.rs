//! **tilestar-core** — grid coordinate types.
//!
//! This crate provides the geometry primitives shared by the tilestar
//! search engine and its hosts: a row/column [`Point`] and the half-open
//! grid rectangle [`Range`].

pub mod geom;

pub use geom::{Point, Range, RangeIter};
