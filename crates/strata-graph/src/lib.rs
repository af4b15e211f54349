//! Graph container used by the `strata` layered layout pipeline.
//!
//! A [`Graph`] owns [`LayoutNode`]s and [`LayoutEdge`]s keyed by id and keeps insertion order,
//! which downstream passes rely on for deterministic results. Lookups never panic on a missing
//! id: reads return `Option`/`bool` so passes can skip dangling references.
//!
//! [`alg`] holds the index-based traversal layer shared by every pass.

#![forbid(unsafe_code)]

pub mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::alg;
pub use graph::{Graph, LayoutEdge, LayoutNode, MAX_MINLEN, Point, Size};
