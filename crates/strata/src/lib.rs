//! Layered (Sugiyama-style) layout for directed graphs.
//!
//! The pipeline breaks cycles, assigns ranks with network simplex (or a cheaper ranker),
//! reorders each rank to reduce edge crossings and finally assigns coordinates. Hosts describe
//! their diagram through [`Diagram`] and get node centers back.
//!
//! ```
//! use strata::{LayoutConfig, MemoryDiagram, auto_layout};
//! use strata::graph::Size;
//!
//! let mut diagram = MemoryDiagram::new();
//! diagram
//!     .add_node("a", Size::new(80.0, 40.0))
//!     .add_node("b", Size::new(80.0, 40.0))
//!     .connect("a-b", "a", "b");
//! let result = auto_layout(&mut diagram, "a", &LayoutConfig::default()).unwrap();
//! assert_eq!(result.ranks["b"], 1);
//! ```

#![forbid(unsafe_code)]

pub use strata_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod acyclic;
pub mod config;
pub mod coordinate_system;
pub mod diagram;
pub mod error;
pub mod greedy_fas;
pub mod layout;
pub mod normalize;
pub mod order;
pub mod position;
pub mod rank;

pub use config::{Acyclicer, LayoutConfig, RankDir, Ranker};
pub use diagram::{Connection, Diagram, MemoryDiagram, MemoryNode};
pub use error::{Error, Result};
pub use layout::{LayoutResult, apply_layout, auto_layout, commit, create_graph};
