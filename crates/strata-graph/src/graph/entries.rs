//! Node and edge records stored by [`Graph`](super::Graph).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A node taking part in a layout run.
///
/// `rank` and `order` start unassigned and are filled in by the ranking and ordering passes;
/// `position` is the node center computed by coordinate assignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    pub rank: Option<i32>,
    pub order: Option<usize>,
    pub position: Point,
    pub size: Size,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>, size: Size) -> Self {
        Self {
            id: id.into(),
            size,
            ..Default::default()
        }
    }
}

/// Largest `minlen` accepted by [`Graph::validate`](crate::Graph::validate). Index snapshots
/// clamp larger values to it.
pub const MAX_MINLEN: u32 = 1 << 16;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    /// Minimum rank separation between `from` and `to`. At most [`MAX_MINLEN`].
    pub minlen: u32,
    pub weight: f64,
    /// Set when the acyclic pass swapped `from` and `to`.
    pub reversed: bool,
}

impl LayoutEdge {
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            minlen: 1,
            weight: 1.0,
            reversed: false,
        }
    }

    pub fn with_minlen(mut self, minlen: u32) -> Self {
        self.minlen = minlen;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Swaps the endpoints and toggles [`LayoutEdge::reversed`].
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        self.reversed = !self.reversed;
    }
}
