//! The external diagram a layout reads topology from and writes positions back to.

use crate::graph::{LayoutEdge, Point, Size};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A directed connection as the diagram reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minlen: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Connection {
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            minlen: None,
            weight: None,
        }
    }

    pub fn with_minlen(mut self, minlen: u32) -> Self {
        self.minlen = Some(minlen);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn to_edge(&self) -> LayoutEdge {
        let mut edge = LayoutEdge::new(&self.id, &self.from, &self.to);
        if let Some(minlen) = self.minlen {
            edge.minlen = minlen;
        }
        if let Some(weight) = self.weight {
            edge.weight = weight;
        }
        edge
    }
}

/// Host-side view of a diagram.
///
/// Sizes are read once before layout; positions are written once after it.
pub trait Diagram {
    /// Size of the node `id`, or `None` if the diagram has no such node.
    fn node_size(&self, id: &str) -> Option<Size>;

    /// Every connection touching `id`, inbound and outbound.
    fn connections(&self, id: &str) -> Vec<Connection>;

    fn set_position(&mut self, id: &str, position: Point);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryNode {
    pub size: Size,
    pub position: Point,
}

/// An in-memory [`Diagram`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryDiagram {
    nodes: IndexMap<String, MemoryNode>,
    connections: Vec<Connection>,
}

impl MemoryDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: impl Into<String>, size: Size) -> &mut Self {
        self.nodes.insert(
            id.into(),
            MemoryNode {
                size,
                position: Point::default(),
            },
        );
        self
    }

    pub fn add_connection(&mut self, connection: Connection) -> &mut Self {
        self.connections.push(connection);
        self
    }

    /// Adds a connection with default `minlen` and `weight`.
    pub fn connect(
        &mut self,
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> &mut Self {
        self.add_connection(Connection::new(id, from, to))
    }

    pub fn node(&self, id: &str) -> Option<&MemoryNode> {
        self.nodes.get(id)
    }

    pub fn position(&self, id: &str) -> Option<Point> {
        self.nodes.get(id).map(|n| n.position)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn all_connections(&self) -> &[Connection] {
        &self.connections
    }
}

impl Diagram for MemoryDiagram {
    fn node_size(&self, id: &str) -> Option<Size> {
        self.nodes.get(id).map(|n| n.size)
    }

    fn connections(&self, id: &str) -> Vec<Connection> {
        self.connections
            .iter()
            .filter(|c| c.from == id || c.to == id)
            .cloned()
            .collect()
    }

    fn set_position(&mut self, id: &str, position: Point) {
        if let Some(n) = self.nodes.get_mut(id) {
            n.position = position;
        }
    }
}
