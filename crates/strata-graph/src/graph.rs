//! The layout graph container.
//!
//! Nodes and edges live in insertion-ordered maps keyed by id. Node and edge positions in those
//! maps double as dense indices for the traversal helpers in [`alg`].

use crate::error::{Error, Result};
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};

mod adjacency;
pub mod alg;
mod entries;

pub use entries::{LayoutEdge, LayoutNode, MAX_MINLEN, Point, Size};

type Map<V> = IndexMap<String, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Map<LayoutNode>,
    edges: Map<LayoutEdge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fresh node, replacing any node with the same id.
    pub fn add_node(&mut self, id: impl Into<String>, size: Size) -> &mut LayoutNode {
        self.add_layout_node(LayoutNode::new(id, size))
    }

    /// Inserts a pre-built node (ranks, orders and positions are kept as given).
    pub fn add_layout_node(&mut self, node: LayoutNode) -> &mut LayoutNode {
        let (ix, _) = self.nodes.insert_full(node.id.clone(), node);
        &mut self.nodes[ix]
    }

    /// Inserts an edge with `minlen = 1` and `weight = 1`, replacing any edge with the same id.
    ///
    /// Endpoints are not required to exist; see [`Graph::validate`].
    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> &mut LayoutEdge {
        self.add_layout_edge(LayoutEdge::new(id, from, to))
    }

    pub fn add_layout_edge(&mut self, edge: LayoutEdge) -> &mut LayoutEdge {
        let (ix, _) = self.edges.insert_full(edge.id.clone(), edge);
        &mut self.edges[ix]
    }

    /// Removes an edge, keeping the relative order of the remaining edges.
    pub fn remove_edge(&mut self, id: &str) -> Option<LayoutEdge> {
        self.edges.shift_remove(id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(id)
    }

    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    pub fn node_at(&self, ix: usize) -> Option<&LayoutNode> {
        self.nodes.get_index(ix).map(|(_, n)| n)
    }

    pub fn node_at_mut(&mut self, ix: usize) -> Option<&mut LayoutNode> {
        self.nodes.get_index_mut(ix).map(|(_, n)| n)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut LayoutNode> {
        self.nodes.values_mut()
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    pub fn has_edge(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    pub fn edge(&self, id: &str) -> Option<&LayoutEdge> {
        self.edges.get(id)
    }

    pub fn edge_mut(&mut self, id: &str) -> Option<&mut LayoutEdge> {
        self.edges.get_mut(id)
    }

    pub fn edge_at(&self, ix: usize) -> Option<&LayoutEdge> {
        self.edges.get_index(ix).map(|(_, e)| e)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &LayoutEdge> {
        self.edges.values()
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut LayoutEdge> {
        self.edges.values_mut()
    }

    pub fn edge_ids(&self) -> Vec<String> {
        self.edges.keys().cloned().collect()
    }

    pub fn out_edges<'a>(&'a self, v: &'a str) -> impl Iterator<Item = &'a LayoutEdge> {
        self.edges.values().filter(move |e| e.from == v)
    }

    pub fn in_edges<'a>(&'a self, v: &'a str) -> impl Iterator<Item = &'a LayoutEdge> {
        self.edges.values().filter(move |e| e.to == v)
    }

    /// Nodes without incoming edges, in insertion order.
    pub fn sources(&self) -> Vec<&str> {
        let targets: FxHashSet<&str> = self.edges.values().map(|e| e.to.as_str()).collect();
        self.nodes
            .keys()
            .map(String::as_str)
            .filter(|id| !targets.contains(id))
            .collect()
    }

    /// Checks that every edge endpoint names an existing node and that no `minlen` exceeds
    /// [`MAX_MINLEN`].
    pub fn validate(&self) -> Result<()> {
        for e in self.edges.values() {
            if e.minlen > MAX_MINLEN {
                return Err(Error::MinlenTooLarge {
                    edge_id: e.id.clone(),
                    minlen: e.minlen,
                    max: MAX_MINLEN,
                });
            }
            for endpoint in [&e.from, &e.to] {
                if !self.nodes.contains_key(endpoint) {
                    return Err(Error::MissingEndpoint {
                        edge_id: e.id.clone(),
                        node_id: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Edges whose endpoints are not both present.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &LayoutEdge> {
        self.edges
            .values()
            .filter(|e| !self.nodes.contains_key(&e.from) || !self.nodes.contains_key(&e.to))
    }
}
