//! Layer graph construction for ordering sweeps.
//!
//! A layer graph holds, for every node of one rank, the weighted neighbours a sweep reads
//! barycenters from: predecessors at smaller ranks for downward sweeps, successors at larger
//! ranks for upward ones. Parallel edges collapse into one neighbour with summed weight.

use crate::graph::alg::Adjacency;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// Edges arriving from the ranks above.
    InEdges,
    /// Edges leaving toward the ranks below.
    OutEdges,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerGraph {
    neighbors: FxHashMap<usize, Vec<(usize, f64)>>,
}

impl LayerGraph {
    /// `(neighbor, weight)` pairs of `v`, in first-seen order.
    pub fn neighbors(&self, v: usize) -> &[(usize, f64)] {
        self.neighbors.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    fn add(&mut self, v: usize, u: usize, weight: f64) {
        let ns = self.neighbors.entry(v).or_default();
        match ns.iter_mut().find(|(w, _)| *w == u) {
            Some((_, acc)) => *acc += weight,
            None => ns.push((u, weight)),
        }
    }
}

/// One layer graph per layer, built in a single pass over the links.
pub fn build_layer_graphs(
    adj: &Adjacency,
    layer_of: &[Option<usize>],
    layer_count: usize,
    relationship: Relationship,
) -> Vec<LayerGraph> {
    let mut graphs: Vec<LayerGraph> = vec![LayerGraph::default(); layer_count];
    for l in adj.links() {
        let (Some(Some(tail_layer)), Some(Some(head_layer))) =
            (layer_of.get(l.tail), layer_of.get(l.head))
        else {
            continue;
        };
        if tail_layer >= head_layer {
            continue;
        }
        let (layer, v, u) = match relationship {
            Relationship::InEdges => (*head_layer, l.head, l.tail),
            Relationship::OutEdges => (*tail_layer, l.tail, l.head),
        };
        if let Some(lg) = graphs.get_mut(layer) {
            lg.add(v, u, l.weight);
        }
    }
    graphs
}
