//! Node ordering / crossing minimization.
//!
//! Alternating barycenter sweeps over per-rank layer graphs, each followed by an adjacent-swap
//! local search, keeping the ordering with the fewest weighted crossings seen so far.

mod barycenter;
mod cross_count;
mod init_order;
mod layer_graph;
mod local_search;
mod ordering;

pub use barycenter::{BarycenterEntry, barycenter, sort};
pub use cross_count::cross_count;
pub use init_order::{init_order, layer_index};
pub use layer_graph::{LayerGraph, Relationship, build_layer_graphs};
pub use local_search::{CrossingIndex, improve_layer};
pub use ordering::{OrderSummary, order};

/// Node indices per rank, left to right.
pub type Layering = Vec<Vec<usize>>;

/// Position of every node within its rank (`usize::MAX` for unranked nodes).
pub fn positions(layering: &[Vec<usize>], node_count: usize) -> Vec<usize> {
    let mut pos: Vec<usize> = vec![usize::MAX; node_count];
    for layer in layering {
        for (i, &v) in layer.iter().enumerate() {
            if let Some(p) = pos.get_mut(v) {
                *p = i;
            }
        }
    }
    pos
}
