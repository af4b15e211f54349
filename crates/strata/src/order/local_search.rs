//! Adjacent-swap local search.
//!
//! After each barycenter sweep, neighbouring nodes of a layer are swapped whenever that strictly
//! lowers the weighted crossings between the two of them and the layers directly above and below.

use crate::graph::alg::Adjacency;

/// Per-node neighbours in the two adjacent layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossingIndex {
    above: Vec<Vec<(usize, f64)>>,
    below: Vec<Vec<(usize, f64)>>,
}

impl CrossingIndex {
    pub fn new(adj: &Adjacency, layer_of: &[Option<usize>]) -> Self {
        let n = adj.node_count();
        let mut above: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        let mut below: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        for l in adj.links() {
            let (Some(Some(t)), Some(Some(h))) = (layer_of.get(l.tail), layer_of.get(l.head))
            else {
                continue;
            };
            if t + 1 == *h {
                below[l.tail].push((l.head, l.weight));
                above[l.head].push((l.tail, l.weight));
            } else if h + 1 == *t {
                below[l.head].push((l.tail, l.weight));
                above[l.tail].push((l.head, l.weight));
            }
        }
        Self { above, below }
    }

    /// Weighted crossings among the edges of `u` and `v` when `u` sits left of `v`.
    pub fn pair_crossings(&self, u: usize, v: usize, pos: &[usize]) -> f64 {
        side_crossings(&self.above[u], &self.above[v], pos)
            + side_crossings(&self.below[u], &self.below[v], pos)
    }
}

fn side_crossings(left: &[(usize, f64)], right: &[(usize, f64)], pos: &[usize]) -> f64 {
    let mut cc: f64 = 0.0;
    for &(a, wa) in left {
        for &(b, wb) in right {
            if pos[a] > pos[b] {
                cc += wa * wb;
            }
        }
    }
    cc
}

/// Runs swap passes over one layer until a pass makes no change. Returns the number of swaps.
pub fn improve_layer(index: &CrossingIndex, layer: &mut [usize], pos: &mut [usize]) -> usize {
    let mut swaps: usize = 0;
    // At most one pass per node.
    for _ in 0..layer.len() {
        let mut improved = false;
        for i in 1..layer.len() {
            let (u, v) = (layer[i - 1], layer[i]);
            if index.pair_crossings(v, u, pos) < index.pair_crossings(u, v, pos) {
                layer.swap(i - 1, i);
                pos[u] = i;
                pos[v] = i - 1;
                swaps += 1;
                improved = true;
            }
        }
        if !improved {
            break;
        }
    }
    swaps
}
