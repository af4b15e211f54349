use crate::graph::alg::Adjacency;
use rustc_hash::FxHashMap;

/// Weighted crossings between every pair of adjacent layers.
///
/// Each crossing of edges `e` and `f` contributes `weight(e) * weight(f)`. Edges that skip a
/// layer are not counted.
pub fn cross_count(adj: &Adjacency, layering: &[Vec<usize>]) -> f64 {
    let mut cc: f64 = 0.0;
    for i in 1..layering.len() {
        cc += two_layer_cross_count(adj, &layering[i - 1], &layering[i]);
    }
    cc
}

struct SouthEntry {
    pos: usize,
    weight: f64,
}

fn two_layer_cross_count(adj: &Adjacency, north: &[usize], south: &[usize]) -> f64 {
    if south.is_empty() {
        return 0.0;
    }

    let south_pos: FxHashMap<usize, usize> =
        south.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut south_entries: Vec<SouthEntry> = Vec::new();
    for &v in north {
        let mut entries: Vec<SouthEntry> = adj
            .out_links(v)
            .filter_map(|(_, l)| {
                let pos = *south_pos.get(&l.head)?;
                Some(SouthEntry {
                    pos,
                    weight: l.weight,
                })
            })
            .collect();
        entries.sort_by_key(|e| e.pos);
        south_entries.extend(entries);
    }

    // Accumulator tree: leaves are south positions, inner nodes hold subtree weight sums.
    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<f64> = vec![0.0; tree_size];

    let mut cc: f64 = 0.0;
    for entry in south_entries {
        let mut index = entry.pos + first_index;
        tree[index] += entry.weight;
        let mut weight_sum: f64 = 0.0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += entry.weight;
        }
        cc += entry.weight * weight_sum;
    }
    cc
}
