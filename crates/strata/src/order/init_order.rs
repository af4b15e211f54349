use super::Layering;
use crate::graph::Graph;
use std::collections::{BTreeMap, BTreeSet};

/// Layer of every node. `None` when unranked.
///
/// Occupied ranks map to layers in rank order starting at 0. A run of empty ranks between two
/// occupied ones collapses to a single empty layer, so layer adjacency matches rank adjacency
/// while the layer count stays below twice the node count.
pub fn layer_index(g: &Graph) -> Vec<Option<usize>> {
    let occupied: BTreeSet<i32> = g.nodes().filter_map(|n| n.rank).collect();
    let mut layers: BTreeMap<i32, usize> = BTreeMap::new();
    let mut prev: Option<(i32, usize)> = None;
    for rank in occupied {
        let layer = match prev {
            None => 0,
            Some((p, layer)) if i64::from(rank) - i64::from(p) == 1 => layer + 1,
            Some((_, layer)) => layer + 2,
        };
        layers.insert(rank, layer);
        prev = Some((rank, layer));
    }
    g.nodes()
        .map(|n| n.rank.and_then(|r| layers.get(&r).copied()))
        .collect()
}

/// Initial ordering: each layer lists its nodes in graph insertion order.
pub fn init_order(g: &Graph) -> Layering {
    let layer_of = layer_index(g);
    let layer_count = layer_of.iter().flatten().max().map_or(0, |&m| m + 1);
    let mut layering: Layering = vec![Vec::new(); layer_count];
    for (v, layer) in layer_of.into_iter().enumerate() {
        if let Some(layer) = layer {
            layering[layer].push(v);
        }
    }
    layering
}
