use super::LayerGraph;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct BarycenterEntry {
    pub v: usize,
    /// Weighted mean position of the neighbours; `0.0` when there are none.
    pub barycenter: f64,
    /// Total weight of the edges to the neighbours.
    pub weight: f64,
}

/// Barycenter of every node in `movable` against the current positions `pos`.
pub fn barycenter(lg: &LayerGraph, movable: &[usize], pos: &[usize]) -> Vec<BarycenterEntry> {
    movable
        .iter()
        .map(|&v| {
            let mut sum: f64 = 0.0;
            let mut weight: f64 = 0.0;
            for &(u, w) in lg.neighbors(v) {
                let Some(&p) = pos.get(u) else {
                    continue;
                };
                if p == usize::MAX {
                    continue;
                }
                sum += w * p as f64;
                weight += w;
            }
            let barycenter = if weight == 0.0 { 0.0 } else { sum / weight };
            BarycenterEntry {
                v,
                barycenter,
                weight,
            }
        })
        .collect()
}

/// Stable sort by ascending barycenter, heavier nodes first on ties.
pub fn sort(mut entries: Vec<BarycenterEntry>) -> Vec<usize> {
    entries.sort_by(|a, b| {
        a.barycenter
            .partial_cmp(&b.barycenter)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal))
    });
    entries.into_iter().map(|e| e.v).collect()
}
