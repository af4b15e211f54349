//! Coordinate assignment.
//!
//! Ranks are stacked along the depth axis, each as thick as its deepest node plus
//! `rank_spacing`. Within a rank, nodes are laid out in `order`, `node_spacing` apart, and the
//! rank as a whole is centered on the cross axis around zero.

use crate::config::LayoutConfig;
use crate::coordinate_system::{cross_extent, depth_extent, to_point};
use crate::graph::Graph;
use std::collections::BTreeMap;

/// Writes `position` for every ranked node. Returns the number of nodes positioned.
pub fn position(g: &mut Graph, config: &LayoutConfig) -> usize {
    let rankdir = config.rankdir;

    let mut ranks: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (ix, n) in g.nodes().enumerate() {
        if let Some(rank) = n.rank {
            ranks.entry(rank).or_default().push(ix);
        }
    }
    if ranks.is_empty() {
        return 0;
    }

    // Within each rank, order by `order` if present, otherwise keep insertion order.
    for ixs in ranks.values_mut() {
        ixs.sort_by_key(|&ix| g.node_at(ix).and_then(|n| n.order).unwrap_or(usize::MAX));
    }

    let mut positioned: usize = 0;
    let mut depth: f64 = 0.0;
    let mut prev_rank: Option<i32> = None;
    for (&rank, ixs) in &ranks {
        // Each empty rank in between adds only rank_spacing.
        if let Some(prev) = prev_rank {
            let empty = i64::from(rank) - i64::from(prev) - 1;
            depth += empty as f64 * config.rank_spacing;
        }
        prev_rank = Some(rank);

        let sizes: Vec<_> = ixs
            .iter()
            .filter_map(|&ix| g.node_at(ix).map(|n| n.size))
            .collect();
        let thickness = sizes
            .iter()
            .map(|&s| depth_extent(s, rankdir))
            .fold(0.0, f64::max);
        let span: f64 = sizes.iter().map(|&s| cross_extent(s, rankdir)).sum::<f64>()
            + config.node_spacing * ixs.len().saturating_sub(1) as f64;

        let mut cross = -span / 2.0;
        for &ix in ixs {
            let Some(n) = g.node_at_mut(ix) else {
                continue;
            };
            let along = cross_extent(n.size, rankdir);
            let center_depth = depth + depth_extent(n.size, rankdir) / 2.0;
            n.position = to_point(center_depth, cross + along / 2.0, rankdir);
            cross += along + config.node_spacing;
            positioned += 1;
        }
        depth += thickness + config.rank_spacing;
    }

    tracing::debug!(
        rankdir = %rankdir,
        ranks = ranks.len(),
        nodes = positioned,
        "position"
    );
    positioned
}
