//! Rank helpers (longest-path, slack).

use crate::graph::alg::{self, Adjacency, Direction, Link};
use crate::graph::{Graph, LayoutEdge};

/// Longest-path ranking.
///
/// Sinks get height 0 and every other node sits `minlen` above its highest successor. Heights
/// are then flipped (`rank = max_height - height`) so sources take the smallest ranks. Fast and
/// feasible, but edges can come out longer than necessary.
pub fn longest_path(adj: &Adjacency) -> Vec<i32> {
    let n = adj.node_count();
    let sources: Vec<usize> = (0..n)
        .filter(|&v| adj.in_links(v).all(|(_, l)| l.tail == v))
        .collect();

    let mut height: Vec<i32> = vec![0; n];
    for v in alg::postorder(adj, sources.into_iter().chain(0..n), Direction::Outgoing) {
        height[v] = adj
            .out_links(v)
            .filter(|(_, l)| l.head != v)
            .map(|(_, l)| height[l.head].saturating_add(l.minlen))
            .max()
            .unwrap_or(0);
    }

    let max_height = height.iter().copied().max().unwrap_or(0);
    height.into_iter().map(|h| max_height.saturating_sub(h)).collect()
}

pub fn slack(link: &Link, ranks: &[i32]) -> i32 {
    ranks[link.head]
        .saturating_sub(ranks[link.tail])
        .saturating_sub(link.minlen)
}

/// Slack of a graph edge from the ranks stored on its endpoints. `None` when an endpoint is
/// missing or unranked.
pub fn edge_slack(g: &Graph, e: &LayoutEdge) -> Option<i32> {
    let from = g.node(&e.from)?.rank?;
    let to = g.node(&e.to)?.rank?;
    let minlen = i32::try_from(e.minlen).unwrap_or(i32::MAX);
    Some(to.saturating_sub(from).saturating_sub(minlen))
}

pub fn tight_edge_count(g: &Graph) -> usize {
    g.edges()
        .filter(|e| edge_slack(g, e) == Some(0))
        .count()
}

pub fn apply_ranks(g: &mut Graph, ranks: &[i32]) {
    for (ix, &rank) in ranks.iter().enumerate() {
        if let Some(n) = g.node_at_mut(ix) {
            n.rank = Some(rank);
        }
    }
}
