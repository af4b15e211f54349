//! Rank normalization.

use crate::graph::Graph;

/// Shifts assigned ranks so the smallest is 0. Unranked nodes stay unranked.
///
/// Returns the applied shift (the old minimum), or `None` when no node has a rank.
pub fn normalize_ranks(g: &mut Graph) -> Option<i32> {
    let min_rank = g.nodes().filter_map(|n| n.rank).min()?;
    for n in g.nodes_mut() {
        if let Some(rank) = n.rank.as_mut() {
            *rank = rank.saturating_sub(min_rank);
        }
    }
    tracing::debug!(shift = min_rank, "normalize ranks");
    Some(min_rank)
}
