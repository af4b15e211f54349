//! Network simplex edge exchange helpers.

use super::super::tree::{SpanningTree, TreeNumbering};
use super::super::util::slack;
use crate::graph::alg::Adjacency;

/// First tree link (in tree insertion order) whose cut value is negative.
pub fn leave_edge(
    adj: &Adjacency,
    tree: &SpanningTree,
    numbering: &TreeNumbering,
    cut: &[f64],
) -> Option<usize> {
    tree.links().iter().copied().find(|&ix| {
        let Some(l) = adj.link(ix) else {
            return false;
        };
        let child = if numbering.parent(l.tail) == Some(l.head) {
            l.tail
        } else if numbering.parent(l.head) == Some(l.tail) {
            l.head
        } else {
            return false;
        };
        cut.get(child).is_some_and(|&c| c < 0.0)
    })
}

/// Minimum-slack link that reconnects the two halves the tree falls into once `leave` is
/// removed. It must cross the cut in the opposite direction to `leave`.
pub fn enter_edge(
    adj: &Adjacency,
    numbering: &TreeNumbering,
    ranks: &[i32],
    leave: usize,
) -> Option<usize> {
    let l = adj.link(leave)?;
    let (v, w) = (numbering.get(l.tail)?, numbering.get(l.head)?);

    // The subtree hanging below the leaving edge is the side with the smaller lim.
    let (subtree_root, flip) = if v.lim > w.lim {
        (l.head, true)
    } else {
        (l.tail, false)
    };

    let mut best: Option<(i32, usize)> = None;
    for (ix, e) in adj.links().iter().enumerate() {
        let tail_below = numbering.is_descendant(e.tail, subtree_root);
        let head_below = numbering.is_descendant(e.head, subtree_root);
        if flip != tail_below || flip == head_below {
            continue;
        }
        let s = slack(e, ranks);
        match best {
            Some((best_slack, _)) if s >= best_slack => {}
            _ => best = Some((s, ix)),
        }
    }
    best.map(|(_, ix)| ix)
}
