//! Feasible tree construction used by the network simplex ranker.
//!
//! Grows a spanning tree of tight edges (slack 0) from the first node. When the tree stops
//! growing, the crossing edge with the smallest slack is made tight by shifting every tree node,
//! and growth resumes. Components that no edge reaches get their own root, so the result is a
//! spanning forest.

use super::tree::SpanningTree;
use super::util::slack;
use crate::graph::alg::Adjacency;

pub fn feasible_tree(adj: &Adjacency, ranks: &mut [i32]) -> SpanningTree {
    let n = adj.node_count();
    let mut tree = SpanningTree::new(n);
    if n == 0 {
        return tree;
    }
    tree.add_root(0);

    while tight_tree(adj, ranks, &mut tree) < n {
        match find_min_slack_edge(adj, ranks, &tree) {
            Some((slack, tail_in_tree)) => {
                let delta = if tail_in_tree { slack } else { -slack };
                for (v, rank) in ranks.iter_mut().enumerate() {
                    if tree.contains(v) {
                        *rank = rank.saturating_add(delta);
                    }
                }
            }
            None => {
                let Some(next_root) = (0..n).find(|&v| !tree.contains(v)) else {
                    break;
                };
                tree.add_root(next_root);
            }
        }
    }
    tree
}

/// Extends `tree` with every node reachable through tight edges. Returns the tree size.
fn tight_tree(adj: &Adjacency, ranks: &[i32], tree: &mut SpanningTree) -> usize {
    let mut stack: Vec<usize> = (0..adj.node_count()).filter(|&v| tree.contains(v)).collect();
    while let Some(v) = stack.pop() {
        let incident: Vec<(usize, usize)> = adj
            .out_links(v)
            .chain(adj.in_links(v))
            .filter(|(_, l)| slack(l, ranks) == 0)
            .map(|(ix, l)| (ix, if l.tail == v { l.head } else { l.tail }))
            .collect();
        for (link_ix, w) in incident {
            if tree.contains(w) {
                continue;
            }
            tree.add_link(adj, link_ix);
            stack.push(w);
        }
    }
    tree.len()
}

/// Smallest slack among links with exactly one endpoint in the tree, and whether that endpoint
/// is the tail. Ties keep the first link.
fn find_min_slack_edge(
    adj: &Adjacency,
    ranks: &[i32],
    tree: &SpanningTree,
) -> Option<(i32, bool)> {
    let mut best: Option<(i32, bool)> = None;
    for l in adj.links() {
        let tail_in = tree.contains(l.tail);
        if tail_in == tree.contains(l.head) {
            continue;
        }
        let s = slack(l, ranks);
        match best {
            Some((best_slack, _)) if s >= best_slack => {}
            _ => best = Some((s, tail_in)),
        }
    }
    best
}
