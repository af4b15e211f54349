//! Network simplex ranker.
//!
//! Starts from longest-path ranks and a feasible tree, then repeatedly swaps a tree edge with a
//! negative cut value for the non-tree edge of minimum slack that reconnects the tree, until no
//! negative cut value is left. The result minimizes `sum(weight * (rank[to] - rank[from]))`
//! subject to the `minlen` constraints.

use super::feasible_tree::feasible_tree;
use super::tree::{SpanningTree, TreeNumbering};
use super::util::longest_path;
use crate::graph::alg::Adjacency;

mod edges;

pub use edges::{enter_edge, leave_edge};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplexOutcome {
    /// Edge exchanges performed.
    pub iterations: usize,
    /// `false` when the iteration cap stopped the loop early. Ranks are still feasible.
    pub converged: bool,
}

pub fn network_simplex(adj: &Adjacency, max_iterations: usize) -> (Vec<i32>, SimplexOutcome) {
    let mut ranks = longest_path(adj);
    let mut tree = feasible_tree(adj, &mut ranks);
    let mut numbering = TreeNumbering::new(&tree);
    let mut cut = cut_values(adj, &numbering);

    let mut iterations: usize = 0;
    let converged = loop {
        let Some(leave) = leave_edge(adj, &tree, &numbering, &cut) else {
            break true;
        };
        if iterations >= max_iterations {
            tracing::warn!(
                iterations,
                "network simplex hit its iteration cap; keeping the current feasible ranking"
            );
            break false;
        }
        let Some(enter) = enter_edge(adj, &numbering, &ranks, leave) else {
            tracing::warn!(leave, "network simplex found no entering edge");
            break false;
        };

        tree.exchange(adj, leave, enter);
        numbering = TreeNumbering::new(&tree);
        cut = cut_values(adj, &numbering);
        update_ranks(adj, &numbering, &mut ranks);
        debug_assert!(tree_is_tight(adj, &tree, &ranks));
        iterations += 1;
    };

    tracing::debug!(iterations, converged, "network simplex");
    (
        ranks,
        SimplexOutcome {
            iterations,
            converged,
        },
    )
}

/// Cut value of the tree edge joining each node to its parent (`0.0` for roots), computed in
/// postorder so every child's value is known before its parent's.
pub fn cut_values(adj: &Adjacency, numbering: &TreeNumbering) -> Vec<f64> {
    let mut cut: Vec<f64> = vec![0.0; adj.node_count()];
    for &child in numbering.postorder() {
        let Some(parent) = numbering.parent(child) else {
            continue;
        };
        cut[child] = calc_cut_value(adj, numbering, &cut, child, parent);
    }
    cut
}

fn calc_cut_value(
    adj: &Adjacency,
    numbering: &TreeNumbering,
    cut: &[f64],
    child: usize,
    parent: usize,
) -> f64 {
    let (child_is_tail, tree_link) = if let Some(ix) = adj.find_link(child, parent) {
        (true, ix)
    } else if let Some(ix) = adj.find_link(parent, child) {
        (false, ix)
    } else {
        return 0.0;
    };
    let mut cut_value = adj.link(tree_link).map(|l| l.weight).unwrap_or(0.0);

    let outgoing = adj.out_links(child).map(|(_, l)| (true, l.head, l.weight));
    let incoming = adj.in_links(child).map(|(_, l)| (false, l.tail, l.weight));
    for (is_out, other, weight) in outgoing.chain(incoming) {
        if other == parent {
            continue;
        }
        let points_to_head = is_out == child_is_tail;
        cut_value += if points_to_head { weight } else { -weight };

        if numbering.parent(other) == Some(child) {
            let other_cut = cut[other];
            cut_value += if points_to_head { -other_cut } else { other_cut };
        }
    }
    cut_value
}

/// Re-derives ranks from the tree: walking from each root, a child sits `minlen` away from its
/// parent on the side its tree edge points to.
pub fn update_ranks(adj: &Adjacency, numbering: &TreeNumbering, ranks: &mut [i32]) {
    for &v in numbering.preorder() {
        let Some(parent) = numbering.parent(v) else {
            continue;
        };
        if let Some(l) = adj.find_link(v, parent).and_then(|ix| adj.link(ix)) {
            ranks[v] = ranks[parent].saturating_sub(l.minlen);
        } else if let Some(l) = adj.find_link(parent, v).and_then(|ix| adj.link(ix)) {
            ranks[v] = ranks[parent].saturating_add(l.minlen);
        }
    }
}

fn tree_is_tight(adj: &Adjacency, tree: &SpanningTree, ranks: &[i32]) -> bool {
    tree.links()
        .iter()
        .filter_map(|&ix| adj.link(ix))
        .all(|l| super::util::slack(l, ranks) == 0)
}
