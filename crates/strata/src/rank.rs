//! Ranking algorithms (network simplex, tight tree, longest path).
//!
//! Every ranker works on a simplified [`Adjacency`] snapshot (parallel edges merged, self-loops
//! dropped) and a dense `Vec<i32>` rank table, then writes the result back onto
//! [`LayoutNode::rank`](crate::graph::LayoutNode::rank). The graph must be acyclic.

use crate::config::Ranker;
use crate::graph::Graph;
use crate::graph::alg::Adjacency;

pub mod feasible_tree;
pub mod network_simplex;
pub mod tree;
pub mod util;

pub use network_simplex::SimplexOutcome;

/// Assigns a rank to every node. Returns the simplex outcome when that ranker ran.
pub fn rank(
    g: &mut Graph,
    ranker: Ranker,
    max_simplex_iterations: usize,
) -> Option<SimplexOutcome> {
    let adj = Adjacency::new(g).simplified();
    if adj.dangling() > 0 {
        tracing::warn!(
            dangling = adj.dangling(),
            "ignoring edges with missing endpoints while ranking"
        );
    }

    let (ranks, outcome) = match ranker {
        Ranker::LongestPath => (util::longest_path(&adj), None),
        Ranker::TightTree => {
            let mut ranks = util::longest_path(&adj);
            feasible_tree::feasible_tree(&adj, &mut ranks);
            (ranks, None)
        }
        Ranker::NetworkSimplex => {
            let (ranks, outcome) = network_simplex::network_simplex(&adj, max_simplex_iterations);
            (ranks, Some(outcome))
        }
    };
    util::apply_ranks(g, &ranks);

    tracing::debug!(
        ranker = %ranker,
        tight_edges = util::tight_edge_count(g),
        edges = g.edge_count(),
        "rank"
    );
    outcome
}
