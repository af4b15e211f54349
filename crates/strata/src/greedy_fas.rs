//! Greedy feedback arc set (FAS) selection.
//!
//! Builds a total order of the nodes by repeatedly taking the remaining node with the largest
//! weighted `out - in` degree (counting only edges between remaining nodes), then reports every
//! link that points backwards in that order. Used by `acyclic` when the greedy acyclicer is
//! selected.

use crate::graph::alg::Adjacency;

/// Link indices to reverse. Self-loops are always included.
pub fn greedy_fas(adj: &Adjacency) -> Vec<usize> {
    let order = greedy_order(adj);
    let mut pos: Vec<usize> = vec![0; adj.node_count()];
    for (i, &v) in order.iter().enumerate() {
        pos[v] = i;
    }

    adj.links()
        .iter()
        .enumerate()
        .filter(|(_, l)| l.tail == l.head || pos[l.tail] > pos[l.head])
        .map(|(ix, _)| ix)
        .collect()
}

/// The node order the greedy heuristic settles on. Ties go to the lower node index.
pub fn greedy_order(adj: &Adjacency) -> Vec<usize> {
    let n = adj.node_count();
    let mut out_w: Vec<f64> = vec![0.0; n];
    let mut in_w: Vec<f64> = vec![0.0; n];
    for l in adj.links() {
        if l.tail == l.head {
            continue;
        }
        out_w[l.tail] += l.weight;
        in_w[l.head] += l.weight;
    }

    let mut alive: Vec<bool> = vec![true; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    while order.len() < n {
        let mut picked: Option<(usize, f64)> = None;
        for v in (0..n).filter(|&v| alive[v]) {
            let delta = out_w[v] - in_w[v];
            match picked {
                Some((_, best)) if delta <= best => {}
                _ => picked = Some((v, delta)),
            }
        }
        let Some((v, _)) = picked else {
            break;
        };

        alive[v] = false;
        order.push(v);
        for (_, l) in adj.out_links(v) {
            if l.head != v && alive[l.head] {
                in_w[l.head] -= l.weight;
            }
        }
        for (_, l) in adj.in_links(v) {
            if l.tail != v && alive[l.tail] {
                out_w[l.tail] -= l.weight;
            }
        }
    }
    order
}
