//! Break cycles by reversing a feedback arc set (FAS).
//!
//! The DFS strategy is the default; the greedy strategy is selected with
//! [`Acyclicer::Greedy`]. Reversed edges keep their ids and have [`LayoutEdge::reversed`] set.
//!
//! Self-loops are cycles that no reversal can fix, so they are taken out of the graph and handed
//! back in [`AcyclicReport::self_loops`]; [`undo`] puts them back.

use crate::config::Acyclicer;
use crate::graph::alg::Adjacency;
use crate::graph::{Graph, LayoutEdge};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcyclicReport {
    /// Ids of edges whose endpoints were swapped.
    pub reversed: Vec<String>,
    /// Self-loops removed from the graph.
    pub self_loops: Vec<LayoutEdge>,
}

pub fn run(g: &mut Graph, acyclicer: Acyclicer) -> AcyclicReport {
    let adj = Adjacency::new(g);
    let fas = match acyclicer {
        Acyclicer::Dfs => dfs_fas(&adj),
        Acyclicer::Greedy => crate::greedy_fas::greedy_fas(&adj),
    };

    let edge_ids: Vec<String> = fas
        .into_iter()
        .filter_map(|link_ix| adj.link(link_ix))
        .filter_map(|link| g.edge_at(link.edge))
        .map(|e| e.id.clone())
        .collect();

    let mut report = AcyclicReport::default();
    for id in edge_ids {
        let is_self_loop = g.edge(&id).is_some_and(LayoutEdge::is_self_loop);
        if is_self_loop {
            if let Some(e) = g.remove_edge(&id) {
                report.self_loops.push(e);
            }
            continue;
        }
        if let Some(e) = g.edge_mut(&id) {
            e.reverse();
            report.reversed.push(id);
        }
    }

    tracing::debug!(
        acyclicer = %acyclicer,
        reversed = report.reversed.len(),
        self_loops = report.self_loops.len(),
        "acyclic"
    );
    report
}

/// Restores reversed edges and re-inserts the self-loops taken out by [`run`].
pub fn undo(g: &mut Graph, report: AcyclicReport) {
    for id in &report.reversed {
        if let Some(e) = g.edge_mut(id) {
            if e.reversed {
                e.reverse();
            }
        }
    }
    for e in report.self_loops {
        g.add_layout_edge(e);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

struct Frame {
    node: usize,
    links: Vec<usize>,
    next: usize,
}

/// Link indices of back edges found by a white/gray/black DFS in node insertion order.
///
/// A link into a gray (on-stack) node closes a cycle. A self-loop hits its own gray tail.
pub fn dfs_fas(adj: &Adjacency) -> Vec<usize> {
    let n = adj.node_count();
    let mut color: Vec<Color> = vec![Color::White; n];
    let mut fas: Vec<usize> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    let open = |node: usize| Frame {
        node,
        links: adj.out_links(node).map(|(ix, _)| ix).collect(),
        next: 0,
    };

    for root in 0..n {
        if color[root] != Color::White {
            continue;
        }
        color[root] = Color::Gray;
        stack.push(open(root));

        while let Some(top) = stack.last_mut() {
            if let Some(&link_ix) = top.links.get(top.next) {
                top.next += 1;
                let Some(head) = adj.link(link_ix).map(|l| l.head) else {
                    continue;
                };
                match color[head] {
                    Color::Gray => fas.push(link_ix),
                    Color::White => {
                        color[head] = Color::Gray;
                        stack.push(open(head));
                    }
                    Color::Black => {}
                }
                continue;
            }
            color[top.node] = Color::Black;
            stack.pop();
        }
    }
    fas
}
