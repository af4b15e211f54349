//! Traversal helpers shared by the layout passes.
//!
//! Everything here works on dense node indices through the [`Neighbors`] trait, so the same
//! depth-first walk serves the layout graph ([`Adjacency`]) and the spanning trees built while
//! ranking. Walks use an explicit stack; deep graphs never touch the call stack.

pub use super::adjacency::{Adjacency, Link};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow edges from tail to head.
    Outgoing,
    /// Follow edges from head to tail.
    Incoming,
    /// Ignore orientation.
    Both,
}

pub trait Neighbors {
    fn node_count(&self) -> usize;

    fn neighbors(&self, v: usize, direction: Direction) -> impl Iterator<Item = usize> + '_;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    Enter { node: usize, parent: Option<usize> },
    Exit { node: usize, parent: Option<usize> },
}

struct Frame {
    node: usize,
    parent: Option<usize>,
    neighbors: Vec<usize>,
    next: usize,
}

/// Depth-first walk from each root in turn, skipping nodes already seen.
///
/// Neighbors are visited in the order [`Neighbors::neighbors`] yields them. Roots out of range
/// are ignored.
pub fn dfs<G>(
    g: &G,
    roots: impl IntoIterator<Item = usize>,
    direction: Direction,
    mut visit: impl FnMut(DfsEvent),
) where
    G: Neighbors,
{
    let n = g.node_count();
    let mut visited: Vec<bool> = vec![false; n];
    let mut stack: Vec<Frame> = Vec::new();

    let open = |node: usize, parent: Option<usize>| Frame {
        node,
        parent,
        neighbors: g.neighbors(node, direction).collect(),
        next: 0,
    };

    for root in roots {
        if root >= n || visited[root] {
            continue;
        }
        visited[root] = true;
        visit(DfsEvent::Enter {
            node: root,
            parent: None,
        });
        stack.push(open(root, None));

        while let Some(top) = stack.last_mut() {
            if let Some(&w) = top.neighbors.get(top.next) {
                top.next += 1;
                if w >= n || visited[w] {
                    continue;
                }
                let parent = Some(top.node);
                visited[w] = true;
                visit(DfsEvent::Enter { node: w, parent });
                stack.push(open(w, parent));
                continue;
            }
            let Some(frame) = stack.pop() else {
                break;
            };
            visit(DfsEvent::Exit {
                node: frame.node,
                parent: frame.parent,
            });
        }
    }
}

pub fn preorder<G>(
    g: &G,
    roots: impl IntoIterator<Item = usize>,
    direction: Direction,
) -> Vec<usize>
where
    G: Neighbors,
{
    let mut out: Vec<usize> = Vec::new();
    dfs(g, roots, direction, |ev| {
        if let DfsEvent::Enter { node, .. } = ev {
            out.push(node);
        }
    });
    out
}

pub fn postorder<G>(
    g: &G,
    roots: impl IntoIterator<Item = usize>,
    direction: Direction,
) -> Vec<usize>
where
    G: Neighbors,
{
    let mut out: Vec<usize> = Vec::new();
    dfs(g, roots, direction, |ev| {
        if let DfsEvent::Exit { node, .. } = ev {
            out.push(node);
        }
    });
    out
}

/// Weakly connected components, each listed in discovery order.
pub fn components<G>(g: &G) -> Vec<Vec<usize>>
where
    G: Neighbors,
{
    let mut out: Vec<Vec<usize>> = Vec::new();
    dfs(g, 0..g.node_count(), Direction::Both, |ev| match ev {
        DfsEvent::Enter { node, parent: None } => out.push(vec![node]),
        DfsEvent::Enter { node, .. } => {
            if let Some(comp) = out.last_mut() {
                comp.push(node);
            }
        }
        DfsEvent::Exit { .. } => {}
    });
    out
}

/// Nodes that could not be placed by [`topsort`] because they sit on or behind a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    pub nodes: Vec<usize>,
}

/// Kahn's algorithm. Ties are broken by node index, so the result is deterministic.
pub fn topsort<G>(g: &G) -> Result<Vec<usize>, Cycle>
where
    G: Neighbors,
{
    let n = g.node_count();
    let mut in_degree: Vec<usize> = (0..n)
        .map(|v| g.neighbors(v, Direction::Incoming).count())
        .collect();
    let mut ready: std::collections::BinaryHeap<std::cmp::Reverse<usize>> = (0..n)
        .filter(|&v| in_degree[v] == 0)
        .map(std::cmp::Reverse)
        .collect();

    let mut out: Vec<usize> = Vec::with_capacity(n);
    while let Some(std::cmp::Reverse(v)) = ready.pop() {
        out.push(v);
        for w in g.neighbors(v, Direction::Outgoing) {
            let Some(d) = in_degree.get_mut(w) else {
                continue;
            };
            *d = d.saturating_sub(1);
            if *d == 0 {
                ready.push(std::cmp::Reverse(w));
            }
        }
    }

    if out.len() == n {
        Ok(out)
    } else {
        let mut placed: Vec<bool> = vec![false; n];
        for &v in &out {
            placed[v] = true;
        }
        Err(Cycle {
            nodes: (0..n).filter(|&v| !placed[v]).collect(),
        })
    }
}

pub fn is_acyclic<G>(g: &G) -> bool
where
    G: Neighbors,
{
    topsort(g).is_ok()
}
