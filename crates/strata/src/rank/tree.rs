//! Spanning trees used by the ranking algorithms.

use crate::graph::alg::{self, Adjacency, DfsEvent, Direction, Neighbors};

/// A spanning forest over the nodes of an [`Adjacency`], built from its links.
///
/// Each component has one root; every other member is attached by exactly one tree link.
#[derive(Debug, Clone, Default)]
pub struct SpanningTree {
    members: Vec<bool>,
    size: usize,
    roots: Vec<usize>,
    /// Tree links in insertion order (indices into the adjacency).
    links: Vec<usize>,
    /// `(neighbor, link)` pairs per node.
    neighbors: Vec<Vec<(usize, usize)>>,
}

impl SpanningTree {
    pub fn new(node_count: usize) -> Self {
        Self {
            members: vec![false; node_count],
            size: 0,
            roots: Vec::new(),
            links: Vec::new(),
            neighbors: vec![Vec::new(); node_count],
        }
    }

    /// Starts a new component at `v`. No-op if `v` is already a member.
    pub fn add_root(&mut self, v: usize) {
        if self.insert(v) {
            self.roots.push(v);
        }
    }

    /// Adds a tree link, making both endpoints members.
    pub fn add_link(&mut self, adj: &Adjacency, link_ix: usize) {
        let Some(l) = adj.link(link_ix) else {
            return;
        };
        let (tail, head) = (l.tail, l.head);
        self.insert(tail);
        self.insert(head);
        self.links.push(link_ix);
        self.neighbors[tail].push((head, link_ix));
        self.neighbors[head].push((tail, link_ix));
    }

    /// Replaces tree link `leave` with the non-tree link `enter`. Membership is unchanged.
    pub fn exchange(&mut self, adj: &Adjacency, leave: usize, enter: usize) {
        self.links.retain(|&ix| ix != leave);
        for ns in &mut self.neighbors {
            ns.retain(|&(_, ix)| ix != leave);
        }
        self.add_link(adj, enter);
    }

    pub fn contains(&self, v: usize) -> bool {
        self.members.get(v).copied().unwrap_or(false)
    }

    /// Number of member nodes.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn links(&self) -> &[usize] {
        &self.links
    }

    fn insert(&mut self, v: usize) -> bool {
        match self.members.get_mut(v) {
            Some(m) if !*m => {
                *m = true;
                self.size += 1;
                true
            }
            _ => false,
        }
    }
}

impl Neighbors for SpanningTree {
    fn node_count(&self) -> usize {
        self.members.len()
    }

    fn neighbors(&self, v: usize, _direction: Direction) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.get(v).into_iter().flatten().map(|&(w, _)| w)
    }
}

/// Euler-tour bounds of one tree node: `lim` is its postorder number and `low` the smallest
/// postorder number in its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowLim {
    pub low: i32,
    pub lim: i32,
    pub parent: Option<usize>,
}

/// `node -> { low, lim, parent }` for a [`SpanningTree`], computed in one walk from its roots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeNumbering {
    entries: Vec<Option<LowLim>>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

impl TreeNumbering {
    pub fn new(tree: &SpanningTree) -> Self {
        let n = tree.node_count();
        let mut entries: Vec<Option<LowLim>> = vec![None; n];
        let mut preorder: Vec<usize> = Vec::with_capacity(tree.len());
        let mut postorder: Vec<usize> = Vec::with_capacity(tree.len());
        let mut next_lim: i32 = 1;

        alg::dfs(tree, tree.roots().iter().copied(), Direction::Both, |ev| match ev {
            DfsEvent::Enter { node, parent } => {
                preorder.push(node);
                entries[node] = Some(LowLim {
                    low: next_lim,
                    lim: 0,
                    parent,
                });
            }
            DfsEvent::Exit { node, .. } => {
                postorder.push(node);
                if let Some(e) = entries[node].as_mut() {
                    e.lim = next_lim;
                }
                next_lim += 1;
            }
        });

        Self {
            entries,
            preorder,
            postorder,
        }
    }

    pub fn get(&self, v: usize) -> Option<LowLim> {
        self.entries.get(v).copied().flatten()
    }

    pub fn parent(&self, v: usize) -> Option<usize> {
        self.get(v).and_then(|e| e.parent)
    }

    /// Whether `v` lies in the subtree rooted at `root` (`v == root` counts).
    pub fn is_descendant(&self, v: usize, root: usize) -> bool {
        match (self.get(v), self.get(root)) {
            (Some(v), Some(root)) => root.low <= v.lim && v.lim <= root.lim,
            _ => false,
        }
    }

    /// Roots first, then every node after its parent.
    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    /// Every node after its whole subtree.
    pub fn postorder(&self) -> &[usize] {
        &self.postorder
    }
}
