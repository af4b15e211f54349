//! Index-based adjacency snapshot of a [`Graph`].
//!
//! Passes query successors / predecessors repeatedly, and scanning all edges each time is O(E)
//! per query. The snapshot is built once per pass; node indices are the graph's insertion
//! indices, so results map straight back onto the graph.

use super::{Graph, MAX_MINLEN};
use super::alg::{Direction, Neighbors};
use rustc_hash::FxHashMap;

/// A directed edge between two present nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the originating edge in the graph. After [`Adjacency::simplified`] this is the
    /// first of the merged parallel edges.
    pub edge: usize,
    pub tail: usize,
    pub head: usize,
    pub minlen: i32,
    pub weight: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    node_count: usize,
    links: Vec<Link>,
    out: Vec<Vec<usize>>,
    inc: Vec<Vec<usize>>,
    dangling: usize,
}

impl Adjacency {
    /// Builds the snapshot. Edges with a missing endpoint are skipped and counted, and `minlen`
    /// is clamped to [`MAX_MINLEN`].
    pub fn new(g: &Graph) -> Self {
        let mut links: Vec<Link> = Vec::with_capacity(g.edge_count());
        let mut dangling = 0;
        for (edge, e) in g.edges().enumerate() {
            let (Some(tail), Some(head)) = (g.node_index(&e.from), g.node_index(&e.to)) else {
                dangling += 1;
                continue;
            };
            links.push(Link {
                edge,
                tail,
                head,
                minlen: i32::try_from(e.minlen.min(MAX_MINLEN)).unwrap_or(i32::MAX),
                weight: e.weight,
            });
        }
        let mut adj = Self::from_links(g.node_count(), links);
        adj.dangling = dangling;
        adj
    }

    /// Builds a snapshot over `node_count` nodes. Links touching an out-of-range node are
    /// dropped.
    pub fn from_links(node_count: usize, links: Vec<Link>) -> Self {
        let mut out: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut inc: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let links: Vec<Link> = links
            .into_iter()
            .filter(|l| l.tail < node_count && l.head < node_count)
            .collect();
        for (ix, l) in links.iter().enumerate() {
            out[l.tail].push(ix);
            inc[l.head].push(ix);
        }
        Self {
            node_count,
            links,
            out,
            inc,
            dangling: 0,
        }
    }

    /// Merges parallel links (summed weight, largest `minlen`) and drops self-loops.
    pub fn simplified(&self) -> Self {
        let mut merged: Vec<Link> = Vec::new();
        let mut by_ends: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        for l in &self.links {
            if l.tail == l.head {
                continue;
            }
            match by_ends.get(&(l.tail, l.head)) {
                Some(&ix) => {
                    let m = &mut merged[ix];
                    m.weight += l.weight;
                    m.minlen = m.minlen.max(l.minlen);
                }
                None => {
                    by_ends.insert((l.tail, l.head), merged.len());
                    merged.push(*l);
                }
            }
        }
        let mut adj = Self::from_links(self.node_count, merged);
        adj.dangling = self.dangling;
        adj
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link(&self, ix: usize) -> Option<&Link> {
        self.links.get(ix)
    }

    /// Outgoing links of `v` as `(link index, link)`.
    pub fn out_links(&self, v: usize) -> impl Iterator<Item = (usize, &Link)> {
        self.out
            .get(v)
            .into_iter()
            .flatten()
            .map(|&ix| (ix, &self.links[ix]))
    }

    /// Incoming links of `v` as `(link index, link)`.
    pub fn in_links(&self, v: usize) -> impl Iterator<Item = (usize, &Link)> {
        self.inc
            .get(v)
            .into_iter()
            .flatten()
            .map(|&ix| (ix, &self.links[ix]))
    }

    /// First link from `tail` to `head`, if any.
    pub fn find_link(&self, tail: usize, head: usize) -> Option<usize> {
        self.out_links(tail)
            .find(|(_, l)| l.head == head)
            .map(|(ix, _)| ix)
    }

    /// Number of graph edges skipped because an endpoint was missing.
    pub fn dangling(&self) -> usize {
        self.dangling
    }
}

impl Neighbors for Adjacency {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn neighbors(&self, v: usize, direction: Direction) -> impl Iterator<Item = usize> + '_ {
        let out = matches!(direction, Direction::Outgoing | Direction::Both)
            .then(|| self.out_links(v).map(|(_, l)| l.head))
            .into_iter()
            .flatten();
        let inc = matches!(direction, Direction::Incoming | Direction::Both)
            .then(|| self.in_links(v).map(|(_, l)| l.tail))
            .into_iter()
            .flatten();
        out.chain(inc)
    }
}
