use strata_graph::alg::{
    self, Adjacency, Cycle, DfsEvent, Direction, Link, Neighbors, components, is_acyclic,
    postorder, preorder, topsort,
};
use strata_graph::{Graph, LayoutEdge, Size};

fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut g = Graph::new();
    for id in nodes {
        g.add_node(*id, Size::new(10.0, 10.0));
    }
    for (i, (from, to)) in edges.iter().enumerate() {
        g.add_edge(format!("e{i}"), *from, *to);
    }
    g
}

fn link(tail: usize, head: usize) -> Link {
    Link {
        edge: 0,
        tail,
        head,
        minlen: 1,
        weight: 1.0,
    }
}

#[test]
fn adjacency_maps_edges_to_node_indices() {
    let g = graph(&["a", "b", "c"], &[("a", "b"), ("c", "b")]);
    let adj = Adjacency::new(&g);

    assert_eq!(adj.node_count(), 3);
    assert_eq!(adj.links().len(), 2);
    let heads: Vec<usize> = adj.out_links(0).map(|(_, l)| l.head).collect();
    assert_eq!(heads, vec![1]);
    let tails: Vec<usize> = adj.in_links(1).map(|(_, l)| l.tail).collect();
    assert_eq!(tails, vec![0, 2]);
    assert_eq!(adj.find_link(2, 1), Some(1));
    assert_eq!(adj.find_link(1, 2), None);
}

#[test]
fn adjacency_skips_and_counts_dangling_edges() {
    let g = graph(&["a", "b"], &[("a", "b"), ("a", "ghost"), ("ghost", "b")]);
    let adj = Adjacency::new(&g);
    assert_eq!(adj.links().len(), 1);
    assert_eq!(adj.dangling(), 2);
}

#[test]
fn adjacency_carries_minlen_and_weight() {
    let mut g = graph(&["a", "b"], &[]);
    g.add_layout_edge(LayoutEdge::new("e", "a", "b").with_minlen(2).with_weight(3.0));
    let adj = Adjacency::new(&g);
    let l = adj.link(0).unwrap();
    assert_eq!((l.minlen, l.weight), (2, 3.0));
}

#[test]
fn simplified_merges_parallel_links_and_drops_self_loops() {
    let mut g = graph(&["a", "b"], &[]);
    g.add_layout_edge(LayoutEdge::new("e1", "a", "b").with_minlen(1).with_weight(2.0));
    g.add_layout_edge(LayoutEdge::new("e2", "a", "b").with_minlen(3).with_weight(0.5));
    g.add_edge("loop", "a", "a");
    g.add_edge("back", "b", "a");

    let adj = Adjacency::new(&g).simplified();
    assert_eq!(adj.links().len(), 2);
    let ab = adj.link(adj.find_link(0, 1).unwrap()).unwrap();
    assert_eq!(ab.minlen, 3);
    assert_eq!(ab.weight, 2.5);
    assert!(adj.find_link(1, 0).is_some());
    assert!(adj.find_link(0, 0).is_none());
}

#[test]
fn from_links_drops_out_of_range_links() {
    let adj = Adjacency::from_links(2, vec![link(0, 1), link(1, 5)]);
    assert_eq!(adj.links().len(), 1);
}

#[test]
fn neighbors_respect_direction() {
    let adj = Adjacency::from_links(3, vec![link(0, 1), link(2, 0)]);
    let out: Vec<usize> = adj.neighbors(0, Direction::Outgoing).collect();
    let inc: Vec<usize> = adj.neighbors(0, Direction::Incoming).collect();
    let both: Vec<usize> = adj.neighbors(0, Direction::Both).collect();
    assert_eq!(out, vec![1]);
    assert_eq!(inc, vec![2]);
    assert_eq!(both, vec![1, 2]);
}

#[test]
fn dfs_emits_balanced_enter_exit_events() {
    // 0 -> 1 -> 2, 0 -> 3
    let adj = Adjacency::from_links(4, vec![link(0, 1), link(1, 2), link(0, 3)]);
    let mut events = Vec::new();
    alg::dfs(&adj, [0], Direction::Outgoing, |ev| events.push(ev));

    assert_eq!(
        events,
        vec![
            DfsEvent::Enter { node: 0, parent: None },
            DfsEvent::Enter { node: 1, parent: Some(0) },
            DfsEvent::Enter { node: 2, parent: Some(1) },
            DfsEvent::Exit { node: 2, parent: Some(1) },
            DfsEvent::Exit { node: 1, parent: Some(0) },
            DfsEvent::Enter { node: 3, parent: Some(0) },
            DfsEvent::Exit { node: 3, parent: Some(0) },
            DfsEvent::Exit { node: 0, parent: None },
        ]
    );
}

#[test]
fn preorder_and_postorder_visit_each_node_once() {
    let adj = Adjacency::from_links(4, vec![link(0, 1), link(1, 2), link(0, 3), link(3, 2)]);
    assert_eq!(preorder(&adj, [0], Direction::Outgoing), vec![0, 1, 2, 3]);
    assert_eq!(postorder(&adj, [0], Direction::Outgoing), vec![2, 1, 3, 0]);
}

#[test]
fn dfs_ignores_repeated_and_out_of_range_roots() {
    let adj = Adjacency::from_links(3, vec![link(0, 1)]);
    let order = preorder(&adj, [0, 9, 1, 0, 2], Direction::Outgoing);
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn deep_chains_do_not_overflow_the_stack() {
    let n = 200_000;
    let links: Vec<Link> = (0..n - 1).map(|v| link(v, v + 1)).collect();
    let adj = Adjacency::from_links(n, links);
    let post = postorder(&adj, [0], Direction::Outgoing);
    assert_eq!(post.len(), n);
    assert_eq!(post.first(), Some(&(n - 1)));
    assert_eq!(post.last(), Some(&0));
}

#[test]
fn components_ignore_edge_direction() {
    let adj = Adjacency::from_links(5, vec![link(1, 0), link(2, 1), link(4, 3)]);
    assert_eq!(components(&adj), vec![vec![0, 1, 2], vec![3, 4]]);
}

#[test]
fn topsort_breaks_ties_by_index() {
    let adj = Adjacency::from_links(4, vec![link(3, 0), link(2, 0), link(1, 3)]);
    assert_eq!(topsort(&adj), Ok(vec![1, 2, 3, 0]));
    assert!(is_acyclic(&adj));
}

#[test]
fn topsort_reports_nodes_on_cycles() {
    let adj = Adjacency::from_links(4, vec![link(0, 1), link(1, 2), link(2, 1), link(2, 3)]);
    assert_eq!(
        topsort(&adj),
        Err(Cycle {
            nodes: vec![1, 2, 3]
        })
    );
    assert!(!is_acyclic(&adj));
}

#[test]
fn self_loops_are_cycles() {
    let adj = Adjacency::from_links(1, vec![link(0, 0)]);
    assert!(!is_acyclic(&adj));
}
