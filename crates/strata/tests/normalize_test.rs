use strata::graph::{Graph, Size};
use strata::normalize::normalize_ranks;

#[test]
fn shifts_ranks_so_the_minimum_is_zero() {
    let mut g = Graph::new();
    g.add_node("a", Size::default()).rank = Some(-3);
    g.add_node("b", Size::default()).rank = Some(2);
    g.add_node("c", Size::default()).rank = Some(-1);

    assert_eq!(normalize_ranks(&mut g), Some(-3));
    let ranks: Vec<Option<i32>> = g.nodes().map(|n| n.rank).collect();
    assert_eq!(ranks, vec![Some(0), Some(5), Some(2)]);
}

#[test]
fn positive_offsets_are_removed_too() {
    let mut g = Graph::new();
    g.add_node("a", Size::default()).rank = Some(4);
    g.add_node("b", Size::default()).rank = Some(6);

    assert_eq!(normalize_ranks(&mut g), Some(4));
    assert_eq!(g.node("a").and_then(|n| n.rank), Some(0));
    assert_eq!(g.node("b").and_then(|n| n.rank), Some(2));
}

#[test]
fn unranked_nodes_stay_unranked() {
    let mut g = Graph::new();
    g.add_node("a", Size::default()).rank = Some(1);
    g.add_node("b", Size::default());

    normalize_ranks(&mut g);
    assert_eq!(g.node("a").and_then(|n| n.rank), Some(0));
    assert_eq!(g.node("b").and_then(|n| n.rank), None);
}

#[test]
fn graph_without_ranks_is_left_alone() {
    let mut g = Graph::new();
    g.add_node("a", Size::default());
    assert_eq!(normalize_ranks(&mut g), None);
}
