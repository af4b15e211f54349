//! Layout driver: build a graph from a diagram, run the pipeline, write positions back.
//!
//! [`apply_layout`] never touches the diagram, so a host can compute a [`LayoutResult`] off its
//! interactive path and [`commit`] it in one step later.

use crate::config::LayoutConfig;
use crate::diagram::Diagram;
use crate::error::{Error, Result};
use crate::graph::{Graph, Point};
use crate::rank::SimplexOutcome;
use crate::{acyclic, normalize, order, position, rank};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    /// Node centers, in graph insertion order.
    pub positions: IndexMap<String, Point>,
    /// Normalized ranks (the smallest is 0).
    pub ranks: IndexMap<String, i32>,
    /// Weighted edge crossings of the committed ordering.
    pub crossings: f64,
    /// Present when the network simplex ranker ran.
    pub simplex: Option<SimplexOutcome>,
    /// Ids of edges the acyclic pass had to reverse. They are restored in the graph afterwards.
    pub reversed: Vec<String>,
}

/// Pulls the connected component containing `seed` into a fresh graph.
///
/// Connections are followed in both directions. Every node and edge is inserted once. A
/// connection whose other end the diagram does not know is kept, so [`apply_layout`] reports it.
pub fn create_graph<D: Diagram + ?Sized>(diagram: &D, seed: &str) -> Result<Graph> {
    let size = diagram.node_size(seed).ok_or_else(|| Error::UnknownNode {
        id: seed.to_string(),
    })?;

    let mut g = Graph::new();
    g.add_node(seed, size);
    let mut stack: Vec<String> = vec![seed.to_string()];
    while let Some(id) = stack.pop() {
        for c in diagram.connections(&id) {
            if g.has_edge(&c.id) {
                continue;
            }
            g.add_layout_edge(c.to_edge());
            for end in [c.from, c.to] {
                if g.has_node(&end) {
                    continue;
                }
                let Some(size) = diagram.node_size(&end) else {
                    continue;
                };
                g.add_node(end.clone(), size);
                stack.push(end);
            }
        }
    }

    tracing::debug!(
        seed,
        nodes = g.node_count(),
        edges = g.edge_count(),
        "create graph"
    );
    Ok(g)
}

/// Runs acyclic, rank, normalize, order and position on `g`.
///
/// Fails before any pass runs if the config is invalid, the graph is empty, or an edge points
/// at a missing node. Edges reversed to break cycles are restored before returning.
pub fn apply_layout(g: &mut Graph, config: &LayoutConfig) -> Result<LayoutResult> {
    let _span = tracing::debug_span!(
        "layout",
        nodes = g.node_count(),
        edges = g.edge_count()
    )
    .entered();

    config.validate()?;
    if g.node_count() == 0 {
        return Err(Error::EmptyGraph);
    }
    g.validate()?;

    let report = acyclic::run(g, config.acyclicer);
    let simplex = rank::rank(g, config.ranker, config.max_simplex_iterations);
    normalize::normalize_ranks(g);
    let summary = order::order(g, config.order_stale_rounds);
    position::position(g, config);

    let reversed = report.reversed.clone();
    acyclic::undo(g, report);

    Ok(LayoutResult {
        positions: g.nodes().map(|n| (n.id.clone(), n.position)).collect(),
        ranks: g
            .nodes()
            .filter_map(|n| Some((n.id.clone(), n.rank?)))
            .collect(),
        crossings: summary.crossings,
        simplex,
        reversed,
    })
}

/// Writes every computed position to the diagram.
pub fn commit<D: Diagram + ?Sized>(diagram: &mut D, result: &LayoutResult) {
    for (id, &position) in &result.positions {
        diagram.set_position(id, position);
    }
}

/// [`create_graph`], [`apply_layout`] and [`commit`] in one call.
pub fn auto_layout<D: Diagram + ?Sized>(
    diagram: &mut D,
    seed: &str,
    config: &LayoutConfig,
) -> Result<LayoutResult> {
    let mut g = create_graph(diagram, seed)?;
    let result = apply_layout(&mut g, config)?;
    commit(diagram, &result);
    Ok(result)
}
