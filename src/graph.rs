//! Named-vertex weighted graphs and the minimum spanning tree builders.
//!
//! Every builder consumes the same [`Graph`] and produces an [`MstResult`]
//! expressed in the graph's original vertex names:
//! - [`kruskal`] sorts all edges and merges components through a [`DisjointSet`]
//! - [`prim`] grows a single tree from the first indexed vertex
//!
//! # Examples
//!
//! ```rust
//! use mst_compare::graph::{Graph, Kruskal, MstBuilder, Prim};
//!
//! let mut graph = Graph::new(1, ["A", "B", "C"]);
//! graph.add_edge("A", "B", 4u32);
//! graph.add_edge("B", "C", 2);
//! graph.add_edge("A", "C", 5);
//!
//! let kruskal = Kruskal.build(&graph).unwrap();
//! let prim = Prim.build(&graph).unwrap();
//! assert_eq!(kruskal.total_weight, 6);
//! assert_eq!(prim.total_weight, 6);
//! ```

use num_traits::{PrimInt, Unsigned};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fmt::Debug;

use crate::error::{GraphError, Result};

pub mod disjoint_set;
pub mod kruskal;
pub mod prim;
pub mod vertex_indexer;

pub use disjoint_set::DisjointSet;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use vertex_indexer::{IndexedEdge, VertexIndexer};

/// Non-negative integer edge weight.
pub trait Weight: PrimInt + Unsigned + Debug + Send + Sync {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Send + Sync {}

/// Undirected, weighted edge between two named vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<W> {
    pub from: String,
    pub to: String,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: W) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns `true` if both edges join the same pair of vertices, in either direction.
    pub fn same_endpoints(&self, other: &Edge<W>) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.from, self.to, self.weight)
    }
}

/// A graph instance as handed over by the ingestion layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph<W> {
    pub id: i64,
    pub nodes: Vec<String>,
    pub edges: Vec<Edge<W>>,
}

impl<W: Weight> Graph<W> {
    pub fn new<I, S>(id: i64, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            nodes: nodes.into_iter().map(Into::into).collect(),
            edges: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, weight: W) {
        self.edges.push(Edge::new(from, to, weight));
    }

    /// Number of declared vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks that every edge endpoint is a declared vertex.
    ///
    /// # Errors
    /// * `MalformedGraph` naming the first edge that references an undeclared vertex
    pub fn validate(&self) -> Result<()> {
        let declared: HashSet<&str> = self.nodes.iter().map(String::as_str).collect();
        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !declared.contains(endpoint.as_str()) {
                    return Err(GraphError::malformed(
                        self.id,
                        format!(
                            "edge {} - {} references undeclared vertex {}",
                            edge.from, edge.to, endpoint
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Spanning tree (or partial forest) produced by a builder for one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MstResult<W> {
    pub graph_id: i64,
    pub total_weight: W,
    /// Selected edges in construction order.
    pub mst_edges: Vec<Edge<W>>,
}

impl<W: Weight> MstResult<W> {
    /// Wraps the selected edges, summing their weights.
    ///
    /// # Errors
    /// * `InvalidInput` if the total weight does not fit in `W`
    pub fn new(graph_id: i64, mst_edges: Vec<Edge<W>>) -> Result<Self> {
        Ok(Self {
            graph_id,
            total_weight: total_weight(&mst_edges)?,
            mst_edges,
        })
    }

    pub fn edge_count(&self) -> usize {
        self.mst_edges.len()
    }

    /// Distinct vertex names touched by the selected edges.
    ///
    /// Isolated vertices never appear here, so this underestimates the
    /// vertex count of graphs whose tree does not span every vertex.
    pub fn touched_vertices(&self) -> usize {
        self.mst_edges
            .iter()
            .flat_map(|e| [e.from.as_str(), e.to.as_str()])
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Sum of the weights of `edges`.
///
/// # Errors
/// * `InvalidInput` if the sum overflows `W`
pub fn total_weight<W: Weight>(edges: &[Edge<W>]) -> Result<W> {
    edges.iter().try_fold(W::zero(), |acc, e| {
        acc.checked_add(&e.weight).ok_or_else(|| {
            GraphError::invalid_input(format!(
                "total weight overflows {} after edge {} - {} ({:?})",
                std::any::type_name::<W>(),
                e.from,
                e.to,
                e.weight
            ))
        })
    })
}

/// A minimum spanning tree algorithm over named-vertex graphs.
pub trait MstBuilder<W: Weight> {
    /// Short algorithm name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Selects spanning edges for `vertex_count` vertices out of `edges`.
    fn spanning_edges(&self, vertex_count: usize, edges: &[Edge<W>]) -> Result<Vec<Edge<W>>>;

    /// Validates `graph` and builds its spanning tree.
    fn build(&self, graph: &Graph<W>) -> Result<MstResult<W>> {
        graph.validate()?;
        let edges = self.spanning_edges(graph.vertex_count(), &graph.edges)?;
        let result = MstResult::new(graph.id, edges)?;
        log::debug!(
            "{}: graph {} ({} vertices, {} edges) -> {} tree edges, weight {:?}",
            self.name(),
            graph.id,
            graph.vertex_count(),
            graph.edge_count(),
            result.edge_count(),
            result.total_weight
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_declared_vertices() {
        let mut graph = Graph::new(1, ["A", "B"]);
        graph.add_edge("A", "B", 3u32);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_undeclared_vertex() {
        let mut graph = Graph::new(7, ["A", "B"]);
        graph.add_edge("A", "Z", 3u32);
        match graph.validate() {
            Err(GraphError::MalformedGraph { graph_id, reason }) => {
                assert_eq!(graph_id, 7);
                assert!(reason.contains('Z'));
            }
            other => panic!("expected MalformedGraph, got {:?}", other),
        }
    }

    #[test]
    fn test_build_rejects_malformed_graph() {
        let mut graph = Graph::new(2, ["A"]);
        graph.add_edge("A", "B", 1u32);
        assert!(matches!(
            Kruskal.build(&graph),
            Err(GraphError::MalformedGraph { .. })
        ));
        assert!(matches!(
            Prim.build(&graph),
            Err(GraphError::MalformedGraph { .. })
        ));
    }

    #[test]
    fn test_empty_graph_builds_empty_tree() {
        let graph: Graph<u32> = Graph::new(3, Vec::<String>::new());
        for result in [Kruskal.build(&graph).unwrap(), Prim.build(&graph).unwrap()] {
            assert!(result.mst_edges.is_empty());
            assert_eq!(result.total_weight, 0);
        }
    }

    #[test]
    fn test_result_totals_and_touched_vertices() {
        let result = MstResult::new(
            4,
            vec![Edge::new("B", "C", 2u64), Edge::new("A", "B", 4u64)],
        )
        .unwrap();
        assert_eq!(result.total_weight, 6);
        assert_eq!(result.edge_count(), 2);
        assert_eq!(result.touched_vertices(), 3);
    }

    #[test]
    fn test_total_weight_overflow() {
        let edges = vec![Edge::new("A", "B", 200u8), Edge::new("B", "C", 100u8)];
        assert!(matches!(
            total_weight(&edges),
            Err(GraphError::InvalidInput(_))
        ));
        assert!(MstResult::new(1, edges).is_err());

        // Exactly at the limit is still representable
        let edges = vec![Edge::new("A", "B", 200u8), Edge::new("B", "C", 55u8)];
        assert_eq!(total_weight(&edges).unwrap(), u8::MAX);
    }

    #[test]
    fn test_build_reports_weight_overflow() {
        let mut graph = Graph::new(5, ["A", "B", "C"]);
        graph.add_edge("A", "B", 3_000_000_000u32);
        graph.add_edge("B", "C", 3_000_000_000);
        assert!(matches!(
            Kruskal.build(&graph),
            Err(GraphError::InvalidInput(_))
        ));
        assert!(matches!(
            Prim.build(&graph),
            Err(GraphError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_same_endpoints_ignores_direction() {
        let ab = Edge::new("A", "B", 1u32);
        assert!(ab.same_endpoints(&Edge::new("B", "A", 9)));
        assert!(!ab.same_endpoints(&Edge::new("A", "C", 1)));
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new("A", "B", 4u32).to_string(), "A - B (4)");
    }
}
