use log::trace;

use crate::error::Result;
use crate::graph::{DisjointSet, Edge, MstBuilder, VertexIndexer, Weight};

/// Kruskal's algorithm as an [`MstBuilder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl<W: Weight> MstBuilder<W> for Kruskal {
    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn spanning_edges(&self, vertex_count: usize, edges: &[Edge<W>]) -> Result<Vec<Edge<W>>> {
        minimum_spanning_tree(vertex_count, edges)
    }
}

/// Kruskal's algorithm to compute the MST for an undirected, weighted graph.
///
/// - `vertex_count` is the number of declared vertices; the edges may not mention more distinct names.
/// - `edges` is the edge list in input order.
///
/// Edges are sorted by weight with a stable sort, so among equal weights the one
/// that came first in the input wins. Returns the selected edges in the order they
/// were accepted, with their original vertex names and orientation.
/// If the graph is disconnected, this will return a spanning forest of all connected components.
///
/// # Errors
/// * `InvalidInput` if the edges reference more than `vertex_count` distinct vertices
///
/// # Complexity
/// * Time: O(E log E)
/// * Space: O(V + E)
pub fn minimum_spanning_tree<W: Weight>(
    vertex_count: usize,
    edges: &[Edge<W>],
) -> Result<Vec<Edge<W>>> {
    let indexer = VertexIndexer::from_edges(edges);
    indexer.check_capacity(vertex_count)?;

    let mut indexed = indexer.index_edges(edges)?;
    indexed.sort_by_key(|e| e.weight);

    let target = vertex_count.saturating_sub(1);
    let mut ds = DisjointSet::new(vertex_count);
    let mut mst = Vec::with_capacity(target);

    for edge in indexed.iter() {
        if mst.len() == target {
            break;
        }
        if ds.union(edge.src, edge.dst) {
            trace!("adding edge ({}, {}) = {:?}", edge.src, edge.dst, edge.weight);
            mst.push(indexer.resolve(edge)?);
        } else {
            trace!(
                "skipping edge ({}, {}) = {:?}, already in same component",
                edge.src,
                edge.dst,
                edge.weight
            );
        }
    }

    Ok(mst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::{total_weight, Graph};

    fn edge(from: &str, to: &str, weight: u32) -> Edge<u32> {
        Edge::new(from, to, weight)
    }

    #[test]
    fn test_empty_graph() {
        let mst = minimum_spanning_tree::<u32>(0, &[]).unwrap();
        assert!(mst.is_empty(), "MST of empty graph should be empty");
    }

    #[test]
    fn test_vertices_without_edges() {
        let mst = minimum_spanning_tree::<u32>(5, &[]).unwrap();
        assert!(
            mst.is_empty(),
            "MST of isolated vertices with no edges should be empty"
        );
    }

    #[test]
    fn test_single_edge() {
        let mst = minimum_spanning_tree(2, &[edge("A", "B", 2)]).unwrap();
        assert_eq!(mst, vec![edge("A", "B", 2)]);
    }

    #[test]
    fn test_disconnected_components() {
        // 4 vertices: A-B is disconnected from C-D
        let edges = vec![edge("A", "B", 1), edge("C", "D", 2)];
        let mst = minimum_spanning_tree(4, &edges).unwrap();
        assert_eq!(
            mst.len(),
            2,
            "Should return one edge per connected component minus 1 edge each."
        );
        assert_eq!(mst, edges);
    }

    #[test]
    fn test_standard_graph() {
        // (A)---10---(B)
        //  | \       /
        //  6  5    15
        //  |   \   /
        // (C)---4---(D)
        let edges = vec![
            edge("A", "B", 10),
            edge("A", "C", 6),
            edge("A", "D", 5),
            edge("B", "D", 15),
            edge("C", "D", 4),
        ];
        let mst = minimum_spanning_tree(4, &edges).unwrap();

        // Accepted in sort order: (C-D=4), (A-D=5), then A-C closes a cycle, then (A-B=10)
        assert_eq!(
            mst,
            vec![edge("C", "D", 4), edge("A", "D", 5), edge("A", "B", 10)]
        );
        assert_eq!(total_weight(&mst).unwrap(), 19);
    }

    #[test]
    fn test_three_vertex_scenario() {
        let edges = vec![edge("A", "B", 4), edge("B", "C", 2), edge("A", "C", 5)];
        let mst = minimum_spanning_tree(3, &edges).unwrap();
        assert_eq!(mst, vec![edge("B", "C", 2), edge("A", "B", 4)]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let edges = vec![edge("A", "B", 1), edge("B", "C", 1), edge("A", "C", 1)];
        let mst = minimum_spanning_tree(3, &edges).unwrap();
        assert_eq!(mst, vec![edge("A", "B", 1), edge("B", "C", 1)]);
        assert_eq!(total_weight(&mst).unwrap(), 2);
    }

    #[test]
    fn test_parallel_edges() {
        // Graph with parallel edges between the same vertices
        let edges = vec![edge("A", "B", 10), edge("A", "B", 1), edge("B", "C", 5)];
        let mst = minimum_spanning_tree(3, &edges).unwrap();

        assert_eq!(mst.len(), 2);
        // Check that the smaller parallel edge was chosen
        assert!(mst.contains(&edge("A", "B", 1)));
        assert!(mst.contains(&edge("B", "C", 5)));
    }

    #[test]
    fn test_self_loop_is_skipped() {
        let edges = vec![edge("A", "A", 0), edge("A", "B", 3)];
        let mst = minimum_spanning_tree(2, &edges).unwrap();
        assert_eq!(mst, vec![edge("A", "B", 3)]);
    }

    #[test]
    fn test_too_few_declared_vertices() {
        let edges = vec![edge("A", "B", 1), edge("B", "C", 1)];
        assert!(matches!(
            minimum_spanning_tree(2, &edges),
            Err(GraphError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_deterministic() {
        let mut graph = Graph::new(1, ["A", "B", "C", "D"]);
        for (from, to, w) in [
            ("A", "B", 3u32),
            ("B", "C", 3),
            ("C", "D", 3),
            ("D", "A", 3),
            ("A", "C", 3),
        ] {
            graph.add_edge(from, to, w);
        }
        let first = Kruskal.build(&graph).unwrap();
        let second = Kruskal.build(&graph).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.total_weight, 9);
    }

    #[test]
    fn test_large_path_graph() {
        let names: Vec<String> = (0..1000).map(|i| format!("v{}", i)).collect();
        let edges: Vec<Edge<u64>> = names
            .windows(2)
            .map(|w| Edge::new(w[0].clone(), w[1].clone(), 1))
            .chain(std::iter::once(Edge::new(names[999].clone(), names[0].clone(), 1)))
            .collect();
        let mst = minimum_spanning_tree(1000, &edges).unwrap();
        assert_eq!(mst.len(), 999);
        assert_eq!(total_weight(&mst).unwrap(), 999);
    }
}
