use log::trace;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::{Edge, IndexedEdge, MstBuilder, VertexIndexer, Weight};

/// Prim's algorithm as an [`MstBuilder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl<W: Weight> MstBuilder<W> for Prim {
    fn name(&self) -> &'static str {
        "prim"
    }

    fn spanning_edges(&self, vertex_count: usize, edges: &[Edge<W>]) -> Result<Vec<Edge<W>>> {
        minimum_spanning_tree(vertex_count, edges)
    }
}

/// Builds the adjacency list, inserting both directions of every edge.
fn adjacency<W: Weight>(vertex_count: usize, edges: &[IndexedEdge<W>]) -> Vec<Vec<(usize, W)>> {
    let mut adj = vec![Vec::new(); vertex_count];
    for e in edges {
        adj[e.src].push((e.dst, e.weight));
        adj[e.dst].push((e.src, e.weight));
    }
    adj
}

/// Computes the minimum spanning tree (MST) of an undirected graph using Prim's algorithm.
///
/// The tree is grown from the vertex that the [`VertexIndexer`] assigns index 0,
/// i.e. the `from` endpoint of the first edge.
///
/// # Arguments
/// * `vertex_count` - Number of declared vertices
/// * `edges` - The edge list in input order
///
/// # Returns
/// * `Ok(edges)` - One `(parent, vertex, weight)` edge per vertex reached from the seed,
///   in vertex index order
/// * `Err(GraphError)` - If the edges reference more than `vertex_count` distinct vertices
///
/// Vertices that cannot be reached from the seed are left out, so a disconnected
/// graph yields a tree of the seed's component only.
///
/// # Complexity
/// * Time: O(E log V)
/// * Space: O(V + E)
pub fn minimum_spanning_tree<W: Weight>(
    vertex_count: usize,
    edges: &[Edge<W>],
) -> Result<Vec<Edge<W>>> {
    let indexer = VertexIndexer::from_edges(edges);
    indexer.check_capacity(vertex_count)?;
    if vertex_count == 0 {
        return Ok(Vec::new());
    }

    let indexed = indexer.index_edges(edges)?;
    let adj = adjacency(vertex_count, &indexed);

    // None = not reached yet
    let mut key: Vec<Option<W>> = vec![None; vertex_count];
    let mut parent: Vec<Option<usize>> = vec![None; vertex_count];
    let mut in_tree = vec![false; vertex_count];
    let mut heap = BinaryHeap::new();

    key[0] = Some(W::zero());
    heap.push(Reverse((W::zero(), 0usize)));

    while let Some(Reverse((_, u))) = heap.pop() {
        if in_tree[u] {
            continue;
        }
        in_tree[u] = true;

        for &(v, weight) in &adj[u] {
            if !in_tree[v] && key[v].map_or(true, |k| weight < k) {
                trace!("relaxing {} via {} to {:?}", v, u, weight);
                key[v] = Some(weight);
                parent[v] = Some(u);
                heap.push(Reverse((weight, v)));
            }
        }
    }

    parent
        .iter()
        .zip(&key)
        .enumerate()
        .filter_map(|(v, (&p, &k))| Some((p?, v, k?)))
        .map(|(p, v, weight)| {
            indexer.resolve(&IndexedEdge {
                src: p,
                dst: v,
                weight,
            })
        })
        .collect()
}
