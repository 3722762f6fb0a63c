use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Weight};

/// Edge whose endpoints have been replaced by dense vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedEdge<W> {
    pub src: usize,
    pub dst: usize,
    pub weight: W,
}

/// Bidirectional mapping between vertex names and indices `0..n` for one graph.
///
/// Indices are handed out in first-seen order while scanning edges, `from`
/// before `to`. They are only meaningful for the edge list they were built from.
#[derive(Debug, Clone, Default)]
pub struct VertexIndexer {
    index: HashMap<String, usize>,
    names: Vec<String>,
}

impl VertexIndexer {
    pub fn from_edges<W>(edges: &[Edge<W>]) -> Self {
        let mut indexer = Self::default();
        for edge in edges {
            indexer.insert(&edge.from);
            indexer.insert(&edge.to);
        }
        indexer
    }

    fn insert(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.index.insert(name.to_owned(), i);
        self.names.push(name.to_owned());
        i
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(name.to_owned()))
    }

    pub fn name_of(&self, index: usize) -> Result<&str> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.names.len(),
            })
    }

    /// Translates `edges` to index form, preserving order.
    pub fn index_edges<W: Weight>(&self, edges: &[Edge<W>]) -> Result<Vec<IndexedEdge<W>>> {
        edges
            .iter()
            .map(|e| {
                Ok(IndexedEdge {
                    src: self.index_of(&e.from)?,
                    dst: self.index_of(&e.to)?,
                    weight: e.weight,
                })
            })
            .collect()
    }

    /// Translates an indexed edge back to vertex names.
    pub fn resolve<W: Weight>(&self, edge: &IndexedEdge<W>) -> Result<Edge<W>> {
        Ok(Edge::new(
            self.name_of(edge.src)?,
            self.name_of(edge.dst)?,
            edge.weight,
        ))
    }

    /// Fails if the edges mention more distinct vertices than `vertex_count`.
    pub(crate) fn check_capacity(&self, vertex_count: usize) -> Result<()> {
        if self.len() > vertex_count {
            return Err(GraphError::invalid_input(format!(
                "edges reference {} distinct vertices but only {} were declared",
                self.len(),
                vertex_count
            )));
        }
        Ok(())
    }
}
