//! JSON ingestion of graph batches and serialization of results.
//!
//! Input:
//! ```json
//! {"graphs": [{"id": 1, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 3}]}]}
//! ```
//! Output:
//! ```json
//! {"results": [{"graphId": 1, "totalWeight": 3, "mstEdges": [{"from": "A", "to": "B", "weight": 3}]}]}
//! ```

use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::graph::{Graph, MstResult, Weight};

#[derive(Debug, Deserialize)]
struct GraphBatch<W> {
    graphs: Vec<Graph<W>>,
}

#[derive(Debug, Serialize)]
struct GraphBatchRef<'a, W> {
    graphs: &'a [Graph<W>],
}

#[derive(Debug, Serialize)]
struct ResultBatch<'a, W> {
    results: &'a [MstResult<W>],
}

pub fn graphs_from_reader<W, R>(reader: R) -> Result<Vec<Graph<W>>>
where
    W: Weight + DeserializeOwned,
    R: Read,
{
    let batch: GraphBatch<W> = serde_json::from_reader(reader)?;
    Ok(batch.graphs)
}

pub fn graphs_from_str<W>(s: &str) -> Result<Vec<Graph<W>>>
where
    W: Weight + DeserializeOwned,
{
    let batch: GraphBatch<W> = serde_json::from_str(s)?;
    Ok(batch.graphs)
}

/// Reads a `{"graphs": [...]}` document from `path`.
pub fn read_graphs<W, P>(path: P) -> Result<Vec<Graph<W>>>
where
    W: Weight + DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let graphs = graphs_from_reader(BufReader::new(File::open(path)?))?;
    info!("read {} graphs from {}", graphs.len(), path.display());
    Ok(graphs)
}

pub fn graphs_to_writer<W, Wr>(graphs: &[Graph<W>], writer: Wr) -> Result<()>
where
    W: Weight + Serialize,
    Wr: Write,
{
    serde_json::to_writer_pretty(writer, &GraphBatchRef { graphs })?;
    Ok(())
}

/// Writes `graphs` as a `{"graphs": [...]}` document to `path`.
pub fn write_graphs<W, P>(path: P, graphs: &[Graph<W>]) -> Result<()>
where
    W: Weight + Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    graphs_to_writer(graphs, &mut writer)?;
    writer.flush()?;
    info!("wrote {} graphs to {}", graphs.len(), path.display());
    Ok(())
}

pub fn results_to_writer<W, Wr>(results: &[MstResult<W>], writer: Wr) -> Result<()>
where
    W: Weight + Serialize,
    Wr: Write,
{
    serde_json::to_writer_pretty(writer, &ResultBatch { results })?;
    Ok(())
}

/// Writes `results` as a `{"results": [...]}` document to `path`.
pub fn write_results<W, P>(path: P, results: &[MstResult<W>]) -> Result<()>
where
    W: Weight + Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    results_to_writer(results, &mut writer)?;
    writer.flush()?;
    info!("wrote {} results to {}", results.len(), path.display());
    Ok(())
}
