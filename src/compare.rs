//! Cross-validation of Kruskal and Prim over a batch of graphs.
//!
//! For any connected graph both builders must agree on the total weight and on
//! the number of tree edges. Disagreement is reported per graph and logged; on
//! disconnected input it is expected, since the builders cover different parts
//! of the graph.

use log::{info, warn};
use rayon::prelude::*;
use std::time::Duration;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Kruskal, MstBuilder, MstResult, Prim, Weight};

/// Outcome of running both builders on one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphComparison<W> {
    pub graph_id: i64,
    pub kruskal: MstResult<W>,
    pub prim: MstResult<W>,
    pub weights_match: bool,
    pub edge_counts_match: bool,
}

impl<W: Weight> GraphComparison<W> {
    pub fn new(kruskal: MstResult<W>, prim: MstResult<W>) -> Self {
        Self {
            graph_id: kruskal.graph_id,
            weights_match: kruskal.total_weight == prim.total_weight,
            edge_counts_match: kruskal.edge_count() == prim.edge_count(),
            kruskal,
            prim,
        }
    }

    pub fn is_perfect_match(&self) -> bool {
        self.weights_match && self.edge_counts_match
    }
}

/// A graph that could not be compared.
#[derive(Debug)]
pub struct GraphFailure {
    pub graph_id: i64,
    pub error: GraphError,
}

/// Wall-clock time spent by each builder, measured by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunTimings {
    pub kruskal: Duration,
    pub prim: Duration,
}

impl RunTimings {
    /// Kruskal time divided by Prim time, `None` if Prim took no measurable time.
    pub fn ratio(&self) -> Option<f64> {
        let prim = self.prim.as_secs_f64();
        if prim > 0.0 {
            Some(self.kruskal.as_secs_f64() / prim)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchSummary {
    /// Graphs compared successfully.
    pub graphs_processed: usize,
    pub failed: usize,
    pub perfect_matches: usize,
    pub mismatched_graph_ids: Vec<i64>,
    /// Mean number of distinct vertices touched by Kruskal's tree.
    pub average_vertices: f64,
    /// Mean number of edges in Kruskal's tree.
    pub average_edges: f64,
    pub performance_ratio: Option<f64>,
}

impl BatchSummary {
    fn from_comparisons<W: Weight>(comparisons: &[GraphComparison<W>], failed: usize) -> Self {
        let n = comparisons.len();
        let mean = |total: usize| if n == 0 { 0.0 } else { total as f64 / n as f64 };

        Self {
            graphs_processed: n,
            failed,
            perfect_matches: comparisons.iter().filter(|c| c.is_perfect_match()).count(),
            mismatched_graph_ids: comparisons
                .iter()
                .filter(|c| !c.is_perfect_match())
                .map(|c| c.graph_id)
                .collect(),
            average_vertices: mean(comparisons.iter().map(|c| c.kruskal.touched_vertices()).sum()),
            average_edges: mean(comparisons.iter().map(|c| c.kruskal.edge_count()).sum()),
            performance_ratio: None,
        }
    }
}

#[derive(Debug)]
pub struct ComparisonReport<W> {
    /// Successful comparisons in input order.
    pub comparisons: Vec<GraphComparison<W>>,
    /// Graphs skipped because a builder rejected them, in input order.
    pub failures: Vec<GraphFailure>,
    pub summary: BatchSummary,
}

impl<W: Weight> ComparisonReport<W> {
    fn from_outcomes(outcomes: Vec<(i64, Result<GraphComparison<W>>)>) -> Self {
        let mut comparisons = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for (graph_id, outcome) in outcomes {
            match outcome {
                Ok(comparison) => {
                    if !comparison.is_perfect_match() {
                        warn!(
                            "graph {}: MISMATCH weight kruskal={:?} prim={:?}, edges kruskal={} prim={}",
                            graph_id,
                            comparison.kruskal.total_weight,
                            comparison.prim.total_weight,
                            comparison.kruskal.edge_count(),
                            comparison.prim.edge_count()
                        );
                    }
                    comparisons.push(comparison);
                }
                Err(error) => {
                    warn!("graph {}: skipped, {}", graph_id, error);
                    failures.push(GraphFailure { graph_id, error });
                }
            }
        }

        let summary = BatchSummary::from_comparisons(&comparisons, failures.len());
        info!(
            "compared {} graphs ({} failed): {} perfect matches",
            summary.graphs_processed, summary.failed, summary.perfect_matches
        );
        Self {
            comparisons,
            failures,
            summary,
        }
    }

    /// Attaches externally measured timings and fills in the performance ratio.
    pub fn with_timings(mut self, timings: RunTimings) -> Self {
        self.summary.performance_ratio = timings.ratio();
        self
    }

    /// `true` if every compared graph matched and none failed.
    pub fn all_match(&self) -> bool {
        self.failures.is_empty() && self.summary.mismatched_graph_ids.is_empty()
    }

    pub fn kruskal_results(&self) -> impl Iterator<Item = &MstResult<W>> {
        self.comparisons.iter().map(|c| &c.kruskal)
    }

    pub fn prim_results(&self) -> impl Iterator<Item = &MstResult<W>> {
        self.comparisons.iter().map(|c| &c.prim)
    }
}

/// Runs [`Kruskal`] and [`Prim`] over the same graphs and reports agreement.
#[derive(Debug, Clone, Copy, Default)]
pub struct MstComparator;

impl MstComparator {
    pub fn new() -> Self {
        Self
    }

    /// Runs both builders on one graph.
    pub fn compare_graph<W: Weight>(&self, graph: &Graph<W>) -> Result<GraphComparison<W>> {
        let kruskal = Kruskal.build(graph)?;
        let prim = Prim.build(graph)?;
        Ok(GraphComparison::new(kruskal, prim))
    }

    /// Compares every graph in order. A failing graph is recorded and skipped.
    pub fn compare<W: Weight>(&self, graphs: &[Graph<W>]) -> ComparisonReport<W> {
        let outcomes = graphs
            .iter()
            .map(|g| (g.id, self.compare_graph(g)))
            .collect();
        ComparisonReport::from_outcomes(outcomes)
    }

    /// Same as [`compare`](Self::compare), processing graphs on the rayon pool.
    pub fn compare_par<W: Weight>(&self, graphs: &[Graph<W>]) -> ComparisonReport<W> {
        let outcomes = graphs
            .par_iter()
            .map(|g| (g.id, self.compare_graph(g)))
            .collect();
        ComparisonReport::from_outcomes(outcomes)
    }
}
