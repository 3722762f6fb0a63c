pub mod compare;
pub mod error;
pub mod generate;
pub mod graph;
pub mod io;

pub use compare::{BatchSummary, ComparisonReport, GraphComparison, MstComparator, RunTimings};
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, Kruskal, MstBuilder, MstResult, Prim, Weight};
