use thiserror::Error;

/// Errors raised while indexing, building or loading graphs.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Vertex index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Malformed graph {graph_id}: {reason}")]
    MalformedGraph { graph_id: i64, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }

    pub fn malformed(graph_id: i64, reason: impl Into<String>) -> Self {
        GraphError::MalformedGraph {
            graph_id,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
