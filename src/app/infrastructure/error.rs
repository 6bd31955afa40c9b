use thiserror::Error;

use crate::app::domain::style::NodeId;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Duplicate node id: {0}")]
    DuplicateNode(NodeId),

    #[error("Node {node} has no segment spanning {start}..{end}")]
    InvalidRange { node: NodeId, start: usize, end: usize },

    #[error("Node {0} has mixed styles and cannot take a whole-node style")]
    NotUniform(NodeId),

    #[error("Session already closed")]
    SessionClosed,
}

/// Convenience type alias for Results with SwapError
pub type Result<T> = std::result::Result<T, SwapError>;
