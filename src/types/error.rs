//! Error types for the listgraph library.

use thiserror::Error;

/// All errors that can occur while mutating or querying a graph.
///
/// Node values are rendered with their `Debug` representation so the error
/// stays independent of the node type. String nodes therefore keep their
/// quotes: a missing `"Luleå"` reads `Node "Luleå" not found`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An operation referenced a node that is not in the graph.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// A weight or node pair was rejected before touching the graph.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `connect` was called for a pair that already shares an edge.
    #[error("Connection between {0} and {1} already exists")]
    AlreadyConnected(String, String),

    /// `disconnect` or a weight update targeted a pair with no edge.
    #[error("No edge between {0} and {1}")]
    NoSuchEdge(String, String),
}

impl GraphError {
    pub(crate) fn not_found<T: std::fmt::Debug>(node: &T) -> Self {
        Self::NodeNotFound(format!("{node:?}"))
    }

    pub(crate) fn already_connected<T: std::fmt::Debug>(a: &T, b: &T) -> Self {
        Self::AlreadyConnected(format!("{a:?}"), format!("{b:?}"))
    }

    pub(crate) fn no_such_edge<T: std::fmt::Debug>(a: &T, b: &T) -> Self {
        Self::NoSuchEdge(format!("{a:?}"), format!("{b:?}"))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
