//! Error types for subgraph-finder-core.

use thiserror::Error;

/// Errors raised by graph mutation, configuration and progress reporting.
///
/// Degenerate algorithm inputs (empty graphs, unreachable targets, missing
/// endpoints for a path search) are not errors: algorithms return an empty
/// result list for those.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A node with the same identifier is already in the graph.
    #[error("{0} is already in the graph")]
    NodeExists(String),

    /// A node identifier was referenced but is not in the graph.
    #[error("Node '{0}' not found in graph")]
    NodeNotFound(String),

    /// An equal edge is already in the graph.
    #[error("Edge {0} is already in the graph")]
    EdgeExists(String),

    /// A node or edge handle does not belong to this graph (or was removed).
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    /// A progress value outside of [0, 1] was published.
    #[error("Progress {0} is outside of [0, 1]")]
    InvalidProgress(f64),

    /// Invalid algorithm or application configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NodeExists("A".to_string());
        assert_eq!(err.to_string(), "A is already in the graph");

        let err = Error::InvalidProgress(1.5);
        assert_eq!(err.to_string(), "Progress 1.5 is outside of [0, 1]");
    }
}
