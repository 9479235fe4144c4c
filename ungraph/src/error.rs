use thiserror::Error;

/// Graph processing error.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    #[error("node {node:?} is out of bounds for graph with {node_count:?} allocated nodes")]
    NodeOutOfBounds { node: usize, node_count: usize },
}
