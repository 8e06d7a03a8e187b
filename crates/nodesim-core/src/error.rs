//! Error types for graph construction and layout files.

use thiserror::Error;

use crate::geom::Point;
use crate::node::NodeId;

/// Errors raised while building or editing a graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A node was offered as its own neighbour. Self-loops are not supported.
    #[error("attempted to add node {0} as neighbor to itself, not currently supported")]
    SelfNeighbor(Point),

    /// Edge lengths must be finite and nonnegative.
    #[error("invalid connection length {0}: lengths must be finite and nonnegative")]
    InvalidLength(f64),

    #[error("no node at coordinate {0}")]
    UnknownCoordinate(Point),

    #[error("no node with id {0}")]
    UnknownId(NodeId),

    /// A second node was placed on an occupied coordinate.
    #[error("a node already exists at coordinate {0}")]
    DuplicateCoordinate(Point),
}

/// Errors raised while reading a layout file.
///
/// Line numbers are 1-based and refer to the line being parsed when the
/// error was detected.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("layout i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("layout file does not start with the \"Nodes!\" header")]
    MissingHeader,

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Layout files may not place two nodes on one coordinate.
    #[error("line {line}: multiple nodes at coordinate {pos} are not allowed")]
    DuplicateCoordinate { line: usize, pos: Point },

    #[error("line {line}: edge references unknown node id {id}")]
    UnknownId { line: usize, id: NodeId },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
