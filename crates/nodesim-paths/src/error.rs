//! Error types for the priority queue and the path searches.

use nodesim_core::Point;
use thiserror::Error;

/// Errors raised by [`PriorityQueue`](crate::PriorityQueue).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("priority queue contains no elements")]
    Empty,
}

/// Errors raised by the path searches.
///
/// A search either returns a complete path or one of these; there are no
/// partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The start or goal coordinate is not a node of the graph.
    #[error("node {0} is not part of the graph")]
    UnknownNode(Point),

    #[error("can't find any path between nodes {start} and {goal}")]
    Unreachable { start: Point, goal: Point },

    /// A* reached a node the heuristic has no estimate for.
    #[error("A* requires a heuristic value for every node it reaches; node {0} is lacking one")]
    MissingHeuristic(Point),

    /// The search hit [`SearchOptions::max_expansions`](crate::SearchOptions).
    #[error("search gave up after expanding {expanded} nodes")]
    BudgetExhausted { expanded: usize },
}
