//! Shared search plumbing and algorithm selection.

use std::fmt;
use std::str::FromStr;

use nodesim_core::Point;

use crate::astar::astar_path_with;
use crate::dijkstra::dijkstra_path_with;
use crate::error::PathError;
use crate::exhaustive::exhaustive_path;
use crate::heuristic::{Heuristic, Zero};
use crate::path::Path;
use crate::traits::Pather;

/// Limits applied to the frontier searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Give up with [`PathError::BudgetExhausted`] after expanding this many
    /// nodes. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchOptions {
    pub(crate) fn check(&self, stats: &SearchStats) -> Result<(), PathError> {
        match self.max_expansions {
            Some(max) if stats.expanded >= max => Err(PathError::BudgetExhausted {
                expanded: stats.expanded,
            }),
            _ => Ok(()),
        }
    }
}

/// Work counters of a single search, reported at debug level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose connections were relaxed (recursive calls for the
    /// exhaustive search).
    pub expanded: usize,
    pub dequeued: usize,
    pub enqueued: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded {} dequeued {} enqueued {}",
            self.expanded, self.dequeued, self.enqueued
        )
    }
}

/// A path candidate waiting in the frontier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub(crate) node: Point,
    pub(crate) from: Option<Point>,
    pub(crate) dist: f64,
}

pub(crate) fn check_endpoints<P: Pather + ?Sized>(
    pather: &P,
    start: Point,
    goal: Point,
) -> Result<(), PathError> {
    for p in [start, goal] {
        if !pather.contains(p) {
            return Err(PathError::UnknownNode(p));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The interchangeable path strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    /// A* with the caller's heuristic.
    AStar,
    /// A* with an all-zero heuristic; behaves like Dijkstra.
    AStarZero,
    /// Backtracking over every simple path. Small graphs only.
    Exhaustive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::AStarZero,
        Algorithm::Exhaustive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::AStarZero => "astar-zero",
            Algorithm::Exhaustive => "exhaustive",
        }
    }

    /// Run this strategy. `heuristic` is only consulted by [`Algorithm::AStar`],
    /// and `options` are ignored by [`Algorithm::Exhaustive`].
    pub fn find_path<P, H>(
        self,
        pather: &P,
        heuristic: &H,
        start: Point,
        goal: Point,
        options: &SearchOptions,
    ) -> Result<Path, PathError>
    where
        P: Pather + ?Sized,
        H: Heuristic + ?Sized,
    {
        match self {
            Algorithm::Dijkstra => dijkstra_path_with(pather, start, goal, options),
            Algorithm::AStar => astar_path_with(pather, heuristic, start, goal, options),
            Algorithm::AStarZero => astar_path_with(pather, &Zero, start, goal, options),
            Algorithm::Exhaustive => exhaustive_path(pather, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected dijkstra, astar, astar-zero or exhaustive)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "astar-zero" | "astar0" => Ok(Algorithm::AStarZero),
            "exhaustive" => Ok(Algorithm::Exhaustive),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}
