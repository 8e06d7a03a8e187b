use std::collections::HashMap;
use std::hash::BuildHasher;

use nodesim_core::{Layout, Point};

use crate::distance::Distance;

/// Per-node estimate of the remaining distance to a fixed goal.
///
/// A* only returns shortest paths when the estimate never exceeds the true
/// remaining distance and, for every edge `(x, y)` of length `d`,
/// `estimate(x) <= d + estimate(y)`.
pub trait Heuristic {
    /// Estimated distance from `p` to the goal, or `None` if `p` is unknown
    /// to this heuristic.
    fn estimate(&self, p: Point) -> Option<f64>;
}

impl<S: BuildHasher> Heuristic for HashMap<Point, f64, S> {
    #[inline]
    fn estimate(&self, p: Point) -> Option<f64> {
        self.get(&p).copied()
    }
}

impl<F> Heuristic for F
where
    F: Fn(Point) -> Option<f64>,
{
    #[inline]
    fn estimate(&self, p: Point) -> Option<f64> {
        self(p)
    }
}

/// Estimates zero everywhere. A* with this heuristic explores like Dijkstra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _p: Point) -> Option<f64> {
        Some(0.0)
    }
}

/// Precompute `scale * metric(node, goal)` for every node of `layout`.
///
/// On a layout whose edge lengths are at least the metric distance between
/// their endpoints, a scale of `1.0` or less keeps the map admissible.
pub fn heuristic_map(
    layout: &Layout,
    goal: Point,
    metric: Distance,
    scale: f64,
) -> HashMap<Point, f64> {
    let map: HashMap<Point, f64> = layout
        .nodes()
        .map(|n| (n.pos(), scale * metric.between(n.pos(), goal)))
        .collect();
    log::debug!(
        "{metric} heuristic towards {goal} for {} nodes (scale {scale})",
        map.len()
    );
    map
}
