use std::collections::HashSet;

use nodesim_core::Point;

use crate::error::PathError;
use crate::path::{Path, PathStep};
use crate::search::{SearchStats, check_endpoints};
use crate::traits::Pather;

/// Find the shortest path by trying every simple path from `start`.
///
/// Exponential in the size of the graph: only meant as a reference to check
/// the other searches against on small layouts. When several paths share the
/// minimum length the first one found wins.
pub fn exhaustive_path<P: Pather + ?Sized>(
    pather: &P,
    start: Point,
    goal: Point,
) -> Result<Path, PathError> {
    check_endpoints(pather, start, goal)?;

    let mut search = Exhaustive {
        pather,
        goal,
        visited: HashSet::new(),
        stats: SearchStats::default(),
    };
    let best = search.tail(start);
    log::debug!("exhaustive {start} -> {goal}: {}", search.stats);

    match best {
        Some(tail) => Ok(Path::from_goal_first(tail.steps)),
        None => Err(PathError::Unreachable { start, goal }),
    }
}

struct Exhaustive<'a, P: ?Sized> {
    pather: &'a P,
    goal: Point,
    visited: HashSet<Point>,
    stats: SearchStats,
}

/// Shortest known continuation from some node to the goal, goal first.
struct Tail {
    length: f64,
    steps: Vec<PathStep>,
}

impl<P: Pather + ?Sized> Exhaustive<'_, P> {
    fn tail(&mut self, node: Point) -> Option<Tail> {
        self.stats.expanded += 1;
        if node == self.goal {
            return Some(Tail {
                length: 0.0,
                steps: vec![PathStep {
                    pos: node,
                    remaining: 0.0,
                }],
            });
        }

        self.visited.insert(node);
        let mut nbuf = Vec::new();
        self.pather.neighbors(node, &mut nbuf);

        let mut best: Option<Tail> = None;
        for (dest, length) in nbuf {
            if self.visited.contains(&dest) {
                continue;
            }
            let Some(mut tail) = self.tail(dest) else {
                continue;
            };
            tail.length += length;
            if best.as_ref().is_none_or(|b| tail.length < b.length) {
                best = Some(tail);
            }
        }
        self.visited.remove(&node);

        best.map(|mut t| {
            t.steps.push(PathStep {
                pos: node,
                remaining: t.length,
            });
            t
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra_path;
    use nodesim_core::{Layout, generate};

    #[test]
    fn matches_dijkstra_on_grid() {
        let mut layout = Layout::new();
        generate::grid(&mut layout, 3, 2.0).unwrap();
        let (start, goal) = (Point::new(0, 0), Point::new(2, 1));
        let e = exhaustive_path(&layout, start, goal).unwrap();
        let d = dijkstra_path(&layout, start, goal).unwrap();
        assert_eq!(e.total_length(), 6.0);
        assert_eq!(e.total_length(), d.total_length());
        assert_eq!(e.len(), 4);
        assert_eq!(e.start(), Some(start));
        assert_eq!(e.goal(), Some(goal));
    }

    #[test]
    fn avoids_cycles() {
        // A two-node cycle next to a dead end.
        let mut layout = Layout::new();
        for x in 0..3 {
            layout.spawn(Point::new(x, 0));
        }
        layout
            .add_neighbor(Point::new(0, 0), Point::new(1, 0), true, 1.0)
            .unwrap();
        assert_eq!(
            exhaustive_path(&layout, Point::new(0, 0), Point::new(2, 0)),
            Err(PathError::Unreachable {
                start: Point::new(0, 0),
                goal: Point::new(2, 0),
            })
        );
    }

    #[test]
    fn large_weights_do_not_overflow() {
        let mut layout = Layout::new();
        for x in 0..3 {
            layout.spawn(Point::new(x, 0));
        }
        let big = f64::MAX / 4.0;
        layout
            .add_neighbor(Point::new(0, 0), Point::new(1, 0), false, big)
            .unwrap();
        layout
            .add_neighbor(Point::new(1, 0), Point::new(2, 0), false, big)
            .unwrap();
        let path = exhaustive_path(&layout, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(path.total_length(), big * 2.0);
    }

    #[test]
    fn start_is_goal() {
        let mut layout = Layout::new();
        layout.spawn(Point::new(4, 4));
        let path = exhaustive_path(&layout, Point::new(4, 4), Point::new(4, 4)).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.total_length(), 0.0);
    }
}
