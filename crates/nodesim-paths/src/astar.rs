use std::collections::HashMap;

use nodesim_core::Point;

use crate::error::PathError;
use crate::heuristic::Heuristic;
use crate::path::{Path, Settled};
use crate::queue::PriorityQueue;
use crate::search::{Candidate, SearchOptions, SearchStats, check_endpoints};
use crate::traits::Pather;

/// Compute the shortest path from `start` to `goal` using A*.
///
/// Candidates are ordered by distance travelled plus `heuristic`'s estimate.
/// Unlike [`dijkstra_path`](crate::dijkstra_path), a finalized node is
/// finalized again when a strictly shorter candidate for it comes out of the
/// frontier. The heuristic must have an estimate for `start` and for every
/// node the search reaches, or the search fails with
/// [`PathError::MissingHeuristic`].
pub fn astar_path<P, H>(
    pather: &P,
    heuristic: &H,
    start: Point,
    goal: Point,
) -> Result<Path, PathError>
where
    P: Pather + ?Sized,
    H: Heuristic + ?Sized,
{
    astar_path_with(pather, heuristic, start, goal, &SearchOptions::default())
}

/// Like [`astar_path`], bounded by `options`.
pub fn astar_path_with<P, H>(
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
    check_endpoints(pather, start, goal)?;
    let estimate = |p: Point| heuristic.estimate(p).ok_or(PathError::MissingHeuristic(p));

    let mut frontier = PriorityQueue::new();
    let mut finalized: HashMap<Point, Settled> = HashMap::new();
    let mut stats = SearchStats::default();
    let mut nbuf = Vec::new();

    frontier.enqueue(
        Candidate {
            node: start,
            from: None,
            dist: 0.0,
        },
        estimate(start)?,
    );
    stats.enqueued += 1;

    let found = 'search: loop {
        let Some((next, _)) = frontier.pop() else {
            break 'search false;
        };
        stats.dequeued += 1;

        if finalized
            .get(&next.node)
            .is_some_and(|s| s.dist <= next.dist)
        {
            log::trace!("astar: stale entry for {}", next.node);
            continue;
        }
        finalized.insert(
            next.node,
            Settled {
                from: next.from,
                dist: next.dist,
            },
        );
        if next.node == goal {
            break 'search true;
        }

        options.check(&stats)?;
        stats.expanded += 1;

        nbuf.clear();
        pather.neighbors(next.node, &mut nbuf);
        for &(dest, length) in nbuf.iter() {
            let dist = next.dist + length;
            if finalized.get(&dest).is_some_and(|s| s.dist < dist) {
                continue;
            }
            frontier.enqueue(
                Candidate {
                    node: dest,
                    from: Some(next.node),
                    dist,
                },
                dist + estimate(dest)?,
            );
            stats.enqueued += 1;
        }
    };

    log::debug!("astar {start} -> {goal}: {stats}");
    if !found {
        return Err(PathError::Unreachable { start, goal });
    }
    Ok(Path::trace(&finalized, goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra_path;
    use crate::distance::Distance;
    use crate::heuristic::{Zero, heuristic_map};
    use nodesim_core::{Layout, generate};

    fn grid(size: u32) -> Layout {
        let mut layout = Layout::new();
        generate::grid(&mut layout, size, 1.0).unwrap();
        layout
    }

    #[test]
    fn manhattan_on_grid_expands_less() {
        let layout = grid(8);
        let (start, goal) = (Point::new(0, 0), Point::new(7, 0));
        let h = heuristic_map(&layout, goal, Distance::Manhattan, 1.0);
        let path = astar_path(&layout, &h, start, goal).unwrap();
        assert_eq!(path.total_length(), 7.0);
        assert_eq!(path.len(), 8);
        assert!(path.positions().all(|p| p.y == 0));

        // A tight budget is enough for the guided search but not for the
        // blind one.
        let opts = SearchOptions {
            max_expansions: Some(20),
        };
        assert!(astar_path_with(&layout, &h, start, goal, &opts).is_ok());
        assert_eq!(
            astar_path_with(&layout, &Zero, start, goal, &opts),
            Err(PathError::BudgetExhausted { expanded: 20 })
        );
    }

    #[test]
    fn zero_heuristic_matches_dijkstra() {
        let layout = grid(5);
        let (start, goal) = (Point::new(0, 4), Point::new(3, 1));
        let a = astar_path(&layout, &Zero, start, goal).unwrap();
        let d = dijkstra_path(&layout, start, goal).unwrap();
        assert_eq!(a.total_length(), d.total_length());
        assert_eq!(a.total_length(), 6.0);
    }

    #[test]
    fn missing_start_estimate() {
        let layout = grid(2);
        let h: HashMap<Point, f64> = HashMap::new();
        assert_eq!(
            astar_path(&layout, &h, Point::new(0, 0), Point::new(1, 1)),
            Err(PathError::MissingHeuristic(Point::new(0, 0)))
        );
    }

    #[test]
    fn missing_neighbor_estimate() {
        let layout = grid(3);
        let only_start = |p: Point| (p == Point::ZERO).then_some(2.0);
        let err = astar_path(&layout, &only_start, Point::ZERO, Point::new(2, 2)).unwrap_err();
        assert!(matches!(err, PathError::MissingHeuristic(p) if p != Point::ZERO));
    }

    #[test]
    fn refinalizes_on_shorter_candidate() {
        // (0,0) -> (2,0) directly costs 4, through (1,0) costs 2. A heuristic
        // that is admissible but inconsistent at (1,0) makes the direct
        // candidate come out first.
        let mut layout = Layout::new();
        for x in 0..4 {
            layout.spawn(Point::new(x, 0));
        }
        let edges = [
            ((0, 0), (2, 0), 4.0),
            ((0, 0), (1, 0), 1.0),
            ((1, 0), (2, 0), 1.0),
            ((2, 0), (3, 0), 10.0),
        ];
        for (a, b, w) in edges {
            layout.add_neighbor(a.into(), b.into(), false, w).unwrap();
        }
        let h = |p: Point| Some(if p.x == 1 { 11.0 } else { 0.0 });
        let path = astar_path(&layout, &h, Point::new(0, 0), Point::new(3, 0)).unwrap();
        assert_eq!(path.total_length(), 12.0);
        let pts: Vec<Point> = path.positions().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
    }

    #[test]
    fn unreachable_goal() {
        let mut layout = grid(2);
        layout.spawn(Point::new(5, 5));
        assert_eq!(
            astar_path(&layout, &Zero, Point::new(0, 0), Point::new(5, 5)),
            Err(PathError::Unreachable {
                start: Point::new(0, 0),
                goal: Point::new(5, 5),
            })
        );
    }
}
