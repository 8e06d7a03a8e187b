use std::collections::HashMap;

use nodesim_core::Point;

use crate::error::PathError;
use crate::path::{Path, Settled};
use crate::queue::PriorityQueue;
use crate::search::{Candidate, SearchOptions, SearchStats, check_endpoints};
use crate::traits::Pather;

/// Compute the shortest path from `start` to `goal` with Dijkstra's
/// algorithm.
///
/// Each node is finalized the first time it leaves the frontier; later,
/// longer candidates for it are discarded. Fails with
/// [`PathError::Unreachable`] when the frontier runs dry before the goal is
/// finalized.
pub fn dijkstra_path<P: Pather + ?Sized>(
    pather: &P,
    start: Point,
    goal: Point,
) -> Result<Path, PathError> {
    dijkstra_path_with(pather, start, goal, &SearchOptions::default())
}

/// Like [`dijkstra_path`], bounded by `options`.
pub fn dijkstra_path_with<P: Pather + ?Sized>(
    pather: &P,
    start: Point,
    goal: Point,
    options: &SearchOptions,
) -> Result<Path, PathError> {
    check_endpoints(pather, start, goal)?;

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
        0.0,
    );
    stats.enqueued += 1;

    let found = 'search: loop {
        let Some((next, _)) = frontier.pop() else {
            break 'search false;
        };
        stats.dequeued += 1;

        if finalized.contains_key(&next.node) {
            log::trace!("dijkstra: stale entry for {}", next.node);
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
            if finalized.contains_key(&dest) {
                continue;
            }
            let dist = next.dist + length;
            frontier.enqueue(
                Candidate {
                    node: dest,
                    from: Some(next.node),
                    dist,
                },
                dist,
            );
            stats.enqueued += 1;
        }
    };

    log::debug!("dijkstra {start} -> {goal}: {stats}");
    if !found {
        return Err(PathError::Unreachable { start, goal });
    }
    Ok(Path::trace(&finalized, goal))
}
