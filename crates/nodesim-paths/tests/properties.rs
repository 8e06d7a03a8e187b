use nodesim_core::{Layout, Point};
use nodesim_paths::{
    Distance, PathError, PriorityQueue, Zero, astar_path, dijkstra_path, exhaustive_path,
    heuristic_map, manhattan,
};
use proptest::prelude::*;

const MAX_EDGES: usize = 14;

fn pos(i: usize) -> Point {
    Point::new((i % 3) as i32, (i / 3) as i32)
}

/// Node count plus a list of directed edges between node indices.
fn graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..=7).prop_flat_map(|n| {
        (Just(n), prop::collection::vec((0..n, 0..n), 0..=MAX_EDGES))
    })
}

fn build(
    n: usize,
    edges: &[(usize, usize)],
    weight: impl Fn(usize, Point, Point) -> f64,
) -> Layout {
    let mut layout = Layout::new();
    for i in 0..n {
        layout.spawn(pos(i));
    }
    for (k, &(a, b)) in edges.iter().enumerate() {
        if a != b {
            let (pa, pb) = (pos(a), pos(b));
            layout.add_neighbor(pa, pb, false, weight(k, pa, pb)).unwrap();
        }
    }
    layout
}

proptest! {
    #[test]
    fn heap_dequeues_in_order(priorities in prop::collection::vec(-1.0e6f64..1.0e6, 0..200)) {
        let mut q = PriorityQueue::new();
        for (i, &p) in priorities.iter().enumerate() {
            q.enqueue(i, p);
        }
        prop_assert_eq!(q.len(), priorities.len());

        let mut out = Vec::with_capacity(priorities.len());
        let mut seen = Vec::with_capacity(priorities.len());
        while let Some((i, p)) = q.pop() {
            prop_assert_eq!(priorities[i], p);
            out.push(p);
            seen.push(i);
        }
        let mut sorted = priorities.clone();
        sorted.sort_by(f64::total_cmp);
        prop_assert_eq!(out, sorted);
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..priorities.len()).collect::<Vec<_>>());
        prop_assert!(q.dequeue().is_err());
    }

    /// Distinct powers of two as weights make every simple path's length
    /// unique, so all searches must agree on the exact route.
    #[test]
    fn searches_agree(
        (n, edges) in graph(),
        exps in Just((0..MAX_EDGES as i32).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let layout = build(n, &edges, |k, _, _| 2f64.powi(exps[k]));
        let (start, goal) = (pos(0), pos(n - 1));

        let d = dijkstra_path(&layout, start, goal);
        let a = astar_path(&layout, &Zero, start, goal);
        let e = exhaustive_path(&layout, start, goal);
        match (&d, &e) {
            (Ok(d), Ok(e)) => {
                prop_assert_eq!(d.positions().collect::<Vec<_>>(), e.positions().collect::<Vec<_>>());
                prop_assert_eq!(d.total_length(), e.total_length());
            }
            (Err(de), Err(ee)) => {
                prop_assert_eq!(de, &PathError::Unreachable { start, goal });
                prop_assert_eq!(ee, &PathError::Unreachable { start, goal });
            }
            _ => prop_assert!(false, "dijkstra {:?} vs exhaustive {:?}", d, e),
        }
        prop_assert_eq!(a, d);
    }

    /// Edges at least as long as the Manhattan distance between their
    /// endpoints keep the Manhattan heuristic admissible.
    #[test]
    fn admissible_astar_is_optimal(
        (n, edges) in graph(),
        extra in prop::collection::vec(0u8..10, MAX_EDGES),
    ) {
        let layout = build(n, &edges, |k, a, b| manhattan(a, b) + f64::from(extra[k]));
        let (start, goal) = (pos(0), pos(n - 1));
        let h = heuristic_map(&layout, goal, Distance::Manhattan, 1.0);

        let d = dijkstra_path(&layout, start, goal).map(|p| p.total_length());
        let a = astar_path(&layout, &h, start, goal).map(|p| p.total_length());
        prop_assert_eq!(a, d);
    }
}
