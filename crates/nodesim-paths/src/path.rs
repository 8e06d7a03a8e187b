use std::collections::HashMap;
use std::fmt;

use nodesim_core::Point;

/// One step of a [`Path`]: a node and the distance still to travel from it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub pos: Point,
    pub remaining: f64,
}

/// A shortest path from start to goal, both included.
///
/// The first step's `remaining` is the total length of the path; the last
/// step (the goal) has `remaining == 0.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Build a path from goal-first steps already in remaining-distance form.
    pub(crate) fn from_goal_first(mut steps: Vec<PathStep>) -> Self {
        steps.reverse();
        Self { steps }
    }

    /// Follow predecessor links from `goal` back to the entry without one,
    /// converting cumulative distances from the start into distances left to
    /// the goal.
    pub(crate) fn trace(settled: &HashMap<Point, Settled>, goal: Point) -> Self {
        let total = settled[&goal].dist;
        let mut steps = Vec::new();
        let mut cur = Some(goal);
        while let Some(p) = cur {
            let s = &settled[&p];
            steps.push(PathStep {
                pos: p,
                remaining: total - s.dist,
            });
            cur = s.from;
        }
        Self::from_goal_first(steps)
    }

    #[inline]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<PathStep> {
        self.steps
    }

    /// Number of nodes on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false` for a path returned by a search.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of the edge lengths along the path.
    pub fn total_length(&self) -> f64 {
        self.steps.first().map_or(0.0, |s| s.remaining)
    }

    pub fn start(&self) -> Option<Point> {
        self.steps.first().map(|s| s.pos)
    }

    pub fn goal(&self) -> Option<Point> {
        self.steps.last().map(|s| s.pos)
    }

    /// Node coordinates from start to goal.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().map(|s| s.pos)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.steps.iter().any(|s| s.pos == p)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", s.pos)?;
        }
        write!(f, " [{}]", self.total_length())
    }
}

/// Best known way to reach a node during a frontier search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Settled {
    pub(crate) from: Option<Point>,
    pub(crate) dist: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(from: Option<(i32, i32)>, dist: f64) -> Settled {
        Settled {
            from: from.map(Point::from),
            dist,
        }
    }

    #[test]
    fn trace_rebases_distances() {
        let mut map = HashMap::new();
        map.insert(Point::new(0, 0), settled(None, 0.0));
        map.insert(Point::new(1, 0), settled(Some((0, 0)), 1.5));
        map.insert(Point::new(2, 0), settled(Some((1, 0)), 4.0));
        // Not on the path.
        map.insert(Point::new(9, 9), settled(Some((0, 0)), 0.5));

        let path = Path::trace(&map, Point::new(2, 0));
        assert_eq!(path.len(), 3);
        assert_eq!(path.total_length(), 4.0);
        assert_eq!(path.start(), Some(Point::new(0, 0)));
        assert_eq!(path.goal(), Some(Point::new(2, 0)));
        let remaining: Vec<f64> = path.steps().iter().map(|s| s.remaining).collect();
        assert_eq!(remaining, vec![4.0, 2.5, 0.0]);
        assert!(!path.contains(Point::new(9, 9)));
    }

    #[test]
    fn single_node_path() {
        let mut map = HashMap::new();
        map.insert(Point::new(3, 3), settled(None, 0.0));
        let path = Path::trace(&map, Point::new(3, 3));
        assert_eq!(path.len(), 1);
        assert_eq!(path.total_length(), 0.0);
        assert_eq!(path.to_string(), "(3, 3) [0]");
    }

    #[test]
    fn display_lists_positions() {
        let path = Path::from_goal_first(vec![
            PathStep {
                pos: Point::new(1, 0),
                remaining: 0.0,
            },
            PathStep {
                pos: Point::new(0, 0),
                remaining: 2.5,
            },
        ]);
        assert_eq!(path.to_string(), "(0, 0) -> (1, 0) [2.5]");
        let pts: Vec<Point> = path.positions().collect();
        assert_eq!(pts, vec![Point::new(0, 0), Point::new(1, 0)]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path::from_goal_first(vec![
            PathStep {
                pos: Point::new(4, 2),
                remaining: 0.0,
            },
            PathStep {
                pos: Point::new(3, 2),
                remaining: 7.25,
            },
        ]);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
