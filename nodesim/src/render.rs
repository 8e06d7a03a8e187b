//! ASCII drawing of a layout and an optional path through it.

use std::collections::HashSet;

use nodesim_core::{Layout, Point};
use nodesim_paths::Path;

const EMPTY: char = '.';
const NODE: char = 'o';
const ON_PATH: char = '*';
const START: char = 'S';
const GOAL: char = 'G';

/// One character per coordinate of the layout's bounding box, one line per
/// row, top row first.
///
/// Returns `None` for an empty layout or one wider or taller than `limit`.
pub fn render(layout: &Layout, path: Option<&Path>, limit: u32) -> Option<String> {
    let bounds = layout.bounds()?;
    let limit = i64::from(limit);
    if bounds.width() > limit || bounds.height() > limit {
        return None;
    }

    let on_path: HashSet<Point> = path.map(|p| p.positions().collect()).unwrap_or_default();
    let start = path.and_then(Path::start);
    let goal = path.and_then(Path::goal);

    let mut out = String::with_capacity(((bounds.width() + 1) * bounds.height()) as usize);
    for y in bounds.min.y..=bounds.max.y {
        for x in bounds.min.x..=bounds.max.x {
            let p = Point::new(x, y);
            let c = if !layout.contains(p) {
                EMPTY
            } else if Some(p) == start {
                START
            } else if Some(p) == goal {
                GOAL
            } else if on_path.contains(&p) {
                ON_PATH
            } else {
                NODE
            };
            out.push(c);
        }
        out.push('\n');
    }
    Some(out)
}
