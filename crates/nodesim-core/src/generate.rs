//! Layout generators.
//!
//! Generators only use the public [`Layout`] operations; they add to whatever
//! the layout already holds and reuse nodes at occupied coordinates where
//! the shape calls for it.

use crate::error::GraphError;
use crate::geom::Point;
use crate::layout::Layout;

/// Add a `size × size` 4-connected grid at `(0..size, 0..size)`.
///
/// Every edge is mutual with length `weight`. Nodes are created column by
/// column (x outer, y inner), so in an empty layout ids run from 1 to
/// `size²` in that order.
pub fn grid(layout: &mut Layout, size: u32, weight: f64) -> Result<(), GraphError> {
    let size = size as i32;
    for x in 0..size {
        for y in 0..size {
            let p = Point::new(x, y);
            layout.spawn(p);
            if x > 0 {
                layout.add_neighbor(p, p.shift(-1, 0), true, weight)?;
            }
            if y > 0 {
                layout.add_neighbor(p, p.shift(0, -1), true, weight)?;
            }
        }
    }
    log::debug!(
        "grid {size}x{size}: {} nodes, {} connections",
        layout.len(),
        layout.edge_count()
    );
    Ok(())
}

/// Half-extents of the octagon at every recursion level.
///
/// Level `n` spans `widths[n]` by `heights[n]`, with
/// `widths[n] = widths[n-1] + heights[n-1]` and
/// `heights[n] = 4·heights[n-1] - 2·heights[n-2]`.
fn octagon_extents(depth: usize) -> (Vec<i32>, Vec<i32>) {
    let mut widths = vec![1, 3];
    let mut heights = vec![2, 7];
    while widths.len() < depth + 1 {
        let n = widths.len();
        widths.push(widths[n - 1] + heights[n - 1]);
        heights.push(4 * heights[n - 1] - 2 * heights[n - 2]);
    }
    (widths, heights)
}

/// Add a self-similar ring of octagons centred on `origin`.
///
/// At depth 0 this is eight nodes around `origin`, each connected mutually
/// to the previous one, and the ring closed with a single directed edge
/// from the first corner to the last. At depth `d` each of the eight
/// corners of the level-`d` octagon is the centre of a depth `d-1` ring.
pub fn recursive_octagon(layout: &mut Layout, depth: usize, origin: Point) -> Result<(), GraphError> {
    let (widths, heights) = octagon_extents(depth);
    octagon_level(layout, depth, origin, &widths, &heights)?;
    log::debug!(
        "recursive octagon depth {depth}: {} nodes, {} connections",
        layout.len(),
        layout.edge_count()
    );
    Ok(())
}

fn octagon_level(
    layout: &mut Layout,
    depth: usize,
    origin: Point,
    widths: &[i32],
    heights: &[i32],
) -> Result<(), GraphError> {
    let (xl, yl) = if depth == 0 {
        (widths[0], heights[0])
    } else {
        (
            widths[depth] - widths[depth - 1],
            heights[depth] - heights[depth - 1],
        )
    };

    let mut first: Option<Point> = None;
    let mut prev: Option<Point> = None;
    for i in 0..8 {
        // Corners alternate between (xl, yl) and (yl, xl) extents and walk
        // the four quadrants.
        let swapped = (i + 1) / 2 % 2 == 1;
        let sx = if i / 4 == 1 { -1 } else { 1 };
        let sy = if (i + 2) / 4 % 2 == 1 { -1 } else { 1 };
        let (dx, dy) = if swapped { (yl, xl) } else { (xl, yl) };
        let p = origin.shift(dx * sx, dy * sy);

        if depth > 0 {
            octagon_level(layout, depth - 1, p, widths, heights)?;
            continue;
        }

        if !layout.contains(p) {
            layout.spawn(p);
        }
        if let Some(q) = prev {
            layout.connect(p, q, true)?;
        }
        prev = Some(p);
        match i {
            0 => first = Some(p),
            7 => {
                if let Some(f) = first {
                    layout.connect(f, p, false)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_degrees() {
        let mut layout = Layout::new();
        let size = 4;
        grid(&mut layout, size as u32, 1.0).unwrap();
        assert_eq!(layout.len(), 16);
        for x in 0..size {
            for y in 0..size {
                let p = Point::new(x, y);
                let node = layout.node(p).unwrap();
                let border = [x == 0, x == size - 1, y == 0, y == size - 1]
                    .iter()
                    .filter(|b| **b)
                    .count();
                assert_eq!(node.degree(), 4 - border, "degree at {p}");
                for q in p.neighbors_4() {
                    assert_eq!(layout.contains(q), node.has_neighbor_at(q));
                }
            }
        }
    }

    #[test]
    fn grid_ids_are_column_major() {
        let mut layout = Layout::new();
        grid(&mut layout, 3, 2.0).unwrap();
        assert_eq!(layout.pos_of(crate::NodeId(1)).unwrap(), Point::new(0, 0));
        assert_eq!(layout.pos_of(crate::NodeId(2)).unwrap(), Point::new(0, 1));
        assert_eq!(layout.pos_of(crate::NodeId(4)).unwrap(), Point::new(1, 0));
        assert_eq!(layout.outgoing_connections(Point::new(1, 1))[0].length(), 2.0);
    }

    #[test]
    fn grid_rejects_bad_weight() {
        let mut layout = Layout::new();
        assert!(matches!(
            grid(&mut layout, 2, -1.0),
            Err(GraphError::InvalidLength(_))
        ));
    }

    #[test]
    fn octagon_extents_follow_recurrence() {
        let (w, h) = octagon_extents(3);
        assert_eq!(w, vec![1, 3, 10, 34]);
        assert_eq!(h, vec![2, 7, 24, 82]);
    }

    #[test]
    fn single_octagon_ring() {
        let mut layout = Layout::new();
        recursive_octagon(&mut layout, 0, Point::ZERO).unwrap();
        assert_eq!(layout.len(), 8);
        // Seven mutual links plus the directed closing edge.
        assert_eq!(layout.edge_count(), 15);

        let corners: Vec<Point> = layout.nodes().map(|n| n.pos()).collect();
        assert_eq!(corners[0], Point::new(1, 2));
        assert_eq!(corners[1], Point::new(2, 1));
        assert!(layout.has_neighbor(corners[0], corners[7]));
        assert!(!layout.has_neighbor(corners[7], corners[0]));
        for w in corners.windows(2) {
            assert!(layout.has_neighbor(w[0], w[1]));
            assert!(layout.has_neighbor(w[1], w[0]));
        }
    }

    #[test]
    fn nested_octagons() {
        let mut layout = Layout::new();
        recursive_octagon(&mut layout, 1, Point::new(10, 10)).unwrap();
        // Neighbouring rings share two corners each.
        assert_eq!(layout.len(), 48);
        assert_eq!(layout.edge_count(), 106);

        let mut deeper = Layout::new();
        recursive_octagon(&mut deeper, 2, Point::ZERO).unwrap();
        assert_eq!(deeper.len(), 352);
    }
}
