use nodesim_core::{Layout, Point};

/// Graph interface the searches run over.
pub trait Pather {
    /// Whether `p` is a node of the graph.
    fn contains(&self, p: Point) -> bool;

    /// Append `(destination, length)` for every outgoing connection of `p`
    /// into `buf`, in the graph's own order. The caller clears `buf` before
    /// calling. Lengths must be finite and nonnegative.
    fn neighbors(&self, p: Point, buf: &mut Vec<(Point, f64)>);
}

impl Pather for Layout {
    #[inline]
    fn contains(&self, p: Point) -> bool {
        Layout::contains(self, p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<(Point, f64)>) {
        buf.extend(
            self.outgoing_connections(p)
                .iter()
                .map(|c| (c.destination(), c.length())),
        );
    }
}
