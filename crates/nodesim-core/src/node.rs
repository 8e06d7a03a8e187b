//! Nodes, their identities and the directed connections between them.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::GraphError;
use crate::geom::Point;

/// Default length of a connection when none is given.
pub const DEFAULT_LENGTH: f64 = 1.0;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Numeric identity of a node, unique within a layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Hands out monotonically increasing node ids, starting at 1.
///
/// Ids supplied from elsewhere (layout files, explicit construction) are
/// [`reserve`](Self::reserve)d so that later allocations never collide with
/// them.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next free id.
    pub fn next_id(&mut self) -> NodeId {
        self.last += 1;
        NodeId(self.last)
    }

    /// Mark `id` as used.
    pub fn reserve(&mut self, id: NodeId) {
        self.last = self.last.max(id.0);
    }

    /// The largest id handed out or reserved so far (0 if none).
    pub fn last(&self) -> u32 {
        self.last
    }
}

// ---------------------------------------------------------------------------
// Connection
// ---------------------------------------------------------------------------

/// A directed, weighted edge owned by its source node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    source: Point,
    destination: Point,
    destination_id: NodeId,
    length: f64,
}

impl Connection {
    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> Point {
        self.destination
    }

    #[inline]
    pub fn destination_id(&self) -> NodeId {
        self.destination_id
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }
}

pub(crate) fn check_length(length: f64) -> Result<(), GraphError> {
    if length.is_finite() && length >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidLength(length))
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A positioned graph node with its outgoing connections.
///
/// Equality and hashing look at the coordinates only: two nodes at the same
/// `(x, y)` are the same key, whatever their ids or names.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    pos: Point,
    name: String,
    neighbors: Vec<Connection>,
}

impl Node {
    /// Create a node named after its coordinates.
    pub fn new(id: NodeId, pos: Point) -> Self {
        Self::with_name(id, pos, format!("[{} {}]", pos.x, pos.y))
    }

    pub fn with_name(id: NodeId, pos: Point, name: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            name: name.into(),
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of outgoing connections.
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Outgoing connections, in the order they were added.
    #[inline]
    pub fn outgoing_connections(&self) -> &[Connection] {
        &self.neighbors
    }

    /// Coordinates of every destination, in insertion order.
    pub fn adjacent(&self) -> impl Iterator<Item = Point> + '_ {
        self.neighbors.iter().map(Connection::destination)
    }

    /// Add a directed connection from `self` to `other`.
    ///
    /// Returns `Ok(false)` without touching anything if `other` is already a
    /// neighbour (whatever the length of the existing edge).
    pub fn add_neighbor(&mut self, other: &Node, length: f64) -> Result<bool, GraphError> {
        if *self == *other {
            return Err(GraphError::SelfNeighbor(self.pos));
        }
        check_length(length)?;
        Ok(self.link(other.pos, other.id, length))
    }

    /// Connect `a` and `b` in both directions with the same length.
    ///
    /// Each direction is only added when missing, so an existing edge keeps
    /// its original length.
    pub fn add_mutual(a: &mut Node, b: &mut Node, length: f64) -> Result<(), GraphError> {
        a.add_neighbor(b, length)?;
        b.add_neighbor(a, length)?;
        Ok(())
    }

    /// Whether a connection to `other`'s coordinates exists.
    pub fn has_neighbor(&self, other: &Node) -> bool {
        self.has_neighbor_at(other.pos)
    }

    pub fn has_neighbor_at(&self, pos: Point) -> bool {
        self.neighbors.iter().any(|c| c.destination == pos)
    }

    /// Whether a connection to a node with this id exists (linear scan).
    pub fn has_neighbor_id(&self, id: NodeId) -> bool {
        self.neighbors.iter().any(|c| c.destination_id == id)
    }

    /// The connection towards `pos`, if any.
    pub fn connection_to(&self, pos: Point) -> Option<&Connection> {
        self.neighbors.iter().find(|c| c.destination == pos)
    }

    /// Unchecked edge insertion shared with [`Layout`](crate::Layout).
    pub(crate) fn link(&mut self, destination: Point, destination_id: NodeId, length: f64) -> bool {
        if self.has_neighbor_at(destination) {
            return false;
        }
        self.neighbors.push(Connection {
            source: self.pos,
            destination,
            destination_id,
            length,
        });
        true
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {} : {}]", self.pos.x, self.pos.y, self.neighbors.len())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_id_is_transparent() {
        let json = serde_json::to_string(&NodeId(12)).unwrap();
        assert_eq!(json, "12");
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeId(12));
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(-3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
