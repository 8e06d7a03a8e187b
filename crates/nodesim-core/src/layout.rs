//! The [`Layout`]: every node of a graph, keyed by coordinate and by id.

use std::collections::HashMap;

use crate::error::GraphError;
use crate::geom::{Bounds, Point};
use crate::node::{check_length, Connection, IdAllocator, Node, NodeId, DEFAULT_LENGTH};

/// A directed weighted graph of positioned nodes.
///
/// There is at most one node per coordinate. Nodes refer to each other by
/// coordinate, so the layout is the only owner of node data. Iteration
/// follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    nodes: Vec<Node>,
    by_pos: HashMap<Point, usize>,
    by_id: HashMap<NodeId, Point>,
    ids: IdAllocator,
}

impl Layout {
    /// Create an empty layout with a fresh id counter.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Nodes
    // -----------------------------------------------------------------------

    /// Register `node` by coordinate and id.
    ///
    /// A node already registered at the same coordinate or id is replaced;
    /// use [`try_add_node`](Self::try_add_node) to refuse occupied
    /// coordinates instead.
    pub fn add_node(&mut self, node: Node) {
        let pos = node.pos();
        let id = node.id();
        self.ids.reserve(id);
        match self.by_pos.get(&pos) {
            Some(&slot) => {
                let old = self.nodes[slot].id();
                if self.by_id.get(&old) == Some(&pos) {
                    self.by_id.remove(&old);
                }
                self.nodes[slot] = node;
            }
            None => {
                self.by_pos.insert(pos, self.nodes.len());
                self.nodes.push(node);
            }
        }
        self.by_id.insert(id, pos);
    }

    /// Register `node`, failing if its coordinate is already taken.
    pub fn try_add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.contains(node.pos()) {
            return Err(GraphError::DuplicateCoordinate(node.pos()));
        }
        self.add_node(node);
        Ok(())
    }

    /// Create a node at `pos` with a freshly allocated id.
    pub fn spawn(&mut self, pos: Point) -> NodeId {
        let id = self.ids.next_id();
        self.add_node(Node::new(id, pos));
        id
    }

    /// Like [`spawn`](Self::spawn) with an explicit display name.
    pub fn spawn_named(&mut self, pos: Point, name: impl Into<String>) -> NodeId {
        let id = self.ids.next_id();
        self.add_node(Node::with_name(id, pos, name));
        id
    }

    /// The layout's id counter, for callers building nodes themselves.
    pub fn ids_mut(&mut self) -> &mut IdAllocator {
        &mut self.ids
    }

    #[inline]
    pub fn node(&self, pos: Point) -> Option<&Node> {
        self.by_pos.get(&pos).map(|&i| &self.nodes[i])
    }

    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.by_id.get(&id).and_then(|&pos| self.node(pos))
    }

    /// Coordinates of the node with this id.
    pub fn pos_of(&self, id: NodeId) -> Result<Point, GraphError> {
        self.by_id.get(&id).copied().ok_or(GraphError::UnknownId(id))
    }

    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        self.by_pos.contains_key(&pos)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed connections.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// Bounding box of all node coordinates.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.nodes.iter().map(Node::pos))
    }

    // -----------------------------------------------------------------------
    // Connections
    // -----------------------------------------------------------------------

    /// Add a connection from `source` to `destination`.
    ///
    /// With `mutual`, the reverse connection is added as well unless one
    /// already exists. Adding an existing connection is a no-op.
    pub fn add_neighbor(
        &mut self,
        source: Point,
        destination: Point,
        mutual: bool,
        length: f64,
    ) -> Result<(), GraphError> {
        if source == destination {
            return Err(GraphError::SelfNeighbor(source));
        }
        check_length(length)?;
        let si = self.slot(source)?;
        let di = self.slot(destination)?;
        let source_id = self.nodes[si].id();
        let destination_id = self.nodes[di].id();

        self.nodes[si].link(destination, destination_id, length);
        if mutual {
            self.nodes[di].link(source, source_id, length);
        }
        Ok(())
    }

    /// [`add_neighbor`](Self::add_neighbor) with the default length.
    pub fn connect(
        &mut self,
        source: Point,
        destination: Point,
        mutual: bool,
    ) -> Result<(), GraphError> {
        self.add_neighbor(source, destination, mutual, DEFAULT_LENGTH)
    }

    /// [`add_neighbor`](Self::add_neighbor) addressed by node ids.
    pub fn connect_ids(
        &mut self,
        source: NodeId,
        destination: NodeId,
        mutual: bool,
        length: f64,
    ) -> Result<(), GraphError> {
        let s = self.pos_of(source)?;
        let d = self.pos_of(destination)?;
        self.add_neighbor(s, d, mutual, length)
    }

    /// Whether `node` has a connection towards `other`.
    pub fn has_neighbor(&self, node: Point, other: Point) -> bool {
        self.node(node).is_some_and(|n| n.has_neighbor_at(other))
    }

    /// Outgoing connections of the node at `pos` (empty if there is none).
    #[inline]
    pub fn outgoing_connections(&self, pos: Point) -> &[Connection] {
        match self.node(pos) {
            Some(n) => n.outgoing_connections(),
            None => &[],
        }
    }

    fn slot(&self, pos: Point) -> Result<usize, GraphError> {
        self.by_pos
            .get(&pos)
            .copied()
            .ok_or(GraphError::UnknownCoordinate(pos))
    }
}
