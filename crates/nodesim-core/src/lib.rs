//! **nodesim-core**: positioned, weighted, directed graphs.
//!
//! This crate provides the graph model shared across the *nodesim*
//! workspace:
//!
//! - [`Point`] coordinates, which double as node keys,
//! - [`Node`]s with their outgoing [`Connection`]s, identified by
//!   [`NodeId`]s handed out by an [`IdAllocator`],
//! - the [`Layout`] that owns every node,
//! - layout [`generate`]ors (grid, recursive octagon),
//! - the plain-text layout file format in [`io`].
//!
//! Node equality is structural: two nodes at the same coordinates compare
//! and hash equal regardless of id or name.

pub mod error;
pub mod generate;
pub mod geom;
pub mod io;
pub mod layout;
pub mod node;

pub use error::{GraphError, LoadError};
pub use geom::{Bounds, Point};
pub use layout::Layout;
pub use node::{Connection, IdAllocator, Node, NodeId, DEFAULT_LENGTH};
