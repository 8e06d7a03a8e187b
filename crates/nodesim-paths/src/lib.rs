//! **nodesim-paths**: shortest paths over nodesim layouts.
//!
//! Three interchangeable searches share one result type, [`Path`]:
//!
//! - [`dijkstra_path`]: frontier search, each node finalized once,
//! - [`astar_path`]: frontier search guided by a [`Heuristic`],
//! - [`exhaustive_path`]: backtracking over every simple path, a reference
//!   for small graphs.
//!
//! The frontier searches are driven by [`PriorityQueue`], a binary min-heap
//! that tolerates stale duplicate entries instead of offering decrease-key.
//! All searches run over the [`Pather`] trait, which
//! [`Layout`](nodesim_core::Layout) implements.
//!
//! ```
//! use nodesim_core::{Layout, Point, generate};
//! use nodesim_paths::{Distance, astar_path, dijkstra_path, heuristic_map};
//!
//! let mut layout = Layout::new();
//! generate::grid(&mut layout, 4, 1.0).unwrap();
//! let (start, goal) = (Point::new(0, 0), Point::new(3, 3));
//!
//! let d = dijkstra_path(&layout, start, goal).unwrap();
//! let h = heuristic_map(&layout, goal, Distance::Manhattan, 1.0);
//! let a = astar_path(&layout, &h, start, goal).unwrap();
//! assert_eq!(d.total_length(), 6.0);
//! assert_eq!(a.total_length(), d.total_length());
//! ```

pub mod astar;
pub mod dijkstra;
pub mod distance;
pub mod error;
pub mod exhaustive;
pub mod heuristic;
pub mod path;
pub mod queue;
pub mod search;
pub mod traits;

pub use astar::{astar_path, astar_path_with};
pub use dijkstra::{dijkstra_path, dijkstra_path_with};
pub use distance::{Distance, UnknownDistance, chebyshev, euclidean, manhattan};
pub use error::{PathError, QueueError};
pub use exhaustive::exhaustive_path;
pub use heuristic::{Heuristic, Zero, heuristic_map};
pub use path::{Path, PathStep};
pub use queue::PriorityQueue;
pub use search::{Algorithm, SearchOptions, SearchStats, UnknownAlgorithm};
pub use traits::Pather;
