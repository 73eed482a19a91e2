#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find Paths on Graphs where every Node has its own Cost.
//!
//! ## Introduction
//! Many maps are not uniform: walking through a swamp takes longer than walking along a road.
//! This crate models such maps as a directed [`Graph`] of [`GridNode`]s, where each Node charges
//! an `entry_cost` for stepping onto it. The Cost of a [`Path`] is the sum of the entry costs of
//! every Node it steps onto, so the Node a Path starts on is free.
//!
//! Three kinds of searches are provided:
//! - [`Graph::shortest_path`] finds the cheapest Path between two Nodes using A*, optionally
//!   giving up on Paths more expensive than a limit.
//! - [`Graph::all_paths`] finds the cheapest Path to every Node within a limit, for example to
//!   show every Tile a unit can move to this turn.
//! - [`Graph::absolute_paths`] finds the cheapest Path to every Node at exactly a given Cost.
//!
//! Every search is independent: it borrows the Graph, builds its own search tree, and throws it
//! away when it returns. Nothing is cached between searches, so the Graph can be changed freely
//! between them.
//!
//! ## Examples
//! Creating the Graph:
//! ```
//! use weighted_pathfinding::{prelude::*, Point};
//!
//! // -1 = no Node, otherwise the Cost of entering that Tile
//! let grid = [
//!     [1, 1, 1, 1, 1],
//!     [6, -1, -1, -1, 1],
//!     [1, 1, 1, 1, 1],
//!     [1, -1, -1, -1, -1],
//!     [1, 1, 1, 1, 1],
//! ];
//! let (width, height) = (grid[0].len(), grid.len());
//!
//! let (graph, ids) = Graph::from_grid(
//!     (width, height),
//!     |(x, y): Point| grid[y][x],
//!     &ManhattanNeighborhood::new(width, height),
//! );
//! ```
//! Graphs can just as well be built Node by Node with [`Graph::add_node`] and
//! [`Graph::add_exit`]. The positions of the Nodes are only used to guide [`Graph::shortest_path`].
//!
//! ### Pathfinding
//! Finding the Path to a single Goal:
//! ```
//! # use weighted_pathfinding::{prelude::*, Point};
//! # let grid = [
//! #     [1, 1, 1, 1, 1],
//! #     [6, -1, -1, -1, 1],
//! #     [1, 1, 1, 1, 1],
//! #     [1, -1, -1, -1, -1],
//! #     [1, 1, 1, 1, 1],
//! # ];
//! # let (width, height) = (grid[0].len(), grid.len());
//! # let (graph, ids) = Graph::from_grid(
//! #     (width, height),
//! #     |(x, y): Point| grid[y][x],
//! #     &ManhattanNeighborhood::new(width, height),
//! # );
//! let start = ids[&(0, 0)];
//! let goal = ids[&(4, 4)];
//!
//! let path = graph.shortest_path(start, goal, None).unwrap();
//! assert_eq!(path.distance(), 13);
//! assert_eq!(path.len(), 9);
//!
//! // the Goal is out of reach with a limit of 12
//! assert!(graph.shortest_path(start, goal, Some(12)).is_none());
//! ```
//!
//! Finding everything within reach:
//! ```
//! # use weighted_pathfinding::{prelude::*, Point};
//! # let grid = [
//! #     [1, 1, 1, 1, 1],
//! #     [6, -1, -1, -1, 1],
//! #     [1, 1, 1, 1, 1],
//! #     [1, -1, -1, -1, -1],
//! #     [1, 1, 1, 1, 1],
//! # ];
//! # let (width, height) = (grid[0].len(), grid.len());
//! # let (graph, ids) = Graph::from_grid(
//! #     (width, height),
//! #     |(x, y): Point| grid[y][x],
//! #     &ManhattanNeighborhood::new(width, height),
//! # );
//! let start = ids[&(0, 0)];
//!
//! let paths = graph.all_paths(start, None).unwrap();
//! assert_eq!(paths.len(), graph.len() - 1);
//!
//! let paths = graph.absolute_paths(start, 8).unwrap();
//! assert_eq!(paths.len(), 3);
//! ```
//!
//! ### Configuration
//! [`Graph::find_paths`] takes a [`FindPathsConfig`] for more control over which Paths are
//! collected and how the limit is applied.
//!
//! ### Logging
//! With the `log` feature enabled, every search reports its progress and duration on the
//! `trace` level of the [log](https://docs.rs/log) crate.

/// The Type used for entry costs and Path distances
pub type Cost = usize;

/// A shorthand for Points on a Grid
pub type Point = (usize, usize);

#[macro_use]
mod utils;

mod node_id;
pub use node_id::*;

mod graph;
pub use graph::{Graph, GridNode};

mod path;
pub use path::Path;

mod search;
pub use search::{Collect, FindPathsConfig, LimitPolicy};

pub mod neighbors;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
        Collect, Cost, FindPathsConfig, Graph, GridNode, LimitPolicy, NodeID, Path,
    };
}
