//! Maze solving on grid graphs
//!
//! A maze is a [`GridGraph`] of classified cells (Start, Finish, Path, Wall). [`AStar`]
//! searches it with an [`IndexedMinHeap`] as the open list, which supports removing and
//! re-inserting a node by its Cell ID when a cheaper path to it turns up.
//!
//! ```
//! use maze_pathfinder::{AStar, GridGraph};
//!
//! let graph: GridGraph = "@.#\n#.#\n#.X\n".parse().unwrap();
//! let outcome = AStar::default().plan(&graph).unwrap();
//!
//! let path = outcome.solution().unwrap().path().unwrap();
//! assert_eq!(graph.render(&path).unwrap(), "@o#\n#o#\n#oX\n");
//! ```

pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;

pub use collections::{HeapEntry, IndexedMinHeap};
pub use config::SearchConfig;
pub use errors::{GridError, HeapError, PathPlannerError};
pub use graph_algos::{AStar, Cost, SearchNode, SearchOutcome, SearchStats, Solution};
pub use grid::{CellId, CellType, GridGraph};
