pub mod a_star;
mod shortest_path;

pub use a_star::{AStar, SearchNode, SearchOutcome, SearchStats, Solution};
pub use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::grid::CellId;

/// Integer path cost, also used as the heap priority (g + h)
pub type Cost = i64;

/// Type alias for the node map used in path planning algorithms
/// Maps each Cell ID the search has recorded to its latest node, which carries
/// the best known cost and the parent link used to rebuild the path
pub type GraphNodeMap = FxIndexMap<CellId, SearchNode>;
