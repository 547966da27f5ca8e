use thiserror::Error;

use crate::grid::CellId;


/// Errors raised by the indexed heap
/// Both variants are invariant violations on the caller's side, never soft misses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("key {0} is already present in the heap")]
    DuplicateKey(String), // Insert of a key the heap already holds

    #[error("key {0} is not present in the heap")]
    KeyNotFound(String), // Lookup or removal of an absent key
}

/// Errors raised while building or querying a grid graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell id {id} is outside the grid of {len} cells")]
    OutOfRange { id: CellId, len: usize },

    #[error("coordinate ({x}, {y}) is outside the grid")]
    CoordinateOutOfRange { x: usize, y: usize },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("expected {expected} cells, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("byte {0} is not a known cell type")]
    UnknownCellType(u8),

    #[error("symbol {symbol:?} at row {row}, column {column} is not a known cell type")]
    UnknownSymbol { symbol: char, row: usize, column: usize },

    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has no finish cell")]
    MissingFinish,

    #[error("a {width} x {height} grid has more cells than can be addressed")]
    TooLarge { width: usize, height: usize },
}

#[derive(Debug, Error)]
pub enum PathPlannerError {
    #[error(transparent)]
    Heap(#[from] HeapError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    #[error("path cost overflowed while expanding cell {0}")]
    CostOverflow(CellId), // Step cost plus heuristic no longer fits in a Cost

    #[error("parent {0} is missing from the search tree")]
    MissingParent(CellId), // A parent link points at a node the search never recorded

    #[error("parent links form a cycle")]
    BrokenParentChain,
}
