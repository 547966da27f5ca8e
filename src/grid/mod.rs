//! Grid graph built from classified maze cells
//!
//! Cells are addressed by a [`CellId`], `x + width * y`. The graph is read-only once
//! built: a search only asks it for neighbours and coordinates.

use std::{fmt, str::FromStr};

use log::warn;

use crate::errors::GridError;

mod cell;

pub use cell::CellType;


/// Row-major cell index, `x + width * y`
pub type CellId = usize;

/// Offsets for North, East, South, West
const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];


/// Maze as a 4-connected grid graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    cells: Vec<CellType>, // row-major
    width: usize,
    height: usize,
    start: CellId,
    finish: CellId,
}

impl GridGraph {

    /// Build a graph from row-major cells
    /// The first Start and the first Finish in scan order are used, any later ones are
    /// logged and left in place as walkable cells
    pub fn new(cells: Vec<CellType>, width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch { expected, found: cells.len() });
        }

        let start = first_of(&cells, CellType::Start, width).ok_or(GridError::MissingStart)?;
        let finish = first_of(&cells, CellType::Finish, width).ok_or(GridError::MissingFinish)?;

        Ok(Self { cells, width, height, start, finish })
    }

    /// Build a graph from a 2-D array of cell-type bytes, one slice per row
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);

        let capacity = width.checked_mul(height).ok_or(GridError::TooLarge { width, height })?;
        let mut cells = Vec::with_capacity(capacity);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRow { row: y, expected: width, found: row.len() });
            }
            for &byte in row {
                cells.push(CellType::try_from(byte)?);
            }
        }

        Self::new(cells, width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, construction rejects grids without cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> CellId {
        self.start
    }

    pub fn finish(&self) -> CellId {
        self.finish
    }

    pub fn is_start(&self, id: CellId) -> bool {
        id == self.start
    }

    pub fn is_finish(&self, id: CellId) -> bool {
        id == self.finish
    }

    /// Cell id for an (x, y) coordinate
    pub fn id_of(&self, x: usize, y: usize) -> Result<CellId, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::CoordinateOutOfRange { x, y });
        }
        Ok(x + self.width * y)
    }

    /// (x, y) coordinate of a cell id
    pub fn coordinates_of(&self, id: CellId) -> Result<(usize, usize), GridError> {
        if id >= self.cells.len() {
            return Err(GridError::OutOfRange { id, len: self.cells.len() });
        }
        Ok((id % self.width, id / self.width))
    }

    pub fn cell_type(&self, id: CellId) -> Result<CellType, GridError> {
        self.cells
            .get(id)
            .copied()
            .ok_or(GridError::OutOfRange { id, len: self.cells.len() })
    }

    /// Walkable axis-aligned neighbours, in North, East, South, West order
    /// An out of range id or a wall cell has no neighbours
    pub fn neighbors(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        let origin = match self.cells.get(id) {
            Some(cell) if cell.is_walkable() => Some((id % self.width, id / self.width)),
            _ => None,
        };

        DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
            let (x, y) = origin?;
            let nx = x.checked_add_signed(dx).filter(|&nx| nx < self.width)?;
            let ny = y.checked_add_signed(dy).filter(|&ny| ny < self.height)?;
            let neighbor = nx + self.width * ny;
            self.cells[neighbor].is_walkable().then_some(neighbor)
        })
    }

    /// Copy of the cells with every Path cell on `path` marked as SolutionPath
    /// Start and Finish keep their own type
    pub fn annotate(&self, path: &[CellId]) -> Result<Vec<CellType>, GridError> {
        let mut cells = self.cells.clone();
        for &id in path {
            let cell = cells.get_mut(id).ok_or(GridError::OutOfRange { id, len: self.cells.len() })?;
            if *cell == CellType::Path {
                *cell = CellType::SolutionPath;
            }
        }
        Ok(cells)
    }

    /// ASCII rendering of the maze with `path` drawn on it
    pub fn render(&self, path: &[CellId]) -> Result<String, GridError> {
        let cells = self.annotate(path)?;
        Ok(render_cells(&cells, self.width))
    }
}

/// First cell of the given kind in row-major order, later duplicates are logged
fn first_of(cells: &[CellType], kind: CellType, width: usize) -> Option<CellId> {
    let mut matches = cells.iter().enumerate().filter(|(_, cell)| **cell == kind).map(|(id, _)| id);
    let first = matches.next()?;

    for duplicate in matches {
        warn!(
            "ignoring extra {:?} cell at ({}, {}), using ({}, {})",
            kind,
            duplicate % width,
            duplicate / width,
            first % width,
            first / width
        );
    }

    Some(first)
}

fn render_cells(cells: &[CellType], width: usize) -> String {
    let mut out = String::with_capacity(cells.len() + cells.len() / width);
    for row in cells.chunks(width) {
        out.extend(row.iter().map(|cell| cell.symbol()));
        out.push('\n');
    }
    out
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_cells(&self.cells, self.width))
    }
}

/// Parse an ASCII maze, one line per row
/// A single trailing newline is allowed, every other line must have the same width
impl FromStr for GridGraph {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let mut found = 0;
            for (x, symbol) in line.chars().enumerate() {
                let cell = CellType::from_symbol(symbol)
                    .ok_or(GridError::UnknownSymbol { symbol, row: y, column: x })?;
                cells.push(cell);
                found += 1;
            }

            if y == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::RaggedRow { row: y, expected: width, found });
            }
            height += 1;
        }

        Self::new(cells, width, height)
    }
}
