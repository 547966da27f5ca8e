use crate::errors::GridError;


/// Classified maze cell
/// The byte values are the encoding used by the cell-type arrays a grid is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellType {
    Start = 0,
    Finish = 1,
    SolutionPath = 2, // Path cell drawn over by a solution
    Path = 3,
    Wall = 4,
}

impl CellType {

    /// Everything except a wall can be stepped on
    pub fn is_walkable(self) -> bool {
        self != CellType::Wall
    }

    /// ASCII symbol used when rendering a maze
    pub fn symbol(self) -> char {
        match self {
            CellType::Start => '@',
            CellType::Finish => 'X',
            CellType::SolutionPath => 'o',
            CellType::Path => '.',
            CellType::Wall => '#',
        }
    }

    /// Parse an ASCII symbol, also accepting ' ' for Path and '*' for Wall
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '@' => Some(CellType::Start),
            'X' => Some(CellType::Finish),
            'o' => Some(CellType::SolutionPath),
            '.' | ' ' => Some(CellType::Path),
            '#' | '*' => Some(CellType::Wall),
            _ => None,
        }
    }
}

impl TryFrom<u8> for CellType {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellType::Start),
            1 => Ok(CellType::Finish),
            2 => Ok(CellType::SolutionPath),
            3 => Ok(CellType::Path),
            4 => Ok(CellType::Wall),
            other => Err(GridError::UnknownCellType(other)),
        }
    }
}

impl From<CellType> for u8 {
    fn from(cell: CellType) -> Self {
        cell as u8
    }
}
