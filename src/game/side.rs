use crate::error::RuleError;

use super::board::Cell;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get the opposing side
    pub fn flip(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Convert side to the cell state its discs occupy
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl TryFrom<Cell> for Side {
    type Error = RuleError;

    /// Black and White cells name a side; an empty cell does not.
    fn try_from(cell: Cell) -> Result<Self, RuleError> {
        match cell {
            Cell::Black => Ok(Side::Black),
            Cell::White => Ok(Side::White),
            Cell::Empty => Err(RuleError::UnrecognizedSide(cell)),
        }
    }
}
