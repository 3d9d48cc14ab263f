use serde::{Deserialize, Serialize};

/// One grid position as stored by the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) adjacent_mine_count: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    /// Only meaningful for cells without a mine.
    pub const fn adjacent_mine_count(self) -> u8 {
        self.adjacent_mine_count
    }

    pub const fn display(self) -> CellDisplay {
        match (self.is_revealed, self.is_mine, self.is_flagged) {
            (true, true, _) => CellDisplay::Mine,
            (true, false, _) => CellDisplay::Number(self.adjacent_mine_count),
            (false, _, true) => CellDisplay::Flagged,
            (false, _, false) => CellDisplay::Unrevealed,
        }
    }
}

/// What a display layer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellDisplay {
    Mine,
    Flagged,
    Unrevealed,
    Number(u8),
}

impl CellDisplay {
    pub const fn symbol(self) -> char {
        match self {
            Self::Mine => 'M',
            Self::Flagged => 'F',
            Self::Unrevealed => '?',
            Self::Number(count) => (b'0' + count) as char,
        }
    }
}
