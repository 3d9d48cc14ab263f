use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Rows or columns outside `1..=50`, or at least as many mines as cells.
    #[error("Invalid board configuration: {rows}x{cols} with {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    /// The first reveal could not get a usable mine layout.
    #[error("Mine placement failed: {0}")]
    PlacementImpossible(PlacementError),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("cannot place {mines} mines, only {candidates} eligible cells")]
    TooFewCandidates {
        mines: CellCount,
        candidates: CellCount,
    },
    #[error("layout has {mines} mines on {size:?}, expected {expected_mines} on {expected_size:?}")]
    LayoutMismatch {
        size: Coord2,
        mines: CellCount,
        expected_size: Coord2,
        expected_mines: CellCount,
    },
    #[error("layout has a mine on the first revealed cell {start:?}")]
    MineOnStart { start: Coord2 },
}

pub type Result<T> = core::result::Result<T, GameError>;
