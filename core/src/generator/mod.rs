use alloc::vec::Vec;

use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Source of mine positions, consulted once on the first reveal of a board.
pub trait MinePlacer {
    /// Produces a layout of exactly `config.mines()` mines for a game whose first reveal is `start`.
    fn place(&mut self, config: GameConfig, start: Coord2) -> Result<MineLayout>;
}

impl<P: MinePlacer + ?Sized> MinePlacer for &mut P {
    fn place(&mut self, config: GameConfig, start: Coord2) -> Result<MineLayout> {
        (**self).place(config, start)
    }
}

/// Cells kept free of mines around the first reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SafeZone {
    /// Only the revealed cell.
    StartOnly,
    /// The revealed cell and its in-bounds neighbors.
    StartAndNeighbors,
}

impl SafeZone {
    pub fn contains(self, start: Coord2, coords: Coord2) -> bool {
        match self {
            Self::StartOnly => coords == start,
            Self::StartAndNeighbors => {
                coords.0.abs_diff(start.0) <= 1 && coords.1.abs_diff(start.1) <= 1
            }
        }
    }

    /// Every cell of the board outside this zone, in row-major order.
    pub fn candidates(self, config: GameConfig, start: Coord2) -> Vec<Coord2> {
        let (rows, cols) = config.size();
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&coords| !self.contains(start, coords))
            .collect()
    }
}
