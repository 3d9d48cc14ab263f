use alloc::collections::VecDeque;
use core::fmt::{self, Write as _};
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// No moves are accepted anymore.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game from the first reveal to a win or loss.
///
/// Mines are placed by `P` on the first reveal, so that the revealed cell is
/// never a mine. Restarting means building a new board.
#[derive(Clone, Debug)]
pub struct Board<P = RandomMinePlacer> {
    config: GameConfig,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
    mines_placed: bool,
    triggered_mine: Option<Coord2>,
    placer: P,
}

#[cfg(feature = "std")]
impl Board {
    /// Board with an OS-seeded mine placer.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = GameConfig::new(rows, cols, mines)?;
        Self::with_placer(config, RandomMinePlacer::from_os_rng())
    }
}

impl Board {
    /// Board whose mine layout is fully determined by `seed` and the first reveal.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_placer(config, RandomMinePlacer::from_seed(seed))
    }
}

impl<R: Rng> Board<RandomMinePlacer<R>> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        Self::with_placer(config, RandomMinePlacer::new(rng))
    }
}

impl<P: MinePlacer> Board<P> {
    pub fn with_placer(config: GameConfig, placer: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cells: Array2::default(config.size().to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            state: GameState::default(),
            mines_placed: false,
            triggered_mine: None,
            placer,
        })
    }

    /// Flags or unflags a hidden cell.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.state.is_finished() {
            return MarkOutcome::NoChange;
        }

        let Some(cell) = self.cells.get_mut(coords.to_nd_index()) else {
            return MarkOutcome::NoChange;
        };
        if cell.is_revealed {
            return MarkOutcome::NoChange;
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        MarkOutcome::Changed
    }

    /// Reveals a hidden, unflagged cell, flood-filling through cells without adjacent mines.
    ///
    /// The first reveal places the mines. Only a broken [`MinePlacer`] makes this fail.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let Some(cell) = self.cell(coords) else {
            return Ok(NoChange);
        };
        if self.state.is_finished() || cell.is_revealed || cell.is_flagged {
            return Ok(NoChange);
        }

        if !self.mines_placed {
            if self.config.mines() > 0 {
                self.place_mines(coords)?;
            }
            self.mines_placed = true;
        }

        if self.cells[coords.to_nd_index()].is_mine {
            self.triggered_mine = Some(coords);
            self.disclose_mines();
            self.end_game(GameState::Lost);
            return Ok(HitMine);
        }

        let newly_revealed = self.flood_reveal(coords);
        log::debug!("Revealed {} cells from {:?}", newly_revealed, coords);

        if self.revealed_count == self.config.safe_cells() {
            self.end_game(GameState::Won);
            Ok(Won)
        } else {
            Ok(Revealed)
        }
    }

    fn place_mines(&mut self, start: Coord2) -> Result<()> {
        let layout = self.placer.place(self.config, start)?;
        if layout.size() != self.config.size() || layout.mine_count() != self.config.mines() {
            let error = PlacementError::LayoutMismatch {
                size: layout.size(),
                mines: layout.mine_count(),
                expected_size: self.config.size(),
                expected_mines: self.config.mines(),
            };
            log::error!("Rejected mine layout: {}", error);
            return Err(GameError::PlacementImpossible(error));
        }
        if layout.contains_mine(start) {
            let error = PlacementError::MineOnStart { start };
            log::error!("Rejected mine layout: {}", error);
            return Err(GameError::PlacementImpossible(error));
        }

        for coords in layout.iter_mines() {
            self.cells[coords.to_nd_index()].is_mine = true;
        }
        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            if !cell.is_mine {
                cell.adjacent_mine_count = layout.adjacent_mine_count((row as Coord, col as Coord));
            }
        }
        Ok(())
    }

    /// Returns how many cells were newly revealed.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let before = self.revealed_count;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_revealed || cell.is_mine || cell.is_flagged {
                continue;
            }

            cell.is_revealed = true;
            let adjacent_mines = cell.adjacent_mine_count;
            self.revealed_count += 1;
            log::trace!("Flood opened cell at {:?}, mine count: {}", coords, adjacent_mines);

            if adjacent_mines == 0 {
                to_visit.extend(
                    self.cells
                        .iter_neighbors(coords)
                        .filter(|&pos| !self.cells[pos.to_nd_index()].is_revealed),
                );
            }
        }

        self.revealed_count - before
    }

    fn disclose_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_revealed = true;
            if cell.is_flagged {
                cell.is_flagged = false;
                self.flagged_count -= 1;
            }
        }
    }

    fn end_game(&mut self, state: GameState) {
        debug_assert!(state.is_finished());
        if self.state.is_playing() {
            log::debug!(
                "Game ended {:?} with {}/{} safe cells revealed",
                state,
                self.revealed_count,
                self.config.safe_cells()
            );
            self.state = state;
        }
    }
}

impl<P> Board<P> {
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> Coord2 {
        self.config.size()
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// `None` only for coordinates outside the board.
    pub fn cell_display_state(&self, coords: Coord2) -> Option<CellDisplay> {
        self.cell(coords).map(Cell::display)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn total_safe_cells(&self) -> CellCount {
        self.config.safe_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines not yet accounted for by a flag; negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines()) - i32::from(self.flagged_count)
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }
}

/// `?` hidden, `F` flagged, `M` revealed mine, digits for revealed counts.
impl<P> fmt::Display for Board<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.outer_iter().enumerate() {
            if row_index > 0 {
                f.write_char('\n')?;
            }
            for (col_index, cell) in row.iter().enumerate() {
                if col_index > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(cell.display().symbol())?;
            }
        }
        Ok(())
    }
}
