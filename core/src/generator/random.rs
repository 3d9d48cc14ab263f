use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement that keeps the first revealed cell, and where the board
/// has room its neighbors too, free of mines.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer<R = SmallRng> {
    rng: R,
}

impl RandomMinePlacer {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    #[cfg(feature = "std")]
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> RandomMinePlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> MinePlacer for RandomMinePlacer<R> {
    fn place(&mut self, config: GameConfig, start: Coord2) -> Result<MineLayout> {
        let mines = usize::from(config.mines());

        let mut zone = SafeZone::StartAndNeighbors;
        let mut candidates = zone.candidates(config, start);
        if candidates.len() < mines {
            log::warn!(
                "Cannot keep neighbors of {:?} free of {} mines, fallback to start cell only",
                start,
                mines
            );
            zone = SafeZone::StartOnly;
            candidates = zone.candidates(config, start);
        }
        if candidates.len() < mines {
            return Err(GameError::PlacementImpossible(
                PlacementError::TooFewCandidates {
                    mines: config.mines(),
                    // never more than 50 * 50 cells
                    candidates: candidates.len() as CellCount,
                },
            ));
        }

        let mut layout = MineLayout::empty(config.size());
        for picked in index::sample(&mut self.rng, candidates.len(), mines) {
            layout.insert(candidates[picked]);
        }

        log::debug!(
            "Placed {} mines from {} candidates, start {:?}, safe zone {:?}",
            layout.mine_count(),
            candidates.len(),
            start,
            zone
        );
        Ok(layout)
    }
}
