use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement, every cell is equally likely to hold a mine.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    /// Reproducible generator, the same seed yields the same sequence of boards.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn place_mines(&mut self, board: &mut Board, mines: CellCount) -> Result<()> {
        board.reset(mines, &mut self.rng)
    }
}
