use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use clock::*;
pub use engine::{MarkOutcome, RevealOutcome};
pub use error::*;
pub use generator::*;
pub use interface::*;
pub use rules::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod clock;
pub mod engine;
mod error;
mod generator;
mod interface;
mod rules;
mod session;
mod types;

/// Rows of the classic board.
pub const ROWS: Coord = 10;
/// Columns of the classic board.
pub const COLS: Coord = 10;
/// Mines on the classic board.
pub const MINES: CellCount = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(rows, cols)`
    pub size: Coord2,
    pub mines: CellCount,
    #[serde(default)]
    pub rules: Rules,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount, rules: Rules) -> Self {
        Self { size, mines, rules }
    }

    pub fn new(size: Coord2, mines: CellCount, rules: Rules) -> Result<Self> {
        let config = Self::new_unchecked(size, mines, rules);
        config.validate()?;
        Ok(config)
    }

    /// 10×10 board with 10 mines.
    pub const fn classic() -> Self {
        Self::new_unchecked((ROWS, COLS), MINES, Rules::CLASSIC)
    }

    pub const fn with_rules(self, rules: Rules) -> Self {
        Self { rules, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        if self.mines > self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        self.rules.validate()
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
