use serde::{Deserialize, Serialize};

use crate::*;

pub const LOSS_MESSAGE: &str = "You hit a mine! Game Over!";

/// When a game counts as won.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinCondition {
    /// Every non-mine cell is revealed.
    #[default]
    SafeCellsRevealed,
    /// Every mine is flagged and nothing else is.
    MinesFlagged,
}

impl WinCondition {
    pub fn is_met(self, board: &Board) -> bool {
        match self {
            Self::SafeCellsRevealed => board.count_unrevealed_safe_cells() == 0,
            Self::MinesFlagged => {
                board.count_correct_flags() == board.mine_count()
                    && board.count_total_flags() == board.mine_count()
            }
        }
    }

    /// Whether toggling a flag can change the verdict.
    pub const fn depends_on_flags(self) -> bool {
        matches!(self, Self::MinesFlagged)
    }

    pub const fn victory_message(self) -> &'static str {
        match self {
            Self::SafeCellsRevealed => "Congratulations! You cleared the minefield and won!",
            Self::MinesFlagged => "Congratulations! You flagged all the mines correctly and won!",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub win_condition: WinCondition,
    /// Secondary clicks toggle flags, otherwise they are ignored.
    pub flagging: bool,
    /// Track elapsed time, emit ticks and report it when the game ends.
    pub timer: bool,
}

impl Rules {
    pub const CLASSIC: Self = Self {
        win_condition: WinCondition::SafeCellsRevealed,
        flagging: true,
        timer: true,
    };

    pub fn validate(&self) -> Result<()> {
        if self.win_condition.depends_on_flags() && !self.flagging {
            Err(GameError::UnwinnableRules)
        } else {
            Ok(())
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_cells_condition() {
        let mut board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let condition = WinCondition::SafeCellsRevealed;

        board.set_revealed((0, 1));
        board.set_revealed((1, 0));
        assert!(!condition.is_met(&board));

        board.set_revealed((1, 1));
        assert!(condition.is_met(&board));
    }

    #[test]
    fn flag_condition_rejects_extra_flags() {
        let mut board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let condition = WinCondition::MinesFlagged;

        board.toggle_flag((0, 0));
        assert!(condition.is_met(&board));

        board.toggle_flag((1, 1));
        assert!(!condition.is_met(&board));
    }

    #[test]
    fn flag_victory_needs_flagging() {
        let rules = Rules {
            win_condition: WinCondition::MinesFlagged,
            flagging: false,
            timer: true,
        };
        assert_eq!(rules.validate(), Err(GameError::UnwinnableRules));
        assert_eq!(Rules::default().validate(), Ok(()));
    }
}
