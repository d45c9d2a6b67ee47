use crate::*;
pub use random::*;

mod random;

/// Strategy for laying mines on a board at the start of every game.
pub trait MineGenerator {
    /// Clears `board` and lays `mines` mines on it.
    fn place_mines(&mut self, board: &mut Board, mines: CellCount) -> Result<()>;
}

/// Lays the same mines on every reset, the requested count is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mine_coords: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mine_coords: &[Coord2]) -> Self {
        Self {
            mine_coords: mine_coords.to_vec(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn place_mines(&mut self, board: &mut Board, mines: CellCount) -> Result<()> {
        for &coords in &self.mine_coords {
            board.validate_coords(coords)?;
        }

        board.clear();
        for &coords in &self.mine_coords {
            board.place_mine(coords);
        }

        if board.mine_count() != mines {
            log::warn!(
                "Fixed layout count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                mines
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_survives_resets() {
        let mut generator = FixedMineGenerator::new(&[(0, 1), (2, 2)]);
        let mut board = Board::new((3, 3)).unwrap();

        for _ in 0..3 {
            generator.place_mines(&mut board, 2).unwrap();
            board.set_revealed((0, 0));

            generator.place_mines(&mut board, 2).unwrap();
            assert!(board.is_mine((0, 1)));
            assert!(board.is_mine((2, 2)));
            assert_eq!(board.mine_count(), 2);
            assert!(!board.is_revealed((0, 0)));
        }
    }

    #[test]
    fn fixed_layout_rejects_out_of_grid_mines() {
        let mut generator = FixedMineGenerator::new(&[(5, 5)]);
        let mut board = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(
            generator.place_mines(&mut board, 1),
            Err(GameError::InvalidCoords)
        );
        assert!(board.is_mine((1, 1)));
    }
}
