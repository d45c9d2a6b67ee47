use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cell matrix with mine placement, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord2,
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Board without any mines, every cell hidden.
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self {
            size,
            cells: Array2::default(size.to_nd_index()),
            mine_count: 0,
        })
    }

    /// Board with mines exactly at `mine_coords`, duplicates are counted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size)?;
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.place_mine(coords);
        }
        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size.0 && coords.1 < self.size.1
    }

    /// Clears the board and places `mines` mines by sampling uniformly random
    /// coordinates, rejecting duplicates.
    pub fn reset<R: Rng>(&mut self, mines: CellCount, rng: &mut R) -> Result<()> {
        if mines > self.total_cells() {
            return Err(GameError::TooManyMines);
        }

        self.clear();
        let mut attempts = 0u32;
        while self.mine_count < mines {
            let coords = (
                rng.random_range(0..self.size.0),
                rng.random_range(0..self.size.1),
            );
            attempts += 1;
            if !self.is_mine(coords) {
                self.place_mine(coords);
            }
        }
        log::debug!(
            "Placed {} mines on {:?} board in {} attempts",
            self.mine_count,
            self.size,
            attempts
        );
        Ok(())
    }

    /// Resets every cell to hidden, unflagged and mine-free.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.mine_count = 0;
    }

    /// Places a mine on an in-bounds cell, returns whether the cell was mine-free before.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        match self.cells.get_mut(coords.to_nd_index()) {
            Some(cell) if !cell.is_mine => {
                cell.is_mine = true;
                self.mine_count += 1;
                true
            }
            _ => false,
        }
    }

    /// Cell at `coords`, or `None` when outside the grid.
    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn view(&self, coords: Coord2) -> Option<CellView> {
        self.cell(coords).map(|cell| cell.view())
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.cell(coords).is_some_and(|cell| cell.is_mine)
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.cell(coords).is_some_and(|cell| cell.revealed)
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.cell(coords).is_some_and(|cell| cell.flagged)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }

    /// All in-bounds coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        let mut count = 0;
        for pos in self.iter_neighbors(coords) {
            if self.is_mine(pos) {
                count += 1;
            }
        }
        count
    }

    /// Marks the cell revealed and records its adjacent mine count, returns the resulting view.
    pub fn set_revealed(&mut self, coords: Coord2) -> Option<CellView> {
        let adjacent_mines = self.count_adjacent_mines(coords);
        let cell = self.cells.get_mut(coords.to_nd_index())?;
        cell.revealed = true;
        cell.flagged = false;
        if !cell.is_mine {
            cell.adjacent_mines = adjacent_mines;
        }
        Some(cell.view())
    }

    /// Flips the flag on an unrevealed cell, returns whether anything changed.
    pub fn toggle_flag(&mut self, coords: Coord2) -> bool {
        match self.cells.get_mut(coords.to_nd_index()) {
            Some(cell) if !cell.revealed => {
                cell.flagged = !cell.flagged;
                true
            }
            _ => false,
        }
    }

    pub fn count_unrevealed_safe_cells(&self) -> CellCount {
        self.count_cells(|cell| !cell.is_mine && !cell.revealed)
    }

    pub fn count_correct_flags(&self) -> CellCount {
        self.count_cells(|cell| cell.flagged && cell.is_mine)
    }

    pub fn count_total_flags(&self) -> CellCount {
        self.count_cells(|cell| cell.flagged)
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        let mut count = 0;
        for cell in self.cells.iter() {
            if predicate(cell) {
                count += 1;
            }
        }
        count
    }
}
