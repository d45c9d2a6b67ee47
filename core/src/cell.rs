use core::fmt;
use serde::{Deserialize, Serialize};

/// Full state of a single board cell, including what the player cannot see.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Only meaningful once the cell is revealed and not a mine.
    pub adjacent_mines: u8,
}

impl Cell {
    pub const fn view(self) -> CellView {
        match (self.revealed, self.is_mine, self.flagged) {
            (true, true, _) => CellView::Mine,
            (true, false, _) => CellView::Revealed(self.adjacent_mines),
            (false, _, true) => CellView::Flagged,
            (false, _, false) => CellView::Hidden,
        }
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    /// Whether the presentation layer should keep accepting clicks on the cell.
    pub const fn is_enabled(self) -> bool {
        self.is_unrevealed()
    }

    /// Label shown on the cell, a revealed empty cell gets a single blank.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => Ok(()),
            Self::Flagged => f.write_str("F"),
            Self::Revealed(0) => f.write_str(" "),
            Self::Revealed(count) => write!(f, "{count}"),
            Self::Mine => f.write_str("M"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_classic_convention() {
        assert_eq!(CellView::Hidden.label(), "");
        assert_eq!(CellView::Flagged.label(), "F");
        assert_eq!(CellView::Revealed(0).label(), " ");
        assert_eq!(CellView::Revealed(3).label(), "3");
        assert_eq!(CellView::Mine.label(), "M");
    }

    #[test]
    fn view_prefers_revealed_over_flag() {
        let cell = Cell {
            is_mine: false,
            revealed: true,
            flagged: false,
            adjacent_mines: 2,
        };
        assert_eq!(cell.view(), CellView::Revealed(2));
        assert!(!cell.view().is_enabled());

        let flagged = Cell {
            flagged: true,
            ..Cell::default()
        };
        assert_eq!(flagged.view(), CellView::Flagged);
        assert!(flagged.view().is_enabled());
    }
}
