//! Reveal engine: flood-fill reveal and flag toggling over an explicit [`Board`].

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    /// At least one safe cell was revealed.
    Revealed,
    HitMine,
}

fn can_reveal(board: &Board, coords: Coord2) -> bool {
    board
        .cell(coords)
        .is_some_and(|cell| !cell.revealed && !cell.flagged)
}

/// Reveals `start` and, when it has no adjacent mines, flood-fills outwards.
///
/// Out-of-grid, already revealed and flagged cells are skipped when popped.
/// A cell is marked revealed before its neighbours are queued, which is what
/// bounds the fill. Hitting a mine stops immediately; it can only be the starting cell
/// since the fill only expands from cells without adjacent mines.
pub fn reveal<P: Presenter + ?Sized>(
    board: &mut Board,
    start: Coord2,
    presenter: &mut P,
) -> RevealOutcome {
    let mut pending = vec![start];
    let mut revealed_count: CellCount = 0;

    while let Some(coords) = pending.pop() {
        if !can_reveal(board, coords) {
            continue;
        }
        let Some(view) = board.set_revealed(coords) else {
            continue;
        };
        presenter.notify(Notification::cell_updated(coords, view));

        match view {
            CellView::Mine => {
                log::debug!("Hit mine at {:?}", coords);
                return RevealOutcome::HitMine;
            }
            CellView::Revealed(0) => pending.extend(board.iter_neighbors(coords)),
            _ => {}
        }
        revealed_count += 1;
        log::trace!("Revealed {:?} as {:?}", coords, view);
    }

    if revealed_count == 0 {
        RevealOutcome::NoChange
    } else {
        log::debug!("Reveal from {:?} opened {} cells", start, revealed_count);
        RevealOutcome::Revealed
    }
}

/// Flips the flag on an unrevealed cell, revealed and out-of-grid cells are left alone.
pub fn toggle_flag<P: Presenter + ?Sized>(
    board: &mut Board,
    coords: Coord2,
    presenter: &mut P,
) -> MarkOutcome {
    if !board.toggle_flag(coords) {
        return MarkOutcome::NoChange;
    }
    if let Some(view) = board.view(coords) {
        presenter.notify(Notification::cell_updated(coords, view));
    }
    MarkOutcome::Changed
}
