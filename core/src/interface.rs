//! Boundary between the game core and whatever presents it.
//!
//! Input arrives as [`InputEvent`]s, and everything the presentation layer
//! must redraw or announce leaves as [`Notification`]s through a
//! [`Presenter`].

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickKind {
    /// Reveals the cell.
    Primary,
    /// Toggles the flag on the cell.
    Secondary,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Click { coords: Coord2, kind: ClickKind },
    /// Sent after a finished game has been acknowledged, or to start over.
    ResetRequested,
}

impl InputEvent {
    pub const fn primary(coords: Coord2) -> Self {
        Self::Click {
            coords,
            kind: ClickKind::Primary,
        }
    }

    pub const fn secondary(coords: Coord2) -> Self {
        Self::Click {
            coords,
            kind: ClickKind::Secondary,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// A single cell changed, `label` is one of `""`, `"F"`, `"M"`, `" "` or a digit.
    CellUpdated {
        row: Coord,
        col: Coord,
        label: String,
        enabled: bool,
    },
    /// The game reached a terminal state, the presentation layer answers with
    /// [`InputEvent::ResetRequested`] once the player acknowledged it.
    GameEnded {
        outcome: Outcome,
        message: String,
        elapsed_secs: Option<u32>,
    },
    /// Every cell returns to its hidden, enabled display.
    BoardReset,
    TimerTick {
        elapsed_secs: u32,
    },
}

impl Notification {
    pub fn cell_updated((row, col): Coord2, view: CellView) -> Self {
        Self::CellUpdated {
            row,
            col,
            label: view.label(),
            enabled: view.is_enabled(),
        }
    }
}

pub trait Presenter {
    fn notify(&mut self, notification: Notification);
}

/// Records every notification, handy for headless play and tests.
impl Presenter for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}
