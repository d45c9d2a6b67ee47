use std::io::{self, Write};

use ndarray::Array2;
use sapper_core::{Coord2, Notification, Outcome, Presenter, ToNdIndex};

/// A presenter the command loop can drain to a terminal.
pub trait Frontend: Presenter {
    /// Writes whatever changed since the previous call.
    fn flush_to(&mut self, out: &mut dyn Write) -> io::Result<()>;

    /// End-of-game message waiting for acknowledgment, cleared once taken.
    fn take_game_end(&mut self) -> Option<String>;

    /// Prompt to print before reading a command, `None` for non-interactive output.
    fn prompt(&self) -> Option<String>;
}

const HIDDEN: &str = ".";

/// Renders the board as a text grid with row and column headers.
#[derive(Debug)]
pub struct TextFrontend {
    labels: Array2<String>,
    elapsed_secs: Option<u32>,
    game_end: Option<(Outcome, String)>,
    dirty: bool,
}

impl TextFrontend {
    pub fn new(size: Coord2) -> Self {
        Self {
            labels: Array2::default(size.to_nd_index()),
            elapsed_secs: None,
            game_end: None,
            dirty: true,
        }
    }

    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        let (rows, cols) = self.labels.dim();

        write!(out, "   ")?;
        for col in 0..cols {
            write!(out, "{:>2}", col)?;
        }
        writeln!(out)?;

        for row in 0..rows {
            write!(out, "{:>2} ", row)?;
            for col in 0..cols {
                let label = self.labels[[row, col]].as_str();
                let shown = if label.is_empty() { HIDDEN } else { label };
                write!(out, "{:>2}", shown)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Presenter for TextFrontend {
    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::CellUpdated {
                row, col, label, ..
            } => {
                if let Some(cell) = self.labels.get_mut((row, col).to_nd_index()) {
                    *cell = label;
                    self.dirty = true;
                }
            }
            Notification::BoardReset => {
                self.labels.fill(String::new());
                self.game_end = None;
                self.dirty = true;
            }
            Notification::TimerTick { elapsed_secs } => {
                self.elapsed_secs = Some(elapsed_secs);
            }
            Notification::GameEnded {
                outcome, message, ..
            } => {
                self.game_end = Some((outcome, message));
            }
        }
    }
}

impl Frontend for TextFrontend {
    fn flush_to(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if self.dirty {
            self.render(out)?;
            self.dirty = false;
        }
        Ok(())
    }

    fn take_game_end(&mut self) -> Option<String> {
        self.game_end.take().map(|(outcome, message)| {
            let banner = match outcome {
                Outcome::Won => "*** You won ***",
                Outcome::Lost => "*** Boom ***",
            };
            format!("{banner}\n{message}\nPress Enter to play again.")
        })
    }

    fn prompt(&self) -> Option<String> {
        Some(match self.elapsed_secs {
            Some(secs) => format!("Time: {secs} sec > "),
            None => "> ".to_owned(),
        })
    }
}

/// Streams every notification as one JSON object per line.
#[derive(Debug, Default)]
pub struct JsonFrontend {
    pending: Vec<Notification>,
    game_end: Option<String>,
}

impl Presenter for JsonFrontend {
    fn notify(&mut self, notification: Notification) {
        match &notification {
            Notification::GameEnded { message, .. } => self.game_end = Some(message.clone()),
            Notification::BoardReset => self.game_end = None,
            _ => {}
        }
        self.pending.push(notification);
    }
}

impl Frontend for JsonFrontend {
    fn flush_to(&mut self, out: &mut dyn Write) -> io::Result<()> {
        for notification in self.pending.drain(..) {
            serde_json::to_writer(&mut *out, &notification)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn take_game_end(&mut self) -> Option<String> {
        self.game_end.take()
    }

    fn prompt(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapper_core::CellView;

    fn rendered(frontend: &mut TextFrontend) -> String {
        let mut out: Vec<u8> = Vec::new();
        frontend.flush_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_grid_shows_labels() {
        let mut frontend = TextFrontend::new((2, 3));
        frontend.notify(Notification::cell_updated((0, 1), CellView::Revealed(2)));
        frontend.notify(Notification::cell_updated((1, 0), CellView::Flagged));
        frontend.notify(Notification::cell_updated((1, 2), CellView::Revealed(0)));

        assert_eq!(
            rendered(&mut frontend),
            "    0 1 2\n 0  . 2 .\n 1  F .  \n"
        );
        // nothing changed, nothing written
        assert_eq!(rendered(&mut frontend), "");
    }

    #[test]
    fn text_reset_clears_labels_and_pending_end() {
        let mut frontend = TextFrontend::new((1, 2));
        frontend.notify(Notification::cell_updated((0, 0), CellView::Mine));
        frontend.notify(Notification::GameEnded {
            outcome: Outcome::Lost,
            message: "You hit a mine! Game Over!".into(),
            elapsed_secs: None,
        });
        frontend.notify(Notification::BoardReset);

        assert_eq!(frontend.take_game_end(), None);
        assert_eq!(rendered(&mut frontend), "    0 1\n 0  . .\n");
    }

    #[test]
    fn text_game_end_is_taken_once() {
        let mut frontend = TextFrontend::new((1, 1));
        frontend.notify(Notification::GameEnded {
            outcome: Outcome::Won,
            message: "done".into(),
            elapsed_secs: Some(3),
        });

        let message = frontend.take_game_end().unwrap();
        assert!(message.contains("You won"));
        assert!(message.contains("done"));
        assert_eq!(frontend.take_game_end(), None);
    }

    #[test]
    fn text_prompt_shows_timer() {
        let mut frontend = TextFrontend::new((1, 1));
        assert_eq!(frontend.prompt().as_deref(), Some("> "));

        frontend.notify(Notification::TimerTick { elapsed_secs: 12 });
        assert_eq!(frontend.prompt().as_deref(), Some("Time: 12 sec > "));
    }

    #[test]
    fn json_lines_are_tagged() {
        let mut frontend = JsonFrontend::default();
        frontend.notify(Notification::BoardReset);
        frontend.notify(Notification::cell_updated((1, 2), CellView::Revealed(3)));
        frontend.notify(Notification::GameEnded {
            outcome: Outcome::Won,
            message: "yay".into(),
            elapsed_secs: None,
        });

        let mut out: Vec<u8> = Vec::new();
        frontend.flush_to(&mut out).unwrap();
        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines[0], serde_json::json!({ "type": "board_reset" }));
        assert_eq!(
            lines[1],
            serde_json::json!({
                "type": "cell_updated",
                "row": 1,
                "col": 2,
                "label": "3",
                "enabled": false
            })
        );
        assert_eq!(
            lines[2],
            serde_json::json!({
                "type": "game_ended",
                "outcome": "won",
                "message": "yay",
                "elapsed_secs": null
            })
        );
        assert!(frontend.pending.is_empty());
        assert_eq!(frontend.take_game_end().as_deref(), Some("yay"));
        assert_eq!(frontend.take_game_end(), None);
    }
}
