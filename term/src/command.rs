use core::str::FromStr;

use sapper_core::{Coord, Coord2, InputEvent};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r ROW COL   reveal a cell (also: reveal)
  f ROW COL   toggle a flag (also: flag)
  n           start a new game (also: new)
  h           show this help (also: help)
  q           quit (also: quit)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Event(InputEvent),
    Help,
    Quit,
    Nothing,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unknown command {0:?}, type `help` for the list")]
    Unknown(String),
    #[error("`{0}` expects a row and a column")]
    MissingCoords(String),
    #[error("{0:?} is not a valid row or column")]
    InvalidCoord(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

fn parse_coords<'a>(
    name: &str,
    mut words: impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseCommandError> {
    let mut next_coord = || -> Result<Coord, ParseCommandError> {
        let word = words
            .next()
            .ok_or_else(|| ParseCommandError::MissingCoords(name.to_owned()))?;
        word.parse()
            .map_err(|_| ParseCommandError::InvalidCoord(word.to_owned()))
    };
    let row = next_coord()?;
    let col = next_coord()?;

    match words.next() {
        Some(extra) => Err(ParseCommandError::TrailingInput(extra.to_owned())),
        None => Ok((row, col)),
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Self::Nothing);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Event(InputEvent::primary(parse_coords(name, words)?)),
            "f" | "flag" => Self::Event(InputEvent::secondary(parse_coords(name, words)?)),
            "n" | "new" => Self::Event(InputEvent::ResetRequested),
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(name.to_owned())),
        };
        Ok(command)
    }
}
