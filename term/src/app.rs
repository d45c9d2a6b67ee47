use std::io::{BufRead, Write};

use anyhow::Context;
use sapper_core::{GameConfig, GameSession, InputEvent, MineGenerator};

use crate::command::{Command, HELP};
use crate::frontend::Frontend;

/// Reads commands from `input` until it runs dry or the player quits.
pub fn run<G, F>(
    config: GameConfig,
    generator: G,
    frontend: F,
    input: impl BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<GameSession<G, F>>
where
    G: MineGenerator,
    F: Frontend,
{
    let mut session =
        GameSession::new(config, generator, frontend).context("could not start a game")?;
    let mut lines = input.lines();

    loop {
        session.tick();
        session.presenter_mut().flush_to(out)?;

        if let Some(message) = session.presenter_mut().take_game_end() {
            if session.presenter().prompt().is_some() {
                writeln!(out, "{message}")?;
                out.flush()?;
                // any line, or end of input, acknowledges the dialog
                if lines.next().transpose()?.is_none() {
                    break;
                }
            }
            session.handle(InputEvent::ResetRequested)?;
            continue;
        }

        if let Some(prompt) = session.presenter().prompt() {
            write!(out, "{prompt}")?;
            out.flush()?;
        }
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let interactive = session.presenter().prompt().is_some();
        match line.parse::<Command>() {
            Ok(Command::Nothing) => {}
            Ok(Command::Quit) => break,
            Ok(Command::Help) if interactive => writeln!(out, "{HELP}")?,
            Ok(Command::Help) => {}
            Ok(Command::Event(event)) => match session.handle(event) {
                Ok(outcome) if outcome.has_update() => {
                    log::debug!("{:?} -> {:?}", event, outcome)
                }
                Ok(_) => log::trace!("{:?} changed nothing", event),
                Err(err) if interactive => writeln!(out, "error: {err}")?,
                Err(err) => log::error!("{:?} rejected: {}", event, err),
            },
            Err(err) if interactive => writeln!(out, "{err}")?,
            Err(err) => log::error!("{:?}: {}", line, err),
        }
    }

    session.presenter_mut().flush_to(out)?;
    out.flush()?;
    Ok(session)
}
