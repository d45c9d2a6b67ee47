use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
/// - Won | Lost -> Playing, only through a reset
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What handling a single [`InputEvent`] did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    NoChange,
    Updated,
    Won,
    Lost,
    Reset,
}

impl EventOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One player's game from reset to reset, owning the board and talking to the presentation layer.
#[derive(Debug)]
pub struct GameSession<G, P> {
    config: GameConfig,
    board: Board,
    generator: G,
    presenter: P,
    state: GameState,
    stopwatch: Stopwatch,
    last_tick: Option<u32>,
}

impl<G: MineGenerator, P: Presenter> GameSession<G, P> {
    /// Validates `config` and lays out the first board.
    pub fn new(config: GameConfig, generator: G, presenter: P) -> Result<Self> {
        config.validate()?;
        let mut session = Self {
            config,
            board: Board::new(config.size)?,
            generator,
            presenter,
            state: GameState::Playing,
            stopwatch: Stopwatch::start(),
            last_tick: None,
        };
        session.reset()?;
        Ok(session)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Seconds spent on the current game, `None` when the timer rule is off.
    pub fn elapsed_secs(&self) -> Option<u32> {
        self.config
            .rules
            .timer
            .then(|| self.stopwatch.elapsed_secs())
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<EventOutcome> {
        match event {
            InputEvent::ResetRequested => {
                self.reset()?;
                Ok(EventOutcome::Reset)
            }
            InputEvent::Click { coords, kind } => {
                let coords = self.board.validate_coords(coords).inspect_err(|err| {
                    log::warn!("Rejected {:?} click at {:?}: {}", kind, coords, err);
                })?;
                self.check_playing().inspect_err(|err| {
                    log::warn!("Rejected {:?} click at {:?}: {}", kind, coords, err);
                })?;

                Ok(match kind {
                    ClickKind::Primary => self.reveal(coords),
                    ClickKind::Secondary => self.toggle_flag(coords),
                })
            }
        }
    }

    /// Lays out a fresh board and starts a new game, whatever the current state.
    pub fn reset(&mut self) -> Result<()> {
        self.generator
            .place_mines(&mut self.board, self.config.mines)?;
        self.state = GameState::Playing;
        self.stopwatch = Stopwatch::start();
        self.last_tick = None;
        log::debug!(
            "New game on {:?} board with {} mines and {} safe cells",
            self.board.size(),
            self.board.mine_count(),
            self.board.safe_cell_count()
        );

        self.presenter.notify(Notification::BoardReset);
        if self.config.rules.timer {
            self.last_tick = Some(0);
            self.presenter
                .notify(Notification::TimerTick { elapsed_secs: 0 });
        }
        Ok(())
    }

    /// Emits a timer tick when the displayed second changed, never touches the board.
    pub fn tick(&mut self) -> Option<u32> {
        if !self.config.rules.timer || !self.stopwatch.is_running() {
            return None;
        }

        let elapsed_secs = self.stopwatch.elapsed_secs();
        if self.last_tick == Some(elapsed_secs) {
            return None;
        }
        self.last_tick = Some(elapsed_secs);
        self.presenter
            .notify(Notification::TimerTick { elapsed_secs });
        Some(elapsed_secs)
    }

    fn reveal(&mut self, coords: Coord2) -> EventOutcome {
        match engine::reveal(&mut self.board, coords, &mut self.presenter) {
            RevealOutcome::NoChange => EventOutcome::NoChange,
            RevealOutcome::HitMine => self.end_game(Outcome::Lost),
            RevealOutcome::Revealed => self.check_victory(),
        }
    }

    fn toggle_flag(&mut self, coords: Coord2) -> EventOutcome {
        if !self.config.rules.flagging {
            log::debug!("Flagging disabled, ignoring flag at {:?}", coords);
            return EventOutcome::NoChange;
        }

        match engine::toggle_flag(&mut self.board, coords, &mut self.presenter) {
            MarkOutcome::NoChange => EventOutcome::NoChange,
            MarkOutcome::Changed if self.config.rules.win_condition.depends_on_flags() => {
                self.check_victory()
            }
            MarkOutcome::Changed => EventOutcome::Updated,
        }
    }

    fn check_victory(&mut self) -> EventOutcome {
        if self.config.rules.win_condition.is_met(&self.board) {
            self.end_game(Outcome::Won)
        } else {
            EventOutcome::Updated
        }
    }

    fn end_game(&mut self, outcome: Outcome) -> EventOutcome {
        self.stopwatch.stop();
        let (state, message, event_outcome) = match outcome {
            Outcome::Won => (
                GameState::Won,
                self.config.rules.win_condition.victory_message(),
                EventOutcome::Won,
            ),
            Outcome::Lost => (GameState::Lost, LOSS_MESSAGE, EventOutcome::Lost),
        };
        self.state = state;

        let elapsed_secs = self.elapsed_secs();
        let message = match elapsed_secs {
            Some(secs) => format!("{message}\nTime taken: {secs} seconds"),
            None => String::from(message),
        };
        log::info!("Game ended: {:?} after {:?}s", outcome, elapsed_secs);

        self.presenter.notify(Notification::GameEnded {
            outcome,
            message,
            elapsed_secs,
        });
        event_outcome
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
