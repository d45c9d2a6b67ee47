use clap::{Parser, ValueEnum};
use sapper_core::{GameConfig, RandomMineGenerator, Rules, WinCondition};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum WinArg {
    /// Reveal every safe cell
    Reveal,
    /// Flag every mine and nothing else
    Flags,
}

impl From<WinArg> for WinCondition {
    fn from(arg: WinArg) -> Self {
        match arg {
            WinArg::Reveal => WinCondition::SafeCellsRevealed,
            WinArg::Flags => WinCondition::MinesFlagged,
        }
    }
}

/// Minesweeper on a 10×10 board with 10 mines
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How a game is won
    #[arg(long, value_enum, default_value_t = WinArg::Reveal)]
    pub win: WinArg,

    /// Ignore flag commands
    #[arg(long)]
    pub no_flags: bool,

    /// Do not track elapsed time
    #[arg(long)]
    pub no_timer: bool,

    /// Emit notifications as JSON lines instead of drawing the board
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn rules(&self) -> Rules {
        Rules {
            win_condition: self.win.into(),
            flagging: !self.no_flags,
            timer: !self.no_timer,
        }
    }

    pub fn game_config(&self) -> sapper_core::Result<GameConfig> {
        let config = GameConfig::classic().with_rules(self.rules());
        config.validate()?;
        Ok(config)
    }

    pub fn generator(&self) -> RandomMineGenerator {
        match self.seed {
            Some(seed) => RandomMineGenerator::new(seed),
            None => RandomMineGenerator::from_entropy(),
        }
    }
}
