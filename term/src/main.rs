use std::io;

use clap::Parser;
use clap_verbosity_flag::Verbosity;

use crate::args::Args;
use crate::frontend::{JsonFrontend, TextFrontend};

mod app;
mod args;
mod command;
mod frontend;

/// Installs a stderr subscriber, `log` records from the core are bridged into it.
fn init_logging(verbose: &Verbosity) {
    tracing_subscriber::fmt()
        .with_max_level(verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);
    log::debug!("args: {:?}", args);

    let config = args.game_config()?;
    let generator = args.generator();
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let final_state = if args.json {
        app::run(config, generator, JsonFrontend::default(), stdin, &mut stdout)?.state()
    } else {
        let frontend = TextFrontend::new(config.size);
        app::run(config, generator, frontend, stdin, &mut stdout)?.state()
    };
    log::debug!("Exiting in state {:?}", final_state);
    Ok(())
}
