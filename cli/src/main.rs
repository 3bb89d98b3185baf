mod args;
mod commands;
mod console;
mod logging;

use args::{Cli, Command};
use clap::Parser;
use common::GameConfig;
use log::error;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.verbose, cli.log_dir.as_deref()) {
        eprintln!("Failed to set up logging: {:#}", e);
        process::exit(1);
    }

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    match cli.cmd {
        Command::Validate(args) => commands::validate_cmd(args),
        Command::Shuffle(args) => commands::shuffle_cmd(args, &config),
        Command::Export(args) => commands::export_cmd(args),
        Command::Packs(args) => commands::packs_cmd(args),
        Command::Simulate(args) => commands::simulate_cmd(args, &config),
        Command::Play(args) => commands::play_cmd(args, &config),
    }
}
