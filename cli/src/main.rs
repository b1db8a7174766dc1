mod args;
mod banner;
mod commands;
mod error;
mod wrapper;

use args::{Cli, Command, with_default_command};
use clap::Parser;
use error::CliError;
use logo_rendr::RESET;

const RED: &str = "\x1b[31m";

fn main() {
    // Configure logging (RUST_LOG=debug shows pipeline details on stderr)
    env_logger::init();

    let cli = Cli::parse_from(with_default_command(std::env::args_os()));

    if let Err(e) = run(cli) {
        log::debug!("command failed: {e:?}");
        eprintln!("{RED}Error: {e}{RESET}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert(args) => commands::convert(&args),
        Command::Init(args) => commands::init(&args),
    }
}
