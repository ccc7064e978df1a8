use clap::Parser;

use cli::Cli;
use commands::handle_command;
use error::Error;

mod cli;
mod commands;
mod error;

fn main() -> Result<(), Error> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let command = Cli::parse();

  handle_command(command)
}
