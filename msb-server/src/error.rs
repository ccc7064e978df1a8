use std::{error::Error, io};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
  #[error("Failed to register signal handlers: {0}")]
  RegisterSignals(#[source] io::Error),

  #[error("Failed to read host commands: {0}")]
  ReadCommands(#[source] io::Error),

  #[error("Failed to write actions: {0}")]
  WriteActions(#[source] io::Error),

  #[error("Event source {name} failed: {source}")]
  Source {
    name: &'static str,
    source: Box<dyn Error + Send + Sync>,
  },
}
