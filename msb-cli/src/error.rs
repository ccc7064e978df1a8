use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Failed to write to stdout")]
  Stdout(#[source] io::Error),
}
