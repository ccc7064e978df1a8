use git_version::git_version;

pub use codec::*;
pub use commands::*;
pub use types::*;

mod codec;
mod commands;
mod types;

pub fn version() -> String {
  const MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");
  const MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");
  const PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");

  let commit = git_version!(fallback = "unknown commit");

  if PATCH == "0" {
    format!("{MAJOR}.{MINOR:0>2} ({commit})")
  } else {
    format!("{MAJOR}.{MINOR:0>2}.{PATCH} ({commit})")
  }
}
