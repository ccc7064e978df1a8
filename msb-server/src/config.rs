use std::str::FromStr;

use clap::{Parser, ValueEnum};
use msb_actions::{CanonicalAction, UnknownAction};
use msb_dispatcher::ToggleKind;

/// Bridges media buttons to a host application over stdin/stdout
///
/// Host commands are read from stdin and dispatched actions are written to
/// stdout, one JSON object per line.
#[derive(Debug, Parser)]
#[command(about)]
pub struct Config {
  /// Suffix of the MPRIS bus name, `org.mpris.MediaPlayer2.<BUS_NAME>`
  #[arg(long, env = "MSB_BUS_NAME", default_value = "dev.msb.MediaSessionBridge")]
  pub bus_name: String,

  /// How ambiguous play/pause signals are resolved
  #[arg(long, env = "MSB_TOGGLE", value_enum, default_value_t = Toggle::StateAware)]
  pub toggle: Toggle,

  /// Actions that have a handler before the host registers any
  #[arg(long, env = "MSB_HANDLERS", value_delimiter = ',', value_parser = parse_action)]
  pub handlers: Vec<CanonicalAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
  /// Choose play or pause from the reported playback state
  StateAware,
  /// Always send pause flagged as a toggle and let the host decide
  FlagDelegated,
}

impl From<Toggle> for ToggleKind {
  fn from(toggle: Toggle) -> Self {
    match toggle {
      Toggle::StateAware => ToggleKind::StateAware,
      Toggle::FlagDelegated => ToggleKind::FlagDelegated,
    }
  }
}

fn parse_action(s: &str) -> Result<CanonicalAction, UnknownAction> {
  CanonicalAction::from_str(s)
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn config_is_well_formed() {
    Config::command().debug_assert();
  }

  #[test]
  fn parses_handler_list() {
    let config = Config::try_parse_from(["msb-server", "--handlers", "play,pause,seekto"]).unwrap();

    assert_eq!(
      config.handlers,
      vec![
        CanonicalAction::Play,
        CanonicalAction::Pause,
        CanonicalAction::SeekTo
      ]
    );
    assert_eq!(config.toggle, Toggle::StateAware);
  }

  #[test]
  fn rejects_unknown_handler() {
    assert!(Config::try_parse_from(["msb-server", "--handlers", "play,shuffle"]).is_err());
  }

  #[test]
  fn selects_flag_delegated_toggle() {
    let config = Config::try_parse_from(["msb-server", "--toggle", "flag-delegated"]).unwrap();
    assert_eq!(ToggleKind::from(config.toggle), ToggleKind::FlagDelegated);
  }
}
