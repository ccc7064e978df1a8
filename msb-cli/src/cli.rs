use std::{num::ParseIntError, str::FromStr};

use clap::{Parser, Subcommand, ValueEnum};
use msb_actions::{CanonicalAction, KeyCode, UnknownAction};

/// Shows which canonical action a media signal resolves to
///
/// The host is described on the command line. Every dispatched action is
/// printed to stdout as one JSON object per line.
#[derive(Debug, Parser)]
#[command(name = "msb", about)]
pub struct Cli {
  /// The playback state the host last reported
  #[arg(long, global = true, value_enum, default_value_t = PlaybackState::None)]
  pub state: PlaybackState,

  /// Actions the host has handlers for, every action if omitted
  #[arg(long, global = true, value_delimiter = ',', value_parser = parse_action)]
  #[arg(conflicts_with = "no_handlers")]
  pub handlers: Option<Vec<CanonicalAction>>,

  /// The host has no handlers at all
  #[arg(long, global = true)]
  pub no_handlers: bool,

  /// How ambiguous play/pause signals are resolved
  #[arg(long, global = true, value_enum, default_value_t = Toggle::StateAware)]
  pub toggle: Toggle,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Press (or release) a media key
  Key {
    /// play, pause, play-pause, stop, next, previous, fast-forward, rewind or a raw key code
    #[arg(value_parser = parse_key)]
    key: KeyCode,

    #[arg(long)]
    release: bool,
  },

  /// Invoke a transport control callback
  Callback { callback: Callback },

  /// Seek to an absolute position
  Seek {
    #[arg(allow_negative_numbers = true)]
    position_millis: i64,
  },

  /// Resolve a play/pause toggle
  Toggle,

  Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlaybackState {
  Playing,
  Paused,
  Stopped,
  None,
}

impl From<PlaybackState> for msb_actions::PlaybackState {
  fn from(state: PlaybackState) -> Self {
    match state {
      PlaybackState::Playing => msb_actions::PlaybackState::Playing,
      PlaybackState::Paused => msb_actions::PlaybackState::Paused,
      PlaybackState::Stopped => msb_actions::PlaybackState::Stopped,
      PlaybackState::None => msb_actions::PlaybackState::None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
  StateAware,
  FlagDelegated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Callback {
  Play,
  Pause,
  Stop,
  Rewind,
  FastForward,
  SkipToPrevious,
  SkipToNext,
}

fn parse_action(s: &str) -> Result<CanonicalAction, UnknownAction> {
  CanonicalAction::from_str(s)
}

fn parse_key(s: &str) -> Result<KeyCode, ParseIntError> {
  let key = match s {
    "play" => KeyCode::Play,
    "pause" => KeyCode::Pause,
    "play-pause" => KeyCode::PlayPause,
    "stop" => KeyCode::Stop,
    "next" => KeyCode::Next,
    "previous" => KeyCode::Previous,
    "fast-forward" => KeyCode::FastForward,
    "rewind" => KeyCode::Rewind,
    code => KeyCode::from_raw(code.parse()?),
  };

  Ok(key)
}
