use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown playback state `{0}`")]
pub struct UnknownPlaybackState(pub String);

/// The host's last reported transport status
#[repr(usize)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
  Playing,
  Paused,
  Stopped,
  /// Never set by the host
  #[default]
  None,
}

impl PlaybackState {
  pub const fn as_str(self) -> &'static str {
    match self {
      PlaybackState::Playing => "playing",
      PlaybackState::Paused => "paused",
      PlaybackState::Stopped => "stopped",
      PlaybackState::None => "none",
    }
  }

  pub fn is_playing(self) -> bool {
    self == PlaybackState::Playing
  }
}

impl fmt::Display for PlaybackState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PlaybackState {
  type Err = UnknownPlaybackState;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "playing" => Ok(PlaybackState::Playing),
      "paused" => Ok(PlaybackState::Paused),
      "stopped" => Ok(PlaybackState::Stopped),
      "none" => Ok(PlaybackState::None),
      _ => Err(UnknownPlaybackState(s.to_owned())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_to_none() {
    assert_eq!(PlaybackState::default(), PlaybackState::None);
  }

  #[test]
  fn serde_uses_lowercase_tokens() {
    for state in [
      PlaybackState::Playing,
      PlaybackState::Paused,
      PlaybackState::Stopped,
      PlaybackState::None,
    ] {
      let json = serde_json::to_string(&state).unwrap();
      assert_eq!(json, format!("\"{state}\""));
      assert_eq!(state.as_str().parse::<PlaybackState>(), Ok(state));
    }
  }

  #[test]
  fn unknown_state_is_rejected() {
    assert!("Playing".parse::<PlaybackState>().is_err());
    assert!("buffering".parse::<PlaybackState>().is_err());
  }
}
