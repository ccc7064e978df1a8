use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action `{0}`")]
pub struct UnknownAction(pub String);

macro_rules! canonical_actions {
  ($($(#[$meta:meta])* $name:ident => $token:tt,)*) => {
    /// The fixed vocabulary of actions a host application can subscribe to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum CanonicalAction {
      $(
        $(#[$meta])*
        #[serde(rename = $token)]
        $name,
      )*
    }

    impl CanonicalAction {
      pub const ALL: &'static [CanonicalAction] = &[$(CanonicalAction::$name),*];

      pub const fn as_str(self) -> &'static str {
        match self {
          $(CanonicalAction::$name => $token,)*
        }
      }
    }

    impl FromStr for CanonicalAction {
      type Err = UnknownAction;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
          $($token => Ok(CanonicalAction::$name),)*
          _ => Err(UnknownAction(s.to_owned())),
        }
      }
    }
  };
}

canonical_actions! {
  Play => "play",
  Pause => "pause",
  Stop => "stop",
  NextTrack => "nexttrack",
  PreviousTrack => "previoustrack",
  SeekForward => "seekforward",
  SeekBackward => "seekbackward",
  /// Always carries an [`ActionPayload::Seek`]
  SeekTo => "seekto",
}

impl fmt::Display for CanonicalAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionPayload {
  /// Absolute position in seconds
  Seek {
    #[serde(rename = "seekTime")]
    seek_time: f64,
  },

  /// The host has to decide between play and pause itself
  Toggle { toggle: bool },
}

/// A canonical action together with its payload, as handed to the host
///
/// Serializes as a single flat object, e.g. `{"action":"seekto","seekTime":1.5}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
  pub action: CanonicalAction,
  #[serde(flatten)]
  pub payload: Option<ActionPayload>,
}

impl ActionEvent {
  pub const fn new(action: CanonicalAction) -> Self {
    Self {
      action,
      payload: None,
    }
  }

  pub const fn with_payload(action: CanonicalAction, payload: ActionPayload) -> Self {
    Self {
      action,
      payload: Some(payload),
    }
  }

  pub fn seek_to(position_millis: i64) -> Self {
    Self::with_payload(
      CanonicalAction::SeekTo,
      ActionPayload::Seek {
        seek_time: position_millis as f64 / 1000.0,
      },
    )
  }

  pub fn seek_time(&self) -> Option<f64> {
    match self.payload {
      Some(ActionPayload::Seek { seek_time }) => Some(seek_time),
      _ => None,
    }
  }
}

impl From<CanonicalAction> for ActionEvent {
  fn from(action: CanonicalAction) -> Self {
    Self::new(action)
  }
}
