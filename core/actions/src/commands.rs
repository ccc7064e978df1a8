use serde::{Deserialize, Serialize};

use crate::{CanonicalAction, KeyEvent, KeyPhase, PlaybackState, RawInputEvent};

/// A media button as the host received it
///
/// `key_code` is absent when the platform delivered a button intent without a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaButton {
  #[serde(default)]
  pub key_code: Option<i32>,
  #[serde(default)]
  pub phase: i32,
}

impl MediaButton {
  pub fn to_raw_event(self) -> RawInputEvent {
    RawInputEvent::new(self.key_code.map(|code| KeyEvent {
      code: crate::KeyCode::from_raw(code),
      phase: KeyPhase::from_raw(self.phase),
    }))
  }
}

/// Sent by the host application, one JSON object per line
///
/// * `{"setPlaybackState":"playing"}`
/// * `{"setActionHandler":{"action":"play","enabled":true}}`
/// * `{"mediaButton":{"keyCode":85,"phase":0}}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostCommand {
  SetPlaybackState(PlaybackState),
  SetActionHandler {
    action: CanonicalAction,
    enabled: bool,
  },
  MediaButton(MediaButton),
}

/// A change in host state that event sources may want to republish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
  PlaybackStateChanged(PlaybackState),
  HandlerChanged {
    action: CanonicalAction,
    enabled: bool,
  },
}
