use msb_actions::{CanonicalAction, KeyCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
  Direct(CanonicalAction),
  /// Resolved against the host's playback state
  Toggle,
  Unhandled,
}

/// Classifies a media key
///
/// Play and pause keys are toggles too: many Bluetooth headsets alternate between
/// them instead of sending the play/pause key.
pub const fn route_key(code: KeyCode) -> KeyRoute {
  match code {
    KeyCode::Play | KeyCode::Pause | KeyCode::PlayPause => KeyRoute::Toggle,
    KeyCode::Stop => KeyRoute::Direct(CanonicalAction::Stop),
    KeyCode::Next => KeyRoute::Direct(CanonicalAction::NextTrack),
    KeyCode::Previous => KeyRoute::Direct(CanonicalAction::PreviousTrack),
    KeyCode::FastForward => KeyRoute::Direct(CanonicalAction::SeekForward),
    KeyCode::Rewind => KeyRoute::Direct(CanonicalAction::SeekBackward),
    KeyCode::Other(_) => KeyRoute::Unhandled,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_key_routes_to_seekto() {
    for code in (0..=255).map(KeyCode::from_raw) {
      assert_ne!(route_key(code), KeyRoute::Direct(CanonicalAction::SeekTo));
    }
  }

  #[test]
  fn only_media_keys_are_handled() {
    let handled = (0..=255)
      .map(KeyCode::from_raw)
      .filter(|code| route_key(*code) != KeyRoute::Unhandled)
      .count();

    assert_eq!(handled, 8);
  }
}
