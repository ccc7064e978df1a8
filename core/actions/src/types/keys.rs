/// A media key, numbered the way Android's `KeyEvent` numbers them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
  Play,
  Pause,
  PlayPause,
  Stop,
  Next,
  Previous,
  FastForward,
  Rewind,
  Other(i32),
}

impl KeyCode {
  pub const PLAY_PAUSE: i32 = 85;
  pub const STOP: i32 = 86;
  pub const NEXT: i32 = 87;
  pub const PREVIOUS: i32 = 88;
  pub const REWIND: i32 = 89;
  pub const FAST_FORWARD: i32 = 90;
  pub const PLAY: i32 = 126;
  pub const PAUSE: i32 = 127;

  pub const fn from_raw(code: i32) -> Self {
    match code {
      Self::PLAY_PAUSE => KeyCode::PlayPause,
      Self::STOP => KeyCode::Stop,
      Self::NEXT => KeyCode::Next,
      Self::PREVIOUS => KeyCode::Previous,
      Self::REWIND => KeyCode::Rewind,
      Self::FAST_FORWARD => KeyCode::FastForward,
      Self::PLAY => KeyCode::Play,
      Self::PAUSE => KeyCode::Pause,
      other => KeyCode::Other(other),
    }
  }

  pub const fn raw(self) -> i32 {
    match self {
      KeyCode::PlayPause => Self::PLAY_PAUSE,
      KeyCode::Stop => Self::STOP,
      KeyCode::Next => Self::NEXT,
      KeyCode::Previous => Self::PREVIOUS,
      KeyCode::Rewind => Self::REWIND,
      KeyCode::FastForward => Self::FAST_FORWARD,
      KeyCode::Play => Self::PLAY,
      KeyCode::Pause => Self::PAUSE,
      KeyCode::Other(code) => code,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPhase {
  Press,
  Release,
  Other(i32),
}

impl KeyPhase {
  pub const PRESS: i32 = 0;
  pub const RELEASE: i32 = 1;

  pub const fn from_raw(phase: i32) -> Self {
    match phase {
      Self::PRESS => KeyPhase::Press,
      Self::RELEASE => KeyPhase::Release,
      other => KeyPhase::Other(other),
    }
  }

  pub const fn raw(self) -> i32 {
    match self {
      KeyPhase::Press => Self::PRESS,
      KeyPhase::Release => Self::RELEASE,
      KeyPhase::Other(phase) => phase,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
  pub code: KeyCode,
  pub phase: KeyPhase,
}

/// A media button signal as delivered by the platform
///
/// The platform may deliver a button intent that carries no key at all,
/// which is represented by `key` being `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RawInputEvent {
  key: Option<KeyEvent>,
}

impl RawInputEvent {
  pub const fn new(key: Option<KeyEvent>) -> Self {
    Self { key }
  }

  pub const fn empty() -> Self {
    Self { key: None }
  }

  pub const fn press(code: KeyCode) -> Self {
    Self::new(Some(KeyEvent {
      code,
      phase: KeyPhase::Press,
    }))
  }

  pub const fn release(code: KeyCode) -> Self {
    Self::new(Some(KeyEvent {
      code,
      phase: KeyPhase::Release,
    }))
  }

  pub const fn from_raw(code: i32, phase: i32) -> Self {
    Self::new(Some(KeyEvent {
      code: KeyCode::from_raw(code),
      phase: KeyPhase::from_raw(phase),
    }))
  }

  pub const fn key(&self) -> Option<KeyEvent> {
    self.key
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_android_key_codes() {
    assert_eq!(KeyCode::from_raw(85), KeyCode::PlayPause);
    assert_eq!(KeyCode::from_raw(126), KeyCode::Play);
    assert_eq!(KeyCode::from_raw(127), KeyCode::Pause);
    assert_eq!(KeyCode::from_raw(90), KeyCode::FastForward);
    assert_eq!(KeyCode::from_raw(24), KeyCode::Other(24));
  }

  #[test]
  fn raw_code_survives_decoding() {
    for code in [0, 24, 85, 86, 87, 88, 89, 90, 126, 127, 200] {
      assert_eq!(KeyCode::from_raw(code).raw(), code);
    }
  }

  #[test]
  fn unknown_phase_is_kept() {
    assert_eq!(KeyPhase::from_raw(0), KeyPhase::Press);
    assert_eq!(KeyPhase::from_raw(1), KeyPhase::Release);
    assert_eq!(KeyPhase::from_raw(2), KeyPhase::Other(2));
  }

  #[test]
  fn empty_event_has_no_key() {
    assert_eq!(RawInputEvent::empty().key(), None);
    assert_eq!(RawInputEvent::default(), RawInputEvent::empty());
  }
}
