use std::sync::atomic::{AtomicUsize, Ordering};

use msb_actions::PlaybackState;

pub struct AtomicPlaybackState(AtomicUsize);

impl AtomicPlaybackState {
  fn from_usize(val: usize) -> PlaybackState {
    const PLAYING: usize = PlaybackState::Playing as usize;
    const PAUSED: usize = PlaybackState::Paused as usize;
    const STOPPED: usize = PlaybackState::Stopped as usize;
    const NONE: usize = PlaybackState::None as usize;
    match val {
      PLAYING => PlaybackState::Playing,
      PAUSED => PlaybackState::Paused,
      STOPPED => PlaybackState::Stopped,
      NONE => PlaybackState::None,
      _ => {
        unreachable!("Invalid enum discriminant")
      }
    }
  }

  pub const fn new(v: PlaybackState) -> Self {
    Self(AtomicUsize::new(v as usize))
  }

  pub fn load(&self, order: Ordering) -> PlaybackState {
    Self::from_usize(self.0.load(order))
  }

  pub fn swap(&self, val: PlaybackState, order: Ordering) -> PlaybackState {
    Self::from_usize(self.0.swap(val as usize, order))
  }
}

impl Default for AtomicPlaybackState {
  fn default() -> Self {
    Self::new(PlaybackState::default())
  }
}
