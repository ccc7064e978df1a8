use msb_actions::{CanonicalAction, PlaybackState};
use msb_dispatcher::HandlerRegistry;

pub fn as_playback_status(playback_state: PlaybackState) -> mpris_server::PlaybackStatus {
  match playback_state {
    PlaybackState::Playing => mpris_server::PlaybackStatus::Playing,
    PlaybackState::Paused => mpris_server::PlaybackStatus::Paused,
    PlaybackState::Stopped | PlaybackState::None => mpris_server::PlaybackStatus::Stopped,
  }
}

pub fn from_dbus_time_millis(time: mpris_server::Time) -> i64 {
  time.as_micros() / 1000
}

/// What the player advertises, derived from the registered handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
  pub can_play: bool,
  pub can_pause: bool,
  pub can_go_next: bool,
  pub can_go_previous: bool,
  pub can_seek: bool,
}

pub fn capabilities(handlers: &impl HandlerRegistry) -> Capabilities {
  let has = |action| handlers.has_handler(action);

  Capabilities {
    // A lone pause handler still receives toggles
    can_play: has(CanonicalAction::Play) || has(CanonicalAction::Pause),
    can_pause: has(CanonicalAction::Pause),
    can_go_next: has(CanonicalAction::NextTrack),
    can_go_previous: has(CanonicalAction::PreviousTrack),
    can_seek: has(CanonicalAction::SeekTo)
      || has(CanonicalAction::SeekForward)
      || has(CanonicalAction::SeekBackward),
  }
}
