use std::sync::Arc;

use msb_actions::{CanonicalAction, KeyCode, RawInputEvent};
use msb_dispatcher::{ActionDispatcher, HandlerRegistry, Host, ToggleStrategy};
use mpris_server::{
  LoopStatus, Metadata, PlaybackRate, PlaybackStatus, PlayerInterface, RootInterface, Time,
  TrackId, Volume,
  zbus::{self, fdo},
};
use smol::channel::{self, Sender};

use super::conversions::{as_playback_status, capabilities, from_dbus_time_millis};

pub struct MprisImpl<H, T> {
  dispatcher: Arc<ActionDispatcher<H, T>>,
  quit_tx: Sender<()>,
}

impl<H, T> MprisImpl<H, T> {
  pub fn new(dispatcher: Arc<ActionDispatcher<H, T>>, quit_tx: Sender<()>) -> Self {
    Self {
      dispatcher,
      quit_tx,
    }
  }

  #[cfg(test)]
  pub fn dispatcher(&self) -> &ActionDispatcher<H, T> {
    &self.dispatcher
  }

  fn unsupported<R>(message: &str) -> fdo::Result<R> {
    Err(fdo::Error::NotSupported(message.into()))
  }

  fn unsupported_set<R>(message: &str) -> zbus::Result<R> {
    Self::unsupported(message).map_err(zbus::Error::from)
  }

  fn channel_closed_error<E>(_error: E) -> fdo::Error {
    fdo::Error::Failed("Channel was unexpectedly closed".into())
  }
}

impl<H, T> RootInterface for MprisImpl<H, T>
where
  H: Host + Send + Sync + 'static,
  T: ToggleStrategy + Send + Sync + 'static,
{
  async fn raise(&self) -> fdo::Result<()> {
    Self::unsupported("Raise is not supported")
  }

  async fn quit(&self) -> fdo::Result<()> {
    match self.quit_tx.try_send(()) {
      Ok(()) => Ok(()),
      Err(channel::TrySendError::Closed(e)) => Err(Self::channel_closed_error(e)),

      // If the channel is full, a quit message was already sent
      Err(channel::TrySendError::Full(_)) => Ok(()),
    }
  }

  async fn can_quit(&self) -> fdo::Result<bool> {
    Ok(true)
  }

  async fn fullscreen(&self) -> fdo::Result<bool> {
    Ok(false)
  }

  async fn set_fullscreen(&self, _fullscreen: bool) -> zbus::Result<()> {
    Self::unsupported_set("Fullscreen is not supported")
  }

  async fn can_set_fullscreen(&self) -> fdo::Result<bool> {
    Ok(false)
  }

  async fn can_raise(&self) -> fdo::Result<bool> {
    Ok(false)
  }

  async fn has_track_list(&self) -> fdo::Result<bool> {
    Ok(false)
  }

  async fn identity(&self) -> fdo::Result<String> {
    Ok("Media Session Bridge".into())
  }

  async fn desktop_entry(&self) -> fdo::Result<String> {
    Ok("msb".into())
  }

  async fn supported_uri_schemes(&self) -> fdo::Result<Vec<String>> {
    Ok(Vec::new())
  }

  async fn supported_mime_types(&self) -> fdo::Result<Vec<String>> {
    Ok(Vec::new())
  }
}

impl<H, T> PlayerInterface for MprisImpl<H, T>
where
  H: Host + Send + Sync + 'static,
  T: ToggleStrategy + Send + Sync + 'static,
{
  async fn next(&self) -> fdo::Result<()> {
    self.dispatcher.on_skip_to_next();
    Ok(())
  }

  async fn previous(&self) -> fdo::Result<()> {
    self.dispatcher.on_skip_to_previous();
    Ok(())
  }

  async fn pause(&self) -> fdo::Result<()> {
    self.dispatcher.on_pause();
    Ok(())
  }

  /// MPRIS only has the generic toggle, so it takes the same path as the play/pause key
  async fn play_pause(&self) -> fdo::Result<()> {
    self
      .dispatcher
      .handle_raw_event(&RawInputEvent::press(KeyCode::PlayPause));
    Ok(())
  }

  async fn stop(&self) -> fdo::Result<()> {
    self.dispatcher.on_stop();
    Ok(())
  }

  /// Without a play handler, a lone pause handler is treated as a toggle
  async fn play(&self) -> fdo::Result<()> {
    let host = self.dispatcher.host();

    if host.has_handler(CanonicalAction::Play) {
      self.dispatcher.on_play();
    } else if !host.playback_state().is_playing() {
      self.dispatcher.toggle_playback();
    }

    Ok(())
  }

  async fn seek(&self, offset: Time) -> fdo::Result<()> {
    if offset.is_zero() {
      return Ok(());
    }

    if offset.is_positive() {
      self.dispatcher.on_fast_forward();
    } else {
      self.dispatcher.on_rewind();
    }

    Ok(())
  }

  async fn set_position(&self, _track_id: TrackId, position: Time) -> fdo::Result<()> {
    if position.is_negative() {
      return Ok(());
    }

    self.dispatcher.on_seek_to(from_dbus_time_millis(position));
    Ok(())
  }

  async fn open_uri(&self, _uri: String) -> fdo::Result<()> {
    Self::unsupported("Opening uris is not supported")
  }

  async fn playback_status(&self) -> fdo::Result<PlaybackStatus> {
    Ok(as_playback_status(self.dispatcher.host().playback_state()))
  }

  async fn loop_status(&self) -> fdo::Result<LoopStatus> {
    Ok(LoopStatus::None)
  }

  async fn set_loop_status(&self, _loop_status: LoopStatus) -> zbus::Result<()> {
    Self::unsupported_set("Loop status is not supported")
  }

  async fn rate(&self) -> fdo::Result<PlaybackRate> {
    Ok(1.0)
  }

  async fn set_rate(&self, rate: PlaybackRate) -> zbus::Result<()> {
    if rate == 0.0 {
      self.dispatcher.on_pause();
    } else if rate != 1.0 {
      Self::unsupported_set("Unsupported rate")?
    }

    Ok(())
  }

  async fn shuffle(&self) -> fdo::Result<bool> {
    Ok(false)
  }

  async fn set_shuffle(&self, _shuffle: bool) -> zbus::Result<()> {
    Self::unsupported_set("Shuffle is not supported")
  }

  async fn metadata(&self) -> fdo::Result<Metadata> {
    Ok(Metadata::builder().trackid(TrackId::NO_TRACK).build())
  }

  async fn volume(&self) -> fdo::Result<Volume> {
    Ok(1.0)
  }

  async fn set_volume(&self, _volume: Volume) -> zbus::Result<()> {
    Self::unsupported_set("Volume is not supported")
  }

  async fn position(&self) -> fdo::Result<Time> {
    Ok(Time::from_micros(0))
  }

  async fn minimum_rate(&self) -> fdo::Result<PlaybackRate> {
    Ok(1.0)
  }

  async fn maximum_rate(&self) -> fdo::Result<PlaybackRate> {
    Ok(1.0)
  }

  async fn can_go_next(&self) -> fdo::Result<bool> {
    Ok(capabilities(self.dispatcher.host()).can_go_next)
  }

  async fn can_go_previous(&self) -> fdo::Result<bool> {
    Ok(capabilities(self.dispatcher.host()).can_go_previous)
  }

  async fn can_play(&self) -> fdo::Result<bool> {
    Ok(capabilities(self.dispatcher.host()).can_play)
  }

  async fn can_pause(&self) -> fdo::Result<bool> {
    Ok(capabilities(self.dispatcher.host()).can_pause)
  }

  async fn can_seek(&self) -> fdo::Result<bool> {
    Ok(capabilities(self.dispatcher.host()).can_seek)
  }

  async fn can_control(&self) -> fdo::Result<bool> {
    Ok(true)
  }
}

#[cfg(test)]
mod tests {
  use msb_actions::{ActionEvent, ActionPayload, PlaybackState};
  use msb_dispatcher::FlagDelegatedToggle;
  use msb_host::SessionHost;

  use super::*;

  struct Fixture {
    mpris: MprisImpl<Arc<SessionHost>, msb_dispatcher::StateAwareToggle>,
    action_rx: channel::Receiver<ActionEvent>,
    quit_rx: channel::Receiver<()>,
  }

  fn fixture() -> Fixture {
    fixture_with_handlers(&[CanonicalAction::Play, CanonicalAction::Pause])
  }

  fn fixture_with_handlers(handlers: &[CanonicalAction]) -> Fixture {
    let (host, action_rx) = SessionHost::new();
    let host = Arc::new(host);
    for action in handlers {
      host.set_action_handler(*action, true);
    }

    let (quit_tx, quit_rx) = channel::bounded(1);
    Fixture {
      mpris: MprisImpl::new(Arc::new(ActionDispatcher::new(host)), quit_tx),
      action_rx,
      quit_rx,
    }
  }

  #[test]
  fn play_pause_resolves_against_host_state() {
    let Fixture { mpris, action_rx, .. } = fixture();

    smol::block_on(async {
      mpris.play_pause().await.unwrap();
      mpris.dispatcher().host().set_playback_state(PlaybackState::Playing);
      mpris.play_pause().await.unwrap();
    });

    assert_eq!(action_rx.try_recv(), Ok(ActionEvent::new(CanonicalAction::Play)));
    assert_eq!(action_rx.try_recv(), Ok(ActionEvent::new(CanonicalAction::Pause)));
  }

  #[test]
  fn relative_seek_uses_direction() {
    let Fixture { mpris, action_rx, .. } = fixture();

    smol::block_on(async {
      mpris.seek(Time::from_micros(5_000_000)).await.unwrap();
      mpris.seek(Time::from_micros(-5_000_000)).await.unwrap();
      mpris.seek(Time::from_micros(0)).await.unwrap();
    });

    assert_eq!(
      action_rx.try_recv(),
      Ok(ActionEvent::new(CanonicalAction::SeekForward))
    );
    assert_eq!(
      action_rx.try_recv(),
      Ok(ActionEvent::new(CanonicalAction::SeekBackward))
    );
    assert!(action_rx.is_empty());
  }

  #[test]
  fn set_position_seeks_in_seconds() {
    let Fixture { mpris, action_rx, .. } = fixture();

    smol::block_on(async {
      mpris
        .set_position(TrackId::NO_TRACK, Time::from_micros(1_500_000))
        .await
        .unwrap();
      mpris
        .set_position(TrackId::NO_TRACK, Time::from_micros(-1))
        .await
        .unwrap();
    });

    assert_eq!(action_rx.try_recv(), Ok(ActionEvent::seek_to(1500)));
    assert!(action_rx.is_empty());
  }

  #[test]
  fn quit_is_idempotent() {
    let Fixture { mpris, quit_rx, .. } = fixture();

    smol::block_on(async {
      assert!(mpris.quit().await.is_ok());
      assert!(mpris.quit().await.is_ok());
    });

    assert_eq!(quit_rx.len(), 1);
  }

  #[test]
  fn play_uses_play_handler() {
    let Fixture { mpris, action_rx, .. } = fixture();

    smol::block_on(mpris.play()).unwrap();

    assert_eq!(action_rx.try_recv(), Ok(ActionEvent::new(CanonicalAction::Play)));
  }

  #[test]
  fn play_with_lone_pause_handler_toggles() {
    let Fixture { mpris, action_rx, .. } = fixture_with_handlers(&[CanonicalAction::Pause]);

    smol::block_on(async {
      mpris.play().await.unwrap();
      mpris.dispatcher().host().set_playback_state(PlaybackState::Playing);
      mpris.play().await.unwrap();
    });

    assert_eq!(action_rx.try_recv(), Ok(ActionEvent::new(CanonicalAction::Pause)));
    assert!(action_rx.is_empty());
  }

  #[test]
  fn play_with_lone_pause_handler_keeps_toggle_flag() {
    let (host, action_rx) = SessionHost::new();
    let host = Arc::new(host);
    host.set_action_handler(CanonicalAction::Pause, true);

    let (quit_tx, _quit_rx) = channel::bounded(1);
    let mpris = MprisImpl::new(
      Arc::new(ActionDispatcher::with_toggle(host, FlagDelegatedToggle)),
      quit_tx,
    );

    smol::block_on(mpris.play()).unwrap();

    assert_eq!(
      action_rx.try_recv(),
      Ok(ActionEvent::with_payload(
        CanonicalAction::Pause,
        ActionPayload::Toggle { toggle: true }
      ))
    );
  }
}
