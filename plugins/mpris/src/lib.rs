use std::sync::Arc;

use conversions::{as_playback_status, capabilities};
use log::info;
use msb_actions::HostEvent;
use msb_dispatcher::{ActionDispatcher, EventSource, Host, ToggleStrategy};
use mpris_server::{
  Property, Server,
  zbus::{self},
};
use smol::channel::{self, Receiver};
use thiserror::Error;

use mpris_impl::MprisImpl;

mod conversions;
mod mpris_impl;

#[derive(Debug, Error)]
pub enum MprisSourceError {
  #[error("Mpris server error: {0}")]
  DBus(#[from] zbus::Error),
}

#[derive(Debug, Clone)]
pub struct MprisConfig {
  /// Appended to `org.mpris.MediaPlayer2.` to form the well known bus name
  pub bus_name: String,
}

impl Default for MprisConfig {
  fn default() -> Self {
    Self {
      bus_name: DEFAULT_BUS_NAME.into(),
    }
  }
}

pub const DEFAULT_BUS_NAME: &str = "dev.msb.MediaSessionBridge";

/// Exposes the dispatcher as an MPRIS media player on the session bus
///
/// Desktop media keys and lock screen widgets talk to MPRIS players, so this is
/// the desktop counterpart of a platform media session.
pub struct MprisSource<H, T>
where
  H: Host + Send + Sync + 'static,
  T: ToggleStrategy + Send + Sync + 'static,
{
  server: Server<MprisImpl<H, T>>,
  dispatcher: Arc<ActionDispatcher<H, T>>,

  quit_rx: Receiver<()>,
}

impl<H, T> EventSource<H, T> for MprisSource<H, T>
where
  H: Host + Send + Sync + 'static,
  T: ToggleStrategy + Send + Sync + 'static,
{
  type Config = MprisConfig;
  type Error = MprisSourceError;

  async fn init(
    dispatcher: Arc<ActionDispatcher<H, T>>,
    config: MprisConfig,
  ) -> Result<Self, Self::Error> {
    let (quit_tx, quit_rx) = channel::bounded(1);

    let server = Server::new(
      &config.bus_name,
      MprisImpl::new(Arc::clone(&dispatcher), quit_tx),
    )
    .await?;
    info!("Registered MPRIS player {}", config.bus_name);

    Ok(Self {
      server,
      dispatcher,
      quit_rx,
    })
  }

  async fn on_host_event(&self, event: HostEvent) -> Result<(), Self::Error> {
    match event {
      HostEvent::PlaybackStateChanged(playback_state) => {
        self
          .server
          .properties_changed([Property::PlaybackStatus(as_playback_status(playback_state))])
          .await?;
      }
      HostEvent::HandlerChanged { .. } => {
        let capabilities = capabilities(self.dispatcher.host());

        self
          .server
          .properties_changed([
            Property::CanPlay(capabilities.can_play),
            Property::CanPause(capabilities.can_pause),
            Property::CanGoNext(capabilities.can_go_next),
            Property::CanGoPrevious(capabilities.can_go_previous),
            Property::CanSeek(capabilities.can_seek),
          ])
          .await?;
      }
    }

    Ok(())
  }

  async fn run(&self) -> Result<(), Self::Error> {
    let _ = self.quit_rx.recv().await;
    info!("Received MPRIS Quit command");

    Ok(())
  }
}
