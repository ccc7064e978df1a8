use std::sync::Arc;

use log::warn;
use msb_actions::HostEvent;
use msb_dispatcher::{EventSource, ToggleKind};
use msb_host::SessionHost;

use crate::{ServerDispatcher, ServerError, config::Config};

/// Drives one event source and tags its errors with the source's name
pub struct SourceRunner<S> {
  name: &'static str,
  source: S,
}

impl<S> SourceRunner<S>
where
  S: EventSource<Arc<SessionHost>, ToggleKind>,
  S::Error: Send + Sync,
{
  fn map_error(name: &'static str) -> impl Fn(S::Error) -> ServerError {
    move |error| ServerError::Source {
      name,
      source: Box::new(error),
    }
  }

  pub async fn load(
    name: &'static str,
    dispatcher: Arc<ServerDispatcher>,
    config: S::Config,
  ) -> Result<Self, ServerError> {
    let source = S::init(dispatcher, config)
      .await
      .map_err(Self::map_error(name))?;

    Ok(Self { name, source })
  }

  /// Failing to mirror host state is not fatal, the source keeps dispatching
  pub async fn on_host_event(&self, event: HostEvent) {
    if let Err(error) = self.source.on_host_event(event).await {
      warn!("{}: failed to publish {event:?}: {error}", self.name);
    }
  }

  pub async fn run(&self) -> Result<(), ServerError> {
    self.source.run().await.map_err(Self::map_error(self.name))
  }
}

#[cfg(feature = "msb-source-mpris")]
type MprisSource = msb_source_mpris::MprisSource<Arc<SessionHost>, ToggleKind>;

/// The event sources compiled into this server
pub struct Sources {
  #[cfg(feature = "msb-source-mpris")]
  mpris: SourceRunner<MprisSource>,
}

impl Sources {
  pub async fn init(
    dispatcher: Arc<ServerDispatcher>,
    config: &Config,
  ) -> Result<Self, ServerError> {
    #[cfg(feature = "msb-source-mpris")]
    let mpris = {
      let mpris_config = msb_source_mpris::MprisConfig {
        bus_name: config.bus_name.clone(),
      };
      SourceRunner::<MprisSource>::load("mpris", dispatcher, mpris_config).await?
    };

    #[cfg(not(feature = "msb-source-mpris"))]
    let _ = (dispatcher, config);

    Ok(Self {
      #[cfg(feature = "msb-source-mpris")]
      mpris,
    })
  }

  pub async fn on_host_event(&self, event: HostEvent) {
    #[cfg(feature = "msb-source-mpris")]
    self.mpris.on_host_event(event).await;

    #[cfg(not(feature = "msb-source-mpris"))]
    let _ = event;
  }

  /// Resolves when any source stops, never without sources
  pub async fn run(&self) -> Result<(), ServerError> {
    #[cfg(feature = "msb-source-mpris")]
    return self.mpris.run().await;

    #[cfg(not(feature = "msb-source-mpris"))]
    std::future::pending().await
  }
}
