use std::{error::Error, sync::Arc};

use msb_actions::HostEvent;

use crate::ActionDispatcher;

/// A platform facing producer of media signals, compiled into `msb-server`
///
/// Sources call into the shared dispatcher and get notified of host state
/// changes so they can mirror them to the platform.
pub trait EventSource<H, T> {
  type Config: Default + Send;
  type Error: Error + 'static;

  fn init(
    dispatcher: Arc<ActionDispatcher<H, T>>,
    config: Self::Config,
  ) -> impl Future<Output = Result<Self, Self::Error>> + Send
  where
    Self: Sized;

  fn on_host_event(&self, event: HostEvent) -> impl Future<Output = Result<(), Self::Error>> + Send;

  /// Resolves when the source shuts down
  fn run(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
