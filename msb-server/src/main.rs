use std::sync::Arc;

use clap::Parser;
use futures_concurrency::future::Race;
use log::info;
use msb_dispatcher::{ActionDispatcher, ToggleKind};
use msb_host::SessionHost;

use config::Config;
use error::ServerError;
use host_bridge::HostBridge;
use signals::SignalHandler;
use sources::Sources;

mod config;
mod error;
mod host_bridge;
mod signals;
mod sources;

pub type ServerDispatcher = ActionDispatcher<Arc<SessionHost>, ToggleKind>;

fn main() -> Result<(), ServerError> {
  // Logs go to stderr, stdout carries the action stream
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let config = Config::parse();
  info!("msb-server {}", msb_actions::version());

  smol::block_on(run(config))
}

async fn run(config: Config) -> Result<(), ServerError> {
  let mut signals = SignalHandler::init()?;

  let (host, action_rx) = SessionHost::new();
  let host = Arc::new(host);
  for action in &config.handlers {
    host.set_action_handler(*action, true);
  }

  let toggle = ToggleKind::from(config.toggle);
  info!("Resolving play/pause toggles with {toggle:?}");
  let dispatcher = Arc::new(ActionDispatcher::with_toggle(host.clone(), toggle));

  let sources = Sources::init(dispatcher.clone(), &config).await?;
  let bridge = HostBridge::new(host, dispatcher, action_rx);

  (
    async {
      signals.wait_for_quit().await;
      Ok(())
    },
    bridge.run(&sources),
    sources.run(),
  )
    .race()
    .await
}
