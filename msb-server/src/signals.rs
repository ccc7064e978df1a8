use async_signal::{Signal, Signals};
use log::info;
use smol::stream::StreamExt;

use crate::ServerError;

pub struct SignalHandler {
  signals: Signals,
}

impl SignalHandler {
  pub fn init() -> Result<Self, ServerError> {
    Ok(Self {
      signals: Signals::new([Signal::Term, Signal::Quit, Signal::Int])
        .map_err(ServerError::RegisterSignals)?,
    })
  }

  /// Resolves on the first termination signal
  pub async fn wait_for_quit(&mut self) {
    while let Some(signal) = self.signals.next().await {
      let Ok(signal) = signal else {
        return;
      };

      if matches!(signal, Signal::Term | Signal::Quit | Signal::Int) {
        info!("Received {signal:?}, shutting down");
        return;
      };
    }

    unreachable!("Iterating over Signals should never return None")
  }
}
