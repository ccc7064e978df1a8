use std::{io, sync::Arc};

use futures_concurrency::future::TryJoin;
use log::{debug, info, warn};
use msb_actions::{ActionEvent, HostCommand, HostEvent, deserialize_command, serialize_event};
use msb_host::SessionHost;
use smol::{
  Unblock,
  channel::Receiver,
  io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader},
  stream::StreamExt,
};

use crate::{ServerDispatcher, ServerError, sources::Sources};

/// Connects the host application to the dispatcher over stdin and stdout
pub struct HostBridge {
  host: Arc<SessionHost>,
  dispatcher: Arc<ServerDispatcher>,
  action_rx: Receiver<ActionEvent>,
}

impl HostBridge {
  pub fn new(
    host: Arc<SessionHost>,
    dispatcher: Arc<ServerDispatcher>,
    action_rx: Receiver<ActionEvent>,
  ) -> Self {
    Self {
      host,
      dispatcher,
      action_rx,
    }
  }

  /// Handles one line of host input, returning the host state change it caused
  pub fn handle_command_line(&self, line: &str) -> Option<HostEvent> {
    if line.trim().is_empty() {
      return None;
    }

    match deserialize_command(line) {
      Ok(HostCommand::MediaButton(button)) => {
        let handled = self.dispatcher.handle_raw_event(&button.to_raw_event());
        debug!("Media button {button:?} handled: {handled}");
        None
      }
      Ok(command) => self.host.apply(command),
      Err(error) => {
        warn!("Skipping malformed host command {line:?}: {error}");
        None
      }
    }
  }

  /// Applies host commands until the host closes its end, then closes the
  /// action channel so the writer stops once it is drained
  async fn read_commands<R, F, Fut>(&self, reader: R, on_host_event: F) -> Result<(), ServerError>
  where
    R: AsyncBufRead + Unpin,
    F: Fn(HostEvent) -> Fut,
    Fut: Future<Output = ()>,
  {
    let mut lines = reader.lines();

    while let Some(line) = lines.next().await {
      let line = line.map_err(ServerError::ReadCommands)?;

      if let Some(event) = self.handle_command_line(&line) {
        on_host_event(event).await;
      }
    }

    info!("Host closed stdin");
    self.action_rx.close();
    Ok(())
  }

  async fn write_action(
    writer: &mut (impl AsyncWrite + Unpin),
    event: &ActionEvent,
  ) -> Result<(), ServerError> {
    writer
      .write_all(serialize_event(event).as_bytes())
      .await
      .map_err(ServerError::WriteActions)?;
    writer.flush().await.map_err(ServerError::WriteActions)
  }

  /// Resolves once the action channel is closed and empty
  async fn write_actions(&self, mut writer: impl AsyncWrite + Unpin) -> Result<(), ServerError> {
    while let Ok(event) = self.action_rx.recv().await {
      Self::write_action(&mut writer, &event).await?;
    }

    Ok(())
  }

  async fn forward<F, Fut>(
    &self,
    reader: impl AsyncBufRead + Unpin,
    writer: impl AsyncWrite + Unpin,
    on_host_event: F,
  ) -> Result<(), ServerError>
  where
    F: Fn(HostEvent) -> Fut,
    Fut: Future<Output = ()>,
  {
    (
      self.read_commands(reader, on_host_event),
      self.write_actions(writer),
    )
      .try_join()
      .await?;

    Ok(())
  }

  pub async fn run(&self, sources: &Sources) -> Result<(), ServerError> {
    self
      .forward(
        BufReader::new(Unblock::new(io::stdin())),
        Unblock::new(io::stdout()),
        |event| sources.on_host_event(event),
      )
      .await
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use msb_actions::{CanonicalAction, PlaybackState};
  use msb_dispatcher::{ActionDispatcher, Host, ToggleKind};

  use super::*;

  fn bridge() -> HostBridge {
    let (host, action_rx) = SessionHost::new();
    let host = Arc::new(host);
    let dispatcher = Arc::new(ActionDispatcher::with_toggle(
      host.clone(),
      ToggleKind::StateAware,
    ));

    HostBridge::new(host, dispatcher, action_rx)
  }

  #[test]
  fn host_commands_drive_toggle() {
    let bridge = bridge();

    let events: Vec<_> = [
      r#"{"setActionHandler":{"action":"play","enabled":true}}"#,
      r#"{"setActionHandler":{"action":"pause","enabled":true}}"#,
      r#"{"setPlaybackState":"playing"}"#,
      "",
      "garbage",
      r#"{"mediaButton":{"keyCode":85,"phase":0}}"#,
      r#"{"mediaButton":{"keyCode":85,"phase":1}}"#,
    ]
    .into_iter()
    .filter_map(|line| bridge.handle_command_line(line))
    .collect();

    assert_eq!(
      events,
      vec![
        HostEvent::HandlerChanged {
          action: CanonicalAction::Play,
          enabled: true
        },
        HostEvent::HandlerChanged {
          action: CanonicalAction::Pause,
          enabled: true
        },
        HostEvent::PlaybackStateChanged(PlaybackState::Playing),
      ]
    );

    assert_eq!(bridge.host.playback_state(), PlaybackState::Playing);
    assert_eq!(
      bridge.action_rx.try_recv(),
      Ok(ActionEvent::new(CanonicalAction::Pause))
    );
    assert!(bridge.action_rx.is_empty());
  }

  #[test]
  fn keyless_media_button_is_dropped() {
    let bridge = bridge();
    bridge.host.set_action_handler(CanonicalAction::Stop, true);

    assert_eq!(bridge.handle_command_line(r#"{"mediaButton":{"phase":0}}"#), None);
    assert!(bridge.action_rx.is_empty());
  }

  #[test]
  fn written_actions_are_json_lines() {
    let mut output = Vec::new();

    smol::block_on(async {
      HostBridge::write_action(&mut output, &ActionEvent::seek_to(2000))
        .await
        .unwrap();
      HostBridge::write_action(&mut output, &ActionEvent::new(CanonicalAction::Stop))
        .await
        .unwrap();
    });

    assert_eq!(
      String::from_utf8(output).unwrap(),
      "{\"action\":\"seekto\",\"seekTime\":2.0}\n{\"action\":\"stop\"}\n"
    );
  }

  #[test]
  fn every_action_is_written_before_shutdown() {
    let bridge = bridge();
    let input = concat!(
      r#"{"setActionHandler":{"action":"nexttrack","enabled":true}}"#,
      "\n",
      r#"{"mediaButton":{"keyCode":87,"phase":0}}"#,
      "\n",
      r#"{"mediaButton":{"keyCode":86,"phase":0}}"#,
      "\n",
      r#"{"setPlaybackState":"paused"}"#,
      "\n",
      r#"{"mediaButton":{"keyCode":85,"phase":0}}"#,
      "\n",
    );
    let mut output = Vec::new();
    let host_events = RefCell::new(Vec::new());

    smol::block_on(bridge.forward(input.as_bytes(), &mut output, |event| {
      host_events.borrow_mut().push(event);
      async {}
    }))
    .unwrap();

    assert_eq!(
      String::from_utf8(output).unwrap(),
      concat!(
        "{\"action\":\"nexttrack\"}\n",
        "{\"action\":\"stop\"}\n",
      )
    );
    assert_eq!(
      host_events.into_inner(),
      vec![
        HostEvent::HandlerChanged {
          action: CanonicalAction::NextTrack,
          enabled: true
        },
        HostEvent::PlaybackStateChanged(PlaybackState::Paused),
      ]
    );
  }

  #[test]
  fn empty_input_stops_the_writer() {
    let bridge = bridge();
    let mut output = Vec::new();

    smol::block_on(bridge.forward(&b""[..], &mut output, |_| async {})).unwrap();

    assert!(output.is_empty());
    assert!(bridge.action_rx.is_closed());
  }
}
