use std::{
  cell::RefCell,
  collections::HashSet,
  io::{self, Write},
};

use msb_actions::{ActionEvent, CanonicalAction, PlaybackState, RawInputEvent, serialize_event};
use msb_dispatcher::{ActionDispatcher, HandlerRegistry, Host, ToggleKind, TransportCallback};

use crate::cli::{Callback, Cli, Command, Toggle};

impl From<Toggle> for ToggleKind {
  fn from(toggle: Toggle) -> Self {
    match toggle {
      Toggle::StateAware => ToggleKind::StateAware,
      Toggle::FlagDelegated => ToggleKind::FlagDelegated,
    }
  }
}

impl From<Callback> for TransportCallback {
  fn from(callback: Callback) -> Self {
    match callback {
      Callback::Play => TransportCallback::Play,
      Callback::Pause => TransportCallback::Pause,
      Callback::Stop => TransportCallback::Stop,
      Callback::Rewind => TransportCallback::Rewind,
      Callback::FastForward => TransportCallback::FastForward,
      Callback::SkipToPrevious => TransportCallback::SkipToPrevious,
      Callback::SkipToNext => TransportCallback::SkipToNext,
    }
  }
}

/// A host described entirely by command line flags
struct OfflineHost {
  playback_state: PlaybackState,
  handlers: HashSet<CanonicalAction>,
  dispatched: RefCell<Vec<ActionEvent>>,
}

impl OfflineHost {
  fn from_cli(cli: &Cli) -> Self {
    let handlers = match (&cli.handlers, cli.no_handlers) {
      (_, true) => HashSet::new(),
      (Some(handlers), false) => handlers.iter().copied().collect(),
      (None, false) => CanonicalAction::ALL.iter().copied().collect(),
    };

    Self {
      playback_state: cli.state.into(),
      handlers,
      dispatched: RefCell::default(),
    }
  }
}

impl HandlerRegistry for OfflineHost {
  fn has_handler(&self, action: CanonicalAction) -> bool {
    self.handlers.contains(&action)
  }
}

impl Host for OfflineHost {
  fn playback_state(&self) -> PlaybackState {
    self.playback_state
  }

  fn dispatch(&self, event: ActionEvent) {
    self.dispatched.borrow_mut().push(event);
  }
}

#[derive(Debug, PartialEq)]
struct Resolution {
  /// Only raw key events report whether they were consumed
  handled: Option<bool>,
  dispatched: Vec<ActionEvent>,
}

fn resolve(cli: &Cli) -> Resolution {
  let host = OfflineHost::from_cli(cli);
  let dispatcher = ActionDispatcher::with_toggle(&host, ToggleKind::from(cli.toggle));

  let handled = match cli.command {
    Command::Key { key, release } => {
      let event = if release {
        RawInputEvent::release(key)
      } else {
        RawInputEvent::press(key)
      };

      Some(dispatcher.handle_raw_event(&event))
    }
    Command::Callback { callback } => {
      dispatcher.on_callback(callback.into());
      None
    }
    Command::Seek { position_millis } => {
      dispatcher.on_seek_to(position_millis);
      None
    }
    Command::Toggle => {
      dispatcher.toggle_playback();
      None
    }
    Command::Version => None,
  };

  Resolution {
    handled,
    dispatched: host.dispatched.take(),
  }
}

pub fn handle_command(cli: Cli) -> Result<(), crate::Error> {
  let mut stdout = io::stdout().lock();

  if let Command::Version = cli.command {
    writeln!(stdout, "msb {}", msb_actions::version()).map_err(crate::Error::Stdout)?;
    return Ok(());
  }

  let resolution = resolve(&cli);

  for event in &resolution.dispatched {
    stdout
      .write_all(serialize_event(event).as_bytes())
      .map_err(crate::Error::Stdout)?;
  }

  if resolution.handled == Some(false) {
    eprintln!("unhandled");
  }

  Ok(())
}
