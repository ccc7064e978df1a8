//! An in-process host for the action dispatcher
//!
//! [`SessionHost`] keeps the state the host application reports (playback state
//! and registered action handlers) and forwards every dispatched action over a
//! channel to whoever drives the application side.

use std::sync::atomic::Ordering;

use dashmap::DashSet;
use log::{debug, warn};
use msb_actions::{ActionEvent, CanonicalAction, HostCommand, HostEvent, PlaybackState};
use msb_dispatcher::{HandlerRegistry, Host};
use smol::channel::{self, Receiver, Sender, TrySendError};

use atomic_playback_state::AtomicPlaybackState;

mod atomic_playback_state;

pub struct SessionHost {
  playback_state: AtomicPlaybackState,
  handlers: DashSet<CanonicalAction>,

  action_tx: Sender<ActionEvent>,
}

impl SessionHost {
  pub fn new() -> (Self, Receiver<ActionEvent>) {
    let (action_tx, action_rx) = channel::unbounded();

    (
      Self {
        playback_state: AtomicPlaybackState::default(),
        handlers: DashSet::new(),

        action_tx,
      },
      action_rx,
    )
  }

  /// Returns `None` if the state did not change
  pub fn set_playback_state(&self, state: PlaybackState) -> Option<HostEvent> {
    let previous = self.playback_state.swap(state, Ordering::SeqCst);
    (previous != state).then_some(HostEvent::PlaybackStateChanged(state))
  }

  /// Returns `None` if the handler was already in the requested state
  pub fn set_action_handler(&self, action: CanonicalAction, enabled: bool) -> Option<HostEvent> {
    let changed = if enabled {
      self.handlers.insert(action)
    } else {
      self.handlers.remove(&action).is_some()
    };

    changed.then_some(HostEvent::HandlerChanged { action, enabled })
  }

  /// Applies a host command that changes host state
  ///
  /// Media button commands are not host state and are ignored here, they
  /// belong to the dispatcher.
  pub fn apply(&self, command: HostCommand) -> Option<HostEvent> {
    debug!("Applying host command: {command:?}");

    match command {
      HostCommand::SetPlaybackState(state) => self.set_playback_state(state),
      HostCommand::SetActionHandler { action, enabled } => self.set_action_handler(action, enabled),
      HostCommand::MediaButton(_) => None,
    }
  }

  pub fn registered_handlers(&self) -> Vec<CanonicalAction> {
    CanonicalAction::ALL
      .iter()
      .copied()
      .filter(|action| self.handlers.contains(action))
      .collect()
  }
}

impl HandlerRegistry for SessionHost {
  fn has_handler(&self, action: CanonicalAction) -> bool {
    self.handlers.contains(&action)
  }
}

impl Host for SessionHost {
  fn playback_state(&self) -> PlaybackState {
    self.playback_state.load(Ordering::SeqCst)
  }

  fn dispatch(&self, event: ActionEvent) {
    match self.action_tx.try_send(event) {
      Ok(()) => {}
      Err(TrySendError::Closed(event)) => {
        warn!("Action channel closed, dropping {}", event.action)
      }
      Err(TrySendError::Full(_)) => unreachable!("The action channel is unbounded"),
    }
  }
}
