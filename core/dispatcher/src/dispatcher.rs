use log::{debug, warn};
use msb_actions::{ActionEvent, KeyPhase, RawInputEvent};

use crate::{
  Host, KeyRoute, StateAwareToggle, ToggleStrategy, TransportCallback, keymap::route_key,
};

/// Translates raw media signals into canonical actions for a [`Host`]
///
/// Every entry point runs synchronously to completion and never fails. Input the
/// dispatcher cannot use is either reported as unhandled or silently dropped.
#[derive(Debug)]
pub struct ActionDispatcher<H, T = StateAwareToggle> {
  host: H,
  toggle: T,
}

impl<H: Host> ActionDispatcher<H> {
  pub fn new(host: H) -> Self {
    Self::with_toggle(host, StateAwareToggle)
  }
}

impl<H: Host, T: ToggleStrategy> ActionDispatcher<H, T> {
  pub fn with_toggle(host: H, toggle: T) -> Self {
    Self { host, toggle }
  }

  pub fn host(&self) -> &H {
    &self.host
  }

  pub fn toggle(&self) -> &T {
    &self.toggle
  }

  /// Handles a media button event
  ///
  /// Returns `false` when the event was not consumed, so the platform can apply
  /// its default handling. Only the press phase is acted on, releases would
  /// otherwise fire every action twice.
  pub fn handle_raw_event(&self, event: &RawInputEvent) -> bool {
    let Some(key) = event.key() else {
      warn!("Received media button event with no key");
      return false;
    };

    if key.phase != KeyPhase::Press {
      return false;
    }

    debug!("Media button event: {}", key.code.raw());

    match route_key(key.code) {
      KeyRoute::Direct(action) => {
        self.dispatch(ActionEvent::new(action));
        true
      }
      KeyRoute::Toggle => {
        self.toggle_playback();
        true
      }
      KeyRoute::Unhandled => {
        warn!("Unhandled media button: {}", key.code.raw());
        false
      }
    }
  }

  /// What a toggle would dispatch right now, without dispatching it
  pub fn resolve_toggle(&self) -> Option<ActionEvent> {
    self.toggle.resolve(self.host.playback_state(), &self.host)
  }

  pub fn toggle_playback(&self) -> Option<ActionEvent> {
    let resolved = self.resolve_toggle();

    match resolved {
      Some(event) => {
        debug!("Toggle: triggering {}", event.action);
        self.dispatch(event);
      }
      None => debug!("Toggle: no suitable handler registered"),
    }

    resolved
  }

  /// Seeks to an absolute position, given in milliseconds
  pub fn on_seek_to(&self, position_millis: i64) {
    debug!("on_seek_to called with position: {position_millis}");
    self.dispatch(ActionEvent::seek_to(position_millis));
  }

  /// Dispatches the callback's action unconditionally
  ///
  /// Whether a handler exists is left to the host.
  pub fn on_callback(&self, callback: TransportCallback) {
    debug!("{} called", callback.name());
    self.dispatch(ActionEvent::new(callback.action()));
  }

  fn dispatch(&self, event: ActionEvent) {
    self.host.dispatch(event);
  }
}
