use log::debug;
use msb_actions::{ActionEvent, ActionPayload, CanonicalAction, PlaybackState};

use crate::HandlerRegistry;

/// Decides what a play/pause toggle means
///
/// Implementations must be pure: the same state and registry always resolve to
/// the same action.
pub trait ToggleStrategy {
  fn resolve(&self, state: PlaybackState, handlers: &dyn HandlerRegistry) -> Option<ActionEvent>;
}

impl<T: ToggleStrategy + ?Sized> ToggleStrategy for Box<T> {
  fn resolve(&self, state: PlaybackState, handlers: &dyn HandlerRegistry) -> Option<ActionEvent> {
    (**self).resolve(state, handlers)
  }
}

/// Picks play or pause from the host's playback state
///
/// While playing only `pause` is ever chosen. Otherwise `play` is preferred, and
/// `pause` is used when it is the only handler, for hosts that register a single
/// toggle-style handler under that name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateAwareToggle;

impl ToggleStrategy for StateAwareToggle {
  fn resolve(&self, state: PlaybackState, handlers: &dyn HandlerRegistry) -> Option<ActionEvent> {
    debug!("Resolving toggle, current playback state: {state}");

    let action = if state.is_playing() {
      handlers
        .has_handler(CanonicalAction::Pause)
        .then_some(CanonicalAction::Pause)
    } else if handlers.has_handler(CanonicalAction::Play) {
      Some(CanonicalAction::Play)
    } else if handlers.has_handler(CanonicalAction::Pause) {
      debug!("Toggle: falling back to pause, no play handler");
      Some(CanonicalAction::Pause)
    } else {
      None
    };

    action.map(ActionEvent::new)
  }
}

/// Ignores playback state and lets the host disambiguate
///
/// Whenever a `pause` handler exists it receives the toggle, flagged with
/// `toggle: true`. A host with only a `play` handler gets a plain `play`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagDelegatedToggle;

impl ToggleStrategy for FlagDelegatedToggle {
  fn resolve(&self, _state: PlaybackState, handlers: &dyn HandlerRegistry) -> Option<ActionEvent> {
    if handlers.has_handler(CanonicalAction::Pause) {
      Some(ActionEvent::with_payload(
        CanonicalAction::Pause,
        ActionPayload::Toggle { toggle: true },
      ))
    } else if handlers.has_handler(CanonicalAction::Play) {
      Some(ActionEvent::new(CanonicalAction::Play))
    } else {
      None
    }
  }
}

/// Runtime selection between the toggle strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleKind {
  #[default]
  StateAware,
  FlagDelegated,
}

impl ToggleStrategy for ToggleKind {
  fn resolve(&self, state: PlaybackState, handlers: &dyn HandlerRegistry) -> Option<ActionEvent> {
    match self {
      ToggleKind::StateAware => StateAwareToggle.resolve(state, handlers),
      ToggleKind::FlagDelegated => FlagDelegatedToggle.resolve(state, handlers),
    }
  }
}
