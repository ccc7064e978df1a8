use std::{collections::HashSet, sync::Arc};

use msb_actions::{ActionEvent, CanonicalAction, PlaybackState};

/// Answers whether the host currently has a subscriber for an action
pub trait HandlerRegistry {
  fn has_handler(&self, action: CanonicalAction) -> bool;
}

/// The application side of the dispatcher
///
/// The playback state is only ever read by the dispatcher. Toggle resolution
/// relies on the host updating it after acting on every dispatched action,
/// otherwise each toggle resolves against stale state.
pub trait Host: HandlerRegistry {
  fn playback_state(&self) -> PlaybackState;

  /// Fire and forget, the dispatcher never observes the outcome
  fn dispatch(&self, event: ActionEvent);
}

impl HandlerRegistry for HashSet<CanonicalAction> {
  fn has_handler(&self, action: CanonicalAction) -> bool {
    self.contains(&action)
  }
}

impl<R: HandlerRegistry + ?Sized> HandlerRegistry for &R {
  fn has_handler(&self, action: CanonicalAction) -> bool {
    (**self).has_handler(action)
  }
}

impl<R: HandlerRegistry + ?Sized> HandlerRegistry for Arc<R> {
  fn has_handler(&self, action: CanonicalAction) -> bool {
    (**self).has_handler(action)
  }
}

impl<H: Host + ?Sized> Host for &H {
  fn playback_state(&self) -> PlaybackState {
    (**self).playback_state()
  }

  fn dispatch(&self, event: ActionEvent) {
    (**self).dispatch(event)
  }
}

impl<H: Host + ?Sized> Host for Arc<H> {
  fn playback_state(&self) -> PlaybackState {
    (**self).playback_state()
  }

  fn dispatch(&self, event: ActionEvent) {
    (**self).dispatch(event)
  }
}
