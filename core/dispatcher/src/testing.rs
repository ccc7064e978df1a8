use std::{
  cell::{Cell, RefCell},
  collections::HashSet,
};

use msb_actions::{ActionEvent, CanonicalAction, PlaybackState};
use proptest::{prelude::*, sample::subsequence};

use crate::{HandlerRegistry, Host};

pub fn handlers(actions: &[CanonicalAction]) -> HashSet<CanonicalAction> {
  actions.iter().copied().collect()
}

pub fn any_state() -> impl Strategy<Value = PlaybackState> {
  prop_oneof![
    Just(PlaybackState::Playing),
    Just(PlaybackState::Paused),
    Just(PlaybackState::Stopped),
    Just(PlaybackState::None),
  ]
}

pub fn any_handlers() -> impl Strategy<Value = HashSet<CanonicalAction>> {
  let all = CanonicalAction::ALL.to_vec();
  let len = all.len();
  subsequence(all, 0..=len).prop_map(|actions| handlers(&actions))
}

/// A host that records every dispatched action
#[derive(Debug, Default)]
pub struct RecordingHost {
  state: Cell<PlaybackState>,
  handlers: HashSet<CanonicalAction>,
  dispatched: RefCell<Vec<ActionEvent>>,
}

impl RecordingHost {
  pub fn new(state: PlaybackState, actions: &[CanonicalAction]) -> Self {
    Self {
      state: Cell::new(state),
      handlers: handlers(actions),
      dispatched: RefCell::default(),
    }
  }

  pub fn with_all_handlers(state: PlaybackState) -> Self {
    Self::new(state, CanonicalAction::ALL)
  }

  pub fn set_state(&self, state: PlaybackState) {
    self.state.set(state);
  }

  pub fn take_dispatched(&self) -> Vec<ActionEvent> {
    self.dispatched.take()
  }
}

impl HandlerRegistry for RecordingHost {
  fn has_handler(&self, action: CanonicalAction) -> bool {
    self.handlers.contains(&action)
  }
}

impl Host for RecordingHost {
  fn playback_state(&self) -> PlaybackState {
    self.state.get()
  }

  fn dispatch(&self, event: ActionEvent) {
    self.dispatched.borrow_mut().push(event);
  }
}
