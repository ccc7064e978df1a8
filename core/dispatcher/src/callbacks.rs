use msb_actions::CanonicalAction;

use crate::{ActionDispatcher, Host, ToggleStrategy};

macro_rules! transport_callbacks {
  ($($name:ident => $action:ident,)*) => {
paste::paste! {
  /// The transport control callbacks a media session delivers
  ///
  /// Each callback maps to exactly one action. The dispatcher gets an
  /// `on_<callback>` method per variant, e.g. `on_skip_to_next`.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub enum TransportCallback {
    $($name,)*
  }

  impl TransportCallback {
    pub const ALL: &'static [TransportCallback] = &[$(TransportCallback::$name),*];

    pub const fn action(self) -> CanonicalAction {
      match self {
        $(TransportCallback::$name => CanonicalAction::$action,)*
      }
    }

    pub const fn name(self) -> &'static str {
      match self {
        $(TransportCallback::$name => stringify!([<on_ $name:snake>]),)*
      }
    }
  }

  impl<H: Host, T: ToggleStrategy> ActionDispatcher<H, T> {
    $(
      pub fn [<on_ $name:snake>](&self) {
        self.on_callback(TransportCallback::$name)
      }
    )*
  }
}
  };
}

transport_callbacks! {
  Play => Play,
  Pause => Pause,
  Rewind => SeekBackward,
  FastForward => SeekForward,
  SkipToPrevious => PreviousTrack,
  SkipToNext => NextTrack,
  Stop => Stop,
}
