//! Normalizes media buttons and transport callbacks into canonical actions
//!
//! The [`ActionDispatcher`] never owns host state. Playback state and handler
//! availability are read through the [`Host`] it was constructed with, and every
//! resolved action is handed back to that same host.

pub use callbacks::TransportCallback;
pub use dispatcher::ActionDispatcher;
pub use host::{HandlerRegistry, Host};
pub use keymap::{KeyRoute, route_key};
pub use source::EventSource;
pub use toggle::{FlagDelegatedToggle, StateAwareToggle, ToggleKind, ToggleStrategy};

mod callbacks;
mod dispatcher;
mod host;
mod keymap;
mod source;
mod toggle;

#[cfg(test)]
mod testing;
