mod actions;
mod keys;
mod state;

pub use actions::*;
pub use keys::*;
pub use state::*;
