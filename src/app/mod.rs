//! Explicit application state and the actions that drive it.

pub use action::*;
pub use state::*;

mod action;
mod state;
