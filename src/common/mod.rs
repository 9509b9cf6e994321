pub use errors::*;

pub mod config;
pub mod logging;

mod errors;
