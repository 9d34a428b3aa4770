//! The polling loop that ties a detector, a session and a display together.

mod config;
mod room;

pub use config::*;
pub use room::*;
