mod cue;
mod feedback;
mod transcript;
#[cfg(feature = "cli")]
mod console;

pub use cue::*;
pub use feedback::*;
pub use transcript::*;
#[cfg(feature = "cli")]
pub use console::*;
