mod session;
mod tally;

pub use session::*;
pub use tally::*;
