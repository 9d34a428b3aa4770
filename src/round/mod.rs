mod outcome;
mod resolver;

pub use outcome::*;
pub use resolver::*;
