mod classifier;
mod gesture;

pub use classifier::*;
pub use gesture::*;
