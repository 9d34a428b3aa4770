//! Hand geometry as reported by a landmark detector.
//!
//! A detected hand is 21 normalized 2-D points in the detector's anatomical
//! order: the wrist, then four joints per digit from the base to the tip.
//! From those points we derive which digits are extended.

mod digit;
mod fingers;
mod landmark;
mod pose;

pub use digit::*;
pub use fingers::*;
pub use landmark::*;
pub use pose::*;
