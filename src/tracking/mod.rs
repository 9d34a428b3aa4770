//! Hand tracking collaborators.
//!
//! A [`Detector`] is whatever produces raw per-frame hand detections: a camera
//! plus a landmark model, a recording of one, or an in-memory queue. The
//! [`Tracker`] sits on top and applies confidence thresholds and mirroring
//! so the rest of the game only ever sees hands worth classifying.

mod config;
mod detector;
mod frame;
mod queue;
mod replay;
mod tracker;

pub use config::*;
pub use detector::*;
pub use frame::*;
pub use queue::*;
pub use replay::*;
pub use tracker::*;
