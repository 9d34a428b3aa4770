use std::time::Duration;

/// Pacing and length of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomConfig {
    /// Time between sampled frames. Zero polls as fast as the detector allows.
    pub interval: Duration,
    /// Stop after this many rounds. `None` plays until the detector runs dry.
    pub rounds: Option<usize>,
    /// Failed frames in a row skipped before the game ends early.
    pub patience: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            interval: crate::FRAME_INTERVAL,
            rounds: None,
            patience: crate::MAX_FAILED_FRAMES,
        }
    }
}
