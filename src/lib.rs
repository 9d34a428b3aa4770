pub mod feedback;
pub mod gesture;
pub mod hand;
pub mod opponent;
pub mod room;
pub mod round;
pub mod session;
pub mod tracking;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Normalized image coordinate, 0 at the left/top edge and 1 at the right/bottom.
pub type Coordinate = f32;
/// Detector score attached to each detected hand.
pub type Confidence = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// HAND DETECTOR PARAMETERS
// ============================================================================
/// Landmarks per detected hand (wrist, then four joints per digit).
pub const LANDMARKS: usize = 21;
/// Digits per hand.
pub const DIGITS: usize = 5;
/// Minimum score for a hand to be picked up when none is being tracked.
pub const MIN_DETECTION_CONFIDENCE: Confidence = 0.8;
/// Minimum score for a hand to stay tracked across consecutive frames.
pub const MIN_TRACKING_CONFIDENCE: Confidence = 0.8;

// ============================================================================
// GAME LOOP PARAMETERS
// ============================================================================
/// Interval between sampled frames (about 33 frames per second).
pub const FRAME_INTERVAL: std::time::Duration = std::time::Duration::from_millis(30);
/// Failed frames in a row tolerated before the detector is given up on.
pub const MAX_FAILED_FRAMES: usize = 100;
/// Sound effect played when the player wins a round.
pub const WIN_SOUND: &str = "win.wav";
/// Sound effect played when the opponent wins a round.
pub const LOSE_SOUND: &str = "lose.wav";
/// Sound effect played on a tie.
pub const TIE_SOUND: &str = "tie.wav";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
