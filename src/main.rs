//! Roshambo Binary
//!
//! Replays recorded hand-landmark frames through a game against the computer.
//!
//! Options: --frames, --seed, --mirror, --interval-ms, --rounds, --detection, --tracking, --summary

use clap::Parser;
use roshambo::feedback::Console;
use roshambo::opponent::Random;
use roshambo::room::Room;
use roshambo::room::RoomConfig;
use roshambo::tracking::Replay;
use roshambo::tracking::TrackerConfig;
use roshambo::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "JSON Lines file of detector output, one frame per line")]
    frames: std::path::PathBuf,
    #[arg(long, help = "Seed the computer's moves for a reproducible game")]
    seed: Option<u64>,
    #[arg(long, help = "Flip frames horizontally before classifying")]
    mirror: bool,
    #[arg(long, default_value_t = FRAME_INTERVAL.as_millis() as u64, help = "Milliseconds between frames")]
    interval_ms: u64,
    #[arg(long, help = "Stop after this many rounds")]
    rounds: Option<usize>,
    #[arg(long, default_value_t = MIN_DETECTION_CONFIDENCE, value_parser = confidence, help = "Score needed to pick up a hand")]
    detection: Confidence,
    #[arg(long, default_value_t = MIN_TRACKING_CONFIDENCE, value_parser = confidence, help = "Score needed to keep a tracked hand")]
    tracking: Confidence,
    #[arg(long, help = "Print the final score as JSON")]
    summary: bool,
}

impl Args {
    fn tracker(&self) -> TrackerConfig {
        TrackerConfig {
            min_detection_confidence: self.detection,
            min_tracking_confidence: self.tracking,
            mirror: self.mirror,
        }
    }
    fn room(&self) -> RoomConfig {
        RoomConfig {
            interval: std::time::Duration::from_millis(self.interval_ms),
            rounds: self.rounds,
            ..RoomConfig::default()
        }
    }
}

/// Detector scores lie within 0..=1. NaN and anything outside are rejected.
fn confidence(arg: &str) -> Result<Confidence, String> {
    let score = arg.parse::<Confidence>().map_err(|e| e.to_string())?;
    match (0.0..=1.0).contains(&score) {
        true => Ok(score),
        false => Err(format!("{} is outside 0.0..=1.0", arg)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log()?;
    let tally = Room::new(
        Replay::open(&args.frames)?,
        Random::from(args.seed),
        Console::default(),
        args.tracker(),
        args.room(),
    )
    .run();
    if args.summary {
        println!("{}", serde_json::to_string(&tally)?);
    }
    Ok(())
}
