use super::*;
use crate::feedback::Feedback;
use crate::gesture::Gesture;
use crate::gesture::classify_first;
use crate::opponent::Opponent;
use crate::round::Round;
use crate::session::Session;
use crate::session::Tally;
use crate::tracking::Detector;
use crate::tracking::Tracker;
use crate::tracking::TrackerConfig;

/// A single player at the camera against the computer.
///
/// Each step samples one frame, classifies the first kept hand and lets the
/// session decide whether that starts a round. Steps never overlap.
pub struct Room<D, O, F> {
    tracker: Tracker<D>,
    session: Session<O>,
    feedback: F,
    config: RoomConfig,
    failures: usize,
}

impl<D, O, F> Room<D, O, F>
where
    D: Detector,
    O: Opponent,
    F: Feedback,
{
    pub fn new(
        detector: D,
        opponent: O,
        feedback: F,
        tracking: TrackerConfig,
        config: RoomConfig,
    ) -> Self {
        Self {
            tracker: Tracker::new(detector, tracking),
            session: Session::new(opponent),
            feedback,
            config,
            failures: 0,
        }
    }

    /// Process one frame. `Ok(None)` once the detector is exhausted,
    /// otherwise the classified gesture and the round it started, if any.
    ///
    /// A frame the detector fails to deliver is logged and played as a frame
    /// without a hand. Only after more than `patience` failures in a row is
    /// the error returned.
    pub fn step(&mut self) -> anyhow::Result<Option<(Gesture, Option<Round>)>> {
        let hands = match self.tracker.poll() {
            Ok(Some(hands)) => {
                self.failures = 0;
                hands
            }
            Ok(None) => return Ok(None),
            Err(e) => {
                self.failures += 1;
                if self.failures > self.config.patience {
                    return Err(e.context(format!("{} failed frames in a row", self.failures)));
                }
                log::warn!("skipping frame: {:#}", e);
                Vec::new()
            }
        };
        let gesture = classify_first(&hands);
        log::debug!("classified {} from {} hands", gesture, hands.len());
        self.feedback.gesture(gesture);
        let round = self.session.observe(gesture);
        if let Some(ref round) = round {
            self.feedback.round(round, self.session.tally());
        }
        Ok(Some((gesture, round)))
    }

    /// Step every interval until the detector runs dry, gives up, or enough
    /// rounds have been played. The detector is released, the feedback closed
    /// and the score returned however the game ended.
    pub fn run(&mut self) -> Tally {
        self.play();
        self.tracker.release();
        self.feedback.close(self.session.tally());
        log::info!("session over: {}", self.session.tally());
        *self.session.tally()
    }

    fn play(&mut self) {
        while !self.finished() {
            let tick = std::time::Instant::now();
            match self.step() {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(e) => {
                    log::error!("giving up on detector: {:#}", e);
                    break;
                }
            }
            if let Some(rest) = self.config.interval.checked_sub(tick.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    fn finished(&self) -> bool {
        self.config
            .rounds
            .map_or(false, |n| self.session.tally().rounds() >= n)
    }

    pub fn session(&self) -> &Session<O> {
        &self.session
    }
    pub fn feedback(&self) -> &F {
        &self.feedback
    }
    pub fn tracker(&self) -> &Tracker<D> {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Cue;
    use crate::feedback::Transcript;
    use crate::hand::Fingers;
    use crate::hand::HandPose;
    use crate::opponent::Scripted;
    use crate::round::Outcome;
    use crate::tracking::Frame;
    use crate::tracking::Queue;
    use crate::tracking::Replay;
    use std::time::Duration;

    fn frame(pattern: &str) -> Frame {
        Frame::from(HandPose::from(Fingers::try_from(pattern).unwrap()))
    }

    fn room(frames: Vec<Frame>, rounds: Option<usize>) -> Room<Queue, Scripted, Transcript> {
        Room::new(
            Queue::from_iter(frames),
            Scripted::from(Gesture::Scissors),
            Transcript::default(),
            TrackerConfig::default(),
            RoomConfig {
                interval: Duration::ZERO,
                rounds,
                ..RoomConfig::default()
            },
        )
    }

    struct Broken;
    impl Detector for Broken {
        fn next(&mut self) -> anyhow::Result<Option<Frame>> {
            Err(anyhow::anyhow!("camera unplugged"))
        }
    }

    /// Fails on every other call and runs dry after eight.
    struct Flaky(usize);
    impl Detector for Flaky {
        fn next(&mut self) -> anyhow::Result<Option<Frame>> {
            self.0 += 1;
            match self.0 {
                n if n > 8 => Ok(None),
                n if n % 2 == 0 => Err(anyhow::anyhow!("dropped frame")),
                _ => Ok(Some(Frame::empty())),
            }
        }
    }

    #[test]
    fn step_reports_gesture_and_round() {
        let mut room = room(vec![frame("00000"), frame("00000")], None);
        let (gesture, round) = room.step().unwrap().unwrap();
        assert_eq!(gesture, Gesture::Rock);
        assert_eq!(round.unwrap().outcome, Outcome::PlayerWin);
        let (gesture, round) = room.step().unwrap().unwrap();
        assert_eq!(gesture, Gesture::Rock);
        assert!(round.is_none());
        assert!(room.step().unwrap().is_none());
    }

    #[test]
    fn run_plays_whole_recording() {
        let frames = vec![
            frame("00000"),
            frame("00000"),
            frame("00000"),
            frame("11111"),
            frame("11111"),
            Frame::empty(),
            frame("00000"),
            frame("10000"),
            frame("01100"),
        ];
        let mut room = room(frames, None);
        let tally = room.run();
        // rock beats scissors twice, paper loses, scissors ties
        assert_eq!((tally.wins(), tally.losses(), tally.ties()), (2, 1, 1));
        let transcript = room.feedback();
        assert_eq!(transcript.frames().len(), 9);
        assert_eq!(transcript.rounds().count(), 4);
        assert_eq!(
            transcript.cues().collect::<Vec<_>>(),
            vec![Cue::Win, Cue::Lose, Cue::Win, Cue::Tie]
        );
        assert_eq!(transcript.closed(), Some(&tally));
        assert!(room.tracker().detector().is_released());
    }

    #[test]
    fn run_stops_after_enough_rounds() {
        let frames = vec![frame("00000"), frame("11111"), frame("01100")];
        let mut room = room(frames, Some(2));
        let tally = room.run();
        assert_eq!(tally.rounds(), 2);
        assert_eq!(room.feedback().frames().len(), 2);
    }

    #[test]
    fn demo_recording_plays_six_rounds() {
        let recording = include_str!("../../demos/session.jsonl");
        let mut room = Room::new(
            Replay::from(recording.as_bytes()),
            Scripted::from(Gesture::Rock),
            Transcript::default(),
            TrackerConfig::default(),
            RoomConfig {
                interval: Duration::ZERO,
                ..RoomConfig::default()
            },
        );
        let tally = room.run();
        let played = room.feedback().rounds().map(|r| r.player).collect::<Vec<_>>();
        assert_eq!(
            played,
            vec![
                Gesture::Rock,
                Gesture::Paper,
                Gesture::Scissors,
                Gesture::Rock,
                Gesture::Scissors,
                Gesture::Paper
            ]
        );
        assert_eq!((tally.wins(), tally.losses(), tally.ties()), (2, 2, 2));
        assert_eq!(room.feedback().frames().len(), 27);
    }

    #[test]
    fn bad_line_plays_as_empty_frame() {
        let rock = serde_json::to_string(&frame("00000")).unwrap();
        let recording = format!("not json\n{}\n", rock);
        let mut room = Room::new(
            Replay::from(recording.as_bytes()),
            Scripted::from(Gesture::Scissors),
            Transcript::default(),
            TrackerConfig::default(),
            RoomConfig::default(),
        );
        assert_eq!(room.step().unwrap(), Some((Gesture::None, None)));
        let (gesture, round) = room.step().unwrap().unwrap();
        assert_eq!(gesture, Gesture::Rock);
        assert_eq!(round.unwrap().outcome, Outcome::PlayerWin);
        assert!(room.step().unwrap().is_none());
    }

    #[test]
    fn bad_line_mid_recording_keeps_playing() {
        let mut lines = include_str!("../../demos/session.jsonl")
            .lines()
            .collect::<Vec<_>>();
        lines.insert(3, r#"{"hands":[{"landmarks":[]}]}"#);
        let recording = lines.join("\n");
        let mut room = Room::new(
            Replay::from(recording.as_bytes()),
            Scripted::from(Gesture::Rock),
            Transcript::default(),
            TrackerConfig::default(),
            RoomConfig {
                interval: Duration::ZERO,
                ..RoomConfig::default()
            },
        );
        let tally = room.run();
        assert_eq!(tally.rounds(), 6);
        assert_eq!((tally.wins(), tally.losses(), tally.ties()), (2, 2, 2));
        assert_eq!(room.feedback().frames().len(), 28);
        assert_eq!(room.feedback().frames()[3], Gesture::None);
        assert_eq!(room.feedback().closed(), Some(&tally));
    }

    #[test]
    fn dead_detector_ends_game_with_score() {
        let mut room = Room::new(
            Broken,
            Scripted::from(Gesture::Rock),
            Transcript::default(),
            TrackerConfig::default(),
            RoomConfig {
                interval: Duration::ZERO,
                rounds: None,
                patience: 3,
            },
        );
        assert_eq!(room.run(), Tally::default());
        assert_eq!(room.feedback().frames().len(), 3);
        assert_eq!(room.feedback().closed(), Some(&Tally::default()));
    }

    #[test]
    fn success_resets_failure_count() {
        let mut room = Room::new(
            Flaky(0),
            Scripted::from(Gesture::Rock),
            Transcript::default(),
            TrackerConfig::default(),
            RoomConfig {
                interval: Duration::ZERO,
                rounds: None,
                patience: 1,
            },
        );
        room.run();
        // every other frame fails, never two in a row
        assert_eq!(room.feedback().frames().len(), 8);
    }
}
