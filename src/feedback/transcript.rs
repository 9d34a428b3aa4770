use super::*;
use crate::gesture::Gesture;
use crate::round::Round;
use crate::session::Tally;

/// Headless feedback that keeps everything it is told.
#[derive(Debug, Default)]
pub struct Transcript {
    frames: Vec<Gesture>,
    rounds: Vec<(Round, Cue)>,
    closed: Option<Tally>,
}

impl Transcript {
    pub fn frames(&self) -> &[Gesture] {
        &self.frames
    }
    pub fn rounds(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter().map(|(round, _)| round)
    }
    pub fn cues(&self) -> impl Iterator<Item = Cue> + '_ {
        self.rounds.iter().map(|(_, cue)| *cue)
    }
    pub fn closed(&self) -> Option<&Tally> {
        self.closed.as_ref()
    }
}

impl Feedback for Transcript {
    fn gesture(&mut self, gesture: Gesture) {
        self.frames.push(gesture);
    }
    fn round(&mut self, round: &Round, _: &Tally) {
        self.rounds.push((*round, Cue::from(round.outcome)));
    }
    fn close(&mut self, tally: &Tally) {
        self.closed = Some(*tally);
    }
}
