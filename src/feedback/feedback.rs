use crate::gesture::Gesture;
use crate::round::Round;
use crate::session::Tally;

/// Display and sound side of the game.
/// Receives every classified frame and every resolved round.
pub trait Feedback {
    /// Called once per sampled frame, including frames without a hand.
    fn gesture(&mut self, gesture: Gesture);

    /// Called once per resolved round with the score after it.
    fn round(&mut self, round: &Round, tally: &Tally);

    /// Called once when the game ends.
    fn close(&mut self, _: &Tally) {}
}

impl<F> Feedback for Box<F>
where
    F: Feedback + ?Sized,
{
    fn gesture(&mut self, gesture: Gesture) {
        self.as_mut().gesture(gesture)
    }
    fn round(&mut self, round: &Round, tally: &Tally) {
        self.as_mut().round(round, tally)
    }
    fn close(&mut self, tally: &Tally) {
        self.as_mut().close(tally)
    }
}
