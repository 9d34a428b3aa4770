use super::*;
use crate::gesture::Gesture;
use crate::opponent::Opponent;
use crate::round::Round;

/// Per-player game state across frames.
///
/// Holding a gesture in front of the camera produces the same
/// classification frame after frame; only a change of move starts a new
/// round. `previous` is the last move that started a round, so frames
/// with no readable hand leave it untouched.
pub struct Session<O> {
    previous: Gesture,
    tally: Tally,
    opponent: O,
}

impl<O> Session<O>
where
    O: Opponent,
{
    pub fn new(opponent: O) -> Self {
        Self {
            previous: Gesture::None,
            tally: Tally::default(),
            opponent,
        }
    }

    /// Feed one classified frame. Returns the round it started, if any.
    pub fn observe(&mut self, gesture: Gesture) -> Option<Round> {
        if !gesture.is_move() || gesture == self.previous {
            return None;
        }
        self.previous = gesture;
        let round = Round::from((gesture, self.opponent.throw()));
        self.tally.record(round.outcome);
        log::info!("{}", round);
        log::debug!("{}", self.tally);
        Some(round)
    }

    pub fn previous(&self) -> Gesture {
        self.previous
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::Random;
    use crate::opponent::Scripted;
    use crate::round::Outcome;

    #[test]
    fn held_gesture_plays_once() {
        let mut session = Session::new(Scripted::from(Gesture::Paper));
        let frames = [
            Gesture::Rock,
            Gesture::Rock,
            Gesture::Rock,
            Gesture::Paper,
            Gesture::Paper,
            Gesture::None,
            Gesture::Rock,
        ];
        let played = frames
            .into_iter()
            .filter_map(|g| session.observe(g))
            .map(|round| round.player)
            .collect::<Vec<_>>();
        assert_eq!(played, vec![Gesture::Rock, Gesture::Paper, Gesture::Rock]);
        assert_eq!(session.tally().rounds(), 3);
    }

    #[test]
    fn empty_frames_never_play() {
        let mut session = Session::new(Random::seeded(0));
        for _ in 0..10 {
            assert!(session.observe(Gesture::None).is_none());
        }
        assert_eq!(session.previous(), Gesture::None);
        assert_eq!(session.tally().rounds(), 0);
    }

    #[test]
    fn empty_frame_does_not_reset_held_gesture() {
        let mut session = Session::new(Random::seeded(0));
        assert!(session.observe(Gesture::Scissors).is_some());
        assert!(session.observe(Gesture::None).is_none());
        assert!(session.observe(Gesture::Scissors).is_none());
        assert_eq!(session.previous(), Gesture::Scissors);
        assert_eq!(session.tally().rounds(), 1);
    }

    #[test]
    fn first_rock_against_scissors_wins() {
        let mut session = Session::new(Scripted::from(Gesture::Scissors));
        let round = session.observe(Gesture::Rock).unwrap();
        assert_eq!(round.outcome, Outcome::PlayerWin);
        let tally = session.tally();
        assert_eq!((tally.wins(), tally.losses(), tally.ties()), (1, 0, 0));
    }

    #[test]
    fn tally_counts_every_round() {
        let mut session = Session::new(Random::seeded(1234));
        let mut rounds = 0;
        let mut last = *session.tally();
        for i in 0..500 {
            let gesture = match i % 7 {
                0 | 1 => Gesture::Rock,
                2 => Gesture::None,
                3 => Gesture::Paper,
                4 | 5 => Gesture::Scissors,
                _ => Gesture::None,
            };
            rounds += session.observe(gesture).iter().count();
            let tally = *session.tally();
            assert!(tally.wins() >= last.wins());
            assert!(tally.losses() >= last.losses());
            assert!(tally.ties() >= last.ties());
            assert_eq!(tally.rounds(), rounds);
            last = tally;
        }
        assert!(rounds > 0);
    }
}
