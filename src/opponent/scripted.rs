use super::*;
use crate::gesture::Gesture;

/// Cycles through a fixed list of moves. Useful for replays and tests.
pub struct Scripted {
    moves: Vec<Gesture>,
    cursor: usize,
}

impl Scripted {
    pub fn new(moves: Vec<Gesture>) -> Self {
        assert!(!moves.is_empty(), "scripted opponent needs at least one move");
        assert!(
            moves.iter().all(Gesture::is_move),
            "scripted opponent can only throw moves"
        );
        Self { moves, cursor: 0 }
    }
}

impl From<Gesture> for Scripted {
    fn from(gesture: Gesture) -> Self {
        Self::new(vec![gesture])
    }
}

impl Opponent for Scripted {
    fn throw(&mut self) -> Gesture {
        let gesture = self.moves[self.cursor % self.moves.len()];
        self.cursor += 1;
        gesture
    }
}
