use super::*;
use crate::gesture::Gesture;

/// Decide a round. Both sides must have thrown an actual move.
pub fn resolve(player: Gesture, opponent: Gesture) -> Outcome {
    assert!(player.is_move(), "player must throw a move to resolve a round");
    assert!(opponent.is_move(), "opponent must throw a move to resolve a round");
    if player == opponent {
        Outcome::Tie
    } else if player.beats() == opponent {
        Outcome::PlayerWin
    } else {
        Outcome::OpponentWin
    }
}

/// One resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub player: Gesture,
    pub opponent: Gesture,
    pub outcome: Outcome,
}

impl From<(Gesture, Gesture)> for Round {
    fn from((player, opponent): (Gesture, Gesture)) -> Self {
        Self {
            player,
            opponent,
            outcome: resolve(player, opponent),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "You: {} | AI: {} | {}",
            self.player, self.opponent, self.outcome
        )
    }
}
