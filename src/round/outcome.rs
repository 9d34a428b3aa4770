/// Result of one round, from the player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    PlayerWin,
    OpponentWin,
    Tie,
}

impl Outcome {
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::PlayerWin => "You Win!",
                Outcome::OpponentWin => "AI Wins!",
                Outcome::Tie => "It's a Tie!",
            }
        )
    }
}
