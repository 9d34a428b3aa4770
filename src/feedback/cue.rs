use crate::round::Outcome;

/// Sound effect for a resolved round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Cue {
    Win,
    Lose,
    Tie,
}

impl Cue {
    pub fn file(&self) -> &'static str {
        match self {
            Cue::Win => crate::WIN_SOUND,
            Cue::Lose => crate::LOSE_SOUND,
            Cue::Tie => crate::TIE_SOUND,
        }
    }
}

impl From<Outcome> for Cue {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWin => Cue::Win,
            Outcome::OpponentWin => Cue::Lose,
            Outcome::Tie => Cue::Tie,
        }
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.file())
    }
}
