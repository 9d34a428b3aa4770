use crate::round::Outcome;

/// Running score for one session. Counters only ever go up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Tally {
    wins: usize,
    losses: usize,
    ties: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.wins += 1,
            Outcome::OpponentWin => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn ties(&self) -> usize {
        self.ties
    }
    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.ties
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wins: {} | Losses: {} | Ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}
