use crate::Arbitrary;
use crate::hand::Fingers;

/// What the player is showing in a single frame.
/// `None` covers both an empty frame and a hand we could not read.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Gesture {
    #[default]
    None,
    Rock,
    Paper,
    Scissors,
}

impl Gesture {
    /// The three playable moves.
    pub const MOVES: [Self; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    pub fn is_move(&self) -> bool {
        !matches!(self, Gesture::None)
    }

    /// The move this one defeats.
    pub fn beats(&self) -> Self {
        match self {
            Gesture::Rock => Gesture::Scissors,
            Gesture::Scissors => Gesture::Paper,
            Gesture::Paper => Gesture::Rock,
            Gesture::None => panic!("no gesture cannot beat anything"),
        }
    }
}

/// Exact pattern match over the finger state, first match wins.
impl From<Fingers> for Gesture {
    fn from(fingers: Fingers) -> Self {
        match fingers.state() {
            [false, false, false, false, false] => Gesture::Rock,
            [true, true, true, true, true] => Gesture::Paper,
            [false, true, true, false, false] => Gesture::Scissors,
            _ => Gesture::None,
        }
    }
}

impl Arbitrary for Gesture {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        Self::MOVES
            .choose(&mut rand::rng())
            .copied()
            .expect("non empty move set")
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Gesture::None => "None",
                Gesture::Rock => "Rock",
                Gesture::Paper => "Paper",
                Gesture::Scissors => "Scissors",
            }
        )
    }
}
