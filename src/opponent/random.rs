use super::*;
use crate::gesture::Gesture;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Uniform choice over the three moves.
/// Seeding makes a session reproducible; it is not meant to be unguessable.
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Option<u64>> for Random {
    fn from(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }
}

impl Opponent for Random {
    fn throw(&mut self) -> Gesture {
        Gesture::MOVES
            .choose(&mut self.rng)
            .copied()
            .expect("non empty move set")
    }
}
