use crate::Arbitrary;
use crate::Coordinate;

/// A single detector point in normalized image coordinates.
/// Smaller `y` is higher in the frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Landmark {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Landmark {
    pub fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }
    /// Reflect across the vertical center line of the frame.
    pub fn mirror(&self) -> Self {
        Self::new(1. - self.x, self.y)
    }
}

impl Arbitrary for Landmark {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self::new(rng.random_range(0. ..=1.), rng.random_range(0. ..=1.))
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
