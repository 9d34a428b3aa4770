/// The five digits of a hand, in detector order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Digit {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Digit {
    pub const ALL: [Self; crate::DIGITS] = [
        Digit::Thumb,
        Digit::Index,
        Digit::Middle,
        Digit::Ring,
        Digit::Pinky,
    ];

    /// Landmark index of the fingertip.
    pub fn tip(&self) -> usize {
        4 * (*self as usize + 1)
    }

    /// Landmark the tip is compared against when testing for extension.
    /// The thumb uses the joint right below its tip; the other
    /// digits skip one joint and use the middle knuckle.
    pub fn joint(&self) -> usize {
        match self {
            Digit::Thumb => self.tip() - 1,
            _ => self.tip() - 2,
        }
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Digit::Thumb => "thumb",
                Digit::Index => "index",
                Digit::Middle => "middle",
                Digit::Ring => "ring",
                Digit::Pinky => "pinky",
            }
        )
    }
}
