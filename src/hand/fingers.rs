use super::*;
use crate::DIGITS;

/// Open/closed state of each digit, thumb first.
///
/// Extension is judged against the detector's image axes, not the hand's
/// own frame. The thumb counts as open when its tip sits left of the joint
/// below it, which only holds for a right hand seen in a mirrored frame.
/// The other digits count as open when the tip sits above the middle knuckle.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Fingers([bool; DIGITS]);

impl Fingers {
    pub fn is_open(&self, digit: Digit) -> bool {
        self.0[digit as usize]
    }
    pub fn state(&self) -> [bool; DIGITS] {
        self.0
    }
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&open| open).count()
    }
}

impl From<&HandPose> for Fingers {
    fn from(pose: &HandPose) -> Self {
        Self(Digit::ALL.map(|digit| {
            let tip = pose.tip(digit);
            let joint = pose.joint(digit);
            match digit {
                Digit::Thumb => tip.x < joint.x,
                _ => tip.y < joint.y,
            }
        }))
    }
}

impl From<[bool; DIGITS]> for Fingers {
    fn from(state: [bool; DIGITS]) -> Self {
        Self(state)
    }
}

/// Parse a pattern like `"01100"`, thumb first, `1` for open.
impl TryFrom<&str> for Fingers {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let bits = s
            .trim()
            .chars()
            .map(|c| match c {
                '1' => Ok(true),
                '0' => Ok(false),
                _ => Err(anyhow::anyhow!("invalid finger flag {:?} in {:?}", c, s)),
            })
            .collect::<anyhow::Result<Vec<bool>>>()?;
        <[bool; DIGITS]>::try_from(bits)
            .map(Self)
            .map_err(|v| anyhow::anyhow!("expected {} finger flags, got {}", DIGITS, v.len()))
    }
}

impl std::fmt::Display for Fingers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|&open| if open { "1" } else { "0" })
                .collect::<Vec<_>>()
                .join(",")
        )
    }
}
