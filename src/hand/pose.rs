use super::*;
use crate::Arbitrary;
use crate::LANDMARKS;
use anyhow::Context;

/// One detected hand in one frame: exactly 21 landmarks in detector order.
/// The landmark count is fixed by the type, so every pose that reaches
/// classification is well-formed. Deserialization rejects any other count.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct HandPose([Landmark; LANDMARKS]);

impl HandPose {
    pub fn landmarks(&self) -> &[Landmark; LANDMARKS] {
        &self.0
    }
    pub fn tip(&self, digit: Digit) -> Landmark {
        self.0[digit.tip()]
    }
    pub fn joint(&self, digit: Digit) -> Landmark {
        self.0[digit.joint()]
    }
    /// Reflect every landmark across the vertical center line.
    pub fn mirror(&self) -> Self {
        Self(self.0.map(|l| l.mirror()))
    }
    pub fn fingers(&self) -> Fingers {
        Fingers::from(self)
    }
}

impl std::ops::Index<usize> for HandPose {
    type Output = Landmark;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[Landmark; LANDMARKS]> for HandPose {
    fn from(landmarks: [Landmark; LANDMARKS]) -> Self {
        Self(landmarks)
    }
}

impl TryFrom<Vec<Landmark>> for HandPose {
    type Error = anyhow::Error;
    fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
        let n = landmarks.len();
        <[Landmark; LANDMARKS]>::try_from(landmarks)
            .map(Self)
            .map_err(|_| anyhow::anyhow!("{} landmarks", n))
            .with_context(|| format!("hand pose needs exactly {} landmarks", LANDMARKS))
    }
}

impl From<HandPose> for Vec<Landmark> {
    fn from(pose: HandPose) -> Self {
        pose.0.to_vec()
    }
}

/// Canonical upright hand, palm facing a mirrored camera, with each
/// digit extended or curled according to the given finger state.
/// Classifies back to exactly the same finger state.
impl From<Fingers> for HandPose {
    fn from(fingers: Fingers) -> Self {
        let mut landmarks = [Landmark::default(); LANDMARKS];
        landmarks[0] = Landmark::new(0.50, 0.90);
        // thumb runs leftward: base, knuckle, joint, tip
        let thumb_tip = match fingers.is_open(Digit::Thumb) {
            true => Landmark::new(0.22, 0.66),
            false => Landmark::new(0.34, 0.70),
        };
        landmarks[1] = Landmark::new(0.42, 0.84);
        landmarks[2] = Landmark::new(0.36, 0.78);
        landmarks[3] = Landmark::new(0.29, 0.72);
        landmarks[4] = thumb_tip;
        // other digits run upward in columns
        for digit in Digit::ALL.into_iter().skip(1) {
            let x = 0.38 + 0.07 * (digit as usize as f32);
            let tip = digit.tip();
            let tip_y = match fingers.is_open(digit) {
                true => 0.30,
                false => 0.58,
            };
            landmarks[tip - 3] = Landmark::new(x, 0.62);
            landmarks[tip - 2] = Landmark::new(x, 0.50);
            landmarks[tip - 1] = Landmark::new(x, 0.42);
            landmarks[tip] = Landmark::new(x, tip_y);
        }
        Self(landmarks)
    }
}

impl Arbitrary for HandPose {
    fn random() -> Self {
        Self(std::array::from_fn(|_| Landmark::random()))
    }
}

impl std::fmt::Display for HandPose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wrist {} {}", self.0[0], self.fingers())
    }
}
