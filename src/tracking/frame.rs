use crate::Confidence;
use crate::hand::HandPose;

/// Every hand a detector found in one frame, in detector order.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub hands: Vec<Detection>,
}

/// One detected hand and how sure the detector is about it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Detection {
    #[serde(default = "certain")]
    pub score: Confidence,
    pub landmarks: HandPose,
}

fn certain() -> Confidence {
    1.
}

impl Frame {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

impl From<HandPose> for Frame {
    fn from(pose: HandPose) -> Self {
        Self {
            hands: vec![Detection::from(pose)],
        }
    }
}

impl From<Vec<Detection>> for Frame {
    fn from(hands: Vec<Detection>) -> Self {
        Self { hands }
    }
}

impl From<HandPose> for Detection {
    fn from(landmarks: HandPose) -> Self {
        Self {
            score: certain(),
            landmarks,
        }
    }
}

impl From<(Confidence, HandPose)> for Detection {
    fn from((score, landmarks): (Confidence, HandPose)) -> Self {
        Self { score, landmarks }
    }
}
