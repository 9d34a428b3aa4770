use super::*;
use crate::hand::HandPose;

/// Classify the hand in one frame, or `None` if there is no hand.
pub fn classify(hand: Option<&HandPose>) -> Gesture {
    hand.map(|pose| Gesture::from(pose.fingers()))
        .unwrap_or(Gesture::None)
}

/// Classify the first hand in detector order. Any further hands are ignored.
pub fn classify_first(hands: &[HandPose]) -> Gesture {
    classify(hands.first())
}
