use crate::Confidence;

/// Detector thresholds and frame orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Score needed to pick up a hand when none was kept on the last frame.
    pub min_detection_confidence: Confidence,
    /// Score needed to keep following a hand that was kept on the last frame.
    pub min_tracking_confidence: Confidence,
    /// Flip frames horizontally before classification, as a selfie view does.
    pub mirror: bool,
}

impl TrackerConfig {
    pub fn threshold(&self, tracking: bool) -> Confidence {
        match tracking {
            true => self.min_tracking_confidence,
            false => self.min_detection_confidence,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: crate::MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: crate::MIN_TRACKING_CONFIDENCE,
            mirror: false,
        }
    }
}
