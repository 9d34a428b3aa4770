use super::*;
use crate::hand::HandPose;

/// Applies confidence thresholds and orientation to a detector's output.
///
/// Picking up a new hand uses the detection threshold; once a hand has
/// been kept, the next frame is held to the tracking threshold instead.
pub struct Tracker<D> {
    detector: D,
    config: TrackerConfig,
    tracking: bool,
}

impl<D> Tracker<D>
where
    D: Detector,
{
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            config,
            tracking: false,
        }
    }

    /// Hands worth classifying on the next frame, in detector order.
    /// `None` once the detector is exhausted.
    pub fn poll(&mut self) -> anyhow::Result<Option<Vec<HandPose>>> {
        let Some(frame) = self.detector.next()? else {
            return Ok(None);
        };
        let threshold = self.config.threshold(self.tracking);
        let found = frame.hands.len();
        let hands = frame
            .hands
            .into_iter()
            .filter(|hand| hand.score >= threshold)
            .map(|hand| match self.config.mirror {
                true => hand.landmarks.mirror(),
                false => hand.landmarks,
            })
            .collect::<Vec<HandPose>>();
        if hands.len() < found {
            log::debug!("dropped {} of {} hands below {:.2}", found - hands.len(), found, threshold);
        }
        self.tracking = !hands.is_empty();
        Ok(Some(hands))
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }
    pub fn release(&mut self) {
        self.detector.release()
    }
    pub fn detector(&self) -> &D {
        &self.detector
    }
}
