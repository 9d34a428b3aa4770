use super::*;

/// Source of raw hand detections, one frame at a time.
///
/// The game polls sequentially and never overlaps two calls.
pub trait Detector {
    /// Next frame of detections, or `None` once the source is exhausted.
    fn next(&mut self) -> anyhow::Result<Option<Frame>>;

    /// Give back the underlying device. Called once when the game ends.
    fn release(&mut self) {}
}

impl<D> Detector for Box<D>
where
    D: Detector + ?Sized,
{
    fn next(&mut self) -> anyhow::Result<Option<Frame>> {
        self.as_mut().next()
    }
    fn release(&mut self) {
        self.as_mut().release()
    }
}
