use super::*;
use std::collections::VecDeque;

/// In-memory detector that hands out prepared frames in order.
#[derive(Debug, Default)]
pub struct Queue {
    frames: VecDeque<Frame>,
    released: bool,
}

impl Queue {
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl<F> FromIterator<F> for Queue
where
    F: Into<Frame>,
{
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().map(Into::into).collect(),
            released: false,
        }
    }
}

impl Detector for Queue {
    fn next(&mut self) -> anyhow::Result<Option<Frame>> {
        Ok(self.frames.pop_front())
    }
    fn release(&mut self) {
        self.frames.clear();
        self.released = true;
    }
}
