use crate::gesture::Gesture;

/// Trait for entities that throw the computer's move.
/// Called once per resolved round, never per frame.
///
/// Implementations must only ever return one of `Gesture::MOVES`.
pub trait Opponent {
    fn throw(&mut self) -> Gesture;
}

impl<O> Opponent for Box<O>
where
    O: Opponent + ?Sized,
{
    fn throw(&mut self) -> Gesture {
        self.as_mut().throw()
    }
}
