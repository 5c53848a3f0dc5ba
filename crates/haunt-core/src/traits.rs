//! The position-provider seam between the tracker and its host.

use crate::id::Cell;

/// Something that can report an agent's current grid cell.
///
/// The host hands position sources to the tracker explicitly, either per
/// tick or once when binding them, instead of the tracker discovering
/// agents on its own. A bare [`Cell`] is a
/// position source that never moves, which is what most tests use.
pub trait PositionSource {
    /// The agent's current cell.
    fn position(&self) -> Cell;
}

impl PositionSource for Cell {
    fn position(&self) -> Cell {
        *self
    }
}

impl<T: PositionSource + ?Sized> PositionSource for &T {
    fn position(&self) -> Cell {
        (**self).position()
    }
}

impl<T: PositionSource + ?Sized> PositionSource for Box<T> {
    fn position(&self) -> Cell {
        (**self).position()
    }
}
