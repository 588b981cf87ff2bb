//! Board model for the 5x5 grid

/// Cell and board storage
pub mod layout;
/// Slot extraction and crossing detection
pub mod slots;

pub use layout::{Cell, Grid};
pub use slots::{Crossing, Direction, Slot, SlotId, SlotSet};
