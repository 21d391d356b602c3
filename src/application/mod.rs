mod saved_state;
mod simulation;

pub use saved_state::{SavedGrid, SavedState, StateError, restore_or_default};
pub use simulation::Simulation;
