// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Simulation driver and saved state
pub mod application;
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Generation, Grid, WealthRules, DEFAULT_STARTING_WEALTH};
pub use application::{SavedState, Simulation, restore_or_default};
pub use config::SimulationConfig;
