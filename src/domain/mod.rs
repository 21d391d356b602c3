mod cell;
mod grid;
mod rules;
pub mod hex;

pub use cell::{Cell, DEFAULT_STARTING_WEALTH};
pub use grid::{Generation, Grid};
pub use rules::{RULE_COUNT, WealthRules};
