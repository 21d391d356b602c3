use serde::{Deserialize, Serialize};

/// Wealth given to a cell when it is born or switched on by hand.
pub const DEFAULT_STARTING_WEALTH: i32 = 10;

/// Cell is the fundamental unit of the hex wealth automaton.
/// A dead cell has age 0 and no wealth; a live cell has age >= 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Cell {
    pub age: u32,
    pub wealth: i32,
}

impl Cell {
    /// A dead cell
    pub const fn empty() -> Self {
        Self { age: 0, wealth: 0 }
    }

    /// A newly born cell holding `starting_wealth`
    pub const fn alive(starting_wealth: i32) -> Self {
        Self { age: 1, wealth: starting_wealth }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.age > 0
    }

    /// Flip between dead and freshly born
    pub const fn toggle(self, starting_wealth: i32) -> Self {
        if self.is_alive() {
            Self::empty()
        } else {
            Self::alive(starting_wealth)
        }
    }

    /// Pure function to compute the next state from the wealth delta
    /// selected by this cell's live neighbor count:
    /// 1. Live cell survives and ages while its wealth stays above zero
    /// 2. Live cell whose wealth drops to zero or below dies, losing its wealth
    /// 3. Dead cell is born only when the delta is a profit
    pub const fn evolve(self, delta: i32, starting_wealth: i32) -> Self {
        if self.is_alive() {
            let wealth = self.wealth.saturating_add(delta);
            if wealth > 0 {
                Self { age: self.age.saturating_add(1), wealth }
            } else {
                Self::empty()
            }
        } else if delta > 0 {
            Self::alive(starting_wealth)
        } else {
            Self::empty()
        }
    }
}
