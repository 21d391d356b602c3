use std::borrow::Cow;

use tracing::{debug, info};

use crate::config::{SimulationConfig, clamp_grid_size, clamp_starting_wealth, clamp_tick_interval};
use crate::domain::{Grid, WealthRules};

/// Simulation orchestrates the automaton.
/// This is the application layer: it owns the current grid snapshot and
/// replaces it with whatever the pure domain operations return.
pub struct Simulation {
    pub grid: Grid,
    pub rules: WealthRules,
    pub starting_wealth: i32,
    pub density: f64,
    pub is_running: bool,
    pub generation: u64,
    pub tick_interval_ms: u64,
    /// Seconds accumulated since the last generation
    pub update_timer: f32,
}

impl Simulation {
    /// Create a paused simulation with an empty grid
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            grid: Grid::new(config.width, config.height),
            rules: config.wealth_rules,
            starting_wealth: clamp_starting_wealth(config.starting_wealth),
            density: config.density,
            is_running: false,
            generation: 0,
            tick_interval_ms: clamp_tick_interval(config.tick_interval_ms),
            update_timer: 0.0,
        }
    }

    /// Replace the grid, keeping the overlapping cells
    pub fn resize(mut self, width: usize, height: usize) -> Self {
        let (width, height) = (clamp_grid_size(width), clamp_grid_size(height));
        if self.grid.dimensions() != (width, height) {
            info!(width, height, "Grid resized");
            self.grid = self.grid.resize(width, height);
        }
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.update_timer = 0.0;
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        let (width, height) = self.grid.dimensions();
        self.grid = Grid::new(width, height);
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Fill the grid from `source` at the configured density and reset the generation counter
    pub fn randomize<F>(mut self, source: F) -> Self
    where
        F: FnMut() -> f64,
    {
        let (width, height) = self.grid.dimensions();
        self.grid = Grid::random(width, height, self.density, self.starting_wealth, source);
        self.generation = 0;
        self.is_running = false;
        info!(population = self.grid.population(), "Grid randomized");
        self
    }

    /// Adjust the time between generations, clamped to the supported range
    pub fn adjust_interval(mut self, delta_ms: i64) -> Self {
        let ms = self.tick_interval_ms.saturating_add_signed(delta_ms);
        self.tick_interval_ms = clamp_tick_interval(ms);
        self
    }

    /// Overwrite the delta for one neighbor count
    pub fn set_rule(mut self, index: usize, delta: i32) -> Self {
        self.rules = self.rules.with_delta(index, delta);
        self
    }

    /// Nudge the delta for one neighbor count
    pub fn adjust_rule(self, index: usize, by: i32) -> Self {
        match self.rules.deltas().get(index) {
            Some(&current) => self.set_rule(index, current.saturating_add(by)),
            None => self,
        }
    }

    /// Flip one cell
    pub fn toggle_cell(mut self, row: usize, col: usize) -> Self {
        self.grid = self.grid.toggle(row, col, self.starting_wealth);
        self
    }

    /// Paint one cell alive or dead. Returns true if the grid changed.
    pub fn paint_cell(&mut self, row: usize, col: usize, alive: bool) -> bool {
        let next = match self.grid.set_alive(row, col, alive, self.starting_wealth) {
            Cow::Borrowed(_) => return false,
            Cow::Owned(grid) => grid,
        };
        self.grid = next;
        true
    }

    /// Advance exactly one generation, stopping if everything died
    pub fn step(mut self) -> Self {
        let next = self.grid.evolve(&self.rules, self.starting_wealth);
        self.grid = next.grid;
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "Generation advanced"
        );

        if !next.has_life && self.is_running {
            info!(generation = self.generation, "Population extinct, stopping");
            self.is_running = false;
        }
        self
    }

    /// Update simulation by one frame.
    /// At most one generation is computed per call.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = self.tick_interval_ms as f32 / 1000.0;

        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            self = self.step();
        }

        self
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn total_wealth(&self) -> i64 {
        self.grid.total_wealth()
    }
}
