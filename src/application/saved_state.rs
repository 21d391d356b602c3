//! Persisted simulation state.
//!
//! The shape mirrors what a front-end stores between sessions: the grid as
//! nested rows of cells, the rule table and the tick interval. Loaded data
//! is checked structurally before it is trusted; anything malformed falls
//! back to a fresh simulation.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::Simulation;
use crate::config::{SimulationConfig, clamp_grid_size, clamp_tick_interval};
use crate::domain::{Cell, Grid, RULE_COUNT, WealthRules};

/// Errors found while restoring saved state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to parse saved state: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("grid has zero width or height")]
    EmptyGrid,

    #[error("grid declares {expected} rows but has {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth { row: usize, expected: usize, found: usize },

    #[error("expected 7 wealth rules, found {0}")]
    RuleCount(usize),

    #[error("dead cell at ({row}, {col}) carries wealth {wealth}")]
    WealthOnDeadCell { row: usize, col: usize, wealth: i32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGrid {
    pub cells: Vec<Vec<Cell>>,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    pub grid: SavedGrid,
    pub wealth_rules: Vec<i32>,
    pub tick_interval_ms: u64,
}

impl SavedState {
    pub fn from_json(text: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check array shapes and cell invariants
    pub fn validate(&self) -> Result<(), StateError> {
        let SavedGrid { cells, width, height } = &self.grid;
        if *width == 0 || *height == 0 {
            return Err(StateError::EmptyGrid);
        }
        if cells.len() != *height {
            return Err(StateError::RowCount { expected: *height, found: cells.len() });
        }
        for (row, cells) in cells.iter().enumerate() {
            if cells.len() != *width {
                return Err(StateError::RowWidth { row, expected: *width, found: cells.len() });
            }
            let wealthy_dead = cells
                .iter()
                .enumerate()
                .find(|(_, c)| !c.is_alive() && c.wealth != 0);
            if let Some((col, cell)) = wealthy_dead {
                return Err(StateError::WealthOnDeadCell { row, col, wealth: cell.wealth });
            }
        }
        if self.wealth_rules.len() != RULE_COUNT {
            return Err(StateError::RuleCount(self.wealth_rules.len()));
        }
        Ok(())
    }

    fn to_grid(&self) -> Result<Grid, StateError> {
        self.validate()?;
        let SavedGrid { cells, width, height } = &self.grid;
        let flat = cells.iter().flatten().copied().collect();
        Grid::from_cells(*width, *height, flat).ok_or(StateError::RowCount {
            expected: *height,
            found: cells.len(),
        })
    }
}

impl Simulation {
    /// Snapshot the persistable parts of the simulation
    pub fn to_saved(&self) -> SavedState {
        let (width, height) = self.grid.dimensions();
        let cells = (0..height)
            .filter_map(|row| self.grid.row(row).map(<[Cell]>::to_vec))
            .collect();
        SavedState {
            grid: SavedGrid { cells, width, height },
            wealth_rules: self.rules.deltas().to_vec(),
            tick_interval_ms: self.tick_interval_ms,
        }
    }

    /// Rebuild a paused simulation from validated saved state.
    /// Starting wealth and density still come from `config`. A grid outside
    /// the supported size range is resized into it, keeping the overlap.
    pub fn restore(saved: &SavedState, config: &SimulationConfig) -> Result<Self, StateError> {
        let grid = saved.to_grid()?;
        let (width, height) = grid.dimensions();
        let (clamped_width, clamped_height) = (clamp_grid_size(width), clamp_grid_size(height));
        let grid = if (clamped_width, clamped_height) == (width, height) {
            grid
        } else {
            warn!(width, height, clamped_width, clamped_height, "Saved grid size out of range");
            grid.resize(clamped_width, clamped_height)
        };
        let rules = WealthRules::from_slice(&saved.wealth_rules)
            .ok_or(StateError::RuleCount(saved.wealth_rules.len()))?;
        Ok(Self {
            grid,
            rules,
            tick_interval_ms: clamp_tick_interval(saved.tick_interval_ms),
            ..Self::new(config)
        })
    }
}

/// Restore from JSON if present and well-formed, otherwise start fresh
pub fn restore_or_default(json: Option<&str>, config: &SimulationConfig) -> Simulation {
    let Some(text) = json else {
        return Simulation::new(config);
    };
    match SavedState::from_json(text).and_then(|saved| Simulation::restore(&saved, config)) {
        Ok(sim) => {
            let (width, height) = sim.grid.dimensions();
            info!(width, height, population = sim.population(), "Restored saved state");
            sim
        }
        Err(err) => {
            warn!(%err, "Ignoring saved state, starting fresh");
            Simulation::new(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig {
            width: 6,
            height: 5,
            ..SimulationConfig::default()
        }
    }

    fn saved() -> SavedState {
        let sim = Simulation::new(&config())
            .toggle_cell(1, 2)
            .toggle_cell(4, 5)
            .set_rule(2, 3)
            .adjust_interval(300);
        sim.to_saved()
    }

    #[test]
    fn test_saved_shape() {
        let saved = saved();
        assert_eq!(saved.grid.cells.len(), 5);
        assert!(saved.grid.cells.iter().all(|row| row.len() == 6));
        assert_eq!(saved.wealth_rules, vec![-1, -3, 3, 1, -1, -2, -3]);
        assert_eq!(saved.tick_interval_ms, 500);
        assert!(saved.validate().is_ok());
    }

    #[test]
    fn test_json_field_names() {
        let json = saved().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("wealthRules").is_some());
        assert!(value.get("tickIntervalMs").is_some());
        let cell = &value["grid"]["cells"][1][2];
        assert_eq!(cell, &serde_json::json!({ "age": 1, "wealth": 10 }));
    }

    #[test]
    fn test_restore_from_saved() {
        let saved = saved();
        let sim = Simulation::restore(&saved, &config()).unwrap();
        assert_eq!(sim.grid.dimensions(), (6, 5));
        assert_eq!(sim.grid.get(4, 5), Some(Cell::alive(10)));
        assert_eq!(sim.population(), 2);
        assert_eq!(sim.rules.delta(2), 3);
        assert_eq!(sim.tick_interval_ms, 500);
        assert!(!sim.is_running);
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let mut saved = saved();
        saved.grid.cells[3].pop();
        assert!(matches!(
            saved.validate(),
            Err(StateError::RowWidth { row: 3, expected: 6, found: 5 })
        ));
    }

    #[test]
    fn test_rejects_missing_rows() {
        let mut saved = saved();
        saved.grid.cells.truncate(2);
        assert!(matches!(
            saved.validate(),
            Err(StateError::RowCount { expected: 5, found: 2 })
        ));
    }

    #[test]
    fn test_rejects_truncated_rules() {
        let mut saved = saved();
        saved.wealth_rules.truncate(4);
        assert!(matches!(saved.validate(), Err(StateError::RuleCount(4))));
    }

    #[test]
    fn test_rejects_wealthy_dead_cell() {
        let mut saved = saved();
        saved.grid.cells[0][0] = Cell { age: 0, wealth: 4 };
        assert!(matches!(
            saved.validate(),
            Err(StateError::WealthOnDeadCell { row: 0, col: 0, wealth: 4 })
        ));
    }

    #[test]
    fn test_restore_clamps_grid_size() {
        let mut cells = vec![vec![Cell::empty(); 3]; 2];
        cells[1][2] = Cell { age: 4, wealth: 17 };
        let small = SavedState {
            grid: SavedGrid { cells, width: 3, height: 2 },
            wealth_rules: WealthRules::DEFAULT.deltas().to_vec(),
            tick_interval_ms: 200,
        };
        let sim = Simulation::restore(&small, &config()).unwrap();
        assert_eq!(sim.grid.dimensions(), (5, 5));
        assert_eq!(sim.grid.get(1, 2), Some(Cell { age: 4, wealth: 17 }));
        assert_eq!(sim.population(), 1);

        let wide = SavedState {
            grid: SavedGrid { cells: vec![vec![Cell::alive(10); 200]; 6], width: 200, height: 6 },
            ..small
        };
        let sim = Simulation::restore(&wide, &config()).unwrap();
        assert_eq!(sim.grid.dimensions(), (150, 6));
        assert_eq!(sim.population(), 150 * 6);
    }

    #[test]
    fn test_restore_or_default_falls_back() {
        let fresh = restore_or_default(None, &config());
        assert_eq!(fresh.grid.dimensions(), (6, 5));
        assert_eq!(fresh.population(), 0);

        let garbage = restore_or_default(Some("{ not json"), &config());
        assert_eq!(garbage.population(), 0);

        let missing_rules = r#"{ "grid": { "cells": [], "width": 0, "height": 0 } }"#;
        let missing_field = restore_or_default(Some(missing_rules), &config());
        assert_eq!(missing_field.grid.dimensions(), (6, 5));
    }

    #[test]
    fn test_restore_or_default_uses_valid_state() {
        let json = saved().to_json().unwrap();
        let sim = restore_or_default(Some(&json), &config());
        assert_eq!(sim.population(), 2);
    }
}
