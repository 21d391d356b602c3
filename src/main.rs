use std::path::{Path, PathBuf};

use hex_wealth::{Simulation, SimulationConfig, input, rendering, restore_or_default, ui};
use macroquad::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "HEX_WEALTH_CONFIG";

fn window_conf() -> Conf {
    Conf {
        window_title: "Hex Wealth Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn load_config() -> SimulationConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return SimulationConfig::default();
    };
    SimulationConfig::from_json_file(&path).unwrap_or_else(|err| {
        warn!(%err, path = %path, "Falling back to default config");
        SimulationConfig::default()
    })
}

fn save(sim: &Simulation, path: &Path) {
    let result = sim
        .to_saved()
        .to_json()
        .map_err(|err| err.to_string())
        .and_then(|json| std::fs::write(path, json).map_err(|err| err.to_string()));
    match result {
        Ok(()) => info!(path = %path.display(), generation = sim.generation, "Saved state"),
        Err(err) => warn!(%err, path = %path.display(), "Failed to save state"),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = load_config();
    let state_path = std::env::args().nth(1).map(PathBuf::from);
    let saved_json = state_path
        .as_ref()
        .and_then(|path| std::fs::read_to_string(path).ok());
    let mut sim = restore_or_default(saved_json.as_deref(), &config);

    let mut stroke = input::PaintStroke::default();
    let mut selected_rule = 0;

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();
        let layout = rendering::grid_layout(&sim.grid);

        sim = input::process_button_clicks(sim, &buttons, mouse_pos);
        input::handle_mouse_paint(&mut sim, &mut stroke, &layout, mouse_pos);
        sim = input::process_keyboard_input(sim, &mut selected_rule);

        if is_key_pressed(KeyCode::S) {
            match &state_path {
                Some(path) => save(&sim, path),
                None => warn!("No state file given on the command line, not saving"),
            }
        }

        // At most one generation per frame; rendering below always sees a finished grid
        sim = sim.tick(get_frame_time());

        clear_background(BLACK);
        let layout = rendering::grid_layout(&sim.grid);
        rendering::draw_grid(&sim.grid, &layout, sim.starting_wealth);
        rendering::draw_controls(&sim, &buttons, selected_rule, mouse_pos);

        next_frame().await;
    }
}
