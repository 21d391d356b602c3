mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 34.0;
pub const GRID_MARGIN: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH - 2.0 * GRID_MARGIN
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height() - 2.0 * GRID_MARGIN
}

/// Panel buttons, in the order `input::process_button_clicks` dispatches them
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    ["Play/Pause", "Step", "Clear", "Random"]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let y = 20.0 + i as f32 * (BUTTON_HEIGHT + 8.0);
            Button::new(px, y, width, BUTTON_HEIGHT, *label)
        })
        .collect()
}
