mod layout;

pub use layout::HexLayout;

use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::{Cell, Grid};
use crate::ui::{Button, GRID_MARGIN, PANEL_WIDTH, grid_area_height, grid_area_width, panel_x};

const DEAD_FILL: Color = Color::new(0.06, 0.06, 0.07, 1.0);
const OUTLINE: Color = Color::new(0.16, 0.16, 0.18, 1.0);
const POOR: Color = Color::new(0.85, 0.35, 0.1, 1.0);
const RICH: Color = Color::new(0.0, 1.0, 0.6, 1.0);

/// Layout of the current grid inside the window's grid area
pub fn grid_layout(grid: &Grid) -> HexLayout {
    let (width, height) = grid.dimensions();
    let fitted = HexLayout::fit(width, height, grid_area_width(), grid_area_height());
    HexLayout::new(GRID_MARGIN, GRID_MARGIN, fitted.size)
}

/// Blend from poor to rich as wealth climbs towards twice the starting wealth
fn wealth_color(cell: Cell, starting_wealth: i32) -> Color {
    let scale = 2.0 * starting_wealth.max(1) as f32;
    let t = (cell.wealth as f32 / scale).clamp(0.0, 1.0);
    Color::new(
        POOR.r + (RICH.r - POOR.r) * t,
        POOR.g + (RICH.g - POOR.g) * t,
        POOR.b + (RICH.b - POOR.b) * t,
        1.0,
    )
}

/// Draw every cell as a pointy-top hexagon
pub fn draw_grid(grid: &Grid, layout: &HexLayout, starting_wealth: i32) {
    let border = if layout.size >= 6.0 { 1.0 } else { 0.0 };
    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = layout.center(row, col);
        let fill = if cell.is_alive() {
            wealth_color(cell, starting_wealth)
        } else {
            DEAD_FILL
        };
        draw_hexagon(x, y, layout.size, border, true, OUTLINE, fill);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
}

/// Draw the control panel with buttons, stats and the rule table
pub fn draw_controls(
    sim: &Simulation,
    buttons: &[Button],
    selected_rule: usize,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 10.0;
    let (gw, gh) = sim.grid.dimensions();
    let status = if sim.is_running { ("Running", GREEN) } else { ("Paused", ORANGE) };

    let stats = [
        (format!("Grid: {gw}x{gh}"), 200.0, LIGHTGRAY),
        (format!("Generation: {}", sim.generation), 220.0, WHITE),
        (format!("Population: {}", sim.population()), 240.0, WHITE),
        (format!("Wealth: {}", sim.total_wealth()), 260.0, WHITE),
        (format!("Interval: {} ms", sim.tick_interval_ms), 280.0, LIGHTGRAY),
        (status.0.to_string(), 300.0, status.1),
    ];
    stats.iter().for_each(|(text, y, color)| {
        draw_text(text, px, *y, 18.0, *color);
    });

    draw_text("Wealth rules:", px, 335.0, 18.0, WHITE);
    for (n, delta) in sim.rules.deltas().iter().enumerate() {
        let color = match (n == selected_rule, *delta > 0) {
            (true, _) => YELLOW,
            (false, true) => GREEN,
            (false, false) => GRAY,
        };
        draw_text(&format!("{n} neighbors: {delta:+}"), px, 355.0 + n as f32 * 18.0, 16.0, color);
    }

    let help = [
        "LMB: toggle / paint",
        "RMB: erase",
        "Space: play  N: step",
        "C: clear  R: random",
        "Up/Down: speed",
        "0-6, +/-: edit rule",
        "[ ]: grid size  S: save",
    ];
    help.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, px, 500.0 + i as f32 * 16.0, 14.0, GRAY);
    });
}
