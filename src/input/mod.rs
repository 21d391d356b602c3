use macroquad::prelude::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_down, is_mouse_button_pressed,
};
use rand::Rng;

use crate::application::Simulation;
use crate::domain::RULE_COUNT;
use crate::rendering::HexLayout;
use crate::ui::Button;

const GRID_SIZE_STEP: usize = 5;
const INTERVAL_STEP_MS: i64 = 50;

/// State carried between frames while a mouse button is held
#[derive(Default)]
pub struct PaintStroke {
    /// Alive-state being painted by the current left-button drag
    painting: Option<bool>,
}

/// Handle mouse editing on the grid. Editing is only allowed while paused.
/// A left press toggles the cell under the cursor; dragging then paints that
/// same state. The right button erases.
pub fn handle_mouse_paint(
    sim: &mut Simulation,
    stroke: &mut PaintStroke,
    layout: &HexLayout,
    mouse_pos: (f32, f32),
) {
    if !is_mouse_button_down(MouseButton::Left) {
        stroke.painting = None;
    }
    if sim.is_running {
        return;
    }

    let (width, height) = sim.grid.dimensions();
    let Some((row, col)) = layout.hit_test(mouse_pos.0, mouse_pos.1, width, height) else {
        return;
    };

    if is_mouse_button_pressed(MouseButton::Left) {
        let was_alive = sim.grid.get(row, col).is_some_and(|c| c.is_alive());
        sim.paint_cell(row, col, !was_alive);
        stroke.painting = Some(!was_alive);
    } else if let Some(alive) = stroke.painting {
        sim.paint_cell(row, col, alive);
    } else if is_mouse_button_down(MouseButton::Right) {
        sim.paint_cell(row, col, false);
    }
}

fn randomize(sim: Simulation) -> Simulation {
    let mut rng = rand::rng();
    sim.randomize(|| rng.random::<f64>())
}

fn grow(sim: Simulation) -> Simulation {
    let (w, h) = sim.grid.dimensions();
    sim.resize(w + GRID_SIZE_STEP, h + GRID_SIZE_STEP)
}

fn shrink(sim: Simulation) -> Simulation {
    let (w, h) = sim.grid.dimensions();
    sim.resize(w.saturating_sub(GRID_SIZE_STEP), h.saturating_sub(GRID_SIZE_STEP))
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation, selected_rule: &mut usize) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::N, Simulation::step),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, randomize),
        (KeyCode::Up, |s| s.adjust_interval(-INTERVAL_STEP_MS)),
        (KeyCode::Down, |s| s.adjust_interval(INTERVAL_STEP_MS)),
        (KeyCode::RightBracket, grow),
        (KeyCode::LeftBracket, shrink),
    ];

    let sim = actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    let rule_keys = [
        KeyCode::Key0,
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
        KeyCode::Key6,
    ];
    if let Some(index) = rule_keys.iter().position(|key| is_key_pressed(*key)) {
        *selected_rule = index.min(RULE_COUNT - 1);
    }

    if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
        sim.adjust_rule(*selected_rule, 1)
    } else if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
        sim.adjust_rule(*selected_rule, -1)
    } else {
        sim
    }
}

/// Process button clicks functionally
pub fn process_button_clicks(
    sim: Simulation,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Simulation {
    buttons
        .iter()
        .enumerate()
        .fold(sim, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                0 => s.toggle_running(),
                1 => s.step(),
                2 => s.clear(),
                3 => randomize(s),
                _ => s,
            }
        })
}
