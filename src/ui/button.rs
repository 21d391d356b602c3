use macroquad::prelude::*;

const IDLE: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER: Color = Color::new(0.39, 0.58, 0.93, 1.0);

/// Clickable panel button
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.rect;
        let fill = if self.is_hovered(mouse_pos) { HOVER } else { IDLE };
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 18, 1.0);
        draw_text(
            &self.label,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }
}
