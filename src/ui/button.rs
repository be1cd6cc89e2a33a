use macroquad::prelude::*;

const FONT_SIZE: u16 = 20;

/// Panel button bound to one command line
#[derive(Clone)]
pub struct Button {
    bounds: Rect,
    label: &'static str,
    command: &'static str,
    fill: Color,
    highlight: Color,
}

impl Button {
    pub fn new(bounds: Rect, label: &'static str, command: &'static str) -> Self {
        // Quit stands out from the stepping buttons
        let (fill, highlight) = if command == "quit" {
            (Color::from_rgba(150, 50, 50, 255), Color::from_rgba(190, 70, 70, 255))
        } else {
            (Color::from_rgba(70, 130, 180, 255), Color::from_rgba(100, 149, 237, 255))
        };
        Self { bounds, label, command, fill, highlight }
    }

    pub fn command(&self) -> &'static str {
        self.command
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.bounds;
        let fill = if self.is_hovered(mouse_pos) { self.highlight } else { self.fill };
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let size = measure_text(self.label, None, FONT_SIZE, 1.0);
        let text_x = x + (w - size.width) / 2.0;
        let text_y = y + (h + size.height) / 2.0;
        draw_text(self.label, text_x, text_y, f32::from(FONT_SIZE), WHITE);
    }

    /// Left click inside the button during this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos)
    }
}
