mod button;

pub use button::Button;

use macroquad::prelude::{Rect, screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

const FIRST_BUTTON_Y: f32 = 120.0;
const BUTTON_GAP: f32 = 10.0;

/// Label and command line for each panel button, top to bottom
const PANEL_COMMANDS: [(&str, &str); 4] = [
    ("Step", "evolve 1 1"),
    ("Step x10", "evolve 10 1"),
    ("Mirror", "setCopycats mirror"),
    ("Quit", "quit"),
];

/// Left edge of the side panel; the grid occupies everything before it
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_width() -> f32 {
    panel_x()
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

pub fn create_buttons() -> Vec<Button> {
    let x = panel_x();
    PANEL_COMMANDS
        .iter()
        .enumerate()
        .map(|(i, &(label, command))| {
            let y = FIRST_BUTTON_Y + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(Rect::new(x, y, PANEL_WIDTH, BUTTON_HEIGHT), label, command)
        })
        .collect()
}
