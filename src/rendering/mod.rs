use macroquad::prelude::*;

use crate::application::{Canvas, World};
use crate::domain::TileColor;
use crate::ui::{Button, grid_area_height, grid_area_width, panel_x, PANEL_WIDTH};

fn to_color(color: TileColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::from_rgba(r, g, b, 255)
}

/// Largest cell size (capped at `max_cell_size`) that fits the grid area
pub fn fitted_cell_size(rows: usize, cols: usize, max_cell_size: f32) -> f32 {
    let fit_w = grid_area_width() / cols.max(1) as f32;
    let fit_h = grid_area_height() / rows.max(1) as f32;
    fit_w.min(fit_h).min(max_cell_size).max(1.0)
}

/// Draw every cell of the canvas as a solid square
pub fn draw_canvas(canvas: &Canvas, cell_size: f32) {
    let (rows, cols) = canvas.dimensions();
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_grid_lines = cell_size >= 4.0;

    for row in 0..rows {
        for col in 0..cols {
            let x = col as f32 * cell_size;
            let y = row as f32 * cell_size;
            if let Some(color) = canvas.color(row, col) {
                draw_rectangle(x, y, cell_size, cell_size, to_color(color));
            }

            if draw_grid_lines {
                draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, grid_line_color);
            }
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the side panel: world info, buttons and the last error if any
pub fn draw_controls(world: &World<Canvas>, buttons: &[Button], last_error: Option<&str>, mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let (rows, cols) = world.dimensions();
    let labels = [
        (format!("Grid: {rows}x{cols}"), 20.0, 14.0, WHITE),
        (format!("Generation: {}", world.generation()), 40.0, 14.0, Color::from_rgba(0, 255, 150, 255)),
        (format!("Stepper: {}", world.algorithm().name()), 60.0, 12.0, GRAY),
        (format!("FPS: {}", get_fps()), 80.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let help = [
        ("Space: evolve 1", 340.0),
        ("Enter: evolve 10", 355.0),
        ("Esc: quit", 370.0),
    ];
    help.iter().for_each(|(text, y)| {
        draw_text(text, px, *y, 12.0, GRAY);
    });

    if let Some(err) = last_error {
        draw_text(err, px, 400.0, 12.0, Color::from_rgba(255, 80, 80, 255));
    }
}
