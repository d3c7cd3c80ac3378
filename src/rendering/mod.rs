use macroquad::prelude::*;

use crate::application::{Command, ModeController, Phase, Screen};
use crate::domain::Grid;
use crate::ui::{self, Button};

/// Vertical gradient, one line per pixel row
fn draw_gradient_background(top: Color, bottom: Color) {
    let width = screen_width();
    let height = screen_height();
    let rows = height.max(1.0) as usize;

    for i in 0..rows {
        let t = i as f32 / rows as f32;
        let color = Color::new(
            top.r + (bottom.r - top.r) * t,
            top.g + (bottom.g - top.g) * t,
            top.b + (bottom.b - top.b) * t,
            1.0,
        );
        draw_line(0.0, i as f32, width, i as f32, 1.0, color);
    }
}

/// Title and mode buttons
pub fn draw_menu(buttons: &[(Button, Command)], mouse_pos: (f32, f32)) {
    clear_background(Color::from_rgba(30, 30, 30, 255));
    draw_gradient_background(
        Color::from_rgba(50, 50, 100, 255),
        Color::from_rgba(10, 10, 40, 255),
    );

    let (cx, cy) = ui::title_center(screen_width(), screen_height());
    let size = measure_text(ui::TITLE, None, ui::TITLE_FONT_SIZE, 1.0);
    draw_text(
        ui::TITLE,
        cx - size.width / 2.0,
        cy + size.height / 2.0,
        ui::TITLE_FONT_SIZE as f32,
        WHITE,
    );

    buttons.iter().for_each(|(button, _)| button.draw(mouse_pos));
}

/// Every cell as a filled square with a one-pixel outline
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    let alive_color = Color::from_rgba(0, 255, 0, 255);
    let grid_line_color = Color::from_rgba(50, 50, 50, 255);

    clear_background(BLACK);

    for (row, col, cell) in grid.iter_cells() {
        let x = col as f32 * cell_size;
        let y = row as f32 * cell_size;
        if cell.is_alive() {
            draw_rectangle(x, y, cell_size, cell_size, alive_color);
        }
        draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, grid_line_color);
    }
}

/// Small status line in the bottom-left corner
fn draw_status(controller: &ModeController) {
    let status = match controller.screen() {
        Screen::Menu => return,
        Screen::AutoRun => "R: restart  Esc: menu",
        Screen::Editable(Phase::Editing) => "Click: toggle  Space: run  Esc: menu",
        Screen::Editable(Phase::Running) => "Space: pause  Esc: menu",
    };
    let text = format!("Gen {} | {}", controller.generation(), status);
    draw_text(&text, 6.0, screen_height() - 6.0, 16.0, GRAY);
}

/// Draw whatever the active screen shows
pub fn draw_frame(
    controller: &ModeController,
    menu: &[(Button, Command)],
    mouse_pos: (f32, f32),
    cell_size: f32,
) {
    match controller.grid() {
        Some(grid) => {
            draw_grid(grid, cell_size);
            draw_status(controller);
        }
        None => draw_menu(menu, mouse_pos),
    }
}
