use macroquad::prelude::*;

use crate::application::{Command, Phase, Screen};
use crate::ui::Button;

/// Grid cell under a pixel position, `None` outside the grid
pub fn cell_at(pos: (f32, f32), cell_size: f32, dimensions: (usize, usize)) -> Option<(usize, usize)> {
    let (x, y) = pos;
    if x < 0.0 || y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let row = (y / cell_size) as usize;
    let col = (x / cell_size) as usize;
    let (rows, cols) = dimensions;
    (row < rows && col < cols).then_some((row, col))
}

/// Collect this frame's commands for the active screen, in the order
/// they should be applied
pub fn collect_commands(
    screen: Screen,
    menu: &[(Button, Command)],
    mouse_pos: (f32, f32),
    cell_size: f32,
    dimensions: (usize, usize),
) -> Vec<Command> {
    let mut commands = Vec::new();

    if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
        commands.push(Command::Quit);
    }

    match screen {
        Screen::Menu => commands.extend(
            menu.iter()
                .filter(|(button, _)| button.is_clicked(mouse_pos))
                .map(|(_, command)| *command),
        ),
        Screen::AutoRun => {
            if is_key_pressed(KeyCode::R) {
                commands.push(Command::Restart);
            }
        }
        Screen::Editable(phase) => {
            if phase == Phase::Editing && is_mouse_button_pressed(MouseButton::Left) {
                if let Some((row, col)) = cell_at(mouse_pos, cell_size, dimensions) {
                    commands.push(Command::ToggleCell { row, col });
                }
            }
            if is_key_pressed(KeyCode::Space) {
                commands.push(Command::ToggleRun);
            }
        }
    }

    commands
}
