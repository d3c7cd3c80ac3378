mod button;

pub use button::Button;

use crate::application::Command;

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
pub const BUTTON_FONT_SIZE: u16 = 32;
pub const TITLE_FONT_SIZE: u16 = 48;
pub const SHADOW_OFFSET: f32 = 5.0;

pub const TITLE: &str = "Conway's Game of Life";

/// Menu buttons, stacked and centered in a `width x height` screen.
/// On a 400x300 screen they sit at y = 120 and y = 200.
pub fn menu_buttons(width: f32, height: f32) -> Vec<(Button, Command)> {
    let x = (width - BUTTON_WIDTH) / 2.0;
    let top = height / 2.0 - 30.0;
    vec![
        (
            Button::new(x, top, BUTTON_WIDTH, BUTTON_HEIGHT, "Random Grid"),
            Command::SelectAutoRun,
        ),
        (
            Button::new(x, top + 80.0, BUTTON_WIDTH, BUTTON_HEIGHT, "Editable Grid"),
            Command::SelectEditable,
        ),
    ]
}

/// Title baseline center, a fifth of the way down
pub fn title_center(width: f32, height: f32) -> (f32, f32) {
    (width / 2.0, height / 5.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_layout_on_small_window() {
        let buttons = menu_buttons(400.0, 300.0);
        assert_eq!(buttons.len(), 2);
        assert!(buttons[0].0.is_hovered((100.0, 120.0)));
        assert!(buttons[1].0.is_hovered((100.0, 200.0)));
        assert_eq!(buttons[0].1, Command::SelectAutoRun);
        assert_eq!(buttons[1].1, Command::SelectEditable);
    }

    #[test]
    fn test_menu_buttons_do_not_overlap() {
        let buttons = menu_buttons(500.0, 500.0);
        let gap_point = (250.0, 500.0 / 2.0 - 30.0 + BUTTON_HEIGHT + 15.0);
        assert!(buttons.iter().all(|(button, _)| !button.is_hovered(gap_point)));
    }
}
