use macroquad::prelude::*;

/// Menu button with hover highlight and drop shadow
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            color: Color::from_rgba(0, 128, 255, 255),
            hover_color: Color::from_rgba(0, 200, 255, 255),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if a point lies on the button (edges included)
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw shadow, body and centered label
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(
            self.x + super::SHADOW_OFFSET,
            self.y + super::SHADOW_OFFSET,
            self.width,
            self.height,
            Color::from_rgba(20, 20, 20, 255),
        );
        draw_rectangle(self.x, self.y, self.width, self.height, color);

        let text_size = measure_text(&self.text, None, super::BUTTON_FONT_SIZE, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            super::BUTTON_FONT_SIZE as f32,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
