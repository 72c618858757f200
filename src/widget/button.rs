//! Button Widget: the card's confirm ("safe") button.
//!
//! Hover brightens it, a left click latches; the app drains the latch with
//! [`Button::take_click`] and navigates. Its bounds double as the safe zone
//! the runaway button must avoid.

use super::traits::Widget;
use crate::actor::{InputEvent, MouseButton};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::layout::Rect;

/// Visual state of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

/// Configuration for the button widget.
#[derive(Debug, Clone)]
pub struct ButtonConfig {
    /// Label text color.
    pub fg: Rgb,
    /// Resting background.
    pub bg: Rgb,
    /// Hovered background.
    pub hover_bg: Rgb,
    /// Pressed background.
    pub pressed_bg: Rgb,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            fg: Rgb::WHITE,
            bg: Rgb::from_u32(0x8A2E48),
            hover_bg: Rgb::from_u32(0xB03A5B),
            pressed_bg: Rgb::from_u32(0x6E243A),
        }
    }
}

/// A clickable labeled button.
#[derive(Debug)]
pub struct Button {
    /// Label text.
    label: String,
    /// Widget bounds.
    bounds: Rect,
    /// Visual state.
    state: ButtonState,
    /// Unconsumed click latch.
    clicked: bool,
    /// Configuration.
    config: ButtonConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl Button {
    /// Create a new button with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bounds: Rect::ZERO,
            state: ButtonState::Normal,
            clicked: false,
            config: ButtonConfig::default(),
            dirty: true,
        }
    }

    /// The label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Columns the button occupies: the label plus a space either side.
    pub fn desired_width(&self) -> u16 {
        self.label.chars().count() as u16 + 2
    }

    /// Take the pending click, clearing it.
    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    /// Press the button programmatically (keyboard activation).
    pub fn press(&mut self) {
        self.clicked = true;
        self.state = ButtonState::Pressed;
        self.dirty = true;
    }
}

impl Widget for Button {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        if self.bounds.is_empty() {
            return;
        }
        let bg = match self.state {
            ButtonState::Normal => self.config.bg,
            ButtonState::Hovered => self.config.hover_bg,
            ButtonState::Pressed => self.config.pressed_bg,
        };
        buffer.fill_rect(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.bounds.height,
            Cell::new(' ').with_bg(bg),
        );

        let text_y = self.bounds.y + self.bounds.height / 2;
        let text_len = self.label.chars().count() as u16;
        let text_x = self.bounds.x + self.bounds.width.saturating_sub(text_len) / 2;
        buffer.draw_styled(text_x, text_y, &self.label, self.config.fg, bg, Modifiers::BOLD);
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::MouseMove(mouse) => {
                let inside = self.bounds.contains(mouse.x, mouse.y);
                let state = if inside {
                    ButtonState::Hovered
                } else {
                    ButtonState::Normal
                };
                if state != self.state && self.state != ButtonState::Pressed {
                    self.state = state;
                    self.dirty = true;
                }
                false
            }
            InputEvent::MouseDown(mouse) => {
                if mouse.button == Some(MouseButton::Left)
                    && self.bounds.contains(mouse.x, mouse.y)
                {
                    self.state = ButtonState::Pressed;
                    self.clicked = true;
                    self.dirty = true;
                    return true;
                }
                false
            }
            InputEvent::MouseUp(mouse) => {
                if self.state == ButtonState::Pressed {
                    self.state = if self.bounds.contains(mouse.x, mouse.y) {
                        ButtonState::Hovered
                    } else {
                        ButtonState::Normal
                    };
                    self.dirty = true;
                }
                false
            }
            _ => false,
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{KeyModifiers, MouseEvent};

    fn mouse_at(x: u16, y: u16, button: Option<MouseButton>) -> MouseEvent {
        MouseEvent {
            x,
            y,
            button,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_inside_latches() {
        let mut button = Button::new("Yes");
        button.set_bounds(Rect::new(4, 4, 7, 1));

        let consumed = button.handle_input(&InputEvent::MouseDown(mouse_at(
            5,
            4,
            Some(MouseButton::Left),
        )));

        assert!(consumed);
        assert!(button.take_click());
        assert!(!button.take_click(), "latch must clear after take");
    }

    #[test]
    fn test_click_outside_ignored() {
        let mut button = Button::new("Yes");
        button.set_bounds(Rect::new(4, 4, 7, 1));

        let consumed = button.handle_input(&InputEvent::MouseDown(mouse_at(
            0,
            0,
            Some(MouseButton::Left),
        )));

        assert!(!consumed);
        assert!(!button.take_click());
    }

    #[test]
    fn test_desired_width_pads_label() {
        assert_eq!(Button::new("Yes").desired_width(), 5);
    }
}
