//! Hint Bar Widget: one-line key hints under the card.

use super::traits::Widget;
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell, Rgb};
use crate::layout::Rect;

/// Configuration for the hint bar widget.
#[derive(Debug, Clone)]
pub struct HintBarConfig {
    /// Background color.
    pub bg: Rgb,
    /// Left section text color.
    pub left_fg: Rgb,
    /// Right section text color.
    pub right_fg: Rgb,
}

impl Default for HintBarConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::from_u32(0x1C1424),
            left_fg: Rgb::from_u32(0x9A8FA8),
            right_fg: Rgb::from_u32(0x6F6680),
        }
    }
}

/// A two-section hint line (left and right aligned).
#[derive(Debug)]
pub struct HintBar {
    /// Left section content.
    left: String,
    /// Right section content.
    right: String,
    /// Widget bounds.
    bounds: Rect,
    /// Configuration.
    config: HintBarConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl HintBar {
    /// Create a new hint bar.
    pub fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            bounds: Rect::ZERO,
            config: HintBarConfig::default(),
            dirty: true,
        }
    }

    /// Set the left section content.
    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
        self.dirty = true;
    }

    /// Set the right section content.
    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
        self.dirty = true;
    }

    /// Get the left section content.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Get the right section content.
    pub fn right(&self) -> &str {
        &self.right
    }
}

impl Default for HintBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for HintBar {
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
        let y = self.bounds.y;
        buffer.fill_rect(
            self.bounds.x,
            y,
            self.bounds.width,
            self.bounds.height,
            Cell::new(' ').with_bg(self.config.bg),
        );

        buffer.draw_text(
            self.bounds.x + 1,
            y,
            &self.left,
            self.config.left_fg,
            self.config.bg,
        );

        let right_len = self.right.chars().count() as u16;
        let right_x = self
            .bounds
            .right()
            .saturating_sub(right_len)
            .saturating_sub(1)
            .max(self.bounds.x);
        buffer.draw_text(right_x, y, &self.right, self.config.right_fg, self.config.bg);
    }

    fn handle_input(&mut self, _event: &InputEvent) -> bool {
        false
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

    #[test]
    fn test_hint_bar_sections() {
        let mut bar = HintBar::new();
        bar.set_left("← → turn pages");
        bar.set_right("Esc quits");
        assert_eq!(bar.left(), "← → turn pages");
        assert_eq!(bar.right(), "Esc quits");
    }

    #[test]
    fn test_render_alignment() {
        let mut bar = HintBar::new();
        bar.set_bounds(Rect::new(0, 0, 20, 1));
        bar.set_left("ab");
        bar.set_right("cd");

        let mut buffer = Buffer::new(20, 1);
        bar.render(&mut buffer);

        assert_eq!(buffer.get(1, 0).unwrap().symbol, 'a');
        assert_eq!(buffer.get(2, 0).unwrap().symbol, 'b');
        assert_eq!(buffer.get(17, 0).unwrap().symbol, 'c');
        assert_eq!(buffer.get(18, 0).unwrap().symbol, 'd');
    }
}
