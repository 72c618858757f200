//! Diffing engine: turn successive buffer snapshots into minimal ANSI.
//!
//! The renderer keeps the previously flushed buffer and the incoming one;
//! only cells that changed are re-emitted. Cursor moves and SGR attribute
//! changes are elided for adjacent runs of cells sharing the same style,
//! which is the common case for the card's text lines and borders.

use super::{Buffer, Cell, Modifiers, Rgb};
use crate::terminal::OutputBuffer;

/// Tracks the terminal-side cursor and attribute state across emissions.
#[derive(Debug, Default)]
pub struct DiffState {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    modifiers: Option<Modifiers>,
    cursor: Option<(u16, u16)>,
}

impl DiffState {
    /// Fresh state: nothing known about the terminal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything, forcing the next emission to restate attributes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Emit one cell at (x, y), restating cursor/attributes only as needed.
    fn emit(&mut self, x: u16, y: u16, cell: &Cell, out: &mut OutputBuffer) {
        if self.cursor != Some((x, y)) {
            out.cursor_move(x, y);
        }

        let modifiers = Some(cell.modifiers);
        if self.modifiers != modifiers {
            // Turning a modifier off requires a full reset, so restate all
            // attributes whenever the modifier set changes.
            out.reset_attrs();
            out.set_modifiers(cell.modifiers);
            out.set_fg(cell.fg);
            out.set_bg(cell.bg);
            self.modifiers = modifiers;
            self.fg = Some(cell.fg);
            self.bg = Some(cell.bg);
        } else {
            if self.fg != Some(cell.fg) {
                out.set_fg(cell.fg);
                self.fg = Some(cell.fg);
            }
            if self.bg != Some(cell.bg) {
                out.set_bg(cell.bg);
                self.bg = Some(cell.bg);
            }
        }

        out.write_char(cell.symbol);
        let advance = u16::from(cell.display_width().max(1));
        self.cursor = Some((x + advance, y));
    }
}

/// Emit the entire buffer (used for the first frame and after resizes).
pub fn render_full(next: &Buffer, out: &mut OutputBuffer, state: &mut DiffState) {
    state.reset();
    out.reset_attrs();
    out.clear_screen();

    for y in 0..next.height() {
        for x in 0..next.width() {
            let Some(cell) = next.get(x, y) else { continue };
            if cell.is_continuation() {
                continue;
            }
            state.emit(x, y, cell, out);
        }
    }
}

/// Emit only the cells that differ between `current` and `next`.
///
/// Falls back to a full render when the dimensions differ. Returns the
/// number of cells emitted.
pub fn render_diff(
    current: &Buffer,
    next: &Buffer,
    out: &mut OutputBuffer,
    state: &mut DiffState,
) -> usize {
    if current.width() != next.width() || current.height() != next.height() {
        render_full(next, out, state);
        return next.width() as usize * next.height() as usize;
    }

    let mut changed = 0;
    for y in 0..next.height() {
        for x in 0..next.width() {
            let Some(cell) = next.get(x, y) else { continue };
            if cell.is_continuation() {
                continue;
            }
            if current.get(x, y) == Some(cell) {
                continue;
            }
            state.emit(x, y, cell, out);
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(out: &OutputBuffer) -> String {
        String::from_utf8(out.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_identical_buffers_emit_nothing() {
        let a = Buffer::new(8, 2);
        let b = Buffer::new(8, 2);
        let mut out = OutputBuffer::new();
        let mut state = DiffState::new();
        let changed = render_diff(&a, &b, &mut out, &mut state);
        assert_eq!(changed, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_cell_change() {
        let a = Buffer::new(8, 2);
        let mut b = Buffer::new(8, 2);
        b.set(3, 1, Cell::new('♥').with_fg(Rgb::new(255, 0, 80)));

        let mut out = OutputBuffer::new();
        let mut state = DiffState::new();
        let changed = render_diff(&a, &b, &mut out, &mut state);

        assert_eq!(changed, 1);
        let text = text_of(&out);
        assert!(text.contains("\x1b[2;4H"));
        assert!(text.contains('♥'));
    }

    #[test]
    fn test_adjacent_run_moves_cursor_once() {
        let a = Buffer::new(8, 1);
        let mut b = Buffer::new(8, 1);
        b.draw_text(2, 0, "hey", Rgb::WHITE, Rgb::BLACK);

        let mut out = OutputBuffer::new();
        let mut state = DiffState::new();
        render_diff(&a, &b, &mut out, &mut state);

        let text = text_of(&out);
        // one cursor move + one attribute restatement (reset, fg, bg)
        assert_eq!(text.matches("\x1b[").count(), 4);
        assert!(text.contains("hey"));
    }

    #[test]
    fn test_dimension_change_forces_full_render() {
        let a = Buffer::new(4, 1);
        let b = Buffer::new(8, 1);
        let mut out = OutputBuffer::new();
        let mut state = DiffState::new();
        render_diff(&a, &b, &mut out, &mut state);
        assert!(text_of(&out).contains("\x1b[2J"));
    }

    #[test]
    fn test_wide_glyph_skips_continuation() {
        let a = Buffer::new(8, 1);
        let mut b = Buffer::new(8, 1);
        b.set(0, 0, Cell::new('花'));

        let mut out = OutputBuffer::new();
        let mut state = DiffState::new();
        let changed = render_diff(&a, &b, &mut out, &mut state);

        // head cell only; the continuation marker is never emitted
        assert_eq!(changed, 1);
        assert!(!text_of(&out).contains('\0'));
    }
}
