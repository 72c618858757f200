//! Buffer: A grid of cells representing the terminal screen.
//!
//! All drawing goes through the buffer; the render actor diffs successive
//! buffer snapshots to produce minimal ANSI output. Out-of-range writes are
//! silently dropped, which is what clips decorations and degenerate button
//! placements at the screen edge.

use super::cell::{Cell, Rgb};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A 2D grid of cells.
#[derive(Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a new buffer filled with blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    /// Buffer width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Index of the cell at (x, y), or `None` if out of range.
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set the cell at (x, y). Returns `false` if out of range.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        let Some(index) = self.index_of(x, y) else {
            return false;
        };
        self.cells[index] = cell;
        // A wide glyph owns the next column too.
        if cell.display_width() == 2 {
            if let Some(next) = self.index_of(x + 1, y) {
                self.cells[next] = Cell::continuation()
                    .with_fg(cell.fg)
                    .with_bg(cell.bg);
            }
        }
        true
    }

    /// Draw a string starting at (x, y), clipped to the buffer width.
    ///
    /// Returns the number of columns used. Iterates grapheme clusters and
    /// advances by their display width; a multi-codepoint cluster renders
    /// as its first scalar.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bg: Rgb) -> u16 {
        self.draw_styled(x, y, text, fg, bg, super::Modifiers::empty())
    }

    /// Draw a string with style modifiers.
    pub fn draw_styled(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb,
        bg: Rgb,
        modifiers: super::Modifiers,
    ) -> u16 {
        let mut col = x;
        for grapheme in text.graphemes(true) {
            if col >= self.width {
                break;
            }
            let Some(symbol) = grapheme.chars().next() else {
                continue;
            };
            let advance = grapheme.width().max(1) as u16;
            self.set(
                col,
                y,
                Cell::new(symbol)
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_modifiers(modifiers),
            );
            col = col.saturating_add(advance);
        }
        col - x
    }

    /// Fill a rectangular area with copies of a cell.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, cell: Cell) {
        for row in y..y.saturating_add(height).min(self.height) {
            for col in x..x.saturating_add(width).min(self.width) {
                self.set(col, row, cell);
            }
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize the buffer, preserving the overlapping content.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        if new_width == self.width && new_height == self.height {
            return;
        }
        let mut resized = Self::new(new_width, new_height);
        for y in 0..self.height.min(new_height) {
            for x in 0..self.width.min(new_width) {
                if let Some(cell) = self.get(x, y) {
                    let index = y as usize * new_width as usize + x as usize;
                    resized.cells[index] = *cell;
                }
            }
        }
        *self = resized;
    }

    /// Copy another buffer's contents into this one.
    ///
    /// Resizes if the dimensions differ.
    pub fn copy_from(&mut self, other: &Self) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clear();
        self.cells.extend_from_slice(&other.cells);
    }

    /// Iterate over rows as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Buffer({}x{})", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut buffer = Buffer::new(10, 4);
        assert!(buffer.set(3, 2, Cell::new('x')));
        assert_eq!(buffer.get(3, 2).unwrap().symbol, 'x');
    }

    #[test]
    fn test_out_of_range_is_dropped() {
        let mut buffer = Buffer::new(10, 4);
        assert!(!buffer.set(10, 0, Cell::new('x')));
        assert!(!buffer.set(0, 4, Cell::new('x')));
        assert!(buffer.get(99, 99).is_none());
    }

    #[test]
    fn test_wide_glyph_continuation() {
        let mut buffer = Buffer::new(10, 1);
        buffer.set(2, 0, Cell::new('花'));
        assert_eq!(buffer.get(2, 0).unwrap().symbol, '花');
        assert!(buffer.get(3, 0).unwrap().is_continuation());
    }

    #[test]
    fn test_draw_text_clips() {
        let mut buffer = Buffer::new(5, 1);
        let used = buffer.draw_text(3, 0, "hello", Rgb::WHITE, Rgb::BLACK);
        assert_eq!(used, 2);
        assert_eq!(buffer.get(3, 0).unwrap().symbol, 'h');
        assert_eq!(buffer.get(4, 0).unwrap().symbol, 'e');
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = Buffer::new(4, 4);
        buffer.fill_rect(2, 2, 10, 10, Cell::new('#'));
        assert_eq!(buffer.get(3, 3).unwrap().symbol, '#');
        assert_eq!(buffer.get(1, 1).unwrap().symbol, ' ');
    }

    #[test]
    fn test_resize_preserves_content() {
        let mut buffer = Buffer::new(4, 2);
        buffer.set(1, 1, Cell::new('k'));
        buffer.resize(8, 4);
        assert_eq!(buffer.get(1, 1).unwrap().symbol, 'k');
        buffer.resize(2, 2);
        assert_eq!(buffer.get(1, 1).unwrap().symbol, 'k');
        assert!(buffer.get(3, 0).is_none());
    }
}
