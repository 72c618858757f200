//! Cell: The atomic unit of terminal display.
//!
//! The card draws single-character glyphs (hearts, flowers, box borders,
//! plain text), so a cell is a `char` plus colors and style flags. Wide
//! glyphs occupy two columns: the second column holds a continuation
//! marker that the diff engine skips when emitting output.

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Marker symbol stored in the trailing column of a wide glyph.
const CONTINUATION: char = '\0';

/// A single display cell: glyph, colors, and style.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The glyph shown in this cell.
    pub symbol: char,
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Style modifiers.
    pub modifiers: Modifiers,
}

impl Cell {
    /// Create a cell with the given glyph and default colors.
    #[inline]
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// An empty (space) cell with default colors.
    pub const EMPTY: Self = Self::new(' ');

    /// The trailing half of a wide glyph.
    #[inline]
    pub const fn continuation() -> Self {
        Self::new(CONTINUATION)
    }

    /// Whether this cell is the trailing half of a wide glyph.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.symbol == CONTINUATION
    }

    /// Columns this cell's glyph occupies (0 for a continuation marker).
    #[inline]
    pub fn display_width(&self) -> u8 {
        if self.is_continuation() {
            return 0;
        }
        self.symbol.width().unwrap_or(1) as u8
    }

    /// Builder: set the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Builder: set the background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Builder: set the style modifiers.
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell({:?} fg={:?} bg={:?} mods={:?})",
            self.symbol, self.fg, self.bg, self.modifiers
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.symbol, ' ');
        assert_eq!(cell.fg, Rgb::DEFAULT_FG);
        assert_eq!(cell.bg, Rgb::DEFAULT_BG);
        assert!(cell.modifiers.is_empty());
    }

    #[test]
    fn test_cell_builders() {
        let cell = Cell::new('♥')
            .with_fg(Rgb::new(255, 0, 80))
            .with_bg(Rgb::BLACK)
            .with_modifiers(Modifiers::BOLD | Modifiers::DIM);

        assert_eq!(cell.symbol, '♥');
        assert_eq!(cell.fg, Rgb::new(255, 0, 80));
        assert!(cell.modifiers.contains(Modifiers::BOLD));
        assert!(cell.modifiers.contains(Modifiers::DIM));
    }

    #[test]
    fn test_display_width() {
        assert_eq!(Cell::new('a').display_width(), 1);
        assert_eq!(Cell::new('♥').display_width(), 1);
        assert_eq!(Cell::new('花').display_width(), 2);
        assert_eq!(Cell::continuation().display_width(), 0);
    }

    #[test]
    fn test_rgb_from_hex() {
        let color = Rgb::from_u32(0xE25563);
        assert_eq!(color, Rgb::new(0xE2, 0x55, 0x63));
        assert_eq!(Rgb::from(0xFFFFFF_u32), Rgb::WHITE);
    }
}
