//! Card frame: the responsive screen layout, recomputed on every resize.
//!
//! The frame splits the screen into the card (a bordered box centered
//! horizontally), its header/body/actions bands, and the hint line. It also
//! decides which rectangle bounds the runaway button: compact terminals let
//! the button roam the whole card interior; wider ones confine it to the
//! actions band, grown to a minimum height so there is room to roam.

use super::rect::Rect;

/// Below this width the frame switches to the compact arrangement.
pub const COMPACT_WIDTH: u16 = 52;

/// Minimum height of the actions band in the wide arrangement.
pub const MIN_ACTIONS_HEIGHT: u16 = 8;

/// The card never grows wider than this, however wide the terminal.
pub const CARD_MAX_WIDTH: u16 = 72;

/// Rows reserved for the section title inside the card.
const HEADER_HEIGHT: u16 = 2;

/// Actions band height in the compact arrangement (buttons only).
const COMPACT_ACTIONS_HEIGHT: u16 = 3;

/// Computed screen layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardFrame {
    /// The whole terminal.
    pub screen: Rect,
    /// The bordered card box.
    pub card: Rect,
    /// The card interior (inside the border).
    pub interior: Rect,
    /// Title band at the top of the interior.
    pub header: Rect,
    /// Free-text band between header and actions.
    pub body: Rect,
    /// Button band at the bottom of the interior.
    pub actions: Rect,
    /// Key-hint line at the bottom of the screen.
    pub hint: Rect,
    /// Whether the compact arrangement is active.
    pub compact: bool,
}

impl CardFrame {
    /// Compute the frame for a terminal of the given size.
    ///
    /// Degenerate sizes produce empty rectangles; callers skip drawing into
    /// empty rects rather than failing.
    pub fn compute(width: u16, height: u16) -> Self {
        let screen = Rect::from_size(width, height);
        let compact = width < COMPACT_WIDTH;

        let hint = if height > 0 {
            Rect::new(0, height - 1, width, 1)
        } else {
            Rect::ZERO
        };

        // One row of margin above, the hint line plus one row of gap below.
        let card_width = width.saturating_sub(2).min(CARD_MAX_WIDTH);
        let card_height = height.saturating_sub(3);
        let card = Rect::new((width - card_width) / 2, 1, card_width, card_height);
        let interior = card.shrink(1);

        let header_height = HEADER_HEIGHT.min(interior.height);
        let header = Rect::new(interior.x, interior.y, interior.width, header_height);

        let actions_height = if compact {
            COMPACT_ACTIONS_HEIGHT
        } else {
            MIN_ACTIONS_HEIGHT
        }
        .min(interior.height.saturating_sub(header_height));
        let actions = Rect::new(
            interior.x,
            interior.bottom().saturating_sub(actions_height),
            interior.width,
            actions_height,
        );

        let body_top = header.bottom();
        let body = Rect::new(
            interior.x,
            body_top,
            interior.width,
            actions.y.saturating_sub(body_top),
        );

        Self {
            screen,
            card,
            interior,
            header,
            body,
            actions,
            hint,
            compact,
        }
    }

    /// The rectangle bounding the runaway button's placements.
    ///
    /// Compact terminals hand over the whole card interior; otherwise the
    /// actions band (already held at [`MIN_ACTIONS_HEIGHT`]) is the boundary.
    pub const fn boundary(&self) -> Rect {
        if self.compact {
            self.interior
        } else {
            self.actions
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_flips_at_threshold() {
        assert!(CardFrame::compute(COMPACT_WIDTH - 1, 24).compact);
        assert!(!CardFrame::compute(COMPACT_WIDTH, 24).compact);
    }

    #[test]
    fn test_boundary_follows_arrangement() {
        let compact = CardFrame::compute(40, 24);
        assert_eq!(compact.boundary(), compact.interior);

        let wide = CardFrame::compute(100, 30);
        assert_eq!(wide.boundary(), wide.actions);
        assert_eq!(wide.actions.height, MIN_ACTIONS_HEIGHT);
    }

    #[test]
    fn test_bands_tile_the_interior() {
        let frame = CardFrame::compute(80, 24);
        assert_eq!(frame.header.y, frame.interior.y);
        assert_eq!(frame.body.y, frame.header.bottom());
        assert_eq!(frame.actions.y, frame.body.bottom());
        assert_eq!(frame.actions.bottom(), frame.interior.bottom());
    }

    #[test]
    fn test_card_is_centered_and_capped() {
        let frame = CardFrame::compute(200, 40);
        assert_eq!(frame.card.width, CARD_MAX_WIDTH);
        let left = frame.card.x;
        let right = frame.screen.width - frame.card.right();
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        for (w, h) in [(0, 0), (1, 1), (2, 3), (5, 2)] {
            let frame = CardFrame::compute(w, h);
            assert!(frame.interior.is_empty() || frame.interior.width <= w);
        }
    }
}
