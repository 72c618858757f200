//! Runaway Button Widget: evades the pointer, then gives up.
//!
//! Hovering or pressing the button relocates it inside its boundary via the
//! evasive placer, away from the confirm button's safe zone. Each
//! relocation is an "escape"; after `max_escapes` of them the button
//! freezes back at its in-flow position for good and behaves like a plain
//! label from then on.
//!
//! All of the escape state lives on the instance; the owner feeds it
//! geometry on layout changes and events from the main loop.

use super::traits::Widget;
use crate::actor::{InputEvent, MouseButton};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::layout::{Placer, Rect, Size};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Lifecycle of the runaway button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunawayState {
    /// Still evading.
    Active,
    /// Done evading; back in flow. Terminal.
    Frozen,
}

/// Configuration for the runaway button widget.
#[derive(Debug, Clone)]
pub struct RunawayConfig {
    /// Label text color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Triggers before freezing.
    pub max_escapes: u32,
}

impl Default for RunawayConfig {
    fn default() -> Self {
        Self {
            fg: Rgb::WHITE,
            bg: Rgb::from_u32(0x3A3F58),
            max_escapes: 6,
        }
    }
}

/// The evasive button.
#[derive(Debug)]
pub struct RunawayButton {
    /// Label text.
    label: String,
    /// Current on-screen bounds.
    bounds: Rect,
    /// In-flow position, restored when frozen.
    home: Rect,
    /// Bounding region for placements (absolute coordinates).
    boundary: Rect,
    /// The confirm button's bounds (absolute, unexpanded).
    safe_zone: Option<Rect>,
    /// Placement geometry.
    placer: Placer,
    /// Randomness for placements.
    rng: SmallRng,
    /// Successful relocations so far.
    escape_count: u32,
    /// Lifecycle state.
    state: RunawayState,
    /// Whether the pointer was inside the bounds at the last move event.
    hovered: bool,
    /// Configuration.
    config: RunawayConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl RunawayButton {
    /// Create a new runaway button.
    pub fn new(label: impl Into<String>, placer: Placer) -> Self {
        let mut button = Self::with_seed(label, placer, 0);
        button.rng = SmallRng::from_rng(&mut rand::rng());
        button
    }

    /// Create a runaway button with deterministic placement randomness.
    pub fn with_seed(label: impl Into<String>, placer: Placer, seed: u64) -> Self {
        Self {
            label: label.into(),
            bounds: Rect::ZERO,
            home: Rect::ZERO,
            boundary: Rect::ZERO,
            safe_zone: None,
            placer,
            rng: SmallRng::seed_from_u64(seed),
            escape_count: 0,
            state: RunawayState::Active,
            hovered: false,
            config: RunawayConfig::default(),
            dirty: true,
        }
    }

    /// Override the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RunawayConfig) -> Self {
        self.config = config;
        self
    }

    /// Columns the button occupies: the label plus a space either side.
    pub fn desired_width(&self) -> u16 {
        self.label.chars().count() as u16 + 2
    }

    /// Relocations performed so far.
    pub const fn escape_count(&self) -> u32 {
        self.escape_count
    }

    /// Whether the button has frozen.
    pub fn is_frozen(&self) -> bool {
        self.state == RunawayState::Frozen
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> RunawayState {
        self.state
    }

    /// Re-measure the button's world after a layout change.
    ///
    /// `home` is the in-flow spot, `boundary` the region placements stay
    /// inside, `safe_zone` the confirm button's bounds (unexpanded). The
    /// current evasive position survives a relayout; the home position is
    /// (re)applied when the button has not escaped yet or is frozen.
    pub fn set_geometry(&mut self, home: Rect, boundary: Rect, safe_zone: Option<Rect>) {
        self.home = home;
        self.boundary = boundary;
        self.safe_zone = safe_zone;
        if self.escape_count == 0 || self.is_frozen() {
            self.bounds = home;
        }
        self.dirty = true;
    }

    /// One trigger of the evasion state machine.
    ///
    /// While `Active`, performs one placement and counts the escape,
    /// freezing when the count reaches the maximum. `Frozen` is terminal:
    /// triggering does nothing.
    pub fn trigger(&mut self) {
        if self.is_frozen() {
            return;
        }
        if self.escape_count >= self.config.max_escapes {
            self.freeze();
            return;
        }
        self.relocate();
        self.escape_count += 1;
        if self.escape_count >= self.config.max_escapes {
            self.freeze();
        }
        self.dirty = true;
    }

    fn freeze(&mut self) {
        self.state = RunawayState::Frozen;
        self.bounds = self.home;
        self.dirty = true;
    }

    fn relocate(&mut self) {
        let movable = Size::new(self.desired_width(), 1);
        let region = Size::new(self.boundary.width, self.boundary.height);

        // The placer works in region-relative offsets; translate the safe
        // zone into that space and grow it by the placement padding.
        let padding = self.placer.padding();
        let safe = self.safe_zone.map(|zone| {
            Rect::new(
                zone.x.saturating_sub(self.boundary.x),
                zone.y.saturating_sub(self.boundary.y),
                zone.width,
                zone.height,
            )
            .expand(padding)
        });

        let (x, y) = self.placer.place(&mut self.rng, movable, region, safe);
        self.bounds = Rect::new(
            self.boundary.x.saturating_add(x),
            self.boundary.y.saturating_add(y),
            movable.width,
            movable.height,
        );
    }
}

impl Widget for RunawayButton {
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
        buffer.fill_rect(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.bounds.height,
            Cell::new(' ').with_bg(self.config.bg),
        );
        let text_len = self.label.chars().count() as u16;
        let text_x = self.bounds.x + self.bounds.width.saturating_sub(text_len) / 2;
        buffer.draw_styled(
            text_x,
            self.bounds.y,
            &self.label,
            self.config.fg,
            self.config.bg,
            Modifiers::BOLD,
        );
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::MouseMove(mouse) => {
                let inside = self.bounds.contains(mouse.x, mouse.y);
                let entered = inside && !self.hovered;
                self.hovered = inside;
                if entered && !self.is_frozen() {
                    self.trigger();
                    // The button just moved out from under the pointer;
                    // re-derive hover against the new bounds.
                    self.hovered = self.bounds.contains(mouse.x, mouse.y);
                    return true;
                }
                false
            }
            InputEvent::MouseDown(mouse) => {
                if mouse.button == Some(MouseButton::Left)
                    && self.bounds.contains(mouse.x, mouse.y)
                    && !self.is_frozen()
                {
                    self.trigger();
                    return true;
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
    use crate::layout::PlacerConfig;

    fn cell_placer() -> Placer {
        Placer::with_config(PlacerConfig {
            padding: 2,
            ..PlacerConfig::default()
        })
    }

    fn button() -> RunawayButton {
        let mut button = RunawayButton::with_seed("No", cell_placer(), 11);
        button.set_geometry(
            Rect::new(30, 18, 4, 1),
            Rect::new(5, 3, 60, 20),
            Some(Rect::new(10, 18, 5, 1)),
        );
        button
    }

    fn move_to(x: u16, y: u16) -> InputEvent {
        InputEvent::MouseMove(MouseEvent {
            x,
            y,
            button: None,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_six_escapes_then_frozen_at_home() {
        let mut button = button();
        let home = button.bounds();

        for _ in 0..6 {
            button.trigger();
        }

        assert_eq!(button.escape_count(), 6);
        assert!(button.is_frozen());
        assert_eq!(button.bounds(), home);

        // Seventh trigger: no effect at all.
        button.trigger();
        assert_eq!(button.escape_count(), 6);
        assert_eq!(button.bounds(), home);
    }

    #[test]
    fn test_escape_count_never_exceeds_max() {
        let mut button = button();
        for _ in 0..20 {
            button.trigger();
            assert!(button.escape_count() <= 6);
        }
        assert_eq!(button.escape_count(), 6);
    }

    #[test]
    fn test_placements_stay_inside_padded_boundary() {
        let mut button = button();
        let boundary = Rect::new(5, 3, 60, 20);

        for _ in 0..5 {
            button.trigger();
            let bounds = button.bounds();
            // left offset in [2, 60-4-2], top offset in [2, 20-1-2]
            assert!(bounds.x >= boundary.x + 2);
            assert!(bounds.x + bounds.width <= boundary.x + 60 - 2);
            assert!(bounds.y >= boundary.y + 2);
            assert!(bounds.y + bounds.height <= boundary.y + 20 - 2);
        }
    }

    #[test]
    fn test_placements_avoid_expanded_safe_zone() {
        let mut button = RunawayButton::with_seed("No", cell_placer(), 5);
        let boundary = Rect::new(0, 0, 60, 24);
        let safe = Rect::new(4, 20, 6, 1);
        button.set_geometry(Rect::new(20, 20, 4, 1), boundary, Some(safe));

        for _ in 0..5 {
            button.trigger();
            assert!(
                !button.bounds().intersects(&safe.expand(2)),
                "landed on the safe zone at {:?}",
                button.bounds()
            );
        }
    }

    #[test]
    fn test_hover_edge_triggers_once_per_entry() {
        let mut button = button();

        button.handle_input(&move_to(31, 18));
        assert_eq!(button.escape_count(), 1);

        // Pointer parked far away, then re-approaches the new spot.
        button.handle_input(&move_to(0, 0));
        let bounds = button.bounds();
        button.handle_input(&move_to(bounds.x, bounds.y));
        assert_eq!(button.escape_count(), 2);
    }

    #[test]
    fn test_frozen_ignores_hover() {
        let mut button = button();
        for _ in 0..6 {
            button.trigger();
        }
        let home = button.bounds();

        let consumed = button.handle_input(&move_to(home.x, home.y));
        assert!(!consumed);
        assert_eq!(button.bounds(), home);
    }

    #[test]
    fn test_zero_max_escapes_freezes_without_moving() {
        let mut button = RunawayButton::with_seed("No", cell_placer(), 1).with_config(
            RunawayConfig {
                max_escapes: 0,
                ..RunawayConfig::default()
            },
        );
        button.set_geometry(Rect::new(8, 8, 4, 1), Rect::new(0, 0, 40, 20), None);

        button.trigger();
        assert!(button.is_frozen());
        assert_eq!(button.escape_count(), 0);
        assert_eq!(button.bounds(), Rect::new(8, 8, 4, 1));
    }
}
