//! Heart Field Widget: floating hearts behind the card.
//!
//! A fixed population of hearts is spawned once at startup, each with its
//! own lane, start delay, and drift period. A heart rises bottom-to-top
//! over its period with a slight sway, then wraps and rises again, forever.
//! Position is a pure function of the ticker's elapsed time.

use super::traits::Widget;
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::layout::Rect;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::time::Duration;

/// Configuration for the heart field.
#[derive(Debug, Clone)]
pub struct HeartConfig {
    /// Number of hearts to spawn.
    pub count: usize,
    /// Start delay range in seconds.
    pub delay_range: (f32, f32),
    /// Drift period range in seconds.
    pub period_range: (f32, f32),
    /// Glyph drawn for each heart.
    pub glyph: char,
    /// Palette cycled across hearts.
    pub colors: [Rgb; 3],
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            count: 24,
            delay_range: (0.0, 8.0),
            period_range: (8.0, 14.0),
            glyph: '♥',
            colors: [
                Rgb::from_u32(0xE25563),
                Rgb::from_u32(0xD98BA0),
                Rgb::from_u32(0xB03A5B),
            ],
        }
    }
}

/// One heart's fixed animation parameters.
#[derive(Debug, Clone, Copy)]
struct Heart {
    /// Horizontal lane as a fraction of the field width.
    lane: f32,
    /// Seconds before the first ascent starts.
    delay: f32,
    /// Seconds per ascent.
    period: f32,
}

/// The drifting heart backdrop.
#[derive(Debug)]
pub struct HeartField {
    /// Field bounds (normally the whole screen).
    bounds: Rect,
    /// Spawned hearts.
    hearts: Vec<Heart>,
    /// Elapsed animation time in seconds.
    elapsed: f32,
    /// Configuration.
    config: HeartConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl HeartField {
    /// Spawn a heart field with fresh randomness.
    pub fn new(config: HeartConfig) -> Self {
        Self::from_rng(config, &mut SmallRng::from_rng(&mut rand::rng()))
    }

    /// Spawn a heart field with deterministic randomness.
    pub fn with_seed(config: HeartConfig, seed: u64) -> Self {
        Self::from_rng(config, &mut SmallRng::seed_from_u64(seed))
    }

    fn from_rng(config: HeartConfig, rng: &mut SmallRng) -> Self {
        let hearts = (0..config.count)
            .map(|_| Heart {
                lane: rng.random_range(0.0..1.0),
                delay: rng.random_range(config.delay_range.0..config.delay_range.1),
                period: rng.random_range(config.period_range.0..config.period_range.1),
            })
            .collect();
        Self {
            bounds: Rect::ZERO,
            hearts,
            elapsed: 0.0,
            config,
            dirty: true,
        }
    }

    /// Number of hearts in the field.
    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }
}

impl Widget for HeartField {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        if self.bounds.width == 0 || self.bounds.height < 2 {
            return;
        }
        for (index, heart) in self.hearts.iter().enumerate() {
            let t = self.elapsed - heart.delay;
            if t < 0.0 {
                continue;
            }
            let progress = (t % heart.period) / heart.period;

            // Rise bottom-to-top with a gentle sway.
            let rise = (self.bounds.height - 1) as f32 * (1.0 - progress);
            let sway = (progress * TAU * 2.0).sin() * 1.5;
            let column = heart.lane * (self.bounds.width - 1) as f32 + sway;

            let x = self.bounds.x + (column.clamp(0.0, (self.bounds.width - 1) as f32)) as u16;
            let y = self.bounds.y + rise as u16;

            let color = self.config.colors[index % self.config.colors.len()];
            let modifiers = if progress > 0.75 {
                // Fade near the top.
                Modifiers::DIM
            } else {
                Modifiers::empty()
            };
            let bg = buffer.get(x, y).map_or(Rgb::DEFAULT_BG, |cell| cell.bg);
            buffer.set(
                x,
                y,
                Cell::new(self.config.glyph)
                    .with_fg(color)
                    .with_bg(bg)
                    .with_modifiers(modifiers),
            );
        }
    }

    fn handle_input(&mut self, _event: &InputEvent) -> bool {
        false
    }

    fn tick(&mut self, elapsed: Duration) {
        self.elapsed = elapsed.as_secs_f32();
        self.dirty = true;
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
    fn test_spawn_parameters_within_ranges() {
        let field = HeartField::with_seed(HeartConfig::default(), 9);
        assert_eq!(field.len(), 24);
        for heart in &field.hearts {
            assert!((0.0..1.0).contains(&heart.lane));
            assert!((0.0..8.0).contains(&heart.delay));
            assert!((8.0..14.0).contains(&heart.period));
        }
    }

    #[test]
    fn test_render_stays_inside_bounds() {
        let mut field = HeartField::with_seed(HeartConfig::default(), 3);
        field.set_bounds(Rect::new(2, 1, 40, 20));
        field.tick(Duration::from_secs(30));

        let mut buffer = Buffer::new(60, 30);
        field.render(&mut buffer);

        for y in 0..30 {
            for x in 0..60 {
                if buffer.get(x, y).unwrap().symbol == '♥' {
                    assert!(field.bounds().contains(x, y), "heart outside at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_delayed_hearts_absent_at_start() {
        let config = HeartConfig {
            delay_range: (5.0, 8.0),
            ..HeartConfig::default()
        };
        let mut field = HeartField::with_seed(config, 4);
        field.set_bounds(Rect::new(0, 0, 40, 20));
        field.tick(Duration::from_secs(1));

        let mut buffer = Buffer::new(40, 20);
        field.render(&mut buffer);

        let drawn = buffer
            .rows()
            .flatten()
            .filter(|cell| cell.symbol == '♥')
            .count();
        assert_eq!(drawn, 0);
    }
}
