//! Flower Field Widget: the burst shown on final routes.
//!
//! Dormant until [`FlowerField::launch`] is called; each launch clears the
//! field and scatters a fresh batch of flowers across its middle band.
//! Flowers bloom through glyph stages after a short per-flower delay and
//! then stay. Re-showing a final route relaunches the burst.

use super::traits::Widget;
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell, Rgb};
use crate::layout::Rect;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Glyphs a flower passes through while blooming.
const BLOOM_STAGES: [char; 3] = ['·', '✿', '❀'];

/// Seconds spent in each bloom stage before the final one.
const STAGE_SECONDS: f32 = 0.2;

/// Configuration for the flower field.
#[derive(Debug, Clone)]
pub struct FlowerConfig {
    /// Flowers per launch.
    pub count: usize,
    /// Horizontal spread as fractions of the field width.
    pub x_range: (f32, f32),
    /// Vertical spread as fractions of the field height.
    pub y_range: (f32, f32),
    /// Per-flower bloom delay range in seconds.
    pub delay_range: (f32, f32),
    /// Palette cycled across flowers.
    pub colors: [Rgb; 3],
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            count: 20,
            x_range: (0.10, 0.90),
            y_range: (0.40, 0.80),
            delay_range: (0.0, 0.6),
            colors: [
                Rgb::from_u32(0xE25563),
                Rgb::from_u32(0xE8B04B),
                Rgb::from_u32(0xD98BA0),
            ],
        }
    }
}

/// One flower's fixed spawn parameters.
#[derive(Debug, Clone, Copy)]
struct Flower {
    /// Horizontal position as a fraction of the field width.
    fx: f32,
    /// Vertical position as a fraction of the field height.
    fy: f32,
    /// Seconds after launch before blooming starts.
    delay: f32,
}

/// The launchable flower burst.
#[derive(Debug)]
pub struct FlowerField {
    /// Field bounds (normally the card body).
    bounds: Rect,
    /// Current batch; empty until the first launch.
    flowers: Vec<Flower>,
    /// Elapsed time at the last launch.
    launched_at: Option<f32>,
    /// Elapsed animation time in seconds.
    elapsed: f32,
    /// Spawn randomness.
    rng: SmallRng,
    /// Configuration.
    config: FlowerConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl FlowerField {
    /// Create a dormant flower field with fresh randomness.
    pub fn new(config: FlowerConfig) -> Self {
        Self::with_rng(config, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Create a dormant flower field with deterministic randomness.
    pub fn with_seed(config: FlowerConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: FlowerConfig, rng: SmallRng) -> Self {
        Self {
            bounds: Rect::ZERO,
            flowers: Vec::new(),
            launched_at: None,
            elapsed: 0.0,
            rng,
            config,
            dirty: true,
        }
    }

    /// Clear the field and scatter a fresh batch.
    pub fn launch(&mut self) {
        let config = self.config.clone();
        self.flowers = (0..config.count)
            .map(|_| Flower {
                fx: self.rng.random_range(config.x_range.0..config.x_range.1),
                fy: self.rng.random_range(config.y_range.0..config.y_range.1),
                delay: self.rng.random_range(config.delay_range.0..config.delay_range.1),
            })
            .collect();
        self.launched_at = Some(self.elapsed);
        self.dirty = true;
    }

    /// Whether a burst has been launched.
    pub const fn is_launched(&self) -> bool {
        self.launched_at.is_some()
    }

    /// Flowers in the current batch.
    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    /// Whether the field has no flowers.
    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }
}

impl Widget for FlowerField {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        let Some(launched_at) = self.launched_at else {
            return;
        };
        if self.bounds.width == 0 || self.bounds.height == 0 {
            return;
        }
        for (index, flower) in self.flowers.iter().enumerate() {
            let age = self.elapsed - launched_at - flower.delay;
            if age < 0.0 {
                continue;
            }
            let stage = ((age / STAGE_SECONDS) as usize).min(BLOOM_STAGES.len() - 1);

            let x = self.bounds.x + (flower.fx * (self.bounds.width - 1) as f32) as u16;
            let y = self.bounds.y + (flower.fy * (self.bounds.height - 1) as f32) as u16;

            let color = self.config.colors[index % self.config.colors.len()];
            let bg = buffer.get(x, y).map_or(Rgb::DEFAULT_BG, |cell| cell.bg);
            buffer.set(x, y, Cell::new(BLOOM_STAGES[stage]).with_fg(color).with_bg(bg));
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
    fn test_dormant_until_launched() {
        let mut field = FlowerField::with_seed(FlowerConfig::default(), 2);
        field.set_bounds(Rect::new(0, 0, 40, 20));
        field.tick(Duration::from_secs(5));

        let mut buffer = Buffer::new(40, 20);
        field.render(&mut buffer);
        let drawn = buffer
            .rows()
            .flatten()
            .filter(|cell| cell.symbol != ' ')
            .count();
        assert_eq!(drawn, 0);
        assert!(!field.is_launched());
    }

    #[test]
    fn test_launch_scatters_within_spread() {
        let mut field = FlowerField::with_seed(FlowerConfig::default(), 2);
        field.launch();
        assert_eq!(field.len(), 20);
        for flower in &field.flowers {
            assert!((0.10..0.90).contains(&flower.fx));
            assert!((0.40..0.80).contains(&flower.fy));
            assert!((0.0..0.6).contains(&flower.delay));
        }
    }

    #[test]
    fn test_blooms_settle_on_final_stage() {
        let mut field = FlowerField::with_seed(FlowerConfig::default(), 7);
        field.set_bounds(Rect::new(0, 0, 40, 20));
        field.launch();
        field.tick(Duration::from_secs(10));

        let mut buffer = Buffer::new(40, 20);
        field.render(&mut buffer);

        let glyphs: Vec<char> = buffer
            .rows()
            .flatten()
            .map(|cell| cell.symbol)
            .filter(|&c| c != ' ')
            .collect();
        assert!(!glyphs.is_empty());
        assert!(glyphs.iter().all(|&c| c == *BLOOM_STAGES.last().unwrap()));
    }

    #[test]
    fn test_relaunch_resets_the_batch() {
        let mut field = FlowerField::with_seed(FlowerConfig::default(), 7);
        field.launch();
        field.tick(Duration::from_secs(10));
        field.launch();

        // Fresh batch: blooming restarts from the first stage.
        let mut buffer = Buffer::new(40, 20);
        field.set_bounds(Rect::new(0, 0, 40, 20));
        field.render(&mut buffer);
        let any_final = buffer
            .rows()
            .flatten()
            .any(|cell| cell.symbol == *BLOOM_STAGES.last().unwrap());
        assert!(!any_final);
    }
}
