//! Evasive placement: where the runaway button lands next.
//!
//! Given the button's size, the bounding region's size, and an optional
//! avoidance rectangle, draw a padded uniform-random position inside the
//! region. Candidates overlapping the avoidance zone are redrawn a bounded
//! number of times; when the budget runs out, a deterministic clamp just
//! below the zone is used instead, so placement always terminates.
//!
//! The placer is pure geometry: it never touches a screen. Callers measure,
//! call [`Placer::place`], and apply the result.

use super::rect::Rect;
use rand::Rng;

/// The width/height pair of a movable element or bounding region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Width in layout units.
    pub width: u16,
    /// Height in layout units.
    pub height: u16,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Configuration for the placer.
#[derive(Debug, Clone)]
pub struct PlacerConfig {
    /// Inset kept between the element and every region edge.
    pub padding: u16,
    /// Redraw budget when a candidate overlaps the avoidance zone.
    pub max_attempts: u32,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            padding: 16,
            max_attempts: 12,
        }
    }
}

/// Computes evasive positions inside a bounding region.
#[derive(Debug, Clone, Default)]
pub struct Placer {
    config: PlacerConfig,
}

impl Placer {
    /// Create a placer with the default geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a placer with custom configuration.
    pub const fn with_config(config: PlacerConfig) -> Self {
        Self { config }
    }

    /// The configured edge padding.
    pub const fn padding(&self) -> u16 {
        self.config.padding
    }

    /// Pick a position for `movable` inside `region`, avoiding `safe_zone`.
    ///
    /// Returns `(left, top)` offsets within the region. The offsets lie in
    /// `[padding, region - movable - padding]` per axis; when the element
    /// does not fit, the range degenerates to `padding` and the result may
    /// overflow the region (callers clip at render time).
    ///
    /// `safe_zone` is expected in region-relative coordinates, already
    /// expanded by the caller's chosen margin (see [`Rect::expand`]). If the
    /// redraw budget is exhausted the vertical fallback lands just below the
    /// zone, clamped to the valid range; it is best-effort when the zone
    /// spans nearly the whole region.
    pub fn place<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        movable: Size,
        region: Size,
        safe_zone: Option<Rect>,
    ) -> (u16, u16) {
        let padding = self.config.padding;
        let max_x = region
            .width
            .saturating_sub(movable.width)
            .saturating_sub(padding)
            .max(padding);
        let max_y = region
            .height
            .saturating_sub(movable.height)
            .saturating_sub(padding)
            .max(padding);

        let mut x = rng.random_range(padding..=max_x);
        let mut y = rng.random_range(padding..=max_y);

        let Some(safe) = safe_zone else {
            return (x, y);
        };

        let overlaps = |x: u16, y: u16| {
            Rect::new(x, y, movable.width, movable.height).intersects(&safe)
        };

        let mut attempts = 0;
        while overlaps(x, y) && attempts < self.config.max_attempts {
            x = rng.random_range(padding..=max_x);
            y = rng.random_range(padding..=max_y);
            attempts += 1;
        }

        if attempts >= self.config.max_attempts {
            // Budget spent: drop just below the zone instead of looping.
            y = safe
                .bottom()
                .saturating_add(padding)
                .max(padding)
                .min(max_y);
        }

        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn test_position_stays_within_padded_region() {
        let placer = Placer::new();
        let movable = Size::new(80, 40);
        let region = Size::new(300, 100);

        for seed in 0..64 {
            let (x, y) = placer.place(&mut rng(seed), movable, region, None);
            assert!((16..=204).contains(&x), "left {x} out of range");
            assert!((16..=44).contains(&y), "top {y} out of range");
        }
    }

    #[test]
    fn test_degenerate_region_clamps_to_padding() {
        let placer = Placer::new();
        let (x, y) = placer.place(
            &mut rng(1),
            Size::new(80, 40),
            Size::new(20, 20),
            None,
        );
        assert_eq!((x, y), (16, 16));
    }

    #[test]
    fn test_avoids_safe_zone_when_room_exists() {
        let placer = Placer::new();
        let movable = Size::new(20, 10);
        let region = Size::new(300, 300);
        // Zone covers the full width of the top half; plenty of room below,
        // and the fallback also lands below, so every outcome must miss it.
        let safe = Rect::new(0, 0, 300, 120);

        for seed in 0..64 {
            let (x, y) = placer.place(&mut rng(seed), movable, region, Some(safe));
            assert!(
                !Rect::new(x, y, 20, 10).intersects(&safe),
                "seed {seed} overlapped at ({x}, {y})"
            );
        }
    }

    #[test]
    fn test_fallback_clamps_below_full_coverage_zone() {
        let placer = Placer::new();
        let movable = Size::new(20, 10);
        let region = Size::new(300, 100);
        // Zone swallows the whole candidate space: every draw overlaps and
        // the fallback engages. max_y = 100 - 10 - 16 = 74.
        let safe = Rect::new(0, 0, 300, 100);

        for seed in 0..16 {
            let (_, y) = placer.place(&mut rng(seed), movable, region, Some(safe));
            assert_eq!(y, 74);
        }
    }

    #[test]
    fn test_same_seed_same_position() {
        let placer = Placer::new();
        let movable = Size::new(10, 3);
        let region = Size::new(120, 40);
        let safe = Rect::new(40, 10, 30, 8);

        let a = placer.place(&mut rng(7), movable, region, Some(safe));
        let b = placer.place(&mut rng(7), movable, region, Some(safe));
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_padding_scales_bounds() {
        let placer = Placer::with_config(PlacerConfig {
            padding: 2,
            ..PlacerConfig::default()
        });
        let movable = Size::new(10, 3);
        let region = Size::new(60, 10);

        for seed in 0..32 {
            let (x, y) = placer.place(&mut rng(seed), movable, region, None);
            assert!((2..=48).contains(&x));
            assert!((2..=5).contains(&y));
        }
    }
}
