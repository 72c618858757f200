//! Widgets: the card's visual components.
//!
//! Everything on screen implements the [`Widget`] trait and is composed by
//! the app, which owns bounds, routes events, and forwards animation time:
//! - [`HeartField`]: the drifting heart backdrop
//! - [`FlowerField`]: the burst launched on final routes
//! - [`Button`]: the confirm button (and safe zone)
//! - [`RunawayButton`]: the evasive button
//! - [`HintBar`]: the key-hint line

mod button;
mod flowers;
mod hearts;
mod hint_bar;
mod runaway;
mod traits;

pub use button::{Button, ButtonConfig};
pub use flowers::{FlowerConfig, FlowerField};
pub use hearts::{HeartConfig, HeartField};
pub use hint_bar::{HintBar, HintBarConfig};
pub use runaway::{RunawayButton, RunawayConfig, RunawayState};
pub use traits::Widget;
