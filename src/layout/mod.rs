//! Layout module: geometry for the card and the runaway button.
//!
//! Layouts are computed once at startup and again on terminal resize.
//! Placement is pure arithmetic over measured rectangles; nothing in this
//! module touches the screen.

mod frame;
mod place;
mod rect;

pub use frame::{CardFrame, CARD_MAX_WIDTH, COMPACT_WIDTH, MIN_ACTIONS_HEIGHT};
pub use place::{Placer, PlacerConfig, Size};
pub use rect::Rect;
