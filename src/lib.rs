//! # Keepsake
//!
//! An interactive greeting card for the terminal.
//!
//! The card shows one of several named "route" sections, floats decorative
//! hearts behind it, bursts into flowers on final routes, and features a
//! button that evades the mouse a bounded number of times before giving up.
//!
//! ## Core Concepts
//!
//! - **Actor model**: isolated threads for input, animation ticks, and
//!   rendering; all card state is owned by the main loop
//! - **Double-buffered rendering**: frame snapshots diffed into minimal ANSI
//! - **Pure placement**: the evasive button's next position is computed from
//!   measured geometry, with no screen access
//!
//! ## Example
//!
//! ```rust,ignore
//! use keepsake::{Placer, Size};
//!
//! let placer = Placer::new();
//! let mut rng = rand::rng();
//! let (left, top) = placer.place(&mut rng, Size::new(80, 40), Size::new(300, 100), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod card;
pub mod guard;
pub mod layout;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use actor::{
    Engine, EngineConfig, InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent, Tick,
    TickerActor,
};
pub use buffer::{Buffer, Cell, Modifiers, Rgb};
pub use card::{CardConfig, Deck, RouteMap, Section, SectionKind};
pub use guard::CaptureGuard;
pub use layout::{CardFrame, Placer, PlacerConfig, Rect, Size};
pub use widget::{
    Button, ButtonConfig, FlowerConfig, FlowerField, HeartConfig, HeartField, HintBar,
    HintBarConfig, RunawayButton, RunawayConfig, RunawayState, Widget,
};
