//! Actor Model: Message-passing concurrency for the card runtime.
//!
//! A simple actor system over crossbeam channels stands in for the event
//! loop a page would get for free:
//! - **Input Actor**: polls terminal events, forwards them to the main loop
//! - **Ticker Actor**: emits animation ticks for the hearts and flowers
//! - **Render Actor**: receives frame snapshots, diffs and flushes
//! - **Main Loop**: `select!`s over input and ticks; all card state lives
//!   here, so events are handled strictly one at a time
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐        Tick         │  Main Loop   │
//! │Ticker Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐    RenderCommand    │              │
//! │Render Thread │ ◀─────────────────  │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod renderer;
mod ticker;

pub use engine::{Engine, EngineConfig};
pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent, RenderCommand};
pub use renderer::RendererActor;
pub use ticker::{Tick, TickerActor};
