//! Widget trait: the seam every card component implements.

use crate::actor::InputEvent;
use crate::buffer::Buffer;
use crate::layout::Rect;
use std::time::Duration;

/// A UI component that can be rendered to a buffer and handle input.
///
/// Widgets are composed by the app, which owns their bounds and feeds them
/// events and animation time; they never query the screen themselves.
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Called when the layout changes (terminal resize).
    fn set_bounds(&mut self, bounds: Rect);

    /// Render this widget to the given buffer.
    ///
    /// The widget should only write to cells within its bounds.
    fn render(&self, buffer: &mut Buffer);

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed by this widget,
    /// `false` if it should propagate to other widgets.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Advance animation time.
    ///
    /// Static widgets ignore this; the hearts and flowers redraw from it.
    fn tick(&mut self, _elapsed: Duration) {}

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}
