//! Capture guard: best-effort screenshot/print deterrents.
//!
//! The main loop drops any event this predicate matches before dispatching
//! it, the terminal analog of swallowing `contextmenu`, drag, and the
//! screenshot/print/save key chords on a page. It is a deterrent, not a
//! security mechanism: anything outside the raw-mode session (a compositor
//! screenshot, `tmux` capture) is untouched.
//!
//! Blocked:
//! - `PrintScreen`, `F12`
//! - Ctrl or Super with `p` / `s` / `u` (print, save, view-source)
//! - Super+Shift with `3` / `4` / `5` / `s` (macOS screenshot chords)
//! - Right mouse button (context-menu analog)
//! - Bracketed paste

use crate::actor::{InputEvent, KeyCode, KeyModifiers, MouseButton};

/// Stateless predicate over input events.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureGuard;

impl CaptureGuard {
    /// Create a new guard.
    pub const fn new() -> Self {
        Self
    }

    /// Whether this event should be swallowed before dispatch.
    pub fn intercepts(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key { code, modifiers } => Self::blocked_key(*code, *modifiers),
            InputEvent::MouseDown(mouse) => mouse.button == Some(MouseButton::Right),
            InputEvent::Paste(_) => true,
            _ => false,
        }
    }

    fn blocked_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::PrintScreen => true,
            KeyCode::F(12) => true,
            KeyCode::Char(c) => {
                let c = c.to_ascii_lowercase();
                let screenshot_chord = modifiers.super_key
                    && modifiers.shift
                    && matches!(c, '3' | '4' | '5' | 's');
                let print_save_chord = (modifiers.super_key || modifiers.control)
                    && matches!(c, 'p' | 's' | 'u');
                screenshot_chord || print_save_chord
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::MouseEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
        InputEvent::Key { code, modifiers }
    }

    const CTRL: KeyModifiers = KeyModifiers {
        control: true,
        shift: false,
        alt: false,
        super_key: false,
    };

    const SUPER_SHIFT: KeyModifiers = KeyModifiers {
        control: false,
        shift: true,
        alt: false,
        super_key: true,
    };

    #[test]
    fn test_blocks_print_screen_and_f12() {
        let guard = CaptureGuard::new();
        assert!(guard.intercepts(&key(KeyCode::PrintScreen, KeyModifiers::NONE)));
        assert!(guard.intercepts(&key(KeyCode::F(12), KeyModifiers::NONE)));
        assert!(!guard.intercepts(&key(KeyCode::F(1), KeyModifiers::NONE)));
    }

    #[test]
    fn test_blocks_print_save_chords() {
        let guard = CaptureGuard::new();
        for c in ['p', 's', 'u', 'P', 'S', 'U'] {
            assert!(guard.intercepts(&key(KeyCode::Char(c), CTRL)), "ctrl+{c}");
        }
        assert!(!guard.intercepts(&key(KeyCode::Char('p'), KeyModifiers::NONE)));
        assert!(!guard.intercepts(&key(KeyCode::Char('q'), CTRL)));
    }

    #[test]
    fn test_blocks_screenshot_chords() {
        let guard = CaptureGuard::new();
        for c in ['3', '4', '5', 's'] {
            assert!(guard.intercepts(&key(KeyCode::Char(c), SUPER_SHIFT)));
        }
        // shift alone is typing, not a chord
        let shift_only = KeyModifiers {
            shift: true,
            ..KeyModifiers::NONE
        };
        assert!(!guard.intercepts(&key(KeyCode::Char('3'), shift_only)));
    }

    #[test]
    fn test_blocks_right_click_and_paste() {
        let guard = CaptureGuard::new();
        let right_click = InputEvent::MouseDown(MouseEvent {
            x: 0,
            y: 0,
            button: Some(MouseButton::Right),
            modifiers: KeyModifiers::NONE,
        });
        let left_click = InputEvent::MouseDown(MouseEvent {
            x: 0,
            y: 0,
            button: Some(MouseButton::Left),
            modifiers: KeyModifiers::NONE,
        });

        assert!(guard.intercepts(&right_click));
        assert!(!guard.intercepts(&left_click));
        assert!(guard.intercepts(&InputEvent::Paste("secret".into())));
    }

    #[test]
    fn test_navigation_keys_pass_through() {
        let guard = CaptureGuard::new();
        assert!(!guard.intercepts(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(!guard.intercepts(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!guard.intercepts(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
