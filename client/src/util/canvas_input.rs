//! Pointer/keyboard mapping between DOM events and engine types.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::input::{Button, Point};

/// Map a DOM `button` code to the engine button.
#[must_use]
pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

/// Surface-space position of a pointer event, relative to the target element.
#[must_use]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// History action requested by a keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
}

/// Resolve Ctrl+Z / Ctrl+Shift+Z / Ctrl+Y (or the Cmd equivalents) to a
/// history action. Returns `None` for every other combination.
#[must_use]
pub fn shortcut_action(key: &str, ctrl: bool, meta: bool, shift: bool) -> Option<ShortcutAction> {
    if !(ctrl || meta) {
        return None;
    }
    match (key.to_ascii_lowercase().as_str(), shift) {
        ("z", false) => Some(ShortcutAction::Undo),
        ("z", true) | ("y", _) => Some(ShortcutAction::Redo),
        _ => None,
    }
}
