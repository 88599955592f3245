//! Local UI chrome state: active tool, color, brush size, and action requests.
//!
//! DESIGN
//! ======
//! The toolbar and the canvas host never reference each other. The toolbar
//! writes tool/color/size choices here and bumps a sequence counter to
//! request undo/redo/clear; the canvas host watches the counters and applies
//! the actions to the engine it owns.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::input::Tool;
use serde::{Deserialize, Serialize};

/// UI state for the drawing controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Currently active drawing tool.
    pub active_tool: Tool,
    /// Stroke color as a normalized lowercase `#rrggbb` string.
    pub color: String,
    /// Brush width in pixels.
    pub brush_size: u32,
    /// Bumped by the toolbar to request an undo.
    pub undo_seq: u64,
    /// Bumped by the toolbar to request a redo.
    pub redo_seq: u64,
    /// Bumped by the toolbar to request a canvas clear.
    pub clear_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tool: Tool::Brush,
            color: "#000000".to_owned(),
            brush_size: canvas::consts::DEFAULT_BRUSH_PX,
            undo_seq: 0,
            redo_seq: 0,
            clear_seq: 0,
        }
    }
}

/// The subset of [`UiState`] persisted across sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPrefs {
    pub active_tool: Tool,
    pub color: String,
    pub brush_size: u32,
}

impl UiState {
    /// Apply persisted preferences on top of the defaults, clamping the brush
    /// size back into the selectable range.
    #[must_use]
    pub fn with_prefs(prefs: UiPrefs) -> Self {
        Self {
            active_tool: prefs.active_tool,
            color: crate::util::color::normalize_hex_color(&prefs.color, "#000000"),
            brush_size: prefs
                .brush_size
                .clamp(canvas::consts::MIN_BRUSH_PX, canvas::consts::MAX_BRUSH_PX),
            ..Self::default()
        }
    }

    /// The preferences worth persisting from the current state.
    #[must_use]
    pub fn prefs(&self) -> UiPrefs {
        UiPrefs {
            active_tool: self.active_tool,
            color: self.color.clone(),
            brush_size: self.brush_size,
        }
    }
}
