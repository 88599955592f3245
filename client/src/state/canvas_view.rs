//! State published by the canvas host for the toolbar to read.

#[cfg(test)]
#[path = "canvas_view_test.rs"]
mod canvas_view_test;

/// History availability and render telemetry, updated after every engine call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasViewState {
    /// Whether an undo step is currently available.
    pub can_undo: bool,
    /// Whether a redo step is currently available.
    pub can_redo: bool,
    /// Duration of the most recent blit in milliseconds, if one has happened.
    pub last_render_ms: Option<f64>,
}
