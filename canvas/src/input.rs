//! Input model: tools, pointer buttons, and the gesture state machine.
//!
//! This module defines the types consumed by the drawing engine. `Tool` and
//! `ToolState` capture the user's intent at the time of a pointer event.
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying the context needed to extend a stroke or rebuild a
//! shape preview on every move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BRUSH_PX;
use crate::surface::Rgba;

/// A point in surface-space pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which drawing tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand painting in the active color (default).
    #[default]
    Brush,
    /// Freehand painting in the background color.
    Eraser,
    /// Rectangle outline dragged between two corners.
    Rect,
    /// Circle outline centered on the drag anchor.
    Circle,
    /// Straight line segment between anchor and pointer.
    Line,
}

impl Tool {
    /// Whether this tool paints continuously along the pointer path.
    #[must_use]
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Brush | Self::Eraser)
    }

    /// Whether this tool rubber-bands a shape preview between anchor and pointer.
    #[must_use]
    pub fn is_shape(self) -> bool {
        matches!(self, Self::Rect | Self::Circle | Self::Line)
    }
}

/// Mouse/pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// The user's current tool selection: active tool, stroke color, brush width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    /// Currently active drawing tool.
    pub tool: Tool,
    /// Stroke color applied by the brush and shape tools.
    pub color: Rgba,
    /// Stroke width in pixels.
    pub width: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: Rgba::opaque(0, 0, 0),
            width: DEFAULT_BRUSH_PX,
        }
    }
}

/// Internal state for the gesture state machine.
///
/// Each active variant carries the context needed to continue the gesture on
/// the next pointer event and to commit it on release.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A freehand stroke is being painted.
    Stroking {
        /// Surface position of the previous pointer event; the next segment
        /// is drawn from here.
        last: Point,
    },
    /// A shape is being rubber-banded from its anchor.
    DrawingShape {
        /// The surface position where the drag started.
        anchor: Point,
        /// Raw pixels captured at pointer-down; restored before each preview
        /// redraw so previews never accumulate.
        base: Vec<u8>,
    },
}
