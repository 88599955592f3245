//! The drawing engine: tool state, gesture handling, and undo/redo.
//!
//! `Engine` owns the surface, the snapshot history, and the gesture state
//! machine. Pointer handlers mutate the surface immediately (freehand tools)
//! or rebuild a rubber-band preview over a captured base (shape tools), and
//! commit one history snapshot per completed gesture. Handlers return an
//! [`Action`] telling the host whether the surface needs re-blitting.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts::{MAX_BRUSH_PX, MIN_BRUSH_PX};
use crate::history::{History, Snapshot, SnapshotError};
use crate::input::{InputState, Point, Tool, ToolState};
use crate::render;
use crate::surface::{BACKGROUND, Rgba, Surface};

/// What the host should do after an input handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing visible changed.
    None,
    /// The surface pixels changed; blit them to the visible canvas.
    RenderNeeded,
}

/// The full drawing engine for one canvas surface.
pub struct Engine {
    surface: Surface,
    history: History,
    tools: ToolState,
    input: InputState,
}

impl Engine {
    /// Create an engine with a blank gridded surface of the given size and
    /// that blank state as the first history entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial snapshot cannot be encoded.
    pub fn new(width: u32, height: u32) -> Result<Self, SnapshotError> {
        let surface = Surface::new(width, height);
        let initial = Snapshot::capture(&surface)?;
        Ok(Self {
            surface,
            history: History::new(initial),
            tools: ToolState::default(),
            input: InputState::Idle,
        })
    }

    // --- Tool state ---

    /// Set the active tool. Takes effect at the next pointer-down.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.tool = tool;
    }

    /// Set the stroke color.
    pub fn set_color(&mut self, color: Rgba) {
        self.tools.color = color;
    }

    /// Set the brush width, clamped to the selectable range.
    pub fn set_brush_width(&mut self, width: u32) {
        self.tools.width = width.clamp(MIN_BRUSH_PX, MAX_BRUSH_PX);
    }

    /// The color a freehand stroke paints with: the active color for the
    /// brush, the background color for the eraser.
    fn stroke_color(&self) -> Rgba {
        match self.tools.tool {
            Tool::Eraser => BACKGROUND,
            _ => self.tools.color,
        }
    }

    // --- Pointer events ---

    /// Begin a gesture. Freehand tools stamp a dot immediately; shape tools
    /// capture the current pixels as the preview base.
    pub fn pointer_down(&mut self, pt: Point) -> Action {
        if !matches!(self.input, InputState::Idle) {
            return Action::None;
        }
        if self.tools.tool.is_freehand() {
            let color = self.stroke_color();
            render::stamp_dot(&mut self.surface, pt, self.tools.width, color);
            self.input = InputState::Stroking { last: pt };
            Action::RenderNeeded
        } else {
            self.input = InputState::DrawingShape {
                anchor: pt,
                base: self.surface.clone_pixels(),
            };
            Action::None
        }
    }

    /// Continue a gesture: extend the stroke or rebuild the shape preview.
    pub fn pointer_move(&mut self, pt: Point) -> Action {
        match &mut self.input {
            InputState::Idle => Action::None,
            InputState::Stroking { last } => {
                let from = *last;
                *last = pt;
                let color = self.stroke_color();
                render::stroke_segment(&mut self.surface, from, pt, self.tools.width, color);
                Action::RenderNeeded
            }
            InputState::DrawingShape { anchor, base } => {
                let anchor = *anchor;
                self.surface.restore_pixels(base);
                self.draw_shape(anchor, pt);
                Action::RenderNeeded
            }
        }
    }

    /// Finish the gesture at `pt` and commit one history snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the committed snapshot cannot be encoded.
    pub fn pointer_up(&mut self, pt: Point) -> Result<Action, SnapshotError> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Ok(Action::None),
            InputState::Stroking { last } => {
                let color = self.stroke_color();
                render::stroke_segment(&mut self.surface, last, pt, self.tools.width, color);
                self.commit()?;
                Ok(Action::RenderNeeded)
            }
            InputState::DrawingShape { anchor, base } => {
                self.surface.restore_pixels(&base);
                self.draw_shape(anchor, pt);
                self.commit()?;
                Ok(Action::RenderNeeded)
            }
        }
    }

    /// The pointer left the surface: commit the in-flight gesture as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the committed snapshot cannot be encoded.
    pub fn pointer_leave(&mut self) -> Result<Action, SnapshotError> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Ok(Action::None),
            InputState::Stroking { .. } | InputState::DrawingShape { .. } => {
                self.commit()?;
                Ok(Action::RenderNeeded)
            }
        }
    }

    // --- History ---

    /// Step back one history entry and restore it onto the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored snapshot cannot be decoded.
    pub fn undo(&mut self) -> Result<Action, SnapshotError> {
        if !matches!(self.input, InputState::Idle) {
            return Ok(Action::None);
        }
        match self.history.undo() {
            Some(snapshot) => {
                snapshot.restore_into(&mut self.surface)?;
                Ok(Action::RenderNeeded)
            }
            None => Ok(Action::None),
        }
    }

    /// Step forward one history entry and restore it onto the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored snapshot cannot be decoded.
    pub fn redo(&mut self) -> Result<Action, SnapshotError> {
        if !matches!(self.input, InputState::Idle) {
            return Ok(Action::None);
        }
        match self.history.redo() {
            Some(snapshot) => {
                snapshot.restore_into(&mut self.surface)?;
                Ok(Action::RenderNeeded)
            }
            None => Ok(Action::None),
        }
    }

    /// Repaint the blank gridded background and commit it as a new history
    /// entry, so clearing is itself undoable.
    ///
    /// # Errors
    ///
    /// Returns an error if the committed snapshot cannot be encoded.
    pub fn clear(&mut self) -> Result<Action, SnapshotError> {
        self.input = InputState::Idle;
        self.surface.paint_background();
        self.commit()?;
        Ok(Action::RenderNeeded)
    }

    fn commit(&mut self) -> Result<(), SnapshotError> {
        let snapshot = Snapshot::capture(&self.surface)?;
        self.history.push(snapshot);
        Ok(())
    }

    fn draw_shape(&mut self, anchor: Point, pt: Point) {
        let color = self.tools.color;
        let width = self.tools.width;
        match self.tools.tool {
            Tool::Rect => render::stroke_rect(&mut self.surface, anchor, pt, width, color),
            Tool::Circle => {
                let radius = (pt.x - anchor.x).hypot(pt.y - anchor.y);
                render::stroke_circle(&mut self.surface, anchor, radius, width, color);
            }
            Tool::Line => render::stroke_segment(&mut self.surface, anchor, pt, width, color),
            // Freehand tools never reach here; they stroke incrementally.
            Tool::Brush | Tool::Eraser => {}
        }
    }

    // --- Queries ---

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Surface width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    /// Surface height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Read-only view of the surface pixels for blitting.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        self.surface.pixels()
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The snapshot history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current tool selection.
    #[must_use]
    pub fn tools(&self) -> ToolState {
        self.tools
    }
}
