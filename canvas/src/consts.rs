//! Shared numeric constants for the canvas crate.

// ── Background grid ─────────────────────────────────────────────

/// Spacing between grid lines, in pixels.
pub const GRID_SPACING_PX: u32 = 20;

// ── Brush ───────────────────────────────────────────────────────

/// Smallest selectable brush width, in pixels.
pub const MIN_BRUSH_PX: u32 = 1;

/// Largest selectable brush width, in pixels.
pub const MAX_BRUSH_PX: u32 = 50;

/// Brush width when no preference has been set.
pub const DEFAULT_BRUSH_PX: u32 = 5;

// ── History ─────────────────────────────────────────────────────

/// Maximum number of snapshots retained; the oldest entry is dropped first.
pub const MAX_HISTORY: usize = 50;
