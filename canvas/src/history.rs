//! Snapshot history: PNG-encoded canvas states and the cursor that walks them.
//!
//! Undo/redo is snapshot-based: every committed edit captures the whole
//! surface as an encoded image and appends it to an ordered sequence. The
//! cursor indexes the snapshot currently shown on the surface. Undo moves the
//! cursor back, redo moves it forward, and a new edit while the cursor is
//! behind the end discards everything ahead of it — the history is strictly
//! linear, with no branching.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::io::Cursor;

use thiserror::Error;

use crate::consts::MAX_HISTORY;
use crate::surface::Surface;

/// Failure while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("png encode failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("png decode failed: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("snapshot is {snapshot_w}x{snapshot_h} but surface is {surface_w}x{surface_h}")]
    SizeMismatch {
        snapshot_w: u32,
        snapshot_h: u32,
        surface_w: u32,
        surface_h: u32,
    },
    #[error("snapshot decoded to {got} bytes, expected {expected}")]
    PixelLength { got: usize, expected: usize },
}

/// A PNG-encoded copy of the full surface at one history point.
#[derive(Debug, Clone)]
pub struct Snapshot {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Snapshot {
    /// Encode the current surface pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Encode`] if PNG encoding fails.
    pub fn capture(surface: &Surface) -> Result<Self, SnapshotError> {
        let mut data = Vec::new();
        let mut encoder = png::Encoder::new(&mut data, surface.width(), surface.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(surface.pixels())?;
        writer.finish()?;
        Ok(Self { width: surface.width(), height: surface.height(), data })
    }

    /// Decode this snapshot back onto the surface, replacing all pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Decode`] on a malformed image,
    /// [`SnapshotError::SizeMismatch`] if the snapshot and surface dimensions
    /// differ, or [`SnapshotError::PixelLength`] if the decoded payload does
    /// not cover the surface.
    pub fn restore_into(&self, surface: &mut Surface) -> Result<(), SnapshotError> {
        if self.width != surface.width() || self.height != surface.height() {
            return Err(SnapshotError::SizeMismatch {
                snapshot_w: self.width,
                snapshot_h: self.height,
                surface_w: surface.width(),
                surface_h: surface.height(),
            });
        }
        let decoder = png::Decoder::new(Cursor::new(&self.data));
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        buf.truncate(info.buffer_size());
        if !surface.restore_pixels(&buf) {
            return Err(SnapshotError::PixelLength {
                got: buf.len(),
                expected: surface.pixels().len(),
            });
        }
        Ok(())
    }

    /// Width of the encoded image in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the encoded image in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of the encoded payload in bytes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.data.len()
    }
}

/// Ordered snapshot sequence plus the cursor marking the active state.
///
/// Invariants: the sequence is never empty, the cursor always indexes a valid
/// entry, and the sequence never exceeds [`MAX_HISTORY`] entries.
#[derive(Debug)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// Create a history seeded with the initial (blank) state.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self { snapshots: vec![initial], cursor: 0 }
    }

    /// Commit a new state: discard everything ahead of the cursor, append,
    /// and advance. Drops the oldest entry once the cap is reached.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor += 1;
        if self.snapshots.len() > MAX_HISTORY {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step the cursor back, returning the snapshot to restore.
    /// `None` when already at the oldest state.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step the cursor forward, returning the snapshot to restore.
    /// `None` when already at the newest state.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Whether the cursor can move back.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether the cursor is behind the newest state.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// The snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Number of snapshots currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the initial state is never discarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Position of the cursor within the sequence.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
